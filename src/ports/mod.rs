// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the interfaces the loader depends on: where a config is
//! stored and how a config key is checked. Adapters provide the implementations.

pub mod store;
pub mod validator;

// Re-export commonly used types
pub use store::ConfigStore;
pub use validator::{Validator, ValidatorSet};
