// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer that orchestrates loading and validation.

pub mod loader;

pub use loader::{load_or_exit, ConfigLoader};
