// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module holds the values the loader produces and the errors it reports.
//! It does no I/O of its own.

pub mod errors;
pub mod loaded_config;
pub mod validation;
pub mod warning;

// Re-export commonly used types
pub use errors::{ConfigError, Result};
pub use loaded_config::{ConfigMap, LoadedConfig};
pub use validation::{ValidationOutcome, Verdict};
pub use warning::ConfigWarning;
