// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup-time loading and validation of a JSON configuration file.
//!
//! This crate makes sure a host application starts with a usable configuration.
//! The caller declares the keys it expects together with a validator for each.
//! On first run a template holding every declared key is written and the user
//! is asked to fill it in; on later runs the file is parsed, every key is
//! checked, and the validated config is handed back.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`LoadedConfig`, `ValidationOutcome`, `ConfigWarning`, errors)
//! - **Ports**: Trait definitions that define interfaces (`ConfigStore`, `Validator`)
//! - **Adapters**: The JSON file store and the stock validators
//! - **Service**: The `ConfigLoader` that runs the bootstrap and validation protocol
//!
//! # Diagnostics
//!
//! [`ConfigLoader::load`](service::ConfigLoader::load) returns every failure as a
//! [`ConfigError`](domain::ConfigError). [`ConfigLoader::load_or_exit`](service::ConfigLoader::load_or_exit)
//! prints it instead and ends the process:
//!
//! ```text
//! [ERROR] Created config file 'config.json', fill out before running again
//! [ERROR] Could not open 'config.json'
//! [ERROR] 'config.json' has an invalid JSON structure
//! [ERROR] 'config.json' contains invalid config values:
//!          - 'data_dir: /srv/missing' does not exist
//! [WARN] 'config.json' contains unexpected config keys: 'colour'
//! ```
//!
//! # Feature Flags
//!
//! - `default-location`: Resolve the config file in the OS configuration directory (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jsonboot::prelude::*;
//!
//! let validators = ValidatorSet::new()
//!     .with("name", validate_not_empty)
//!     .with("data_dir", validate_folder)
//!     .with("schema", validate_json_file);
//!
//! let config = jsonboot::load_or_exit("config.json", validators);
//! println!("loaded {} keys", config.len());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use service::load_or_exit;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::validators::{
        validate_file, validate_folder, validate_json_file, validate_not_empty, validate_nothing,
    };
    pub use crate::adapters::JsonFileStore;
    pub use crate::domain::{
        ConfigError, ConfigMap, ConfigWarning, LoadedConfig, Result, ValidationOutcome, Verdict,
    };
    pub use crate::ports::{ConfigStore, Validator, ValidatorSet};
    pub use crate::service::ConfigLoader;
}
