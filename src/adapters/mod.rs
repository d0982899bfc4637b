// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing concrete implementations of the ports.
//!
//! This module provides the JSON file store and the stock validators.

pub mod json_file;
pub mod validators;

pub use json_file::JsonFileStore;
pub use validators::{
    validate_file, validate_folder, validate_json_file, validate_not_empty, validate_nothing,
};
