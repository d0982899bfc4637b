// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the jsonboot crate.
//!
//! This example demonstrates:
//! - Declaring the expected keys with stock and custom validators
//! - First-run template creation
//! - Loading a validated config and reading values from it
//!
//! To run this example:
//! ```bash
//! # First run writes demo_config.json and exits
//! cargo run --example basic_usage
//!
//! # Fill in the file, then run again
//! cargo run --example basic_usage
//! ```

use jsonboot::domain::validation::reject_value;
use jsonboot::prelude::*;
use serde_json::Value;

fn validate_log_level(key: &str, value: &Value) -> Verdict {
    match value.as_str() {
        Some("error" | "warn" | "info" | "debug" | "trace") => Ok(()),
        _ => Err(reject_value(key, value, "is not a log level")),
    }
}

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let validators = ValidatorSet::new()
        .with("app_name", validate_not_empty)
        .with("data_dir", validate_folder)
        .with("log_level", validate_log_level)
        .with("notes", validate_nothing);

    let config = jsonboot::load_or_exit("demo_config.json", validators);

    println!("=== Loaded '{}' ===", config.path().display());
    for (key, value) in &config {
        println!("  {} = {}", key, value);
    }

    if let Some(app_name) = config.get_str("app_name") {
        println!("\nHello from {}", app_name);
    }
}
