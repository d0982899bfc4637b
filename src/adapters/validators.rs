// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stock validators.
//!
//! Each validator is a plain function usable anywhere a
//! [`Validator`](crate::ports::Validator) is expected. Checks run in a fixed
//! order and stop at the first failure: empty value, then value type, then
//! existence, then file type, then content.

use crate::adapters::json_file::{check_file_size, MAX_JSON_FILE_SIZE};
use crate::domain::validation::{reject, reject_value, Verdict};
use serde_json::Value;
use std::fs;
use std::path::Path;

fn is_empty_placeholder(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}

/// Checks the value is a non-empty string naming an existing path.
fn existing_path<'a>(key: &str, value: &'a Value) -> Result<&'a Path, String> {
    if is_empty_placeholder(value) {
        return Err(reject(key, "cannot be empty"));
    }
    let path = match value.as_str() {
        Some(s) => Path::new(s),
        None => return Err(reject_value(key, value, "is not a string")),
    };
    if !path.exists() {
        return Err(reject_value(key, value, "does not exist"));
    }
    Ok(path)
}

/// Accepts any value, including placeholders and nested structures.
pub fn validate_nothing(_key: &str, _value: &Value) -> Verdict {
    Ok(())
}

/// Rejects the empty string; any other value is accepted.
///
/// # Examples
///
/// ```
/// use jsonboot::adapters::validators::validate_not_empty;
/// use serde_json::json;
///
/// assert!(validate_not_empty("name", &json!("demo")).is_ok());
/// assert_eq!(
///     validate_not_empty("name", &json!("")),
///     Err("         - 'name' cannot be empty".to_string())
/// );
/// ```
pub fn validate_not_empty(key: &str, value: &Value) -> Verdict {
    if is_empty_placeholder(value) {
        return Err(reject(key, "cannot be empty"));
    }
    Ok(())
}

/// Requires the value to be the path of an existing directory.
pub fn validate_folder(key: &str, value: &Value) -> Verdict {
    let path = existing_path(key, value)?;
    if !path.is_dir() {
        return Err(reject_value(key, value, "is not a folder"));
    }
    Ok(())
}

/// Requires the value to be the path of an existing regular file.
pub fn validate_file(key: &str, value: &Value) -> Verdict {
    let path = existing_path(key, value)?;
    if !path.is_file() {
        return Err(reject_value(key, value, "is not a file"));
    }
    Ok(())
}

/// Requires the value to be the path of a regular file holding valid JSON.
pub fn validate_json_file(key: &str, value: &Value) -> Verdict {
    validate_file(key, value)?;
    // validate_file only succeeds for string values
    let path = Path::new(value.as_str().unwrap_or_default());

    if let Err(e) = check_file_size(path, MAX_JSON_FILE_SIZE) {
        tracing::debug!("Skipping '{}' for key '{}': {}", path.display(), key, e);
        return Err(reject_value(key, value, "is too large"));
    }
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("Failed to read '{}' for key '{}': {}", path.display(), key, e);
            return Err(reject_value(key, value, "could not be read"));
        }
    };
    if serde_json::from_slice::<Value>(&content).is_err() {
        return Err(reject_value(key, value, "is not valid JSON file"));
    }
    Ok(())
}
