// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation verdicts and the per-load validation outcome.

use serde_json::Value;

/// Indentation placed in front of every rejection line.
pub const MESSAGE_INDENT: &str = "         ";

/// The result of checking one key.
///
/// `Err` carries the pre-formatted rejection line shown to the user.
pub type Verdict = std::result::Result<(), String>;

/// Formats a rejection line that names only the key.
///
/// # Examples
///
/// ```
/// use jsonboot::domain::validation::reject;
///
/// assert_eq!(reject("root", "cannot be empty"), "         - 'root' cannot be empty");
/// ```
pub fn reject(key: &str, reason: &str) -> String {
    format!("{}- '{}' {}", MESSAGE_INDENT, key, reason)
}

/// Formats a rejection line that names the key and its offending value.
///
/// String values are shown without JSON quoting.
///
/// # Examples
///
/// ```
/// use jsonboot::domain::validation::reject_value;
/// use serde_json::json;
///
/// assert_eq!(
///     reject_value("root", &json!("/srv/data"), "does not exist"),
///     "         - 'root: /srv/data' does not exist"
/// );
/// ```
pub fn reject_value(key: &str, value: &Value, reason: &str) -> String {
    match value {
        Value::String(s) => format!("{}- '{}: {}' {}", MESSAGE_INDENT, key, s, reason),
        other => format!("{}- '{}: {}' {}", MESSAGE_INDENT, key, other, reason),
    }
}

/// Invalid and unexpected keys collected while validating one config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Rejection lines, one per invalid key, in validator declaration order
    pub invalid: Vec<String>,
    /// Keys present in the config with no validator, in file order
    pub unexpected: Vec<String>,
}

impl ValidationOutcome {
    /// Returns `true` when no key was rejected.
    ///
    /// Unexpected keys never make an outcome invalid.
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }
}
