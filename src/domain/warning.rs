// SPDX-License-Identifier: MIT OR Apache-2.0

//! Non-fatal configuration warnings.

use std::fmt;
use std::path::PathBuf;

/// Keys found in a config file that no validator declares.
///
/// Unexpected keys are kept in the loaded config; this warning only reports them.
///
/// # Examples
///
/// ```
/// use jsonboot::domain::ConfigWarning;
/// use std::path::PathBuf;
///
/// let warning = ConfigWarning {
///     path: PathBuf::from("app.json"),
///     keys: vec!["colour".to_string(), "legacy".to_string()],
/// };
/// assert_eq!(
///     warning.to_string(),
///     "'app.json' contains unexpected config keys: 'colour', 'legacy'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The file the keys were found in
    pub path: PathBuf,
    /// The unexpected keys, in file order
    pub keys: Vec<String>,
}

impl ConfigWarning {
    /// Renders the warning as a tagged console diagnostic.
    pub fn diagnostic(&self) -> String {
        format!("[WARN] {}", self)
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' contains unexpected config keys: '{}'",
            self.path.display(),
            self.keys.join("', '")
        )
    }
}
