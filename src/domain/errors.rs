// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration loader.
//!
//! Every fatal load condition is a variant of [`ConfigError`]. The `Display`
//! output of each variant is the human-readable diagnostic; [`ConfigError::diagnostic`]
//! adds the `[ERROR]` tag used on the console.

use std::path::PathBuf;
use thiserror::Error;

/// The error type for loading a configuration file.
///
/// Loading either yields a validated config or exactly one of these variants.
/// The enum is marked `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use jsonboot::domain::ConfigError;
/// use std::path::PathBuf;
///
/// let error = ConfigError::TemplateCreated {
///     path: PathBuf::from("settings.json"),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Created config file 'settings.json', fill out before running again"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The config file did not exist, so a template was written in its place.
    #[error("Created config file '{}', fill out before running again", .path.display())]
    TemplateCreated {
        /// Where the template was written
        path: PathBuf,
    },

    /// The config file could not be opened, read, or created.
    #[error("Could not open '{}'", .path.display())]
    Io {
        /// The file being accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not a JSON object.
    #[error("'{}' has an invalid JSON structure", .path.display())]
    MalformedStructure {
        /// The file being parsed
        path: PathBuf,
        /// The underlying parser error
        #[source]
        source: serde_json::Error,
    },

    /// One or more keys were rejected by their validator.
    #[error(
        "'{}' contains invalid config values:\n{}",
        .path.display(),
        .messages.join("\n")
    )]
    InvalidValues {
        /// The file being validated
        path: PathBuf,
        /// One pre-formatted line per rejected key
        messages: Vec<String>,
    },

    /// No OS configuration directory could be determined for the application.
    #[error("Could not determine a configuration directory for '{app_name}'")]
    LocationUnavailable {
        /// The application name used for the lookup
        app_name: String,
    },

    /// A validated config could not be converted into the requested type.
    #[error("'{}' could not be converted into {target_type}: {source}", .path.display())]
    Deserialize {
        /// The file the config came from
        path: PathBuf,
        /// The requested type name
        target_type: String,
        /// The underlying conversion error
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Renders the error as a tagged console diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonboot::domain::ConfigError;
    /// use std::path::PathBuf;
    ///
    /// let error = ConfigError::InvalidValues {
    ///     path: PathBuf::from("app.json"),
    ///     messages: vec!["         - 'root' cannot be empty".to_string()],
    /// };
    /// assert_eq!(
    ///     error.diagnostic(),
    ///     "[ERROR] 'app.json' contains invalid config values:\n         - 'root' cannot be empty"
    /// );
    /// ```
    pub fn diagnostic(&self) -> String {
        format!("[ERROR] {}", self)
    }

    /// Returns the path of the config file involved, if the error has one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ConfigError::TemplateCreated { path }
            | ConfigError::Io { path, .. }
            | ConfigError::MalformedStructure { path, .. }
            | ConfigError::InvalidValues { path, .. }
            | ConfigError::Deserialize { path, .. } => Some(path.as_path()),
            ConfigError::LocationUnavailable { .. } => None,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
