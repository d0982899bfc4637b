// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration store trait definition.
//!
//! A store is wherever the config file lives. The loader asks it whether the
//! config exists, reads it, and asks it to persist a template on first run.

use crate::domain::{ConfigMap, Result};
use std::path::Path;

/// A trait for the backing storage of a configuration file.
///
/// # Examples
///
/// ```rust
/// use jsonboot::domain::{ConfigError, ConfigMap, Result};
/// use jsonboot::ports::ConfigStore;
/// use std::path::Path;
///
/// struct FixedStore(ConfigMap);
///
/// impl ConfigStore for FixedStore {
///     fn location(&self) -> &Path {
///         Path::new("memory.json")
///     }
///
///     fn exists(&self) -> bool {
///         true
///     }
///
///     fn read(&self) -> Result<ConfigMap> {
///         Ok(self.0.clone())
///     }
///
///     fn create_template(&self, _template: &ConfigMap) -> Result<()> {
///         Err(ConfigError::Io {
///             path: self.location().to_path_buf(),
///             source: std::io::Error::from(std::io::ErrorKind::AlreadyExists),
///         })
///     }
/// }
/// ```
pub trait ConfigStore: Send + Sync {
    /// Returns the path reported in diagnostics.
    fn location(&self) -> &Path;

    /// Returns `true` if a config is present at the location.
    fn exists(&self) -> bool;

    /// Reads and parses the config.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigMap)` - The top-level JSON object
    /// * `Err(ConfigError::Io)` - The config could not be read
    /// * `Err(ConfigError::MalformedStructure)` - The content is not a JSON object
    fn read(&self) -> Result<ConfigMap>;

    /// Persists `template` as a new config.
    ///
    /// Must fail rather than overwrite when a config already exists.
    fn create_template(&self, template: &ConfigMap) -> Result<()>;
}
