// SPDX-License-Identifier: MIT OR Apache-2.0

//! The validated, read-only configuration handed to the host application.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::warning::ConfigWarning;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::ops::Index;
use std::path::{Path, PathBuf};

/// A parsed configuration file: string keys mapped to arbitrary JSON values.
///
/// Key order follows the file (or, for templates, the validator declaration order).
pub type ConfigMap = serde_json::Map<String, Value>;

/// A configuration that passed validation.
///
/// `LoadedConfig` owns the parsed map exactly as it was read, including any
/// unexpected keys, and only exposes it for reading.
///
/// # Examples
///
/// ```
/// use jsonboot::domain::{ConfigMap, LoadedConfig};
/// use serde_json::json;
///
/// let mut map = ConfigMap::new();
/// map.insert("data_dir".to_string(), json!("/srv/data"));
///
/// let config = LoadedConfig::new("app.json", map, Vec::new());
/// assert_eq!(config.get_str("data_dir"), Some("/srv/data"));
/// assert!(config.contains_key("data_dir"));
/// assert_eq!(config["data_dir"], json!("/srv/data"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    path: PathBuf,
    values: ConfigMap,
    unexpected: Vec<String>,
}

impl LoadedConfig {
    /// Wraps a validated map.
    pub fn new<P: Into<PathBuf>>(path: P, values: ConfigMap, unexpected: Vec<String>) -> Self {
        Self {
            path: path.into(),
            values,
            unexpected,
        }
    }

    /// Returns the path the config was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns the value for `key` if it is present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Returns `true` if the config contains `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterates over the keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterates over key-value pairs in file order.
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.values.iter()
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the config has no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the underlying map.
    pub fn as_map(&self) -> &ConfigMap {
        &self.values
    }

    /// Consumes the config and returns the underlying map.
    pub fn into_map(self) -> ConfigMap {
        self.values
    }

    /// Returns the keys that had no validator.
    pub fn unexpected_keys(&self) -> &[String] {
        &self.unexpected
    }

    /// Returns a warning describing the unexpected keys, if there were any.
    pub fn warning(&self) -> Option<ConfigWarning> {
        if self.unexpected.is_empty() {
            None
        } else {
            Some(ConfigWarning {
                path: self.path.clone(),
                keys: self.unexpected.clone(),
            })
        }
    }

    /// Converts the config into a typed structure.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonboot::domain::{ConfigMap, LoadedConfig};
    /// use serde::Deserialize;
    /// use serde_json::json;
    ///
    /// #[derive(Deserialize)]
    /// struct Paths {
    ///     data_dir: String,
    /// }
    ///
    /// let mut map = ConfigMap::new();
    /// map.insert("data_dir".to_string(), json!("/srv/data"));
    /// let config = LoadedConfig::new("app.json", map, Vec::new());
    ///
    /// let paths: Paths = config.deserialize().unwrap();
    /// assert_eq!(paths.data_dir, "/srv/data");
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(Value::Object(self.values.clone())).map_err(|e| {
            ConfigError::Deserialize {
                path: self.path.clone(),
                target_type: std::any::type_name::<T>().to_string(),
                source: e,
            }
        })
    }
}

impl Index<&str> for LoadedConfig {
    type Output = Value;

    /// Returns the value for `key`, or `Value::Null` when it is absent.
    fn index(&self, key: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.values.get(key).unwrap_or(&NULL)
    }
}

impl<'a> IntoIterator for &'a LoadedConfig {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl From<LoadedConfig> for ConfigMap {
    fn from(config: LoadedConfig) -> Self {
        config.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    fn sample() -> LoadedConfig {
        let mut map = ConfigMap::new();
        map.insert("output".to_string(), json!("/tmp/out"));
        map.insert("retries".to_string(), json!(3));
        map.insert("extra".to_string(), json!({"nested": true}));
        LoadedConfig::new("config.json", map, vec!["extra".to_string()])
    }

    #[test]
    fn test_lookup() {
        let config = sample();
        assert_eq!(config.get("retries"), Some(&json!(3)));
        assert_eq!(config.get_str("output"), Some("/tmp/out"));
        assert_eq!(config.get_str("retries"), None);
        assert!(config.get("missing").is_none());
    }

    #[test]
    fn test_index_missing_key_is_null() {
        let config = sample();
        assert_eq!(config["missing"], Value::Null);
        assert_eq!(config["extra"]["nested"], json!(true));
    }

    #[test]
    fn test_keys_keep_file_order() {
        let config = sample();
        let keys: Vec<_> = config.keys().collect();
        assert_eq!(keys, vec!["output", "retries", "extra"]);
    }

    #[test]
    fn test_iteration() {
        let config = sample();
        assert_eq!(config.len(), 3);
        assert!(!config.is_empty());
        assert_eq!((&config).into_iter().count(), 3);
        assert_eq!(config.iter().next().map(|(k, _)| k.as_str()), Some("output"));
    }

    #[test]
    fn test_warning_lists_unexpected_keys() {
        let config = sample();
        let warning = config.warning().unwrap();
        assert_eq!(warning.keys, vec!["extra".to_string()]);
        assert_eq!(warning.path, PathBuf::from("config.json"));
    }

    #[test]
    fn test_no_warning_without_unexpected_keys() {
        let config = LoadedConfig::new("config.json", ConfigMap::new(), Vec::new());
        assert!(config.warning().is_none());
        assert!(config.is_empty());
    }

    #[test]
    fn test_deserialize_into_struct() {
        #[derive(Deserialize)]
        struct Settings {
            output: String,
            retries: u32,
        }

        let settings: Settings = sample().deserialize().unwrap();
        assert_eq!(settings.output, "/tmp/out");
        assert_eq!(settings.retries, 3);
    }

    #[test]
    fn test_deserialize_type_mismatch() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Settings {
            output: u32,
        }

        let result: Result<Settings> = sample().deserialize();
        assert!(matches!(result, Err(ConfigError::Deserialize { .. })));
    }

    #[test]
    fn test_into_map() {
        let map: ConfigMap = sample().into();
        assert_eq!(map.len(), 3);
    }
}
