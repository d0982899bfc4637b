// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON file configuration store adapter.
//!
//! This module provides a store that keeps the configuration in a single JSON
//! file on disk.

use crate::domain::{ConfigError, ConfigMap, Result};
use crate::ports::ConfigStore;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Indentation used when writing a template.
const TEMPLATE_INDENT: &[u8] = b"    ";

/// Maximum size of a JSON file that will be read (10MB).
pub const MAX_JSON_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Rejects files larger than `limit` before they are read.
pub(crate) fn check_file_size(path: &Path, limit: u64) -> std::io::Result<()> {
    let len = fs::metadata(path)?.len();
    if len > limit {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("file too large: {} bytes (max {} bytes)", len, limit),
        ));
    }
    Ok(())
}

/// Configuration store backed by a JSON file.
///
/// The file must hold a single JSON object at the top level. Templates are
/// written pretty-printed with four-space indentation and are never written
/// over an existing file.
///
/// # Examples
///
/// ```rust,no_run
/// use jsonboot::adapters::JsonFileStore;
/// use jsonboot::ports::ConfigStore;
///
/// let store = JsonFileStore::from_file("/etc/myapp/config.json");
/// if store.exists() {
///     let config = store.read().unwrap();
///     println!("{} keys", config.len());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Path to the JSON file
    file_path: PathBuf,
    /// Whether missing parent directories are created with the template
    create_parent: bool,
    /// Largest file size accepted by `read`
    max_size: u64,
}

impl JsonFileStore {
    /// Creates a store for a specific file path.
    ///
    /// The path is used as given; nothing is checked until the store is used.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
            create_parent: false,
            max_size: MAX_JSON_FILE_SIZE,
        }
    }

    /// Sets the largest file size `read` accepts.
    ///
    /// Larger files are reported as [`ConfigError::Io`] without being read.
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    /// Creates a store for `config.json` in the OS-appropriate configuration
    /// directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use jsonboot::adapters::JsonFileStore;
    ///
    /// let store = JsonFileStore::from_default_location("myapp", "com.example").unwrap();
    /// ```
    #[cfg(feature = "default-location")]
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.json")
    }

    /// Creates a store for a custom file name in the OS-appropriate
    /// configuration directory.
    ///
    /// The directory is created when the first template is written.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier
    /// * `filename` - The configuration file name (e.g., "settings.json")
    #[cfg(feature = "default-location")]
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs = directories::ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            ConfigError::LocationUnavailable {
                app_name: app_name.to_string(),
            }
        })?;

        Ok(Self {
            file_path: proj_dirs.config_dir().join(filename),
            create_parent: true,
            max_size: MAX_JSON_FILE_SIZE,
        })
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.file_path.clone(),
            source,
        }
    }

    /// Serializes a template as pretty-printed JSON.
    fn render(template: &ConfigMap) -> std::io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(TEMPLATE_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        template.serialize(&mut serializer)?;
        buf.push(b'\n');
        Ok(buf)
    }
}

impl ConfigStore for JsonFileStore {
    fn location(&self) -> &Path {
        &self.file_path
    }

    fn exists(&self) -> bool {
        self.file_path.exists()
    }

    fn read(&self) -> Result<ConfigMap> {
        check_file_size(&self.file_path, self.max_size).map_err(|e| self.io_error(e))?;
        let content = fs::read(&self.file_path).map_err(|e| self.io_error(e))?;
        tracing::debug!(
            "Read {} bytes from '{}'",
            content.len(),
            self.file_path.display()
        );

        serde_json::from_slice::<ConfigMap>(&content).map_err(|e| {
            ConfigError::MalformedStructure {
                path: self.file_path.clone(),
                source: e,
            }
        })
    }

    fn create_template(&self, template: &ConfigMap) -> Result<()> {
        if self.create_parent {
            if let Some(parent) = self.file_path.parent() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let body = Self::render(template).map_err(|e| self.io_error(e))?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.file_path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(&body).map_err(|e| self.io_error(e))?;
        file.flush().map_err(|e| self.io_error(e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_read_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"name": "demo", "count": 2}"#).unwrap();

        let store = JsonFileStore::from_file(&path);
        assert!(store.exists());

        let config = store.read().unwrap();
        assert_eq!(config.get("name"), Some(&json!("demo")));
        assert_eq!(config.get("count"), Some(&json!(2)));
    }

    #[test]
    fn test_read_keeps_file_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();

        let config = JsonFileStore::from_file(&path).read().unwrap();
        let keys: Vec<_> = config.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_read_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        let result = JsonFileStore::from_file(&path).read();
        assert!(matches!(result, Err(ConfigError::MalformedStructure { .. })));
    }

    #[test]
    fn test_read_non_object_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let result = JsonFileStore::from_file(&path).read();
        assert!(matches!(result, Err(ConfigError::MalformedStructure { .. })));
    }

    #[test]
    fn test_read_invalid_utf8_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, [b'{', b'"', 0xff, 0xfe, b'"', b':', b'1', b'}']).unwrap();

        let result = JsonFileStore::from_file(&path).read();
        assert!(matches!(result, Err(ConfigError::MalformedStructure { .. })));
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let dir = TempDir::new().unwrap();

        let result = JsonFileStore::from_file(dir.path()).read();
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_read_oversized_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"name": "a value longer than the limit"}"#).unwrap();

        match JsonFileStore::from_file(&path).with_max_size(8).read() {
            Err(ConfigError::Io { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
                assert!(source.to_string().contains("too large"));
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_at_size_limit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let content = r#"{"a": 1}"#;
        fs::write(&path, content).unwrap();

        let store = JsonFileStore::from_file(&path).with_max_size(content.len() as u64);
        assert!(store.read().is_ok());
    }

    #[test]
    fn test_missing_file_does_not_exist() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::from_file(dir.path().join("absent.json"));
        assert!(!store.exists());
    }

    #[test]
    fn test_create_template_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut template = ConfigMap::new();
        template.insert("b".to_string(), json!(""));
        template.insert("a".to_string(), json!(""));

        JsonFileStore::from_file(&path)
            .create_template(&template)
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n    \"b\": \"\",\n    \"a\": \"\"\n}\n");
    }

    #[test]
    fn test_create_template_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"keep": "me"}"#).unwrap();

        let result = JsonFileStore::from_file(&path).create_template(&ConfigMap::new());
        match result {
            Err(ConfigError::Io { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::AlreadyExists);
            }
            other => panic!("expected Io error, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"keep": "me"}"#);
    }

    #[test]
    fn test_create_template_missing_parent_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let result = JsonFileStore::from_file(&path).create_template(&ConfigMap::new());
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_file_path() {
        let store = JsonFileStore::from_file("/tmp/app/config.json");
        assert_eq!(store.file_path(), Path::new("/tmp/app/config.json"));
        assert_eq!(store.location(), Path::new("/tmp/app/config.json"));
    }

    #[cfg(feature = "default-location")]
    #[test]
    fn test_default_location_file_name() {
        if let Ok(store) = JsonFileStore::from_default_location("jsonboot-test", "com.example") {
            assert_eq!(
                store.file_path().file_name().and_then(|n| n.to_str()),
                Some("config.json")
            );
        }
    }
}
