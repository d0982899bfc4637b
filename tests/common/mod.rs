// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities and mock implementations shared by the integration tests.

use jsonboot::domain::{ConfigError, ConfigMap, Result};
use jsonboot::ports::ConfigStore;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// An in-memory configuration store.
///
/// Records the last template written so tests can inspect it.
#[derive(Debug)]
#[allow(dead_code)]
pub struct MockConfigStore {
    location: PathBuf,
    contents: Option<ConfigMap>,
    fail_read: bool,
    written: Mutex<Option<ConfigMap>>,
}

#[allow(dead_code)]
impl MockConfigStore {
    /// Creates a store with no config present.
    pub fn empty(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
            contents: None,
            fail_read: false,
            written: Mutex::new(None),
        }
    }

    /// Creates a store holding `contents`.
    pub fn with_contents(location: impl Into<PathBuf>, contents: ConfigMap) -> Self {
        Self {
            contents: Some(contents),
            ..Self::empty(location)
        }
    }

    /// Makes every read fail with a permission error.
    pub fn with_failing_read(mut self) -> Self {
        self.fail_read = true;
        if self.contents.is_none() {
            self.contents = Some(ConfigMap::new());
        }
        self
    }

    /// Returns the template written by the loader, if any.
    pub fn written_template(&self) -> Option<ConfigMap> {
        self.written.lock().unwrap().clone()
    }
}

impl ConfigStore for MockConfigStore {
    fn location(&self) -> &Path {
        &self.location
    }

    fn exists(&self) -> bool {
        self.contents.is_some()
    }

    fn read(&self) -> Result<ConfigMap> {
        if self.fail_read {
            return Err(ConfigError::Io {
                path: self.location.clone(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            });
        }
        Ok(self.contents.clone().unwrap_or_default())
    }

    fn create_template(&self, template: &ConfigMap) -> Result<()> {
        *self.written.lock().unwrap() = Some(template.clone());
        Ok(())
    }
}

/// Writes `content` to `name` inside `dir` and returns the full path.
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    path
}
