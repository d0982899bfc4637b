// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration loader.
//!
//! This module runs the startup protocol: bootstrap a template when the config
//! is missing, otherwise read it, validate every key, and hand back the
//! validated config.

use crate::adapters::JsonFileStore;
use crate::domain::{ConfigError, ConfigMap, LoadedConfig, Result, ValidationOutcome};
use crate::ports::{ConfigStore, ValidatorSet};
use serde_json::Value;
use std::path::Path;

/// Loads and validates a configuration file against a set of validators.
///
/// The loader does no I/O until [`load`](ConfigLoader::load) or
/// [`load_or_exit`](ConfigLoader::load_or_exit) is called.
///
/// # Examples
///
/// ```rust,no_run
/// use jsonboot::adapters::validators::{validate_folder, validate_not_empty};
/// use jsonboot::ports::ValidatorSet;
/// use jsonboot::service::ConfigLoader;
///
/// let validators = ValidatorSet::new()
///     .with("name", validate_not_empty)
///     .with("data_dir", validate_folder);
///
/// let config = ConfigLoader::new("config.json", validators).load_or_exit();
/// println!("data lives in {}", config.get_str("data_dir").unwrap_or_default());
/// ```
#[derive(Debug)]
pub struct ConfigLoader<S: ConfigStore = JsonFileStore> {
    store: S,
    validators: ValidatorSet,
}

impl ConfigLoader<JsonFileStore> {
    /// Creates a loader for the JSON file at `path`.
    pub fn new<P: AsRef<Path>>(path: P, validators: ValidatorSet) -> Self {
        Self::with_store(JsonFileStore::from_file(path), validators)
    }

    /// Creates a loader for `filename` in the OS-appropriate configuration
    /// directory of the application.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use jsonboot::adapters::validators::validate_not_empty;
    /// use jsonboot::ports::ValidatorSet;
    /// use jsonboot::service::ConfigLoader;
    ///
    /// let validators = ValidatorSet::new().with("token", validate_not_empty);
    /// let loader =
    ///     ConfigLoader::from_default_location("myapp", "com.example", "config.json", validators)
    ///         .unwrap();
    /// ```
    #[cfg(feature = "default-location")]
    pub fn from_default_location(
        app_name: &str,
        qualifier: &str,
        filename: &str,
        validators: ValidatorSet,
    ) -> Result<Self> {
        let store = JsonFileStore::with_filename(app_name, qualifier, filename)?;
        Ok(Self::with_store(store, validators))
    }
}

impl<S: ConfigStore> ConfigLoader<S> {
    /// Creates a loader over any config store.
    pub fn with_store(store: S, validators: ValidatorSet) -> Self {
        Self { store, validators }
    }

    /// Returns the config path used in diagnostics.
    pub fn path(&self) -> &Path {
        self.store.location()
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the validators the config is checked against.
    pub fn validators(&self) -> &ValidatorSet {
        &self.validators
    }

    /// Builds the first-run template: every declared key mapped to `""`.
    pub fn template(&self) -> ConfigMap {
        self.validators
            .keys()
            .map(|key| (key.to_string(), Value::String(String::new())))
            .collect()
    }

    /// Runs the load protocol.
    ///
    /// # Returns
    ///
    /// * `Ok(LoadedConfig)` - Every declared key passed its validator
    /// * `Err(ConfigError::TemplateCreated)` - The config was missing and a template was written
    /// * `Err(ConfigError::Io)` - The config could not be read, or the template could not be created
    /// * `Err(ConfigError::MalformedStructure)` - The config is not a JSON object
    /// * `Err(ConfigError::InvalidValues)` - At least one key was rejected
    pub fn load(&self) -> Result<LoadedConfig> {
        let path = self.store.location();

        if !self.store.exists() {
            tracing::debug!("'{}' does not exist, writing template", path.display());
            self.store.create_template(&self.template())?;
            tracing::info!(
                "Created config template '{}' with {} keys",
                path.display(),
                self.validators.len()
            );
            return Err(ConfigError::TemplateCreated {
                path: path.to_path_buf(),
            });
        }

        let config = self.store.read()?;
        tracing::debug!("Parsed {} keys from '{}'", config.len(), path.display());

        let outcome = self.validate(&config);
        if !outcome.is_valid() {
            return Err(ConfigError::InvalidValues {
                path: path.to_path_buf(),
                messages: outcome.invalid,
            });
        }

        let loaded = LoadedConfig::new(path, config, outcome.unexpected);
        if let Some(warning) = loaded.warning() {
            tracing::warn!("{}", warning);
        }
        Ok(loaded)
    }

    /// Runs the load protocol, printing diagnostics and exiting the process on
    /// any error.
    ///
    /// Errors are printed to standard output with an `[ERROR]` tag and the
    /// process exits with status 1. Unexpected keys are printed with a
    /// `[WARN]` tag and loading continues.
    pub fn load_or_exit(&self) -> LoadedConfig {
        match self.load() {
            Ok(config) => {
                if let Some(warning) = config.warning() {
                    println!("{}", warning.diagnostic());
                }
                config
            }
            Err(e) => {
                println!("{}", e.diagnostic());
                std::process::exit(1);
            }
        }
    }

    /// Checks `config` against the validators.
    ///
    /// Declared keys are checked in declaration order. A declared key missing
    /// from `config` is checked as the empty-string placeholder. Keys without a
    /// validator are reported as unexpected, in file order.
    pub fn validate(&self, config: &ConfigMap) -> ValidationOutcome {
        let placeholder = Value::String(String::new());
        let mut outcome = ValidationOutcome::default();

        for (key, validator) in self.validators.iter() {
            let value = config.get(key).unwrap_or(&placeholder);
            if let Err(message) = validator.validate(key, value) {
                tracing::debug!("Key '{}' rejected", key);
                outcome.invalid.push(message);
            }
        }

        outcome.unexpected = config
            .keys()
            .filter(|key| !self.validators.contains_key(key.as_str()))
            .cloned()
            .collect();

        outcome
    }
}

/// Loads the JSON config at `path`, exiting the process on any error.
///
/// This is shorthand for `ConfigLoader::new(path, validators).load_or_exit()`.
pub fn load_or_exit<P: AsRef<Path>>(path: P, validators: ValidatorSet) -> LoadedConfig {
    ConfigLoader::new(path, validators).load_or_exit()
}
