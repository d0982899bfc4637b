// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validator trait and the ordered set of validators a loader checks against.
//!
//! A [`ValidatorSet`] is the schema of a config file: it names every expected
//! key and the rule its value must satisfy.

use crate::domain::Verdict;
use serde_json::Value;
use std::fmt;

/// A rule that checks the value of one configuration key.
///
/// Any `Fn(&str, &Value) -> Verdict` is a validator, so plain functions such as
/// the stock validators can be used directly. Implement the trait on a type
/// when a rule needs its own state.
///
/// # Examples
///
/// ```rust
/// use jsonboot::domain::validation::{reject_value, Verdict};
/// use jsonboot::ports::Validator;
/// use serde_json::{json, Value};
///
/// struct PortRange {
///     min: u64,
/// }
///
/// impl Validator for PortRange {
///     fn validate(&self, key: &str, value: &Value) -> Verdict {
///         match value.as_u64() {
///             Some(port) if port >= self.min => Ok(()),
///             _ => Err(reject_value(key, value, "is not an allowed port")),
///         }
///     }
/// }
///
/// let rule = PortRange { min: 1024 };
/// assert!(rule.validate("port", &json!(8080)).is_ok());
/// assert!(rule.validate("port", &json!(80)).is_err());
/// ```
pub trait Validator: Send + Sync {
    /// Checks `value`, the config entry stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The value is acceptable
    /// * `Err(message)` - A rejection line ready for display
    fn validate(&self, key: &str, value: &Value) -> Verdict;
}

impl<F> Validator for F
where
    F: Fn(&str, &Value) -> Verdict + Send + Sync,
{
    fn validate(&self, key: &str, value: &Value) -> Verdict {
        self(key, value)
    }
}

/// An ordered mapping from config key to validator.
///
/// Keys keep their declaration order, which is also the key order of a
/// generated template. Adding a key that is already present replaces its
/// validator without moving it.
///
/// # Examples
///
/// ```rust
/// use jsonboot::adapters::validators::{validate_folder, validate_not_empty};
/// use jsonboot::ports::ValidatorSet;
///
/// let validators = ValidatorSet::new()
///     .with("name", validate_not_empty)
///     .with("data_dir", validate_folder);
///
/// let keys: Vec<_> = validators.keys().collect();
/// assert_eq!(keys, vec!["name", "data_dir"]);
/// ```
#[derive(Default)]
pub struct ValidatorSet {
    entries: Vec<(String, Box<dyn Validator>)>,
}

impl ValidatorSet {
    /// Creates an empty validator set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a validator for `key` and returns the set.
    pub fn with<K, V>(mut self, key: K, validator: V) -> Self
    where
        K: Into<String>,
        V: Validator + 'static,
    {
        self.insert(key, validator);
        self
    }

    /// Adds a validator for `key`, replacing any existing one.
    pub fn insert<K, V>(&mut self, key: K, validator: V)
    where
        K: Into<String>,
        V: Validator + 'static,
    {
        let key = key.into();
        let validator: Box<dyn Validator> = Box::new(validator);
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = validator,
            None => self.entries.push((key, validator)),
        }
    }

    /// Returns the validator registered for `key`.
    pub fn get(&self, key: &str) -> Option<&dyn Validator> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns `true` if a validator is registered for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over the declared keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over key-validator pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Validator)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Returns the number of declared keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no keys are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ValidatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorSet")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}
