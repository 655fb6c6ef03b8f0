//! Node attributes
//!
//! Block and inline nodes may carry a small key/value map. The key `-`
//! marks the *default* attribute, written `{-}` in zettel markup; the
//! presenter uses it to distinguish structural slide breaks from ordinary
//! rules and headings. The empty key holds the generic value, e.g. the
//! programming language of a code block or the kind of a region.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key of the default attribute
pub const DEFAULT_KEY: &str = "-";

/// Key of the generic attribute value
pub const GENERIC_KEY: &str = "";

/// Ordered attribute map
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    /// Create an empty attribute map
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes consisting only of the default attribute
    pub fn with_default() -> Self {
        Self::new().with(DEFAULT_KEY, "")
    }

    /// Attributes with a single generic value
    pub fn generic(value: impl Into<String>) -> Self {
        Self::new().with(GENERIC_KEY, value)
    }

    /// Builder-style setter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set an attribute
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get an attribute
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// The generic value, if any
    pub fn generic_value(&self) -> Option<&str> {
        self.get(GENERIC_KEY)
    }

    /// Check for the default attribute `{-}`
    pub fn has_default(&self) -> bool {
        self.0.contains_key(DEFAULT_KEY)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
