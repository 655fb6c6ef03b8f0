//! Zettel metadata
//!
//! Metadata is a flat string map. Keys and well-known values used by the
//! presenter are defined here so that stores and renderers agree on them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const KEY_AUTHOR: &str = "author";
pub const KEY_COPYRIGHT: &str = "copyright";
pub const KEY_CSS_ZID: &str = "css-zid";
pub const KEY_LANG: &str = "lang";
pub const KEY_LICENSE: &str = "license";
pub const KEY_PUBLISHED: &str = "published";
pub const KEY_ROLE: &str = "role";
pub const KEY_SLIDE_ROLE: &str = "slide-role";
pub const KEY_SLIDE_TITLE: &str = "slide-title";
pub const KEY_SLIDESET_ROLE: &str = "slideset-role";
pub const KEY_SUB_TITLE: &str = "sub-title";
pub const KEY_SYNTAX: &str = "syntax";
pub const KEY_TITLE: &str = "title";
pub const KEY_URL: &str = "url";
pub const KEY_VISIBILITY: &str = "visibility";

pub const VALUE_VISIBILITY_PUBLIC: &str = "public";

/// Layout of timestamp values such as `published`
pub const TIMESTAMP_LAYOUT: &str = "%Y%m%d%H%M%S";

/// Metadata of one zettel
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meta(BTreeMap<String, String>);

impl Meta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Non-empty value of a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Value of a key, or the empty string
    pub fn get_str(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries whose key denotes a URL value
    pub fn urls(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter(|(k, v)| is_url_key(k) && !v.is_empty())
    }

    /// Check whether the zettel may be shown to anonymous readers
    pub fn is_public(&self) -> bool {
        self.get(KEY_VISIBILITY) == Some(VALUE_VISIBILITY_PUBLIC)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Meta {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Keys `url` and `*-url` hold URLs
pub fn is_url_key(key: &str) -> bool {
    key == KEY_URL || key.ends_with("-url")
}
