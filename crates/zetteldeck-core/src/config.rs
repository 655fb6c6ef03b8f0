//! Presenter configuration
//!
//! Settings come from a TOML file and may be overlaid with the metadata of
//! the presenter configuration zettel.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;
use zetteldeck_ast::meta::{KEY_AUTHOR, KEY_CSS_ZID, KEY_SLIDESET_ROLE};
use zetteldeck_ast::{Meta, ZettelId};

use crate::error::{PresenterError, Result};

/// Role value marking a zettel as a slide set
pub const DEFAULT_SLIDESET_ROLE: &str = "slideset";

/// Language used by the generated pages when nothing else is known
pub const DEFAULT_LANG: &str = "de";

/// Base URL of the zettel store web interface
pub const DEFAULT_STORE_URL: &str = "http://127.0.0.1:23123";

/// Top-level presenter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    /// Value of `role` that turns a zettel into a slide set
    pub slideset_role: String,
    /// Fallback author when the slide set names none
    pub author: String,
    /// Zettel holding additional CSS for the slide show
    pub slide_css: Option<ZettelId>,
    /// Language of the generated pages
    pub lang: String,
    /// Base URL used to link a rendered zettel back to the store
    pub store_url: String,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            slideset_role: DEFAULT_SLIDESET_ROLE.to_string(),
            author: String::new(),
            slide_css: None,
            lang: DEFAULT_LANG.to_string(),
            store_url: DEFAULT_STORE_URL.to_string(),
        }
    }
}

impl PresenterConfig {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check settings that cannot be expressed by their types
    pub fn validate(&self) -> Result<()> {
        if self.slideset_role.trim().is_empty() {
            return Err(PresenterError::config("slideset_role must not be empty"));
        }
        if !(self.store_url.starts_with("http://") || self.store_url.starts_with("https://")) {
            return Err(PresenterError::config(format!(
                "store_url {:?} is not an http(s) URL",
                self.store_url
            )));
        }
        Ok(())
    }

    /// Overlay the metadata of a presenter configuration zettel.
    ///
    /// An unparsable `css-zid` is ignored.
    pub fn apply_meta(&mut self, meta: &Meta) {
        if let Some(role) = meta.get(KEY_SLIDESET_ROLE) {
            self.slideset_role = role.to_string();
        }
        if let Some(author) = meta.get(KEY_AUTHOR) {
            self.author = author.to_string();
        }
        if let Some(css) = meta.get(KEY_CSS_ZID) {
            match ZettelId::parse(css) {
                Ok(zid) => self.slide_css = Some(zid),
                Err(e) => warn!("Ignoring css-zid {:?}: {}", css, e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PresenterConfig::default();
        assert_eq!(config.slideset_role, "slideset");
        assert_eq!(config.lang, "de");
        assert!(config.author.is_empty());
        assert!(config.slide_css.is_none());
        assert_eq!(config.store_url, "http://127.0.0.1:23123");
    }

    #[test]
    fn test_partial_toml() {
        let config = PresenterConfig::from_toml_str(
            r#"
author = "Jane Doe"
slide_css = "20240101120000"
"#,
        )
        .unwrap();
        assert_eq!(config.author, "Jane Doe");
        assert_eq!(config.slideset_role, "slideset");
        assert_eq!(
            config.slide_css,
            Some(ZettelId::parse("20240101120000").unwrap())
        );
    }

    #[test]
    fn test_invalid_css_zid_in_toml() {
        assert!(PresenterConfig::from_toml_str(r#"slide_css = "abc""#).is_err());
    }

    #[test]
    fn test_apply_meta() {
        let mut config = PresenterConfig::default();
        let meta = Meta::new()
            .with(KEY_SLIDESET_ROLE, "deck")
            .with(KEY_AUTHOR, "Config Author")
            .with(KEY_CSS_ZID, "not-a-zid");
        config.apply_meta(&meta);
        assert_eq!(config.slideset_role, "deck");
        assert_eq!(config.author, "Config Author");
        assert!(config.slide_css.is_none());

        config.apply_meta(&Meta::new().with(KEY_CSS_ZID, "20240101120000"));
        assert!(config.slide_css.is_some());
        assert_eq!(config.author, "Config Author");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zetteldeck.toml");
        std::fs::write(&path, "lang = \"en\"\n").unwrap();
        let config = PresenterConfig::load(&path).unwrap();
        assert_eq!(config.lang, "en");

        let err = PresenterConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert_eq!(err.code(), "DECK005");
    }

    #[test]
    fn test_load_rejects_invalid_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zetteldeck.toml");

        std::fs::write(&path, "slideset_role = \"\"\n").unwrap();
        let err = PresenterConfig::load(&path).unwrap_err();
        assert_eq!(err.code(), "DECK003");
        assert!(err.to_string().contains("slideset_role"));

        std::fs::write(&path, "store_url = \"ftp://zettel\"\n").unwrap();
        let err = PresenterConfig::load(&path).unwrap_err();
        assert_eq!(err.code(), "DECK003");
        assert!(err.to_string().contains("ftp://zettel"));
    }
}
