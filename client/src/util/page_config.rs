//! Landing page effect settings.
//!
//! A page may embed overrides as JSON in
//! `<script type="application/json" id="echosight-effects">`. Missing fields
//! keep their defaults; a malformed or invalid block is logged and ignored as
//! a whole so the page never renders half-applied settings.

#[cfg(test)]
#[path = "page_config_test.rs"]
mod page_config_test;

use canvas::config::{ConfigError, HeroConfig, StarFieldConfig, TrailConfig};
use serde::{Deserialize, Serialize};

/// DOM id of the optional embedded settings block.
pub const CONFIG_ELEMENT_ID: &str = "echosight-effects";

/// Settings for every canvas effect on the landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub hero: HeroConfig,
    pub stars: StarFieldConfig,
    pub trail: TrailConfig,
}

impl LandingConfig {
    /// Parse and validate a settings block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON or any invalid section.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.hero.validate()?;
        config.stars.validate()?;
        config.trail.validate()?;
        Ok(config)
    }

    /// Resolve the settings from the embedded block's text, if any.
    ///
    /// Always yields a usable config; the error, if one occurred, comes back
    /// alongside the defaults so the caller can report it.
    pub fn from_embedded(raw: Option<&str>) -> (Self, Option<ConfigError>) {
        match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            None => (Self::default(), None),
            Some(raw) => match Self::parse(raw) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err)),
            },
        }
    }
}

/// Read the embedded settings block from the current document.
#[cfg(feature = "csr")]
pub fn load() -> LandingConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let (config, err) = LandingConfig::from_embedded(raw.as_deref());
    if let Some(err) = err {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
    }
    config
}

#[cfg(not(feature = "csr"))]
pub fn load() -> LandingConfig {
    LandingConfig::default()
}
