use serde::Deserialize;

use crate::error::{SiteError, SiteResult};
use crate::logging::{self, LogComponent, LogLevel};

/// Id of the optional JSON block the host page can use to override defaults.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Tunables for the page behavior. Every field has a compiled-in default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Viewport width at and above which the mobile menu is forced closed.
    pub nav_breakpoint_px: f64,
    /// Fraction of an element that must be visible before it is revealed.
    pub reveal_threshold: f64,
    pub hero_refresh_ms: u32,
    pub hero_points: usize,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_breakpoint_px: 992.0,
            reveal_threshold: 0.2,
            hero_refresh_ms: 4000,
            hero_points: 120,
            log_level: LogLevel::Info,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> SiteResult<Self> {
        let config: SiteConfig =
            serde_json::from_str(raw).map_err(|e| SiteError::Config(e.to_string()))?;
        config.validate()
    }

    fn validate(self) -> SiteResult<Self> {
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(SiteError::Config(format!(
                "reveal_threshold must be in (0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if self.hero_points < 2 {
            return Err(SiteError::Config("hero_points must be at least 2".to_string()));
        }
        if self.hero_refresh_ms == 0 {
            return Err(SiteError::Config("hero_refresh_ms must be positive".to_string()));
        }
        Ok(self)
    }

    /// Read overrides from the host page, falling back to defaults.
    pub fn load() -> Self {
        let raw = leptos::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());

        let Some(raw) = raw else {
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                logging::warn(LogComponent::Config, &format!("{}; using defaults", e));
                Self::default()
            }
        }
    }
}
