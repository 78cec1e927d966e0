//! Page configuration
//!
//! Loaded from a JSON file; every field has a default so a partial file (or
//! no file at all) is valid.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PortfolioError, Result};
use crate::input::ViewportRule;
use crate::typewriter::TypewriterTiming;

/// Configuration for the whole page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Width above which the carousel shows `wide_viewport` cards
    pub breakpoint_px: f32,

    /// Cards visible at once on wide screens
    pub wide_viewport: usize,

    /// Cards visible at once on narrow screens
    pub narrow_viewport: usize,

    /// Testimonial carousel auto-advance; `None` or 0 disables it
    pub auto_advance_ms: Option<u64>,

    /// Gallery lightbox auto-advance while open
    pub gallery_auto_advance_ms: Option<u64>,

    /// Minimum horizontal travel for a swipe
    pub swipe_threshold: f32,

    /// Quiet period before a resize is applied
    pub resize_debounce_ms: u64,

    /// Fade-out time before a filtered project card is hidden
    pub filter_hide_delay_ms: u64,

    /// Reveal elements this many pixels before they reach the bottom edge
    pub reveal_offset_px: f32,

    /// Headline typewriter
    pub typewriter: TypewriterConfig,

    /// Where the dark-mode preference is stored
    pub preference_path: PathBuf,
}

/// Typewriter headline settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub type_ms: u64,
    pub delete_ms: u64,
    pub pause_ms: u64,
    pub between_ms: u64,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768.0,
            wide_viewport: 3,
            narrow_viewport: 1,
            auto_advance_ms: Some(5000),
            gallery_auto_advance_ms: None,
            swipe_threshold: 50.0,
            resize_debounce_ms: 150,
            filter_hide_delay_ms: 300,
            reveal_offset_px: 120.0,
            typewriter: TypewriterConfig::default(),
            preference_path: PathBuf::from("portfolio-preferences.json"),
        }
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "Software Engineer".to_string(),
                "Systems Programmer".to_string(),
                "Open Source Contributor".to_string(),
            ],
            type_ms: 100,
            delete_ms: 50,
            pause_ms: 2000,
            between_ms: 500,
        }
    }
}

impl TypewriterConfig {
    pub fn timing(&self) -> TypewriterTiming {
        TypewriterTiming {
            type_delay: Duration::from_millis(self.type_ms),
            delete_delay: Duration::from_millis(self.delete_ms),
            pause_delay: Duration::from_millis(self.pause_ms),
            between_delay: Duration::from_millis(self.between_ms),
        }
    }
}

impl PortfolioConfig {
    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.breakpoint_px.is_finite() || self.breakpoint_px < 0.0 {
            return Err(PortfolioError::Config(format!(
                "breakpoint_px must be a non-negative number, got {}",
                self.breakpoint_px
            )));
        }
        if self.wide_viewport == 0 || self.narrow_viewport == 0 {
            return Err(PortfolioError::Config(
                "viewport sizes must be at least 1".to_string(),
            ));
        }
        if self.swipe_threshold < 0.0 {
            return Err(PortfolioError::Config(
                "swipe_threshold must not be negative".to_string(),
            ));
        }

        let typewriter = &self.typewriter;
        if !typewriter.phrases.is_empty()
            && (typewriter.type_ms == 0 || typewriter.delete_ms == 0)
        {
            return Err(PortfolioError::Config(
                "typewriter delays must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn viewport_rule(&self) -> ViewportRule {
        ViewportRule::Responsive {
            breakpoint: self.breakpoint_px,
            wide: self.wide_viewport,
            narrow: self.narrow_viewport,
        }
    }

    pub fn auto_advance(&self) -> Option<Duration> {
        self.auto_advance_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    pub fn gallery_auto_advance(&self) -> Option<Duration> {
        self.gallery_auto_advance_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn filter_hide_delay(&self) -> Duration {
        Duration::from_millis(self.filter_hide_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = PortfolioConfig::from_json(r#"{ "auto_advance_ms": 3000 }"#).unwrap();

        assert_eq!(config.auto_advance(), Some(Duration::from_millis(3000)));
        assert_eq!(config.breakpoint_px, 768.0);
        assert_eq!(config.typewriter, TypewriterConfig::default());
    }

    #[test]
    fn test_zero_or_null_disables_auto_advance() {
        let zero = PortfolioConfig::from_json(r#"{ "auto_advance_ms": 0 }"#).unwrap();
        assert_eq!(zero.auto_advance(), None);

        let null = PortfolioConfig::from_json(r#"{ "auto_advance_ms": null }"#).unwrap();
        assert_eq!(null.auto_advance(), None);
    }

    #[test]
    fn test_rejects_zero_viewport() {
        let result = PortfolioConfig::from_json(r#"{ "wide_viewport": 0 }"#);
        assert!(matches!(result, Err(PortfolioError::Config(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = PortfolioConfig::from_json("{ not json");
        assert!(matches!(result, Err(PortfolioError::Json(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PortfolioConfig::load(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, PortfolioConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(&path, r#"{ "typewriter": { "phrases": ["Hi"] } }"#).unwrap();

        let config = PortfolioConfig::load(&path).unwrap();
        assert_eq!(config.typewriter.phrases, vec!["Hi".to_string()]);
        assert_eq!(config.typewriter.type_ms, 100);
    }

    #[test]
    fn test_viewport_rule_from_config() {
        let config = PortfolioConfig::default();
        assert_eq!(config.viewport_rule().resolve(1200.0), 3);
        assert_eq!(config.viewport_rule().resolve(600.0), 1);
    }
}
