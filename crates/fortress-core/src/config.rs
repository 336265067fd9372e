//! Runtime configuration for the dashboard page.
//!
//! Every threshold, delay and period the page uses lives here so the two
//! historical drafts of the page (which disagreed on a few numbers) can be
//! reproduced by config instead of by code.
//!
//! Files are JSON and every field is optional:
//!
//! ```json
//! {
//!   "header": { "scroll_threshold": 50.0 },
//!   "metrics": { "period_ms": 1500 }
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FortressError, FortressResult};

/// Longest delay or period any setting may ask for.
pub const MAX_DURATION_MS: u64 = 60_000;

/// Header scroll and parallax settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Scroll offset (px) past which the header switches to `scrolled`.
    pub scroll_threshold: f64,
    /// Hero dashboard translation per scrolled pixel.
    pub parallax_factor: f64,
    /// Header height used for anchor offsets when the header is missing.
    pub fallback_height: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 100.0,
            parallax_factor: 0.1,
            fallback_height: 80.0,
        }
    }
}

/// Section reveal settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of a section that must be visible before it reveals.
    pub threshold: f64,
    /// Inset (px) subtracted from the bottom of the viewport.
    pub bottom_margin: f64,
    /// Per-item delay for stat boxes.
    pub stat_box_delay_ms: u64,
    /// Per-item delay for feature, architecture and challenge cards.
    pub card_delay_ms: u64,
    /// Pause between the pre state and the revealed state of one item.
    pub commit_pause_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            bottom_margin: 100.0,
            stat_box_delay_ms: 100,
            card_delay_ms: 150,
            commit_pause_ms: 50,
        }
    }
}

/// Gauge simulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub period_ms: u64,
    /// Half-width of the uniform jitter window.
    pub jitter: f64,
    pub floor: f64,
    pub ceiling: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            period_ms: 3000,
            jitter: 5.0,
            floor: 20.0,
            ceiling: 95.0,
        }
    }
}

/// Server LED flicker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerStatusConfig {
    pub check_period_ms: u64,
    /// Probability that a check takes the chosen unit offline.
    pub flicker_chance: f64,
    pub offline_ms: u64,
}

impl Default for ServerStatusConfig {
    fn default() -> Self {
        Self {
            check_period_ms: 10_000,
            flicker_chance: 0.05,
            offline_ms: 2000,
        }
    }
}

/// Everything else with a clock attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub clock_period_ms: u64,
    pub resize_debounce_ms: u64,
    /// Length of one rendering frame for scroll coalescing.
    pub frame_ms: u64,
    pub copy_confirm_ms: u64,
    pub easter_egg_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            clock_period_ms: 1000,
            resize_debounce_ms: 250,
            frame_ms: 16,
            copy_confirm_ms: 2000,
            easter_egg_ms: 3000,
        }
    }
}

/// Mobile menu settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Widths strictly above this are treated as desktop.
    pub desktop_breakpoint: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint: 768.0,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FortressConfig {
    pub header: HeaderConfig,
    pub reveal: RevealConfig,
    pub metrics: MetricsConfig,
    pub server_status: ServerStatusConfig,
    pub menu: MenuConfig,
    pub timing: TimingConfig,
}

impl FortressConfig {
    /// Parse a config from JSON text and validate it.
    pub fn from_json(text: &str) -> FortressResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> FortressResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Reject values the page logic cannot work with.
    pub fn validate(&self) -> FortressResult<()> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(FortressError::Config(format!(
                "reveal.threshold must be within 0..=1, got {}",
                self.reveal.threshold
            )));
        }
        if self.metrics.floor > self.metrics.ceiling {
            return Err(FortressError::Config(format!(
                "metrics.floor ({}) is above metrics.ceiling ({})",
                self.metrics.floor, self.metrics.ceiling
            )));
        }
        if self.metrics.jitter < 0.0 {
            return Err(FortressError::Config("metrics.jitter must not be negative".into()));
        }
        if !(0.0..=1.0).contains(&self.server_status.flicker_chance) {
            return Err(FortressError::Config(
                "server_status.flicker_chance must be within 0..=1".into(),
            ));
        }
        let periods = [
            ("metrics.period_ms", self.metrics.period_ms),
            ("server_status.check_period_ms", self.server_status.check_period_ms),
            ("timing.clock_period_ms", self.timing.clock_period_ms),
        ];
        for (name, value) in periods {
            if value == 0 {
                return Err(FortressError::Config(format!("{name} must be greater than zero")));
            }
        }
        let durations = [
            ("metrics.period_ms", self.metrics.period_ms),
            ("server_status.check_period_ms", self.server_status.check_period_ms),
            ("server_status.offline_ms", self.server_status.offline_ms),
            ("reveal.stat_box_delay_ms", self.reveal.stat_box_delay_ms),
            ("reveal.card_delay_ms", self.reveal.card_delay_ms),
            ("reveal.commit_pause_ms", self.reveal.commit_pause_ms),
            ("timing.clock_period_ms", self.timing.clock_period_ms),
            ("timing.resize_debounce_ms", self.timing.resize_debounce_ms),
            ("timing.frame_ms", self.timing.frame_ms),
            ("timing.copy_confirm_ms", self.timing.copy_confirm_ms),
            ("timing.easter_egg_ms", self.timing.easter_egg_ms),
        ];
        for (name, value) in durations {
            if value > MAX_DURATION_MS {
                return Err(FortressError::Config(format!(
                    "{name} must be at most {MAX_DURATION_MS}, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl MetricsConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

impl ServerStatusConfig {
    pub fn check_period(&self) -> Duration {
        Duration::from_millis(self.check_period_ms)
    }

    pub fn offline_for(&self) -> Duration {
        Duration::from_millis(self.offline_ms)
    }
}

impl TimingConfig {
    pub fn clock_period(&self) -> Duration {
        Duration::from_millis(self.clock_period_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn copy_confirm(&self) -> Duration {
        Duration::from_millis(self.copy_confirm_ms)
    }

    pub fn easter_egg(&self) -> Duration {
        Duration::from_millis(self.easter_egg_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FortressConfig::default();
        assert_eq!(config.header.scroll_threshold, 100.0);
        assert_eq!(config.reveal.threshold, 0.15);
        assert_eq!(config.reveal.bottom_margin, 100.0);
        assert_eq!(config.metrics.period(), Duration::from_secs(3));
        assert_eq!(config.server_status.check_period(), Duration::from_secs(10));
        assert_eq!(config.timing.resize_debounce(), Duration::from_millis(250));
        assert_eq!(config.menu.desktop_breakpoint, 768.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            FortressConfig::from_json(r#"{ "header": { "scroll_threshold": 50.0 } }"#).unwrap();
        assert_eq!(config.header.scroll_threshold, 50.0);
        assert_eq!(config.header.fallback_height, 80.0);
        assert_eq!(config.metrics, MetricsConfig::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = FortressConfig::from_json("{}").unwrap();
        assert_eq!(config, FortressConfig::default());
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = FortressConfig::from_json(r#"{ "metrics": { "floor": 90, "ceiling": 10 } }"#)
            .unwrap_err();
        assert!(matches!(err, FortressError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_period() {
        let err = FortressConfig::from_json(r#"{ "metrics": { "period_ms": 0 } }"#).unwrap_err();
        assert!(err.to_string().contains("metrics.period_ms"));
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let err = FortressConfig::from_json(r#"{ "reveal": { "threshold": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, FortressError::Config(_)));
    }

    #[test]
    fn test_rejects_huge_delay() {
        let err = FortressConfig::from_json(
            r#"{ "reveal": { "card_delay_ms": 18446744073709551615 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, FortressError::Config(_)));
        assert!(err.to_string().contains("reveal.card_delay_ms"));

        let err = FortressConfig::from_json(r#"{ "server_status": { "offline_ms": 60001 } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("server_status.offline_ms"));

        let at_limit = FortressConfig::from_json(r#"{ "timing": { "easter_egg_ms": 60000 } }"#);
        assert!(at_limit.is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "metrics": { "period_ms": 1500 } }"#).unwrap();

        let config = FortressConfig::load(&path).unwrap();
        assert_eq!(config.metrics.period(), Duration::from_millis(1500));
        assert_eq!(config.reveal, RevealConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FortressConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, FortressError::Io(_)));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, br#"{ "reveal": { "threshold": -0.5 } }"#).unwrap();

        let err = FortressConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, FortressError::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = FortressConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FortressError::Json(_)));
    }
}
