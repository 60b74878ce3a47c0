//! Timing and layout configuration.
//!
//! Configuration is TOML. The loader supports:
//! - Bundled defaults (include_str! from maru.toml)
//! - User overrides (~/.config/maru/maru.toml, then ./maru.toml)
//! - Automatic merging with user values taking precedence
//!
//! Every duration is stored in milliseconds and exposed as a `Duration`
//! through an accessor of the same name without the `_ms` suffix.

use config::{Config, File, FileFormat};
use maru_error::{ConfigError, MaruError, MaruResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Durations of the channels that make up one chapter transition.
///
/// # Example
///
/// ```toml
/// [transition]
/// page_ms = 1800
/// distortion_peak = 300.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Page translation, which gates the commit
    pub page_ms: u64,
    /// Distortion ramp up
    pub distortion_rise_ms: u64,
    /// Distortion decay back to zero
    pub distortion_decay_ms: u64,
    /// Displacement scale at the top of the pulse
    pub distortion_peak: f64,
    /// Accent color cross-fade
    pub accent_ms: u64,
    /// Per-glyph title reveal
    pub title_reveal_ms: u64,
    /// Offset between title glyphs
    pub title_stagger_ms: u64,
    /// Per-word description reveal
    pub description_reveal_ms: u64,
    /// Offset between description words
    pub description_stagger_ms: u64,
    /// Wait between title and description reveal
    pub description_delay_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            page_ms: 1800,
            distortion_rise_ms: 1000,
            distortion_decay_ms: 1200,
            distortion_peak: 300.0,
            accent_ms: 1500,
            title_reveal_ms: 1200,
            title_stagger_ms: 30,
            description_reveal_ms: 1000,
            description_stagger_ms: 10,
            description_delay_ms: 300,
        }
    }
}

impl TransitionConfig {
    /// Page translation duration.
    pub fn page(&self) -> Duration {
        Duration::from_millis(self.page_ms)
    }

    /// Distortion rise duration.
    pub fn distortion_rise(&self) -> Duration {
        Duration::from_millis(self.distortion_rise_ms)
    }

    /// Distortion decay duration.
    pub fn distortion_decay(&self) -> Duration {
        Duration::from_millis(self.distortion_decay_ms)
    }

    /// Accent cross-fade duration.
    pub fn accent(&self) -> Duration {
        Duration::from_millis(self.accent_ms)
    }

    /// Title reveal duration.
    pub fn title_reveal(&self) -> Duration {
        Duration::from_millis(self.title_reveal_ms)
    }

    /// Title stagger step.
    pub fn title_stagger(&self) -> Duration {
        Duration::from_millis(self.title_stagger_ms)
    }

    /// Description reveal duration.
    pub fn description_reveal(&self) -> Duration {
        Duration::from_millis(self.description_reveal_ms)
    }

    /// Description stagger step.
    pub fn description_stagger(&self) -> Duration {
        Duration::from_millis(self.description_stagger_ms)
    }

    /// Description reveal delay.
    pub fn description_delay(&self) -> Duration {
        Duration::from_millis(self.description_delay_ms)
    }
}

/// Input normalization thresholds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Minimum |deltaY| for a wheel event to count as a step
    pub wheel_threshold: f64,
    /// Window after an accepted wheel step during which wheel input is dropped
    pub wheel_cooldown_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            wheel_threshold: 50.0,
            wheel_cooldown_ms: 2000,
        }
    }
}

impl InputConfig {
    /// Wheel cooldown window.
    pub fn wheel_cooldown(&self) -> Duration {
        Duration::from_millis(self.wheel_cooldown_ms)
    }
}

/// Guided tour layout.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TourConfig {
    /// Margin added around the target on every side of the spotlight
    pub spotlight_padding: f64,
    /// Distance between the target and the card
    pub card_gap: f64,
    /// Minimum distance between the card and any viewport edge
    pub edge_inset: f64,
    /// Overlay exit transition; geometry is cleared after it
    pub exit_delay_ms: u64,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            spotlight_padding: 10.0,
            card_gap: 20.0,
            edge_inset: 20.0,
            exit_delay_ms: 650,
        }
    }
}

impl TourConfig {
    /// Exit transition delay.
    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }
}

/// Landmark detail popover animation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DetailConfig {
    /// Scale-in duration
    pub open_ms: u64,
    /// Scale-out duration
    pub close_ms: u64,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            open_ms: 600,
            close_ms: 400,
        }
    }
}

impl DetailConfig {
    /// Scale-in duration.
    pub fn open(&self) -> Duration {
        Duration::from_millis(self.open_ms)
    }

    /// Scale-out duration.
    pub fn close(&self) -> Duration {
        Duration::from_millis(self.close_ms)
    }
}

/// Top-level Maru configuration.
///
/// # Example
///
/// ```no_run
/// use maru_narrative::MaruConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MaruConfig::load()?;
/// println!("Page transition: {:?}", config.transition.page());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct MaruConfig {
    /// Transition channel timings
    #[serde(default)]
    pub transition: TransitionConfig,
    /// Input thresholds
    #[serde(default)]
    pub input: InputConfig,
    /// Tour layout
    #[serde(default)]
    pub tour: TourConfig,
    /// Detail popover timings
    #[serde(default)]
    pub detail: DetailConfig,
}

impl MaruConfig {
    /// Load configuration from a specific file path, layered over the
    /// bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> MaruResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
            .build()
            .map_err(|e| {
                MaruError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MaruError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (maru.toml shipped with the crate)
    /// 2. User config in home directory (~/.config/maru/maru.toml)
    /// 3. User config in current directory (./maru.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file is malformed or a value is invalid.
    #[instrument]
    pub fn load() -> MaruResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/maru/maru.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("maru").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| {
                MaruError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MaruError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check values the core cannot work with.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transition.page_ms == 0 {
            return Err(ConfigError::new("transition.page_ms must be greater than 0"));
        }
        if !self.transition.distortion_peak.is_finite() || self.transition.distortion_peak < 0.0 {
            return Err(ConfigError::new(format!(
                "transition.distortion_peak must be a non-negative number, got {}",
                self.transition.distortion_peak
            )));
        }
        if !self.input.wheel_threshold.is_finite() || self.input.wheel_threshold < 0.0 {
            return Err(ConfigError::new(format!(
                "input.wheel_threshold must be a non-negative number, got {}",
                self.input.wheel_threshold
            )));
        }
        for (name, value) in [
            ("tour.spotlight_padding", self.tour.spotlight_padding),
            ("tour.card_gap", self.tour.card_gap),
            ("tour.edge_inset", self.tour.edge_inset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::new(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../maru.toml");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_match_struct_defaults() {
        let bundled: MaruConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(bundled, MaruConfig::default());
    }

    #[test]
    fn zero_page_duration_is_rejected() {
        let mut config = MaruConfig::default();
        config.transition.page_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_inset_is_rejected() {
        let mut config = MaruConfig::default();
        config.tour.edge_inset = -5.0;
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("tour.edge_inset"));
    }
}
