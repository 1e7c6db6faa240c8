//! Draw and reveal configuration.

use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::domain::Locale;

/// Limits and defaults for draws.
#[derive(Debug, Clone, Deserialize)]
pub struct DrawConfig {
    /// Largest `end - start + 1` the service will enumerate.
    #[serde(default = "default_max_range_size")]
    pub max_range_size: u64,

    /// Message language when the request does not name one.
    #[serde(default)]
    pub default_locale: Locale,
}

const fn default_max_range_size() -> u64 {
    1_000_000
}

impl DrawConfig {
    /// Validate the draw configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the range limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_range_size == 0 {
            return Err(ConfigError::Message(
                "draw.max_range_size cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            max_range_size: default_max_range_size(),
            default_locale: Locale::default(),
        }
    }
}

/// Timings for the staged reveal, in milliseconds.
#[derive(Debug, Clone, Deserialize)]
pub struct RevealConfig {
    /// Maximum number of balls shown inside the machine.
    #[serde(default = "default_preview_size")]
    pub preview_size: usize,

    /// Delay before the machine appears.
    #[serde(default = "default_machine_show_delay_ms")]
    pub machine_show_delay_ms: u64,

    /// How long the machine mixes before the first ball drops.
    #[serde(default = "default_mix_duration_ms")]
    pub mix_duration_ms: u64,

    /// Gap between result balls.
    #[serde(default = "default_ball_interval_ms")]
    pub ball_interval_ms: u64,

    /// Extra glow delay per ball index.
    #[serde(default = "default_glow_stagger_ms")]
    pub glow_stagger_ms: u64,

    /// Machine fade-out duration.
    #[serde(default = "default_fade_out_ms")]
    pub fade_out_ms: u64,

    /// Confetti duration.
    #[serde(default = "default_celebration_ms")]
    pub celebration_ms: u64,
}

const fn default_preview_size() -> usize {
    30
}

const fn default_machine_show_delay_ms() -> u64 {
    100
}

const fn default_mix_duration_ms() -> u64 {
    3000
}

const fn default_ball_interval_ms() -> u64 {
    250
}

const fn default_glow_stagger_ms() -> u64 {
    300
}

const fn default_fade_out_ms() -> u64 {
    500
}

const fn default_celebration_ms() -> u64 {
    5000
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            preview_size: default_preview_size(),
            machine_show_delay_ms: default_machine_show_delay_ms(),
            mix_duration_ms: default_mix_duration_ms(),
            ball_interval_ms: default_ball_interval_ms(),
            glow_stagger_ms: default_glow_stagger_ms(),
            fade_out_ms: default_fade_out_ms(),
            celebration_ms: default_celebration_ms(),
        }
    }
}

/// Static front-end configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Serve static files for unmatched paths.
    #[serde(default)]
    pub enabled: bool,

    /// Directory holding the front end.
    #[serde(default = "default_ui_path")]
    pub path: PathBuf,
}

fn default_ui_path() -> PathBuf {
    PathBuf::from("./static")
}

impl UiConfig {
    /// Validate the UI configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the UI is enabled but its directory does not exist.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && !self.path.is_dir() {
            return Err(ConfigError::Message(format!(
                "ui.path {} is not a directory",
                self.path.display()
            )));
        }
        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_ui_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_config_validation() {
        assert!(DrawConfig::default().validate().is_ok());

        let config = DrawConfig {
            max_range_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ui_config_validation() {
        assert!(UiConfig::default().validate().is_ok());

        let dir = tempfile::TempDir::new().unwrap();
        let mut config = UiConfig {
            enabled: true,
            path: dir.path().to_path_buf(),
        };
        assert!(config.validate().is_ok());

        config.path = dir.path().join("missing");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reveal_defaults() {
        let config = RevealConfig::default();
        assert_eq!(config.preview_size, 30);
        assert_eq!(config.mix_duration_ms, 3000);
        assert_eq!(config.ball_interval_ms, 250);
    }
}
