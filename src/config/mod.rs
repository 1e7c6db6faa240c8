//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `LOTTO_PICKER__<SECTION>__<KEY>` pattern
//! - A `.env` file in the working directory

mod draw;
mod server;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use draw::{DrawConfig, RevealConfig, UiConfig};
pub use server::ServerConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Draw limits and defaults.
    #[serde(default)]
    pub draw: DrawConfig,

    /// Reveal timeline configuration.
    #[serde(default)]
    pub reveal: RevealConfig,

    /// Static front-end configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{LOTTO_PICKER_PROFILE}.toml` (if `LOTTO_PICKER_PROFILE` is set)
    /// 3. Environment variables with `LOTTO_PICKER__` prefix
    ///
    /// Variables from a `.env` file are exported before step 2.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        // Missing .env is fine
        dotenvy::dotenv().ok();

        let profile =
            std::env::var("LOTTO_PICKER_PROFILE").unwrap_or_else(|_| "development".to_string());

        Self::load_from("config", &profile)
    }

    /// Load configuration from `dir/default` and `dir/{profile}` plus environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(dir: &str, profile: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(&format!("{dir}/default")).required(false))
            .add_source(File::with_name(&format!("{dir}/{profile}")).required(false))
            // LOTTO_PICKER__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::with_prefix("LOTTO_PICKER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".to_string()));
        }

        self.draw.validate()?;
        self.ui.validate()?;

        if !matches!(self.observability.log_format.as_str(), "text" | "json") {
            return Err(ConfigError::Message(format!(
                "observability.log_format must be \"text\" or \"json\", got {:?}",
                self.observability.log_format
            )));
        }

        if !self.observability.metrics_path.starts_with('/') {
            return Err(ConfigError::Message(
                "observability.metrics_path must start with '/'".to_string(),
            ));
        }

        Ok(())
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Enable Prometheus metrics endpoint.
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,

    /// Metrics endpoint path.
    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

const fn default_metrics_enabled() -> bool {
    true
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            metrics_enabled: default_metrics_enabled(),
            metrics_path: default_metrics_path(),
        }
    }
}
