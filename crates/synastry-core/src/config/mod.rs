//! Configuration management for the Synastry state engine.

mod sub_configs;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

pub use sub_configs::{
    AstroConfig, FusionConfig, GraphConfig, HouseSystem, LoggingConfig, ZodiacMode,
};

/// Main configuration structure.
///
/// Aggregates per-subsystem settings. The sub-config defaults are behavioral
/// contracts: overriding them changes numeric outputs and invalidates cached
/// chart digests.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub astro: AstroConfig,
    #[serde(default)]
    pub fusion: FusionConfig,
    #[serde(default)]
    pub graph: GraphConfig,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{SYNASTRY_ENV}.toml (environment-specific)
    /// 3. Environment variables with SYNASTRY_ prefix
    pub fn load() -> CoreResult<Self> {
        let env = std::env::var("SYNASTRY_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("SYNASTRY").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CoreError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> CoreResult<()> {
        self.astro
            .validate()
            .map_err(CoreError::ConfigError)?;
        self.fusion
            .validate()
            .map_err(CoreError::ConfigError)?;
        self.graph
            .validate()
            .map_err(CoreError::ConfigError)?;
        Ok(())
    }
}
