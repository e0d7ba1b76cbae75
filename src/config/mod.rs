//! Configuration management for feedmedia
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use feedmedia::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Native embeds: {}", config.render.native);
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `FEEDMEDIA__<section>__<key>`
//!
//! Examples:
//! - `FEEDMEDIA__EMBED__WIDTH=100%`
//! - `FEEDMEDIA__EMBED__ALTCLASS=enclosure-link`
//! - `FEEDMEDIA__RENDER__NATIVE=true`
//! - `FEEDMEDIA__TELEMETRY__LOG_FILTER=feedmedia=debug`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/feedmedia.toml`.
//! This can be overridden using the `FEEDMEDIA_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use models::{Config, RenderConfig, TelemetryConfig};
pub use sources::default_path;
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables (`FEEDMEDIA__*`)
    /// 2. TOML file (default: `config/feedmedia.toml`)
    /// 3. Default values
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file is malformed
    /// - Validation fails (out-of-range dimensions, bad log filter)
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    ///
    /// Useful for testing with custom configuration files.
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
