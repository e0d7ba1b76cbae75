use super::models::Config;
use config::{ConfigError, Environment, File};
use std::env;
use std::path::PathBuf;

const CONFIG_ENV_VAR: &str = "FEEDMEDIA_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/feedmedia.toml";
const ENV_PREFIX: &str = "FEEDMEDIA";
const ENV_SEPARATOR: &str = "__";

/// Path of the configuration file: `FEEDMEDIA_CONFIG` or the default location
pub fn default_path() -> PathBuf {
    env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load configuration from multiple sources with priority:
/// 1. Defaults (embedded in structs)
/// 2. TOML file (if exists)
/// 3. Environment variables from .env file (via dotenvy)
/// 4. System environment variables (highest priority)
pub fn load() -> Result<Config, ConfigError> {
    // Load .env file if it exists (ignore errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    load_from_sources(default_path())
}

/// Load configuration from a specific path and environment
/// Useful for testing with custom config files
pub fn load_from_sources(config_path: PathBuf) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    if config_path.exists() {
        tracing::info!("Loading configuration from: {}", config_path.display());
        builder = builder.add_source(File::from(config_path).required(false));
    } else {
        tracing::debug!(
            "Configuration file not found at {}, using defaults and environment overrides",
            config_path.display()
        );
    }

    // FEEDMEDIA__EMBED__BGCOLOR -> embed.bgcolor
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true),
    );

    let config = builder.build()?;
    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::Dimension;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_only() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = load_from_sources(config_path).unwrap();
        assert!(!config.render.native);
        assert_eq!(config.telemetry.log_filter, "info");
    }

    #[test]
    fn test_load_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r##"
[embed]
altclass = "enclosure-link"
alt = "Download"
bgcolor = "#202020"
width = 640
height = "auto"
widescreen = true

[render]
native = true

[telemetry]
log_filter = "feedmedia=debug"
        "##;

        fs::write(&config_path, toml_content).unwrap();

        let config = load_from_sources(config_path).unwrap();
        assert_eq!(config.embed.altclass.as_deref(), Some("enclosure-link"));
        assert_eq!(config.embed.bgcolor.as_deref(), Some("#202020"));
        assert_eq!(config.embed.width, Some(Dimension::Pixels(640)));
        assert_eq!(config.embed.height, Some(Dimension::Auto));
        assert_eq!(config.embed.widescreen, Some(true));
        assert!(config.render.native);
        assert_eq!(config.telemetry.log_filter, "feedmedia=debug");
    }

    // Environment overrides are not exercised here: set_var is unsafe under
    // parallel tests.

    #[test]
    fn test_malformed_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "[embed\nwidth = ").unwrap();

        assert!(load_from_sources(config_path).is_err());
    }
}
