use crate::embed::OptionOverrides;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Site-wide embed defaults, layered under caller options
    #[serde(default)]
    pub embed: OptionOverrides,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Emit plugin `<embed>` tags instead of script calls
    #[serde(default)]
    pub native: bool,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}
