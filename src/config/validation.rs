use super::models::Config;
use crate::embed::Dimension;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("embed.{field} percentage must be between 1 and 100, got {value}%")]
    InvalidPercentage { field: String, value: u32 },

    #[error("embed.{field} must not be zero pixels")]
    ZeroDimension { field: String },

    #[error("embed.bgcolor must not be empty")]
    EmptyBackgroundColor,

    #[error("telemetry.log_filter '{filter}' is invalid: {reason}")]
    InvalidLogFilter { filter: String, reason: String },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_dimension("width", config.embed.width)?;
    validate_dimension("height", config.embed.height)?;
    validate_bgcolor(config)?;
    validate_telemetry(config)?;
    Ok(())
}

/// Site-wide dimensions must be `auto`, a non-zero pixel count, or 1–100%
fn validate_dimension(field: &str, dimension: Option<Dimension>) -> Result<(), ValidationError> {
    match dimension {
        Some(Dimension::Percent(value)) if value == 0 || value > 100 => {
            Err(ValidationError::InvalidPercentage {
                field: field.to_string(),
                value,
            })
        }
        Some(Dimension::Pixels(0)) => Err(ValidationError::ZeroDimension {
            field: field.to_string(),
        }),
        _ => Ok(()),
    }
}

fn validate_bgcolor(config: &Config) -> Result<(), ValidationError> {
    if let Some(bgcolor) = &config.embed.bgcolor {
        if bgcolor.trim().is_empty() {
            return Err(ValidationError::EmptyBackgroundColor);
        }
    }

    Ok(())
}

fn validate_telemetry(config: &Config) -> Result<(), ValidationError> {
    EnvFilter::try_new(&config.telemetry.log_filter).map_err(|err| {
        ValidationError::InvalidLogFilter {
            filter: config.telemetry.log_filter.clone(),
            reason: err.to_string(),
        }
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = Config::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_valid_dimensions() {
        let mut config = Config::default();
        config.embed.width = Some(Dimension::Percent(100));
        config.embed.height = Some(Dimension::Pixels(270));
        assert!(validate(&config).is_ok());

        config.embed.width = Some(Dimension::Auto);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_percentage_out_of_range() {
        let mut config = Config::default();
        config.embed.width = Some(Dimension::Percent(150));

        let result = validate(&config);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidPercentage { value: 150, .. })
        ));
    }

    #[test]
    fn test_zero_pixels() {
        let mut config = Config::default();
        config.embed.height = Some(Dimension::Pixels(0));

        let result = validate(&config);
        assert!(matches!(result, Err(ValidationError::ZeroDimension { .. })));
    }

    #[test]
    fn test_empty_bgcolor() {
        let mut config = Config::default();
        config.embed.bgcolor = Some("  ".to_string());

        let result = validate(&config);
        assert!(matches!(result, Err(ValidationError::EmptyBackgroundColor)));
    }

    #[test]
    fn test_invalid_log_filter() {
        let mut config = Config::default();
        config.telemetry.log_filter = "feedmedia=loud".to_string();

        let result = validate(&config);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidLogFilter { .. })
        ));
    }
}
