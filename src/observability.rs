//! Tracing setup for the command-line binary

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Build the filter from `RUST_LOG`, falling back to `default_filter`
pub fn env_filter(default_filter: &str) -> Result<EnvFilter, ParseError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_filter),
    }
}

/// Install the global fmt subscriber, writing to stderr
///
/// Calling it twice is harmless; the second subscriber is discarded.
pub fn init_tracing(default_filter: &str) -> Result<(), ParseError> {
    let filter = env_filter(default_filter)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_default_filter() {
        if std::env::var("RUST_LOG").is_err() {
            assert!(env_filter("feedmedia=loud").is_err());
        }
    }

    #[test]
    fn test_init_twice() {
        assert!(init_tracing("warn").is_ok());
        assert!(init_tracing("warn").is_ok());
    }
}
