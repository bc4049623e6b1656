// Subscriber setup for the demo binaries. Library code only emits events.

use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;
use crate::error::{Error, Result};

/// `RUST_LOG` wins; otherwise `config.log_level`.
pub fn filter(config: &DemoConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Logs go to stderr so stdout carries only the demo output.
pub fn init(config: &DemoConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        let config = DemoConfig::default();
        // Another test may have installed one already; either way the
        // second attempt has to fail cleanly.
        let _ = init(&config);
        assert!(matches!(init(&config), Err(Error::Logging(_))));
    }
}
