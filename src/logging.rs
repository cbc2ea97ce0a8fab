//! Log subscriber bootstrap for the hosting process.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt};

use crate::config::Config;
use crate::error::AuthorizerError;

/// Build the filter for the configured verbosity.
pub fn filter_for(config: &Config) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from(config.log_level).into())
        .parse_lossy("")
}

/// Install a global fmt subscriber filtered at the configured level.
///
/// Returns [`AuthorizerError::Logging`] if a global subscriber is already set.
pub fn init(config: &Config) -> Result<(), AuthorizerError> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_line_number(true))
        .with(filter_for(config))
        .try_init()?;
    Ok(())
}

/// Read [`Config`] from the environment and install the subscriber.
pub fn init_from_env() -> Result<Config, AuthorizerError> {
    let config = Config::from_env()?;
    init(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    fn debug_enabled_under(config: &Config) -> bool {
        let subscriber = tracing_subscriber::registry().with(filter_for(config));
        tracing::subscriber::with_default(subscriber, || tracing::enabled!(tracing::Level::DEBUG))
    }

    #[test]
    fn test_filter_follows_level() {
        let config = Config {
            log_level: LogLevel::Debug,
        };
        assert!(debug_enabled_under(&config));
        assert!(!debug_enabled_under(&Config::default()));
    }

    #[test]
    fn test_second_init_is_an_error() {
        let config = Config::default();
        // Another test may have installed a subscriber first; either way the
        // second call must fail.
        let _ = init(&config);
        assert!(matches!(init(&config), Err(AuthorizerError::Logging(_))));
    }
}
