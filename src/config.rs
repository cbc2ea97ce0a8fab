//! Runtime configuration read from the process environment.
//!
//! The only recognized option is `LOG_LEVEL`. It defaults to `WARNING`,
//! which keeps the debug diagnostics of the authorizer silent.

use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumString};
use tracing_subscriber::filter::LevelFilter;

use crate::error::AuthorizerError;

/// Environment variable holding the log verbosity.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Log verbosity, named the way gateway function settings usually spell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LogLevel {
    #[strum(to_string = "TRACE")]
    Trace,
    #[strum(to_string = "DEBUG")]
    Debug,
    #[strum(to_string = "INFO")]
    Info,
    #[default]
    #[strum(to_string = "WARNING", serialize = "WARN", serialize = "NOTSET")]
    Warning,
    #[strum(to_string = "ERROR", serialize = "CRITICAL", serialize = "FATAL")]
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub log_level: LogLevel,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, AuthorizerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AuthorizerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_ENV) {
            Some(raw) if !raw.trim().is_empty() => {
                LogLevel::from_str(raw.trim()).map_err(|_| {
                    AuthorizerError::InvalidConfig(format!(
                        "unknown {LOG_LEVEL_ENV} value '{raw}' (expected one of TRACE, DEBUG, INFO, WARNING, WARN, NOTSET, ERROR, CRITICAL, FATAL)"
                    ))
                })?
            }
            _ => LogLevel::default(),
        };

        Ok(Config { log_level })
    }
}
