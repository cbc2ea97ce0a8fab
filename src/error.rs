use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthorizerError {
    #[error("invocation event carries neither `authorizationToken` nor `headers.authtoken`")]
    MissingCredential,

    #[error("invocation event carries no `path`")]
    MissingPath,

    #[error("invalid invocation event: {0}")]
    InvalidEvent(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}

impl From<serde_json::Error> for AuthorizerError {
    fn from(err: serde_json::Error) -> Self {
        AuthorizerError::Serialization(err.to_string())
    }
}

impl From<tracing_subscriber::util::TryInitError> for AuthorizerError {
    fn from(err: tracing_subscriber::util::TryInitError) -> Self {
        AuthorizerError::Logging(err.to_string())
    }
}
