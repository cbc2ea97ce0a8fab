//! API gateway authorizer: maps a bearer credential and a resource path to
//! an allow/deny policy document, plus a stub backend handler.

pub use authorizer::{
    Authorizer, DEFAULT_FULL_ACCESS_TOKEN, DEFAULT_RESOURCE3_TOKEN, build_response,
    build_response_at,
};
pub use config::{Config, LogLevel};
pub use error::AuthorizerError;
pub use handler::lambda_handler;
pub use types::{
    AuthorizerContext, AuthorizerEvent, AuthorizerResponse, Credential, Decision, Effect,
    PolicyDocument, ResourcePath, Scope, Statement,
};

mod authorizer;
pub mod config;
mod error;
mod handler;
pub mod logging;
pub mod mock;
pub mod timestamp;
pub mod types;
