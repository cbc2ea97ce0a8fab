//! Gateway invocation envelope.
//!
//! Two shapes are accepted:
//! - token authorizer: `{ "authorizationToken": "...", "path": "..." }`
//! - request authorizer: `{ "headers": { "authtoken": "..." }, "path": "..." }`
//!
//! Any other fields are ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AuthorizerError;

use super::credential::Credential;
use super::resource_path::ResourcePath;

/// Header carrying the credential in request-shaped invocations.
pub const AUTH_TOKEN_HEADER: &str = "authtoken";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, Option<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl AuthorizerEvent {
    /// Decode an envelope from raw JSON.
    pub fn from_value(value: serde_json::Value) -> Result<Self, AuthorizerError> {
        serde_json::from_value(value).map_err(|e| AuthorizerError::InvalidEvent(e.to_string()))
    }

    /// The credential: `authorizationToken` first, then the `authtoken` header.
    pub fn credential(&self) -> Result<Credential, AuthorizerError> {
        if let Some(token) = &self.authorization_token {
            return Ok(Credential::new(token.as_str()));
        }
        self.header(AUTH_TOKEN_HEADER)
            .map(Credential::new)
            .ok_or(AuthorizerError::MissingCredential)
    }

    pub fn resource_path(&self) -> Result<ResourcePath, AuthorizerError> {
        self.path
            .as_deref()
            .map(ResourcePath::new)
            .ok_or(AuthorizerError::MissingPath)
    }

    /// Header lookup; a non-null exact key wins over a case-insensitive match.
    pub fn header(&self, name: &str) -> Option<&str> {
        let headers = self.headers.as_ref()?;
        if let Some(Some(value)) = headers.get(name) {
            return Some(value.as_str());
        }
        headers
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .find_map(|(_, value)| value.as_deref())
    }
}
