//! Entry adapter between the gateway invocation envelope and the authorizer.

use serde_json::Value;
use tracing::debug;

use crate::authorizer::Authorizer;
use crate::error::AuthorizerError;
use crate::types::{AuthorizerEvent, AuthorizerResponse};

impl Authorizer {
    /// Extract credential and path from a decoded envelope and authorize.
    ///
    /// A missing credential or path is an error, never an implicit deny.
    pub fn handle(&self, event: &AuthorizerEvent) -> Result<AuthorizerResponse, AuthorizerError> {
        let credential = event.credential()?;
        let path = event.resource_path()?;
        Ok(self.authorize(&credential, &path))
    }

    /// Decode a raw JSON envelope and authorize.
    pub fn handle_value(&self, event: Value) -> Result<AuthorizerResponse, AuthorizerError> {
        debug!(event = "Invocation", phase = "Received", payload = %event);
        let event = AuthorizerEvent::from_value(event)?;
        self.handle(&event)
    }
}

/// Entry point for the hosting layer: raw envelope in, raw document out,
/// using the default credential table.
pub fn lambda_handler(event: Value) -> Result<Value, AuthorizerError> {
    let response = Authorizer::default().handle_value(event)?;
    Ok(serde_json::to_value(response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Effect;
    use serde_json::json;

    #[test]
    fn test_handle_token_shape() {
        let response = Authorizer::default()
            .handle_value(json!({"authorizationToken": "123", "path": "/anything"}))
            .unwrap();
        assert_eq!(response.effect(), Some(Effect::Allow));
    }

    #[test]
    fn test_handle_request_shape() {
        let response = Authorizer::default()
            .handle_value(json!({"headers": {"authtoken": "456"}, "path": "/res1"}))
            .unwrap();
        assert_eq!(response.effect(), Some(Effect::Deny));
        assert_eq!(response.resource(), Some("arn:aws:execute-api:*:*:*/*/*/*"));
    }

    #[test]
    fn test_handle_missing_fields() {
        let authorizer = Authorizer::default();
        assert_eq!(
            authorizer.handle_value(json!({"path": "/res1"})),
            Err(AuthorizerError::MissingCredential)
        );
        assert_eq!(
            authorizer.handle_value(json!({"authorizationToken": "123"})),
            Err(AuthorizerError::MissingPath)
        );
    }

    #[test]
    fn test_missing_credential_reported_before_path() {
        assert_eq!(
            Authorizer::default().handle_value(json!({})),
            Err(AuthorizerError::MissingCredential)
        );
    }

    #[test]
    fn test_lambda_handler_returns_raw_document() {
        let out = lambda_handler(json!({"authorizationToken": "999", "path": "/res3/items"}))
            .unwrap();
        assert_eq!(out["principalId"], json!(1));
        assert_eq!(out["policyDocument"]["Statement"][0]["Effect"], json!("Deny"));
        assert!(out["context"]["authrized_time"].is_string());
    }
}
