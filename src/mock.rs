//! Stub backend that reports when it was invoked.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::error::AuthorizerError;
use crate::timestamp;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MockResponse {
    pub status_code: u16,
    /// JSON text: `{"invokedAt": "<timestamp>"}`.
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MockBody {
    pub invoked_at: String,
}

impl MockResponse {
    /// Decode the body text.
    pub fn parsed_body(&self) -> Result<MockBody, AuthorizerError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Answer any invocation with 200 and the current local time.
pub fn handle(event: &Value) -> Result<MockResponse, AuthorizerError> {
    debug!(event = "Mock", phase = "Received", payload = %event);
    respond_at(&timestamp::now_formatted())
}

fn respond_at(invoked_at: &str) -> Result<MockResponse, AuthorizerError> {
    Ok(MockResponse {
        status_code: 200,
        body: format!("{{\"invokedAt\": {}}}", serde_json::to_string(invoked_at)?),
    })
}
