//! Policy-decision document returned to the gateway.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::effect::Effect;
use super::scope::Scope;

/// Fixed principal identifier; not derived from the credential.
pub const PRINCIPAL_ID: u64 = 1;
/// IAM policy language version.
pub const POLICY_VERSION: &str = "2012-10-17";
/// The only action the authorizer grants or denies.
pub const INVOKE_ACTION: &str = "execute-api:Invoke";
/// Resource template prefix; the scope is appended verbatim.
pub const RESOURCE_ARN_PREFIX: &str = "arn:aws:execute-api:*:*:*/*/";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub action: String,
    pub effect: Effect,
    pub resource: String,
}

impl Statement {
    /// An `execute-api:Invoke` statement over `scope`.
    pub fn invoke(effect: Effect, scope: Scope) -> Self {
        Statement {
            action: INVOKE_ACTION.to_string(),
            effect,
            resource: format!("{RESOURCE_ARN_PREFIX}{scope}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<Statement>,
}

impl PolicyDocument {
    pub fn single(statement: Statement) -> Self {
        PolicyDocument {
            version: POLICY_VERSION.to_string(),
            statement: vec![statement],
        }
    }
}

/// Values forwarded to the integration as `$context.authorizer.*`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct AuthorizerContext {
    // Key spelling is part of the wire contract.
    pub authrized_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerResponse {
    pub principal_id: u64,
    pub policy_document: PolicyDocument,
    pub context: AuthorizerContext,
}

impl AuthorizerResponse {
    /// Effect of the (single) statement, if any.
    pub fn effect(&self) -> Option<Effect> {
        self.policy_document.statement.first().map(|s| s.effect)
    }

    /// Resource of the (single) statement, if any.
    pub fn resource(&self) -> Option<&str> {
        self.policy_document
            .statement
            .first()
            .map(|s| s.resource.as_str())
    }
}
