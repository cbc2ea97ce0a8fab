use chrono::NaiveDateTime;
use tracing::debug;

use crate::timestamp;
use crate::types::{
    AuthorizerContext, AuthorizerResponse, Credential, Decision, Effect, PRINCIPAL_ID,
    PolicyDocument, ResourcePath, Scope, Statement,
};

/// Credential granting access to every stage and resource.
pub const DEFAULT_FULL_ACCESS_TOKEN: &str = "123";
/// Credential granting access to `res3` paths only.
pub const DEFAULT_RESOURCE3_TOKEN: &str = "456";

/// The rule table. Cloneable and thread-safe; holds no per-request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorizer {
    full_access: Credential,
    resource3: Credential,
}

impl Default for Authorizer {
    fn default() -> Self {
        Authorizer::new(DEFAULT_FULL_ACCESS_TOKEN, DEFAULT_RESOURCE3_TOKEN)
    }
}

impl Authorizer {
    pub fn new(full_access: impl Into<Credential>, resource3: impl Into<Credential>) -> Self {
        Authorizer {
            full_access: full_access.into(),
            resource3: resource3.into(),
        }
    }

    /// Apply the rule table. First match wins; anything unknown is denied.
    pub fn decide(&self, credential: &Credential, path: &ResourcePath) -> Decision {
        if *credential == self.full_access {
            Decision::allow(Scope::Any)
        } else if *credential == self.resource3 {
            if path.is_resource3() {
                Decision::allow(Scope::Resource3)
            } else {
                Decision::deny(Scope::Any)
            }
        } else {
            Decision::deny(Scope::Any)
        }
    }

    /// Decide and render the policy document stamped with the current time.
    pub fn authorize(&self, credential: &Credential, path: &ResourcePath) -> AuthorizerResponse {
        debug!(
            event = "Authorize",
            phase = "Input",
            token = %credential,
            path = %path
        );

        let decision = self.decide(credential, path);
        build_response(decision.is_allowed(), decision.scope)
    }
}

/// Render a decision as a policy document stamped with the current local time.
pub fn build_response(is_allowed: bool, scope: Scope) -> AuthorizerResponse {
    build_response_at(is_allowed, scope, &timestamp::now())
}

/// Render a decision as a policy document stamped with `at`.
pub fn build_response_at(is_allowed: bool, scope: Scope, at: &NaiveDateTime) -> AuthorizerResponse {
    let effect = Effect::from(is_allowed);
    debug!(event = "Authorize", phase = "Effect", effect = %effect, scope = %scope);

    let response = AuthorizerResponse {
        principal_id: PRINCIPAL_ID,
        policy_document: PolicyDocument::single(Statement::invoke(effect, scope)),
        context: AuthorizerContext {
            authrized_time: timestamp::format_timestamp(at),
        },
    };

    debug!(event = "Authorize", phase = "Response", response = ?response);
    response
}
