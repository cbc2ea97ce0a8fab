//! Data model types for the authorizer.
//!
//! Inputs are the opaque [`Credential`] and the [`ResourcePath`], both read
//! out of an [`AuthorizerEvent`]. The rule table yields a [`Decision`]
//! (an [`Effect`] plus a [`Scope`]), which is rendered as an
//! [`AuthorizerResponse`] policy document.

mod credential;
mod decision;
mod effect;
mod event;
mod resource_path;
mod response;
mod scope;

pub use credential::Credential;
pub use decision::Decision;
pub use effect::Effect;
pub use event::AuthorizerEvent;
pub use resource_path::ResourcePath;
pub use response::{
    AuthorizerContext, AuthorizerResponse, INVOKE_ACTION, POLICY_VERSION, PRINCIPAL_ID,
    PolicyDocument, RESOURCE_ARN_PREFIX, Statement,
};
pub use scope::Scope;
