//! Bearer credential carried by the invocation.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An opaque bearer token. Only ever compared for equality.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new<T: Into<String>>(token: T) -> Self {
        Credential(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Credential {
    fn from(token: &str) -> Self {
        Credential::new(token)
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Credential(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_equality_is_exact() {
        assert_eq!(Credential::from("123"), Credential::new("123".to_string()));
        assert_ne!(Credential::from("123"), Credential::from(" 123"));
        assert_ne!(Credential::from("123"), Credential::default());
    }

    #[test]
    fn test_credential_serializes_as_plain_string() {
        let serialized = serde_json::to_value(Credential::from("456")).unwrap();
        assert_eq!(serialized, serde_json::json!("456"));
    }
}
