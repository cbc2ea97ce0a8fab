//! Resource path being accessed through the gateway.

use std::fmt::{Display, Formatter, Result as FmtResult};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `/res3/` followed by a non-empty remainder, anywhere in the path.
/// Unanchored: `/res1/res3/x` matches too.
static RESOURCE3_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/res3/.+").expect("resource-3 pattern is a valid regex"));

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct ResourcePath(String);

impl ResourcePath {
    pub fn new<T: Into<String>>(path: T) -> Self {
        ResourcePath(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for paths containing the `/res3/` segment with something after it.
    pub fn is_resource3(&self) -> bool {
        RESOURCE3_PATTERN.is_match(&self.0)
    }
}

impl Display for ResourcePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResourcePath {
    fn from(path: &str) -> Self {
        ResourcePath::new(path)
    }
}

impl From<String> for ResourcePath {
    fn from(path: String) -> Self {
        ResourcePath(path)
    }
}
