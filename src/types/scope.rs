//! Stage/resource wildcard a decision applies to.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
pub enum Scope {
    /// Any stage, any resource.
    #[default]
    #[strum(serialize = "*/*")]
    #[serde(rename = "*/*")]
    Any,
    /// Any stage, anything under `res3`.
    #[strum(serialize = "*/res3/*")]
    #[serde(rename = "*/res3/*")]
    Resource3,
}
