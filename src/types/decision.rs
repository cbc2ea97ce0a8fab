//! Outcome of the rule table.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::effect::Effect;
use super::scope::Scope;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub struct Decision {
    pub effect: Effect,
    pub scope: Scope,
}

impl Decision {
    pub fn allow(scope: Scope) -> Self {
        Decision {
            effect: Effect::Allow,
            scope,
        }
    }

    pub fn deny(scope: Scope) -> Self {
        Decision {
            effect: Effect::Deny,
            scope,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.effect.is_allow()
    }
}

impl Display for Decision {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}({})", self.effect, self.scope)
    }
}
