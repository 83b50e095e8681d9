//! Wire records
//!
//! Domain types stay free of serde and utoipa; these are the HTTP shapes.

use serde::{Deserialize, Serialize};
use skillwire_domain::SkillSummary;
use utoipa::ToSchema;

/// A skill as listed by `GET /api/employees/skills`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillInfo {
    #[schema(example = "Java Programming")]
    pub name: String,
}

impl From<SkillSummary> for SkillInfo {
    fn from(summary: SkillSummary) -> Self {
        Self {
            name: summary.into_name(),
        }
    }
}

/// Error envelope for server-side failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "internal_error")]
    pub code: String,
    #[schema(example = "Internal server error")]
    pub message: String,
}
