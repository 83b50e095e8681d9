//! Skill - A capability an employee can be given
//!
//! Skills are stateless. A skill is identified by its display name and its
//! only behaviour is `perform`, which writes one line describing the work.

use std::io::{self, Write};

/// The capability contract
///
/// Implementations must be cheap to share: the same instance is read from
/// every HTTP worker, so the trait requires `Send + Sync`.
pub trait Skill: Send + Sync {
    /// Human-readable name, constant for the lifetime of the instance
    fn name(&self) -> &str;

    /// Perform the skill, writing a line describing the action to `out`
    fn perform(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl core::fmt::Debug for dyn Skill + '_ {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Skill").field("name", &self.name()).finish()
    }
}

/// Name-only projection of a skill
///
/// Created on demand for external consumers; carries no identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkillSummary {
    name: String,
}

impl SkillSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Project a skill onto its summary
    pub fn of(skill: &dyn Skill) -> Self {
        Self::new(skill.name())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

impl core::fmt::Display for SkillSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name)
    }
}
