//! Employee - The aggregate composing a fixed list of skills
//!
//! The employee does not create its skills. It receives them, in order, at
//! construction and holds them unchanged for its whole lifetime.
//!
//! IMPORTANT: there is no way to add, remove or reorder skills after
//! construction. `work` and `skills` only read.

use std::io::{self, Write};
use std::sync::Arc;

use super::skill::{Skill, SkillSummary};

/// Header written once at the start of every work pass
pub const WORK_HEADER: &str = "Employee is working with injected skills:";

/// Employee - Holds the injected skills
#[derive(Debug, Clone, Default)]
pub struct Employee {
    /// Injected skills, in insertion order
    skills: Vec<Arc<dyn Skill>>,
}

impl Employee {
    /// Create an employee from an ordered list of skills
    ///
    /// An empty list is valid; such an employee works without using any skill.
    pub fn new(skills: Vec<Arc<dyn Skill>>) -> Self {
        Self { skills }
    }

    /// Use every skill in order
    ///
    /// Writes the header, then for each skill a `- Using skill: {name}` line
    /// directly followed by the skill's own output. The first failing write
    /// aborts the pass and is returned as-is.
    pub fn work(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", WORK_HEADER)?;
        for skill in &self.skills {
            writeln!(out, "- Using skill: {}", skill.name())?;
            skill.perform(out)?;
        }
        Ok(())
    }

    // ========== Getters ==========

    /// The injected skills, exactly as given at construction
    pub fn skills(&self) -> &[Arc<dyn Skill>] {
        &self.skills
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Name-only projections of the skills, in order
    pub fn summaries(&self) -> Vec<SkillSummary> {
        self.skills
            .iter()
            .map(|skill| SkillSummary::of(skill.as_ref()))
            .collect()
    }
}

impl From<Vec<Arc<dyn Skill>>> for Employee {
    fn from(skills: Vec<Arc<dyn Skill>>) -> Self {
        Self::new(skills)
    }
}
