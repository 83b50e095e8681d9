//! ListSkills - Name-only view of the employee's skills

use std::sync::Arc;

use skillwire_domain::{Employee, SkillSummary};

use crate::error::UseCaseError;

/// Lists the employee's skills as summaries
#[derive(Debug, Clone)]
pub struct ListSkills {
    employee: Arc<Employee>,
}

impl ListSkills {
    pub fn new(employee: Arc<Employee>) -> Self {
        Self { employee }
    }

    /// Summaries in the employee's order
    ///
    /// An employee without skills is reported as [`UseCaseError::NoSkills`]
    /// rather than as an empty list.
    pub fn execute(&self) -> Result<Vec<SkillSummary>, UseCaseError> {
        let summaries = self.employee.summaries();
        if summaries.is_empty() {
            return Err(UseCaseError::NoSkills);
        }
        Ok(summaries)
    }
}
