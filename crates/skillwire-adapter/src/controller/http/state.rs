//! Shared handler state

use std::sync::Arc;

use skillwire_domain::{Employee, WorkOutput};
use skillwire_usecase::{ListSkills, PerformWork};

/// Use cases the HTTP handlers call
///
/// Cloned into every actix worker; the employee itself is shared read-only.
#[derive(Clone)]
pub struct HttpState {
    pub perform_work: PerformWork,
    pub list_skills: ListSkills,
}

impl HttpState {
    pub fn new(employee: Arc<Employee>, output: Arc<dyn WorkOutput>) -> Self {
        Self {
            perform_work: PerformWork::new(employee.clone(), output),
            list_skills: ListSkills::new(employee),
        }
    }
}
