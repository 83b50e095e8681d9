//! Dependency wiring
//!
//! ```text
//! AppConfig ──► SkillCatalog::resolve ──► Vec<Arc<dyn Skill>>
//!                                              │
//!                                              ▼
//!                                          Employee ──► PerformWork / ListSkills
//!                                                            │
//!                                                            ▼
//!                                          DemoRunner, OpenApiDemoRunner, HttpState
//! ```
//!
//! Everything is built here, once, and passed down explicitly.

use std::sync::Arc;

use shared::AppConfig;
use skills::SkillCatalog;
use skillwire_adapter::controller::http::HttpState;
use skillwire_adapter::controller::{DemoRunner, OpenApiDemoRunner};
use skillwire_domain::{Employee, WorkOutput};
use skillwire_usecase::PerformWork;
use tracing::info;

/// The wired object graph
#[derive(Clone)]
pub struct Wiring {
    employee: Arc<Employee>,
    output: Arc<dyn WorkOutput>,
}

impl Wiring {
    /// Build the employee from the configured skill ids
    pub fn build(
        config: &AppConfig,
        catalog: &SkillCatalog,
        output: Arc<dyn WorkOutput>,
    ) -> shared::Result<Self> {
        let skills = catalog.resolve(&config.skills)?;
        let employee = Arc::new(Employee::new(skills));
        info!(skills = employee.skill_count(), "employee wired");

        Ok(Self { employee, output })
    }

    pub fn employee(&self) -> &Arc<Employee> {
        &self.employee
    }

    pub fn demo_runner(&self) -> DemoRunner {
        DemoRunner::new(PerformWork::new(self.employee.clone(), self.output.clone()))
    }

    pub fn openapi_runner(&self, base_url: impl Into<String>) -> OpenApiDemoRunner {
        OpenApiDemoRunner::new(self.employee.clone(), self.output.clone(), base_url)
    }

    pub fn http_state(&self) -> HttpState {
        HttpState::new(self.employee.clone(), self.output.clone())
    }
}
