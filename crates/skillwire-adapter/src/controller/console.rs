//! Console runners
//!
//! `DemoRunner` prints the dependency wiring demo transcript.
//! `OpenApiDemoRunner` prints the summary shown before the HTTP server
//! starts listening.

use std::sync::Arc;

use skillwire_domain::{Employee, WorkOutput};
use skillwire_usecase::{PerformWork, UseCaseError, WorkReport};
use tracing::info;

use super::http::SWAGGER_UI_PATH;

pub const DEMO_BANNER: &str = "=== Dependency Injection Demo: Skills Injected to Employee ===";
pub const DEMO_COMPLETE: &str = "=== Demo Complete ===";
pub const OPENAPI_BANNER: &str = "=== OpenAPI Integration Demo ===";

const KEY_POINTS: [&str; 4] = [
    "1. Every skill was constructed explicitly at startup",
    "2. All skill implementations were passed to the Employee as one list",
    "3. The Employee was passed to the DemoRunner",
    "4. No runtime discovery needed - all wiring lives in one startup function",
];

/// Runs the console demo once
#[derive(Clone)]
pub struct DemoRunner {
    perform_work: PerformWork,
}

impl DemoRunner {
    pub fn new(perform_work: PerformWork) -> Self {
        Self { perform_work }
    }

    /// Print the banner, let the employee work, then print the closing block
    pub fn run(&self) -> Result<WorkReport, UseCaseError> {
        let output = self.perform_work.output();

        output.line(DEMO_BANNER)?;
        let report = self.perform_work.execute()?;
        output.emit(&mut |out| {
            writeln!(out, "{}", DEMO_COMPLETE)?;
            writeln!(out, "Key Points:")?;
            for point in KEY_POINTS {
                writeln!(out, "{}", point)?;
            }
            Ok(())
        })?;

        info!(skills_used = report.skills_used, "console demo finished");
        Ok(report)
    }
}

/// Prints what the HTTP facade will expose
#[derive(Clone)]
pub struct OpenApiDemoRunner {
    employee: Arc<Employee>,
    output: Arc<dyn WorkOutput>,
    base_url: String,
}

impl OpenApiDemoRunner {
    pub fn new(
        employee: Arc<Employee>,
        output: Arc<dyn WorkOutput>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            employee,
            output,
            base_url: base_url.into(),
        }
    }

    pub fn run(&self) -> std::io::Result<()> {
        let employee = &self.employee;
        let base = self.base_url.trim_end_matches('/');

        self.output.emit(&mut |out| {
            writeln!(out, "{}", OPENAPI_BANNER)?;
            writeln!(out, "Employee created with {} skills:", employee.skill_count())?;
            for skill in employee.skills() {
                writeln!(out, "- {}", skill.name())?;
            }
            writeln!(out)?;
            writeln!(out, "API Endpoints available:")?;
            writeln!(out, "- GET {}/api/employees/work", base)?;
            writeln!(out, "- GET {}/api/employees/skills", base)?;
            writeln!(out, "- OpenAPI UI: {}{}/", base, SWAGGER_UI_PATH)?;
            writeln!(out, "{}", DEMO_COMPLETE)
        })
    }
}
