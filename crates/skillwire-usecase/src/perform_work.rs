//! PerformWork - Have the employee use every skill once

use std::sync::Arc;

use skillwire_domain::{Employee, WorkOutput};
use tracing::{debug, error};

use crate::error::UseCaseError;

/// Outcome of a work pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkReport {
    /// Number of skills used, in order
    pub skills_used: usize,
}

/// Runs [`Employee::work`] through a [`WorkOutput`]
#[derive(Clone)]
pub struct PerformWork {
    employee: Arc<Employee>,
    output: Arc<dyn WorkOutput>,
}

impl PerformWork {
    pub fn new(employee: Arc<Employee>, output: Arc<dyn WorkOutput>) -> Self {
        Self { employee, output }
    }

    /// Write the full work transcript in one exclusive pass
    ///
    /// Any failure, including one raised by a skill, is propagated as
    /// [`UseCaseError::Output`].
    pub fn execute(&self) -> Result<WorkReport, UseCaseError> {
        let employee = &self.employee;
        self.output
            .emit(&mut |out| employee.work(out))
            .map_err(|err| {
                error!(error = %err, "work pass failed");
                UseCaseError::Output(err)
            })?;

        let report = WorkReport {
            skills_used: employee.skill_count(),
        };
        debug!(skills_used = report.skills_used, "work pass complete");
        Ok(report)
    }

    pub fn employee(&self) -> &Arc<Employee> {
        &self.employee
    }

    pub fn output(&self) -> &Arc<dyn WorkOutput> {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Capture(Mutex<Vec<u8>>);

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl WorkOutput for Capture {
        fn emit(
            &self,
            write: &mut dyn FnMut(&mut dyn Write) -> io::Result<()>,
        ) -> io::Result<()> {
            let mut buf = self.0.lock().unwrap();
            write(&mut *buf)
        }
    }

    struct Closed;

    impl WorkOutput for Closed {
        fn emit(
            &self,
            _write: &mut dyn FnMut(&mut dyn Write) -> io::Result<()>,
        ) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }
    }

    #[test]
    fn test_execute_writes_transcript() {
        let employee = Arc::new(Employee::new(skills::default_skills()));
        let capture = Arc::new(Capture::default());
        let use_case = PerformWork::new(employee, capture.clone());

        let report = use_case.execute().unwrap();

        assert_eq!(report.skills_used, 2);
        assert_eq!(
            capture.text(),
            "Employee is working with injected skills:\n\
             - Using skill: Java Programming\n\
             Writing Java code with Spring Boot!\n\
             - Using skill: Database Management\n\
             Managing databases and writing SQL queries!\n"
        );
    }

    #[test]
    fn test_execute_with_no_skills() {
        let capture = Arc::new(Capture::default());
        let use_case = PerformWork::new(Arc::new(Employee::default()), capture.clone());

        let report = use_case.execute().unwrap();

        assert_eq!(report.skills_used, 0);
        assert_eq!(capture.text(), "Employee is working with injected skills:\n");
    }

    #[test]
    fn test_output_failure_propagates() {
        let employee = Arc::new(Employee::new(skills::default_skills()));
        let use_case = PerformWork::new(employee, Arc::new(Closed));

        let err = use_case.execute().unwrap_err();
        match err {
            UseCaseError::Output(io_err) => assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_repeated_passes_are_identical() {
        let employee = Arc::new(Employee::new(skills::default_skills()));
        let capture = Arc::new(Capture::default());
        let use_case = PerformWork::new(employee.clone(), capture.clone());

        use_case.execute().unwrap();
        let first = capture.text();
        use_case.execute().unwrap();

        assert_eq!(capture.text(), format!("{first}{first}"));
        let names: Vec<&str> = employee.skills().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Java Programming", "Database Management"]);
    }
}
