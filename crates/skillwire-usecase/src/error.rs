//! Use case errors

use thiserror::Error;

/// Errors returned by the use cases
#[derive(Debug, Error)]
pub enum UseCaseError {
    /// The employee holds no skills
    #[error("Employee has no skills")]
    NoSkills,

    /// Writing the work transcript failed
    #[error("Failed to write work output: {0}")]
    Output(#[from] std::io::Error),
}
