//! # Skillwire Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters:
//! every entry point (console runner, HTTP handler) goes through one of
//! these use cases instead of touching the `Employee` directly.

pub use skillwire_domain;

pub mod error;
pub mod list_skills;
pub mod perform_work;

pub use error::UseCaseError;
pub use list_skills::ListSkills;
pub use perform_work::{PerformWork, WorkReport};
