//! # Skillwire Domain Layer
//!
//! The capability contract and the aggregate that composes capabilities.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/ - Skill contract, Employee aggregate, SkillSummary  ││
//! │  │  port/  - Trait definitions for output (not implementations)││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This crate only depends on `std`. Skills are written against
//! [`std::io::Write`] so the caller decides where their output goes.

pub mod model;
pub mod port;

// Re-export commonly used types
pub use model::{
    employee::Employee,
    skill::{Skill, SkillSummary},
};

pub use port::work_output::WorkOutput;
