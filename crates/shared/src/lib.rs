//! # Skillwire Shared
//!
//! Error type and configuration used across all Skillwire crates.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
