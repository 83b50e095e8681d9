//! # Skillwire Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `controller/` - Inbound adapters (console runners, HTTP)
//! - `output/` - Outbound adapters implementing `WorkOutput`

pub mod controller;
pub mod output;
