//! Inbound Adapters - Entry points that drive the use cases
//!
//! Both entry points receive already-built use cases; neither constructs
//! skills or employees itself.

pub mod console;
pub mod http;

pub use console::{DemoRunner, OpenApiDemoRunner};
