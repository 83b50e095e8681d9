//! Ports - Trait definitions adapters implement
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait WorkOutput      │  StdoutOutput
//!   fn emit()           │  BufferOutput
//! ```

pub mod work_output;
