//! Output Adapters - `WorkOutput` implementations
//!
//! These implement the output port from skillwire-domain.

pub mod buffer;
pub mod stdout;

pub use buffer::BufferOutput;
pub use stdout::StdoutOutput;
