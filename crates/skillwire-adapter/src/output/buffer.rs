//! In-Memory Output
//!
//! Collects transcripts in memory. Useful for testing and for callers that
//! want the text instead of printing it.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use skillwire_domain::WorkOutput;

/// In-memory `WorkOutput`
///
/// Thread-safe implementation using Mutex. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferOutput {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Written lines, without terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl WorkOutput for BufferOutput {
    fn emit(&self, write: &mut dyn FnMut(&mut dyn Write) -> io::Result<()>) -> io::Result<()> {
        let mut buf = self
            .buf
            .lock()
            .map_err(|_| io::Error::other("Failed to acquire output buffer lock"))?;
        write(&mut *buf)
    }
}
