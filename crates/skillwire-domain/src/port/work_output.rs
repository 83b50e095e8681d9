//! WorkOutput - Where a work pass writes its transcript
//!
//! The domain writes to `&mut dyn Write`. This port hands out such a writer
//! for the duration of one pass, so a transcript is never interleaved with
//! another one written concurrently.

use std::io::{self, Write};

/// Output port for work transcripts
///
/// This is a PORT in hexagonal architecture.
/// Implementations: stdout for the real process, an in-memory buffer for tests.
pub trait WorkOutput: Send + Sync {
    /// Run `write` with exclusive access to the underlying writer
    fn emit(&self, write: &mut dyn FnMut(&mut dyn Write) -> io::Result<()>) -> io::Result<()>;

    /// Write a single line
    fn line(&self, text: &str) -> io::Result<()> {
        self.emit(&mut |out| writeln!(out, "{}", text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct VecOutput(Mutex<Vec<u8>>);

    impl WorkOutput for VecOutput {
        fn emit(
            &self,
            write: &mut dyn FnMut(&mut dyn Write) -> io::Result<()>,
        ) -> io::Result<()> {
            let mut buf = self.0.lock().unwrap();
            write(&mut *buf)
        }
    }

    #[test]
    fn test_line_appends_newline() {
        let output = VecOutput(Mutex::new(Vec::new()));
        output.line("hello").unwrap();
        output.line("world").unwrap();

        assert_eq!(&*output.0.lock().unwrap(), b"hello\nworld\n");
    }
}
