//! Process standard output

use std::io::{self, Write};

use skillwire_domain::WorkOutput;

/// Writes to stdout, holding the stdout lock for a whole pass
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutput;

impl StdoutOutput {
    pub fn new() -> Self {
        Self
    }
}

impl WorkOutput for StdoutOutput {
    fn emit(&self, write: &mut dyn FnMut(&mut dyn Write) -> io::Result<()>) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        write(&mut lock)?;
        lock.flush()
    }
}
