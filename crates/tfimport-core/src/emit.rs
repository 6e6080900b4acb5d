//! Output of rendered blocks
//!
//! Blocks are written as soon as they are rendered and flushed one by one,
//! so a run that fails halfway leaves every block produced so far in the
//! output.

use std::io::Write;

use crate::error::Result;

/// Writes rendered blocks separated by a blank line
#[derive(Debug)]
pub struct Emitter<W: Write> {
    out: W,
    blocks: usize,
}

impl<W: Write> Emitter<W> {
    /// Create an emitter over an output stream
    pub fn new(out: W) -> Self {
        Self { out, blocks: 0 }
    }

    /// Write one block followed by a blank line, then flush
    pub fn emit(&mut self, block: &str) -> Result<()> {
        writeln!(self.out, "{}", block.trim_end())?;
        writeln!(self.out)?;
        self.out.flush()?;
        self.blocks += 1;
        Ok(())
    }

    /// Number of blocks written so far
    pub fn blocks_emitted(&self) -> usize {
        self.blocks
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
