//! Output plumbing shared by commands

use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter that buffers command output into a `minus` pager
///
/// `log` and `global-log` write through it when stdout is a terminal; the
/// buffered text is shown once the command has finished.
#[derive(Clone)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn new() -> Self {
        PagerWriter {
            pager: Pager::new(),
        }
    }

    /// Display everything written so far and block until the user quits
    pub fn page(self) -> anyhow::Result<()> {
        minus::page_all(self.pager)?;
        Ok(())
    }
}

impl Default for PagerWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
