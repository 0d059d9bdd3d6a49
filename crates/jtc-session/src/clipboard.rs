//! Clipboard backends.
//!
//! Copying is fire-and-forget from the viewer's point of view: the viewer
//! logs a failed write and moves on.

use std::io::Write;
use std::sync::{Arc, RwLock};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{SessionError, SessionResult};

/// Destination for copied text.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> SessionResult<()>;
}

/// Sets the system clipboard through the terminal with an OSC 52 escape.
///
/// Works over SSH and inside multiplexers that pass OSC 52 through; the
/// terminal decides whether to honor it.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> SessionResult<()> {
        write!(self.out, "\u{1b}]52;c;{}\u{7}", STANDARD.encode(text))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps the last copied text in memory. Clones share the same contents.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    contents: Arc<RwLock<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last copied text, if anything was copied.
    pub fn contents(&self) -> Option<String> {
        self.contents.read().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> SessionResult<()> {
        let mut contents = self
            .contents
            .write()
            .map_err(|e| SessionError::Clipboard(format!("lock poisoned: {e}")))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}
