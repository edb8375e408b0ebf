//! Editing session: one line buffer, one history, one decoder.
//!
//! A [`Session`] is the complete editing state of a shell, without any I/O of
//! its own. Bytes are pushed in with [`feed`](Session::feed) and the terminal
//! output for each of them is written to the sink passed alongside. This makes
//! it usable from an interrupt-driven UART as well as from the blocking
//! [`Shell`](super::Shell) loop.
//!
//! ```rust
//! use picoshell::shell::{Feed, Session};
//!
//! let mut session: Session<64, 4> = Session::new();
//! let mut out: heapless::Vec<u8, 256> = heapless::Vec::new();
//!
//! session.begin(&mut out).unwrap();
//! let mut state = Feed::Pending;
//! for &b in b"status\r" {
//!     state = session.feed(b, &mut out).unwrap();
//! }
//! assert_eq!(state, Feed::Entered);
//! assert_eq!(session.line(), b"status");
//! assert_eq!(session.history().get(0), Some(&b"status"[..]));
//! ```

use crate::config::{Config, ConfigError};
use crate::history::{History, Recall};
use crate::io::Write;
use crate::keys::{Decoded, Key, KeyDecoder};
use crate::line::{Edit, EditLine};
use crate::term;
use crate::{HIST_MAX, LINE_MAX};

/// State of the current line after a byte was fed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// Still editing.
    Pending,
    /// The line was finished with Enter and is available from
    /// [`Session::line`].
    Entered,
    /// The line was abandoned.
    Discarded,
}

/// Editing state of one shell.
#[derive(Debug)]
pub struct Session<const L: usize = LINE_MAX, const H: usize = HIST_MAX> {
    config: Config,
    line: EditLine<L>,
    history: History<H, L>,
    recall: Recall<L>,
    decoder: KeyDecoder,
}

impl<const L: usize, const H: usize> Default for Session<L, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const L: usize, const H: usize> Session<L, H> {
    /// A session with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// A session with the given configuration.
    pub fn with_config(config: Config) -> Self {
        let mut line = EditLine::new();
        line.set_bell(config.bell);
        Self {
            config,
            line,
            history: History::new(),
            recall: Recall::new(),
            decoder: KeyDecoder::new(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration. Takes effect immediately.
    pub fn set_config(&mut self, config: Config) {
        self.line.set_bell(config.bell);
        self.config = config;
    }

    /// Replace the prompt printed by [`begin`](Self::begin).
    ///
    /// # Errors
    ///
    /// [`ConfigError::PromptTooLong`] if the prompt does not fit.
    pub fn set_prompt(&mut self, prompt: &str) -> Result<(), ConfigError> {
        self.config.set_prompt(prompt)
    }

    /// Text of the current line.
    pub fn line(&self) -> &[u8] {
        self.line.as_bytes()
    }

    /// The line buffer, cursor and clipboard included.
    pub fn edit_line(&self) -> &EditLine<L> {
        &self.line
    }

    /// Committed lines.
    pub fn history(&self) -> &History<H, L> {
        &self.history
    }

    /// Committed lines, mutable, e.g. to preload or clear them.
    pub fn history_mut(&mut self) -> &mut History<H, L> {
        &mut self.history
    }

    /// History navigation offset, 0 while editing the live line.
    pub fn recall_offset(&self) -> usize {
        self.recall.offset()
    }

    /// History navigation state, including the line saved when browsing began.
    pub fn recall(&self) -> &Recall<L> {
        &self.recall
    }

    /// Start a new line: empty the buffer and print the prompt.
    ///
    /// # Errors
    ///
    /// Propagates errors of `out`.
    pub fn begin<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<(), W::Error> {
        self.line.clear();
        self.recall.reset();
        out.write_all(self.config.prompt.as_bytes())?;
        out.flush()
    }

    /// Process one input byte.
    ///
    /// # Errors
    ///
    /// Propagates errors of `out`.
    pub fn feed<W: Write + ?Sized>(&mut self, byte: u8, out: &mut W) -> Result<Feed, W::Error> {
        let feed = match self.decoder.feed(byte, &self.config) {
            Decoded::Key(key) => self.apply(key, out)?,
            Decoded::Pending | Decoded::Ignored | Decoded::Malformed => Feed::Pending,
        };
        out.flush()?;
        Ok(feed)
    }

    /// Apply a decoded event to the line.
    ///
    /// Events whose capability is disabled are applied anyway; filtering
    /// happens in the decoder.
    ///
    /// # Errors
    ///
    /// Propagates errors of `out`.
    pub fn apply<W: Write + ?Sized>(&mut self, key: Key, out: &mut W) -> Result<Feed, W::Error> {
        trace!("key {}", key);
        match key {
            Key::Enter => {
                out.write_all(term::NEWLINE)?;
                self.commit();
                return Ok(Feed::Entered);
            }
            Key::Discard => {
                self.line.clear();
                out.write_all(term::NEWLINE)?;
                self.recall.reset();
                return Ok(Feed::Discarded);
            }
            Key::Insert(byte) => self.line.insert(byte, out)?,
            Key::Backspace => self.line.backspace(out)?,
            Key::Delete => self.line.delete(out)?,
            Key::KillLine => self.line.kill_line(out)?,
            Key::ClearScreen => self.line.clear_screen(self.config.prompt.as_bytes(), out)?,
            Key::CursorLeft => self.line.cursor_left(out)?,
            Key::CursorRight => self.line.cursor_right(out)?,
            Key::LineHead => self.line.line_head(out)?,
            Key::LineTail => self.line.line_tail(out)?,
            Key::Yank => self.line.yank(out)?,
            Key::KillTail => self.line.kill_tail(out)?,
            Key::KillWord => self.line.kill_word(out)?,
            Key::HistPrev => self.hist_prev(out)?,
            Key::HistNext => self.hist_next(out)?,
        };
        Ok(Feed::Pending)
    }

    fn commit(&mut self) {
        if self.config.capabilities.history && !self.line.is_empty() {
            self.history.append(self.line.as_bytes());
        }
        self.recall.reset();
    }

    fn hist_prev<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<Edit, W::Error> {
        let offset = self.recall.offset();
        if offset == 0 {
            self.recall.save(self.line.as_bytes());
        }

        match self.history.get(offset) {
            Some(entry) => {
                self.line.replace_with(entry, out)?;
                self.recall.set_offset(offset + 1);
                Ok(Edit::Done)
            }
            None => self.line.refuse(out),
        }
    }

    fn hist_next<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<Edit, W::Error> {
        match self.recall.offset() {
            0 => self.line.refuse(out),
            1 => {
                self.line.replace_with(self.recall.saved(), out)?;
                self.recall.set_offset(0);
                Ok(Edit::Done)
            }
            offset => match self.history.get(offset - 2) {
                Some(entry) => {
                    self.line.replace_with(entry, out)?;
                    self.recall.set_offset(offset - 1);
                    Ok(Edit::Done)
                }
                None => self.line.refuse(out),
            },
        }
    }
}
