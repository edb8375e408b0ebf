//! Editable line buffer.
//!
//! [`EditLine`] owns the line being typed, the cursor and the one-slot
//! clipboard. Every edit operation updates that state *and* writes the
//! smallest byte sequence that brings the terminal in line with it: echoed
//! characters, backspaces to walk the cursor back, and spaces to blank
//! vacated cells. There is no "redraw the whole line" primitive, which keeps
//! the shell usable over slow serial links.
//!
//! The terminal sink is any [`Write`] implementation. Rendering into a
//! `heapless::Vec` gives the exact delta of an operation:
//!
//! ```rust
//! use picoshell::line::{Edit, EditLine};
//!
//! let mut line: EditLine<16> = EditLine::new();
//! let mut out: heapless::Vec<u8, 64> = heapless::Vec::new();
//!
//! for &b in b"ac" {
//!     line.insert(b, &mut out).unwrap();
//! }
//! line.cursor_left(&mut out).unwrap();
//! out.clear();
//!
//! assert_eq!(line.insert(b'b', &mut out), Ok(Edit::Done));
//! assert_eq!(line.as_bytes(), b"abc");
//! assert_eq!(&out[..], b"bc\x08");
//! ```
//!
//! Operations refused at a boundary (backspace at column 0, insert into a
//! full line, ...) return [`Edit::Refused`], ring the bell if enabled and
//! leave the state untouched.

#[cfg(test)]
mod tests;

use crate::io::Write;
use crate::term;
use heapless::Vec;

/// Outcome of an edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// The operation was applied.
    Done,
    /// The operation was not possible at the current position.
    Refused,
}

impl Edit {
    /// Whether the operation was applied.
    pub fn is_done(self) -> bool {
        self == Edit::Done
    }
}

/// The line being edited.
///
/// Holds at most `L - 1` bytes of text.
#[derive(Debug)]
pub struct EditLine<const L: usize> {
    text: Vec<u8, L>,
    cursor: usize,
    clipboard: Vec<u8, L>,
    bell: bool,
}

impl<const L: usize> Default for EditLine<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const L: usize> EditLine<L> {
    /// An empty line with an empty clipboard and the bell enabled.
    pub const fn new() -> Self {
        Self {
            text: Vec::new(),
            cursor: 0,
            clipboard: Vec::new(),
            bell: true,
        }
    }

    /// Maximum number of bytes the line can hold.
    pub const fn max_len() -> usize {
        L.saturating_sub(1)
    }

    /// Enable or disable the bell on refused edits.
    pub fn set_bell(&mut self, enabled: bool) {
        self.bell = enabled;
    }

    /// Current text.
    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    /// Number of bytes in the line.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the line is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether another byte can be inserted.
    pub fn is_full(&self) -> bool {
        self.text.len() >= Self::max_len()
    }

    /// Cursor position, `0..=len()`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text held by the clipboard.
    pub fn clipboard(&self) -> &[u8] {
        &self.clipboard
    }

    /// Empty the line without touching the terminal. The clipboard survives.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub(crate) fn refuse<W: Write + ?Sized>(&self, out: &mut W) -> Result<Edit, W::Error> {
        if self.bell {
            out.write_byte(term::BEL)?;
        }
        Ok(Edit::Refused)
    }

    /// Insert `byte` at the cursor.
    ///
    /// At the end of the line only the byte itself is echoed. In the middle of
    /// the line the tail is re-echoed one column to the right and the terminal
    /// cursor walked back to just after the new byte. A full line refuses the
    /// byte, rings the bell when enabled and leaves the text untouched.
    ///
    /// # Arguments
    ///
    /// * `byte` - Printable byte to store; the caller filters control bytes
    /// * `out` - Terminal that receives the redraw
    ///
    /// # Examples
    ///
    /// ```rust
    /// use picoshell::line::{Edit, EditLine};
    ///
    /// let mut line: EditLine<16> = EditLine::new();
    /// let mut out: heapless::Vec<u8, 32> = heapless::Vec::new();
    ///
    /// line.insert(b'a', &mut out).unwrap();
    /// line.insert(b'c', &mut out).unwrap();
    /// line.cursor_left(&mut out).unwrap();
    /// out.clear();
    ///
    /// assert_eq!(line.insert(b'b', &mut out), Ok(Edit::Done));
    /// assert_eq!(line.as_bytes(), b"abc");
    /// assert_eq!(&out[..], b"bc\x08");
    /// ```
    ///
    /// # Errors
    ///
    /// Whatever `out` reports while echoing.
    pub fn insert<W: Write + ?Sized>(&mut self, byte: u8, out: &mut W) -> Result<Edit, W::Error> {
        if self.is_full() {
            return self.refuse(out);
        }

        out.write_byte(byte)?;
        let tail = self.text.len() - self.cursor;
        if tail > 0 {
            out.write_all(&self.text[self.cursor..])?;
            term::backspaces(out, tail)?;
        }

        if self.text.insert(self.cursor, byte).is_err() {
            // Capacity was checked above.
            return self.refuse(out);
        }
        self.cursor += 1;
        Ok(Edit::Done)
    }

    /// Delete the byte left of the cursor.
    pub fn backspace<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<Edit, W::Error> {
        if self.cursor == 0 {
            return self.refuse(out);
        }

        out.write_byte(term::BS)?;
        let tail = &self.text[self.cursor..];
        out.write_all(tail)?;
        out.write_byte(term::SPACE)?;
        term::backspaces(out, tail.len() + 1)?;

        self.text.remove(self.cursor - 1);
        self.cursor -= 1;
        Ok(Edit::Done)
    }

    /// Delete the byte under the cursor. The cursor does not move.
    pub fn delete<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<Edit, W::Error> {
        if self.cursor >= self.text.len() {
            return self.refuse(out);
        }

        let tail = &self.text[self.cursor + 1..];
        out.write_all(tail)?;
        out.write_byte(term::SPACE)?;
        term::backspaces(out, tail.len() + 1)?;

        self.text.remove(self.cursor);
        Ok(Edit::Done)
    }

    /// Erase the whole visible line and empty the buffer.
    pub fn kill_line<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<Edit, W::Error> {
        let len = self.text.len();
        term::backspaces(out, self.cursor)?;
        term::spaces(out, len)?;
        term::backspaces(out, len)?;
        self.clear();
        Ok(Edit::Done)
    }

    /// Move the cursor one column left.
    pub fn cursor_left<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<Edit, W::Error> {
        if self.cursor == 0 {
            return self.refuse(out);
        }
        out.write_byte(term::BS)?;
        self.cursor -= 1;
        Ok(Edit::Done)
    }

    /// Move the cursor one column right by re-echoing the byte it passes.
    pub fn cursor_right<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<Edit, W::Error> {
        if self.cursor >= self.text.len() {
            return self.refuse(out);
        }
        out.write_byte(self.text[self.cursor])?;
        self.cursor += 1;
        Ok(Edit::Done)
    }

    /// Move the cursor to the start of the line.
    pub fn line_head<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<Edit, W::Error> {
        term::backspaces(out, self.cursor)?;
        self.cursor = 0;
        Ok(Edit::Done)
    }

    /// Move the cursor to the end of the line.
    pub fn line_tail<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<Edit, W::Error> {
        out.write_all(&self.text[self.cursor..])?;
        self.cursor = self.text.len();
        Ok(Edit::Done)
    }

    /// Cut everything from the cursor to the end of the line into the clipboard.
    ///
    /// At the end of the line this is refused, but the clipboard is still
    /// overwritten with the (empty) tail.
    pub fn kill_tail<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<Edit, W::Error> {
        self.clipboard.clear();
        // Both buffers share the capacity L.
        let _ = self.clipboard.extend_from_slice(&self.text[self.cursor..]);

        let tail = self.text.len() - self.cursor;
        if tail == 0 {
            return self.refuse(out);
        }

        term::spaces(out, tail)?;
        term::backspaces(out, tail)?;
        self.text.truncate(self.cursor);
        Ok(Edit::Done)
    }

    /// Cut the word left of the cursor into the clipboard.
    ///
    /// Trailing spaces before the cursor are cut along with the word.
    pub fn kill_word<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<Edit, W::Error> {
        if self.cursor == 0 {
            return self.refuse(out);
        }

        let start = self.word_start();
        self.clipboard.clear();
        let _ = self.clipboard.extend_from_slice(&self.text[start..self.cursor]);

        for _ in start..self.cursor {
            self.backspace(out)?;
        }
        Ok(Edit::Done)
    }

    fn word_start(&self) -> usize {
        let before = &self.text[..self.cursor];
        let word_end = before
            .iter()
            .rposition(|&b| b != b' ')
            .map_or(0, |i| i + 1);
        before[..word_end]
            .iter()
            .rposition(|&b| b == b' ')
            .map_or(0, |i| i + 1)
    }

    /// Insert the clipboard at the cursor, stopping when the line is full.
    pub fn yank<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<Edit, W::Error> {
        if self.clipboard.is_empty() {
            return self.refuse(out);
        }

        let mut i = 0;
        while i < self.clipboard.len() {
            let byte = self.clipboard[i];
            if !self.insert(byte, out)?.is_done() {
                break;
            }
            i += 1;
        }
        Ok(Edit::Done)
    }

    /// Repaint the screen: clear it, print `prompt` and the line, and put the
    /// terminal cursor back on the logical cursor. The buffer is untouched.
    pub fn clear_screen<W: Write + ?Sized>(
        &mut self,
        prompt: &[u8],
        out: &mut W,
    ) -> Result<Edit, W::Error> {
        term::backspaces(out, self.cursor)?;
        out.write_all(term::CLEAR_SCREEN)?;
        out.write_all(prompt)?;
        out.write_all(&self.text)?;
        term::backspaces(out, self.text.len() - self.cursor)?;
        Ok(Edit::Done)
    }

    /// Replace the whole line with `text`, leaving the cursor at its end.
    ///
    /// `text` is cut to the line capacity if needed.
    pub fn replace_with<W: Write + ?Sized>(
        &mut self,
        text: &[u8],
        out: &mut W,
    ) -> Result<Edit, W::Error> {
        self.kill_line(out)?;
        let text = &text[..text.len().min(Self::max_len())];
        out.write_all(text)?;
        // Length is bounded by max_len() above.
        let _ = self.text.extend_from_slice(text);
        self.cursor = self.text.len();
        Ok(Edit::Done)
    }
}
