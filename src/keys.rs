//! Key decoder.
//!
//! Turns the raw byte stream coming from a terminal into logical edit events.
//! Single control bytes are looked up in the [`Keymap`](crate::config::Keymap);
//! the VT100 arrow keys (`ESC [ A` .. `ESC [ D`) are recognised by a small
//! state machine:
//!
//! ```text
//!            ESC               '['             'A'..'D'
//!  Ground ─────────▶ Escape ─────────▶ Csi ─────────────▶ Ground (Key)
//!    ▲                 │                │
//!    └─── other ───────┴──── other ─────┘  (Malformed)
//! ```
//!
//! The decoder holds no state besides the escape sequence currently being
//! resolved. A broken sequence is reported as [`Decoded::Malformed`]; the bytes
//! it consumed are never reinterpreted as ordinary input.

use crate::config::Config;
use crate::io::Read;
use crate::term;

/// A logical edit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Finish the line.
    Enter,
    /// Abandon the line.
    Discard,
    /// Delete left of the cursor.
    Backspace,
    /// Delete under the cursor.
    Delete,
    /// Erase the whole line.
    KillLine,
    /// Repaint screen, prompt and line.
    ClearScreen,
    /// Move the cursor left.
    CursorLeft,
    /// Move the cursor right.
    CursorRight,
    /// Move the cursor to the start of the line.
    LineHead,
    /// Move the cursor to the end of the line.
    LineTail,
    /// Paste the clipboard.
    Yank,
    /// Cut to the end of the line.
    KillTail,
    /// Cut the word before the cursor.
    KillWord,
    /// Recall an older line.
    HistPrev,
    /// Recall a newer line.
    HistNext,
    /// Insert a printable byte.
    Insert(u8),
}

/// Result of feeding one byte to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decoded {
    /// A complete event.
    Key(Key),
    /// Inside an escape sequence, more bytes needed.
    Pending,
    /// Valid input that maps to nothing: an unbound control byte, or an event
    /// whose capability is switched off.
    Ignored,
    /// An escape sequence that is not understood. Its bytes are dropped.
    Malformed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ground,
    Escape,
    Csi,
}

/// Byte-at-a-time decoder for terminal input.
#[derive(Debug)]
pub struct KeyDecoder {
    state: State,
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyDecoder {
    /// A decoder in the ground state.
    pub const fn new() -> Self {
        Self {
            state: State::Ground,
        }
    }

    /// Whether an escape sequence is partially read.
    pub fn in_sequence(&self) -> bool {
        self.state != State::Ground
    }

    /// Drop any partially read escape sequence.
    pub fn reset(&mut self) {
        self.state = State::Ground;
    }

    /// Advance the state machine by one byte.
    pub fn feed(&mut self, byte: u8, config: &Config) -> Decoded {
        match self.state {
            State::Ground => {
                if byte == term::ESC {
                    self.state = State::Escape;
                    Decoded::Pending
                } else {
                    Self::ground(byte, config)
                }
            }
            State::Escape => {
                if byte == term::CSI {
                    self.state = State::Csi;
                    Decoded::Pending
                } else {
                    self.state = State::Ground;
                    debug!("malformed escape: ESC {=u8:#x}", byte);
                    Decoded::Malformed
                }
            }
            State::Csi => {
                self.state = State::Ground;
                let key = match byte {
                    b'A' => Key::HistPrev,
                    b'B' => Key::HistNext,
                    b'C' => Key::CursorRight,
                    b'D' => Key::CursorLeft,
                    _ => {
                        debug!("malformed escape: ESC [ {=u8:#x}", byte);
                        return Decoded::Malformed;
                    }
                };
                Self::gate(key, config)
            }
        }
    }

    /// Read bytes from `source` until a non-pending result is available.
    ///
    /// # Errors
    ///
    /// Propagates read errors from `source`. A partially read escape sequence
    /// is kept, so decoding can resume after a transient error.
    pub fn decode<R: Read + ?Sized>(
        &mut self,
        source: &mut R,
        config: &Config,
    ) -> Result<Decoded, R::Error> {
        loop {
            let byte = source.read_byte()?;
            match self.feed(byte, config) {
                Decoded::Pending => continue,
                decoded => return Ok(decoded),
            }
        }
    }

    fn ground(byte: u8, config: &Config) -> Decoded {
        if byte == config.keymap.enter {
            return Decoded::Key(Key::Enter);
        }
        if byte == term::TAB {
            return Decoded::Key(Key::Insert(b' '));
        }
        if let Some(key) = config.keymap.lookup(byte) {
            return Self::gate(key, config);
        }
        if byte == term::DEL {
            return Decoded::Key(Key::Delete);
        }
        if term::is_printable(byte) {
            return Decoded::Key(Key::Insert(byte));
        }
        trace!("unbound byte {=u8:#x}", byte);
        Decoded::Ignored
    }

    fn gate(key: Key, config: &Config) -> Decoded {
        if config.capabilities.allows(key) {
            Decoded::Key(key)
        } else {
            Decoded::Ignored
        }
    }
}
