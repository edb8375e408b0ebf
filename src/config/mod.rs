//! Shell configuration.
//!
//! Everything that picoshell historically fixed at build time lives here as
//! plain data: the control byte bound to each editing action, which optional
//! capabilities are switched on, the tokenizer's separator and escape bytes,
//! the prompt and whether refused edits ring the bell.
//!
//! Capacities (line length, history depth, argument count) are not part of
//! [`Config`]; they are const generics on the types that own the storage.
//!
//! A configuration can be built in code:
//!
//! ```rust
//! use picoshell::config::{Capabilities, Config};
//!
//! let mut config = Config::default();
//! config.capabilities = Capabilities { history: false, ..Capabilities::ALL };
//! config.set_prompt("sensor> ").unwrap();
//! assert!(config.validate().is_ok());
//! ```
//!
//! or loaded from a JSON blob, for example one kept in a flash sector:
//!
//! ```rust
//! use picoshell::config::Config;
//!
//! let config = Config::from_json(br#"{"prompt":"$ ","bell":false}"#).unwrap();
//! assert_eq!(config.prompt.as_str(), "$ ");
//! assert!(!config.bell);
//! ```

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use crate::keys::Key;
use crate::term;
use heapless::String;
use serde::{Deserialize, Serialize};

/// Maximum length of the prompt string in bytes.
pub const PROMPT_MAX: usize = 32;

/// Prompt printed before each line when none is configured.
pub const DEFAULT_PROMPT: &str = "> ";

/// Returns the control byte produced by Ctrl + `letter`.
pub const fn ctrl(letter: u8) -> u8 {
    letter & 0x1F
}

/// Control byte bound to each logical edit event.
///
/// Tab (insert a space) and DEL (delete under the cursor) are fixed and not
/// part of the keymap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keymap {
    /// Finish the line.
    pub enter: u8,
    /// Abandon the line without running it.
    pub discard: u8,
    /// Delete left of the cursor.
    pub backspace: u8,
    /// Delete under the cursor.
    pub delete: u8,
    /// Erase the whole line.
    pub kill_line: u8,
    /// Repaint the screen.
    pub clear_screen: u8,
    /// Cursor one column left.
    pub cursor_left: u8,
    /// Cursor one column right.
    pub cursor_right: u8,
    /// Cursor to the start of the line.
    pub line_head: u8,
    /// Cursor to the end of the line.
    pub line_tail: u8,
    /// Paste the clipboard at the cursor.
    pub yank: u8,
    /// Cut from the cursor to the end of the line.
    pub kill_tail: u8,
    /// Cut the word left of the cursor.
    pub kill_word: u8,
    /// Recall an older history entry.
    pub hist_prev: u8,
    /// Recall a newer history entry.
    pub hist_next: u8,
}

impl Keymap {
    /// Emacs-flavoured bindings.
    pub const DEFAULT: Self = Self {
        enter: term::CR,
        discard: ctrl(b'C'),
        backspace: ctrl(b'H'),
        delete: ctrl(b'D'),
        kill_line: ctrl(b'U'),
        clear_screen: ctrl(b'L'),
        cursor_left: ctrl(b'B'),
        cursor_right: ctrl(b'F'),
        line_head: ctrl(b'A'),
        line_tail: ctrl(b'E'),
        yank: ctrl(b'Y'),
        kill_tail: ctrl(b'K'),
        kill_word: ctrl(b'W'),
        hist_prev: ctrl(b'P'),
        hist_next: ctrl(b'N'),
    };

    /// Every configurable binding paired with the event it produces.
    pub const fn bindings(&self) -> [(u8, Key); 15] {
        [
            (self.enter, Key::Enter),
            (self.discard, Key::Discard),
            (self.backspace, Key::Backspace),
            (self.delete, Key::Delete),
            (self.kill_line, Key::KillLine),
            (self.clear_screen, Key::ClearScreen),
            (self.cursor_left, Key::CursorLeft),
            (self.cursor_right, Key::CursorRight),
            (self.line_head, Key::LineHead),
            (self.line_tail, Key::LineTail),
            (self.yank, Key::Yank),
            (self.kill_tail, Key::KillTail),
            (self.kill_word, Key::KillWord),
            (self.hist_prev, Key::HistPrev),
            (self.hist_next, Key::HistNext),
        ]
    }

    /// Look up the event bound to `byte`, ignoring capabilities.
    pub fn lookup(&self, byte: u8) -> Option<Key> {
        self.bindings()
            .into_iter()
            .find(|&(bound, _)| bound == byte)
            .map(|(_, key)| key)
    }

    /// Reverse lookup: the byte bound to `key`.
    pub fn binding(&self, key: Key) -> Option<u8> {
        self.bindings()
            .into_iter()
            .find(|&(_, bound)| bound == key)
            .map(|(byte, _)| byte)
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Optional editing capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// Cursor movement and screen repaint.
    pub line_edit: bool,
    /// Kill and yank. Only effective together with `line_edit`.
    pub clipboard: bool,
    /// Command history recall.
    pub history: bool,
}

impl Capabilities {
    /// Everything enabled.
    pub const ALL: Self = Self {
        line_edit: true,
        clipboard: true,
        history: true,
    };

    /// Plain line input: insert, backspace, delete, kill line.
    pub const MINIMAL: Self = Self {
        line_edit: false,
        clipboard: false,
        history: false,
    };

    /// Whether the event is available under these capabilities.
    pub const fn allows(&self, key: Key) -> bool {
        match key {
            Key::ClearScreen
            | Key::CursorLeft
            | Key::CursorRight
            | Key::LineHead
            | Key::LineTail => self.line_edit,
            Key::Yank | Key::KillTail | Key::KillWord => self.line_edit && self.clipboard,
            Key::HistPrev | Key::HistNext => self.history,
            Key::Enter
            | Key::Discard
            | Key::Backspace
            | Key::Delete
            | Key::KillLine
            | Key::Insert(_) => true,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::ALL
    }
}

/// Tokenizer syntax bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Syntax {
    /// Separates sequential commands on one line.
    pub separator: u8,
    /// Makes the following printable byte literal.
    pub escape: u8,
}

impl Syntax {
    /// `;` separates commands, `\` escapes.
    pub const DEFAULT: Self = Self {
        separator: b';',
        escape: b'\\',
    };

    /// Whether `byte` can serve as separator or escape. Whitespace and quotes
    /// are consumed by the tokenizer before either is considered.
    pub const fn usable(byte: u8) -> bool {
        term::is_printable(byte) && !term::is_space(byte) && byte != b'\'' && byte != b'"'
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Printed before every line.
    pub prompt: String<PROMPT_MAX>,
    /// Control byte bindings.
    pub keymap: Keymap,
    /// Enabled capabilities.
    pub capabilities: Capabilities,
    /// Tokenizer syntax.
    pub syntax: Syntax,
    /// Ring the terminal bell on refused edits.
    pub bell: bool,
}

impl Default for Config {
    fn default() -> Self {
        let mut prompt = String::new();
        // DEFAULT_PROMPT always fits in PROMPT_MAX.
        let _ = prompt.push_str(DEFAULT_PROMPT);
        Self {
            prompt,
            keymap: Keymap::DEFAULT,
            capabilities: Capabilities::ALL,
            syntax: Syntax::DEFAULT,
            bell: true,
        }
    }
}

impl Config {
    /// Replace the prompt string.
    ///
    /// # Errors
    ///
    /// [`ConfigError::PromptTooLong`] if `prompt` exceeds [`PROMPT_MAX`] bytes;
    /// the previous prompt is kept in that case.
    pub fn set_prompt(&mut self, prompt: &str) -> Result<(), ConfigError> {
        let mut new = String::new();
        new.push_str(prompt)
            .map_err(|_| ConfigError::PromptTooLong)?;
        self.prompt = new;
        Ok(())
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] for malformed input, or any error reported by
    /// [`validate`](Self::validate).
    pub fn from_json(json: &[u8]) -> Result<Self, ConfigError> {
        let (config, _) =
            serde_json_core::from_slice::<Config>(json).map_err(|_| ConfigError::Json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as JSON into `buf`, returning the length written.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] if `buf` is too small.
    pub fn to_json(&self, buf: &mut [u8]) -> Result<usize, ConfigError> {
        serde_json_core::to_slice(self, buf).map_err(|_| ConfigError::Json)
    }

    /// Check that the bindings can be decoded unambiguously.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::PrintableBinding`] if a key is bound to a printable byte
    /// - [`ConfigError::ReservedBinding`] if a key is bound to ESC, TAB or DEL
    /// - [`ConfigError::DuplicateBinding`] if two keys share a byte
    /// - [`ConfigError::InvalidSyntax`] if separator or escape is not printable,
    ///   is whitespace or a quote, or they are equal
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bindings = self.keymap.bindings();
        for (i, &(byte, _)) in bindings.iter().enumerate() {
            if term::is_printable(byte) {
                return Err(ConfigError::PrintableBinding(byte));
            }
            if matches!(byte, term::ESC | term::TAB | term::DEL) {
                return Err(ConfigError::ReservedBinding(byte));
            }
            if bindings[i + 1..].iter().any(|&(other, _)| other == byte) {
                return Err(ConfigError::DuplicateBinding(byte));
            }
        }

        let Syntax { separator, escape } = self.syntax;
        if !Syntax::usable(separator) || !Syntax::usable(escape) || separator == escape {
            return Err(ConfigError::InvalidSyntax);
        }
        Ok(())
    }
}
