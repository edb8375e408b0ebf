//! Tokenizer errors

use core::fmt;

/// Why a line could not be split into arguments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Reason {
    /// A quoted span is still open at the end of the segment.
    UnterminatedQuote,
    /// The escape byte is followed by a non-printable byte or by nothing.
    InvalidEscape,
    /// A control byte appears outside quotes.
    ControlCharacter,
    /// More arguments than the argument vector can hold.
    TooManyArguments,
    /// The argument text does not fit in the argument arena.
    LineTooLong,
}

/// A line that cannot be tokenized.
///
/// The whole line has to be discarded; nothing parsed before the error is
/// meaningful.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SyntaxError {
    /// Byte offset in the input at which the problem was detected.
    pub position: usize,
    /// What went wrong.
    pub reason: Reason,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.reason {
            Reason::UnterminatedQuote => "unterminated quote",
            Reason::InvalidEscape => "invalid escape",
            Reason::ControlCharacter => "control character",
            Reason::TooManyArguments => "too many arguments",
            Reason::LineTooLong => "line too long",
        };
        write!(f, "syntax error: {} at column {}", what, self.position)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Reason {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Reason::UnterminatedQuote => defmt::write!(f, "UnterminatedQuote"),
            Reason::InvalidEscape => defmt::write!(f, "InvalidEscape"),
            Reason::ControlCharacter => defmt::write!(f, "ControlCharacter"),
            Reason::TooManyArguments => defmt::write!(f, "TooManyArguments"),
            Reason::LineTooLong => defmt::write!(f, "LineTooLong"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SyntaxError {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "SyntaxError({}, at {=usize})", self.reason, self.position)
    }
}
