//! Command line tokenizer.
//!
//! Splits a finished line into an argument vector. A line may hold several
//! commands separated by the separator byte (`;` by default); each call to
//! [`Tokenizer::parse`] handles one such segment and reports where the next one
//! starts.
//!
//! Scanning rules, byte by byte:
//!
//! - whitespace between tokens is skipped
//! - `'` or `"` opens a quoted span closed by the same quote character; every
//!   byte inside is literal, whitespace and separator included
//! - outside quotes the escape byte (`\` by default) makes the next byte literal,
//!   provided it is printable
//! - outside quotes whitespace or the separator ends the token
//! - any other control byte outside quotes is an error
//!
//! ```text
//! echo 'a b' c\ d ; reset
//! └──┘ └───┘ └──┘   └───┘
//!  #0   #1    #2     next segment
//! ```
//!
//! Any error invalidates the whole line, see [`SyntaxError`].

/// Tokenizer error types
pub mod error;

pub use error::{Reason, SyntaxError};

use crate::config::Syntax;
use crate::term;
use heapless::Vec;

/// Parsed arguments of one command.
///
/// Argument text is stored back to back in an arena of `L` bytes; up to `A`
/// arguments are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argv<const L: usize, const A: usize> {
    arena: Vec<u8, L>,
    spans: Vec<(usize, usize), A>,
}

impl<const L: usize, const A: usize> Default for Argv<L, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const L: usize, const A: usize> Argv<L, A> {
    /// An empty argument vector.
    pub const fn new() -> Self {
        Self {
            arena: Vec::new(),
            spans: Vec::new(),
        }
    }

    /// Number of arguments.
    pub fn argc(&self) -> usize {
        self.spans.len()
    }

    /// Whether the segment held no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Argument `index`, the command name being argument 0.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.spans
            .get(index)
            .map(|&(start, end)| &self.arena[start..end])
    }

    /// Arguments in order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.spans.iter().map(|&(start, end)| &self.arena[start..end])
    }

    /// Arguments as string slices.
    ///
    /// # Errors
    ///
    /// Quoted spans may carry arbitrary bytes; the first argument that is not
    /// valid UTF-8 fails the conversion.
    pub fn to_strs(&self) -> Result<Vec<&str, A>, core::str::Utf8Error> {
        let mut strs = Vec::new();
        for arg in self.iter() {
            // Same capacity as `spans`.
            let _ = strs.push(core::str::from_utf8(arg)?);
        }
        Ok(strs)
    }

    fn push_byte(&mut self, byte: u8, position: usize) -> Result<(), SyntaxError> {
        self.arena.push(byte).map_err(|_| SyntaxError {
            position,
            reason: Reason::LineTooLong,
        })
    }

    fn close_token(&mut self, start: usize, position: usize) -> Result<(), SyntaxError> {
        self.spans
            .push((start, self.arena.len()))
            .map_err(|_| SyntaxError {
                position,
                reason: Reason::TooManyArguments,
            })
    }
}

/// One parsed segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<const L: usize, const A: usize> {
    /// Arguments of this segment.
    pub argv: Argv<L, A>,
    /// Offset in the input where the next segment starts, or `None` when the
    /// input was consumed completely.
    pub next: Option<usize>,
}

/// Splits lines into arguments according to a [`Syntax`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    syntax: Syntax,
}

impl Tokenizer {
    /// A tokenizer using the given separator and escape bytes.
    pub const fn new(syntax: Syntax) -> Self {
        Self { syntax }
    }

    /// Parse the first segment of `line`.
    ///
    /// Arguments are split on unquoted whitespace. Quotes group bytes into one
    /// argument and the escape byte makes the next byte literal. Parsing stops
    /// after the first unquoted separator; [`Segment::next`] then holds the
    /// offset where the following segment starts.
    ///
    /// # Arguments
    ///
    /// * `line` - Bytes of one submitted line, or the rest of it after a
    ///   previous segment
    ///
    /// # Examples
    ///
    /// ```rust
    /// use picoshell::tokenizer::{Segment, Tokenizer};
    ///
    /// let tokenizer = Tokenizer::default();
    /// let first: Segment<64, 8> = tokenizer.parse(b"echo a;echo b").unwrap();
    /// assert_eq!(first.argv.get(1), Some(&b"a"[..]));
    ///
    /// let rest = &b"echo a;echo b"[first.next.unwrap()..];
    /// let second: Segment<64, 8> = tokenizer.parse(rest).unwrap();
    /// assert_eq!(second.argv.get(1), Some(&b"b"[..]));
    /// assert_eq!(second.next, None);
    /// ```
    ///
    /// # Errors
    ///
    /// [`SyntaxError`] on an unterminated quote, a bad escape, a stray control
    /// byte, or when the arguments exceed `L` bytes or `A` entries.
    pub fn parse<const L: usize, const A: usize>(
        &self,
        line: &[u8],
    ) -> Result<Segment<L, A>, SyntaxError> {
        let mut argv = Argv::new();
        let mut pos = 0;

        loop {
            while line.get(pos).is_some_and(|&b| term::is_space(b)) {
                pos += 1;
            }

            match line.get(pos) {
                None => return Ok(Segment { argv, next: None }),
                Some(&b) if b == self.syntax.separator => {
                    return Ok(Segment {
                        argv,
                        next: Some(pos + 1),
                    });
                }
                Some(_) => pos = self.read_token(line, pos, &mut argv)?,
            }
        }
    }

    /// Iterate over every segment of `line`.
    ///
    /// Iteration stops after the first error.
    pub fn segments<'a, const L: usize, const A: usize>(
        &self,
        line: &'a [u8],
    ) -> Segments<'a, L, A> {
        Segments {
            tokenizer: *self,
            line,
            pos: Some(0),
        }
    }

    /// Check every segment of `line` without keeping the results.
    ///
    /// # Errors
    ///
    /// The first [`SyntaxError`] found in any segment.
    pub fn validate<const L: usize, const A: usize>(&self, line: &[u8]) -> Result<usize, SyntaxError> {
        let mut count = 0;
        for segment in self.segments::<L, A>(line) {
            segment?;
            count += 1;
        }
        Ok(count)
    }

    /// Read one token starting at `pos`, returning the position of the byte
    /// that ended it.
    fn read_token<const L: usize, const A: usize>(
        &self,
        line: &[u8],
        mut pos: usize,
        argv: &mut Argv<L, A>,
    ) -> Result<usize, SyntaxError> {
        let start = argv.arena.len();
        let mut quote: Option<(u8, usize)> = None;

        while let Some(&byte) = line.get(pos) {
            match quote {
                Some((open, _)) if byte == open => quote = None,
                Some(_) => argv.push_byte(byte, pos)?,
                None if byte == b'\'' || byte == b'"' => quote = Some((byte, pos)),
                None if byte == self.syntax.escape => {
                    pos += 1;
                    match line.get(pos) {
                        Some(&next) if term::is_printable(next) => argv.push_byte(next, pos)?,
                        _ => {
                            return Err(SyntaxError {
                                position: pos,
                                reason: Reason::InvalidEscape,
                            });
                        }
                    }
                }
                None if term::is_space(byte) || byte == self.syntax.separator => break,
                None if term::is_printable(byte) => argv.push_byte(byte, pos)?,
                None => {
                    return Err(SyntaxError {
                        position: pos,
                        reason: Reason::ControlCharacter,
                    });
                }
            }
            pos += 1;
        }

        if let Some((_, opened)) = quote {
            return Err(SyntaxError {
                position: opened,
                reason: Reason::UnterminatedQuote,
            });
        }

        argv.close_token(start, pos)?;
        Ok(pos)
    }
}

/// Iterator over the segments of a line, see [`Tokenizer::segments`].
#[derive(Debug)]
pub struct Segments<'a, const L: usize, const A: usize> {
    tokenizer: Tokenizer,
    line: &'a [u8],
    pos: Option<usize>,
}

impl<const L: usize, const A: usize> Iterator for Segments<'_, L, A> {
    type Item = Result<Argv<L, A>, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        let base = self.pos?;
        match self.tokenizer.parse::<L, A>(&self.line[base..]) {
            Ok(segment) => {
                self.pos = segment.next.map(|next| base + next);
                Some(Ok(segment.argv))
            }
            Err(mut error) => {
                self.pos = None;
                error.position += base;
                debug!("tokenizer: {}", error);
                Some(Err(error))
            }
        }
    }
}
