//! Interactive command shell.
//!
//! The shell ties the pieces together:
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
//! │  read_byte  │──▶│ Key Decoder │──▶│ Line Buffer │──▶│  Tokenizer  │──▶ dispatch
//! └─────────────┘   └─────────────┘   └──────┬──────┘   └─────────────┘
//!                                            │
//!                                     ┌──────▼──────┐
//!                                     │   History   │
//!                                     └─────────────┘
//! ```
//!
//! [`Session`] holds the editing state and is driven one byte at a time.
//! [`Shell`] owns the byte I/O on top of it and runs the blocking loop:
//! print the prompt, read bytes until Enter, split the line into commands and
//! run each of them.
//!
//! ```rust
//! use picoshell::shell::{Outcome, Shell};
//!
//! let input: &[u8] = b"echo hello world\r";
//! let output: heapless::Vec<u8, 256> = heapless::Vec::new();
//! let mut shell: Shell<_, _> = Shell::new(input, output);
//!
//! let outcome = shell.execute(&[]).unwrap();
//! assert!(matches!(outcome, Outcome::Executed(report) if report.executed == 1));
//! assert!(shell.writer().ends_with(b"hello world\r\n"));
//! ```

/// Command table and dispatch
pub mod command;

/// Byte-driven editing state
pub mod session;

pub use command::{Command, CommandFn, CommandResult, Context};
pub use session::{Feed, Session};

use crate::config::{Config, ConfigError};
use crate::io::{Read, Write};
use crate::tokenizer::{SyntaxError, Tokenizer};
use crate::{HIST_MAX, LINE_MAX, MAX_ARGS};
use command::Console;
use core::fmt::{self, Write as _};

/// Errors that end the shell loop. Only I/O can fail; everything the user
/// types is handled inside the shell.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error<R, W> {
    /// Reading input failed.
    Read(R),
    /// Writing output failed.
    Write(W),
}

impl<R: fmt::Debug, W: fmt::Debug> fmt::Display for Error<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Read(e) => write!(f, "read error: {e:?}"),
            Error::Write(e) => write!(f, "write error: {e:?}"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<R: defmt::Format, W: defmt::Format> defmt::Format for Error<R, W> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Read(e) => defmt::write!(f, "Read({})", e),
            Error::Write(e) => defmt::write!(f, "Write({})", e),
        }
    }
}

/// Tally of one executed line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Commands that ran.
    pub executed: usize,
    /// Commands that ran and reported something other than success, or whose
    /// arguments could not be passed on.
    pub failed: usize,
    /// Names that matched no command.
    pub not_found: usize,
}

/// What happened to one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user abandoned the line.
    Discarded,
    /// The line did not tokenize and nothing was run.
    Rejected(SyntaxError),
    /// Every segment of the line was dispatched.
    Executed(Report),
}

/// A shell bound to a byte source and a terminal sink.
#[derive(Debug)]
pub struct Shell<R, W, const L: usize = LINE_MAX, const H: usize = HIST_MAX> {
    reader: R,
    writer: W,
    session: Session<L, H>,
}

impl<R: Read, W: Write, const L: usize, const H: usize> Shell<R, W, L, H> {
    /// A shell with the default configuration.
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_config(reader, writer, Config::default())
    }

    /// A shell with the given configuration.
    pub fn with_config(reader: R, writer: W, config: Config) -> Self {
        Self {
            reader,
            writer,
            session: Session::with_config(config),
        }
    }

    /// Editing state.
    pub fn session(&self) -> &Session<L, H> {
        &self.session
    }

    /// Editing state, mutable.
    pub fn session_mut(&mut self) -> &mut Session<L, H> {
        &mut self.session
    }

    /// Replace the prompt.
    ///
    /// # Errors
    ///
    /// [`ConfigError::PromptTooLong`] if the prompt does not fit.
    pub fn set_prompt(&mut self, prompt: &str) -> Result<(), ConfigError> {
        self.session.set_prompt(prompt)
    }

    /// The terminal sink.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// The terminal sink, mutable.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Take the shell apart.
    pub fn into_parts(self) -> (R, W, Session<L, H>) {
        (self.reader, self.writer, self.session)
    }

    /// Print the prompt and edit a line until Enter or Discard.
    ///
    /// Returns the finished line, which is empty if it was discarded. The
    /// slice stays valid until the next call.
    ///
    /// # Errors
    ///
    /// [`Error::Read`] or [`Error::Write`] when the byte I/O fails.
    pub fn read_line(&mut self) -> Result<&[u8], Error<R::Error, W::Error>> {
        self.edit()?;
        Ok(self.session.line())
    }

    fn edit(&mut self) -> Result<Feed, Error<R::Error, W::Error>> {
        self.session.begin(&mut self.writer).map_err(Error::Write)?;
        loop {
            let byte = self.reader.read_byte().map_err(Error::Read)?;
            match self.session.feed(byte, &mut self.writer).map_err(Error::Write)? {
                Feed::Pending => continue,
                done => return Ok(done),
            }
        }
    }

    /// Read one line and run every command on it.
    ///
    /// Prints the prompt, edits until Enter or Discard, then tokenizes the
    /// whole line before anything runs; a syntax error in any segment rejects
    /// the line as a whole. Segments are dispatched in order, user commands
    /// first and built-ins second. Unknown names print a message and the next
    /// segment still runs.
    ///
    /// # Arguments
    ///
    /// * `commands` - User command table, searched before the built-ins
    ///
    /// # Returns
    ///
    /// How the line ended, with per-line counts in [`Outcome::Executed`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use picoshell::shell::{Outcome, Shell};
    ///
    /// let input: &[u8] = b"echo hi;nope\r";
    /// let mut shell: Shell<_, heapless::Vec<u8, 128>> = Shell::new(input, heapless::Vec::new());
    ///
    /// match shell.execute(&[]).unwrap() {
    ///     Outcome::Executed(report) => {
    ///         assert_eq!(report.executed, 1);
    ///         assert_eq!(report.not_found, 1);
    ///     }
    ///     other => panic!("unexpected outcome {:?}", other),
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::Read`] or [`Error::Write`] when the byte I/O fails.
    pub fn execute(&mut self, commands: &[Command]) -> Result<Outcome, Error<R::Error, W::Error>> {
        if self.edit()? == Feed::Discarded {
            return Ok(Outcome::Discarded);
        }

        let line = self.session.line();
        let config = self.session.config();
        let tokenizer = Tokenizer::new(config.syntax);
        let mut console = Console::new(&mut self.writer);

        if let Err(error) = tokenizer.validate::<L, MAX_ARGS>(line) {
            warn!("line rejected: {}", error);
            let _ = console.write_str("syntax error\n");
            return match console.take_error() {
                Some(e) => Err(Error::Write(e)),
                None => Ok(Outcome::Rejected(error)),
            };
        }

        let mut report = Report::default();
        for argv in tokenizer.segments::<L, MAX_ARGS>(line).flatten() {
            if argv.is_empty() {
                continue;
            }

            match argv.to_strs() {
                Ok(args) => {
                    let mut ctx = Context {
                        out: &mut console,
                        config,
                        commands,
                    };
                    match command::dispatch(&mut ctx, &args) {
                        Some(result) => {
                            report.executed += 1;
                            if result != CommandResult::Ok {
                                report.failed += 1;
                            }
                        }
                        None => {
                            debug!("unknown command {=str}", args[0]);
                            let _ = writeln!(ctx, "command not found: {}", args[0]);
                            report.not_found += 1;
                        }
                    }
                }
                Err(_) => {
                    let _ = console.write_str("invalid argument encoding\n");
                    report.failed += 1;
                }
            }

            if let Some(e) = console.take_error() {
                return Err(Error::Write(e));
            }
        }

        Ok(Outcome::Executed(report))
    }

    /// Run the shell until the byte I/O fails, returning that failure.
    pub fn run(&mut self, commands: &[Command]) -> Error<R::Error, W::Error> {
        loop {
            if let Err(error) = self.execute(commands) {
                return error;
            }
        }
    }
}
