//! # picoshell - a tiny interactive shell for embedded devices
//!
//! picoshell gives a microcontroller with nothing but a serial port a usable
//! command line: Emacs-style line editing, command history, cut & paste and a
//! quote-aware argument parser, all in fixed-size buffers with no allocator,
//! no threads and no terminal library.
//!
//! ## Features
//!
//! ### Line editing
//! - Insert, backspace and delete anywhere in the line
//! - Cursor movement with Ctrl-B/F/A/E or the arrow keys
//! - Kill line, kill to end, kill word and yank (Ctrl-U/K/W/Y)
//! - Screen repaint with Ctrl-L
//! - Minimal terminal traffic: only the changed cells are redrawn
//!
//! ### History
//! - Bounded ring of past lines, recalled with Ctrl-P/N or up/down
//! - The line being typed is kept while browsing
//!
//! ### Command parsing
//! - `'single'` and `"double"` quotes, backslash escapes
//! - Several commands per line separated by `;`
//! - A static command table with `echo`, `help` and `shellhelp` built in
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! picoshell = "0.1.0"
//! ```
//!
//! ### Running the shell on a UART
//!
//! ```rust,no_run
//! use picoshell::io::{Read, Write};
//! use picoshell::shell::{Command, CommandResult, Context, Shell};
//! # struct Uart;
//! # impl Read for Uart {
//! #     type Error = ();
//! #     fn read_byte(&mut self) -> Result<u8, Self::Error> { Ok(b'\r') }
//! # }
//! # impl Write for Uart {
//! #     type Error = ();
//! #     fn write_byte(&mut self, _byte: u8) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let (rx, tx) = (Uart, Uart);
//!
//! fn reboot(_ctx: &mut Context<'_>, _argv: &[&str]) -> CommandResult {
//!     CommandResult::Ok
//! }
//!
//! static COMMANDS: &[Command] = &[Command {
//!     name: "reboot",
//!     description: "restart the device",
//!     usage: None,
//!     handler: reboot,
//! }];
//!
//! let mut shell: Shell<_, _> = Shell::new(rx, tx);
//! shell.set_prompt("dev> ").unwrap();
//! let error = shell.run(COMMANDS);
//! ```
//!
//! ### Splitting a line yourself
//!
//! ```rust
//! use picoshell::tokenizer::{Segment, Tokenizer};
//!
//! let segment: Segment<64, 8> = Tokenizer::default().parse(b"echo 'a b' c").unwrap();
//! let args = segment.argv.to_strs().unwrap();
//! assert_eq!(&args[..], &["echo", "a b", "c"]);
//! ```
//!
//! ## Platform Support
//!
//! The crate only needs `core`. The host supplies two primitives, "read one
//! byte" and "write one byte", through the [`io`] traits.
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support and `std::io` adapters (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod fmt;

/// Byte I/O traits implemented by the host platform.
pub mod io;

/// Terminal control bytes and small rendering helpers.
pub mod term;

/// Key bindings, capabilities, tokenizer syntax and prompt.
pub mod config;

/// Decoding of raw terminal input into edit events.
pub mod keys;

/// The editable line buffer.
pub mod line;

/// Bounded command history.
pub mod history;

/// Splitting finished lines into argument vectors.
pub mod tokenizer;

/// The editing session, the blocking shell loop and command dispatch.
pub mod shell;

/// Default line capacity in bytes. Lines hold at most `LINE_MAX - 1` bytes.
pub const LINE_MAX: usize = 128;

/// Default number of remembered lines.
pub const HIST_MAX: usize = 8;

/// Maximum number of arguments per command, command name included.
pub const MAX_ARGS: usize = 16;
