//! Command table and dispatch.
//!
//! Commands are plain data: a name, a one-line description, optional usage
//! text and a handler function. The host keeps them in a `static` slice and
//! hands that slice to the shell; lookup is a linear, case-sensitive scan in
//! which the first match wins. User commands are searched before the
//! [`BUILTINS`], so a firmware can override `echo` or `help`.
//!
//! ```rust
//! use core::fmt::Write;
//! use picoshell::shell::command::{Command, CommandResult, Context};
//!
//! fn led(ctx: &mut Context<'_>, argv: &[&str]) -> CommandResult {
//!     match argv.get(1) {
//!         Some(&"on") | Some(&"off") => {
//!             let _ = writeln!(ctx, "led {}", argv[1]);
//!             CommandResult::Ok
//!         }
//!         _ => CommandResult::InvalidParameter,
//!     }
//! }
//!
//! static COMMANDS: &[Command] = &[Command {
//!     name: "led",
//!     description: "switch the status LED",
//!     usage: Some("Usage: led on|off\n"),
//!     handler: led,
//! }];
//! ```

use crate::config::{Capabilities, Config, Keymap};
use crate::io::Write;
use crate::keys::Key;
use core::fmt::{self, Write as _};

/// Status returned by a command handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// The command completed successfully.
    Ok,
    /// The arguments were not acceptable.
    InvalidParameter,
    /// The command ran but did not succeed.
    Failed,
}

#[cfg(feature = "defmt")]
impl defmt::Format for CommandResult {
    fn format(&self, f: defmt::Formatter) {
        match self {
            CommandResult::Ok => defmt::write!(f, "Ok"),
            CommandResult::InvalidParameter => defmt::write!(f, "InvalidParameter"),
            CommandResult::Failed => defmt::write!(f, "Failed"),
        }
    }
}

/// Everything a handler can reach while it runs.
///
/// `Context` is itself a [`fmt::Write`], so handlers print with `write!`.
pub struct Context<'a> {
    /// Terminal output. Line feeds are sent as CR LF.
    pub out: &'a mut dyn fmt::Write,
    /// Active shell configuration.
    pub config: &'a Config,
    /// The host command table.
    pub commands: &'a [Command],
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("config", self.config)
            .field("commands", &self.commands.len())
            .finish_non_exhaustive()
    }
}

impl fmt::Write for Context<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }
}

/// Signature of a command handler. `argv[0]` is the command name.
pub type CommandFn = fn(ctx: &mut Context<'_>, argv: &[&str]) -> CommandResult;

/// A named command.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    /// Name typed by the user. Case-sensitive.
    pub name: &'static str,
    /// One-line summary shown by `help`.
    pub description: &'static str,
    /// Longer text shown by `help <name>`.
    pub usage: Option<&'static str>,
    /// Implementation.
    pub handler: CommandFn,
}

/// Commands every shell understands.
pub static BUILTINS: &[Command] = &[
    Command {
        name: "echo",
        description: "echo all arguments separated by a whitespace",
        usage: Some("Usage: echo [string ...]\n"),
        handler: echo,
    },
    Command {
        name: "help",
        description: "list commands, or show the usage of one",
        usage: Some("Usage: help [command]\n"),
        handler: help,
    },
    Command {
        name: "shellhelp",
        description: "display help for keybinds of commandline editing",
        usage: None,
        handler: shellhelp,
    },
];

/// Find `name` in `commands`.
pub fn find<'a>(commands: &'a [Command], name: &str) -> Option<&'a Command> {
    commands.iter().find(|cmd| cmd.name == name)
}

/// Find `name` among the host commands, then among the built-ins.
pub fn lookup<'a>(commands: &'a [Command], name: &str) -> Option<&'a Command> {
    find(commands, name).or_else(|| find(BUILTINS, name))
}

/// Run the command named by `argv[0]`.
///
/// Returns `None` when `argv` is empty or no command matches.
pub fn dispatch(ctx: &mut Context<'_>, argv: &[&str]) -> Option<CommandResult> {
    let name = argv.first()?;
    let command = lookup(ctx.commands, name)?;
    Some((command.handler)(ctx, argv))
}

/// Usage text for `name`, `None` if there is no such command.
pub fn usage(commands: &[Command], name: &str) -> Option<&'static str> {
    lookup(commands, name).map(|cmd| cmd.usage.unwrap_or("No help available.\n"))
}

/// Print one line per command: indented name, padded, then the description.
///
/// # Errors
///
/// Propagates errors of `out`.
pub fn print_list(out: &mut dyn fmt::Write, commands: &[Command]) -> fmt::Result {
    const INDENT: usize = 10;

    for cmd in commands {
        write!(out, "    {:<width$}- ", cmd.name, width = INDENT)?;
        if cmd.description.is_empty() {
            out.write_str("(No description available)\n")?;
        } else {
            writeln!(out, "{}", cmd.description)?;
        }
    }
    Ok(())
}

/// Describe the active key bindings.
///
/// # Errors
///
/// Propagates errors of `out`.
pub fn print_keybinds(out: &mut dyn fmt::Write, config: &Config) -> fmt::Result {
    let keymap = &config.keymap;
    let Capabilities {
        line_edit,
        clipboard,
        history,
    } = config.capabilities;

    out.write_str("* Basic keybinds\n")?;
    binding(out, keymap, Key::Backspace, "Backspace")?;
    binding(out, keymap, Key::Delete, "Delete")?;
    binding(out, keymap, Key::Discard, "Discard line")?;
    binding(out, keymap, Key::KillLine, "Kill whole line")?;

    if line_edit {
        out.write_str(" * Minimal Emacs-like line editing.\n")?;
        binding(out, keymap, Key::CursorRight, "Cursor right")?;
        binding(out, keymap, Key::CursorLeft, "Cursor left")?;
        binding(out, keymap, Key::LineHead, "Cursor line head")?;
        binding(out, keymap, Key::LineTail, "Cursor line tail")?;
        binding(out, keymap, Key::ClearScreen, "Clear screen")?;
    }
    if history {
        out.write_str(" * Command-line history.\n")?;
        binding(out, keymap, Key::HistPrev, "Previous history")?;
        binding(out, keymap, Key::HistNext, "Next history")?;
    }
    if line_edit && clipboard {
        out.write_str(" * Cut & paste.\n")?;
        binding(out, keymap, Key::KillTail, "Cut strings after the cursor to clipboard")?;
        binding(out, keymap, Key::KillWord, "Cut a word before the cursor to clipboard")?;
        binding(out, keymap, Key::Yank, "Paste clipboard content to cursor position")?;
    }
    Ok(())
}

fn binding(out: &mut dyn fmt::Write, keymap: &Keymap, key: Key, what: &str) -> fmt::Result {
    match keymap.binding(key) {
        Some(byte) => writeln!(out, "    {}  {}", KeyName(byte), what),
        None => Ok(()),
    }
}

/// Human readable name of a control byte, `Ctrl-X` style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyName(pub u8);

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            crate::term::CR => f.write_str("Enter"),
            b @ 0x00..=0x1F => write!(f, "Ctrl-{}", char::from(b | 0x40)),
            b => write!(f, "{b:#04x}"),
        }
    }
}

fn echo(ctx: &mut Context<'_>, argv: &[&str]) -> CommandResult {
    let mut args = argv.iter().skip(1);
    if let Some(first) = args.next() {
        let _ = ctx.write_str(first);
        for arg in args {
            let _ = write!(ctx, " {arg}");
        }
    }
    let _ = ctx.write_str("\n");
    CommandResult::Ok
}

fn help(ctx: &mut Context<'_>, argv: &[&str]) -> CommandResult {
    match argv.get(1) {
        None => {
            let _ = print_list(&mut *ctx.out, ctx.commands);
            let _ = print_list(&mut *ctx.out, BUILTINS);
            CommandResult::Ok
        }
        Some(name) => match usage(ctx.commands, name) {
            Some(text) => {
                let _ = ctx.write_str(text);
                CommandResult::Ok
            }
            None => {
                let _ = writeln!(ctx, "no such command: {name}");
                CommandResult::InvalidParameter
            }
        },
    }
}

fn shellhelp(ctx: &mut Context<'_>, _argv: &[&str]) -> CommandResult {
    match print_keybinds(&mut *ctx.out, ctx.config) {
        Ok(()) => CommandResult::Ok,
        Err(_) => CommandResult::Failed,
    }
}

/// Bridges [`fmt::Write`] to a byte sink, turning `\n` into `\r\n`.
///
/// The first I/O error is kept for the caller; formatting stops there.
pub struct Console<'a, W: Write + ?Sized> {
    out: &'a mut W,
    error: Option<W::Error>,
}

impl<W: Write + ?Sized> fmt::Debug for Console<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("failed", &self.error.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a, W: Write + ?Sized> Console<'a, W> {
    /// Wrap `out`.
    pub fn new(out: &'a mut W) -> Self {
        Self { out, error: None }
    }

    /// Take the I/O error that interrupted output, if any.
    pub fn take_error(&mut self) -> Option<W::Error> {
        self.error.take()
    }
}

impl<W: Write + ?Sized> fmt::Write for Console<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.error.is_some() {
            return Err(fmt::Error);
        }
        for &byte in s.as_bytes() {
            let result = if byte == crate::term::LF {
                self.out.write_all(crate::term::NEWLINE)
            } else {
                self.out.write_byte(byte)
            };
            if let Err(e) = result {
                self.error = Some(e);
                return Err(fmt::Error);
            }
        }
        Ok(())
    }
}
