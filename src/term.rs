//! Terminal control vocabulary.
//!
//! The editor only relies on a dumb terminal: printing a byte advances the
//! cursor, a backspace moves it one column left without erasing, and one VT100
//! sequence clears the screen. Nothing else is assumed.

use crate::io::Write;

/// ASCII bell (0x07), used to signal a refused edit.
pub const BEL: u8 = 0x07;
/// ASCII backspace (0x08), moves the terminal cursor one column left.
pub const BS: u8 = 0x08;
/// ASCII horizontal tab (0x09).
pub const TAB: u8 = 0x09;
/// ASCII line feed (0x0A).
pub const LF: u8 = 0x0A;
/// ASCII carriage return (0x0D).
pub const CR: u8 = 0x0D;
/// ASCII escape (0x1B), introduces terminal control sequences.
pub const ESC: u8 = 0x1B;
/// ASCII space (0x20).
pub const SPACE: u8 = 0x20;
/// ASCII delete (0x7F).
pub const DEL: u8 = 0x7F;

/// Control sequence introducer byte following [`ESC`].
pub const CSI: u8 = b'[';

/// Clear the whole screen and move the cursor home.
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J\x1b[H";

/// Line terminator sent to the terminal.
pub const NEWLINE: &[u8] = b"\r\n";

/// Returns `true` for bytes with a visible glyph, space included.
pub const fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7E)
}

/// Returns `true` for the C locale whitespace set.
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Emit `count` backspaces.
pub fn backspaces<W: Write + ?Sized>(out: &mut W, count: usize) -> Result<(), W::Error> {
    for _ in 0..count {
        out.write_byte(BS)?;
    }
    Ok(())
}

/// Emit `count` spaces.
pub fn spaces<W: Write + ?Sized>(out: &mut W, count: usize) -> Result<(), W::Error> {
    for _ in 0..count {
        out.write_byte(SPACE)?;
    }
    Ok(())
}
