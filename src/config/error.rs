//! Configuration errors

use core::fmt;

/// Errors raised while building or loading a [`Config`](super::Config).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    /// The JSON document could not be parsed or written.
    Json,
    /// The prompt does not fit in [`PROMPT_MAX`](super::PROMPT_MAX) bytes.
    PromptTooLong,
    /// A control byte is bound to more than one action.
    DuplicateBinding(u8),
    /// A printable byte was used as a binding; it could never be typed as text.
    PrintableBinding(u8),
    /// ESC, TAB or DEL was used as a binding; those bytes have fixed meanings.
    ReservedBinding(u8),
    /// The separator or escape byte is unusable.
    InvalidSyntax,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Json => f.write_str("malformed configuration"),
            ConfigError::PromptTooLong => f.write_str("prompt too long"),
            ConfigError::DuplicateBinding(b) => write!(f, "byte {b:#04x} bound twice"),
            ConfigError::PrintableBinding(b) => write!(f, "printable byte {b:#04x} bound"),
            ConfigError::ReservedBinding(b) => write!(f, "reserved byte {b:#04x} bound"),
            ConfigError::InvalidSyntax => f.write_str("invalid separator or escape byte"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ConfigError::Json => defmt::write!(f, "Json"),
            ConfigError::PromptTooLong => defmt::write!(f, "PromptTooLong"),
            ConfigError::DuplicateBinding(b) => defmt::write!(f, "DuplicateBinding({=u8:#x})", b),
            ConfigError::PrintableBinding(b) => defmt::write!(f, "PrintableBinding({=u8:#x})", b),
            ConfigError::ReservedBinding(b) => defmt::write!(f, "ReservedBinding({=u8:#x})", b),
            ConfigError::InvalidSyntax => defmt::write!(f, "InvalidSyntax"),
        }
    }
}
