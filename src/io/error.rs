//! Common error types for the built-in byte I/O adapters

use core::fmt;

/// Error type of the byte sources and sinks shipped with this crate.
///
/// Platform adapters are free to use their own error types; this enum only
/// covers the in-memory implementations (`&[u8]`, `heapless::Vec`).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A scripted input source has no bytes left.
    EndOfInput,
    /// An in-memory output sink ran out of capacity.
    BufferFull,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EndOfInput => f.write_str("end of input"),
            Error::BufferFull => f.write_str("output buffer full"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::EndOfInput => defmt::write!(f, "EndOfInput"),
            Error::BufferFull => defmt::write!(f, "BufferFull"),
        }
    }
}
