//! Byte I/O boundary between the shell and the platform.
//!
//! The shell core never touches hardware. Everything it needs from the host is
//! "give me the next byte" and "put this byte on the wire", expressed by the
//! [`Read`] and [`Write`] traits below. A UART driver, a USB CDC endpoint or a
//! test script can all sit behind them.
//!
//! ```rust
//! use picoshell::io::{Read, Write};
//!
//! let mut input: &[u8] = b"ls\r";
//! assert_eq!(input.read_byte(), Ok(b'l'));
//!
//! let mut output: heapless::Vec<u8, 16> = heapless::Vec::new();
//! output.write_all(b"> ").unwrap();
//! assert_eq!(&output[..], b"> ");
//! ```

#![deny(unsafe_code)]

/// Common error types for the built-in adapters
pub mod error;

pub use error::Error;

/// A blocking source of input bytes.
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Block until a byte is available and return it
    fn read_byte(&mut self) -> Result<u8, Self::Error>;
}

/// A sink for terminal output bytes.
pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Emit a single byte
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Emit every byte of `bytes` in order
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Flush any buffered output
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A bidirectional character device, such as a serial console.
pub trait Terminal: Read + Write {}

impl<T: Read + Write> Terminal for T {}

impl<T: Read + ?Sized> Read for &mut T {
    type Error = T::Error;

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        (**self).read_byte()
    }
}

impl<T: Write + ?Sized> Write for &mut T {
    type Error = T::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_all(bytes)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}

/// Scripted input: each read consumes the first byte of the slice.
impl Read for &[u8] {
    type Error = Error;

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        match self.split_first() {
            Some((&byte, rest)) => {
                *self = rest;
                Ok(byte)
            }
            None => Err(Error::EndOfInput),
        }
    }
}

/// Captured output, mostly useful to inspect the exact terminal bytes an
/// edit produced.
impl<const N: usize> Write for heapless::Vec<u8, N> {
    type Error = Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(byte).map_err(|_| Error::BufferFull)
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(bytes).map_err(|_| Error::BufferFull)
    }
}

/// Adapter exposing `std::io` streams as shell byte I/O.
///
/// Only available with the `std` feature; intended for running the shell on
/// a development host.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct Std<T>(pub T);

#[cfg(feature = "std")]
impl<T: std::io::Read> Read for Std<T> {
    type Error = std::io::Error;

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let mut byte = [0u8; 1];
        self.0.read_exact(&mut byte)?;
        Ok(byte[0])
    }
}

#[cfg(feature = "std")]
impl<T: std::io::Write> Write for Std<T> {
    type Error = std::io::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.0.write_all(&[byte])
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.0.write_all(bytes)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.0.flush()
    }
}
