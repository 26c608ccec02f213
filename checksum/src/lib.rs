//! Non-cryptographic checksums computed one byte at a time over
//! compile-time tables.
//!
//! | type          | width | polynomial           | reflected | init / xorout | check (`"123456789"`) |
//! |---------------|-------|----------------------|-----------|---------------|-----------------------|
//! | [`Crc8`]      | 8     | `0x07`               | no        | `0` / `0`     | `0xF4`                |
//! | [`Crc16`]     | 16    | `0x8005` (ARC)       | yes       | `0` / `0`     | `0xBB3D`              |
//! | [`Crc32`]     | 32    | `0x04C11DB7`         | yes       | `!0` / `!0`   | `0xCBF43926`          |
//! | [`Crc64`]     | 64    | `0x42F0E1EBA9EA3693` | yes       | `!0` / `!0`   | `0x995DC9BBDF1939FA`  |
//! | [`Adler32`]   | 32    | mod 65521 sums       | n/a       | `1`           | `0x091E01DE`          |
//!
//! # Usage
//!
//! ```rust
//! use checksum::{Checksum, Crc32};
//!
//! let mut crc = Crc32::new();
//! crc.update(b"1234");
//! crc.update(b"56789");
//! assert_eq!(crc.finalize(), 0xCBF4_3926);
//! assert_eq!(Crc32::checksum(b"123456789"), 0xCBF4_3926);
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

use core::fmt;

mod adler32;
mod crc16;
mod crc32;
mod crc64;
mod crc8;
mod table;

pub use adler32::Adler32;
pub use crc16::Crc16;
pub use crc32::Crc32;
pub use crc64::Crc64;
pub use crc8::Crc8;

/// Streaming checksum.
pub trait Checksum: Clone + Default {
    /// Checksum width in bytes.
    const OUTPUT_SIZE: usize;

    /// Display name of the algorithm.
    const NAME: &'static str;

    /// Checksum value.
    type Output: Copy + Eq + fmt::Debug + fmt::UpperHex + Default;

    /// Fresh checksum state.
    #[must_use]
    fn new() -> Self;

    /// Feed more data.
    fn update(&mut self, data: &[u8]);

    /// Checksum of everything fed so far. The state is left untouched, so
    /// more data may follow.
    #[must_use]
    fn finalize(&self) -> Self::Output;

    /// Return to the initial state.
    fn reset(&mut self);

    /// One-shot checksum of `data`.
    #[inline]
    #[must_use]
    fn checksum(data: &[u8]) -> Self::Output {
        let mut h = Self::new();
        h.update(data);
        h.finalize()
    }
}
