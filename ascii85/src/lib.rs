//! [Ascii85] encoding as used by PostScript and PDF.
//!
//! Every four input bytes become five digits in `'!'..='u'`; a group of
//! four zero bytes is abbreviated `z`. Encoded data is framed in `<~` and
//! `~>`. [`remove_identifiers`] and [`add_identifiers`] convert between the
//! framed and the bare form.
//!
//! ```
//! let framed = ascii85::encode(b"hello");
//! assert_eq!(framed, b"<~BOu!rDZ~>");
//! assert_eq!(ascii85::remove_identifiers(&framed), b"BOu!rDZ");
//! assert_eq!(ascii85::decode(&framed)?, b"hello");
//! assert_eq!(ascii85::decode_bare(b"BOu!rDZ")?, b"hello");
//! # Ok::<(), ascii85::Error>(())
//! ```
//!
//! [Ascii85]: https://en.wikipedia.org/wiki/Ascii85

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod decoder;
mod encoder;
mod error;
#[cfg(feature = "std")]
mod io;

pub use decoder::{Decoder, State};
pub use encoder::Encoder;
pub use error::Error;
#[cfg(feature = "std")]
pub use io::Ascii85Reader;

use alloc::vec::Vec;

/// Opening delimiter.
pub const START: &[u8] = b"<~";
/// Closing delimiter.
pub const END: &[u8] = b"~>";

#[inline]
fn digit_value(v: u32) -> u8 {
    b'!' + v as u8
}

/// Encode `data` into a framed Ascii85 section.
pub fn encode(data: &[u8]) -> Vec<u8> {
    encode_with(Encoder::new(), data)
}

/// Encode `data` with a configured [`Encoder`].
pub fn encode_with(mut encoder: Encoder, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() / 4 * 5 + 9);
    encoder.encode(data, &mut out);
    encoder.finish(&mut out);
    out
}

/// Decode every section of `input`, discarding bytes outside them.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, Error> {
    let mut decoder = Decoder::new();
    let mut out = Vec::with_capacity(input.len() / 5 * 4 + 4);
    for &b in input {
        decoder.push(b, &mut out)?;
    }
    decoder.finish(&mut out)?;
    Ok(out)
}

/// Decode a section stored without its delimiters.
///
/// Error offsets refer to the framed input, two bytes past the bare one.
pub fn decode_bare(input: &[u8]) -> Result<Vec<u8>, Error> {
    decode(&add_identifiers(input))
}

/// Wrap `input` in `<~` … `~>`.
pub fn add_identifiers(input: &[u8]) -> Vec<u8> {
    [START, input, END].concat()
}

/// Strip `<~` … `~>` from `input` if it is longer than four bytes and
/// carries both delimiters; otherwise return it unchanged.
pub fn remove_identifiers(input: &[u8]) -> &[u8] {
    if input.len() > 4 && input.starts_with(START) && input.ends_with(END) {
        &input[2..input.len() - 2]
    } else {
        input
    }
}
