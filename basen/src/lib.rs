//! Streaming Base32 and Base64 codecs.
//!
//! A [`BaseNCodec`] is immutable configuration: alphabet, pad symbol, line
//! wrapping and decode policy. The state of one encode or decode operation
//! lives in a [`Context`], so input can be fed in arbitrary chunks and
//! output drained as it is produced.
//!
//! ```
//! use basen::{BaseNCodec, Context};
//!
//! let codec = BaseNCodec::base32();
//! let mut ctx = Context::new();
//! for chunk in [&b"MZ"[..], b"XW6", b"===", b"="] {
//!     codec.decode(chunk, &mut ctx)?;
//! }
//! codec.finish_decode(&mut ctx)?;
//! assert_eq!(ctx.take_output(), b"foo");
//! assert_eq!(BaseNCodec::base32_hex().encode_to_string(b"foo"), "CPNMU===");
//! # Ok::<(), basen::DecodeError>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod alphabet;
mod builder;
mod codec;
mod context;
mod error;
#[cfg(feature = "std")]
mod io;

pub use alphabet::Alphabet;
pub use builder::Builder;
pub use codec::{BaseNCodec, DecodePolicy, CRLF, MIME_LINE_LENGTH, PAD};
pub use context::{Context, Phase};
pub use error::{ConfigError, DecodeError};
#[cfg(feature = "std")]
pub use io::CodecReader;
