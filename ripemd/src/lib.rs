//! Pure Rust implementation of the [RIPEMD] family of hash functions.
//!
//! Three members are provided:
//!
//! - [`Ripemd`]: the original 1992 RIPEMD from the RIPE project, 128-bit
//!   output, three rounds per line.
//! - [`Ripemd128`] and [`Ripemd160`]: the strengthened 1996 designs.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//! use ripemd::{Digest, Ripemd160};
//!
//! // create a RIPEMD-160 hasher instance
//! let mut hasher = Ripemd160::new();
//!
//! // process input message
//! hasher.update(b"Hello world!");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 20]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("7f772647d88750add82d8e1a7a3e5c0902a346a3"));
//! ```
//!
//! [RIPEMD]: https://en.wikipedia.org/wiki/RIPEMD

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};

use digest::{
    generic_array::GenericArray,
    typenum::{U16, U20},
};
use md_engine::{Block, BlockTransform, LengthField, MdCore, MdHasher};

mod c128;
mod c160;
mod consts;

use consts::{H0, RIPEMD128_LEFT, RIPEMD128_RIGHT, RIPEMD_LEFT, RIPEMD_RIGHT};

fn write_le(words: &[u32], out: &mut [u8]) {
    for (chunk, v) in out.chunks_exact_mut(4).zip(words.iter()) {
        chunk.copy_from_slice(&v.to_le_bytes());
    }
}

/// RIPEMD (1992) chaining value.
#[derive(Clone, Copy)]
pub struct RipemdState([u32; c128::DIGEST_BUF_LEN]);

impl BlockTransform for RipemdState {
    type OutputSize = U16;
    const INIT: Self = RipemdState([H0[0], H0[1], H0[2], H0[3]]);
    const LENGTH: LengthField = LengthField::Le64;
    const NAME: &'static str = "Ripemd";

    #[inline]
    fn compress(&mut self, block: &Block) {
        c128::compress(&mut self.0, block, &RIPEMD_LEFT, &RIPEMD_RIGHT);
    }

    fn write_output(&self, out: &mut GenericArray<u8, U16>) {
        write_le(&self.0, out);
    }
}

/// RIPEMD-128 chaining value.
#[derive(Clone, Copy)]
pub struct Ripemd128State([u32; c128::DIGEST_BUF_LEN]);

impl BlockTransform for Ripemd128State {
    type OutputSize = U16;
    const INIT: Self = Ripemd128State([H0[0], H0[1], H0[2], H0[3]]);
    const LENGTH: LengthField = LengthField::Le64;
    const NAME: &'static str = "Ripemd128";

    #[inline]
    fn compress(&mut self, block: &Block) {
        c128::compress(&mut self.0, block, &RIPEMD128_LEFT, &RIPEMD128_RIGHT);
    }

    fn write_output(&self, out: &mut GenericArray<u8, U16>) {
        write_le(&self.0, out);
    }
}

/// RIPEMD-160 chaining value.
#[derive(Clone, Copy)]
pub struct Ripemd160State([u32; c160::DIGEST_BUF_LEN]);

impl BlockTransform for Ripemd160State {
    type OutputSize = U20;
    const INIT: Self = Ripemd160State(H0);
    const LENGTH: LengthField = LengthField::Le64;
    const NAME: &'static str = "Ripemd160";

    #[inline]
    fn compress(&mut self, block: &Block) {
        c160::compress(&mut self.0, block);
    }

    fn write_output(&self, out: &mut GenericArray<u8, U20>) {
        write_le(&self.0, out);
    }
}

/// Core RIPEMD (1992) hasher state.
pub type RipemdCore = MdCore<RipemdState>;
/// RIPEMD (1992) hasher state.
pub type Ripemd = MdHasher<RipemdState>;

/// Core RIPEMD-128 hasher state.
pub type Ripemd128Core = MdCore<Ripemd128State>;
/// RIPEMD-128 hasher state.
pub type Ripemd128 = MdHasher<Ripemd128State>;

/// Core RIPEMD-160 hasher state.
pub type Ripemd160Core = MdCore<Ripemd160State>;
/// RIPEMD-160 hasher state.
pub type Ripemd160 = MdHasher<Ripemd160State>;
