//! An implementation of the [MD4][1] cryptographic hash algorithm.
//!
//! MD4 is broken and kept only for compatibility with legacy formats.
//!
//! # Usage
//!
//! ```rust
//! use md4::{Md4, Digest};
//! use hex_literal::hex;
//!
//! // create a Md4 hasher instance
//! let mut hasher = Md4::new();
//!
//! // process input message
//! hasher.update(b"abc");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 16]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("a448017aaf21d8525fc10ae87aa6729d"));
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/MD4

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};

use digest::{generic_array::GenericArray, typenum::U16};
use md_engine::{Block, BlockTransform, LengthField, MdCore, MdHasher};

mod compress;
use compress::compress;

const H0: [u32; 4] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476];

/// MD4 chaining value.
#[derive(Clone, Copy)]
pub struct Md4State([u32; 4]);

impl BlockTransform for Md4State {
    type OutputSize = U16;
    const INIT: Self = Md4State(H0);
    const LENGTH: LengthField = LengthField::Le64;
    const NAME: &'static str = "Md4";

    #[inline]
    fn compress(&mut self, block: &Block) {
        compress(&mut self.0, block);
    }

    fn write_output(&self, out: &mut GenericArray<u8, U16>) {
        for (chunk, v) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }
    }
}

/// Core MD4 hasher state.
pub type Md4Core = MdCore<Md4State>;

/// MD4 hasher state.
pub type Md4 = MdHasher<Md4State>;
