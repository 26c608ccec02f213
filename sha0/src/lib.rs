//! An implementation of the [SHA-0][1] cryptographic hash algorithm.
//!
//! SHA-0 is the 1993 predecessor of SHA-1. The two differ only in the
//! message schedule: SHA-0 expands the block without the one-bit left
//! rotation that SHA-1 added. Collisions for SHA-0 are practical, so use
//! it only to reproduce existing digests.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//! use sha0::{Sha0, Digest};
//!
//! let mut hasher = Sha0::new();
//! hasher.update(b"abc");
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("0164b8a914cd2a5e74c4f7ff082c4d97f1edf880"));
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/SHA-1#SHA-0

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};

use digest::{generic_array::GenericArray, typenum::U20};
use md_engine::{Block, BlockTransform, LengthField, MdCore, MdHasher};

mod compress;

const STATE_LEN: usize = 5;

const H0: [u32; STATE_LEN] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476, 0xC3D2_E1F0];

/// SHA-0 chaining value.
#[derive(Clone, Copy)]
pub struct Sha0State([u32; STATE_LEN]);

impl BlockTransform for Sha0State {
    type OutputSize = U20;
    const INIT: Self = Sha0State(H0);
    const LENGTH: LengthField = LengthField::Be64;
    const NAME: &'static str = "Sha0";

    #[inline]
    fn compress(&mut self, block: &Block) {
        compress::compress(&mut self.0, block);
    }

    fn write_output(&self, out: &mut GenericArray<u8, U20>) {
        for (chunk, v) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
    }
}

/// Core SHA-0 hasher state.
pub type Sha0Core = MdCore<Sha0State>;

/// SHA-0 hasher state.
pub type Sha0 = MdHasher<Sha0State>;
