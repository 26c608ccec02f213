//! An implementation of the [Whirlpool][1] cryptographic hash algorithm.
//!
//! Whirlpool was revised twice after its submission to NESSIE. All three
//! revisions are provided and share one round engine; they differ only in
//! the [`TableBundle`] the engine is instantiated with:
//!
//! | hasher          | revision | S-box          | diffusion row        |
//! |-----------------|----------|----------------|----------------------|
//! | [`Whirlpool0`]  | 2000     | original       | `1 1 3 1 5 8 9 5`    |
//! | [`WhirlpoolT`]  | 2001     | mini-box based | `1 1 3 1 5 8 9 5`    |
//! | [`Whirlpool`]   | 2003     | mini-box based | `1 1 4 1 8 5 2 9`    |
//!
//! For details see <http://www.larc.usp.br/~pbarreto/WhirlpoolPage.html>.
//!
//! # Usage
//!
//! ```rust
//! use whirlpool::{Whirlpool, Digest};
//! use hex_literal::hex;
//!
//! // create a hasher object, to use it do not forget to import `Digest` trait
//! let mut hasher = Whirlpool::new();
//! // write input message
//! hasher.update(b"Hello Whirlpool");
//! // read hash digest (it will consume hasher)
//! let result = hasher.finalize();
//!
//! assert_eq!(result[..], hex!("
//!     8eaccdc136903c458ea0b1376be2a5fc9dc5b8ce8892a3b4f43366e2610c206c
//!     a373816495e63db0fff2ff25f75aa7162f332c9f518c3036456502a8414d300a
//! ")[..]);
//! ```
//!
//! Custom table bundles plug in through [`Variant`].
//!
//! [1]: https://en.wikipedia.org/wiki/Whirlpool_(hash_function)

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};

mod compress;
pub mod tables;

pub use tables::{TableBuilder, TableBundle};

use core::marker::PhantomData;
use digest::{generic_array::GenericArray, typenum::U64};
use md_engine::{Block, BlockTransform, LengthField, MdCore, MdHasher};

/// Selects the tables a [`WhirlpoolState`] runs with.
pub trait Variant: Copy + 'static {
    /// Algorithm name reported by `Debug`.
    const NAME: &'static str;

    /// Tables used by every round.
    fn tables() -> &'static TableBundle;
}

/// Whirlpool-0, the 2000 submission.
#[derive(Clone, Copy, Debug)]
pub struct Whirlpool0Variant;

impl Variant for Whirlpool0Variant {
    const NAME: &'static str = "Whirlpool0";

    fn tables() -> &'static TableBundle {
        &tables::WHIRLPOOL0
    }
}

/// Whirlpool-T, the 2001 revision.
#[derive(Clone, Copy, Debug)]
pub struct WhirlpoolTVariant;

impl Variant for WhirlpoolTVariant {
    const NAME: &'static str = "WhirlpoolT";

    fn tables() -> &'static TableBundle {
        &tables::WHIRLPOOL_T
    }
}

/// Whirlpool, the 2003 revision standardized in ISO/IEC 10118-3.
#[derive(Clone, Copy, Debug)]
pub struct WhirlpoolVariant;

impl Variant for WhirlpoolVariant {
    const NAME: &'static str = "Whirlpool";

    fn tables() -> &'static TableBundle {
        &tables::WHIRLPOOL
    }
}

/// Whirlpool chaining value.
#[derive(Clone, Copy)]
pub struct WhirlpoolState<V: Variant> {
    h: [u64; 8],
    variant: PhantomData<V>,
}

impl<V: Variant> BlockTransform for WhirlpoolState<V> {
    type OutputSize = U64;
    const INIT: Self = Self {
        h: [0; 8],
        variant: PhantomData,
    };
    const LENGTH: LengthField = LengthField::Be256;
    const NAME: &'static str = V::NAME;

    #[inline]
    fn compress(&mut self, block: &Block) {
        compress::compress(V::tables(), &mut self.h, block);
    }

    fn write_output(&self, out: &mut GenericArray<u8, U64>) {
        for (chunk, v) in out.chunks_exact_mut(8).zip(self.h.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
    }
}

/// Core Whirlpool hasher state for any [`Variant`].
pub type WhirlpoolCore<V = WhirlpoolVariant> = MdCore<WhirlpoolState<V>>;

/// Whirlpool-0 (2000) hasher state.
pub type Whirlpool0 = MdHasher<WhirlpoolState<Whirlpool0Variant>>;

/// Whirlpool-T (2001) hasher state.
pub type WhirlpoolT = MdHasher<WhirlpoolState<WhirlpoolTVariant>>;

/// Whirlpool (2003) hasher state.
pub type Whirlpool = MdHasher<WhirlpoolState<WhirlpoolVariant>>;
