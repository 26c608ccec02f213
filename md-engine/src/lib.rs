//! Generic [Merkle–Damgård][1] engine shared by the block hash crates of
//! this workspace.
//!
//! The engine owns everything that is common to MD4, the RIPEMD family,
//! SHA-0 and Whirlpool: buffering of arbitrary-length input into 64-byte
//! blocks, counting the message length, appending `0x80 || 0* || length`
//! padding and resetting to the initial chaining value. The per-algorithm
//! part is a [`BlockTransform`]: the chaining value itself, its
//! compression function and the byte order of its output.
//!
//! Byte input goes through [`digest::Update`], the single "consume bytes"
//! contract implemented by every hasher in the workspace.
//!
//! # Usage
//!
//! ```rust
//! use md_engine::{BlockTransform, LengthField, MdHasher, Block};
//! use md_engine::digest::{generic_array::GenericArray, typenum::U4, Digest};
//!
//! /// Toy transform: sums the little-endian words of every block.
//! #[derive(Clone, Copy)]
//! struct WordSum(u32);
//!
//! impl BlockTransform for WordSum {
//!     type OutputSize = U4;
//!     const INIT: Self = WordSum(0);
//!     const LENGTH: LengthField = LengthField::Le64;
//!     const NAME: &'static str = "WordSum";
//!
//!     fn compress(&mut self, block: &Block) {
//!         for word in block.chunks_exact(4) {
//!             let w = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
//!             self.0 = self.0.wrapping_add(w);
//!         }
//!     }
//!
//!     fn write_output(&self, out: &mut GenericArray<u8, U4>) {
//!         out.copy_from_slice(&self.0.to_le_bytes());
//!     }
//! }
//!
//! let mut hasher = MdHasher::<WordSum>::new();
//! hasher.update(b"abc");
//! // "abc" || 0x80 sums to 0x80636261, the length word adds 24 bits
//! assert_eq!(hasher.finalize()[..], (0x8063_6261u32 + 24).to_le_bytes());
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/Merkle%E2%80%93Damg%C3%A5rd_construction

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, Digest};

use core::fmt;
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
        OutputSizeUser, UpdateCore,
    },
    generic_array::{ArrayLength, GenericArray},
    typenum::{Unsigned, U64},
    HashMarker, Output, Reset,
};

mod length;
pub use length::LengthField;

/// Size of a message block in bytes.
pub const BLOCK_LEN: usize = 64;

/// One 64-byte message block.
pub type Block = GenericArray<u8, U64>;

/// Per-algorithm half of a Merkle–Damgård hash.
///
/// A value of the implementing type is the chaining value. The engine
/// starts from [`BlockTransform::INIT`], calls
/// [`compress`][BlockTransform::compress] once per full block and finally
/// asks the transform to serialize itself with
/// [`write_output`][BlockTransform::write_output].
pub trait BlockTransform: Copy {
    /// Digest size in bytes.
    type OutputSize: ArrayLength<u8> + 'static;

    /// Initial chaining value.
    const INIT: Self;

    /// Encoding of the message length appended by the padding.
    const LENGTH: LengthField;

    /// Algorithm name used by `Debug` and [`AlgorithmName`].
    const NAME: &'static str;

    /// Absorb one message block into the chaining value.
    fn compress(&mut self, block: &Block);

    /// Serialize the chaining value into the digest.
    fn write_output(&self, out: &mut GenericArray<u8, Self::OutputSize>);
}

/// Buffering and padding core parameterized by a [`BlockTransform`].
#[derive(Clone)]
pub struct MdCore<T: BlockTransform> {
    state: T,
    block_len: u64,
}

/// Hasher built from [`MdCore`] with the `digest` buffer wrapper.
pub type MdHasher<T> = CoreWrapper<MdCore<T>>;

impl<T: BlockTransform> MdCore<T> {
    /// Current chaining value.
    pub fn state(&self) -> &T {
        &self.state
    }

    /// Number of full blocks absorbed so far.
    pub fn block_len(&self) -> u64 {
        self.block_len
    }
}

impl<T: BlockTransform> HashMarker for MdCore<T> {}

impl<T: BlockTransform> BlockSizeUser for MdCore<T> {
    type BlockSize = U64;
}

impl<T: BlockTransform> BufferKindUser for MdCore<T> {
    type BufferKind = Eager;
}

impl<T: BlockTransform> OutputSizeUser for MdCore<T> {
    type OutputSize = T::OutputSize;
}

impl<T: BlockTransform> UpdateCore for MdCore<T> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block]) {
        self.block_len = self.block_len.wrapping_add(blocks.len() as u64);
        for block in blocks {
            self.state.compress(block);
        }
    }
}

impl<T: BlockTransform> FixedOutputCore for MdCore<T> {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let bs = Self::BlockSize::U64 as u128;
        let bit_len = 8 * (buffer.get_pos() as u128 + bs * self.block_len as u128);

        let mut suffix = [0u8; LengthField::MAX_LEN];
        let suffix = T::LENGTH.encode(bit_len, &mut suffix);

        let mut state = self.state;
        buffer.digest_pad(0x80, suffix, |block| state.compress(block));
        state.write_output(out);
    }
}

impl<T: BlockTransform> Default for MdCore<T> {
    #[inline]
    fn default() -> Self {
        Self {
            state: T::INIT,
            block_len: 0,
        }
    }
}

impl<T: BlockTransform> Reset for MdCore<T> {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl<T: BlockTransform> AlgorithmName for MdCore<T> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(T::NAME)
    }
}

impl<T: BlockTransform> fmt::Debug for MdCore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(T::NAME)?;
        f.write_str("Core { ... }")
    }
}
