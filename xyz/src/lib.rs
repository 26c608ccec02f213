//! The XYZ message digest: a 32-bit XOR fold of the input.
//!
//! The message is split into big-endian 32-bit words, the last one padded
//! with zero bytes, and all words are XORed together. The low byte of every
//! word is forced to `0xFF` before folding, so only the first three bytes of
//! each word reach the output. It is the textbook example of a
//! `MessageDigest` provider and has no cryptographic value.
//!
//! # Usage
//!
//! ```rust
//! use xyz::{Xyz, Digest};
//!
//! let mut hasher = Xyz::new();
//! hasher.update(b"abcd");
//! hasher.update(b"ef");
//! // 0x616263ff ^ 0x656600ff
//! assert_eq!(hasher.finalize()[..], [0x04, 0x04, 0x63, 0x00]);
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};

use core::fmt;
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        FixedOutputCore, OutputSizeUser, UpdateCore,
    },
    typenum::U4,
    HashMarker, Output, Reset,
};

/// The fourth byte of a word never contributes; it always reads as `0xFF`.
#[inline]
fn word(block: &Block<XyzCore>) -> u32 {
    u32::from_be_bytes([block[0], block[1], block[2], 0xFF])
}

/// Core XYZ hasher state.
#[derive(Clone, Default)]
pub struct XyzCore {
    hash: u32,
}

impl XyzCore {
    #[inline]
    fn fold(&mut self, block: &Block<Self>) {
        self.hash ^= word(block);
    }
}

impl HashMarker for XyzCore {}

impl BlockSizeUser for XyzCore {
    type BlockSize = U4;
}

impl BufferKindUser for XyzCore {
    type BufferKind = Eager;
}

impl OutputSizeUser for XyzCore {
    type OutputSize = U4;
}

impl UpdateCore for XyzCore {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            self.fold(block);
        }
    }
}

impl FixedOutputCore for XyzCore {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let mut hash = self.hash;
        if buffer.get_pos() != 0 {
            hash ^= word(buffer.pad_with_zeros());
        }
        out.copy_from_slice(&hash.to_be_bytes());
    }
}

impl Reset for XyzCore {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for XyzCore {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Xyz")
    }
}

impl fmt::Debug for XyzCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("XyzCore { ... }")
    }
}

/// XYZ hasher state.
pub type Xyz = CoreWrapper<XyzCore>;
