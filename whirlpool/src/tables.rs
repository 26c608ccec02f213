//! Table generation for the Whirlpool round function.
//!
//! Every revision of Whirlpool uses the same round structure and differs
//! only in its S-box and in the first row of the circulant diffusion
//! matrix. [`TableBuilder`] turns those two parameters into the eight
//! lookup tables and ten round constants consumed by the compression
//! function. All of it runs at compile time.

/// Number of rounds of the internal block cipher.
pub const ROUNDS: usize = 10;

/// Diffusion row of the 2003 revision.
pub const FINAL_DIFFUSION: [u8; 8] = [1, 1, 4, 1, 8, 5, 2, 9];

/// Diffusion row of the 2000 and 2001 revisions.
pub const ORIGINAL_DIFFUSION: [u8; 8] = [1, 1, 3, 1, 5, 8, 9, 5];

// x^8 + x^4 + x^3 + x^2 + 1 without the x^8 term
const REDUCTION: u8 = 0x1D;

const MINI_E: [u8; 16] = [
    0x1, 0xB, 0x9, 0xC, 0xD, 0x6, 0xF, 0x3, 0xE, 0x8, 0x7, 0x4, 0xA, 0x2, 0x5, 0x0,
];
const MINI_R: [u8; 16] = [
    0x7, 0xC, 0xB, 0xD, 0xE, 0x4, 0x9, 0xF, 0x6, 0x3, 0x8, 0xA, 0x2, 0x5, 0x1, 0x0,
];

/// S-box of the original (2000) submission.
pub const WHIRLPOOL0_SBOX: [u8; 256] = [
    0x68, 0xD0, 0xEB, 0x2B, 0x48, 0x9D, 0x6A, 0xE4, 0xE3, 0xA3, 0x56, 0x81, 0x7D, 0xF1, 0x85, 0x9E,
    0x2C, 0x8E, 0x78, 0xCA, 0x17, 0xA9, 0x61, 0xD5, 0x5D, 0x0B, 0x8C, 0x3C, 0x77, 0x51, 0x22, 0x42,
    0x3F, 0x54, 0x41, 0x80, 0xCC, 0x86, 0xB3, 0x18, 0x2E, 0x57, 0x06, 0x62, 0xF4, 0x36, 0xD1, 0x6B,
    0x1B, 0x65, 0x75, 0x10, 0xDA, 0x49, 0x26, 0xF9, 0xCB, 0x66, 0xE7, 0xBA, 0xAE, 0x50, 0x52, 0xAB,
    0x05, 0xF0, 0x0D, 0x73, 0x3B, 0x04, 0x20, 0xFE, 0xDD, 0xF5, 0xB4, 0x5F, 0x0A, 0xB5, 0xC0, 0xA0,
    0x71, 0xA5, 0x2D, 0x60, 0x72, 0x93, 0x39, 0x08, 0x83, 0x21, 0x5C, 0x87, 0xB1, 0xE0, 0x00, 0xC3,
    0x12, 0x91, 0x8A, 0x02, 0x1C, 0xE6, 0x45, 0xC2, 0xC4, 0xFD, 0xBF, 0x44, 0xA1, 0x4C, 0x33, 0xC5,
    0x84, 0x23, 0x7C, 0xB0, 0x25, 0x15, 0x35, 0x69, 0xFF, 0x94, 0x4D, 0x70, 0xA2, 0xAF, 0xCD, 0xD6,
    0x6C, 0xB7, 0xF8, 0x09, 0xF3, 0x67, 0xA4, 0xEA, 0xEC, 0xB6, 0xD4, 0xD2, 0x14, 0x1E, 0xE1, 0x24,
    0x38, 0xC6, 0xDB, 0x4B, 0x7A, 0x3A, 0xDE, 0x5E, 0xDF, 0x95, 0xFC, 0xAA, 0xD7, 0xCE, 0x07, 0x0F,
    0x3D, 0x58, 0x9A, 0x98, 0x9C, 0xF2, 0xA7, 0x11, 0x7E, 0x8B, 0x43, 0x03, 0xE2, 0xDC, 0xE5, 0xB2,
    0x4E, 0xC7, 0x6D, 0xE9, 0x27, 0x40, 0xD8, 0x37, 0x92, 0x8F, 0x01, 0x1D, 0x53, 0x3E, 0x59, 0xC1,
    0x4F, 0x32, 0x16, 0xFA, 0x74, 0xFB, 0x63, 0x9F, 0x34, 0x1A, 0x2A, 0x5A, 0x8D, 0xC9, 0xCF, 0xF6,
    0x90, 0x28, 0x88, 0x9B, 0x31, 0x0E, 0xBD, 0x4A, 0xE8, 0x96, 0xA6, 0x0C, 0xC8, 0x79, 0xBC, 0xBE,
    0xEF, 0x6E, 0x46, 0x97, 0x5B, 0xED, 0x19, 0xD9, 0xAC, 0x99, 0xA8, 0x29, 0x64, 0x1F, 0xAD, 0x55,
    0x13, 0xBB, 0xF7, 0x6F, 0xB9, 0x47, 0x2F, 0xEE, 0xB8, 0x7B, 0x89, 0x30, 0xD3, 0x7F, 0x76, 0x82,
];

/// S-box of the 2001 and 2003 revisions, derived from the E and R mini-boxes.
pub const MINIBOX_SBOX: [u8; 256] = minibox_sbox();

const fn invert(b: &[u8; 16]) -> [u8; 16] {
    let mut inv = [0u8; 16];
    let mut i = 0;
    while i < 16 {
        inv[b[i] as usize] = i as u8;
        i += 1;
    }
    inv
}

const fn minibox_sbox() -> [u8; 256] {
    let e_inv = invert(&MINI_E);
    let mut sbox = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        let u = MINI_E[x >> 4];
        let l = e_inv[x & 0xF];
        let r = MINI_R[(u ^ l) as usize];
        sbox[x] = (MINI_E[(u ^ r) as usize] << 4) | e_inv[(l ^ r) as usize];
        x += 1;
    }
    sbox
}

const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0;
    while b != 0 {
        if b & 1 != 0 {
            p ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= REDUCTION;
        }
        b >>= 1;
    }
    p
}

/// Lookup tables and round constants of one Whirlpool revision.
#[derive(Clone)]
pub struct TableBundle {
    /// `c[k][x]` is row `k` of the diffusion matrix applied to `S[x]`,
    /// packed big-endian into a word.
    pub(crate) c: [[u64; 256]; 8],
    pub(crate) rc: [u64; ROUNDS],
}

impl TableBundle {
    /// Round constants in application order.
    pub fn round_constants(&self) -> &[u64; ROUNDS] {
        &self.rc
    }

    /// Lookup table for byte column `k`.
    pub fn table(&self, k: usize) -> &[u64; 256] {
        &self.c[k % 8]
    }
}

/// Compile-time builder of a [`TableBundle`].
///
/// ```
/// use whirlpool::tables::{TableBuilder, MINIBOX_SBOX, ORIGINAL_DIFFUSION};
///
/// const TWEAKED: whirlpool::tables::TableBundle = TableBuilder::new(MINIBOX_SBOX)
///     .diffusion(ORIGINAL_DIFFUSION)
///     .build();
/// assert_eq!(TWEAKED.round_constants()[0], 0x1823_C6E8_87B8_014F);
/// ```
#[derive(Clone, Copy)]
pub struct TableBuilder {
    sbox: [u8; 256],
    diffusion: [u8; 8],
}

impl TableBuilder {
    /// Start from an S-box with the 2003 diffusion row.
    pub const fn new(sbox: [u8; 256]) -> Self {
        Self {
            sbox,
            diffusion: FINAL_DIFFUSION,
        }
    }

    /// Replace the first row of the circulant diffusion matrix.
    pub const fn diffusion(mut self, row: [u8; 8]) -> Self {
        self.diffusion = row;
        self
    }

    /// Expand the parameters into lookup tables.
    pub const fn build(self) -> TableBundle {
        let mut c = [[0u64; 256]; 8];
        let mut x = 0;
        while x < 256 {
            let s = self.sbox[x];
            let mut word = 0u64;
            let mut j = 0;
            while j < 8 {
                word = (word << 8) | gf_mul(s, self.diffusion[j]) as u64;
                j += 1;
            }
            let mut k = 0;
            while k < 8 {
                c[k][x] = word.rotate_right(8 * k as u32);
                k += 1;
            }
            x += 1;
        }

        let mut rc = [0u64; ROUNDS];
        let mut r = 0;
        while r < ROUNDS {
            let mut word = 0u64;
            let mut j = 0;
            while j < 8 {
                word = (word << 8) | self.sbox[8 * r + j] as u64;
                j += 1;
            }
            rc[r] = word;
            r += 1;
        }

        TableBundle { c, rc }
    }
}

/// Tables of Whirlpool-0 (2000).
pub static WHIRLPOOL0: TableBundle = TableBuilder::new(WHIRLPOOL0_SBOX)
    .diffusion(ORIGINAL_DIFFUSION)
    .build();

/// Tables of Whirlpool-T (2001).
pub static WHIRLPOOL_T: TableBundle = TableBuilder::new(MINIBOX_SBOX)
    .diffusion(ORIGINAL_DIFFUSION)
    .build();

/// Tables of Whirlpool (2003).
pub static WHIRLPOOL: TableBundle = TableBuilder::new(MINIBOX_SBOX).build();
