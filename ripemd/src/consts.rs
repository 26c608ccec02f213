pub(crate) const H0: [u32; 5] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476, 0xC3D2_E1F0];

pub(crate) type BoolFn = fn(u32, u32, u32) -> u32;

#[inline(always)]
pub(crate) fn f1(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
pub(crate) fn f2(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
pub(crate) fn f3(x: u32, y: u32, z: u32) -> u32 {
    (x | !y) ^ z
}

#[inline(always)]
pub(crate) fn f4(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

#[inline(always)]
pub(crate) fn f5(x: u32, y: u32, z: u32) -> u32 {
    x ^ (y | !z)
}

#[inline(always)]
pub(crate) fn majority(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | ((x | y) & z)
}

/// One 16-step round of a pipeline.
pub(crate) struct Round {
    pub f: BoolFn,
    pub k: u32,
    pub r: &'static [usize; 16],
    pub s: &'static [u32; 16],
}

const R1: [usize; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
const R2: [usize; 16] = [7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8];
const R3: [usize; 16] = [3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12];
const R4: [usize; 16] = [1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2];
const R5: [usize; 16] = [4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13];

const RR1: [usize; 16] = [5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12];
const RR2: [usize; 16] = [6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2];
const RR3: [usize; 16] = [15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13];
const RR4: [usize; 16] = [8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14];
const RR5: [usize; 16] = [12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11];

const S1: [u32; 16] = [11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8];
const S2: [u32; 16] = [7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12];
const S3: [u32; 16] = [11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5];
const S4: [u32; 16] = [11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12];
const S5: [u32; 16] = [9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6];

const SS1: [u32; 16] = [8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6];
const SS2: [u32; 16] = [9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11];
const SS3: [u32; 16] = [9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5];
const SS4: [u32; 16] = [15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8];
const SS5: [u32; 16] = [8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11];

// 1992 RIPEMD word orders and shifts for rounds 2 and 3
const R2_92: [usize; 16] = [7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 14, 2, 11, 8];
const R3_92: [usize; 16] = [3, 10, 2, 4, 9, 15, 8, 1, 14, 7, 0, 6, 11, 13, 5, 12];
const S2_92: [u32; 16] = [7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 7, 11, 13, 12];
const S3_92: [u32; 16] = [11, 13, 14, 7, 14, 9, 13, 15, 6, 8, 13, 6, 12, 5, 7, 5];

const fn round(f: BoolFn, k: u32, r: &'static [usize; 16], s: &'static [u32; 16]) -> Round {
    Round { f, k, r, s }
}

/// RIPEMD (1992): both lines use the same functions and word order.
pub(crate) const RIPEMD_LEFT: [Round; 3] = [
    round(f2, 0, &R1, &S1),
    round(majority, 0x5A82_7999, &R2_92, &S2_92),
    round(f1, 0x6ED9_EBA1, &R3_92, &S3_92),
];
pub(crate) const RIPEMD_RIGHT: [Round; 3] = [
    round(f2, 0x50A2_8BE6, &R1, &S1),
    round(majority, 0, &R2_92, &S2_92),
    round(f1, 0x5C4D_D124, &R3_92, &S3_92),
];

pub(crate) const RIPEMD128_LEFT: [Round; 4] = [
    round(f1, 0, &R1, &S1),
    round(f2, 0x5A82_7999, &R2, &S2),
    round(f3, 0x6ED9_EBA1, &R3, &S3),
    round(f4, 0x8F1B_BCDC, &R4, &S4),
];
pub(crate) const RIPEMD128_RIGHT: [Round; 4] = [
    round(f4, 0x50A2_8BE6, &RR1, &SS1),
    round(f3, 0x5C4D_D124, &RR2, &SS2),
    round(f2, 0x6D70_3EF3, &RR3, &SS3),
    round(f1, 0, &RR4, &SS4),
];

pub(crate) const RIPEMD160_LEFT: [Round; 5] = [
    round(f1, 0, &R1, &S1),
    round(f2, 0x5A82_7999, &R2, &S2),
    round(f3, 0x6ED9_EBA1, &R3, &S3),
    round(f4, 0x8F1B_BCDC, &R4, &S4),
    round(f5, 0xA953_FD4E, &R5, &S5),
];
pub(crate) const RIPEMD160_RIGHT: [Round; 5] = [
    round(f5, 0x50A2_8BE6, &RR1, &SS1),
    round(f4, 0x5C4D_D124, &RR2, &SS2),
    round(f3, 0x6D70_3EF3, &RR3, &SS3),
    round(f2, 0x7A6D_76E9, &RR4, &SS4),
    round(f1, 0, &RR5, &SS5),
];
