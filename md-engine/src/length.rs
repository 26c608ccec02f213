/// Encoding of the message bit length appended by the final padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthField {
    /// 64-bit little-endian length (MD4, RIPEMD family).
    Le64,
    /// 64-bit big-endian length (SHA-0).
    Be64,
    /// 256-bit big-endian length (Whirlpool).
    Be256,
}

impl LengthField {
    /// Size of the largest length field in bytes.
    pub const MAX_LEN: usize = 32;

    /// Size of this length field in bytes.
    pub const fn size(self) -> usize {
        match self {
            LengthField::Le64 | LengthField::Be64 => 8,
            LengthField::Be256 => 32,
        }
    }

    /// Write `bit_len` into `buf` and return the encoded field.
    ///
    /// 64-bit fields carry the length modulo 2^64.
    pub fn encode(self, bit_len: u128, buf: &mut [u8; Self::MAX_LEN]) -> &[u8] {
        match self {
            LengthField::Le64 => buf[..8].copy_from_slice(&(bit_len as u64).to_le_bytes()),
            LengthField::Be64 => buf[..8].copy_from_slice(&(bit_len as u64).to_be_bytes()),
            LengthField::Be256 => {
                buf[..16].fill(0);
                buf[16..].copy_from_slice(&bit_len.to_be_bytes());
            }
        }
        &buf[..self.size()]
    }
}
