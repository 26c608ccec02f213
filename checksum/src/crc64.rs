use crate::{table::crc64_table_reflected, Checksum};

const TABLE: [u64; 256] = crc64_table_reflected(0x42F0_E1EB_A9EA_3693);

/// CRC-64 over the ECMA-182 polynomial in its reflected form, as used by
/// XZ: all-ones init and final complement.
///
/// The register survives across `update` calls, so a message fed in pieces
/// checksums the same as when fed at once.
#[derive(Clone, Copy, Debug)]
pub struct Crc64 {
    crc: u64,
}

impl Default for Crc64 {
    fn default() -> Self {
        Self { crc: !0 }
    }
}

impl Checksum for Crc64 {
    const OUTPUT_SIZE: usize = 8;
    const NAME: &'static str = "CRC64";
    type Output = u64;

    fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn update(&mut self, data: &[u8]) {
        let mut crc = self.crc;
        for &b in data {
            crc = (crc >> 8) ^ TABLE[((crc as u8) ^ b) as usize];
        }
        self.crc = crc;
    }

    fn finalize(&self) -> u64 {
        !self.crc
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
