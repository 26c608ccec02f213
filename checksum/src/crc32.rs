use crate::{table::crc32_table_reflected, Checksum};

const TABLE: [u32; 256] = crc32_table_reflected(0x04C1_1DB7);

/// CRC-32 as used by zlib, PNG and Ethernet.
#[derive(Clone, Copy, Debug)]
pub struct Crc32 {
    crc: u32,
}

impl Default for Crc32 {
    fn default() -> Self {
        Self { crc: !0 }
    }
}

impl Checksum for Crc32 {
    const OUTPUT_SIZE: usize = 4;
    const NAME: &'static str = "CRC32";
    type Output = u32;

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

    fn finalize(&self) -> u32 {
        !self.crc
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
