use crate::{table::crc8_table, Checksum};

const TABLE: [u8; 256] = crc8_table(0x07);

/// CRC-8 with polynomial `0x07`, no reflection, zero init and no final XOR.
#[derive(Clone, Copy, Debug, Default)]
pub struct Crc8 {
    crc: u8,
}

impl Checksum for Crc8 {
    const OUTPUT_SIZE: usize = 1;
    const NAME: &'static str = "CRC8";
    type Output = u8;

    fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn update(&mut self, data: &[u8]) {
        let mut crc = self.crc;
        for &b in data {
            crc = TABLE[(crc ^ b) as usize];
        }
        self.crc = crc;
    }

    fn finalize(&self) -> u8 {
        self.crc
    }

    fn reset(&mut self) {
        self.crc = 0;
    }
}
