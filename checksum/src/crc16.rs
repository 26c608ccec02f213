use crate::{table::crc16_table_reflected, Checksum};

const TABLE: [u16; 256] = crc16_table_reflected(0x8005);

/// CRC-16/ARC: polynomial `0x8005` reflected, zero init, no final XOR.
#[derive(Clone, Copy, Debug, Default)]
pub struct Crc16 {
    crc: u16,
}

impl Checksum for Crc16 {
    const OUTPUT_SIZE: usize = 2;
    const NAME: &'static str = "CRC16";
    type Output = u16;

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

    fn finalize(&self) -> u16 {
        self.crc
    }

    fn reset(&mut self) {
        self.crc = 0;
    }
}
