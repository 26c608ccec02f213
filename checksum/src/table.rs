//! `const fn` generators for the 256-entry lookup tables.
//!
//! Polynomials are given in normal (MSB-first) notation; the reflected
//! generators reverse them before use.

pub(crate) const fn crc8_table(poly: u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x80 != 0 { (crc << 1) ^ poly } else { crc << 1 };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

macro_rules! reflected_table {
    ($name:ident, $ty:ty) => {
        pub(crate) const fn $name(poly: $ty) -> [$ty; 256] {
            let poly = poly.reverse_bits();
            let mut table = [0; 256];
            let mut i = 0;
            while i < 256 {
                let mut crc = i as $ty;
                let mut bit = 0;
                while bit < 8 {
                    crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
                    bit += 1;
                }
                table[i] = crc;
                i += 1;
            }
            table
        }
    };
}

reflected_table!(crc16_table_reflected, u16);
reflected_table!(crc32_table_reflected, u32);
reflected_table!(crc64_table_reflected, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_entries() {
        assert_eq!(crc8_table(0x07)[1], 0x07);
        assert_eq!(crc16_table_reflected(0x8005)[1], 0xC0C1);
        assert_eq!(crc32_table_reflected(0x04C1_1DB7)[1], 0x7707_3096);
        assert_eq!(crc64_table_reflected(0x42F0_E1EB_A9EA_3693)[128], 0xC96C_5795_D787_0F42);
    }
}
