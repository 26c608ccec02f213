use crate::Checksum;

const MOD: u32 = 65_521;
// largest n with 255 * n * (n + 1) / 2 + (n + 1) * (MOD - 1) < 2^32
const NMAX: usize = 5_552;

/// Adler-32 as defined in RFC 1950.
#[derive(Clone, Copy, Debug)]
pub struct Adler32 {
    a: u32,
    b: u32,
}

impl Default for Adler32 {
    fn default() -> Self {
        Self { a: 1, b: 0 }
    }
}

impl Checksum for Adler32 {
    const OUTPUT_SIZE: usize = 4;
    const NAME: &'static str = "Adler-32";
    type Output = u32;

    fn new() -> Self {
        Self::default()
    }

    fn update(&mut self, data: &[u8]) {
        let (mut a, mut b) = (self.a, self.b);
        for chunk in data.chunks(NMAX) {
            for &byte in chunk {
                a += u32::from(byte);
                b += a;
            }
            a %= MOD;
            b %= MOD;
        }
        self.a = a;
        self.b = b;
    }

    fn finalize(&self) -> u32 {
        (self.b << 16) | self.a
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
