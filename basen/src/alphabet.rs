//! Symbol tables of the supported encodings.

const INVALID: u8 = 0xFF;

/// Symbol table plus the group geometry it implies.
///
/// A group is the smallest run of bytes that maps onto a whole number of
/// symbols: 5 bytes ↔ 8 symbols for Base32, 3 bytes ↔ 4 symbols for
/// Base64.
#[derive(Debug)]
pub struct Alphabet {
    name: &'static str,
    symbols: &'static [u8],
    decode: [u8; 256],
    bits: u32,
    bytes_per_block: usize,
    symbols_per_block: usize,
}

const fn bits_for(len: usize) -> u32 {
    match len {
        32 => 5,
        64 => 6,
        _ => panic!("alphabet must have 32 or 64 symbols"),
    }
}

impl Alphabet {
    const fn new(name: &'static str, symbols: &'static [u8], fold_case: bool) -> Self {
        let bits = bits_for(symbols.len());
        let mut decode = [INVALID; 256];
        let mut i = 0;
        while i < symbols.len() {
            let s = symbols[i];
            decode[s as usize] = i as u8;
            if fold_case && s.is_ascii_uppercase() {
                decode[s.to_ascii_lowercase() as usize] = i as u8;
            }
            i += 1;
        }
        // lcm(8, bits) bits per group
        let group_bits = if bits == 5 { 40 } else { 24 };
        Self {
            name,
            symbols,
            decode,
            bits,
            bytes_per_block: group_bits / 8,
            symbols_per_block: group_bits / bits as usize,
        }
    }

    /// Name of the encoding.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Bits carried by one symbol.
    pub fn bits_per_symbol(&self) -> u32 {
        self.bits
    }

    /// Raw bytes per group.
    pub fn bytes_per_block(&self) -> usize {
        self.bytes_per_block
    }

    /// Symbols per group.
    pub fn symbols_per_block(&self) -> usize {
        self.symbols_per_block
    }

    /// Symbol for a value below `2^bits`.
    #[inline]
    pub(crate) fn symbol(&self, value: u64) -> u8 {
        self.symbols[(value as usize) & (self.symbols.len() - 1)]
    }

    /// Value of `symbol`, if it belongs to the alphabet.
    #[inline]
    pub fn value(&self, symbol: u8) -> Option<u8> {
        match self.decode[symbol as usize] {
            INVALID => None,
            v => Some(v),
        }
    }

    /// Whether `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: u8) -> bool {
        self.value(symbol).is_some()
    }
}

/// RFC 4648 §6 Base32. Decoding accepts lowercase letters as well.
pub static BASE32: Alphabet = Alphabet::new("Base32", b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567", true);

/// RFC 4648 §7 Base32 with the extended hex alphabet.
pub static BASE32_HEX: Alphabet =
    Alphabet::new("Base32Hex", b"0123456789ABCDEFGHIJKLMNOPQRSTUV", true);

/// RFC 4648 §4 Base64.
pub static BASE64: Alphabet = Alphabet::new(
    "Base64",
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
    false,
);

/// RFC 4648 §5 URL and filename safe Base64.
pub static BASE64_URL: Alphabet = Alphabet::new(
    "Base64Url",
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
    false,
);
