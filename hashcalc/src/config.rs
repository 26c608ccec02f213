/// Report entry groups selectable with `--only`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Family {
    /// CRC8, CRC16, CRC32, Adler-32, XYZ and CRC64.
    Checksum,
    /// MD2, MD4 and MD5.
    Md,
    /// RIPEMD, RIPEMD128 and RIPEMD160.
    Ripemd,
    /// SHA-0, SHA-1 and SHA-2.
    Sha,
    /// Tiger and Tiger2.
    Tiger,
    /// Whirlpool 2000, 2001 and 2003.
    Whirlpool,
    /// Hexadecimal in both cases.
    Base16,
    /// Base32 in both cases.
    Base32,
    /// Standard, URL safe and MIME Base64.
    Base64,
    /// Ascii85 with and without delimiters.
    Base85,
}

/// Options of one report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Families to include. Empty means all.
    pub only: Vec<Family>,
    /// Render checksums and digests in lowercase hex.
    pub lowercase_hex: bool,
    /// Maximum Ascii85 line length, 0 for a single line.
    pub ascii85_width: usize,
    /// Base32 symbols per line, 0 for a single line.
    pub base32_line_length: usize,
}

impl Config {
    /// Whether entries of `family` are reported.
    pub fn includes(&self, family: Family) -> bool {
        self.only.is_empty() || self.only.contains(&family)
    }
}
