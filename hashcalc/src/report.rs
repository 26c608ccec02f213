use core::fmt;

use checksum::{Adler32, Checksum, Crc16, Crc32, Crc64, Crc8};
use log::{debug, trace};
use md4::digest::Digest;

use crate::{Config, Family, Result};

/// One line of a [`Report`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Display label.
    pub name: &'static str,
    /// Rendered value.
    pub value: String,
}

/// Ordered checksums, digests and encodings of one input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<Entry>,
}

struct Builder<'a> {
    data: &'a [u8],
    config: &'a Config,
    entries: Vec<Entry>,
}

impl Builder<'_> {
    fn push(&mut self, family: Family, name: &'static str, render: impl FnOnce(&[u8]) -> String) {
        if !self.config.includes(family) {
            return;
        }
        let value = render(self.data);
        trace!("{name}: {value}");
        self.entries.push(Entry { name, value });
    }

    fn hex(&self, bytes: &[u8]) -> String {
        if self.config.lowercase_hex {
            hex::encode(bytes)
        } else {
            hex::encode_upper(bytes)
        }
    }

    fn checksum<C: Checksum>(&mut self) {
        if !self.config.includes(Family::Checksum) {
            return;
        }
        let value = format!("{:0width$X}", C::checksum(self.data), width = 2 * C::OUTPUT_SIZE);
        let value = if self.config.lowercase_hex {
            value.to_ascii_lowercase()
        } else {
            value
        };
        self.push(Family::Checksum, C::NAME, |_| value);
    }

    fn digest<D: Digest>(&mut self, family: Family, name: &'static str) {
        if self.config.includes(family) {
            let value = self.hex(&D::digest(self.data));
            self.push(family, name, |_| value);
        }
    }
}

fn ascii(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

impl Report {
    /// Compute every entry enabled by `config` over `data`.
    ///
    /// Each entry uses a fresh engine, so generating twice over the same
    /// input yields identical reports.
    pub fn generate(data: &[u8], config: &Config) -> Result<Self> {
        debug!("generating report over {} bytes", data.len());
        let base32 = basen::BaseNCodec::builder(&basen::alphabet::BASE32)
            .line_length(config.base32_line_length)
            .line_separator("\n")
            .build()?;

        let mut b = Builder {
            data,
            config,
            entries: Vec::new(),
        };

        b.checksum::<Crc8>();
        b.checksum::<Crc16>();
        b.checksum::<Crc32>();
        b.checksum::<Adler32>();
        b.digest::<xyz::Xyz>(Family::Checksum, "XYZ");
        b.checksum::<Crc64>();

        b.digest::<md2::Md2>(Family::Md, "MD2");
        b.digest::<md4::Md4>(Family::Md, "MD4");
        b.digest::<md5::Md5>(Family::Md, "MD5");

        b.digest::<ripemd::Ripemd>(Family::Ripemd, "RIPEMD");
        b.digest::<ripemd::Ripemd128>(Family::Ripemd, "RIPEMD128");
        b.digest::<ripemd::Ripemd160>(Family::Ripemd, "RIPEMD160");

        b.digest::<sha0::Sha0>(Family::Sha, "SHA-0");
        b.digest::<sha1::Sha1>(Family::Sha, "SHA-1/SHA160");
        b.digest::<tiger::Tiger>(Family::Tiger, "Tiger");
        b.digest::<tiger::Tiger2>(Family::Tiger, "Tiger2");
        b.digest::<sha2::Sha224>(Family::Sha, "SHA224");
        b.digest::<sha2::Sha256>(Family::Sha, "SHA256");
        b.digest::<sha2::Sha384>(Family::Sha, "SHA384");
        b.digest::<sha2::Sha512>(Family::Sha, "SHA512");

        b.digest::<whirlpool::Whirlpool0>(Family::Whirlpool, "Whirlpool 2000");
        b.digest::<whirlpool::WhirlpoolT>(Family::Whirlpool, "Whirlpool 2001");
        b.digest::<whirlpool::Whirlpool>(Family::Whirlpool, "Whirlpool 2003");

        b.push(Family::Base16, "Base16 (Uppercase)", |d| hex::encode_upper(d));
        b.push(Family::Base16, "Base16 (Lowercase)", |d| hex::encode(d));

        b.push(Family::Base32, "Base32 (Uppercase)", |d| {
            base32.encode_to_string(d)
        });
        b.push(Family::Base32, "Base32 (Lowercase)", |d| {
            base32.encode_to_string(d).to_ascii_lowercase()
        });

        b.push(Family::Base64, "Base64", |d| {
            basen::BaseNCodec::base64().encode_to_string(d)
        });
        b.push(Family::Base64, "Base64 (URL/filename safe)", |d| {
            basen::BaseNCodec::base64_url().encode_to_string(d)
        });
        b.push(Family::Base64, "Base64 (MIME)", |d| {
            basen::BaseNCodec::base64_mime()
                .encode_to_string(d)
                .replace("\r\n", "")
        });

        if config.includes(Family::Base85) {
            let encoder = ascii85::Encoder::new().with_width(config.ascii85_width);
            let framed = ascii85::encode_with(encoder, data);
            let bare = ascii(ascii85::remove_identifiers(&framed));
            b.push(Family::Base85, "Base85 (With Arrows)", |_| ascii(&framed));
            b.push(Family::Base85, "Base85 (Without Arrows)", |_| bare);
        }

        Ok(Self { entries: b.entries })
    }

    /// Entries in report order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Value of the entry labelled `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for Entry { name, value } in &self.entries {
            writeln!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}
