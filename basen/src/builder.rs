use alloc::vec::Vec;

use crate::{codec::CRLF, Alphabet, BaseNCodec, ConfigError, DecodePolicy};

/// Configures a [`BaseNCodec`].
///
/// ```
/// use basen::{alphabet::BASE32, BaseNCodec, DecodePolicy};
///
/// let codec = BaseNCodec::builder(&BASE32)
///     .line_length(8)
///     .decode_policy(DecodePolicy::Lenient)
///     .build()?;
/// assert_eq!(codec.encode_to_vec(b"foobar"), b"MZXW6YTB\r\nOI======\r\n");
/// # Ok::<(), basen::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    codec: BaseNCodec,
    separator: Option<Vec<u8>>,
}

impl Builder {
    pub(crate) fn new(alphabet: &'static Alphabet) -> Self {
        Self {
            codec: BaseNCodec::unwrapped(alphabet),
            separator: None,
        }
    }

    /// Pad symbol, `=` by default.
    pub fn pad(mut self, pad: u8) -> Self {
        self.codec.pad = pad;
        self
    }

    /// Whether the encoder pads the final group. The decoder accepts both.
    pub fn padding(mut self, padding: bool) -> Self {
        self.codec.padding = padding;
        self
    }

    /// Wrap encoded output after this many symbols, rounded down to a
    /// multiple of the group size. 0 disables wrapping.
    pub fn line_length(mut self, line_length: usize) -> Self {
        self.codec.line_length = line_length;
        self
    }

    /// Separator inserted between lines, CRLF by default.
    pub fn line_separator(mut self, separator: impl Into<Vec<u8>>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// How malformed input is decoded.
    pub fn decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.codec.policy = policy;
        self
    }

    /// Validate and build the codec.
    pub fn build(self) -> Result<BaseNCodec, ConfigError> {
        let Builder {
            mut codec,
            separator,
        } = self;
        let alphabet = codec.alphabet;

        if !codec.pad.is_ascii() || codec.pad.is_ascii_whitespace() || alphabet.contains(codec.pad)
        {
            return Err(ConfigError::InvalidPad(codec.pad));
        }

        let group = alphabet.symbols_per_block();
        codec.line_length = codec.line_length / group * group;
        if codec.line_length > 0 {
            let separator = separator.unwrap_or_else(|| CRLF.to_vec());
            if separator.is_empty() || !separator.is_ascii() {
                return Err(ConfigError::InvalidSeparator);
            }
            if separator
                .iter()
                .any(|&b| b == codec.pad || alphabet.contains(b))
            {
                return Err(ConfigError::SeparatorInAlphabet);
            }
            codec.line_separator = separator;
        }
        Ok(codec)
    }
}
