use alloc::{string::String, vec::Vec};
use log::trace;

use crate::{
    alphabet::{Alphabet, BASE32, BASE32_HEX, BASE64, BASE64_URL},
    Builder, Context, DecodeError,
};

/// Default pad symbol.
pub const PAD: u8 = b'=';

/// Line separator used when wrapping is enabled and none was configured.
pub const CRLF: &[u8] = b"\r\n";

/// Line length of MIME (RFC 2045) Base64.
pub const MIME_LINE_LENGTH: usize = 76;

/// How [`BaseNCodec::decode`] treats malformed input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Reject invalid symbols, impossible final groups, non-zero padding
    /// bits and symbols after the pad.
    #[default]
    Strict,
    /// Skip invalid symbols and decode whatever whole bytes remain.
    Lenient,
}

/// Streaming Base-N encoder and decoder.
///
/// The codec itself is immutable configuration; all progress lives in the
/// [`Context`] passed to each call, so one codec can serve any number of
/// independent operations.
///
/// ```
/// use basen::{BaseNCodec, Context};
///
/// let codec = BaseNCodec::base32();
/// let mut ctx = Context::new();
/// codec.encode(b"foo", &mut ctx);
/// codec.encode(b"bar", &mut ctx);
/// codec.finish_encode(&mut ctx);
/// assert_eq!(ctx.take_output(), b"MZXW6YTBOI======");
/// ```
#[derive(Clone, Debug)]
pub struct BaseNCodec {
    pub(crate) alphabet: &'static Alphabet,
    pub(crate) pad: u8,
    pub(crate) padding: bool,
    pub(crate) line_length: usize,
    pub(crate) line_separator: Vec<u8>,
    pub(crate) policy: DecodePolicy,
}

impl BaseNCodec {
    pub(crate) fn unwrapped(alphabet: &'static Alphabet) -> Self {
        Self {
            alphabet,
            pad: PAD,
            padding: true,
            line_length: 0,
            line_separator: Vec::new(),
            policy: DecodePolicy::Strict,
        }
    }

    /// Start configuring a codec over `alphabet`.
    pub fn builder(alphabet: &'static Alphabet) -> Builder {
        Builder::new(alphabet)
    }

    /// Padded RFC 4648 Base32 without line wrapping.
    pub fn base32() -> Self {
        Self::unwrapped(&BASE32)
    }

    /// Padded RFC 4648 Base32 with the extended hex alphabet.
    pub fn base32_hex() -> Self {
        Self::unwrapped(&BASE32_HEX)
    }

    /// Padded RFC 4648 Base64 without line wrapping.
    pub fn base64() -> Self {
        Self::unwrapped(&BASE64)
    }

    /// Padded URL and filename safe Base64.
    pub fn base64_url() -> Self {
        Self::unwrapped(&BASE64_URL)
    }

    /// Base64 wrapped at 76 columns with CRLF separators.
    pub fn base64_mime() -> Self {
        Self {
            line_length: MIME_LINE_LENGTH,
            line_separator: CRLF.to_vec(),
            ..Self::unwrapped(&BASE64)
        }
    }

    /// Alphabet in use.
    pub fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    /// Effective line length, 0 when output is not wrapped.
    pub fn line_length(&self) -> usize {
        self.line_length
    }

    /// Decode policy in use.
    pub fn decode_policy(&self) -> DecodePolicy {
        self.policy
    }

    /// Upper bound of the encoded size of `len` bytes.
    pub fn encoded_len(&self, len: usize) -> usize {
        let a = self.alphabet;
        let symbols = len.div_ceil(a.bytes_per_block()) * a.symbols_per_block();
        match self.line_length {
            0 => symbols,
            l => symbols + symbols.div_ceil(l) * self.line_separator.len(),
        }
    }

    fn push_symbols(&self, ctx: &mut Context, value: u64, count: usize) {
        let bits = self.alphabet.bits_per_symbol() as usize;
        for i in (0..count).rev() {
            ctx.buffer.push(self.alphabet.symbol(value >> (i * bits)));
        }
    }

    /// Encode `input`, buffering any partial group in `ctx`.
    ///
    /// Ignored once `ctx` has reached end of input.
    pub fn encode(&self, input: &[u8], ctx: &mut Context) {
        if ctx.eof {
            trace!("{}: encode after end of input ignored", self.alphabet.name());
            return;
        }
        let group = self.alphabet.symbols_per_block();
        for &b in input {
            ctx.work = (ctx.work << 8) | u64::from(b);
            ctx.modulus += 1;
            if ctx.modulus == self.alphabet.bytes_per_block() {
                self.push_symbols(ctx, ctx.work, group);
                ctx.work = 0;
                ctx.modulus = 0;
                ctx.line_pos += group;
                if self.line_length > 0 && ctx.line_pos >= self.line_length {
                    ctx.buffer.extend_from_slice(&self.line_separator);
                    ctx.line_pos = 0;
                }
            }
        }
        ctx.position += input.len() as u64;
    }

    /// Signal end of input: flush the partial group with padding and close
    /// the last line.
    pub fn finish_encode(&self, ctx: &mut Context) {
        if ctx.eof {
            return;
        }
        ctx.eof = true;
        if ctx.modulus == 0 && self.line_length == 0 {
            return;
        }

        let start = ctx.buffer.len();
        if ctx.modulus > 0 {
            let bits = self.alphabet.bits_per_symbol() as usize;
            let data_bits = 8 * ctx.modulus;
            let symbols = data_bits.div_ceil(bits);
            self.push_symbols(ctx, ctx.work << (symbols * bits - data_bits), symbols);
            if self.padding {
                let pads = self.alphabet.symbols_per_block() - symbols;
                ctx.buffer.extend(core::iter::repeat(self.pad).take(pads));
            }
            ctx.work = 0;
            ctx.modulus = 0;
        }
        ctx.line_pos += ctx.buffer.len() - start;

        if self.line_length > 0 && ctx.line_pos > 0 {
            ctx.buffer.extend_from_slice(&self.line_separator);
            ctx.line_pos = 0;
        }
    }

    /// Decode `input`, buffering any partial group in `ctx`.
    ///
    /// Whitespace is skipped. The pad symbol ends the input: the partial
    /// group is flushed and later input is ignored.
    pub fn decode(&self, input: &[u8], ctx: &mut Context) -> Result<(), DecodeError> {
        let base = ctx.position;
        ctx.position += input.len() as u64;
        if ctx.eof {
            return self.check_trailing(input, base);
        }

        let bits = self.alphabet.bits_per_symbol();
        for (i, &b) in input.iter().enumerate() {
            if b == self.pad {
                ctx.eof = true;
                self.check_trailing(&input[i + 1..], base + i as u64 + 1)?;
                break;
            }
            match self.alphabet.value(b) {
                Some(v) => {
                    ctx.work = (ctx.work << bits) | u64::from(v);
                    ctx.modulus += 1;
                    if ctx.modulus == self.alphabet.symbols_per_block() {
                        push_bytes(ctx, ctx.work, self.alphabet.bytes_per_block());
                        ctx.work = 0;
                        ctx.modulus = 0;
                    }
                }
                None if b.is_ascii_whitespace() => {}
                None => match self.policy {
                    DecodePolicy::Strict => {
                        return Err(DecodeError::InvalidSymbol {
                            symbol: b,
                            offset: base + i as u64,
                        })
                    }
                    DecodePolicy::Lenient => {
                        trace!("{}: skipping byte {:#04x}", self.alphabet.name(), b)
                    }
                },
            }
        }

        if ctx.eof {
            self.flush_partial(ctx)?;
        }
        Ok(())
    }

    /// Signal end of input and decode the final partial group.
    pub fn finish_decode(&self, ctx: &mut Context) -> Result<(), DecodeError> {
        if ctx.eof {
            return Ok(());
        }
        ctx.eof = true;
        self.flush_partial(ctx)
    }

    fn check_trailing(&self, rest: &[u8], base: u64) -> Result<(), DecodeError> {
        if self.policy == DecodePolicy::Lenient {
            return Ok(());
        }
        match rest
            .iter()
            .position(|&b| b != self.pad && !b.is_ascii_whitespace())
        {
            Some(i) => Err(DecodeError::TrailingData {
                offset: base + i as u64,
            }),
            None => Ok(()),
        }
    }

    fn flush_partial(&self, ctx: &mut Context) -> Result<(), DecodeError> {
        let symbols = ctx.modulus;
        if symbols == 0 {
            return Ok(());
        }
        let bits = self.alphabet.bits_per_symbol() as usize;
        let data_bits = symbols * bits;
        let bytes = data_bits / 8;
        let extra = data_bits % 8;
        let work = ctx.work;
        ctx.work = 0;
        ctx.modulus = 0;

        if self.policy == DecodePolicy::Strict {
            // an encoder emits ceil(8n / bits) symbols for n bytes
            if bytes == 0 || (8 * bytes).div_ceil(bits) != symbols {
                return Err(DecodeError::TruncatedGroup { symbols });
            }
            if work & ((1 << extra) - 1) != 0 {
                return Err(DecodeError::NonCanonicalTrailingBits);
            }
        }
        push_bytes(ctx, work >> extra, bytes);
        Ok(())
    }

    /// Encode `data` in one go.
    pub fn encode_to_vec(&self, data: &[u8]) -> Vec<u8> {
        let mut ctx = Context {
            buffer: Vec::with_capacity(self.encoded_len(data.len())),
            ..Context::default()
        };
        self.encode(data, &mut ctx);
        self.finish_encode(&mut ctx);
        ctx.take_output()
    }

    /// Encode `data` in one go into a string.
    pub fn encode_to_string(&self, data: &[u8]) -> String {
        // symbols, pad and separators are ASCII
        self.encode_to_vec(data).into_iter().map(char::from).collect()
    }

    /// Decode `data` in one go.
    pub fn decode_to_vec(&self, data: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let mut ctx = Context::new();
        self.decode(data, &mut ctx)?;
        self.finish_decode(&mut ctx)?;
        Ok(ctx.take_output())
    }
}

fn push_bytes(ctx: &mut Context, value: u64, count: usize) {
    for i in (0..count).rev() {
        ctx.buffer.push((value >> (8 * i)) as u8);
    }
}
