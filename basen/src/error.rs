/// Malformed encoded input.
///
/// Only produced under [`DecodePolicy::Strict`](crate::DecodePolicy::Strict).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A byte that is neither an alphabet symbol, the pad symbol nor
    /// whitespace.
    #[error("invalid symbol {symbol:#04x} at offset {offset}")]
    InvalidSymbol {
        /// Offending byte.
        symbol: u8,
        /// Offset of the byte in the encoded stream.
        offset: u64,
    },

    /// The final group has a symbol count no encoder produces.
    #[error("{symbols} trailing symbols do not encode a whole number of bytes")]
    TruncatedGroup {
        /// Symbols in the final group.
        symbols: usize,
    },

    /// The bits left over after the last decoded byte are not zero.
    #[error("non-zero padding bits in the final group")]
    NonCanonicalTrailingBits,

    /// Alphabet symbols after the pad symbol.
    #[error("unexpected symbol after padding at offset {offset}")]
    TrailingData {
        /// Offset of the first unexpected byte.
        offset: u64,
    },
}

/// Rejected codec configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The pad symbol is an alphabet symbol, whitespace or not ASCII.
    #[error("pad {0:#04x} must be ASCII and neither an alphabet symbol nor whitespace")]
    InvalidPad(u8),

    /// The line separator is empty or not ASCII.
    #[error("line separator must be non-empty ASCII when lines are wrapped")]
    InvalidSeparator,

    /// The line separator contains alphabet or pad symbols.
    #[error("line separator must not contain alphabet or pad symbols")]
    SeparatorInAlphabet,
}
