/// Malformed Ascii85 input.
///
/// Offsets count bytes of the encoded stream, delimiters included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `~` inside a section not followed by `>`.
    #[error("'~' without '>' at offset {offset}")]
    MissingTerminator {
        /// Offset of the byte following `~`.
        offset: u64,
    },

    /// A byte that is not a digit, or a `z`/`y` shorthand inside a group.
    #[error("invalid byte {byte:#04x} in ascii85 section at offset {offset}")]
    InvalidDigit {
        /// Offending byte.
        byte: u8,
        /// Its offset.
        offset: u64,
    },

    /// A group decodes to a value above `u32::MAX`.
    #[error("ascii85 group ending at offset {offset} overflows 32 bits")]
    TupleOverflow {
        /// Offset of the last digit of the group.
        offset: u64,
    },

    /// Input ended inside a `<~` section.
    #[error("input ended inside ascii85 section at offset {offset}")]
    UnterminatedSection {
        /// Length of the input.
        offset: u64,
    },

    /// A section ends with a single digit, which encodes no byte.
    #[error("single trailing digit before '~>' at offset {offset}")]
    TruncatedGroup {
        /// Offset of the closing `>`.
        offset: u64,
    },
}

impl Error {
    /// Offset the error was detected at.
    pub fn offset(&self) -> u64 {
        match *self {
            Error::MissingTerminator { offset }
            | Error::InvalidDigit { offset, .. }
            | Error::TupleOverflow { offset }
            | Error::UnterminatedSection { offset }
            | Error::TruncatedGroup { offset } => offset,
        }
    }
}
