use alloc::vec::Vec;
use log::trace;

use crate::Error;

const POW85: [u64; 5] = [85 * 85 * 85 * 85, 85 * 85 * 85, 85 * 85, 85, 1];

/// Position of the decoder relative to `<~` … `~>` sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Outside any section.
    NotDecoding,
    /// Saw `<` outside a section.
    MaybeStarting,
    /// Inside a section.
    Decoding,
    /// Saw `~` inside a section.
    MaybeStopping,
}

/// Byte-at-a-time Ascii85 decoder.
///
/// Bytes outside `<~` … `~>` sections are discarded, or copied verbatim
/// when constructed with [`Decoder::preserving`]. The whole state is
/// `Copy` so a reader can snapshot and restore it.
#[derive(Clone, Copy, Debug)]
pub struct Decoder {
    state: State,
    tuple: u64,
    count: usize,
    preserve_unencoded: bool,
    offset: u64,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b'\0' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | b' ')
}

impl Decoder {
    /// Decoder that discards bytes outside sections.
    pub fn new() -> Self {
        Self {
            state: State::NotDecoding,
            tuple: 0,
            count: 0,
            preserve_unencoded: false,
            offset: 0,
        }
    }

    /// Decoder that copies bytes outside sections to the output.
    pub fn preserving() -> Self {
        Self {
            preserve_unencoded: true,
            ..Self::new()
        }
    }

    /// Current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Digits accumulated in the current group.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Process one input byte, appending any output to `out`.
    pub fn push(&mut self, byte: u8, out: &mut Vec<u8>) -> Result<(), Error> {
        let offset = self.offset;
        self.offset += 1;
        match self.state {
            State::NotDecoding => self.outside(byte, out),
            State::MaybeStarting => {
                if byte == b'~' {
                    trace!("ascii85 section starts at offset {}", offset - 1);
                    self.state = State::Decoding;
                } else {
                    self.state = State::NotDecoding;
                    if self.preserve_unencoded {
                        out.push(b'<');
                    }
                    self.outside(byte, out);
                }
            }
            State::MaybeStopping => {
                if byte != b'>' {
                    return Err(Error::MissingTerminator { offset });
                }
                self.close(offset, out)?;
                trace!("ascii85 section ends at offset {}", offset);
                self.state = State::NotDecoding;
            }
            State::Decoding => match byte {
                b if is_whitespace(b) => {}
                b'~' => self.state = State::MaybeStopping,
                b'z' | b'y' if self.count == 0 => {
                    let fill = if byte == b'z' { 0 } else { b' ' };
                    out.extend_from_slice(&[fill; 4]);
                }
                b'!'..=b'u' => {
                    self.tuple += u64::from(byte - b'!') * POW85[self.count];
                    self.count += 1;
                    if self.count == 5 {
                        self.emit(4, offset, out)?;
                    }
                }
                _ => return Err(Error::InvalidDigit { byte, offset }),
            },
        }
        Ok(())
    }

    /// Signal end of input.
    pub fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), Error> {
        match self.state {
            State::NotDecoding => Ok(()),
            State::MaybeStarting => {
                if self.preserve_unencoded {
                    out.push(b'<');
                }
                self.state = State::NotDecoding;
                Ok(())
            }
            State::Decoding | State::MaybeStopping => Err(Error::UnterminatedSection {
                offset: self.offset,
            }),
        }
    }

    fn outside(&mut self, byte: u8, out: &mut Vec<u8>) {
        if byte == b'<' {
            self.state = State::MaybeStarting;
        } else if self.preserve_unencoded {
            out.push(byte);
        }
    }

    fn close(&mut self, offset: u64, out: &mut Vec<u8>) -> Result<(), Error> {
        match self.count {
            0 => Ok(()),
            1 => {
                self.count = 0;
                self.tuple = 0;
                Err(Error::TruncatedGroup { offset })
            }
            k => {
                // missing digits count as 'u'
                self.tuple += POW85[k..].iter().map(|p| 84 * p).sum::<u64>();
                self.emit(k - 1, offset, out)
            }
        }
    }

    fn emit(&mut self, bytes: usize, offset: u64, out: &mut Vec<u8>) -> Result<(), Error> {
        let value = self.tuple;
        self.tuple = 0;
        self.count = 0;
        let value = u32::try_from(value).map_err(|_| Error::TupleOverflow { offset })?;
        out.extend_from_slice(&value.to_be_bytes()[..bytes]);
        Ok(())
    }
}
