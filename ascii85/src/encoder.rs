use alloc::vec::Vec;

use crate::{digit_value, END, START};

/// Streaming Ascii85 encoder.
///
/// Output is framed in `<~` … `~>`. Input may be fed in any number of
/// chunks; [`finish`](Encoder::finish) flushes the final partial group and
/// writes the closing delimiter.
///
/// ```
/// let mut out = Vec::new();
/// let mut encoder = ascii85::Encoder::new();
/// encoder.encode(b"hel", &mut out);
/// encoder.encode(b"lo", &mut out);
/// encoder.finish(&mut out);
/// assert_eq!(out, b"<~BOu!rDZ~>");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    tuple: u32,
    count: usize,
    width: usize,
    column: usize,
    fold_spaces: bool,
    started: bool,
    finished: bool,
}

impl Encoder {
    /// Encoder with `z` abbreviation only and no line wrapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Break lines so none is longer than `width` bytes. 0 disables
    /// wrapping. Delimiters are never split.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Abbreviate groups of four spaces as `y`.
    pub fn with_space_abbreviation(mut self, enabled: bool) -> Self {
        self.fold_spaces = enabled;
        self
    }

    fn emit(&mut self, token: &[u8], out: &mut Vec<u8>) {
        if self.width > 0 && self.column > 0 && self.column + token.len() > self.width {
            out.push(b'\n');
            self.column = 0;
        }
        out.extend_from_slice(token);
        self.column += token.len();
    }

    fn start(&mut self, out: &mut Vec<u8>) {
        if !self.started {
            self.started = true;
            self.emit(START, out);
        }
    }

    fn emit_tuple(&mut self, digits: usize, out: &mut Vec<u8>) {
        let mut value = self.tuple;
        let mut group = [0u8; 5];
        for d in group.iter_mut().rev() {
            *d = digit_value(value % 85);
            value /= 85;
        }
        for &d in &group[..digits] {
            self.emit(&[d], out);
        }
    }

    /// Encode `input`, appending to `out`. Ignored after `finish`.
    pub fn encode(&mut self, input: &[u8], out: &mut Vec<u8>) {
        if self.finished {
            return;
        }
        self.start(out);
        for &b in input {
            self.tuple |= u32::from(b) << (24 - 8 * self.count);
            self.count += 1;
            if self.count == 4 {
                match self.tuple {
                    0 => self.emit(b"z", out),
                    0x2020_2020 if self.fold_spaces => self.emit(b"y", out),
                    _ => self.emit_tuple(5, out),
                }
                self.tuple = 0;
                self.count = 0;
            }
        }
    }

    /// Flush the partial group and close the section.
    pub fn finish(&mut self, out: &mut Vec<u8>) {
        if self.finished {
            return;
        }
        self.start(out);
        if self.count > 0 {
            self.emit_tuple(self.count + 1, out);
            self.tuple = 0;
            self.count = 0;
        }
        self.emit(END, out);
        self.finished = true;
    }
}
