use std::{
    io::{self, Read},
    vec,
    vec::Vec,
};

use crate::{BaseNCodec, Context};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Encode,
    Decode,
}

/// [`Read`] adapter that encodes or decodes an underlying reader on the fly.
///
/// Decode errors surface as [`io::ErrorKind::InvalidData`] wrapping the
/// [`DecodeError`](crate::DecodeError).
#[derive(Debug)]
pub struct CodecReader<R> {
    inner: R,
    codec: BaseNCodec,
    ctx: Context,
    direction: Direction,
    chunk: Vec<u8>,
}

const CHUNK_LEN: usize = 8 * 1024;

impl<R: Read> CodecReader<R> {
    fn new(inner: R, codec: BaseNCodec, direction: Direction) -> Self {
        Self {
            inner,
            codec,
            ctx: Context::new(),
            direction,
            chunk: vec![0; CHUNK_LEN],
        }
    }

    /// Reads the encoded form of `inner`.
    pub fn encoder(inner: R, codec: BaseNCodec) -> Self {
        Self::new(inner, codec, Direction::Encode)
    }

    /// Reads the decoded form of `inner`.
    pub fn decoder(inner: R, codec: BaseNCodec) -> Self {
        Self::new(inner, codec, Direction::Decode)
    }

    /// Unwrap the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill(&mut self) -> io::Result<()> {
        let n = self.inner.read(&mut self.chunk)?;
        let input = &self.chunk[..n];
        match (self.direction, n) {
            (Direction::Encode, 0) => self.codec.finish_encode(&mut self.ctx),
            (Direction::Encode, _) => self.codec.encode(input, &mut self.ctx),
            (Direction::Decode, 0) => self
                .codec
                .finish_decode(&mut self.ctx)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
            (Direction::Decode, _) => self
                .codec
                .decode(input, &mut self.ctx)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
        }
        Ok(())
    }
}

impl<R: Read> Read for CodecReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while !self.ctx.has_data() && !self.ctx.is_eof() {
            self.fill()?;
        }
        Ok(self.ctx.read_results(buf))
    }
}
