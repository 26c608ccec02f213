use std::{
    io::{self, Read, Seek, SeekFrom},
    vec::Vec,
};

use crate::Decoder;

/// [`Read`] adapter decoding Ascii85 from an underlying reader.
///
/// The source is read one byte at a time; wrap unbuffered sources in a
/// [`BufReader`](std::io::BufReader).
#[derive(Debug)]
pub struct Ascii85Reader<R> {
    inner: R,
    decoder: Decoder,
    pending: Vec<u8>,
    pos: usize,
    done: bool,
    mark: Option<Mark>,
}

#[derive(Clone, Debug)]
struct Mark {
    decoder: Decoder,
    pending: Vec<u8>,
    pos: usize,
    done: bool,
    source: u64,
}

impl<R: Read> Ascii85Reader<R> {
    /// Decode `inner`, discarding bytes outside `<~` … `~>` sections.
    pub fn new(inner: R) -> Self {
        Self::with_decoder(inner, Decoder::new())
    }

    /// Decode `inner`, copying bytes outside sections verbatim.
    pub fn preserving(inner: R) -> Self {
        Self::with_decoder(inner, Decoder::preserving())
    }

    fn with_decoder(inner: R, decoder: Decoder) -> Self {
        Self {
            inner,
            decoder,
            pending: Vec::new(),
            pos: 0,
            done: false,
            mark: None,
        }
    }

    /// Unwrap the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn next_source_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn fill(&mut self) -> io::Result<()> {
        self.pending.clear();
        self.pos = 0;
        while self.pending.is_empty() && !self.done {
            let result = match self.next_source_byte()? {
                Some(b) => self.decoder.push(b, &mut self.pending),
                None => {
                    self.done = true;
                    self.decoder.finish(&mut self.pending)
                }
            };
            result.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        }
        Ok(())
    }
}

impl<R: Read + Seek> Ascii85Reader<R> {
    /// Remember the current position, including the decoder state.
    pub fn mark(&mut self) -> io::Result<()> {
        let source = self.inner.stream_position()?;
        self.mark = Some(Mark {
            decoder: self.decoder,
            pending: self.pending.clone(),
            pos: self.pos,
            done: self.done,
            source,
        });
        Ok(())
    }

    /// Return to the last [`mark`](Self::mark).
    pub fn reset(&mut self) -> io::Result<()> {
        let mark = self
            .mark
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "reset without mark"))?;
        self.inner.seek(SeekFrom::Start(mark.source))?;
        self.decoder = mark.decoder;
        self.pending = mark.pending;
        self.pos = mark.pos;
        self.done = mark.done;
        Ok(())
    }
}

impl<R: Read> Read for Ascii85Reader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.pos == self.pending.len() {
            self.fill()?;
        }
        let n = (self.pending.len() - self.pos).min(buf.len());
        buf[..n].copy_from_slice(&self.pending[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}
