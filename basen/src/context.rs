use alloc::vec::Vec;

/// Phase of an encode or decode operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Input is still accepted.
    Accumulating,
    /// End of input was signalled; buffered output remains to be read.
    FlushPending,
    /// End of input was signalled and all output was read.
    Done,
}

/// Resumable state of one encode or decode operation.
///
/// Holds the bits of the current partial group, the output produced so far
/// and the end-of-input latch. A context belongs to exactly one operation;
/// create a new one (or call [`Context::clear`]) for the next.
#[derive(Clone, Debug, Default)]
pub struct Context {
    pub(crate) work: u64,
    pub(crate) modulus: usize,
    pub(crate) line_pos: usize,
    pub(crate) eof: bool,
    pub(crate) position: u64,
    pub(crate) buffer: Vec<u8>,
    pub(crate) read_pos: usize,
}

impl Context {
    /// Fresh context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Units accumulated towards the current group: bytes when encoding,
    /// symbols when decoding.
    pub fn modulus(&self) -> usize {
        self.modulus
    }

    /// Whether end of input was reached.
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match (self.eof, self.has_data()) {
            (false, _) => Phase::Accumulating,
            (true, true) => Phase::FlushPending,
            (true, false) => Phase::Done,
        }
    }

    /// Whether unread output is buffered.
    pub fn has_data(&self) -> bool {
        self.read_pos < self.buffer.len()
    }

    /// Number of unread output bytes.
    pub fn available(&self) -> usize {
        self.buffer.len() - self.read_pos
    }

    /// Unread output without consuming it.
    pub fn output(&self) -> &[u8] {
        &self.buffer[self.read_pos..]
    }

    /// Move buffered output into `out`, returning the number of bytes copied.
    pub fn read_results(&mut self, out: &mut [u8]) -> usize {
        let n = self.available().min(out.len());
        out[..n].copy_from_slice(&self.buffer[self.read_pos..self.read_pos + n]);
        self.read_pos += n;
        if !self.has_data() {
            self.buffer.clear();
            self.read_pos = 0;
        }
        n
    }

    /// Take all buffered output.
    pub fn take_output(&mut self) -> Vec<u8> {
        let mut out = core::mem::take(&mut self.buffer);
        out.drain(..self.read_pos);
        self.read_pos = 0;
        out
    }

    /// Return to the initial state, keeping the output allocation.
    pub fn clear(&mut self) {
        let mut buffer = core::mem::take(&mut self.buffer);
        buffer.clear();
        *self = Self {
            buffer,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_results_drains_in_pieces() {
        let mut ctx = Context::new();
        ctx.buffer.extend_from_slice(b"abcde");
        let mut out = [0u8; 2];
        assert_eq!(ctx.read_results(&mut out), 2);
        assert_eq!(&out, b"ab");
        assert_eq!(ctx.available(), 3);
        assert_eq!(ctx.take_output(), b"cde");
        assert!(!ctx.has_data());
    }

    #[test]
    fn phases() {
        let mut ctx = Context::new();
        assert_eq!(ctx.phase(), Phase::Accumulating);
        ctx.eof = true;
        ctx.buffer.push(b'x');
        assert_eq!(ctx.phase(), Phase::FlushPending);
        let mut out = [0u8; 4];
        ctx.read_results(&mut out);
        assert_eq!(ctx.phase(), Phase::Done);
        ctx.clear();
        assert_eq!(ctx.phase(), Phase::Accumulating);
    }
}
