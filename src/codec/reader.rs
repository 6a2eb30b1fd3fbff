//! Bounds-checked little-endian reads over a byte slice.

use crate::errors::FontError;

/// Cursor over an in-memory STRK buffer.
///
/// Every read names what it was reading so a short buffer reports where
/// the data ran out.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Reader positioned at `offset`. An offset past the end is allowed;
    /// the first read from it fails.
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self { data, pos: offset }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Fail unless at least `needed` bytes are left.
    pub fn ensure(&self, needed: usize, what: &'static str) -> Result<(), FontError> {
        if self.remaining() < needed {
            return Err(FontError::Truncated {
                what,
                offset: self.pos,
                needed,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    pub fn take(&mut self, len: usize, what: &'static str) -> Result<&'a [u8], FontError> {
        self.ensure(len, what)?;
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self, what: &'static str) -> Result<[u8; N], FontError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, what)?);
        Ok(out)
    }

    pub fn read_u32(&mut self, what: &'static str) -> Result<u32, FontError> {
        self.read_array(what).map(u32::from_le_bytes)
    }

    pub fn read_f32(&mut self, what: &'static str) -> Result<f32, FontError> {
        self.read_array(what).map(f32::from_le_bytes)
    }
}
