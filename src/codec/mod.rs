//! The STRK font format
//!
//! All integers are little-endian.
//!
//! | Offset | Field | Type |
//! |---|---|---|
//! | 0 | magic | `b"STRK"` |
//! | 4 | version | u32, always 1 |
//! | 8 | table length in bytes | u32, 12 x letter count |
//! | 12 | table | `{ codepoint: u32, offset: u32, strokes: u32 }` per letter, ascending codepoint |
//! | 12 + table length | data | 6 x f32 per stroke, letters back to back |
//!
//! `offset` is relative to the start of the data section and must be where the
//! previous letter's strokes end. Each stroke record
//! is three points `(x1, y1, x2, y2, x3, y3)`: a quadratic Bézier from the
//! first to the third point with the second as control point. If all three
//! points are equal the record is a dot; if the last two are equal it is a
//! line from the first point to the second.
//!
//! Submodules:
//! - `reader`: bounds-checked slice reads
//! - `encode`: writer; runs [`simplify`] first
//! - `decode`: reader and stroke reclassification

pub mod decode;
pub mod encode;
pub mod reader;

pub use decode::decode;
pub use encode::{encode, encode_to};
pub use reader::ByteReader;

use std::io::Write;
use std::path::Path;

use crate::errors::FontError;
use crate::linearize::linearize;
use crate::types::Letter;

/// One row of the letter table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub codepoint: u32,
    /// Byte offset of the first stroke, relative to the data section
    pub offset: u32,
    /// Number of stroke records
    pub strokes: u32,
}

impl TableEntry {
    pub fn read(reader: &mut ByteReader<'_>) -> Result<Self, FontError> {
        Ok(Self {
            codepoint: reader.read_u32("table entry")?,
            offset: reader.read_u32("table entry")?,
            strokes: reader.read_u32("table entry")?,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.codepoint.to_le_bytes())?;
        writer.write_all(&self.offset.to_le_bytes())?;
        writer.write_all(&self.strokes.to_le_bytes())
    }
}

/// Export pre-pass: drop letters without strokes and linearize the rest.
pub fn simplify(letters: &[Letter]) -> Vec<Letter> {
    letters
        .iter()
        .filter(|letter| !letter.shape.is_empty())
        .map(|letter| Letter {
            codepoint: letter.codepoint,
            shape: linearize(&letter.shape),
        })
        .collect()
}

/// Encode `letters` and write them to `path`, replacing any existing file.
pub fn write_font(path: impl AsRef<Path>, letters: &[Letter]) -> Result<(), FontError> {
    let bytes = encode(letters)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Read and decode the font at `path`.
pub fn read_font(path: impl AsRef<Path>) -> Result<Vec<Letter>, FontError> {
    let bytes = std::fs::read(path)?;
    decode(&bytes)
}
