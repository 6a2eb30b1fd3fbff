//! STRK reader

use std::collections::HashSet;

use glam::dvec2;

use crate::defaults::{FORMAT_VERSION, MAGIC, STROKE_RECORD_SIZE, TABLE_ENTRY_SIZE};
use crate::errors::FontError;
use crate::log::debug;
use crate::types::{Letter, Shape, Stroke};

use super::TableEntry;
use super::reader::ByteReader;

/// Decode a STRK font.
///
/// Letters come back in table order (ascending codepoint for files this
/// crate wrote). Stroke kinds are recovered from repeated points in each
/// record; strokes are not re-linearized. Any inconsistency fails the whole
/// decode, including an entry whose offset is not where the previous letter's
/// strokes end, so no record is ever decoded twice.
pub fn decode(bytes: &[u8]) -> Result<Vec<Letter>, FontError> {
    let mut reader = ByteReader::new(bytes);

    let magic: [u8; 4] = reader.read_array("magic")?;
    if magic != MAGIC {
        return Err(FontError::BadMagic { found: magic });
    }

    let version = reader.read_u32("version")?;
    if version != FORMAT_VERSION {
        return Err(FontError::UnsupportedVersion {
            found: version,
            expected: FORMAT_VERSION,
        });
    }

    let table = read_table(&mut reader)?;
    let data_start = reader.position();

    let mut letters = Vec::with_capacity(table.len());
    let mut expected_offset: u64 = 0;
    for entry in &table {
        if u64::from(entry.offset) != expected_offset {
            return Err(FontError::InconsistentOffset {
                codepoint: entry.codepoint,
                offset: entry.offset,
                expected: expected_offset,
            });
        }
        expected_offset += u64::from(entry.strokes) * STROKE_RECORD_SIZE as u64;

        letters.push(Letter {
            codepoint: entry.codepoint,
            shape: read_shape(bytes, data_start, entry)?,
        });
    }

    debug!(letters = letters.len(), bytes = bytes.len(), "decoded STRK font");
    Ok(letters)
}

fn read_table(reader: &mut ByteReader<'_>) -> Result<Vec<TableEntry>, FontError> {
    let table_len = reader.read_u32("table length")?;
    let len = table_len as usize;
    if len % TABLE_ENTRY_SIZE != 0 {
        return Err(FontError::MisalignedTable { len: table_len });
    }
    // check up front so a bogus length can't drive the allocation
    reader.ensure(len, "letter table")?;

    let mut seen = HashSet::new();
    let mut table = Vec::with_capacity(len / TABLE_ENTRY_SIZE);
    for _ in 0..len / TABLE_ENTRY_SIZE {
        let entry = TableEntry::read(reader)?;
        if !seen.insert(entry.codepoint) {
            return Err(FontError::DuplicateCodepoint {
                codepoint: entry.codepoint,
            });
        }
        table.push(entry);
    }
    Ok(table)
}

/// Strokes for one table entry, read from `data_start + entry.offset`.
fn read_shape(bytes: &[u8], data_start: usize, entry: &TableEntry) -> Result<Shape, FontError> {
    let overflow = || FontError::OffsetOverflow {
        codepoint: entry.codepoint,
        offset: entry.offset,
    };
    let start = usize::try_from(entry.offset)
        .ok()
        .and_then(|offset| data_start.checked_add(offset))
        .ok_or_else(overflow)?;
    let count = entry.strokes as usize;
    let needed = count.checked_mul(STROKE_RECORD_SIZE).ok_or_else(overflow)?;

    let mut reader = ByteReader::at(bytes, start);
    reader.ensure(needed, "stroke data")?;

    let mut strokes = Vec::with_capacity(count);
    for _ in 0..count {
        strokes.push(read_stroke(&mut reader)?);
    }
    Ok(Shape::from(strokes))
}

fn read_stroke(reader: &mut ByteReader<'_>) -> Result<Stroke, FontError> {
    let mut values = [0f32; 6];
    for value in &mut values {
        *value = reader.read_f32("stroke record")?;
    }
    let [x1, y1, x2, y2, x3, y3] = values.map(f64::from);
    Ok(Stroke::from_record([dvec2(x1, y1), dvec2(x2, y2), dvec2(x3, y3)]))
}
