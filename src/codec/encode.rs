//! STRK writer

use std::io::Write;

use crate::defaults::{FORMAT_VERSION, MAGIC, STROKE_RECORD_SIZE, TABLE_ENTRY_SIZE};
use crate::errors::FontError;
use crate::log::debug;
use crate::types::{Letter, Stroke};

use super::{TableEntry, simplify};

/// Encode `letters` into a new buffer. See [`encode_to`].
pub fn encode(letters: &[Letter]) -> Result<Vec<u8>, FontError> {
    let mut buf = Vec::new();
    encode_to(letters, &mut buf)?;
    Ok(buf)
}

/// Write `letters` as a STRK font.
///
/// Letters with empty shapes are dropped, the rest are linearized and
/// written in ascending codepoint order. A codepoint appearing twice is
/// rejected rather than producing an ambiguous table.
pub fn encode_to<W: Write>(letters: &[Letter], mut writer: W) -> Result<(), FontError> {
    let mut letters = simplify(letters);
    letters.sort_by_key(|letter| letter.codepoint);
    if let Some(pair) = letters.windows(2).find(|w| w[0].codepoint == w[1].codepoint) {
        return Err(FontError::DuplicateCodepoint {
            codepoint: pair[0].codepoint,
        });
    }

    let table = build_table(&letters)?;
    let table_len = table
        .len()
        .checked_mul(TABLE_ENTRY_SIZE)
        .and_then(|len| u32::try_from(len).ok())
        .ok_or(FontError::TableTooLarge {
            letters: table.len(),
        })?;

    writer.write_all(&MAGIC)?;
    writer.write_all(&FORMAT_VERSION.to_le_bytes())?;
    writer.write_all(&table_len.to_le_bytes())?;
    for entry in &table {
        entry.write(&mut writer)?;
    }
    for letter in &letters {
        for stroke in &letter.shape {
            write_stroke(&mut writer, stroke)?;
        }
    }

    debug!(letters = table.len(), table_len, "encoded STRK font");
    Ok(())
}

/// Table entries for already sorted letters, with offsets packed back to
/// back from the start of the data section.
fn build_table(letters: &[Letter]) -> Result<Vec<TableEntry>, FontError> {
    let mut table = Vec::with_capacity(letters.len());
    let mut offset: u32 = 0;

    for letter in letters {
        let count = letter.shape.len();
        let too_many = || FontError::TooManyStrokes {
            codepoint: letter.codepoint,
            count,
        };
        let strokes = u32::try_from(count).map_err(|_| too_many())?;
        table.push(TableEntry {
            codepoint: letter.codepoint,
            offset,
            strokes,
        });

        let size = strokes
            .checked_mul(STROKE_RECORD_SIZE as u32)
            .ok_or_else(too_many)?;
        offset = offset.checked_add(size).ok_or_else(too_many)?;
    }

    Ok(table)
}

/// Six f32s: the stroke's record points, narrowed from f64.
fn write_stroke<W: Write>(writer: &mut W, stroke: &Stroke) -> std::io::Result<()> {
    for point in stroke.to_record() {
        writer.write_all(&(point.x as f32).to_le_bytes())?;
        writer.write_all(&(point.y as f32).to_le_bytes())?;
    }
    Ok(())
}
