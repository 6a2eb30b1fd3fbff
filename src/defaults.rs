//! Format constants and search limits

/// Magic bytes at the start of every STRK file.
pub const MAGIC: [u8; 4] = *b"STRK";

/// The only format version this crate reads and writes.
pub const FORMAT_VERSION: u32 = 1;

/// Magic + version + table length.
pub const HEADER_SIZE: usize = 12;

/// One table entry: codepoint, data offset, stroke count (3 x u32).
pub const TABLE_ENTRY_SIZE: usize = 12;

/// One stroke record: three points as 6 x f32.
pub const STROKE_RECORD_SIZE: usize = 24;

/// Edge-steps a single longest-walk search may take before it settles for
/// the best trail found so far. Hand-drawn glyphs stay many orders of
/// magnitude below this.
pub const DEFAULT_SEARCH_BUDGET: usize = 1 << 20;
