//! Error types for the STRK codec
//!
//! Every decode failure is terminal: there is no partial result. Callers keep
//! whatever font they had loaded before.

use miette::Diagnostic;
use thiserror::Error;

/// Coarse classification of a [`FontError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad magic or a structurally inconsistent table
    Format,
    /// Version field does not match [`crate::defaults::FORMAT_VERSION`]
    Version,
    /// The buffer ended before a field or record was complete
    TruncatedInput,
    /// Underlying storage failure, passed through unchanged
    Io,
}

// ============================================================================
// Codec Errors
// ============================================================================

/// Errors produced while encoding or decoding a STRK font
#[derive(Error, Diagnostic, Debug)]
pub enum FontError {
    #[error("expected magic \"STRK\", found {found:02x?}")]
    #[diagnostic(
        code(strokefont::codec::bad_magic),
        help("this is not a STRK stroke font file")
    )]
    BadMagic { found: [u8; 4] },

    #[error("unsupported format version {found} (expected {expected})")]
    #[diagnostic(code(strokefont::codec::unsupported_version))]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("truncated input: {what} at byte {offset} needs {needed} bytes, {available} available")]
    #[diagnostic(code(strokefont::codec::truncated))]
    Truncated {
        what: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("table length {len} is not a multiple of the 12-byte entry size")]
    #[diagnostic(code(strokefont::codec::misaligned_table))]
    MisalignedTable { len: u32 },

    #[error("U+{codepoint:04X} starts at data offset {offset}, expected {expected}")]
    #[diagnostic(
        code(strokefont::codec::inconsistent_offset),
        help("letters' stroke data must follow each other in table order")
    )]
    InconsistentOffset {
        codepoint: u32,
        offset: u32,
        expected: u64,
    },

    #[error("strokes for U+{codepoint:04X} at data offset {offset} overflow the address space")]
    #[diagnostic(code(strokefont::codec::offset_overflow))]
    OffsetOverflow { codepoint: u32, offset: u32 },

    #[error("duplicate codepoint U+{codepoint:04X}")]
    #[diagnostic(
        code(strokefont::codec::duplicate_codepoint),
        help("each codepoint may appear at most once in a font")
    )]
    DuplicateCodepoint { codepoint: u32 },

    #[error("U+{codepoint:04X} has {count} strokes, more than the format can address")]
    #[diagnostic(code(strokefont::codec::too_many_strokes))]
    TooManyStrokes { codepoint: u32, count: usize },

    #[error("{letters} letters do not fit in a u32-sized table")]
    #[diagnostic(code(strokefont::codec::table_too_large))]
    TableTooLarge { letters: usize },

    #[error(transparent)]
    #[diagnostic(code(strokefont::io))]
    Io(#[from] std::io::Error),
}

impl FontError {
    /// Which of the four failure families this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            FontError::UnsupportedVersion { .. } => ErrorKind::Version,
            FontError::Truncated { .. } => ErrorKind::TruncatedInput,
            FontError::Io(_) => ErrorKind::Io,
            FontError::BadMagic { .. }
            | FontError::MisalignedTable { .. }
            | FontError::InconsistentOffset { .. }
            | FontError::OffsetOverflow { .. }
            | FontError::DuplicateCodepoint { .. }
            | FontError::TooManyStrokes { .. }
            | FontError::TableTooLarge { .. } => ErrorKind::Format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(FontError::BadMagic { found: *b"ABCD" }.kind(), ErrorKind::Format);
        assert_eq!(
            FontError::UnsupportedVersion { found: 2, expected: 1 }.kind(),
            ErrorKind::Version
        );
        assert_eq!(
            FontError::Truncated { what: "header", offset: 0, needed: 4, available: 2 }.kind(),
            ErrorKind::TruncatedInput
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(FontError::from(io).kind(), ErrorKind::Io);
    }

    #[test]
    fn messages_name_the_codepoint() {
        let err = FontError::DuplicateCodepoint { codepoint: 0x41 };
        assert_eq!(err.to_string(), "duplicate codepoint U+0041");

        let err = FontError::InconsistentOffset { codepoint: 0x6F, offset: 0, expected: 48 };
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(err.to_string(), "U+006F starts at data offset 0, expected 48");
    }
}
