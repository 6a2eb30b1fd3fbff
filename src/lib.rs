//! Stroke ordering and binary storage for single-line pen fonts.
//!
//! A glyph is a [`Shape`]: an unordered bag of dots, lines and quadratic
//! curves. [`linearize`] turns it into as few continuous pen trails as it can
//! find, and the [`codec`] module packs a whole font into the compact STRK
//! format (linearizing every glyph on the way out).
//!
//! ```
//! use glam::dvec2;
//! use strokefont::{Letter, Stroke, decode, encode};
//!
//! let v = Letter::new('v' as u32, vec![
//!     Stroke::Line(dvec2(0.5, 0.9), dvec2(0.8, 0.4)),
//!     Stroke::Line(dvec2(0.2, 0.4), dvec2(0.5, 0.9)),
//! ]);
//! let bytes = encode(&[v]).unwrap();
//! let letters = decode(&bytes).unwrap();
//!
//! let strokes = &letters[0].shape.strokes;
//! assert_eq!(strokes[0].end(), strokes[1].start());
//! ```

pub mod codec;
pub mod defaults;
pub mod errors;
pub mod graph;
pub mod linearize;
pub mod log;
pub mod types;

pub use codec::{decode, encode, encode_to, read_font, simplify, write_font};
pub use errors::{ErrorKind, FontError};
pub use linearize::{LinearizeOptions, linearize, linearize_with};
pub use types::{Letter, LetterSet, Point, Shape, Stroke, StrokeKind};
