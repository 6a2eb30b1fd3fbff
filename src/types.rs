//! Stroke model: the drawable primitives and the containers built from them.
//!
//! Coordinates live in a normalized `[0,1] x [0,1]` glyph box by convention.
//! Nothing here clamps them; that belongs to whoever edits the points.

use std::collections::BTreeMap;

use glam::{DVec2, dvec2};

/// A 2D point in glyph space
pub type Point = DVec2;

/// Discriminant of a [`Stroke`], without its points
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrokeKind {
    Dot,
    Line,
    Curve,
}

/// One drawable primitive.
///
/// `Curve(p1, p2, p3)` is a quadratic Bézier from `p1` to `p3` with control
/// point `p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stroke {
    Dot(Point),
    Line(Point, Point),
    Curve(Point, Point, Point),
}

impl Stroke {
    /// A dot at the glyph origin, as placed by the editor's "New Dot" command.
    pub fn new_dot() -> Self {
        Stroke::Dot(dvec2(0.0, 0.0))
    }

    /// A short horizontal line from the origin, as placed by "New Line".
    pub fn new_line() -> Self {
        Stroke::Line(dvec2(0.0, 0.0), dvec2(0.1, 0.0))
    }

    /// A small arch from the origin, as placed by "New Curve".
    pub fn new_curve() -> Self {
        Stroke::Curve(dvec2(0.0, 0.0), dvec2(0.1, 0.1), dvec2(0.2, 0.0))
    }

    pub fn kind(&self) -> StrokeKind {
        match self {
            Stroke::Dot(_) => StrokeKind::Dot,
            Stroke::Line(..) => StrokeKind::Line,
            Stroke::Curve(..) => StrokeKind::Curve,
        }
    }

    /// Where the pen touches down
    pub fn start(&self) -> Point {
        match *self {
            Stroke::Dot(p) | Stroke::Line(p, _) | Stroke::Curve(p, _, _) => p,
        }
    }

    /// Where the pen lifts
    pub fn end(&self) -> Point {
        match *self {
            Stroke::Dot(p) | Stroke::Line(_, p) | Stroke::Curve(_, _, p) => p,
        }
    }

    /// Reverse the drawing direction in place.
    ///
    /// A curve keeps its control point; only the endpoints swap.
    pub fn flip(&mut self) {
        match self {
            Stroke::Dot(_) => {}
            Stroke::Line(p1, p2) => std::mem::swap(p1, p2),
            Stroke::Curve(p1, _, p3) => std::mem::swap(p1, p3),
        }
    }

    /// Copy of this stroke drawn in the opposite direction
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    /// The three points of the on-disk record.
    ///
    /// Lower-arity strokes repeat their last point so the kind can be
    /// recovered from the record alone.
    pub fn to_record(&self) -> [Point; 3] {
        match *self {
            Stroke::Dot(p) => [p, p, p],
            Stroke::Line(p1, p2) => [p1, p2, p2],
            Stroke::Curve(p1, p2, p3) => [p1, p2, p3],
        }
    }

    /// Rebuild a stroke from a record, classifying it by exact point equality.
    pub fn from_record([p1, p2, p3]: [Point; 3]) -> Self {
        if p1 == p2 && p1 == p3 {
            Stroke::Dot(p1)
        } else if p2 == p3 {
            Stroke::Line(p1, p2)
        } else {
            Stroke::Curve(p1, p2, p3)
        }
    }
}

/// The strokes of one glyph.
///
/// Order does not change how the glyph looks, but after linearization it is
/// the order a pen should follow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    pub strokes: Vec<Stroke>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stroke> {
        self.strokes.iter()
    }

    /// Reordered and reoriented into continuous pen trails
    pub fn linearized(&self) -> Shape {
        crate::linearize::linearize(self)
    }
}

impl From<Vec<Stroke>> for Shape {
    fn from(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }
}

impl FromIterator<Stroke> for Shape {
    fn from_iter<I: IntoIterator<Item = Stroke>>(iter: I) -> Self {
        Self {
            strokes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Shape {
    type Item = Stroke;
    type IntoIter = std::vec::IntoIter<Stroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.strokes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = &'a Stroke;
    type IntoIter = std::slice::Iter<'a, Stroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.strokes.iter()
    }
}

/// A codepoint and its glyph
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Letter {
    pub codepoint: u32,
    pub shape: Shape,
}

impl Letter {
    pub fn new(codepoint: u32, shape: impl Into<Shape>) -> Self {
        Self {
            codepoint,
            shape: shape.into(),
        }
    }

    /// The codepoint as a `char`, if it is a Unicode scalar value
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.codepoint)
    }
}

/// Every glyph of a font, keyed by codepoint.
///
/// This is the editing session's view of a font; the codec itself works on
/// plain `&[Letter]` lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LetterSet {
    shapes: BTreeMap<u32, Shape>,
}

impl LetterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Set the shape for `codepoint`, returning the one it replaced
    pub fn insert(&mut self, codepoint: u32, shape: impl Into<Shape>) -> Option<Shape> {
        self.shapes.insert(codepoint, shape.into())
    }

    pub fn get(&self, codepoint: u32) -> Option<&Shape> {
        self.shapes.get(&codepoint)
    }

    pub fn get_mut(&mut self, codepoint: u32) -> Option<&mut Shape> {
        self.shapes.get_mut(&codepoint)
    }

    pub fn remove(&mut self, codepoint: u32) -> Option<Shape> {
        self.shapes.remove(&codepoint)
    }

    /// Replace `to`'s shape with a copy of `from`'s.
    ///
    /// Copying from a codepoint that has no shape leaves `to` empty.
    pub fn copy_letter(&mut self, from: u32, to: u32) {
        let shape = self.shapes.get(&from).cloned().unwrap_or_default();
        self.shapes.insert(to, shape);
    }

    /// Letters in ascending codepoint order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Shape)> {
        self.shapes.iter().map(|(&cp, shape)| (cp, shape))
    }

    /// Flatten into the list form the codec consumes
    pub fn to_letters(&self) -> Vec<Letter> {
        self.iter()
            .map(|(codepoint, shape)| Letter::new(codepoint, shape.clone()))
            .collect()
    }
}

/// Later letters win when a codepoint repeats.
impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Self {
            shapes: iter
                .into_iter()
                .map(|letter| (letter.codepoint, letter.shape))
                .collect(),
        }
    }
}

impl From<Vec<Letter>> for LetterSet {
    fn from(letters: Vec<Letter>) -> Self {
        letters.into_iter().collect()
    }
}

impl From<LetterSet> for Vec<Letter> {
    fn from(set: LetterSet) -> Self {
        set.shapes
            .into_iter()
            .map(|(codepoint, shape)| Letter { codepoint, shape })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        dvec2(x, y)
    }

    // ==================== Stroke endpoint tests ====================

    #[test]
    fn dot_starts_and_ends_at_its_point() {
        let dot = Stroke::Dot(p(0.3, 0.4));
        assert_eq!(dot.start(), p(0.3, 0.4));
        assert_eq!(dot.end(), p(0.3, 0.4));
    }

    #[test]
    fn curve_ends_at_third_point() {
        let curve = Stroke::Curve(p(0.0, 0.0), p(0.5, 1.0), p(1.0, 0.0));
        assert_eq!(curve.start(), p(0.0, 0.0));
        assert_eq!(curve.end(), p(1.0, 0.0));
    }

    // ==================== Flip tests ====================

    #[test]
    fn flip_dot_is_noop() {
        let dot = Stroke::Dot(p(0.1, 0.2));
        assert_eq!(dot.flipped(), dot);
    }

    #[test]
    fn flip_line_swaps_endpoints() {
        let line = Stroke::Line(p(0.0, 0.0), p(1.0, 1.0));
        assert_eq!(line.flipped(), Stroke::Line(p(1.0, 1.0), p(0.0, 0.0)));
    }

    #[test]
    fn flip_curve_keeps_control_point() {
        let mut curve = Stroke::Curve(p(0.0, 0.0), p(0.5, 1.0), p(1.0, 0.0));
        curve.flip();
        assert_eq!(curve, Stroke::Curve(p(1.0, 0.0), p(0.5, 1.0), p(0.0, 0.0)));
        curve.flip();
        assert_eq!(curve.start(), p(0.0, 0.0));
    }

    // ==================== Record tests ====================

    #[test]
    fn records_repeat_trailing_points() {
        let a = p(0.1, 0.2);
        let b = p(0.3, 0.4);
        assert_eq!(Stroke::Dot(a).to_record(), [a, a, a]);
        assert_eq!(Stroke::Line(a, b).to_record(), [a, b, b]);
    }

    #[test]
    fn classify_record_by_equal_points() {
        let a = p(0.1, 0.2);
        let b = p(0.3, 0.4);
        let c = p(0.5, 0.6);
        assert_eq!(Stroke::from_record([a, a, a]).kind(), StrokeKind::Dot);
        assert_eq!(Stroke::from_record([a, b, b]), Stroke::Line(a, b));
        assert_eq!(Stroke::from_record([a, b, c]), Stroke::Curve(a, b, c));
        // first two equal but not the third is still a curve
        assert_eq!(Stroke::from_record([a, a, c]).kind(), StrokeKind::Curve);
    }

    #[test]
    fn editor_defaults() {
        assert_eq!(Stroke::new_dot().kind(), StrokeKind::Dot);
        assert_eq!(Stroke::new_line().end(), p(0.1, 0.0));
        assert_eq!(Stroke::new_curve().end(), p(0.2, 0.0));
    }

    // ==================== LetterSet tests ====================

    #[test]
    fn letter_set_iterates_in_codepoint_order() {
        let mut set = LetterSet::new();
        set.insert('b' as u32, vec![Stroke::new_dot()]);
        set.insert('a' as u32, vec![Stroke::new_line()]);
        let order: Vec<u32> = set.iter().map(|(cp, _)| cp).collect();
        assert_eq!(order, vec!['a' as u32, 'b' as u32]);
    }

    #[test]
    fn copy_letter_from_missing_codepoint_clears_target() {
        let mut set = LetterSet::new();
        set.insert('x' as u32, vec![Stroke::new_curve()]);
        set.copy_letter('y' as u32, 'x' as u32);
        assert!(set.get('x' as u32).is_some_and(Shape::is_empty));
    }

    #[test]
    fn later_letters_win() {
        let set: LetterSet = vec![
            Letter::new(65, vec![Stroke::new_dot()]),
            Letter::new(65, vec![Stroke::new_line(), Stroke::new_line()]),
        ]
        .into();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(65).map(Shape::len), Some(2));
    }

    #[test]
    fn editing_a_letter_in_place() {
        let mut set = LetterSet::new();
        set.insert('L' as u32, vec![Stroke::Line(p(0.2, 0.9), p(0.8, 0.9))]);

        if let Some(shape) = set.get_mut('L' as u32) {
            shape.push(Stroke::Line(p(0.2, 0.1), p(0.2, 0.9)));
        }
        let shape = set.get('L' as u32).cloned().unwrap_or_default();
        assert_eq!(shape.len(), 2);

        let ordered = shape.linearized();
        assert_eq!(
            ordered.strokes,
            vec![
                Stroke::Line(p(0.2, 0.1), p(0.2, 0.9)),
                Stroke::Line(p(0.2, 0.9), p(0.8, 0.9)),
            ]
        );

        assert_eq!(set.remove('L' as u32), Some(shape));
        assert!(set.remove('L' as u32).is_none());
        assert!(set.is_empty());
    }

    #[test]
    fn as_char_rejects_surrogates() {
        assert_eq!(Letter::new('A' as u32, Shape::new()).as_char(), Some('A'));
        assert_eq!(Letter::new(0xD800, Shape::new()).as_char(), None);
    }
}
