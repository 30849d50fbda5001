use crate::bounds::{self, BoundingBox};
use crate::error::GlyphError;

/// A relative pen move, in compact representation.
/// Used to store the moves which make up an individual glyph.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PackedMove {
    /// Horizontal displacement
    pub dx: i8,
    /// Vertical displacement (y grows upwards)
    pub dy: i8,
    /// Does this move begin a new stroke?
    pub start: bool,
}

impl PackedMove {
    pub const fn new(dx: i8, dy: i8, start: bool) -> Self {
        Self { dx, dy, start }
    }

    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// An absolute pen position.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position reached by applying a single move.
    pub const fn offset(self, step: PackedMove) -> Self {
        Self {
            x: self.x + step.dx as i32,
            y: self.y + step.dy as i32,
        }
    }
}

/// A single glyph (character) contained within a character ROM.
///
/// The moves of every stroke are stored back to back; the first move of
/// each stroke has [PackedMove::start] set.
#[derive(Debug, Copy, Clone, Default)]
pub struct Glyph<'a> {
    moves: &'a [PackedMove],
}

impl<'a> Glyph<'a> {
    pub const EMPTY: Glyph<'static> = Glyph { moves: &[] };

    pub const fn new(moves: &'a [PackedMove]) -> Self {
        Self { moves }
    }

    pub fn moves(&self) -> &'a [PackedMove] {
        self.moves
    }

    /// Iterate over the strokes of this glyph, in drawing order.
    pub fn strokes(&self) -> Strokes<'a> {
        Strokes { rest: self.moves }
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Does any stroke of this glyph put the pen down?
    pub fn has_ink(&self) -> bool {
        self.strokes().any(|stroke| stroke.len() > 1)
    }
}

/// Iterator over the strokes of a [Glyph].
#[derive(Debug, Clone)]
pub struct Strokes<'a> {
    rest: &'a [PackedMove],
}

impl<'a> Iterator for Strokes<'a> {
    type Item = &'a [PackedMove];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let len = 1 + self.rest[1..].iter().take_while(|m| !m.start).count();
        let (stroke, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(stroke)
    }
}

/// Provides glyph vectors for each of the 256 character codes.
///
/// Implementors are read-only: rendering never mutates a source.
pub trait GlyphSource {
    /// The strokes making up the glyph for `code`.
    fn vectors(&self, code: u8) -> Glyph<'_>;

    /// Widen `bbox` to cover everything drawn by the glyph for `code` when
    /// the pen starts at `cursor`. Returns the widened box and the cursor
    /// after the glyph.
    fn bounding_box(&self, code: u8, bbox: BoundingBox, cursor: Point) -> (BoundingBox, Point) {
        bounds::glyph_box(self.vectors(code), bbox, cursor)
    }
}

impl<T: GlyphSource + ?Sized> GlyphSource for &T {
    fn vectors(&self, code: u8) -> Glyph<'_> {
        (**self).vectors(code)
    }
}

/// Narrow a wider integer to a character code.
pub fn glyph_code(value: u32) -> Result<u8, GlyphError> {
    u8::try_from(value).map_err(|_| GlyphError::CodeOutOfRange(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    const MOVES: &[PackedMove] = &[
        PackedMove::new(1, 1, true),
        PackedMove::new(0, 2, true),
        PackedMove::new(3, 0, false),
        PackedMove::new(2, -3, true),
    ];

    #[test]
    fn strokes_split_at_start_markers() {
        let glyph = Glyph::new(MOVES);
        let lengths: Vec<usize> = glyph.strokes().map(<[PackedMove]>::len).collect();
        assert_eq!(lengths, [1, 2, 1]);
        assert!(glyph.has_ink());
    }

    #[test]
    fn transits_alone_have_no_ink() {
        let glyph = Glyph::new(&MOVES[3..]);
        assert!(!glyph.has_ink());
        assert!(!glyph.is_empty());
        assert!(!Glyph::EMPTY.has_ink());
        assert_eq!(Glyph::EMPTY.strokes().count(), 0);
    }

    #[test]
    fn codes_outside_a_byte_are_rejected() {
        assert_eq!(glyph_code(0x41), Ok(0x41));
        assert_eq!(glyph_code(255), Ok(255));
        assert_eq!(glyph_code(256), Err(GlyphError::CodeOutOfRange(256)));
    }
}
