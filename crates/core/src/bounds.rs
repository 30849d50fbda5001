use crate::glyph::{Glyph, GlyphSource, Point};
use crate::trace::{Stroke, settle_cursor, trace};

/// Rectangle covering every point drawn by a rendering pass.
///
/// Boxes start out as [BoundingBox::ZERO], so the origin of a run is always
/// covered, and only ever grow.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    pub const ZERO: BoundingBox = BoundingBox::new(0, 0, 0, 0);

    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Widen the box so that it covers `point`.
    pub fn include(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// A box with no extent in either direction.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 && self.height() == 0
    }

    /// Grow every side of the box by `margin`.
    pub fn inflate(self, margin: i32) -> Self {
        Self::new(
            self.min_x - margin,
            self.min_y - margin,
            self.max_x + margin,
            self.max_y + margin,
        )
    }
}

impl From<BoundingBox> for [i32; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y]
    }
}

/// Widen `bbox` by the points drawn for one glyph starting at `cursor`.
/// Returns the new box and the cursor after the glyph.
pub fn glyph_box(glyph: Glyph<'_>, mut bbox: BoundingBox, cursor: Point) -> (BoundingBox, Point) {
    let mut tracer = trace(glyph, cursor);
    for stroke in tracer.by_ref() {
        if let Stroke::Draw { points, .. } = stroke {
            points.into_iter().for_each(|p| bbox.include(p));
        }
    }
    (bbox, tracer.cursor())
}

/// Accumulate the box drawn by a whole run of bytes.
///
/// Uses the same cursor rules as rendering, carriage returns included, so
/// the box always agrees with what would be drawn.
pub fn accumulate<S: GlyphSource + ?Sized>(
    source: &S,
    text: &[u8],
    mut bbox: BoundingBox,
    start: Point,
) -> (BoundingBox, Point) {
    let mut cursor = start;
    for &code in text {
        (bbox, cursor) = source.bounding_box(code, bbox, cursor);
        cursor = settle_cursor(code, cursor, start);
    }
    (bbox, cursor)
}
