use alloc::vec::Vec;

use crate::glyph::{Glyph, PackedMove, Point, Strokes};

/// Rendering this code returns the pen to the start of the line.
pub const CARRIAGE_RETURN: u8 = b'\r';

/// One interpreted stroke of a glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stroke {
    /// Pen up: the cursor moves without drawing.
    Transit { from: Point, to: Point },
    /// Pen down: a polyline through `points`.
    ///
    /// The first point is the cursor after the stroke's first move; the
    /// stretch from `from` to that point is not drawn.
    Draw {
        from: Point,
        points: Vec<Point>,
        /// Every move after the first is zero, so the polyline has no length.
        degenerate: bool,
    },
}

impl Stroke {
    /// Cursor before the stroke.
    pub fn from(&self) -> Point {
        match self {
            Stroke::Transit { from, .. } | Stroke::Draw { from, .. } => *from,
        }
    }

    /// Cursor after the stroke.
    pub fn end(&self) -> Point {
        match self {
            Stroke::Transit { to, .. } => *to,
            Stroke::Draw { from, points, .. } => points.last().copied().unwrap_or(*from),
        }
    }

    /// Cursor after the stroke's first move.
    pub fn first_stop(&self) -> Point {
        match self {
            Stroke::Transit { to, .. } => *to,
            Stroke::Draw { from, points, .. } => points.first().copied().unwrap_or(*from),
        }
    }
}

/// Walks the strokes of one glyph, carrying the pen position.
#[derive(Debug, Clone)]
pub struct Tracer<'a> {
    strokes: Strokes<'a>,
    cursor: Point,
}

/// Interpret `glyph` with the pen starting at `cursor`.
pub fn trace(glyph: Glyph<'_>, cursor: Point) -> Tracer<'_> {
    Tracer {
        strokes: glyph.strokes(),
        cursor,
    }
}

impl Tracer<'_> {
    /// Pen position after the strokes yielded so far.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Consume the remaining strokes and return the final pen position.
    pub fn finish(mut self) -> Point {
        for _ in self.by_ref() {}
        self.cursor
    }
}

impl Iterator for Tracer<'_> {
    type Item = Stroke;

    fn next(&mut self) -> Option<Stroke> {
        let moves = self.strokes.next()?;
        let from = self.cursor;

        if let [single] = moves {
            self.cursor = from.offset(*single);
            return Some(Stroke::Transit {
                from,
                to: self.cursor,
            });
        }

        let points = moves
            .iter()
            .scan(from, |pen, step| {
                *pen = pen.offset(*step);
                Some(*pen)
            })
            .collect::<Vec<_>>();
        let degenerate = moves[1..].iter().all(|step: &PackedMove| step.is_zero());

        self.cursor = points.last().copied().unwrap_or(from);
        Some(Stroke::Draw {
            from,
            points,
            degenerate,
        })
    }
}

/// Apply the control-code cursor rule after `code` has been drawn.
///
/// A carriage return moves the pen back to the x of `origin`, the start of
/// the run, and leaves y alone so that lines can be stacked with line feeds.
pub fn settle_cursor(code: u8, cursor: Point, origin: Point) -> Point {
    if code == CARRIAGE_RETURN {
        Point::new(origin.x, cursor.y)
    } else {
        cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const GLYPH: &[PackedMove] = &[
        PackedMove::new(0, 5, true),
        PackedMove::new(0, 0, false),
        PackedMove::new(0, 0, false),
        PackedMove::new(1, 0, true),
        PackedMove::new(2, 0, false),
        PackedMove::new(0, -5, true),
    ];

    #[test]
    fn classifies_transits_and_polylines() {
        let strokes: Vec<Stroke> = trace(Glyph::new(GLYPH), Point::new(10, 0)).collect();

        assert_eq!(
            strokes,
            vec![
                Stroke::Draw {
                    from: Point::new(10, 0),
                    points: vec![Point::new(10, 5), Point::new(10, 5), Point::new(10, 5)],
                    degenerate: true,
                },
                Stroke::Draw {
                    from: Point::new(10, 5),
                    points: vec![Point::new(11, 5), Point::new(13, 5)],
                    degenerate: false,
                },
                Stroke::Transit {
                    from: Point::new(13, 5),
                    to: Point::new(13, 0),
                },
            ]
        );
    }

    #[test]
    fn final_cursor_chains_between_glyphs() {
        let first = trace(Glyph::new(GLYPH), Point::ORIGIN).finish();
        let second = trace(Glyph::new(GLYPH), first).finish();
        assert_eq!(first, Point::new(3, 0));
        assert_eq!(second, Point::new(6, 0));
    }

    #[test]
    fn tracing_is_deterministic() {
        let a: Vec<Stroke> = trace(Glyph::new(GLYPH), Point::new(-4, 7)).collect();
        let b: Vec<Stroke> = trace(Glyph::new(GLYPH), Point::new(-4, 7)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn carriage_return_restores_run_x_only() {
        let cursor = Point::new(42, -12);
        assert_eq!(
            settle_cursor(CARRIAGE_RETURN, cursor, Point::ORIGIN),
            Point::new(0, -12)
        );
        assert_eq!(
            settle_cursor(CARRIAGE_RETURN, cursor, Point::new(5, 10)),
            Point::new(5, -12)
        );
        assert_eq!(settle_cursor(b'A', cursor, Point::ORIGIN), cursor);
    }

    #[test]
    fn stroke_endpoints() {
        let mut tracer = trace(Glyph::new(GLYPH), Point::ORIGIN);
        let dot = tracer.next().unwrap();
        assert_eq!(dot.from(), Point::ORIGIN);
        assert_eq!(dot.first_stop(), Point::new(0, 5));
        assert_eq!(dot.end(), Point::new(0, 5));
        assert_eq!(tracer.cursor(), Point::new(0, 5));
    }
}
