use alloc::string::ToString;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::error::{GlyphError, ParseErrorKind};
use crate::glyph::{Glyph, GlyphSource, PackedMove};

const NUM_GLYPHS: usize = 256;

/// An owned character ROM, built at runtime.
///
/// Tables can be parsed from the `.strokes` text format, copied from any
/// other [GlyphSource], and patched glyph by glyph.
///
/// ```
/// use stroke_rom_core::{GlyphSource, StrokeTable};
///
/// let table: StrokeTable = "2d: 0,4 4,0; 2,-4".parse().unwrap();
/// assert!(table.vectors(b'-').has_ink());
/// assert!(table.vectors(b'+').is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrokeTable {
    glyphs: Vec<Vec<PackedMove>>,
}

impl Default for StrokeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeTable {
    /// A table in which every glyph is empty.
    pub fn new() -> Self {
        Self {
            glyphs: (0..NUM_GLYPHS).map(|_| Vec::new()).collect(),
        }
    }

    /// Copy every glyph of another source.
    pub fn from_source<S: GlyphSource + ?Sized>(source: &S) -> Self {
        Self {
            glyphs: (0..=u8::MAX)
                .map(|code| source.vectors(code).moves().to_vec())
                .collect(),
        }
    }

    /// Replace the glyph for `code` with the given strokes of `(dx, dy)` moves.
    pub fn set_glyph<I, S>(&mut self, code: u8, strokes: I) -> Result<(), GlyphError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[(i8, i8)]>,
    {
        let mut moves = Vec::new();
        for (index, stroke) in strokes.into_iter().enumerate() {
            let stroke = stroke.as_ref();
            if stroke.is_empty() {
                return Err(GlyphError::EmptyStroke(index));
            }
            moves.extend(
                stroke
                    .iter()
                    .enumerate()
                    .map(|(i, &(dx, dy))| PackedMove::new(dx, dy, i == 0)),
            );
        }
        self.glyphs[code as usize] = moves;
        Ok(())
    }

    /// Replace the glyph for `code` with glyph `from` of another source.
    pub fn copy_glyph<S: GlyphSource + ?Sized>(&mut self, code: u8, source: &S, from: u8) {
        self.glyphs[code as usize] = source.vectors(from).moves().to_vec();
    }

    /// Parse a table in the `.strokes` text format.
    ///
    /// Each line holds one glyph: a hex code, a colon, then strokes separated
    /// by `;`. A stroke is a whitespace-separated list of `dx,dy` moves.
    /// `#` starts a comment.
    pub fn parse(text: &str) -> Result<Self, GlyphError> {
        let mut table = Self::new();
        let mut seen = [false; NUM_GLYPHS];

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let fail = |kind| GlyphError::Parse { line, kind };

            let content = raw.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }

            let (code, body) = content
                .split_once(':')
                .ok_or(fail(ParseErrorKind::MissingColon))?;
            let code = code.trim();
            let code = u8::from_str_radix(code, 16)
                .map_err(|_| fail(ParseErrorKind::BadCode(code.to_string())))?;
            if seen[code as usize] {
                return Err(fail(ParseErrorKind::Duplicate(code)));
            }
            seen[code as usize] = true;

            let body = body.trim();
            if body.is_empty() {
                continue;
            }

            let mut moves = Vec::new();
            for stroke in body.split(';') {
                let before = moves.len();
                for pair in stroke.split_whitespace() {
                    let (dx, dy) = parse_move(pair)
                        .ok_or_else(|| fail(ParseErrorKind::BadMove(pair.to_string())))?;
                    moves.push(PackedMove::new(dx, dy, moves.len() == before));
                }
                if moves.len() == before {
                    return Err(fail(ParseErrorKind::EmptyStroke));
                }
            }
            table.glyphs[code as usize] = moves;
        }

        Ok(table)
    }
}

fn parse_move(pair: &str) -> Option<(i8, i8)> {
    let (dx, dy) = pair.split_once(',')?;
    Some((dx.parse().ok()?, dy.parse().ok()?))
}

impl FromStr for StrokeTable {
    type Err = GlyphError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl GlyphSource for StrokeTable {
    fn vectors(&self, code: u8) -> Glyph<'_> {
        Glyph::new(&self.glyphs[code as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn parses_strokes_and_comments() {
        let table = StrokeTable::parse(
            "# comment\n\
             \n\
             41: 0,0 0,6 2,2; 4,-8 # trailing\n\
             0d:\n",
        )
        .unwrap();

        assert_eq!(
            table.vectors(0x41).moves(),
            [
                PackedMove::new(0, 0, true),
                PackedMove::new(0, 6, false),
                PackedMove::new(2, 2, false),
                PackedMove::new(4, -8, true),
            ]
        );
        assert!(table.vectors(b'\r').is_empty());
        assert!(table.vectors(b'B').is_empty());
    }

    #[test]
    fn reports_line_and_reason() {
        let err = StrokeTable::parse("41: 0,0\n42 0,0\n").unwrap_err();
        assert_eq!(
            err,
            GlyphError::Parse {
                line: 2,
                kind: ParseErrorKind::MissingColon
            }
        );

        let err = StrokeTable::parse("1ff: 0,0").unwrap_err();
        assert_eq!(
            err,
            GlyphError::Parse {
                line: 1,
                kind: ParseErrorKind::BadCode(String::from("1ff"))
            }
        );

        let err = StrokeTable::parse("41: 0,300").unwrap_err();
        assert_eq!(
            err,
            GlyphError::Parse {
                line: 1,
                kind: ParseErrorKind::BadMove(String::from("0,300"))
            }
        );

        let err = StrokeTable::parse("41: 0,0;; 1,1").unwrap_err();
        assert_eq!(
            err,
            GlyphError::Parse {
                line: 1,
                kind: ParseErrorKind::EmptyStroke
            }
        );

        let err = StrokeTable::parse("41: 1,0\n\n41: 2,0").unwrap_err();
        assert_eq!(
            err,
            GlyphError::Parse {
                line: 3,
                kind: ParseErrorKind::Duplicate(0x41)
            }
        );
    }

    #[test]
    fn glyphs_can_be_patched_from_another_source() {
        let original = StrokeTable::parse("2c: 2,1 -1,-2; 5,1\n2e: 2,0 0,0; 4,0").unwrap();
        let mut revised = StrokeTable::from_source(&original);
        assert_eq!(revised, original);

        revised.copy_glyph(b'.', &original, b',');
        assert_eq!(revised.vectors(b'.').moves(), original.vectors(b',').moves());

        revised.set_glyph(b'.', [vec![(1i8, 1i8), (0, 0)]]).unwrap();
        assert_eq!(revised.vectors(b'.').strokes().count(), 1);

        let empty: [&[(i8, i8)]; 2] = [&[(1, 1)], &[]];
        assert_eq!(
            revised.set_glyph(b'.', empty),
            Err(GlyphError::EmptyStroke(1))
        );
    }
}
