use serde::Deserialize;
use svg::node::element::Group;
use tracing::debug;

use stroke_rom_core::{BoundingBox, GlyphSource, Point, accumulate, settle_cursor};

use crate::emit::{ShadowStyle, StrokeStyle, render_glyph};
use crate::envelope::TransformEnvelope;

/// Settings for [compose_run].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunOptions {
    /// Overall magnification.
    pub scale: f64,
    pub x_offset: i32,
    pub y_offset: i32,
    /// Margin kept clear around the run, in glyph units.
    pub border: i32,
    pub thickness: f64,
    pub color: String,
    pub degenerate_dots: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            x_offset: 0,
            y_offset: 0,
            border: 10,
            thickness: 0.8,
            color: "#000000".to_owned(),
            degenerate_dots: true,
        }
    }
}

/// Measurements of a run taken before any of it is drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RunLayout {
    pub bbox: BoundingBox,
    /// Cursor after the last byte.
    pub end: Point,
    pub envelope: TransformEnvelope,
    pub width: f64,
    pub height: f64,
}

impl RunLayout {
    pub fn measure<S: GlyphSource + ?Sized>(
        source: &S,
        text: &[u8],
        scale: f64,
        border: i32,
        x_offset: i32,
        y_offset: i32,
    ) -> Self {
        let (bbox, end) = accumulate(source, text, BoundingBox::ZERO, Point::ORIGIN);
        let width = scale * f64::from(x_offset + 2 * border + bbox.width());
        let height = scale * f64::from(y_offset + 2 * border + bbox.height());

        debug!(bytes = text.len(), ?bbox, width, height, "measured run");

        Self {
            bbox,
            end,
            envelope: TransformEnvelope::new(scale, border, x_offset, y_offset, bbox),
            width,
            height,
        }
    }
}

/// A run of glyphs wrapped in its transform envelope, ready to embed.
#[derive(Debug, Clone)]
pub struct ComposedRun {
    pub group: Group,
    pub width: f64,
    pub height: f64,
}

/// Lay out `text` and draw it inside a transform envelope sized from its
/// bounding box.
///
/// Lines are only broken by the bytes themselves: a carriage return sends
/// the pen back to the start of the line and a line feed glyph moves it down.
pub fn compose_run<S: GlyphSource + ?Sized>(
    source: &S,
    text: &[u8],
    options: &RunOptions,
) -> ComposedRun {
    let layout = RunLayout::measure(
        source,
        text,
        options.scale,
        options.border,
        options.x_offset,
        options.y_offset,
    );

    let mut group = Group::new()
        .set("transform", layout.envelope.matrix())
        .set("stroke-width", options.thickness)
        .set("stroke", options.color.as_str())
        .set("stroke-linecap", "round")
        .set("stroke-linejoin", "round")
        .set("fill", "none");

    let style = StrokeStyle {
        color: options.color.clone(),
        thickness: options.thickness,
        degenerate_dots: options.degenerate_dots,
    };
    render_text(&mut group, source, text, Point::ORIGIN, &style, None);

    ComposedRun {
        group,
        width: layout.width,
        height: layout.height,
    }
}

/// Draw each byte of `text` in turn with the pen starting at `origin`.
/// Returns the final cursor.
pub fn render_text<S: GlyphSource + ?Sized>(
    group: &mut Group,
    source: &S,
    text: &[u8],
    origin: Point,
    style: &StrokeStyle,
    shadow: Option<&ShadowStyle>,
) -> Point {
    text.iter().fold(origin, |cursor, &code| {
        let cursor = render_glyph(group, source, code, cursor, style, shadow);
        settle_cursor(code, cursor, origin)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stroke_rom_core::StrokeTable;

    fn rom() -> StrokeTable {
        StrokeTable::parse(
            "41: 0,0 0,8 4,0 0,-8 -4,0; 6,0\n\
             42: 0,0 4,8; 2,-8\n\
             0a: 0,-12\n\
             0d:\n",
        )
        .unwrap()
    }

    #[test]
    fn carriage_return_scenario() {
        let options = RunOptions {
            scale: 1.0,
            border: 0,
            ..RunOptions::default()
        };
        let layout = RunLayout::measure(&rom(), b"AB\r", options.scale, 0, 0, 0);
        assert_eq!(layout.bbox, BoundingBox::new(0, 0, 10, 8));
        assert_eq!(layout.end, Point::ORIGIN);

        let run = compose_run(&rom(), b"AB\r", &options);
        assert_eq!((run.width, run.height), (10.0, 8.0));
        let markup = run.group.to_string();
        assert!(markup.contains(r#"transform="matrix(1,0,0,-1,0,8)""#), "{markup}");
        assert_eq!(markup.matches("<polyline").count(), 2);
    }

    #[test]
    fn empty_run_is_just_the_border() {
        let options = RunOptions {
            scale: 3.0,
            border: 4,
            ..RunOptions::default()
        };
        let run = compose_run(&rom(), b"", &options);
        assert_eq!((run.width, run.height), (24.0, 24.0));
        assert!(!run.group.to_string().contains("<polyline"));
    }

    #[test]
    fn stacked_lines_restart_at_the_run_origin() {
        let mut group = Group::new();
        let end = render_text(
            &mut group,
            &rom(),
            b"A\n\rB",
            Point::new(5, 100),
            &StrokeStyle::default(),
            None,
        );
        assert_eq!(end, Point::new(11, 88));
        assert!(group.to_string().contains(r#"points="5,88 9,96""#));
    }

    #[test]
    fn rendering_twice_is_identical() {
        let run = |text: &[u8]| compose_run(&rom(), text, &RunOptions::default());
        let a = run(b"AB\n\rBA");
        let b = run(b"AB\n\rBA");
        assert_eq!(a.group.to_string(), b.group.to_string());
        assert_eq!((a.width, a.height), (b.width, b.height));
    }
}
