use svg::Node;
use svg::node::element::{Circle, Group, Polyline};

use stroke_rom_core::{GlyphSource, Point, Stroke, trace};

/// How the strokes of a glyph are drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: String,
    pub thickness: f64,
    /// Also mark zero-length strokes with a filled dot, for viewers that
    /// drop polylines whose points all coincide.
    pub degenerate_dots: bool,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: "#000000".to_owned(),
            thickness: 0.8,
            degenerate_dots: true,
        }
    }
}

/// Style of the ghost trail drawn beneath a glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowStyle {
    pub color: String,
    pub thickness: f64,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            color: "#99eeee".to_owned(),
            thickness: 0.4,
        }
    }
}

/// Draw the glyph for `code` into `group` with the pen starting at `cursor`,
/// and return the cursor after the glyph.
///
/// With a `shadow`, the first move of every stroke (pen-up transits
/// included) is drawn first as a faint trail, starting from the same cursor.
pub fn render_glyph<S: GlyphSource + ?Sized>(
    group: &mut Group,
    source: &S,
    code: u8,
    cursor: Point,
    style: &StrokeStyle,
    shadow: Option<&ShadowStyle>,
) -> Point {
    if let Some(shadow) = shadow {
        for stroke in trace(source.vectors(code), cursor) {
            group.append(
                polyline(&[stroke.from(), stroke.first_stop()])
                    .set("stroke", shadow.color.as_str())
                    .set("stroke-width", shadow.thickness),
            );
        }
    }

    let mut tracer = trace(source.vectors(code), cursor);
    for stroke in tracer.by_ref() {
        let Stroke::Draw {
            points, degenerate, ..
        } = stroke
        else {
            continue;
        };

        group.append(polyline(&points));
        if degenerate && style.degenerate_dots {
            if let Some(&last) = points.last() {
                group.append(dot(last, style.thickness / 2.0, &style.color));
            }
        }
    }

    tracer.cursor()
}

pub(crate) fn polyline(points: &[Point]) -> Polyline {
    let points = points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    Polyline::new().set("points", points)
}

pub(crate) fn dot(center: Point, radius: f64, fill: &str) -> Circle {
    Circle::new()
        .set("cx", center.x)
        .set("cy", center.y)
        .set("r", radius)
        .set("fill", fill)
}
