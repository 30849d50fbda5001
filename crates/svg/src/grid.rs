use serde::Deserialize;
use svg::Node;
use svg::node::element::Group;

use stroke_rom_core::Point;

use crate::emit::polyline;

/// A grid spacing and the stroke colour its lines are drawn in.
/// Lines with no stroke inherit the style of the enclosing group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GridMarker {
    pub modulus: i32,
    pub stroke: Option<String>,
}

impl GridMarker {
    pub fn new(modulus: i32, stroke: Option<&str>) -> Self {
        Self {
            modulus,
            stroke: stroke.map(str::to_owned),
        }
    }

    /// Every unit, darker every 5, darkest every 10.
    pub fn calibration() -> Vec<GridMarker> {
        vec![
            GridMarker::new(1, None),
            GridMarker::new(5, Some("#aaaaaa")),
            GridMarker::new(10, Some("#888888")),
        ]
    }
}

/// One horizontal or vertical calibration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLine<'a> {
    /// Modulus of the marker that styles this line; 0 when none applies.
    /// Lines are drawn in increasing order of this key.
    pub modulus: i32,
    pub stroke: Option<&'a str>,
    pub from: Point,
    pub to: Point,
}

/// Lines for every whole coordinate of the rectangle `(x0, y0)..=(x1, y1)`.
///
/// Each coordinate takes the last marker whose modulus divides it, so with
/// markers listed in increasing modulus the coarsest spacing wins. Lines are
/// returned in a stable order of increasing modulus, so coarse lines are
/// drawn over the finer lines they cross.
pub fn grid_lines(x0: i32, y0: i32, x1: i32, y1: i32, markers: &[GridMarker]) -> Vec<GridLine<'_>> {
    let line = move |at: i32, from: Point, to: Point| {
        let marker = markers
            .iter()
            .rev()
            .find(|m| m.modulus > 0 && at.rem_euclid(m.modulus) == 0);
        GridLine {
            modulus: marker.map_or(0, |m| m.modulus),
            stroke: marker.and_then(|m| m.stroke.as_deref()),
            from,
            to,
        }
    };

    let mut lines: Vec<GridLine<'_>> = (x0..=x1)
        .map(|x| line(x, Point::new(x, y0), Point::new(x, y1)))
        .chain((y0..=y1).map(|y| line(y, Point::new(x0, y), Point::new(x1, y))))
        .collect();

    lines.sort_by_key(|l| l.modulus);
    lines
}

/// Append the lines of [grid_lines] to `group`.
pub fn render_grid(group: &mut Group, x0: i32, y0: i32, x1: i32, y1: i32, markers: &[GridMarker]) {
    for line in grid_lines(x0, y0, x1, y1, markers) {
        let mut element = polyline(&[line.from, line.to]);
        if let Some(stroke) = line.stroke {
            element = element.set("stroke", stroke);
        }
        group.append(element);
    }
}
