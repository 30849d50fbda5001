use std::path::Path;

use serde::Deserialize;
use svg::Document;
use svg::Node;
use svg::node::element::{Anchor, Group, Rectangle};
use tracing::{debug, info};

use stroke_rom_core::{BoundingBox, GlyphSource, Point};

use crate::RenderError;
use crate::document::{ComposedDocument, SVG_NS, glyph_file_name};
use crate::emit::{StrokeStyle, render_glyph};
use crate::persist::write_atomic;
use crate::text::render_text;

const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Settings for [compose_catalog].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogOptions {
    /// Side of one square cell.
    pub cell_size: i32,
    /// Upper bound on the scale of a glyph inside its cell, so that small
    /// glyphs are not blown up.
    pub max_scale: f64,
    /// Clearance added on every side of a glyph's box before fitting it.
    pub padding: i32,
    /// Prefix of the per-glyph documents each cell links to.
    pub link_prefix: String,
    pub color: String,
    /// Stroke width of glyphs and headings, before each cell's own scale.
    pub thickness: f64,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            cell_size: 40,
            max_scale: 1.8,
            padding: 2,
            link_prefix: "_glyph_".to_owned(),
            color: "#000000".to_owned(),
            thickness: 1.0,
        }
    }
}

/// Placement of a glyph inside its cell: one uniform scale and a translation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellFit {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl CellFit {
    pub fn matrix(&self) -> String {
        format!(
            "matrix({:.2},0,0,{:.2},{:.2},{:.2})",
            self.scale, self.scale, self.translate_x, self.translate_y
        )
    }
}

/// One of the 256 cells of the catalog.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CatalogCell {
    pub code: u8,
    /// Lower-left corner of the cell, in table coordinates (y up).
    pub x: i32,
    pub y: i32,
    /// `None` when the glyph draws nothing and gets a blank tile.
    pub fit: Option<CellFit>,
}

impl CatalogCell {
    /// Lay out the cell in `column` (high nibble) and `row` (low nibble,
    /// counted from the top).
    pub fn layout<S: GlyphSource + ?Sized>(
        source: &S,
        column: u8,
        row: u8,
        options: &CatalogOptions,
    ) -> Self {
        let cell = options.cell_size;
        let code = (column << 4) | (row & 0x0f);
        let x = (i32::from(column) + 1) * cell;
        let y = (15 - i32::from(row)) * cell;

        Self {
            code,
            x,
            y,
            fit: fit_glyph(source, code, x, y, options),
        }
    }
}

fn fit_glyph<S: GlyphSource + ?Sized>(
    source: &S,
    code: u8,
    x: i32,
    y: i32,
    options: &CatalogOptions,
) -> Option<CellFit> {
    if !source.vectors(code).has_ink() {
        return None;
    }

    let (bbox, _) = source.bounding_box(code, BoundingBox::ZERO, Point::ORIGIN);
    if bbox.is_empty() {
        return None;
    }

    let bbox = bbox.inflate(options.padding.max(0));
    let cell = f64::from(options.cell_size);
    let width = f64::from(bbox.width());
    let height = f64::from(bbox.height());

    // Written with two decimals; truncate first so the glyph never outgrows
    // the cell or the ceiling.
    let scale = (cell / width).min(cell / height).min(options.max_scale);
    let scale = (scale * 100.0).trunc() / 100.0;

    let fit = CellFit {
        scale,
        translate_x: f64::from(x) + (cell - scale * width) / 2.0 - scale * f64::from(bbox.min_x),
        translate_y: f64::from(y) + (cell - scale * height) / 2.0 - scale * f64::from(bbox.min_y),
    };
    debug!(code, ?bbox, scale, "fitted catalog cell");
    Some(fit)
}

fn tile(x: i32, y: i32, size: i32, fill: &str) -> Rectangle {
    Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", size)
        .set("height", size)
        .set("style", format!("fill:{fill};stroke:#999999"))
}

/// Draw every glyph of `source` in a 16x16 table.
///
/// Columns are the high nibble of the code and rows the low nibble. Each
/// glyph is scaled uniformly to fit its cell and links to its standalone
/// document. The row and column headings are themselves drawn with the
/// glyphs of `source`.
pub fn compose_catalog<S: GlyphSource + ?Sized>(
    source: &S,
    options: &CatalogOptions,
) -> ComposedDocument {
    let cell = options.cell_size;
    let size = 17 * cell;

    let mut table = Group::new()
        .set("stroke-linecap", "round")
        .set("stroke-linejoin", "round")
        .set("fill", "none")
        .set("stroke-width", options.thickness)
        .set("transform", format!("matrix(1,0,0,-1,0,{})", size - 1));

    let style = StrokeStyle {
        color: options.color.clone(),
        thickness: options.thickness,
        degenerate_dots: true,
    };

    let mut labels = Group::new().set("stroke", options.color.as_str());
    for (i, &digit) in (0..).zip(HEX_DIGITS) {
        let row = Point::new(5, (15 - i) * cell + 10);
        render_text(&mut labels, source, &[b'-', digit], row, &style, None);

        let column = Point::new((i + 1) * cell + 5, 16 * cell + 10);
        render_text(&mut labels, source, &[digit, b'-'], column, &style, None);
    }
    table.append(labels);

    let mut filled = 0;
    for column in 0..16 {
        for row in 0..16 {
            let cell_layout = CatalogCell::layout(source, column, row, options);
            let Some(fit) = cell_layout.fit else {
                table.append(tile(cell_layout.x, cell_layout.y, cell, "#eeeeee"));
                continue;
            };

            let mut glyph = Group::new()
                .set("stroke", options.color.as_str())
                .set("transform", fit.matrix());
            render_glyph(&mut glyph, source, cell_layout.code, Point::ORIGIN, &style, None);

            let link = Anchor::new()
                .set(
                    "xlink:href",
                    glyph_file_name(&options.link_prefix, cell_layout.code),
                )
                .add(tile(cell_layout.x, cell_layout.y, cell, "#ffffff"))
                .add(glyph);
            table.append(link);
            filled += 1;
        }
    }
    debug!(filled, "laid out catalog");

    let document = Document::new()
        .set("version", "1.1")
        .set("width", size + 1)
        .set("height", size + 1)
        .set("xmlns", SVG_NS)
        .set("xmlns:xlink", XLINK_NS)
        .add(table);

    ComposedDocument {
        document,
        width: f64::from(size + 1),
        height: f64::from(size + 1),
    }
}

/// Compose the catalog and write it to `path`, replacing any existing file.
pub fn save_catalog<S: GlyphSource + ?Sized>(
    path: &Path,
    source: &S,
    options: &CatalogOptions,
) -> Result<(), RenderError> {
    let composed = compose_catalog(source, options);
    write_atomic(path, &composed.to_markup())?;
    info!(path = %path.display(), "wrote catalog");
    Ok(())
}
