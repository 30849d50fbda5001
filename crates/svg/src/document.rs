use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use svg::Document;
use svg::Node;
use svg::node::element::Group;
use tracing::{debug, info};

use stroke_rom_core::{GlyphSource, Point};

use crate::RenderError;
use crate::emit::{ShadowStyle, StrokeStyle, dot};
use crate::grid::{GridMarker, render_grid};
use crate::persist::write_atomic;
use crate::text::{RunLayout, render_text};

pub(crate) const SVG_NS: &str = "http://www.w3.org/2000/svg";

const PROLOGUE: &str = concat!(
    "<?xml version=\"1.0\" standalone=\"no\"?>\n",
    "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\"\n",
    " \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n",
);

/// Settings for [compose_document].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
    /// Overall magnification.
    pub scale: f64,
    /// Extra margin on both axes, independent of the border.
    pub offset: i32,
    /// Margin kept clear around the text, in glyph units.
    pub border: i32,
    /// Draw calibration lines behind the text.
    pub add_grid: bool,
    /// Draw the ghost trail of pen moves, and mark the start and end of the run.
    pub draw_shadow: bool,
    pub thickness: f64,
    pub color: String,
    pub degenerate_dots: bool,
}

impl Default for DocumentOptions {
    /// Settings suited to a live display: moderate size, no overlays.
    fn default() -> Self {
        Self {
            scale: 2.0,
            offset: 0,
            border: 10,
            add_grid: false,
            draw_shadow: false,
            thickness: 0.8,
            color: "#000000".to_owned(),
            degenerate_dots: true,
        }
    }
}

impl DocumentOptions {
    /// Settings for documents written to disk: large, with the grid and the
    /// ghost trail turned on.
    pub fn calibration() -> Self {
        Self {
            scale: 10.0,
            offset: 1,
            border: 5,
            add_grid: true,
            draw_shadow: true,
            ..Self::default()
        }
    }

    /// Check the settings before writing. The scale must be a whole number
    /// of at least 1, the only values the transform matrix can carry.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.scale >= 1.0 && self.scale.fract() == 0.0 {
            Ok(())
        } else {
            Err(RenderError::InvalidScale(self.scale))
        }
    }
}

/// A standalone document and its size.
#[derive(Debug, Clone)]
pub struct ComposedDocument {
    pub document: Document,
    pub width: f64,
    pub height: f64,
}

impl ComposedDocument {
    /// The full file contents, XML prologue included.
    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComposedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{PROLOGUE}{}", self.document)
    }
}

/// Render `text` into a complete document.
///
/// The document holds, from back to front: the optional calibration grid,
/// the ghost trail and the text, and the run's start and end markers.
pub fn compose_document<S: GlyphSource + ?Sized>(
    source: &S,
    text: &[u8],
    options: &DocumentOptions,
) -> ComposedDocument {
    let layout = RunLayout::measure(
        source,
        text,
        options.scale,
        options.border,
        options.offset,
        options.offset,
    );
    let bbox = layout.bbox;

    let mut frame = Group::new()
        .set("stroke-linecap", "round")
        .set("stroke-linejoin", "round")
        .set("fill", "none")
        .set("transform", layout.envelope.matrix());

    if options.add_grid {
        let mut grid = Group::new().set("stroke-width", 0.2).set("stroke", "#cccccc");
        render_grid(
            &mut grid,
            bbox.min_x - options.border,
            bbox.min_y - options.border,
            bbox.max_x + options.border,
            bbox.max_y + options.border,
            &GridMarker::calibration(),
        );
        frame.append(grid);
    }

    let style = StrokeStyle {
        color: options.color.clone(),
        thickness: options.thickness,
        degenerate_dots: options.degenerate_dots,
    };
    let shadow = options.draw_shadow.then(ShadowStyle::default);

    let mut ink = Group::new()
        .set("stroke-width", options.thickness)
        .set("stroke", options.color.as_str());
    let end = render_text(&mut ink, source, text, Point::ORIGIN, &style, shadow.as_ref());
    frame.append(ink);

    if options.draw_shadow {
        frame.append(dot(Point::ORIGIN, 0.7, "green"));
        frame.append(dot(end, 0.3, "red"));
    }

    let document = Document::new()
        .set("version", "1.1")
        .set("xmlns", SVG_NS)
        .set("viewBox", format!("0 0 {} {}", layout.width, layout.height))
        .add(frame);

    ComposedDocument {
        document,
        width: layout.width,
        height: layout.height,
    }
}

/// Render `text` and write the document to `path`, replacing any existing
/// file. Returns the document's width and height.
///
/// Fails without writing anything when `options` do not pass
/// [DocumentOptions::validate].
pub fn save_document<S: GlyphSource + ?Sized>(
    path: &Path,
    source: &S,
    text: &[u8],
    options: &DocumentOptions,
) -> Result<(f64, f64), RenderError> {
    options.validate()?;
    let composed = compose_document(source, text, options);
    write_atomic(path, &composed.to_markup())?;

    info!(
        path = %path.display(),
        width = composed.width,
        height = composed.height,
        "wrote document"
    );
    Ok((composed.width, composed.height))
}

/// File name of the standalone document for one glyph, as linked from the
/// catalog.
pub fn glyph_file_name(prefix: &str, code: u8) -> String {
    format!("{prefix}{code:02x}.svg")
}

/// Write one document per glyph that draws anything into `dir`, named with
/// [glyph_file_name]. Returns the codes written and their paths.
pub fn save_glyph_documents<S: GlyphSource + ?Sized>(
    dir: &Path,
    source: &S,
    options: &DocumentOptions,
    prefix: &str,
) -> Result<Vec<(u8, PathBuf)>, RenderError> {
    let mut written = Vec::new();

    for code in 0..=u8::MAX {
        if !source.vectors(code).has_ink() {
            debug!(code, "skipping glyph without strokes");
            continue;
        }

        let path = dir.join(glyph_file_name(prefix, code));
        save_document(&path, source, &[code], options)?;
        written.push((code, path));
    }

    info!(count = written.len(), dir = %dir.display(), "wrote glyph documents");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stroke_rom_core::StrokeTable;

    fn rom() -> StrokeTable {
        StrokeTable::parse(
            "41: 0,0 0,8 4,0 0,-8 -4,0; 6,0\n\
             2e: 2,0 0,0; 4,0\n\
             20: 6,0\n",
        )
        .unwrap()
    }

    #[test]
    fn document_has_prologue_and_viewbox() {
        let doc = compose_document(&rom(), b"A", &DocumentOptions::default());
        let markup = doc.to_markup();

        assert!(markup.starts_with("<?xml version=\"1.0\" standalone=\"no\"?>\n<!DOCTYPE svg"));
        assert!(markup.contains(r#"viewBox="0 0 48 56""#), "{markup}");
        assert!(markup.contains(r#"transform="matrix(2,0,0,-2,20,36)""#));
        assert!(markup.contains(r#"version="1.1""#));
        assert!(!markup.contains("<circle"));
        assert!(markup.ends_with("</svg>\n"));
    }

    #[test]
    fn empty_text_is_twice_the_border() {
        let options = DocumentOptions {
            scale: 3.0,
            border: 7,
            ..DocumentOptions::default()
        };
        let doc = compose_document(&rom(), b"", &options);
        assert_eq!((doc.width, doc.height), (42.0, 42.0));
        assert!(!doc.to_markup().contains("<polyline"));
    }

    #[test]
    fn calibration_overlays() {
        let doc = compose_document(&rom(), b"A.", &DocumentOptions::calibration());
        let markup = doc.to_markup();

        // box [0,0,8,8] widened by the border of 5
        let grid_lines = (8 + 11) + (8 + 11);
        let trail = 2 + 2;
        let glyphs = 1 + 1;
        assert_eq!(markup.matches("<polyline").count(), grid_lines + trail + glyphs);

        assert!(markup.contains(r#"fill="green""#));
        assert!(markup.contains(r#"fill="red""#));
        assert!(markup.contains(r#"cx="12""#), "end marker at the final cursor");
        assert_eq!(markup.matches("<circle").count(), 3);
    }

    #[test]
    fn save_reports_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.svg");

        let size = save_document(&path, &rom(), b"A", &DocumentOptions::default()).unwrap();
        assert_eq!(size, (48.0, 56.0));

        let written = std::fs::read_to_string(&path).unwrap();
        let composed = compose_document(&rom(), b"A", &DocumentOptions::default());
        assert_eq!(written, composed.to_markup());
    }

    #[test]
    fn fractional_scales_are_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.svg");

        for scale in [0.5, 2.5, 0.0, -2.0, f64::NAN] {
            let options = DocumentOptions {
                scale,
                ..DocumentOptions::default()
            };
            let err = save_document(&path, &rom(), b"A", &options).unwrap_err();
            assert!(matches!(err, RenderError::InvalidScale(_)), "{err}");
            assert!(!path.exists());
        }

        assert!(DocumentOptions::default().validate().is_ok());
        assert!(DocumentOptions::calibration().validate().is_ok());
    }

    #[test]
    fn options_read_from_toml_keep_unnamed_defaults() {
        let options: DocumentOptions = toml::from_str("scale = 4.0\nadd_grid = true").unwrap();
        assert_eq!(
            options,
            DocumentOptions {
                scale: 4.0,
                add_grid: true,
                ..DocumentOptions::default()
            }
        );
    }

    #[test]
    fn glyph_batch_skips_blank_glyphs() {
        let dir = tempfile::tempdir().unwrap();
        let written = save_glyph_documents(dir.path(), &rom(), &DocumentOptions::calibration(), "_g_")
            .unwrap();

        let codes: Vec<u8> = written.iter().map(|(code, _)| *code).collect();
        assert_eq!(codes, [b'.', b'A']);
        assert!(dir.path().join("_g_41.svg").exists());
        assert!(dir.path().join("_g_2e.svg").exists());
        assert!(!dir.path().join("_g_20.svg").exists());
    }
}
