//! `stroke-rom-svg` turns the glyphs of a stroke-vector character ROM into SVG.
//!
//! - [render_glyph] draws one glyph at a cursor and returns the next cursor.
//! - [compose_run] lays out a run of bytes inside a transform envelope.
//! - [compose_document] wraps a run in a standalone document, optionally with
//!   a calibration grid and a ghost trail of pen moves.
//! - [compose_catalog] draws all 256 glyphs as a 16x16 table.
//!
//! ```
//! use stroke_rom_core::StrokeTable;
//! use stroke_rom_svg::{DocumentOptions, compose_document};
//!
//! let rom: StrokeTable = "41: 0,0 0,6 2,2 2,-2 0,-6; -4,2 4,0; 2,-4".parse().unwrap();
//! let doc = compose_document(&rom, b"A", &DocumentOptions::default());
//! assert_eq!((doc.width, doc.height), (48.0, 56.0));
//! assert!(doc.to_markup().contains("<polyline"));
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

mod catalog;
mod document;
mod emit;
mod envelope;
mod grid;
mod persist;
mod text;

pub use catalog::{CatalogCell, CatalogOptions, CellFit, compose_catalog, save_catalog};
pub use document::{
    ComposedDocument, DocumentOptions, compose_document, glyph_file_name, save_document,
    save_glyph_documents,
};
pub use emit::{ShadowStyle, StrokeStyle, render_glyph};
pub use envelope::TransformEnvelope;
pub use grid::{GridLine, GridMarker, grid_lines, render_grid};
pub use text::{ComposedRun, RunLayout, RunOptions, compose_run, render_text};

pub use svg;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("scale {0} must be a whole number of at least 1")]
    InvalidScale(f64),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
