//! `stroke-rom` renders text drawn with a stroke-vector character ROM into
//! SVG.
//!
//! Glyphs come from any [GlyphSource]: the [BuiltinRom] compiled into the
//! library, or a [StrokeTable] parsed from a `.strokes` file. [Rom] picks
//! between the two at runtime.
//!
//! Rendering is provided by [stroke_rom_svg]:
//!
//! ```
//! use stroke_rom::{BuiltinRom, DocumentOptions, compose_document};
//!
//! let doc = compose_document(&BuiltinRom, b"HELLO\n\rWORLD", &DocumentOptions::calibration());
//! assert!(doc.width > 0.0 && doc.height > 0.0);
//! ```

mod config;
mod escape;

pub use config::Config;
pub use escape::unescape;

pub use stroke_rom_builtin::BuiltinRom;
pub use stroke_rom_core::{
    BoundingBox, Glyph, GlyphError, GlyphSource, PackedMove, Point, StrokeTable, glyph_code,
};
pub use stroke_rom_svg::{
    CatalogOptions, ComposedDocument, DocumentOptions, RenderError, RunOptions, compose_catalog,
    compose_document, compose_run, glyph_file_name, save_catalog, save_document,
    save_glyph_documents,
};

/// A character ROM chosen at runtime.
pub enum Rom {
    Builtin(BuiltinRom),
    Table(StrokeTable),
}

impl GlyphSource for Rom {
    fn vectors(&self, code: u8) -> Glyph<'_> {
        match self {
            Rom::Builtin(rom) => rom.vectors(code),
            Rom::Table(table) => table.vectors(code),
        }
    }
}
