#![no_std]

//! `stroke-rom-core` provides the primitives shared by the `stroke-rom` crates:
//! the packed glyph model, the [GlyphSource] trait, the stroke interpreter
//! ([trace]) and bounding-box accumulation ([accumulate]).
//!
//! Glyphs are read from a 256-entry character ROM. Each glyph is a series of
//! strokes, and each stroke is a series of relative pen moves. A stroke made
//! of a single move repositions the pen; longer strokes are drawn.

extern crate alloc;

mod bounds;
mod error;
mod glyph;
mod table;
mod trace;

pub use bounds::{BoundingBox, accumulate, glyph_box};
pub use error::{GlyphError, ParseErrorKind};
pub use glyph::{Glyph, GlyphSource, PackedMove, Point, Strokes, glyph_code};
pub use table::StrokeTable;
pub use trace::{CARRIAGE_RETURN, Stroke, Tracer, settle_cursor, trace};
