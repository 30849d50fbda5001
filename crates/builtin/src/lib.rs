#![no_std]

//! `stroke-rom-builtin` is a character ROM for the `stroke-rom` crates that is
//! compiled into the binary.
//!
//! Glyphs are drawn on a 4x8 unit body with y pointing up, and every printing
//! glyph ends with a pen-up move that advances the cursor 6 units. It covers
//! digits, upper-case letters, the hex letters `a`-`f`, common punctuation,
//! line feed and carriage return, and two marker symbols at `0x80`/`0x81`.
//!
//! The table is generated by `build.rs` from `data/builtin.strokes`.

use stroke_rom_core::{Glyph, GlyphSource, PackedMove};

include!(concat!(env!("OUT_DIR"), "/builtin_rom.rs"));

/// A [GlyphSource] serving the built-in ROM.
#[derive(Debug, Copy, Clone, Default)]
pub struct BuiltinRom;

impl GlyphSource for BuiltinRom {
    fn vectors(&self, code: u8) -> Glyph<'_> {
        Glyph::new(BUILTIN_ROM[code as usize])
    }
}
