use std::{fs, path::PathBuf};

use stroke_rom_core::{GlyphSource, StrokeTable};

/// Generate the glyph table that will be included in the crate.
fn generate_rust(rom: &StrokeTable) -> String {
    let mut out = String::new();

    out.push_str("static BUILTIN_ROM: [&[PackedMove]; 256] = [\n");

    for code in 0..=u8::MAX {
        let moves = rom.vectors(code).moves();
        if moves.is_empty() {
            out.push_str(&format!("    // {:02x}\n    &[],\n", code));
            continue;
        }

        out.push_str(&format!("    // {:02x}\n    &[\n", code));
        for m in moves {
            out.push_str(&format!(
                "        PackedMove {{ dx: {}, dy: {}, start: {} }},\n",
                m.dx, m.dy, m.start
            ));
        }
        out.push_str("    ],\n");
    }

    out.push_str("];\n");

    out
}

fn main() {
    let data = fs::read_to_string("data/builtin.strokes").unwrap();

    let rom = match StrokeTable::parse(&data) {
        Ok(rom) => rom,
        Err(err) => panic!("data/builtin.strokes: {err}"),
    };

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let out_file = out_dir.join("builtin_rom.rs");

    fs::write(out_file, generate_rust(&rom)).unwrap();

    println!("cargo:rerun-if-changed=data/builtin.strokes");
}
