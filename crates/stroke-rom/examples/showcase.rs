use std::fs;
use std::path::Path;

use stroke_rom::{
    BuiltinRom, CatalogOptions, DocumentOptions, save_catalog, save_document,
    save_glyph_documents,
};

const BANNER: &[u8] = b"HP1345A\n\r(AND WARGAMES)\r\n\rTESTING MORE\n\r0123456789 abcdef";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out = Path::new("showcase");
    fs::create_dir_all(out)?;

    let banner = DocumentOptions {
        scale: 2.0,
        offset: 0,
        border: 4,
        add_grid: true,
        draw_shadow: true,
        thickness: 2.0,
        color: "#ff0000".to_owned(),
        ..DocumentOptions::default()
    };
    let (width, height) = save_document(&out.join("banner.svg"), &BuiltinRom, BANNER, &banner)?;
    println!("Wrote showcase/banner.svg ({width} x {height})");

    let glyph = DocumentOptions {
        offset: 5,
        ..DocumentOptions::calibration()
    };
    let catalog = CatalogOptions::default();
    let written = save_glyph_documents(out, &BuiltinRom, &glyph, &catalog.link_prefix)?;
    println!("Wrote {} glyph documents", written.len());

    save_catalog(&out.join("catalog.svg"), &BuiltinRom, &catalog)?;
    println!("Wrote showcase/catalog.svg");

    Ok(())
}
