use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stroke_rom::{
    BuiltinRom, Config, DocumentOptions, Rom, StrokeTable, glyph_code, save_catalog,
    save_document, save_glyph_documents, unescape,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a stroke-vector character ROM as SVG")]
struct Cli {
    /// Glyph table to draw with instead of the built-in ROM (`.strokes` file)
    #[arg(long, global = true)]
    font: Option<PathBuf>,
    /// TOML file with `[document]` settings for `text` and `[catalog]`
    /// settings for `catalog`; `glyph` and `glyphs` always start from the
    /// calibration preset
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a run of text as a standalone document
    Text(TextArgs),
    /// Render one glyph with the calibration overlays
    Glyph(GlyphArgs),
    /// Write one calibration document per glyph that draws anything
    Glyphs(GlyphsArgs),
    /// Draw all 256 glyphs as a linked 16x16 table
    Catalog(CatalogArgs),
}

#[derive(Args, Debug)]
struct TextArgs {
    /// Text to draw; `\r`, `\n`, `\\` and `\xNN` are decoded
    text: String,
    /// Output file path
    #[arg(short, long)]
    output: PathBuf,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Args, Debug)]
struct GlyphArgs {
    /// Glyph code in hex, e.g. `41` or `0x41`
    code: String,
    /// Output file path
    #[arg(short, long)]
    output: PathBuf,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Args, Debug)]
struct GlyphsArgs {
    /// Directory the documents are written to
    #[arg(long)]
    out_dir: PathBuf,
    /// File name prefix, followed by the two-digit hex code
    #[arg(long, default_value = "_glyph_")]
    prefix: String,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Output file path
    #[arg(short, long)]
    output: PathBuf,
    /// Prefix of the per-glyph documents the cells link to
    #[arg(long)]
    prefix: Option<String>,
}

/// Flags that override the document settings.
#[derive(Args, Debug, Clone, Default)]
struct RenderSettings {
    #[arg(long)]
    scale: Option<f64>,
    /// Extra margin added on both axes
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<i32>,
    /// Margin around the text, in glyph units
    #[arg(long)]
    border: Option<i32>,
    /// Draw the calibration grid
    #[arg(long)]
    grid: bool,
    /// Draw the ghost trail of pen moves
    #[arg(long)]
    shadow: bool,
    #[arg(long)]
    thickness: Option<f64>,
    #[arg(long)]
    color: Option<String>,
    /// Don't mark strokes that never move with a dot
    #[arg(long)]
    no_dots: bool,
}

impl RenderSettings {
    fn apply(&self, mut options: DocumentOptions) -> DocumentOptions {
        if let Some(scale) = self.scale {
            options.scale = scale;
        }
        if let Some(offset) = self.offset {
            options.offset = offset;
        }
        if let Some(border) = self.border {
            options.border = border;
        }
        if let Some(thickness) = self.thickness {
            options.thickness = thickness;
        }
        if let Some(color) = &self.color {
            options.color = color.clone();
        }
        options.add_grid |= self.grid;
        options.draw_shadow |= self.shadow;
        if self.no_dots {
            options.degenerate_dots = false;
        }
        options
    }
}

/// Preset for single-glyph documents: calibration overlays with a wider
/// margin on the far sides.
fn glyph_preset() -> DocumentOptions {
    DocumentOptions {
        offset: 5,
        ..DocumentOptions::calibration()
    }
}

fn parse_code(text: &str) -> Result<u8> {
    let digits = text.trim_start_matches("0x").trim_start_matches("0X");
    let value = u32::from_str_radix(digits, 16)
        .with_context(|| format!("glyph code {text:?} is not hexadecimal"))?;
    Ok(glyph_code(value)?)
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = Config::from_toml(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    config
        .document
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

fn load_rom(path: Option<&Path>) -> Result<Rom> {
    let Some(path) = path else {
        return Ok(Rom::Builtin(BuiltinRom));
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read font {}", path.display()))?;
    let table = StrokeTable::parse(&text)
        .with_context(|| format!("invalid font {}", path.display()))?;
    info!(path = %path.display(), "loaded glyph table");
    Ok(Rom::Table(table))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let rom = load_rom(cli.font.as_deref())?;

    match cli.command {
        Commands::Text(args) => {
            let options = args.settings.apply(config.document);
            let (width, height) = save_document(&args.output, &rom, &unescape(&args.text), &options)?;
            println!("{width} x {height}");
        }
        Commands::Glyph(args) => {
            let code = parse_code(&args.code)?;
            let options = args.settings.apply(glyph_preset());
            let (width, height) = save_document(&args.output, &rom, &[code], &options)?;
            println!("{width} x {height}");
        }
        Commands::Glyphs(args) => {
            fs::create_dir_all(&args.out_dir)
                .with_context(|| format!("failed to create {}", args.out_dir.display()))?;
            let options = args.settings.apply(glyph_preset());
            let written = save_glyph_documents(&args.out_dir, &rom, &options, &args.prefix)?;
            println!("wrote {} glyphs to {}", written.len(), args.out_dir.display());
        }
        Commands::Catalog(args) => {
            let mut options = config.catalog;
            if let Some(prefix) = args.prefix {
                options.link_prefix = prefix;
            }
            save_catalog(&args.output, &rom, &options)?;
            println!("wrote {}", args.output.display());
        }
    }

    Ok(())
}
