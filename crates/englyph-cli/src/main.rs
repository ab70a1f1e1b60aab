use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use englyph::{
    builtin, render, CodecConfig, Color, ColorAveraging, DirSource, FaceSource, FaceStore,
    Geometry, GlyphSet, Style, ZipSource,
};
use image::imageops::{self, FilterType};

use crate::console::render_to_ansi;
mod console;

#[derive(Parser)]
#[command(name = "englyph", about = "Supercell text and block-glyph images for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Compose text with a glyph face
    Text {
        #[arg(short, long)]
        text: String,
        #[command(flatten)]
        face: FaceArgs,
        #[arg(long)]
        bold: bool,
        #[arg(long)]
        italic: bool,
        #[arg(long)]
        underline: bool,
        #[arg(long)]
        double_underline: bool,
        #[arg(long)]
        strike: bool,
        #[arg(long)]
        overline: bool,
        /// Foreground as #rrggbb
        #[arg(long, value_parser = parse_color)]
        fg: Option<Color>,
        /// Background as #rrggbb
        #[arg(long, value_parser = parse_color)]
        bg: Option<Color>,
    },
    /// Render an image with block characters
    Image {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = GeometryArg::Sextant)]
        geometry: GeometryArg,
        #[arg(long, default_value_t = CodecConfig::DEFAULT_WEIGHT)]
        weight: u8,
        /// Braille dots instead of solid blocks
        #[arg(long)]
        pips: bool,
        /// Weight colors by pixel alpha
        #[arg(long)]
        alpha_weighted: bool,
        /// Scale the image to this many cells wide
        #[arg(long)]
        columns: Option<u32>,
    },
    /// Inspect glyph face metadata
    Inspect {
        #[command(flatten)]
        face: FaceArgs,
    },
}

#[derive(clap::Args)]
struct FaceArgs {
    #[arg(long, default_value = builtin::DEFAULT_FAMILY)]
    family: String,
    #[arg(long, default_value = builtin::DEFAULT_FACE)]
    face: String,
    /// Face directory or .zip bundle; built-in faces when omitted
    #[arg(long)]
    assets: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum)]
enum GeometryArg {
    Quadrant,
    Sextant,
    Octant,
}

impl From<GeometryArg> for Geometry {
    fn from(arg: GeometryArg) -> Self {
        match arg {
            GeometryArg::Quadrant => Geometry::Quadrant,
            GeometryArg::Sextant => Geometry::Sextant,
            GeometryArg::Octant => Geometry::Octant,
        }
    }
}

fn parse_color(s: &str) -> std::result::Result<Color, String> {
    Color::parse(s).ok_or_else(|| format!("invalid color '{s}', expected #rrggbb"))
}

/// Pixel size that fills `columns` cells while keeping the aspect ratio.
fn scaled_size((w, h): (u32, u32), columns: u32, geometry: Geometry) -> Result<(u32, u32)> {
    let width = columns
        .checked_mul(geometry.width())
        .ok_or_else(|| anyhow!("{columns} columns is too wide"))?;
    let height = (u64::from(h) * u64::from(width) / u64::from(w.max(1))).max(1);
    let height = u32::try_from(height)
        .map_err(|_| anyhow!("scaled image height {height} is too large"))?;
    Ok((width, height))
}

fn open_source(assets: Option<&Path>) -> Result<Box<dyn FaceSource>> {
    Ok(match assets {
        None => Box::new(builtin::source()),
        Some(path) if path.is_dir() => Box::new(DirSource::new(path)),
        Some(path) => Box::new(
            ZipSource::open(path).with_context(|| format!("reading {}", path.display()))?,
        ),
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Cmd::Text {
            text,
            face,
            bold,
            italic,
            underline,
            double_underline,
            strike,
            overline,
            fg,
            bg,
        } => {
            let source = open_source(face.assets.as_deref())?;
            let store = FaceStore::new(source.as_ref());
            let glyphs = store.load_or_default(&face.face, &face.family)?;
            let style = Style {
                fg: fg.unwrap_or_default(),
                bg: bg.unwrap_or_default(),
                bold,
                italic,
                underline,
                double_underline,
                strike,
                overline,
            };
            let run = glyphs.compose(&text, style)?;
            println!("{}", render_to_ansi(&run)?);
        }
        Cmd::Image {
            input,
            geometry,
            weight,
            pips,
            alpha_weighted,
            columns,
        } => {
            let mut img = image::open(&input)
                .with_context(|| format!("decoding {}", input.display()))?
                .to_rgba8();
            let config = CodecConfig::new(geometry.into())
                .with_weight(weight)
                .with_glyphs(if pips { GlyphSet::Pips } else { GlyphSet::Solid })
                .with_averaging(if alpha_weighted {
                    ColorAveraging::AlphaWeighted
                } else {
                    ColorAveraging::Raw
                });
            if let Some(columns) = columns.filter(|c| *c > 0) {
                let (w, h) = img.dimensions();
                let (width, height) = scaled_size((w, h), columns, config.geometry)?;
                log::debug!("scaling {w}x{h} to {width}x{height}");
                img = imageops::resize(&img, width, height, FilterType::Triangle);
            }
            let run = render(&img, &config);
            println!("{}", render_to_ansi(&run)?);
        }
        Cmd::Inspect { face } => {
            let source = open_source(face.assets.as_deref())?;
            let store = FaceStore::new(source.as_ref());
            let loaded = store.load(&face.face, &face.family)?;
            let own = loaded.char_count();
            let fallback = loaded.fallback_name();
            let merged = store.merge_fallback(loaded, &face.family);
            println!("Glyph face: {}/{}", merged.family, merged.name);
            if let Some(version) = &merged.version {
                println!("  Version: {version}");
            }
            if let Ok(metrics) = merged.metrics() {
                println!(
                    "  Cell box: {} lines x {} columns, {} tracking, {}",
                    metrics.lines,
                    metrics.columns,
                    metrics.tracking,
                    if metrics.monospace {
                        "monospace"
                    } else {
                        "proportional"
                    }
                );
            }
            println!("  Defined characters: {own}");
            if fallback != merged.name {
                println!(
                    "  With fallback {fallback}: {} characters",
                    merged.char_count()
                );
            }
            let others = source.faces(&face.family);
            if !others.is_empty() {
                println!("  Faces in family: {}", others.join(", "));
            }
        }
    }
    Ok(())
}
