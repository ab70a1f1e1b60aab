use englyph::{
    builtin, compose, encode_block, render, render_text, CodecConfig, Color, ColorAveraging,
    Geometry, GlyphSet, Rotation, Style, TextRasterizer,
};
use image::{GrayImage, Luma, Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[test]
fn left_column_is_half_block_in_every_geometry() {
    for (config, ch) in [
        (CodecConfig::quadrant(), '▌'),
        (CodecConfig::sextant(), '▌'),
        (CodecConfig::octant(), '▌'),
    ] {
        // 12 rows divide evenly into every block height
        let img = RgbaImage::from_fn(4, 12, |x, _| if x % 2 == 0 { WHITE } else { BLACK });
        let run = render(&img, &config);
        assert_eq!(run.width(), 2);
        assert_eq!(run.height(), (12 / config.geometry.height()) as usize);
        assert!(run.to_plain_lines().iter().all(|l| l.chars().all(|c| c == ch)));
    }
}

#[test]
fn padded_rows_keep_partial_blocks() {
    let img = RgbaImage::from_fn(4, 8, |x, _| if x % 2 == 0 { WHITE } else { BLACK });
    let run = render(&img, &CodecConfig::sextant());
    assert_eq!(run.height(), 3);
    // the last row has two real pixel rows over one transparent row
    assert_eq!(run.to_plain_lines(), vec!["▌▌", "▌▌", "\u{1fb04}\u{1fb04}"]);
}

#[test]
fn octant_singles_use_octant_block() {
    let mut block = [BLACK; 8];
    block[2] = WHITE;
    let code = encode_block(&block, &CodecConfig::octant());
    assert_eq!(code.offset, 0b100);
    assert_eq!(code.ch, '\u{1cd00}');
    assert_eq!(code.style.fg, Color::Rgb(255, 255, 255));
    assert_eq!(code.style.bg, Color::Rgb(0, 0, 0));
}

#[test]
fn config_loads_from_json() {
    let config: CodecConfig =
        serde_json::from_str(r#"{"geometry": "octant", "weight": 50, "glyphs": "pips"}"#)
            .unwrap();
    assert_eq!(config.geometry, Geometry::Octant);
    assert_eq!(config.weight, 50);
    assert_eq!(config.glyphs, GlyphSet::Pips);
    assert_eq!(config.averaging, ColorAveraging::Raw);
    let defaults: CodecConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults, CodecConfig::sextant());
}

/// Draws each character as a filled 2x3 box, spaces as gaps.
struct Boxes;

impl TextRasterizer for Boxes {
    fn rasterize(&self, text: &str) -> GrayImage {
        let chars: Vec<char> = text.chars().collect();
        GrayImage::from_fn(chars.len() as u32 * 2, 3, |x, _| {
            Luma([if chars[(x / 2) as usize] == ' ' { 0 } else { 180 }])
        })
    }
}

#[test]
fn rasterized_text_encodes_per_block() {
    let run = render_text(&Boxes, "a b", &CodecConfig::sextant(), Rotation::None);
    assert_eq!(run.to_plain_lines(), vec!["█ █"]);
    let turned = render_text(&Boxes, "a b", &CodecConfig::sextant(), Rotation::Half);
    assert_eq!(turned.to_plain_lines(), vec!["█ █"]);
}

#[test]
fn composed_text_survives_raster_round() {
    // compose output and codec output share one cell grid type
    let face = builtin::default_face().unwrap();
    let text = compose(&face, "A", Style::default()).unwrap();
    let img = RgbaImage::from_pixel(6, 9, WHITE);
    let pixels = render(&img, &CodecConfig::sextant());
    assert_eq!(text.height(), pixels.height());
    assert_eq!(text.width(), pixels.width());
}

proptest! {
    #[test]
    fn render_covers_every_pixel(w in 0u32..17, h in 0u32..17, octant in any::<bool>()) {
        let config = if octant { CodecConfig::octant() } else { CodecConfig::sextant() };
        let img = RgbaImage::from_pixel(w, h, WHITE);
        let run = render(&img, &config);
        prop_assert_eq!(run.height() as u32, h.div_ceil(config.geometry.height()));
        let columns = if run.height() == 0 { 0 } else { w.div_ceil(2) };
        prop_assert_eq!(run.width() as u32, columns);
    }
}
