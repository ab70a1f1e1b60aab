//! Walks a raster in block-sized steps and encodes each block into a cell.
use std::ops::Deref;

use image::{imageops, GrayImage, ImageBuffer, Luma, Rgba};

use crate::{
    codec::{encode_block, CodecConfig, TRANSPARENT},
    style::{Segment, StyledCellRun},
};

/// Anything the driver can sample pixels from.
pub trait PixelSource {
    fn dimensions(&self) -> (u32, u32);

    /// The pixel at `(x, y)`; only called for in-bounds coordinates.
    fn pixel(&self, x: u32, y: u32) -> Rgba<u8>;
}

impl<C: Deref<Target = [u8]>> PixelSource for ImageBuffer<Rgba<u8>, C> {
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.get_pixel(x, y)
    }
}

/// Gray masks read as opaque gray pixels.
impl<C: Deref<Target = [u8]>> PixelSource for ImageBuffer<Luma<u8>, C> {
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        let Luma([l]) = *self.get_pixel(x, y);
        Rgba([l, l, l, 255])
    }
}

/// Renders a raster as one cell per block.
///
/// The raster is padded up to whole blocks; padding reads as transparent, so
/// partial blocks at the right and bottom edges keep their real pixels.
pub fn render<P: PixelSource + ?Sized>(source: &P, config: &CodecConfig) -> StyledCellRun {
    let (width, height) = source.dimensions();
    let (bw, bh) = (config.geometry.width(), config.geometry.height());
    let columns = width.div_ceil(bw);
    let rows = height.div_ceil(bh);
    log::debug!(
        "encoding {width}x{height} raster as {columns}x{rows} {:?} cells",
        config.geometry
    );

    let mut block = Vec::with_capacity(config.geometry.cells());
    let mut out = Vec::with_capacity(rows as usize);
    for row in 0..rows {
        let mut cells = Vec::with_capacity(columns as usize);
        for column in 0..columns {
            block.clear();
            for dy in 0..bh {
                for dx in 0..bw {
                    let (x, y) = (column * bw + dx, row * bh + dy);
                    block.push(if x < width && y < height {
                        source.pixel(x, y)
                    } else {
                        TRANSPARENT
                    });
                }
            }
            let code = encode_block(&block, config);
            cells.push(Segment::new(code.ch.to_string(), code.style));
        }
        out.push(cells);
    }
    StyledCellRun::from_rows(out)
}

/// Quarter-turn rotations applied to a text mask before encoding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    None,
    /// 90° clockwise
    Quarter,
    Half,
    /// 270° clockwise
    ThreeQuarter,
}

impl Rotation {
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(Rotation::None),
            90 => Some(Rotation::Quarter),
            180 => Some(Rotation::Half),
            270 => Some(Rotation::ThreeQuarter),
            _ => None,
        }
    }

    pub fn apply(self, mask: GrayImage) -> GrayImage {
        match self {
            Rotation::None => mask,
            Rotation::Quarter => imageops::rotate90(&mask),
            Rotation::Half => imageops::rotate180(&mask),
            Rotation::ThreeQuarter => imageops::rotate270(&mask),
        }
    }
}

/// Turns text into a coverage mask; supplied by the host.
pub trait TextRasterizer {
    /// Renders `text` white-on-black into a mask sized to its bounding box.
    fn rasterize(&self, text: &str) -> GrayImage;
}

/// Maps every mask value above `weight` to 255 and the rest to 0.
pub fn threshold_mask(mask: &GrayImage, weight: u8) -> GrayImage {
    let mut out = mask.clone();
    for Luma([l]) in out.pixels_mut() {
        *l = if *l > weight { 255 } else { 0 };
    }
    out
}

/// Rasterizes, rotates and thresholds `text`, then renders it like an image.
pub fn render_text<R: TextRasterizer + ?Sized>(
    rasterizer: &R,
    text: &str,
    config: &CodecConfig,
    rotation: Rotation,
) -> StyledCellRun {
    let mask = rotation.apply(rasterizer.rasterize(text));
    render(&threshold_mask(&mask, config.weight), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{codec::Geometry, style::Color};
    use image::RgbaImage;
    use pretty_assertions::assert_eq;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn pads_partial_blocks() {
        // 3x4 white image: sextant grid is 2 columns by 2 rows
        let img = RgbaImage::from_pixel(3, 4, WHITE);
        let run = render(&img, &CodecConfig::sextant());
        assert_eq!(run.height(), 2);
        assert_eq!(run.width(), 2);
        assert_eq!(run.to_plain_lines(), vec!["█▌", "\u{1fb02}\u{1fb00}"]);
        let edge = &run.rows()[1][1];
        assert_eq!(edge.style.fg, Color::Rgb(255, 255, 255));
        assert_eq!(edge.style.bg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn empty_raster_renders_nothing() {
        let img = RgbaImage::new(0, 0);
        let run = render(&img, &CodecConfig::octant());
        assert_eq!(run.height(), 0);
    }

    #[test]
    fn gray_masks_are_opaque() {
        let mut mask = GrayImage::new(2, 2);
        mask.put_pixel(0, 0, Luma([255]));
        mask.put_pixel(1, 1, Luma([255]));
        let run = render(&mask, &CodecConfig::quadrant());
        assert_eq!(run.to_plain_lines(), vec!["▚"]);
    }

    #[test]
    fn rotation_changes_block_grid() {
        let mask = GrayImage::from_pixel(4, 2, Luma([255]));
        assert_eq!(Rotation::Quarter.apply(mask.clone()).dimensions(), (2, 4));
        assert_eq!(Rotation::from_degrees(-90), Some(Rotation::ThreeQuarter));
        assert_eq!(Rotation::from_degrees(45), None);
    }

    struct Bar;

    impl TextRasterizer for Bar {
        fn rasterize(&self, text: &str) -> GrayImage {
            // one lit column per character, two pixels tall
            let width = text.chars().count() as u32 * 2;
            GrayImage::from_fn(width, 2, |x, _| Luma([if x % 2 == 0 { 200 } else { 0 }]))
        }
    }

    #[test]
    fn text_masks_render_like_images() {
        let config = CodecConfig::new(Geometry::Quadrant);
        let run = render_text(&Bar, "ab", &config, Rotation::None);
        assert_eq!(run.to_plain_lines(), vec!["▌▌"]);
        let fg = run.rows()[0][0].style.fg;
        assert_eq!(fg, Color::Rgb(255, 255, 255));
        let turned = render_text(&Bar, "ab", &config, Rotation::Quarter);
        assert_eq!(turned.to_plain_lines(), vec!["▀", "▀"]);
    }

    #[test]
    fn threshold_is_strict() {
        let mask = GrayImage::from_fn(3, 1, |x, _| Luma([[99, 100, 101][x as usize]]));
        let out = threshold_mask(&mask, 100);
        assert_eq!(out.as_raw(), &vec![0, 0, 255]);
    }
}
