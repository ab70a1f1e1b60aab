//! englyph: large-type terminal text from glyph faces, and pixel art from
//! sextant, quadrant and octant block characters.

pub mod builtin;
mod codec;
mod compose;
mod error;
mod face;
mod raster;
mod store;
mod style;
pub mod tables;

pub use codec::{
    encode_block, intensity, BlockCode, CodecConfig, ColorAveraging, Geometry, GlyphSet,
    TRANSPARENT,
};
pub use compose::{compose, compose_spans};
pub use error::{GlyphError, Result};
pub use face::{
    Align, CharacterGlyph, FaceMetrics, GlyphFace, GlyphRows, HAlign, VAlign, MAX_TRACKING,
};
pub use raster::{render, render_text, threshold_mask, PixelSource, Rotation, TextRasterizer};
#[cfg(feature = "zip")]
pub use store::ZipSource;
pub use store::{DirSource, FaceCache, FaceSource, FaceStore, MemorySource};
pub use style::{Color, DecorationRows, Segment, Style, StyledCellRun};

// Test utilities
pub mod test_support;

/// One terminal cell: a character and how to paint it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    pub fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

/// Receives the cells of a rendered run, row by row.
pub trait CellTarget {
    type Error;
    fn draw(&mut self, cell: Cell) -> std::result::Result<(), Self::Error>;
    fn next_line(&mut self) -> std::result::Result<(), Self::Error>;
    fn line_width_hint(&mut self, _width: usize) {}
}
