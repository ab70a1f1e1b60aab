//! Sub-cell pixel codec: one block of pixels in, one styled glyph out.
use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::{
    style::{Color, Style},
    tables::{BRAILLE_2X2, BRAILLE_2X3, BRAILLE_2X4, OCTANTS, QUADRANTS, SEXTANTS},
};

/// A fully transparent pixel; what the driver reads past the image edge.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

const SPLIT_ROUNDS: usize = 8;

/// Sub-cell layout of one terminal cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    /// 2×2
    Quadrant,
    /// 2×3
    #[default]
    Sextant,
    /// 2×4
    Octant,
}

impl Geometry {
    pub fn width(self) -> u32 {
        2
    }

    pub fn height(self) -> u32 {
        match self {
            Geometry::Quadrant => 2,
            Geometry::Sextant => 3,
            Geometry::Octant => 4,
        }
    }

    /// Number of sub-cells, i.e. bits in an offset.
    pub fn cells(self) -> usize {
        (self.width() * self.height()) as usize
    }
}

/// Output alphabet: solid block elements or Braille dots.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    #[default]
    Solid,
    Pips,
}

/// How partially transparent pixels contribute to a cell color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorAveraging {
    /// Plain mean of RGB, alpha ignored.
    #[default]
    Raw,
    /// Each pixel weighted by its alpha.
    AlphaWeighted,
}

/// Everything `encode_block` needs; there is no global codec state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct CodecConfig {
    pub geometry: Geometry,
    /// Intensity a pixel must exceed to count as set.
    pub weight: u8,
    pub glyphs: GlyphSet,
    pub averaging: ColorAveraging,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::sextant()
    }
}

impl CodecConfig {
    pub const DEFAULT_WEIGHT: u8 = 100;

    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            weight: Self::DEFAULT_WEIGHT,
            glyphs: GlyphSet::Solid,
            averaging: ColorAveraging::Raw,
        }
    }

    pub fn quadrant() -> Self {
        Self::new(Geometry::Quadrant)
    }

    pub fn sextant() -> Self {
        Self::new(Geometry::Sextant)
    }

    pub fn octant() -> Self {
        Self::new(Geometry::Octant)
    }

    pub fn with_weight(mut self, weight: u8) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn with_averaging(mut self, averaging: ColorAveraging) -> Self {
        self.averaging = averaging;
        self
    }

    /// The lookup table for this geometry and glyph set.
    pub fn table(&self) -> &'static [char] {
        match (self.glyphs, self.geometry) {
            (GlyphSet::Solid, Geometry::Quadrant) => &QUADRANTS,
            (GlyphSet::Solid, Geometry::Sextant) => &SEXTANTS,
            (GlyphSet::Solid, Geometry::Octant) => &OCTANTS,
            (GlyphSet::Pips, Geometry::Quadrant) => &BRAILLE_2X2,
            (GlyphSet::Pips, Geometry::Sextant) => &BRAILLE_2X3,
            (GlyphSet::Pips, Geometry::Octant) => &BRAILLE_2X4,
        }
    }
}

/// The encoded form of one block.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockCode {
    /// Bit `i` set means sub-cell `i` (row-major) is foreground.
    pub offset: u8,
    pub ch: char,
    pub style: Style,
}

/// Luma weighted by alpha, 0..=255.
pub fn intensity(p: Rgba<u8>) -> u8 {
    let [r, g, b, a] = p.0;
    let luma = 0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b);
    (luma * f64::from(a) / 255.0).round().clamp(0.0, 255.0) as u8
}

/// Encodes a row-major block of pixels.
///
/// `pixels` should hold `geometry.cells()` entries; missing entries read as
/// transparent and extra entries are ignored.
pub fn encode_block(pixels: &[Rgba<u8>], config: &CodecConfig) -> BlockCode {
    let cells = config.geometry.cells();
    let block: Vec<Rgba<u8>> = (0..cells)
        .map(|i| pixels.get(i).copied().unwrap_or(TRANSPARENT))
        .collect();

    let mut lit: Vec<bool> = block
        .iter()
        .map(|p| intensity(*p) > config.weight)
        .collect();
    if lit.iter().all(|set| *set) {
        // Everything cleared the threshold; recover the shape from color.
        lit = two_color_split(&block);
    }
    let fg = mean_color(&block, &lit, true, config.averaging);
    let bg = mean_color(&block, &lit, false, config.averaging);

    let offset = lit
        .iter()
        .enumerate()
        .filter(|(_, set)| **set)
        .fold(0u8, |acc, (i, _)| acc | (1 << i));

    BlockCode {
        offset,
        ch: config.table()[offset as usize],
        style: Style::new(fg.unwrap_or_default(), bg.unwrap_or_default()),
    }
}

/// Mean color of the pixels whose flag equals `want`, if there are any.
fn mean_color(
    block: &[Rgba<u8>],
    lit: &[bool],
    want: bool,
    averaging: ColorAveraging,
) -> Option<Color> {
    let members: Vec<Rgba<u8>> = block
        .iter()
        .zip(lit)
        .filter(|(_, set)| **set == want)
        .map(|(p, _)| *p)
        .collect();
    if members.is_empty() {
        return None;
    }
    let weight = |p: &Rgba<u8>| match averaging {
        ColorAveraging::Raw => 1.0,
        ColorAveraging::AlphaWeighted => f64::from(p.0[3]),
    };
    let mut total: f64 = members.iter().map(weight).sum();
    let weightless = total == 0.0;
    if weightless {
        total = members.len() as f64;
    }
    let channel = |c: usize| {
        let sum: f64 = members
            .iter()
            .map(|p| f64::from(p.0[c]) * if weightless { 1.0 } else { weight(p) })
            .sum();
        (sum / total).round().clamp(0.0, 255.0) as u8
    };
    Some(Color::Rgb(channel(0), channel(1), channel(2)))
}

/// Splits a block into two colors with a small deterministic 2-means over
/// RGBA. Returns `true` for pixels of the brighter color.
///
/// A block of one color stays entirely on the bright side.
fn two_color_split(block: &[Rgba<u8>]) -> Vec<bool> {
    let as_vec = |p: &Rgba<u8>| p.0.map(f64::from);
    let dist = |a: &[f64; 4], b: &[f64; 4]| -> f64 {
        a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
    };

    let Some(darkest) = block.iter().min_by_key(|p| intensity(**p)) else {
        return Vec::new();
    };
    let mut c0 = as_vec(darkest);
    let far = block
        .iter()
        .map(as_vec)
        .fold(None::<[f64; 4]>, |best, v| match best {
            Some(b) if dist(&b, &c0) >= dist(&v, &c0) => Some(b),
            _ => Some(v),
        });
    let Some(mut c1) = far.filter(|c| dist(c, &c0) > 0.0) else {
        return vec![true; block.len()];
    };

    let mut split = vec![false; block.len()];
    for _ in 0..SPLIT_ROUNDS {
        let next: Vec<bool> = block
            .iter()
            .map(|p| {
                let v = as_vec(p);
                dist(&v, &c1) < dist(&v, &c0)
            })
            .collect();
        let settled = next == split;
        split = next;
        if let Some(c) = centroid(block, &split, false) {
            c0 = c;
        }
        if let Some(c) = centroid(block, &split, true) {
            c1 = c;
        }
        if settled {
            break;
        }
    }

    let luma = |c: &[f64; 4]| {
        intensity(Rgba(c.map(|v| v.round().clamp(0.0, 255.0) as u8)))
    };
    if luma(&c0) > luma(&c1) {
        for set in &mut split {
            *set = !*set;
        }
    }
    split
}

fn centroid(block: &[Rgba<u8>], split: &[bool], want: bool) -> Option<[f64; 4]> {
    let mut sum = [0.0; 4];
    let mut n = 0usize;
    for (p, set) in block.iter().zip(split) {
        if *set == want {
            for (s, v) in sum.iter_mut().zip(p.0) {
                *s += f64::from(v);
            }
            n += 1;
        }
    }
    (n > 0).then(|| sum.map(|s| s / n as f64))
}
