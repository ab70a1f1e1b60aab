//! Declarative glyph faces.
//!
//! A face is a JSON record keyed by `(family, face)`:
//!
//! ```json
//! {
//!   "fixed lines": 3, "fixed columns": 3, "align": ["center", "bottom"],
//!   "tracking": 1, "monospace": false, "block": "basic_latin",
//!   "adjacent pairs": ["LT"], "antiadjacent pairs": ["rn"],
//!   "character": { "A": { "glyph": ["▄▀▄", "█▀█", "▀ ▀"] } }
//! }
//! ```
use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::{
    error::{GlyphError, Result},
    style::DecorationRows,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    Left,
    Right,
    Center,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    Bottom,
    Center,
}

/// Placement of a glyph inside its supercell, stored as `[horizontal, vertical]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "(HAlign, VAlign)", into = "(HAlign, VAlign)")]
pub struct Align {
    pub horizontal: HAlign,
    pub vertical: VAlign,
}

impl Align {
    pub fn new(horizontal: HAlign, vertical: VAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl From<(HAlign, VAlign)> for Align {
    fn from((horizontal, vertical): (HAlign, VAlign)) -> Self {
        Self::new(horizontal, vertical)
    }
}

impl From<Align> for (HAlign, VAlign) {
    fn from(a: Align) -> Self {
        (a.horizontal, a.vertical)
    }
}

/// The row strings of a glyph, either flat or split into weight variants.
#[derive(Clone, Debug, PartialEq)]
pub enum GlyphRows {
    Flat(Vec<String>),
    Variant {
        normal: Option<Vec<String>>,
        bold: Option<Vec<String>>,
    },
}

impl GlyphRows {
    /// Resolves to flat rows, preferring the requested weight and falling
    /// back to whichever variant exists.
    pub fn select(&self, bold: bool) -> &[String] {
        match self {
            GlyphRows::Flat(rows) => rows,
            GlyphRows::Variant { normal, bold: b } => {
                let (want, other) = if bold { (b, normal) } else { (normal, b) };
                want.as_deref().or(other.as_deref()).unwrap_or(&[])
            }
        }
    }
}

/// Per-character glyph with optional overrides of the face defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterGlyph {
    pub glyph: GlyphRows,
    pub lines: Option<usize>,
    pub columns: Option<usize>,
    pub align: Option<Align>,
    pub tracking: Option<f64>,
    pub monospace: Option<bool>,
    pub kerning: Option<bool>,
}

impl CharacterGlyph {
    pub fn new(rows: &[&str]) -> Self {
        Self {
            glyph: GlyphRows::Flat(rows.iter().map(|r| r.to_string()).collect()),
            lines: None,
            columns: None,
            align: None,
            tracking: None,
            monospace: None,
            kerning: None,
        }
    }

    /// Stand-in for a character the face does not define.
    ///
    /// Printable ASCII is boxed; anything else shows its code point in hex.
    pub fn synthetic(ch: char) -> Self {
        let code = ch as u32;
        let rows = if (33..127).contains(&code) {
            vec!["┌┬┐".to_string(), format!("├{ch}┤"), "└┴┘".to_string()]
        } else {
            let hex: Vec<char> = format!("{code:04x}").chars().collect();
            vec![
                format!("{}┬{}", hex[0], hex[1]),
                "├ ┤".to_string(),
                format!("{}┴{}", hex[2], hex[3]),
            ]
        };
        Self {
            glyph: GlyphRows::Flat(rows),
            lines: Some(3),
            columns: Some(3),
            ..Self::new(&[])
        }
    }

    pub fn kerning(&self) -> bool {
        self.kerning.unwrap_or(true)
    }
}

/// Face-level values every composition needs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FaceMetrics {
    pub lines: usize,
    pub columns: usize,
    pub align: Align,
    pub tracking: f64,
    pub monospace: bool,
}

/// A loaded glyph face. Immutable once its fallback merge is done.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphFace {
    pub name: String,
    pub family: String,
    pub version: Option<String>,
    pub fixed_lines: Option<usize>,
    pub fixed_columns: Option<usize>,
    pub align: Option<Align>,
    pub tracking: Option<f64>,
    pub monospace: Option<bool>,
    pub adjacent_pairs: HashSet<(char, char)>,
    pub antiadjacent_pairs: HashSet<(char, char)>,
    pub block: Option<String>,
    pub characters: Option<HashMap<char, CharacterGlyph>>,
    pub cap_line: Option<usize>,
    pub mean_line: Option<usize>,
    pub base_line: Option<usize>,
}

impl GlyphFace {
    pub fn new(name: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            family: family.into(),
            version: None,
            fixed_lines: None,
            fixed_columns: None,
            align: None,
            tracking: None,
            monospace: None,
            adjacent_pairs: HashSet::new(),
            antiadjacent_pairs: HashSet::new(),
            block: None,
            characters: None,
            cap_line: None,
            mean_line: None,
            base_line: None,
        }
    }

    /// Decodes a JSON face payload.
    pub fn from_bytes(family: &str, name: &str, bytes: &[u8]) -> Result<Self> {
        let raw: RawFace = serde_json::from_slice(bytes)
            .map_err(|e| GlyphError::corrupt(family, name, e.to_string()))?;
        raw.into_face(family, name)
    }

    pub fn metrics(&self) -> Result<FaceMetrics> {
        Ok(FaceMetrics {
            lines: self
                .fixed_lines
                .ok_or(GlyphError::MissingFaceData("fixed lines"))?,
            columns: self
                .fixed_columns
                .ok_or(GlyphError::MissingFaceData("fixed columns"))?,
            align: self.align.ok_or(GlyphError::MissingFaceData("align"))?,
            tracking: self
                .tracking
                .ok_or(GlyphError::MissingFaceData("tracking"))?,
            monospace: self
                .monospace
                .ok_or(GlyphError::MissingFaceData("monospace"))?,
        })
    }

    pub fn characters(&self) -> Result<&HashMap<char, CharacterGlyph>> {
        self.characters
            .as_ref()
            .ok_or(GlyphError::MissingFaceData("character"))
    }

    pub fn glyph(&self, ch: char) -> Option<&CharacterGlyph> {
        self.characters.as_ref().and_then(|c| c.get(&ch))
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyph(ch).is_some()
    }

    pub fn char_count(&self) -> usize {
        self.characters.as_ref().map_or(0, HashMap::len)
    }

    pub fn insert_glyph(&mut self, ch: char, glyph: CharacterGlyph) {
        self.characters
            .get_or_insert_with(HashMap::new)
            .insert(ch, glyph);
    }

    pub fn is_adjacent_pair(&self, prev: char, cur: char) -> bool {
        self.adjacent_pairs.contains(&(prev, cur))
    }

    pub fn is_antiadjacent_pair(&self, prev: char, cur: char) -> bool {
        self.antiadjacent_pairs.contains(&(prev, cur))
    }

    /// Name of the face that supplies missing characters.
    pub fn fallback_name(&self) -> String {
        self.block
            .as_deref()
            .unwrap_or(&self.name)
            .replace(' ', "_")
    }

    /// Adopts every character of `fallback` this face lacks.
    ///
    /// Existing entries are never replaced. Returns the number adopted.
    pub fn adopt_missing(&mut self, fallback: &GlyphFace) -> usize {
        let Some(theirs) = fallback.characters.as_ref() else {
            return 0;
        };
        let ours = self.characters.get_or_insert_with(HashMap::new);
        let mut adopted = 0;
        for (ch, glyph) in theirs {
            if !ours.contains_key(ch) {
                ours.insert(*ch, glyph.clone());
                adopted += 1;
            }
        }
        adopted
    }

    pub fn decoration_rows(&self) -> DecorationRows {
        let defaults = DecorationRows::for_height(self.fixed_lines.unwrap_or(0));
        DecorationRows {
            cap: self.cap_line.unwrap_or(defaults.cap),
            mean: self.mean_line.unwrap_or(defaults.mean),
            base: self.base_line.unwrap_or(defaults.base),
        }
    }
}

/// Width of a glyph row in terminal columns.
pub(crate) fn row_width(row: &str) -> usize {
    row.width()
}

#[derive(Deserialize)]
struct RawFace {
    version: Option<String>,
    #[serde(rename = "fixed lines")]
    fixed_lines: Option<usize>,
    #[serde(rename = "fixed columns")]
    fixed_columns: Option<usize>,
    align: Option<Align>,
    tracking: Option<f64>,
    monospace: Option<bool>,
    #[serde(rename = "adjacent pairs", default)]
    adjacent_pairs: Vec<String>,
    #[serde(rename = "antiadjacent pairs", alias = "antiadjacent", default)]
    antiadjacent_pairs: Vec<String>,
    block: Option<String>,
    character: Option<BTreeMap<String, RawCharacter>>,
    #[serde(rename = "cap line")]
    cap_line: Option<usize>,
    #[serde(rename = "mean line")]
    mean_line: Option<usize>,
    #[serde(rename = "base line")]
    base_line: Option<usize>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCharacter {
    Rows(Vec<String>),
    Entry(RawEntry),
}

#[derive(Deserialize)]
struct RawEntry {
    glyph: Option<RawGlyph>,
    normal: Option<Vec<String>>,
    bold: Option<Vec<String>>,
    lines: Option<usize>,
    columns: Option<usize>,
    align: Option<Align>,
    tracking: Option<f64>,
    monospace: Option<bool>,
    kerning: Option<bool>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawGlyph {
    Rows(Vec<String>),
    Variant {
        normal: Option<Vec<String>>,
        bold: Option<Vec<String>>,
    },
}

/// Largest tracking magnitude a face may declare, in columns.
pub const MAX_TRACKING: f64 = 64.0;

impl RawFace {
    fn into_face(self, family: &str, name: &str) -> Result<GlyphFace> {
        let check_tracking = |what: &str, tracking: Option<f64>| -> Result<()> {
            match tracking {
                Some(t) if !(-MAX_TRACKING..=MAX_TRACKING).contains(&t) => {
                    Err(GlyphError::corrupt(
                        family,
                        name,
                        format!("{what} tracking {t} is outside ±{MAX_TRACKING}"),
                    ))
                }
                _ => Ok(()),
            }
        };
        check_tracking("face", self.tracking)?;
        let pairs = |list: Vec<String>| -> Result<HashSet<(char, char)>> {
            list.iter()
                .map(|p| {
                    let mut it = p.chars();
                    match (it.next(), it.next(), it.next()) {
                        (Some(a), Some(b), None) => Ok((a, b)),
                        _ => Err(GlyphError::corrupt(
                            family,
                            name,
                            format!("pair {p:?} is not two characters"),
                        )),
                    }
                })
                .collect()
        };
        let characters = match self.character {
            Some(map) => {
                let mut out = HashMap::with_capacity(map.len());
                for (key, raw) in map {
                    let mut it = key.chars();
                    let (Some(ch), None) = (it.next(), it.next()) else {
                        return Err(GlyphError::corrupt(
                            family,
                            name,
                            format!("character key {key:?} is not a single character"),
                        ));
                    };
                    let glyph = raw.into_glyph().ok_or_else(|| {
                        GlyphError::corrupt(family, name, format!("character {key:?} has no glyph"))
                    })?;
                    check_tracking(&format!("character {key:?}"), glyph.tracking)?;
                    out.insert(ch, glyph);
                }
                Some(out)
            }
            None => None,
        };
        Ok(GlyphFace {
            name: name.to_string(),
            family: family.to_string(),
            version: self.version,
            fixed_lines: self.fixed_lines,
            fixed_columns: self.fixed_columns,
            align: self.align,
            tracking: self.tracking,
            monospace: self.monospace,
            adjacent_pairs: pairs(self.adjacent_pairs)?,
            antiadjacent_pairs: pairs(self.antiadjacent_pairs)?,
            block: self.block,
            characters,
            cap_line: self.cap_line,
            mean_line: self.mean_line,
            base_line: self.base_line,
        })
    }
}

impl RawCharacter {
    fn into_glyph(self) -> Option<CharacterGlyph> {
        let entry = match self {
            RawCharacter::Rows(rows) => {
                return Some(CharacterGlyph {
                    glyph: GlyphRows::Flat(rows),
                    ..CharacterGlyph::new(&[])
                })
            }
            RawCharacter::Entry(entry) => entry,
        };
        let glyph = match entry.glyph {
            Some(RawGlyph::Rows(rows)) => GlyphRows::Flat(rows),
            Some(RawGlyph::Variant { normal, bold }) => GlyphRows::Variant { normal, bold },
            None if entry.normal.is_some() || entry.bold.is_some() => GlyphRows::Variant {
                normal: entry.normal,
                bold: entry.bold,
            },
            None => return None,
        };
        Some(CharacterGlyph {
            glyph,
            lines: entry.lines,
            columns: entry.columns,
            align: entry.align,
            tracking: entry.tracking,
            monospace: entry.monospace,
            kerning: entry.kerning,
        })
    }
}
