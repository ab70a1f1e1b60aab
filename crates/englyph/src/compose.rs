//! Supercell layout: lays each character's glyph into a fixed-height box
//! and concatenates the boxes left to right.
use std::collections::HashMap;

use crate::{
    error::Result,
    face::{row_width, CharacterGlyph, FaceMetrics, GlyphFace, HAlign, VAlign},
    style::{Segment, Style, StyledCellRun},
};

/// The token that precedes the first character of every composition.
const START_TOKEN: char = ' ';

/// Composes `text` in a single style.
pub fn compose(face: &GlyphFace, text: &str, style: Style) -> Result<StyledCellRun> {
    compose_spans(face, &[Segment::new(text, style)])
}

/// Composes styled spans; each output row holds one segment per span.
///
/// Spacing decisions see across span boundaries, so splitting a word into
/// differently styled spans does not change its layout.
pub fn compose_spans(face: &GlyphFace, spans: &[Segment]) -> Result<StyledCellRun> {
    let metrics = face.metrics()?;
    let characters = face.characters()?;
    let decorations = face.decoration_rows();

    let mut layout = Layout {
        face,
        metrics,
        characters,
        prev: START_TOKEN,
    };
    let mut rows: Vec<Vec<Segment>> = vec![Vec::with_capacity(spans.len()); metrics.lines];
    for span in spans {
        let stack = layout.run(&span.text, span.style.bold);
        debug_assert_eq!(stack.len(), metrics.lines, "too many rows in glyph stack");
        for (row, text) in stack.into_iter().enumerate() {
            let style = span.style.confined_to_row(row, decorations);
            rows[row].push(Segment::new(text, style));
        }
    }
    debug_assert_eq!(rows.len(), metrics.lines);
    Ok(StyledCellRun::from_rows(rows))
}

impl GlyphFace {
    pub fn compose(&self, text: &str, style: Style) -> Result<StyledCellRun> {
        compose(self, text, style)
    }
}

struct Layout<'a> {
    face: &'a GlyphFace,
    metrics: FaceMetrics,
    characters: &'a HashMap<char, CharacterGlyph>,
    prev: char,
}

/// One glyph positioned inside its supercell.
struct Supercell<'a> {
    rows: &'a [String],
    width: usize,
    height: usize,
    left: i64,
    right: i64,
    top: i64,
}

impl Layout<'_> {
    fn run(&mut self, text: &str, bold: bool) -> Vec<String> {
        let mut lines = vec![String::new(); self.metrics.lines];
        for ch in text.chars() {
            let synthetic;
            let entry = match self.characters.get(&ch) {
                Some(entry) => entry,
                None => {
                    synthetic = CharacterGlyph::synthetic(ch);
                    &synthetic
                }
            };
            self.place(ch, entry, bold).append_to(&mut lines);
            self.prev = ch;
        }
        lines
    }

    fn place<'g>(&self, ch: char, entry: &'g CharacterGlyph, bold: bool) -> Supercell<'g> {
        let m = &self.metrics;
        let tracking = entry.tracking.unwrap_or(m.tracking);
        let monospace = entry.monospace.unwrap_or(m.monospace);
        let align = entry.align.unwrap_or(m.align);
        let rows = entry.glyph.select(bold);
        let widest = rows.iter().map(|r| row_width(r)).max().unwrap_or(0);
        let width = entry.columns.unwrap_or(m.columns).max(widest);
        let height = entry.lines.unwrap_or(m.lines);

        let (mut left, mut right) = if monospace {
            horizontal_pads(
                align.horizontal,
                m.columns as i64 - width as i64,
                self.prev == START_TOKEN,
            )
        } else {
            (0, 0)
        };

        if tracking > 0.0 && !self.face.is_adjacent_pair(self.prev, ch) {
            let wedge = self.wedge(ch, entry, tracking);
            if wedge > 0 {
                match align.horizontal {
                    HAlign::Left => right += wedge,
                    HAlign::Right | HAlign::Center => left += wedge,
                }
            }
        }

        let slack = m.lines as i64 - height as i64;
        let top = if slack == 0 {
            0
        } else {
            match align.vertical {
                VAlign::Top => 0,
                VAlign::Bottom => slack,
                VAlign::Center => slack - slack.div_euclid(2),
            }
        };

        Supercell {
            rows,
            width,
            height,
            left,
            right,
            top,
        }
    }

    /// Extra columns between the previous glyph and this one.
    fn wedge(&self, ch: char, entry: &CharacterGlyph, tracking: f64) -> i64 {
        let last = self.characters.get(&self.prev);
        let last_kerning = last.map_or(true, CharacterGlyph::kerning);
        let last_width = last
            .and_then(|g| g.columns)
            .unwrap_or(self.metrics.columns);
        let mut wedge = if last_kerning && entry.kerning() {
            tracking.ceil() as i64
        } else {
            (tracking - last_width as f64).ceil() as i64
        };
        if self.face.is_antiadjacent_pair(self.prev, ch) {
            wedge += 1;
        }
        wedge
    }
}

/// Left/right padding for a glyph `slack` columns narrower than the box.
///
/// Centered glyphs put the odd column on the left after a space and on the
/// right otherwise.
fn horizontal_pads(align: HAlign, slack: i64, after_space: bool) -> (i64, i64) {
    match align {
        HAlign::Left => (0, slack),
        HAlign::Right => (slack, 0),
        HAlign::Center => {
            let floor = slack.div_euclid(2);
            let ceil = slack - floor;
            if after_space {
                (ceil, floor)
            } else {
                (floor, ceil)
            }
        }
    }
}

impl Supercell<'_> {
    fn append_to(&self, lines: &mut [String]) {
        let left = " ".repeat(self.left.max(0) as usize);
        let right = " ".repeat(self.right.max(0) as usize);
        for (row, line) in lines.iter_mut().enumerate() {
            let index = row as i64 - self.top;
            let datum = (0..self.height as i64)
                .contains(&index)
                .then(|| self.rows.get(index as usize))
                .flatten();
            line.push_str(&left);
            match datum {
                Some(text) => {
                    line.push_str(text);
                    let fill = self.width.saturating_sub(row_width(text));
                    line.push_str(&" ".repeat(fill));
                }
                None => line.push_str(&" ".repeat(self.width)),
            }
            line.push_str(&right);
        }
    }
}
