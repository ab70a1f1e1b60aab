//! Styles and the styled cell grid shared by both rendering pipelines.
use unicode_width::UnicodeWidthStr;

use crate::{Cell, CellTarget};

/// A terminal color: an explicit RGB triple or the terminal's default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Default,
    Rgb(u8, u8, u8),
}

impl Color {
    pub fn rgb(self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Default => None,
            Color::Rgb(r, g, b) => Some((r, g, b)),
        }
    }

    /// Parses `#rrggbb` (the leading `#` is optional) or `default`.
    pub fn parse(s: &str) -> Option<Color> {
        if s.eq_ignore_ascii_case("default") {
            return Some(Color::Default);
        }
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Foreground/background colors plus text attributes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub double_underline: bool,
    pub strike: bool,
    pub overline: bool,
}

impl Style {
    pub fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn double_underline(mut self) -> Self {
        self.double_underline = true;
        self
    }

    pub fn strike(mut self) -> Self {
        self.strike = true;
        self
    }

    pub fn overline(mut self) -> Self {
        self.overline = true;
        self
    }

    /// Keeps line decorations only on the supercell row they belong to.
    ///
    /// Overline survives on the cap row, strike on the mean row and
    /// underlines on the base row. Colors, bold and italic are untouched.
    pub fn confined_to_row(self, row: usize, rows: DecorationRows) -> Self {
        Self {
            overline: self.overline && row == rows.cap,
            strike: self.strike && row == rows.mean,
            underline: self.underline && row == rows.base,
            double_underline: self.double_underline && row == rows.base,
            ..self
        }
    }
}

/// Row indices inside a supercell that carry line decorations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecorationRows {
    pub cap: usize,
    pub mean: usize,
    pub base: usize,
}

impl DecorationRows {
    /// Default placement for a face `lines` rows tall.
    pub fn for_height(lines: usize) -> Self {
        let last = lines.saturating_sub(1);
        Self {
            cap: 0,
            mean: last / 2,
            base: last,
        }
    }
}

/// A run of text sharing one style.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }

    /// Width in terminal columns.
    pub fn width(&self) -> usize {
        self.text.width()
    }
}

/// Rows of styled segments produced by the compositor and the pixel driver.
///
/// Every row of a run spans the same number of terminal columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledCellRun {
    rows: Vec<Vec<Segment>>,
}

impl StyledCellRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<Segment>>) -> Self {
        let run = Self { rows };
        debug_assert!(
            run.rows.iter().all(|r| row_width(r) == run.width()),
            "ragged styled cell run"
        );
        run
    }

    pub fn rows(&self) -> &[Vec<Segment>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Segment>> {
        self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map(|r| row_width(r)).unwrap_or(0)
    }

    /// The text of each row with styles dropped.
    pub fn to_plain_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|s| s.text.as_str()).collect())
            .collect()
    }

    /// Replays the run cell by cell into a target.
    pub fn render_to<T: CellTarget>(&self, target: &mut T) -> std::result::Result<(), T::Error> {
        target.line_width_hint(self.width());
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                target.next_line()?;
            }
            for segment in row {
                for ch in segment.text.chars() {
                    target.draw(Cell::new(ch, segment.style))?;
                }
            }
        }
        Ok(())
    }
}

fn row_width(row: &[Segment]) -> usize {
    row.iter().map(Segment::width).sum()
}
