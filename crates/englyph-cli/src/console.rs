use std::fmt::{self, Write};

use englyph::{Cell, CellTarget, Color, Style, StyledCellRun};

/// Collects cells and turns them into a truecolor ANSI string.
pub struct ConsoleRenderer {
    lines: Vec<Vec<Cell>>,
    cur: usize,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
            cur: 0,
        }
    }

    pub fn into_ansi_string(self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        for (li, line) in self.lines.iter().enumerate() {
            if li > 0 {
                out.push('\n');
            }
            let mut current = Style::default();
            for cell in line {
                if cell.style != current {
                    push_sgr(&mut out, &cell.style)?;
                    current = cell.style;
                }
                out.push(cell.ch);
            }
            if current != Style::default() {
                out.push_str("\x1B[0m");
            }
        }
        Ok(out)
    }
}

/// Resets, then sets every attribute of `style`.
fn push_sgr(out: &mut String, style: &Style) -> fmt::Result {
    out.push_str("\x1B[0");
    for (on, code) in [
        (style.bold, "1"),
        (style.italic, "3"),
        (style.underline, "4"),
        (style.double_underline, "21"),
        (style.strike, "9"),
        (style.overline, "53"),
    ] {
        if on {
            write!(out, ";{code}")?;
        }
    }
    if let Color::Rgb(r, g, b) = style.fg {
        write!(out, ";38;2;{r};{g};{b}")?;
    }
    if let Color::Rgb(r, g, b) = style.bg {
        write!(out, ";48;2;{r};{g};{b}")?;
    }
    out.push('m');
    Ok(())
}

impl CellTarget for ConsoleRenderer {
    type Error = fmt::Error;
    fn draw(&mut self, cell: Cell) -> Result<(), Self::Error> {
        if self.cur >= self.lines.len() {
            self.lines.push(Vec::new());
        }
        self.lines[self.cur].push(cell);
        Ok(())
    }
    fn next_line(&mut self) -> Result<(), Self::Error> {
        self.cur += 1;
        if self.cur >= self.lines.len() {
            self.lines.push(Vec::new());
        }
        Ok(())
    }
}

/// Convenience: render a run into an ANSI colored String.
pub fn render_to_ansi(run: &StyledCellRun) -> Result<String, fmt::Error> {
    let mut renderer = ConsoleRenderer::new();
    run.render_to(&mut renderer)?;
    renderer.into_ansi_string()
}
