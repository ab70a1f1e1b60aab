//! Helpers for inspecting rendered output in tests; not part of the stable API.

use std::convert::Infallible;

use crate::{Cell, CellTarget};

/// Captures rendered cells into a grid.
#[derive(Debug, Default)]
pub struct BufferTarget {
    pub lines: Vec<Vec<Cell>>,
    pub width_hint: Option<usize>,
    cur_line: usize,
}

impl BufferTarget {
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
            width_hint: None,
            cur_line: 0,
        }
    }

    /// Rows as plain strings, styles dropped.
    pub fn text(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.iter().map(|c| c.ch).collect())
            .collect()
    }
}

impl CellTarget for BufferTarget {
    type Error = Infallible;

    fn draw(&mut self, cell: Cell) -> Result<(), Self::Error> {
        if self.cur_line >= self.lines.len() {
            self.lines.push(Vec::new());
        }
        self.lines[self.cur_line].push(cell);
        Ok(())
    }

    fn next_line(&mut self) -> Result<(), Self::Error> {
        self.cur_line += 1;
        if self.cur_line >= self.lines.len() {
            self.lines.push(Vec::new());
        }
        Ok(())
    }

    fn line_width_hint(&mut self, width: usize) {
        self.width_hint = Some(width);
    }
}
