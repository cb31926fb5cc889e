//! Headless display: a character grid held in memory.

use std::io;

use crate::constants::EMPTY_CHAR;
use crate::display::Display;

#[derive(Clone, Debug, Default)]
pub struct MemoryDisplay {
    width: u16,
    height: u16,
    cells: Vec<char>,
    /// Number of glyph draws since creation.
    pub draws: usize,
    /// Number of `present` calls since creation.
    pub frames: usize,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        MemoryDisplay::default()
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// `None` outside the grid.
    pub fn glyph_at(&self, x: u16, y: u16) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(self.index(x, y)).copied()
    }

    /// Full text of row `y`, trailing blanks included.
    pub fn row(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.glyph_at(x, y))
            .collect()
    }

    /// Count of cells currently showing `glyph`.
    pub fn count(&self, glyph: char) -> usize {
        self.cells.iter().filter(|&&c| c == glyph).count()
    }

    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl Display for MemoryDisplay {
    fn set_dimensions(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.width = width;
        self.height = height;
        self.cells = vec![EMPTY_CHAR; width as usize * height as usize];
        Ok(())
    }

    fn draw_glyph(&mut self, x: u16, y: u16, glyph: char) -> io::Result<()> {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            self.cells[i] = glyph;
        }
        self.draws += 1;
        Ok(())
    }

    /// Text running past the right edge is cut off.
    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        if y >= self.height {
            return Ok(());
        }
        for (col, ch) in (x..self.width).zip(text.chars()) {
            let i = self.index(col, y);
            self.cells[i] = ch;
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.frames += 1;
        Ok(())
    }
}
