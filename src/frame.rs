use std::ops::Deref;

use crate::gol::{CellState, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: '#',
            dead: ' ',
        }
    }
}

impl Glyphs {
    pub fn glyph(&self, cell: CellState) -> char {
        match cell {
            CellState::Alive => self.alive,
            CellState::Dead => self.dead,
        }
    }
}

/// Read-only text view of one generation.
pub struct Frame<'a> {
    grid: &'a Grid,
    glyphs: Glyphs,
}

impl<'a> Frame<'a> {
    pub fn new(grid: &'a Grid, glyphs: Glyphs) -> Self {
        Self { grid, glyphs }
    }

    /// One line per grid row, `width` glyphs each.
    pub fn render(&self) -> Vec<String> {
        self.grid
            .rows()
            .map(|row| row.iter().map(|c| self.glyphs.glyph(*c)).collect())
            .collect()
    }
}

impl Deref for Frame<'_> {
    type Target = Grid;

    fn deref(&self) -> &Self::Target {
        self.grid
    }
}
