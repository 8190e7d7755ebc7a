use std::time::Duration;

use anyhow::Result;

use crate::gol::Grid;

pub mod curses;

pub trait Renderer {
    /// Drawable area in cells as `(columns, rows)`.
    fn size(&self) -> (usize, usize);
    fn draw(&mut self, grid: &Grid, generation: u64) -> Result<()>;
    /// Blocks for `delay`. Returns false once the user asked to quit.
    fn wait(&mut self, delay: Duration) -> bool;
}
