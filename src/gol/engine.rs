use std::io::{self, Read};

use itertools::iproduct;
use thiserror::Error;

use super::{Buffer, CellState, Grid, GridError};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed bytes")]
    Io(#[from] io::Error),
}

/// Life rule: survival on 2 or 3, birth on exactly 3.
pub fn next_state(current: CellState, neighbors: usize) -> CellState {
    match (current, neighbors) {
        (CellState::Alive, 2 | 3) => CellState::Alive,
        (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}

/// Live cells around `(x, y)` in the current buffer. The 3x3 window is
/// clipped at the grid edges, never wrapped.
pub fn live_neighbors(grid: &Grid, x: usize, y: usize) -> usize {
    let (sx, fx) = (x.saturating_sub(1), (x + 1).min(grid.width() - 1));
    let (sy, fy) = (y.saturating_sub(1), (y + 1).min(grid.height() - 1));
    iproduct!(sy..=fy, sx..=fx)
        .filter(|&(ty, tx)| (tx, ty) != (x, y))
        .filter(|&(ty, tx)| grid.get(Buffer::Current, tx, ty).is_alive())
        .count()
}

pub struct Engine {
    grid: Grid,
    generation: u64,
}

impl Engine {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::new(width, height)?))
    }
    pub fn from_grid(grid: Grid) -> Self {
        Engine {
            grid,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Unpacks `reader` LSB-first into the current buffer in row-major order.
    ///
    /// Only as many bytes as the grid needs are pulled from the reader. A
    /// short stream leaves the remaining cells dead.
    pub fn seed<R: Read>(&mut self, reader: R) -> Result<(), SeedError> {
        let needed = (self.grid.len() + 7) / 8;
        self.grid.fill(Buffer::Current, CellState::Dead);
        let cells = self.grid.buffer_mut(Buffer::Current);
        for (chunk, byte) in cells.chunks_mut(8).zip(reader.bytes().take(needed)) {
            let byte = byte?;
            for (i, cell) in chunk.iter_mut().enumerate() {
                *cell = CellState::from(byte & (1 << i) != 0);
            }
        }
        self.generation = 0;
        Ok(())
    }

    /// Computes the next generation into the staging buffer, then publishes it.
    pub fn step(&mut self) -> &Grid {
        for (y, x) in iproduct!(0..self.grid.height(), 0..self.grid.width()) {
            let next = next_state(
                self.grid.get(Buffer::Current, x, y),
                live_neighbors(&self.grid, x, y),
            );
            self.grid.set(Buffer::Staging, x, y, next);
        }
        self.grid.swap();
        self.generation += 1;
        &self.grid
    }
}
