use std::{
    fmt::Display,
    ops::{Index, Not},
};

use thiserror::Error;

mod engine;

pub use engine::Engine;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}
impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}
impl Not for CellState {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }
}

/// Which of the two buffers an access targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Buffer {
    Current,
    Staging,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}
impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: usize, height: usize },
    #[error("failed to allocate cell buffers for {cells} cells")]
    Allocation { cells: usize },
}

/// Fixed-size, double-buffered cell storage.
///
/// Both buffers always hold `width * height` cells in row-major order. Which
/// one is "current" is tracked by index, so [`Grid::swap`] never copies.
#[derive(Clone, Debug)]
pub struct Grid {
    bufs: [Vec<CellState>; 2],
    current: usize,
    width: usize,
    height: usize,
}

fn alloc_buffer(cells: usize) -> Result<Vec<CellState>, GridError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(cells)
        .map_err(|_| GridError::Allocation { cells })?;
    buf.resize(cells, CellState::Dead);
    Ok(buf)
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let cells = width
            .checked_mul(height)
            .ok_or(GridError::Allocation { cells: usize::MAX })?;
        Ok(Grid {
            bufs: [alloc_buffer(cells)?, alloc_buffer(cells)?],
            current: 0,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    fn slot(&self, buffer: Buffer) -> usize {
        match buffer {
            Buffer::Current => self.current,
            Buffer::Staging => 1 - self.current,
        }
    }
    fn pt_to_index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pt {} outside {}x{} grid",
            Point { x, y },
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn get(&self, buffer: Buffer, x: usize, y: usize) -> CellState {
        self.bufs[self.slot(buffer)][self.pt_to_index(x, y)]
    }
    pub fn set(&mut self, buffer: Buffer, x: usize, y: usize, state: CellState) {
        let idx = self.pt_to_index(x, y);
        let slot = self.slot(buffer);
        self.bufs[slot][idx] = state;
    }
    pub fn fill(&mut self, buffer: Buffer, state: CellState) {
        let slot = self.slot(buffer);
        self.bufs[slot].fill(state);
    }

    /// Publishes the staging buffer as current. The old current buffer
    /// becomes the next staging target.
    pub fn swap(&mut self) {
        self.current = 1 - self.current;
    }

    /// Current generation, row-major.
    pub fn cells(&self) -> &[CellState] {
        &self.bufs[self.current]
    }
    pub(crate) fn buffer_mut(&mut self, buffer: Buffer) -> &mut [CellState] {
        let slot = self.slot(buffer);
        &mut self.bufs[slot]
    }
    pub fn rows(&self) -> std::slice::Chunks<'_, CellState> {
        self.cells().chunks(self.width)
    }
    pub fn alive(&self) -> usize {
        self.cells().iter().filter(|c| c.is_alive()).count()
    }
}

impl Index<Point> for Grid {
    type Output = CellState;
    fn index(&self, index: Point) -> &Self::Output {
        return &self.cells()[self.pt_to_index(index.x, index.y)];
    }
}
