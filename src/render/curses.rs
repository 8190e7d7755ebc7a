use std::time::{Duration, Instant};

use anyhow::{ensure, Result};
use pancurses::{Input, Window};

use crate::frame::{Frame, Glyphs};
use crate::gol::Grid;

use super::Renderer;

pub struct CursesRender {
    window: Window,
    glyphs: Glyphs,
    status: bool,
}

impl CursesRender {
    pub fn new(glyphs: Glyphs, status: bool) -> Self {
        let window = pancurses::initscr();
        pancurses::noecho();
        // raw so ctrl-c arrives as input and takes the same exit as q
        pancurses::raw();
        pancurses::curs_set(0);
        window.keypad(true);
        Self {
            window,
            glyphs,
            status,
        }
    }

    /// Hands the terminal back. Must run on every exit path, see `main`.
    pub fn close(self) {
        pancurses::curs_set(1);
        pancurses::endwin();
    }
}

fn millis(d: Duration) -> i32 {
    i32::try_from(d.as_millis()).unwrap_or(i32::MAX)
}

impl Renderer for CursesRender {
    fn size(&self) -> (usize, usize) {
        let (rows, cols) = self.window.get_max_yx();
        let rows = if self.status { rows - 1 } else { rows };
        (
            usize::try_from(cols).unwrap_or(0),
            usize::try_from(rows).unwrap_or(0),
        )
    }

    fn draw(&mut self, grid: &Grid, generation: u64) -> Result<()> {
        self.window.erase();
        for (y, line) in Frame::new(grid, self.glyphs).render().iter().enumerate() {
            // writing the bottom-right cell reports ERR even though it lands
            self.window.mvaddstr(y as i32, 0, line);
        }
        if self.status {
            self.window.mvaddstr(
                grid.height() as i32,
                0,
                format!(
                    "generation {} | alive {} | q to quit",
                    generation,
                    grid.alive()
                ),
            );
        }
        ensure!(
            self.window.refresh() != pancurses::ERR,
            "failed to refresh terminal"
        );
        Ok(())
    }

    fn wait(&mut self, delay: Duration) -> bool {
        let deadline = Instant::now() + delay;
        loop {
            self.window
                .timeout(millis(deadline.saturating_duration_since(Instant::now())));
            match self.window.getch() {
                Some(Input::Character('q' | 'Q' | '\u{3}')) => return false,
                None => return true,
                Some(_) if Instant::now() >= deadline => return true,
                Some(_) => {}
            }
        }
    }
}
