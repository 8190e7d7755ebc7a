use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use crate::args::Args;
use crate::frame::Glyphs;
use crate::gol::Engine;
use crate::render::{curses::CursesRender, Renderer};

mod args;
mod frame;
mod gol;
mod render;

/// Draws the seeded generation, then steps and draws until the renderer
/// reports a quit. The engine itself never stops.
fn run<R: Renderer + ?Sized>(
    engine: &mut Engine,
    renderer: &mut R,
    delay: Duration,
) -> Result<()> {
    renderer.draw(engine.grid(), engine.generation())?;
    while renderer.wait(delay) {
        engine.step();
        renderer.draw(engine.grid(), engine.generation())?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let infile = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    eprintln!("reading seed {}", args.input.display());

    let glyphs = Glyphs {
        alive: args.alive,
        dead: args.dead,
    };
    let mut screen = scopeguard::guard(
        CursesRender::new(glyphs, args.status),
        CursesRender::close,
    );

    let (width, height) = screen.size();
    let mut engine = Engine::new(width, height).context("failed to create grid")?;
    engine
        .seed(BufReader::new(infile))
        .with_context(|| format!("failed to seed from {}", args.input.display()))?;

    run(&mut engine, &mut *screen, args.delay())?;
    drop(screen);

    eprintln!(
        "stopped after {} generations on a {}x{} grid, {} cells alive",
        engine.generation(),
        width,
        height,
        engine.grid().alive()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::frame::Frame;
    use crate::gol::Grid;

    /// Keeps every drawn frame and quits after `frames` draws.
    struct Recorder {
        frames: usize,
        drawn: Vec<(u64, Vec<String>)>,
        waits: Vec<Duration>,
    }

    impl Renderer for Recorder {
        fn size(&self) -> (usize, usize) {
            (4, 4)
        }
        fn draw(&mut self, grid: &Grid, generation: u64) -> Result<()> {
            self.drawn
                .push((generation, Frame::new(grid, Glyphs::default()).render()));
            Ok(())
        }
        fn wait(&mut self, delay: Duration) -> bool {
            self.waits.push(delay);
            self.drawn.len() < self.frames
        }
    }

    #[test]
    fn test_run_draws_seed_then_steps() -> Result<()> {
        let mut rec = Recorder {
            frames: 3,
            drawn: Vec::new(),
            waits: Vec::new(),
        };
        let (w, h) = rec.size();
        let mut engine = Engine::new(w, h)?;
        // row 1: .###
        engine.seed(Cursor::new([0b1110_0000u8]))?;
        run(&mut engine, &mut rec, Duration::from_millis(5))?;

        let generations: Vec<u64> = rec.drawn.iter().map(|(g, _)| *g).collect();
        assert_eq!(generations, [0, 1, 2]);
        assert_eq!(rec.drawn[0].1, ["    ", " ###", "    ", "    "]);
        assert_eq!(rec.drawn[1].1, ["  # ", "  # ", "  # ", "    "]);
        assert_eq!(rec.drawn[2].1, rec.drawn[0].1);
        assert_eq!(rec.waits, [Duration::from_millis(5); 3]);
        assert_eq!(engine.generation(), 2);
        Ok(())
    }

    #[test]
    fn test_run_quit_before_first_step() -> Result<()> {
        let mut rec = Recorder {
            frames: 1,
            drawn: Vec::new(),
            waits: Vec::new(),
        };
        let mut engine = Engine::new(2, 2)?;
        run(&mut engine, &mut rec, Duration::ZERO)?;
        assert_eq!(rec.drawn.len(), 1);
        assert_eq!(engine.generation(), 0);
        Ok(())
    }
}
