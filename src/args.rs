use clap::Parser;
use std::{path::PathBuf, time::Duration};

/// Conway's Game of Life in the terminal, seeded from the bits of a file.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// File whose bytes seed the first generation (LSB first, row-major)
    pub input: PathBuf,
    /// Milliseconds between generations
    #[arg(short, long, default_value_t = 100)]
    pub delay: u64,
    #[arg(long, default_value_t = '#')]
    pub alive: char,
    #[arg(long, default_value_t = ' ')]
    pub dead: char,
    /// Reserve the bottom row for generation and population
    #[arg(long)]
    pub status: bool,
}

impl Args {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_defaults() -> Result<()> {
        let args = Args::try_parse_from(["life-term", "seed.bin"])?;
        assert_eq!(args.input, PathBuf::from("seed.bin"));
        assert_eq!(args.delay(), Duration::from_millis(100));
        assert_eq!(args.alive, '#');
        assert_eq!(args.dead, ' ');
        assert!(!args.status);
        Ok(())
    }

    #[test]
    fn test_overrides() -> Result<()> {
        let args = Args::try_parse_from([
            "life-term", "-d", "250", "--alive", "@", "--dead", ".", "--status", "seed.bin",
        ])?;
        assert_eq!(args.delay, 250);
        assert_eq!(args.alive, '@');
        assert_eq!(args.dead, '.');
        assert!(args.status);
        Ok(())
    }

    #[test]
    fn test_input_required() {
        assert!(Args::try_parse_from(["life-term"]).is_err());
    }

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
