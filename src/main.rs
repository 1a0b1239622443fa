//! Terminal runner (default binary).
//!
//! Plays a single game in the current terminal and prints the final score.
//! Configuration comes from `TETRIS_*` environment variables; there are no
//! command-line flags.

use anyhow::Result;
use tokio::runtime::Runtime;

use term_tetris::runtime::{run, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let log_path = config.log_path.clone();

    let rt = Runtime::new()?;
    let outcome = rt.block_on(run(config))?;

    println!("Game Over!");
    println!("Score: {}", outcome.score);
    if let Some(path) = log_path {
        eprintln!("[term-tetris] journal written to {}", path);
    }
    Ok(())
}
