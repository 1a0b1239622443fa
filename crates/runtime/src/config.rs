//! Game configuration from environment variables.
//!
//! - `TETRIS_GRAVITY_MS`: gravity interval in milliseconds (default: 500)
//! - `TETRIS_SEED`: piece sequence seed (default: random)
//! - `TETRIS_LOG_PATH`: session journal file (default: disabled)
//! - `TETRIS_CELL_WIDTH`: terminal columns per board cell (default: 2)
//!
//! Unparseable values fall back to the default.

use std::time::Duration;

use crate::types::GRAVITY_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub gravity_ms: u64,
    pub seed: Option<u64>,
    pub log_path: Option<String>,
    pub cell_width: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity_ms: GRAVITY_MS,
            seed: None,
            log_path: None,
            cell_width: 2,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same parsing as [`GameConfig::from_env`] over an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let gravity_ms = lookup("TETRIS_GRAVITY_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.gravity_ms);

        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let cell_width = lookup("TETRIS_CELL_WIDTH")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .filter(|w| (1..=4).contains(w))
            .unwrap_or(defaults.cell_width);

        Self {
            gravity_ms,
            seed,
            log_path,
            cell_width,
        }
    }

    pub fn gravity(&self) -> Duration {
        Duration::from_millis(self.gravity_ms)
    }
}
