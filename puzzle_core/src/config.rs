//! Configuration system.
//!
//! Loads puzzle configuration from JSON strings/files (file IO left to app).

use serde::{Deserialize, Serialize};

/// Root configuration for the puzzle application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Sub-cubes per edge. Only 3 is battle-tested; other values keep the
    /// algorithms general but are covered by property tests only.
    #[serde(default = "default_cube_count")]
    pub cube_count: usize,
    /// Fixed animation tick period in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Number of random turns a scramble queues.
    #[serde(default = "default_scramble_turns")]
    pub scramble_turns: usize,
}

fn default_cube_count() -> usize {
    3
}

fn default_tick_ms() -> u64 {
    10
}

fn default_scramble_turns() -> usize {
    50
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            cube_count: default_cube_count(),
            tick_ms: default_tick_ms(),
            scramble_turns: default_scramble_turns(),
        }
    }
}

impl PuzzleConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
