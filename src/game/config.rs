use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Configuration for one game variant.
///
/// The play field is a pixel space `width` x `height` quantized into square
/// cells of edge `cell_size`; both dimensions must be exact multiples of the
/// cell size. Built once at startup and passed by reference everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Play field width in pixels
    pub width: i32,
    /// Play field height in pixels
    pub height: i32,
    /// Edge length of one grid cell in pixels
    pub cell_size: i32,
    /// Game ticks per second
    pub tick_hz: u32,
    /// Score awarded per item eaten
    pub item_reward: u32,
    /// Draw the score/session header
    pub show_score: bool,
    /// Stop on self-collision and show the game-over screen; without this
    /// flag a collision silently starts a fresh game
    pub game_over_screen: bool,
    /// Caption drawn on the play field border
    pub caption: String,
}

impl GameConfig {
    /// The bare variant: 900x700, 12 ticks/s, no score readout, silent
    /// reset on self-collision. Score still counts items eaten.
    pub fn classic() -> Self {
        Self {
            width: 900,
            height: 700,
            cell_size: 25,
            tick_hz: 12,
            item_reward: 1,
            show_score: false,
            game_over_screen: false,
            caption: "Snake".to_string(),
        }
    }

    /// The polished variant: 1000x800, 10 ticks/s, score readout and a
    /// distinct game-over state with a restart prompt.
    pub fn deluxe() -> Self {
        Self {
            width: 1000,
            height: 800,
            cell_size: 25,
            tick_hz: 10,
            item_reward: 10,
            show_score: true,
            game_over_screen: true,
            caption: "Snake".to_string(),
        }
    }

    /// Number of grid columns.
    pub fn cols(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of grid rows.
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Check that the pixel dimensions form a proper grid.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(
            self.width > 0 && self.width % self.cell_size == 0,
            "width {} is not a positive multiple of the cell size {}",
            self.width,
            self.cell_size
        );
        ensure!(
            self.height > 0 && self.height % self.cell_size == 0,
            "height {} is not a positive multiple of the cell size {}",
            self.height,
            self.cell_size
        );
        ensure!(self.tick_hz > 0, "tick rate must be positive");
        Ok(())
    }
}
