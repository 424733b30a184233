use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::action::Direction;
use super::config::GameConfig;
use super::state::Cell;

/// Randomness seam for the engine. Injected so tests can script the exact
/// sequence of directions and item cells.
pub trait RngSource {
    /// A uniformly random travel direction.
    fn random_direction(&mut self) -> Direction;

    /// A uniformly random cell of the grid, both axes independent. The draw
    /// ignores snake occupancy on purpose: the item may land under the body,
    /// matching the original game.
    fn random_cell(&mut self, config: &GameConfig) -> Cell;
}

/// The default source, backed by a `StdRng` seeded from the OS or from an
/// explicit seed for reproducible runs.
pub struct GameRng {
    rng: StdRng,
}

impl GameRng {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RngSource for GameRng {
    fn random_direction(&mut self) -> Direction {
        Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())]
    }

    fn random_cell(&mut self, config: &GameConfig) -> Cell {
        let col = self.rng.gen_range(0..config.cols());
        let row = self.rng.gen_range(0..config.rows());
        Cell::new(col * config.cell_size, row * config.cell_size)
    }
}

/// Scripted source for tests: replays fixed sequences and panics when a
/// script runs dry.
#[cfg(test)]
pub struct ScriptedRng {
    pub directions: Vec<Direction>,
    pub cells: Vec<Cell>,
}

#[cfg(test)]
impl ScriptedRng {
    pub fn new(directions: Vec<Direction>, cells: Vec<Cell>) -> Self {
        Self { directions, cells }
    }
}

#[cfg(test)]
impl RngSource for ScriptedRng {
    fn random_direction(&mut self) -> Direction {
        if self.directions.is_empty() {
            panic!("scripted rng ran out of directions");
        }
        self.directions.remove(0)
    }

    fn random_cell(&mut self, _config: &GameConfig) -> Cell {
        if self.cells.is_empty() {
            panic!("scripted rng ran out of cells");
        }
        self.cells.remove(0)
    }
}
