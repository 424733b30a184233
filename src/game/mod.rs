//! Core game logic: configuration, directions, state, randomness, and the
//! per-tick engine. No I/O or rendering lives here.

pub mod action;
pub mod config;
pub mod engine;
pub mod rng;
pub mod state;

pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameEngine, TickReport};
pub use rng::{GameRng, RngSource};
pub use state::{Cell, GameState, Phase, Snake};
