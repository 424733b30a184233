//! Grid Snake - arcade Snake on a toroidal pixel grid
//!
//! This library provides:
//! - Core game logic (game module): pixel-cell grid, target-length snake,
//!   per-tick engine with an injected randomness source
//! - Key-event mapping (input module)
//! - Terminal rendering (render module)
//! - Session statistics (metrics module)
//! - The fixed-rate game loop (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
