//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The engine owns the state; the terminal front end only borrows it for drawing.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::{
    GRID_SIZE, GameConfig, INITIAL_DIRECTION, INITIAL_FOOD, INITIAL_SNAKE, TICK_INTERVAL,
};
pub use direction::{Command, Direction};
pub use engine::{Applied, GameEngine, TickOutcome};
pub use state::{GamePhase, GameState, Position, Snake};
