//! Torus Snake - a terminal Snake game on a wrapping grid
//!
//! This library provides:
//! - Core game logic (game module)
//! - Key mapping (input module)
//! - TUI rendering (render module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;
