use std::time::Duration;

use super::{direction::Direction, state::Position};

/// Side length of the square grid
pub const GRID_SIZE: i32 = 20;

pub const INITIAL_SNAKE: [Position; 1] = [Position::new(10, 10)];
pub const INITIAL_DIRECTION: Direction = Direction::Right;
pub const INITIAL_FOOD: Position = Position::new(15, 15);

/// Time between two game ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Configuration for the game
///
/// The game binary always uses [`GameConfig::default`], which is built from the
/// constants above. Other values only exist so tests can start from a
/// particular board.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Side length of the wrapping grid
    pub grid_size: i32,
    /// Snake restored on reset, head first
    pub initial_snake: Vec<Position>,
    /// Direction restored on reset
    pub initial_direction: Direction,
    /// Food position restored on reset
    pub initial_food: Position,
    /// Period of the tick timer
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            initial_snake: INITIAL_SNAKE.to_vec(),
            initial_direction: INITIAL_DIRECTION,
            initial_food: INITIAL_FOOD,
            tick_interval: TICK_INTERVAL,
        }
    }
}

impl GameConfig {
    /// Default configuration starting from a custom snake and direction
    pub fn with_start(snake: Vec<Position>, direction: Direction) -> Self {
        Self {
            initial_snake: snake,
            initial_direction: direction,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.initial_snake, vec![Position::new(10, 10)]);
        assert_eq!(config.initial_direction, Direction::Right);
        assert_eq!(config.initial_food, Position::new(15, 15));
        assert_eq!(config.tick_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_custom_start() {
        let snake = vec![Position::new(5, 5), Position::new(4, 5)];
        let config = GameConfig::with_start(snake.clone(), Direction::Up);
        assert_eq!(config.initial_snake, snake);
        assert_eq!(config.initial_direction, Direction::Up);
        assert_eq!(config.grid_size, GRID_SIZE);
    }
}
