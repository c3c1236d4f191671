/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the unit vector (dx, dy) for this direction; y grows downwards
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Command accepted by [`GameEngine::apply`](super::GameEngine::apply)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Overwrite the pending direction
    Steer(Direction),
    /// Advance the game by one step
    Tick,
    /// Restore the initial state
    Reset,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Steer(direction)
    }
}
