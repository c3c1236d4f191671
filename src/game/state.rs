use super::direction::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell in `direction`, wrapping around a `grid_size` torus
    pub fn stepped(&self, direction: Direction, grid_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x + dx).rem_euclid(grid_size),
            y: (self.y + dy).rem_euclid(grid_size),
        }
    }

    pub fn is_within(&self, grid_size: i32) -> bool {
        (0..grid_size).contains(&self.x) && (0..grid_size).contains(&self.y)
    }
}

/// The snake, head first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Position>,
}

impl Snake {
    /// Create a snake from its segments, head first
    ///
    /// # Panics
    /// Panics if `body` is empty.
    pub fn new(body: Vec<Position>) -> Self {
        assert!(!body.is_empty(), "snake needs at least a head");
        Self { body }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// True if any segment, head and tail included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Push a new head; the tail is kept when `grow` is set
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);
        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a snake built through [`Snake::new`]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Whether ticks still move the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Over,
}

/// Complete game state, as read by the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    pub food: Position,
    pub game_over: bool,
}

impl GameState {
    pub fn new(snake: Snake, direction: Direction, food: Position) -> Self {
        Self {
            snake,
            direction,
            food,
            game_over: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::Over
        } else {
            GamePhase::Running
        }
    }
}
