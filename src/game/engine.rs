use super::{
    config::GameConfig,
    direction::{Command, Direction},
    state::{GameState, Position, Snake},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake shifted by one cell
    Moved,
    /// The snake ate the food and grew by one segment
    Ate,
    /// The new head hit the body; the game is now over
    Collided,
    /// The game was already over, nothing changed
    Halted,
}

/// Result of [`GameEngine::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Steered,
    Ticked(TickOutcome),
    Reset,
}

/// The game engine, sole owner of the game state
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with food placement seeded from the OS
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a new game engine with reproducible food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let state = Self::initial_state(&config);
        Self { config, state, rng }
    }

    fn initial_state(config: &GameConfig) -> GameState {
        GameState::new(
            Snake::new(config.initial_snake.clone()),
            config.initial_direction,
            config.initial_food,
        )
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Single entry point used by the event loop
    pub fn apply(&mut self, command: Command) -> Applied {
        match command {
            Command::Steer(direction) => {
                self.set_direction(direction);
                Applied::Steered
            }
            Command::Tick => Applied::Ticked(self.tick()),
            Command::Reset => {
                self.reset();
                Applied::Reset
            }
        }
    }

    /// Overwrite the direction used by the next tick.
    ///
    /// Reversing into the neck is accepted; the following tick then ends the game.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction != self.state.direction {
            tracing::debug!(from = ?self.state.direction, to = ?direction, "direction changed");
        }
        self.state.direction = direction;
    }

    /// Advance the game by one step
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.game_over {
            return TickOutcome::Halted;
        }

        let new_head = self
            .state
            .snake
            .head()
            .stepped(self.state.direction, self.config.grid_size);
        tracing::trace!(x = new_head.x, y = new_head.y, "tick");

        // Food is checked before collision
        if new_head == self.state.food {
            self.state.food = self.spawn_food();
            self.state.snake.advance(new_head, true);
            tracing::debug!(
                length = self.state.snake.len(),
                food_x = self.state.food.x,
                food_y = self.state.food.y,
                "food eaten"
            );
            return TickOutcome::Ate;
        }

        if self.state.snake.occupies(new_head) {
            self.state.game_over = true;
            tracing::debug!(length = self.state.snake.len(), "game over");
            return TickOutcome::Collided;
        }

        self.state.snake.advance(new_head, false);
        TickOutcome::Moved
    }

    /// Restore the initial snake, direction and food
    pub fn reset(&mut self) {
        self.state = Self::initial_state(&self.config);
        tracing::info!("game reset");
    }

    /// Uniform cell anywhere on the grid; may land on the snake
    fn spawn_food(&mut self) -> Position {
        let x = self.rng.gen_range(0..self.config.grid_size);
        let y = self.rng.gen_range(0..self.config.grid_size);
        Position::new(x, y)
    }
}
