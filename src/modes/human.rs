use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{Instant, interval_at};

use crate::game::{Command, GameEngine, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

type Term = Terminal<CrosstermBackend<Stderr>>;

/// Raw mode plus alternate screen, restored when dropped
struct TerminalSession {
    terminal: Term,
    active: bool,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        Ok(Self {
            terminal,
            active: true,
        })
    }

    fn restore(&mut self) -> Result<()> {
        self.active = false;
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }

    /// Restore the terminal, reporting failures
    fn leave(mut self) -> Result<()> {
        self.restore()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            if let Err(err) = self.restore() {
                tracing::warn!(error = %err, "terminal restore failed");
            }
        }
    }
}

/// The game loop's error wins over a terminal restore error
fn first_error(game: Result<()>, restore: Result<()>) -> Result<()> {
    game?;
    restore
}

pub struct HumanMode {
    engine: GameEngine,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(engine: GameEngine) -> Self {
        let renderer = Renderer::new(engine.config().grid_size);

        Self {
            engine,
            renderer,
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Play until the user quits.
    ///
    /// The key listener and the tick timer live only for the duration of this
    /// call, so running again never leaves a second listener behind.
    pub async fn run(&mut self) -> Result<()> {
        let mut session = TerminalSession::enter()?;
        tracing::info!("session started");

        self.should_quit = false;
        let result = self.run_game_loop(&mut session.terminal).await;

        let restored = session.leave();
        tracing::info!("session stopped");

        first_error(result, restored)
    }

    async fn run_game_loop(&mut self, terminal: &mut Term) -> Result<()> {
        let mut event_stream = EventStream::new();

        let period = self.engine.config().tick_interval;
        let mut tick_timer = interval_at(Instant::now() + period, period);

        self.draw(terminal)?;

        loop {
            let changed = tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                    None => {
                        self.should_quit = true;
                        false
                    }
                },

                // Game logic tick
                _ = tick_timer.tick() => self.on_tick(),

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                    false
                }
            };

            if self.should_quit {
                break;
            }

            if changed {
                self.draw(terminal)?;
            }
        }

        Ok(())
    }

    fn draw(&self, terminal: &mut Term) -> Result<()> {
        terminal
            .draw(|frame| self.renderer.render(frame, self.engine.state()))
            .context("Failed to draw frame")?;
        Ok(())
    }

    /// Returns true when the frame needs redrawing
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = self.input_handler.handle_key_event(key);
                self.handle_key_action(action)
            }
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    fn handle_key_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Steer(direction) => {
                self.engine.apply(Command::Steer(direction));
                true
            }
            // The restart action is only offered on the game over panel
            KeyAction::Restart if self.engine.state().game_over => {
                self.engine.apply(Command::Reset);
                true
            }
            KeyAction::Restart => false,
            KeyAction::Quit => {
                self.should_quit = true;
                false
            }
            KeyAction::None => false,
        }
    }

    fn on_tick(&mut self) -> bool {
        self.engine.tick() != TickOutcome::Halted
    }
}
