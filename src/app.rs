use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Direction, GameConfig, GameEngine, GameState, Phase, RngSource};
use crate::input::{InputMapper, KeyAction};
use crate::metrics::SessionStats;
use crate::render::Renderer;

/// The synchronous game loop: drains input, runs one engine tick, draws one
/// frame, and sleeps out the tick budget. Owns all game state.
pub struct App {
    config: GameConfig,
    engine: GameEngine,
    state: GameState,
    stats: SessionStats,
    renderer: Renderer,
    input: InputMapper,
    /// Direction requests received since the last tick, in arrival order
    pending_input: Vec<Direction>,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig, rng: Box<dyn RngSource>) -> Self {
        let mut engine = GameEngine::with_rng(config.clone(), rng);
        let state = engine.new_game();

        Self {
            renderer: Renderer::new(config.clone()),
            config,
            engine,
            state,
            stats: SessionStats::new(),
            input: InputMapper::new(),
            pending_input: Vec::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = Duration::from_millis(1000 / u64::from(self.config.tick_hz));
        let mut tick_timer = interval(tick_interval);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // One tick: update, then exactly one frame.
                _ = tick_timer.tick() => {
                    self.tick();
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.stats);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input.map_key_event(key) {
                KeyAction::Turn(direction) => {
                    // Direction keys are dead on the game-over screen.
                    if self.state.phase == Phase::Running {
                        self.pending_input.push(direction);
                    }
                }
                KeyAction::Restart => {
                    self.restart();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn tick(&mut self) {
        let inputs = std::mem::take(&mut self.pending_input);
        let report = self.engine.tick(&mut self.state, &inputs);

        if report.collided {
            self.stats.on_game_over(report.score);
            // Without a game-over screen the engine has already started a
            // fresh game in place.
            if !self.config.game_over_screen {
                self.stats.on_game_start();
            }
        }
    }

    fn restart(&mut self) {
        self.state = self.engine.new_game();
        self.stats.on_game_start();
        self.pending_input.clear();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
