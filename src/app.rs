use std::time::Duration;

use crate::config::{Difficulty, GridSize, MAX_PLAYER_NAME_LEN, SpeedPolicy};
use crate::error::SimulationError;
use crate::game::{Simulation, SimulationConfig, Snapshot};
use crate::input::{Direction, GameInput, InputMode};
use crate::score::{Leaderboard, ScoreEntry};

/// Which screen currently owns input.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Screen {
    /// Difficulty selection and leaderboard.
    Menu,
    Playing,
    /// Final score with an optional name field for submission.
    GameOver { name: String, submitted: bool },
}

/// Session-independent settings chosen on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct AppSettings {
    pub grid: GridSize,
    pub difficulty: Difficulty,
    pub accelerate: bool,
}

/// Everything a renderer needs for one frame, copied out of the app.
#[derive(Debug, Clone)]
pub struct View<'a> {
    pub snapshot: Snapshot,
    pub screen: &'a Screen,
    pub difficulty: Difficulty,
    pub leaderboard: &'a [ScoreEntry],
    pub leaderboard_enabled: bool,
    /// Best known leaderboard score, zero when nothing is loaded.
    pub high_score: u32,
}

/// Drives screens, the active simulation and the leaderboard.
pub struct App {
    screen: Screen,
    simulation: Simulation,
    settings: AppSettings,
    leaderboard: Leaderboard,
    should_quit: bool,
}

impl App {
    /// Opens on the menu with an idle board in the background.
    pub fn new(
        settings: AppSettings,
        mut leaderboard: Leaderboard,
    ) -> Result<Self, SimulationError> {
        let simulation = Simulation::new_random(SimulationConfig::centered(settings.grid))?;
        leaderboard.refresh();

        Ok(Self {
            screen: Screen::Menu,
            simulation,
            settings,
            leaderboard,
            should_quit: false,
        })
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Key interpretation for the current screen.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match self.screen {
            Screen::GameOver {
                submitted: false, ..
            } if self.leaderboard.is_enabled() => InputMode::TextEntry,
            _ => InputMode::Play,
        }
    }

    /// Delay before the next tick, given the current score.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        SpeedPolicy {
            difficulty: self.settings.difficulty,
            accelerate: self.settings.accelerate,
        }
        .tick_interval(self.simulation.score())
    }

    /// Applies one input to the current screen.
    pub fn handle_input(&mut self, input: GameInput) -> Result<(), SimulationError> {
        if input == GameInput::Interrupt {
            self.should_quit = true;
            return Ok(());
        }

        match &mut self.screen {
            Screen::Menu => match input {
                GameInput::Direction(Direction::Up | Direction::Left) => {
                    self.settings.difficulty = self.settings.difficulty.previous();
                }
                GameInput::Direction(Direction::Down | Direction::Right) => {
                    self.settings.difficulty = self.settings.difficulty.next();
                }
                GameInput::Confirm => self.start_session()?,
                GameInput::Quit => self.should_quit = true,
                _ => {}
            },
            Screen::Playing => match input {
                GameInput::Direction(direction) => self.simulation.set_direction(direction),
                GameInput::Quit => self.return_to_menu(),
                _ => {}
            },
            Screen::GameOver { name, submitted } => match input {
                GameInput::Char(c) if !*submitted => {
                    if !c.is_control() && name.chars().count() < MAX_PLAYER_NAME_LEN {
                        name.push(c);
                    }
                }
                GameInput::Backspace if !*submitted => {
                    name.pop();
                }
                GameInput::Confirm if !*submitted && self.leaderboard.is_enabled() => {
                    let score = self.simulation.score();
                    self.leaderboard.submit(name, score);
                    *submitted = true;
                }
                GameInput::Confirm | GameInput::Quit => self.return_to_menu(),
                _ => {}
            },
        }

        Ok(())
    }

    /// Advances the running session by one tick; other screens ignore it.
    pub fn tick(&mut self) {
        if self.screen != Screen::Playing {
            return;
        }

        if let Err(error) = self.simulation.step() {
            tracing::warn!("simulation stopped: {error}");
        }

        if !self.simulation.is_alive() {
            tracing::info!(
                score = self.simulation.score(),
                ticks = self.simulation.tick_count(),
                reason = ?self.simulation.death_reason(),
                "game over"
            );
            self.screen = Screen::GameOver {
                name: String::new(),
                submitted: false,
            };
        }
    }

    /// Copies out the state for one frame.
    #[must_use]
    pub fn view(&self) -> View<'_> {
        View {
            snapshot: self.simulation.snapshot(),
            screen: &self.screen,
            difficulty: self.settings.difficulty,
            leaderboard: self.leaderboard.entries(),
            leaderboard_enabled: self.leaderboard.is_enabled(),
            high_score: self.leaderboard.top_score(),
        }
    }

    fn start_session(&mut self) -> Result<(), SimulationError> {
        self.simulation = Simulation::new_random(SimulationConfig::centered(self.settings.grid))?;
        self.screen = Screen::Playing;
        tracing::info!(
            width = self.settings.grid.width,
            height = self.settings.grid.height,
            difficulty = %self.settings.difficulty,
            accelerate = self.settings.accelerate,
            "session started"
        );
        Ok(())
    }

    fn return_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.leaderboard.refresh();
    }
}
