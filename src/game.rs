use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GridSize, SCORE_INCREMENT};
use crate::error::SimulationError;
use crate::food::FoodSpawner;
use crate::input::{direction_change_is_valid, Direction};
use crate::snake::{Position, Snake};

/// Current high-level simulation state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Why the last session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    /// The snake filled every cell and no food could be placed.
    BoardFilled,
}

/// Outcome of one [`Simulation::step`].
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct StepResult {
    pub moved: bool,
    pub ate_food: bool,
    pub game_over: bool,
}

impl StepResult {
    const TERMINAL: Self = Self {
        moved: false,
        ate_food: false,
        game_over: true,
    };
}

/// Owned, read-only copy of the simulation for renderers.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    /// Body cells from head to tail.
    pub positions: Vec<Position>,
    pub food: Position,
    pub direction: Direction,
    pub score: u32,
    pub alive: bool,
    pub death_reason: Option<DeathReason>,
    pub grid: GridSize,
    pub tick_count: u64,
}

/// Session start parameters.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SimulationConfig {
    pub grid: GridSize,
    pub origin: Position,
    pub direction: Direction,
}

impl SimulationConfig {
    /// Starts at the grid centre heading right.
    #[must_use]
    pub fn centered(grid: GridSize) -> Self {
        Self {
            grid,
            origin: Position {
                x: i32::from(grid.width / 2),
                y: i32::from(grid.height / 2),
            },
            direction: Direction::Right,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::centered(GridSize::default())
    }
}

/// The snake state machine: one body, one food, one score.
///
/// Driven externally: `set_direction` records steering between ticks and
/// `step` advances exactly one cell.
#[derive(Debug, Clone)]
pub struct Simulation<R = StdRng> {
    snake: Snake,
    food: Position,
    direction: Direction,
    pending_direction: Direction,
    score: u32,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    tick_count: u64,
    grid: GridSize,
    spawner: FoodSpawner<R>,
}

impl Simulation<StdRng> {
    /// Creates a deterministic session for tests and reproducible runs.
    pub fn new_with_seed(config: SimulationConfig, seed: u64) -> Result<Self, SimulationError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Creates a session seeded from OS entropy.
    pub fn new_random(config: SimulationConfig) -> Result<Self, SimulationError> {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Simulation<R> {
    /// Starts a fresh session: one segment at the origin, food elsewhere.
    pub fn new(config: SimulationConfig, rng: R) -> Result<Self, SimulationError> {
        if !config.origin.is_within_bounds(config.grid) {
            return Err(SimulationError::OriginOutOfBounds {
                x: config.origin.x,
                y: config.origin.y,
            });
        }

        let mut spawner = FoodSpawner::new(rng);
        let snake = Snake::new(config.origin);
        let food = spawner.spawn(config.grid, &occupied_cells(&snake))?;

        Ok(Self::assemble(
            config.grid,
            snake,
            food,
            config.direction,
            spawner,
        ))
    }

    /// Builds a running session from explicit state.
    ///
    /// The caller is responsible for handing in a consistent layout: a
    /// non-empty, in-bounds body and food off the body.
    #[must_use]
    pub fn from_parts(
        grid: GridSize,
        snake: Snake,
        food: Position,
        direction: Direction,
        rng: R,
    ) -> Self {
        Self::assemble(grid, snake, food, direction, FoodSpawner::new(rng))
    }

    fn assemble(
        grid: GridSize,
        snake: Snake,
        food: Position,
        direction: Direction,
        spawner: FoodSpawner<R>,
    ) -> Self {
        Self {
            snake,
            food,
            direction,
            pending_direction: direction,
            score: 0,
            status: GameStatus::Running,
            death_reason: None,
            tick_count: 0,
            grid,
            spawner,
        }
    }

    /// Records a steering request for the next tick.
    ///
    /// Reversals are judged against the direction committed by the last
    /// tick, so a queued turn cannot be used to sneak in a 180°.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.status == GameStatus::GameOver {
            return;
        }
        if !direction_change_is_valid(self.direction, requested) {
            return;
        }

        self.pending_direction = requested;
    }

    /// Advances the simulation by one tick.
    ///
    /// Returns `Err(GridExhausted)` only when the snake has just filled the
    /// whole board; the session is over at that point.
    pub fn step(&mut self) -> Result<StepResult, SimulationError> {
        if self.status == GameStatus::GameOver {
            return Ok(StepResult::TERMINAL);
        }

        self.direction = self.pending_direction;
        self.tick_count += 1;

        let new_head = self.snake.head()?.step(self.direction);
        if !new_head.is_within_bounds(self.grid) {
            return Ok(self.end(DeathReason::WallCollision));
        }

        let grow = new_head == self.food;
        if self.snake.occupies(new_head, !grow) {
            return Ok(self.end(DeathReason::SelfCollision));
        }

        self.snake.advance(new_head, grow);

        if grow {
            self.score += SCORE_INCREMENT;
            match self.spawner.spawn(self.grid, &occupied_cells(&self.snake)) {
                Ok(food) => self.food = food,
                Err(error) => {
                    self.end(DeathReason::BoardFilled);
                    return Err(error);
                }
            }
        }

        Ok(StepResult {
            moved: true,
            ate_food: grow,
            game_over: false,
        })
    }

    fn end(&mut self, reason: DeathReason) -> StepResult {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        StepResult::TERMINAL
    }
}

impl<R> Simulation<R> {
    /// Returns an owned view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            positions: self.snake.segments().copied().collect(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            alive: self.is_alive(),
            death_reason: self.death_reason,
            grid: self.grid,
            tick_count: self.tick_count,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.status == GameStatus::Running
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

fn occupied_cells(snake: &Snake) -> HashSet<Position> {
    snake.segments().copied().collect()
}
