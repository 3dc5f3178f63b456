use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::app::{App, AppSettings};
use grid_snake::config::{
    DEFAULT_GRID_EDGE, Difficulty, FRAME_INTERVAL_MS, GridSize, MAX_GRID_EDGE, MIN_GRID_EDGE,
};
use grid_snake::error::AppError;
use grid_snake::input::InputHandler;
use grid_snake::logging;
use grid_snake::renderer;
use grid_snake::score::{HttpScoreService, Leaderboard, ScoreService};
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Difficulty preselected on the start menu.
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Cells per side of the square board.
    #[arg(
        long,
        default_value_t = DEFAULT_GRID_EDGE,
        value_parser = clap::value_parser!(u16).range(i64::from(MIN_GRID_EDGE)..=i64::from(MAX_GRID_EDGE))
    )]
    grid_size: u16,

    /// Speed up as the score rises.
    #[arg(long)]
    accelerate: bool,

    /// Base URL of the high-score service; leaderboard is off when unset.
    #[arg(long, env = "SNAKE_SCORE_URL")]
    score_url: Option<String>,

    /// Where to write logs.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;
    install_panic_hook();

    let leaderboard = match cli.score_url.as_deref() {
        Some(url) => {
            tracing::info!(url, "leaderboard enabled");
            Leaderboard::new(Some(Box::new(HttpScoreService::new(url)) as Box<dyn ScoreService>))
        }
        None => Leaderboard::disabled(),
    };

    let app = App::new(
        AppSettings {
            grid: GridSize::square(cli.grid_size),
            difficulty: cli.difficulty,
            accelerate: cli.accelerate,
        },
        leaderboard,
    )?;

    let result = run(app);
    if let Err(error) = &result {
        tracing::error!("exiting with error: {error}");
    }
    result
}

fn run(mut app: App) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        let view = app.view();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &view))?;

        if let Some(game_input) = input.poll_input(frame_interval, app.input_mode())? {
            app.handle_input(game_input)?;
        }

        if last_tick.elapsed() >= app.tick_interval() {
            app.tick();
            last_tick = Instant::now();
        }
    }

    tracing::info!("quit requested");
    Ok(())
}
