use std::fmt;
use std::time::Duration;

use clap::ValueEnum;
use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Square grid with `edge` cells per side.
    #[must_use]
    pub fn square(edge: u16) -> Self {
        Self {
            width: edge,
            height: edge,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::square(DEFAULT_GRID_EDGE)
    }
}

/// Difficulty presets offered on the start menu.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Simulation ticks per second for this preset.
    #[must_use]
    pub fn ticks_per_second(self) -> u64 {
        match self {
            Self::Easy => 5,
            Self::Medium => 7,
            Self::Hard => 10,
        }
    }

    /// Base interval between two ticks.
    #[must_use]
    pub fn tick_interval(self) -> Duration {
        Duration::from_millis(1000 / self.ticks_per_second())
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Next preset in menu order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    /// Previous preset in menu order, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Medium => Self::Easy,
            Self::Hard => Self::Medium,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the tick interval evolves during a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SpeedPolicy {
    pub difficulty: Difficulty,
    /// Shrink the interval as the score rises.
    pub accelerate: bool,
}

impl SpeedPolicy {
    /// Interval to wait before the next tick at the given score.
    #[must_use]
    pub fn tick_interval(self, score: u32) -> Duration {
        let base = self.difficulty.tick_interval();
        if !self.accelerate {
            return base;
        }

        let steps = u64::from(score / ACCELERATION_POINTS_PER_STEP);
        let speed_up = Duration::from_millis(steps * ACCELERATION_STEP_MS);
        let floor = Duration::from_millis(MIN_TICK_INTERVAL_MS);
        base.saturating_sub(speed_up).max(floor.min(base))
    }
}

/// Colors for every drawn element.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_eye: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub menu_title: Color,
    pub menu_highlight: Color,
    pub menu_footer: Color,
}

/// Lime snake and red food on black, the classic canvas palette.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::Rgb(50, 205, 50),
    snake_body: Color::Rgb(50, 205, 50),
    snake_eye: Color::Black,
    food: Color::Rgb(255, 0, 0),
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
    hud_score: Color::White,
    menu_title: Color::Rgb(50, 205, 50),
    menu_highlight: Color::Yellow,
    menu_footer: Color::DarkGray,
};

/// Two-column glyph for a body segment.
pub const GLYPH_SNAKE_BODY: &str = "██";

/// Two-column head glyphs, eyes on the leading side.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▀▀";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▄▄";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "●█";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "█●";

/// Two-column food glyph.
pub const GLYPH_FOOD: &str = "()";

/// Terminal columns used per grid cell.
pub const CELL_WIDTH: u16 = 2;

pub const DEFAULT_GRID_EDGE: u16 = 15;
pub const MIN_GRID_EDGE: u16 = 5;
pub const MAX_GRID_EDGE: u16 = 40;

/// Points awarded per food.
pub const SCORE_INCREMENT: u32 = 10;

/// Score-derived acceleration: every this many points...
pub const ACCELERATION_POINTS_PER_STEP: u32 = 50;
/// ...the interval shrinks by this many milliseconds...
pub const ACCELERATION_STEP_MS: u64 = 10;
/// ...but never below this floor.
pub const MIN_TICK_INTERVAL_MS: u64 = 70;

/// Frame pacing for the input poll.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Timeout applied to every score service request.
pub const SCORE_SERVICE_TIMEOUT_MS: u64 = 3_000;

/// Maximum characters accepted for a leaderboard name.
pub const MAX_PLAYER_NAME_LEN: usize = 16;

/// Leaderboard rows shown on screen.
pub const LEADERBOARD_ROWS: usize = 10;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Difficulty, GridSize, SpeedPolicy};

    #[test]
    fn presets_are_strictly_faster_in_order() {
        assert!(Difficulty::Easy.tick_interval() > Difficulty::Medium.tick_interval());
        assert!(Difficulty::Medium.tick_interval() > Difficulty::Hard.tick_interval());
        assert_eq!(Difficulty::Hard.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn menu_cycling_wraps_both_ways() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.next().previous(), difficulty);
        }
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.previous(), Difficulty::Hard);
    }

    #[test]
    fn fixed_policy_ignores_score() {
        let policy = SpeedPolicy {
            difficulty: Difficulty::Easy,
            accelerate: false,
        };
        assert_eq!(policy.tick_interval(0), policy.tick_interval(10_000));
    }

    #[test]
    fn accelerated_policy_speeds_up_per_fifty_points_down_to_floor() {
        let policy = SpeedPolicy {
            difficulty: Difficulty::Easy,
            accelerate: true,
        };

        assert_eq!(policy.tick_interval(0), Duration::from_millis(200));
        assert_eq!(policy.tick_interval(49), Duration::from_millis(200));
        assert_eq!(policy.tick_interval(50), Duration::from_millis(190));
        assert_eq!(policy.tick_interval(120), Duration::from_millis(180));
        assert_eq!(policy.tick_interval(5_000), Duration::from_millis(70));
    }

    #[test]
    fn square_grid_counts_cells() {
        assert_eq!(GridSize::square(15).total_cells(), 225);
        assert_eq!(GridSize::default(), GridSize::square(15));
    }
}
