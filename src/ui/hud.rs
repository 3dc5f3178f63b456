use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::View;
use crate::config::Theme;

const SEPARATOR: &str = " │ ";

/// Draws the single status row above the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, view: &View<'_>, theme: &Theme) {
    let snapshot = &view.snapshot;

    frame.render_widget(
        Paragraph::new(info_line(
            snapshot.score,
            snapshot.positions.len(),
            view.difficulty.label(),
            view.leaderboard_enabled.then_some(view.high_score),
            usize::from(area.width),
            theme,
        ))
        .alignment(Alignment::Center),
        area,
    );
}

/// Builds `Score | Length | Difficulty | Hi`, falling back to one-letter
/// labels when the full line does not fit.
fn info_line(
    score: u32,
    length: usize,
    difficulty: &'static str,
    best: Option<u32>,
    available_width: usize,
    theme: &Theme,
) -> Line<'static> {
    let compact = full_width(score, length, difficulty, best) > available_width;
    let (score_label, length_label, high_label) = if compact {
        ("S", "L", "H")
    } else {
        ("Score", "Length", "Hi")
    };
    let value = Style::default()
        .fg(theme.hud_score)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.menu_footer);

    let mut spans = vec![
        Span::styled(format!("{score_label}: "), muted),
        Span::styled(score.to_string(), value),
        Span::styled(SEPARATOR, muted),
        Span::styled(format!("{length_label}: "), muted),
        Span::styled(length.to_string(), value),
        Span::styled(SEPARATOR, muted),
        Span::styled(difficulty, Style::default().fg(theme.menu_title)),
    ];

    if let Some(best) = best {
        spans.push(Span::styled(SEPARATOR, muted));
        spans.push(Span::styled(format!("{high_label}: "), muted));
        spans.push(Span::styled(best.max(score).to_string(), value));
    }

    Line::from(spans)
}

fn full_width(score: u32, length: usize, difficulty: &str, best: Option<u32>) -> usize {
    let mut width = "Score: ".len()
        + score.to_string().len()
        + SEPARATOR.chars().count()
        + "Length: ".len()
        + length.to_string().len()
        + SEPARATOR.chars().count()
        + difficulty.len();

    if let Some(best) = best {
        width += SEPARATOR.chars().count() + "Hi: ".len() + best.max(score).to_string().len();
    }

    width
}
