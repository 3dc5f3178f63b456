use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::app::View;
use crate::config::{Difficulty, Theme, LEADERBOARD_ROWS};
use crate::game::DeathReason;
use crate::score::ScoreEntry;

const POPUP_WIDTH: u16 = 34;

/// Draws the difficulty selector and leaderboard as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, view: &View<'_>, theme: &Theme) {
    let mut lines = vec![
        Line::from("SNAKE").style(
            Style::default()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    for difficulty in Difficulty::ALL {
        let selected = difficulty == view.difficulty;
        let label = format!(
            "{} {:<6} {:>2} tps",
            if selected { '>' } else { ' ' },
            difficulty.label(),
            difficulty.ticks_per_second()
        );
        let style = if selected {
            Style::default()
                .fg(theme.menu_highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(label).style(style));
    }

    lines.push(Line::from(""));
    lines.extend(leaderboard_lines(view.leaderboard, view.leaderboard_enabled));
    lines.push(Line::from(""));
    lines.push(
        Line::from("↑/↓ choose · Enter start · Esc quit")
            .style(Style::default().fg(theme.menu_footer)),
    );

    render_popup(frame, area, " start ", lines);
}

/// Draws the game-over popup with the name field when submission is possible.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &View<'_>,
    name: &str,
    submitted: bool,
    theme: &Theme,
) {
    let snapshot = &view.snapshot;
    let mut lines = vec![
        Line::from("GAME OVER").style(
            Style::default()
                .fg(theme.food)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Score: {}", snapshot.score)),
        Line::from(format!("Length: {}", snapshot.positions.len())),
        Line::from(death_reason_text(snapshot.death_reason)),
        Line::from(""),
    ];

    let footer = if !view.leaderboard_enabled {
        "Enter menu · Esc menu"
    } else if submitted {
        lines.extend(leaderboard_lines(view.leaderboard, true));
        lines.push(Line::from(""));
        "Enter play again"
    } else {
        lines.push(
            Line::from(format!("Name: {name}_")).style(Style::default().fg(theme.menu_highlight)),
        );
        lines.push(Line::from(""));
        "Enter submit · Esc skip"
    };
    lines.push(Line::from(footer).style(Style::default().fg(theme.menu_footer)));

    render_popup(frame, area, " game over ", lines);
}

fn death_reason_text(reason: Option<DeathReason>) -> &'static str {
    match reason {
        Some(DeathReason::WallCollision) => "Cause: hit wall",
        Some(DeathReason::SelfCollision) => "Cause: hit yourself",
        Some(DeathReason::BoardFilled) => "Board filled!",
        None => "",
    }
}

fn leaderboard_lines(entries: &[ScoreEntry], enabled: bool) -> Vec<Line<'static>> {
    if !enabled {
        return vec![Line::from("leaderboard offline")];
    }
    if entries.is_empty() {
        return vec![Line::from("no scores yet")];
    }

    entries
        .iter()
        .take(LEADERBOARD_ROWS)
        .enumerate()
        .map(|(rank, entry)| {
            Line::from(format!(
                "{:>2}. {:<16} {:>5}",
                rank + 1,
                entry.name,
                entry.score
            ))
        })
        .collect()
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &'static str, lines: Vec<Line<'static>>) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = centered_rect(area, POPUP_WIDTH, height);
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title)),
        popup,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
