use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step `(dx, dy)` in grid coordinates. `y` grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// High-level input events consumed by the app driver.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Confirm,
    /// Leave the current screen.
    Quit,
    /// Ctrl-C: exit from anywhere.
    Interrupt,
    /// A printable character while a text field has focus.
    Char(char),
    Backspace,
}

/// How raw keys should be interpreted on the current screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputMode {
    /// Arrows and WASD steer, letters are commands.
    Play,
    /// Letters are typed into a text field; only arrows steer.
    TextEntry,
}

/// Maps one crossterm key event to a game input.
#[must_use]
pub fn map_key(key: KeyEvent, mode: InputMode) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Interrupt);
    }

    match key.code {
        KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Backspace if mode == InputMode::TextEntry => Some(GameInput::Backspace),
        KeyCode::Char(c) if mode == InputMode::TextEntry => Some(GameInput::Char(c)),
        KeyCode::Char(c) => map_play_char(c),
        _ => None,
    }
}

fn map_play_char(c: char) -> Option<GameInput> {
    match c.to_ascii_lowercase() {
        'w' => Some(GameInput::Direction(Direction::Up)),
        's' => Some(GameInput::Direction(Direction::Down)),
        'a' => Some(GameInput::Direction(Direction::Left)),
        'd' => Some(GameInput::Direction(Direction::Right)),
        ' ' => Some(GameInput::Confirm),
        'q' => Some(GameInput::Quit),
        _ => None,
    }
}

/// Polls crossterm for keyboard input without blocking the tick loop.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for a key and returns its mapped input.
    ///
    /// Non-key events and unmapped keys yield `Ok(None)`.
    pub fn poll_input(
        &mut self,
        timeout: Duration,
        mode: InputMode,
    ) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key(key, mode)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::{direction_change_is_valid, map_key, Direction, GameInput, InputMode};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn opposite_deltas_cancel_out() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            let (ox, oy) = direction.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Left, Direction::Right));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn arrows_and_wasd_steer_in_play_mode() {
        assert_eq!(
            map_key(press(KeyCode::Up), InputMode::Play),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('A')), InputMode::Play),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('d')), InputMode::Play),
            Some(GameInput::Direction(Direction::Right))
        );
        assert_eq!(map_key(press(KeyCode::Char('x')), InputMode::Play), None);
    }

    #[test]
    fn letters_are_typed_in_text_entry_mode() {
        assert_eq!(
            map_key(press(KeyCode::Char('w')), InputMode::TextEntry),
            Some(GameInput::Char('w'))
        );
        assert_eq!(
            map_key(press(KeyCode::Backspace), InputMode::TextEntry),
            Some(GameInput::Backspace)
        );
        assert_eq!(
            map_key(press(KeyCode::Down), InputMode::TextEntry),
            Some(GameInput::Direction(Direction::Down))
        );
    }

    #[test]
    fn ctrl_c_interrupts_in_any_mode() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, InputMode::TextEntry), Some(GameInput::Interrupt));
        assert_eq!(map_key(key, InputMode::Play), Some(GameInput::Interrupt));
    }

    #[test]
    fn key_release_is_ignored() {
        let key = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(key, InputMode::Play), None);
    }
}
