//! Key mapping from terminal events to game actions.
//!
//! Letters are case-insensitive. Besides the arrow keys, the vim (`hjkl`) and
//! WASD clusters move and rotate.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map one key event to a game action.
///
/// Only presses count; repeats and releases are ignored so a held key never
/// fires twice. Ctrl chords are left to [`should_quit`].
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind != KeyEventKind::Press || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let action = match key.code {
        KeyCode::Left => GameAction::MoveLeft,
        KeyCode::Right => GameAction::MoveRight,
        KeyCode::Down => GameAction::SoftDrop,
        KeyCode::Up => GameAction::Rotate,
        KeyCode::Char(c) => char_action(c.to_ascii_lowercase())?,
        _ => return None,
    };
    Some(action)
}

fn char_action(c: char) -> Option<GameAction> {
    let action = match c {
        'h' | 'a' => GameAction::MoveLeft,
        'l' | 'd' => GameAction::MoveRight,
        'j' | 's' => GameAction::SoftDrop,
        'k' | 'w' => GameAction::Rotate,
        ' ' => GameAction::HardDrop,
        'p' => GameAction::TogglePause,
        'g' => GameAction::ToggleGhost,
        'r' => GameAction::Restart,
        _ => return None,
    };
    Some(action)
}

/// Q, Esc or Ctrl-C end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            c.eq_ignore_ascii_case(&'c')
        }
        KeyCode::Char(c) => c.eq_ignore_ascii_case(&'q'),
        _ => false,
    }
}
