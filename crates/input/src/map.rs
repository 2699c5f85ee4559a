//! Key mapping from terminal events to session actions.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to session actions.
///
/// Only bare lowercase letters act; Ctrl or Alt chords and capitals map to
/// nothing.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match c {
        // Movement
        'w' => Some(Action::StepForward),
        's' => Some(Action::StepBackward),
        'a' => Some(Action::StrafeLeft),
        'd' => Some(Action::StrafeRight),

        // Rotation
        'e' => Some(Action::TurnPositive),
        'q' => Some(Action::TurnNegative),

        // View
        'm' => Some(Action::ToggleMinimap),
        'v' => Some(Action::CycleFillMode),

        _ => None,
    }
}

/// Check if key should end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
