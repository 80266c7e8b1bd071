//! Keyboard and terminal event handling.
//!
//! Events are decoded into [`Action`]s, which are the only way the
//! application state changes:
//! - `j` or `Down`: scroll forward one position
//! - `k` or `Up`: scroll backward one position
//! - `q` or `Ctrl+C`: quit
//! - terminal resize: store the new dimensions
//!
//! Keybindings are fixed.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::model::AppState;
use crate::ui::sequence_panel_capacity;

/// Actions that can be triggered by terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action (event not recognized)
    None,
    /// Quit the application
    Quit,
    /// Move the window forward one position
    ScrollDown,
    /// Move the window back one position
    ScrollUp,
    /// Terminal resized to (width, height)
    Resize(u16, u16),
}

/// Blocks until the next terminal event arrives.
pub fn next_event() -> io::Result<Event> {
    event::read()
}

/// Converts a crossterm event to an Action.
pub fn handle_event(event: Event) -> Action {
    match event {
        Event::Key(key_event) => handle_key_event(key_event),
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Handles a key event.
fn handle_key_event(key: KeyEvent) -> Action {
    // Some platforms also report key releases
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }

    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    // Alt+j, Ctrl+k and the like are not bindings
    if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
        return Action::None;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        _ => Action::None,
    }
}

/// Applies an action to the application state.
///
/// Returns `true` if the application should continue, `false` if it should quit.
pub fn apply_action(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::None => {}
        Action::Quit => {
            state.quit();
        }
        Action::ScrollDown => {
            state.scroll_down();
        }
        Action::ScrollUp => {
            state.scroll_up();
        }
        Action::Resize(width, height) => {
            state.resize(width, height, sequence_panel_capacity(width, height));
        }
    }

    if action != Action::None {
        debug!(?action, cursor = state.view.cursor, "applied action");
    }

    state.is_running()
}
