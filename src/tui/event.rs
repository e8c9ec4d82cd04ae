//! Event handling for the timer window.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::WorkTimerError;
use crate::timer::{Clock, RecordStore};
use crate::tui::app::App;

/// Button pressed by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Close the window.
    Quit,
    /// Start/stop button.
    Toggle,
    /// Reset button.
    Reset,
    /// Increment button.
    Increase,
    /// Decrement button.
    Decrease,
}

/// Wait up to `timeout` for a terminal event.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<C: Clock, S: RecordStore>(
    app: &mut App<'_, C, S>,
    timeout: Duration,
) -> Result<Option<Action>, WorkTimerError> {
    if event::poll(timeout)
        .map_err(|e| WorkTimerError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| WorkTimerError::Terminal(format!("Event read failed: {e}")))?
        {
            return Ok(handle_key(app, key));
        }
    }

    Ok(None)
}

/// Map a key press onto an action, editing the entry field in place.
pub fn handle_key<C: Clock, S: RecordStore>(
    app: &mut App<'_, C, S>,
    key: KeyEvent,
) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ' | 's') | KeyCode::Enter => Some(Action::Toggle),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('+' | '=') => Some(Action::Increase),
        KeyCode::Char('-' | '_') => Some(Action::Decrease),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.push_entry(c);
            None
        }
        KeyCode::Backspace | KeyCode::Delete => {
            app.pop_entry();
            None
        }
        KeyCode::Char('?') => {
            app.show_help();
            None
        }
        _ => None,
    }
}
