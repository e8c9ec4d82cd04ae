//! Application state for the timer window.

use crate::timer::{parse_minutes, Clock, Direction, RecordStore, TimerController};

/// Longest accepted minutes entry, in characters.
const MAX_ENTRY_LEN: usize = 6;

/// Button label while stopped.
pub const START_LABEL: &str = "Start working";
/// Button label while running.
pub const STOP_LABEL: &str = "Call it a day";

/// Application state.
pub struct App<'a, C, S> {
    /// The controller, owned by the caller.
    timer: &'a mut TimerController<C, S>,
    /// Contents of the minutes entry field.
    pub entry: String,
    /// Transient status message to display.
    pub status: Option<String>,
    /// Whether the window should close.
    pub should_quit: bool,
}

impl<'a, C: Clock, S: RecordStore> App<'a, C, S> {
    /// Create a new app around an existing controller.
    pub fn new(timer: &'a mut TimerController<C, S>, entry: impl Into<String>) -> Self {
        Self {
            timer,
            entry: entry.into(),
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        }
    }

    /// The controller.
    pub fn timer(&self) -> &TimerController<C, S> {
        &*self.timer
    }

    /// Label of the start/stop button.
    pub fn toggle_label(&self) -> &'static str {
        if self.timer.is_running() {
            STOP_LABEL
        } else {
            START_LABEL
        }
    }

    /// Start/stop button.
    pub fn toggle(&mut self) {
        self.timer.toggle();
        self.status = None;
    }

    /// Reset button.
    pub fn reset(&mut self) {
        self.timer.reset();
        self.status = Some("Timer reset".to_string());
    }

    /// Increment/decrement buttons.
    ///
    /// Anything in the entry field that is not a positive whole number is
    /// ignored.
    pub fn adjust(&mut self, direction: Direction) {
        if let Some(minutes) = parse_minutes(&self.entry) {
            self.timer.adjust_minutes(minutes, direction);
            self.status = None;
        }
    }

    /// Type a character into the entry field.
    pub fn push_entry(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        if self.entry == "0" {
            self.entry.clear();
        }
        if self.entry.len() < MAX_ENTRY_LEN {
            self.entry.push(c);
        }
    }

    /// Delete the last character of the entry field.
    pub fn pop_entry(&mut self) {
        self.entry.pop();
    }

    /// Fire the one-second refresh if due.
    pub fn poll_tick(&mut self) -> bool {
        self.timer.poll_tick()
    }

    /// Window-close hook.
    pub fn close(&mut self) {
        if !self.should_quit {
            self.timer.on_close();
            self.should_quit = true;
        }
    }

    /// Show the key help.
    pub fn show_help(&mut self) {
        self.status = Some(
            "space:start/stop | r:reset | 0-9:minutes | +/-:adjust | q:quit".to_string(),
        );
    }
}
