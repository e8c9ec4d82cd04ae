//! Terminal window for the timer.
//!
//! Built with ratatui and crossterm. A single loop draws the window, waits
//! for a key until the next one-second refresh is due, and fires that
//! refresh while the timer runs.

mod app;
mod event;
mod ui;

pub use app::{App, START_LABEL, STOP_LABEL};
pub use event::{handle_key, Action};

use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::WorkTimerError;
use crate::timer::{Clock, Direction, RecordStore, TimerController};

/// Upper bound on how long the loop blocks waiting for input.
const MAX_POLL: Duration = Duration::from_millis(250);

/// Run the timer window until it is closed.
///
/// The accumulated time is saved on the way out, even if drawing fails.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or run.
pub fn run<C: Clock, S: RecordStore>(
    timer: &mut TimerController<C, S>,
    entry: String,
) -> Result<(), WorkTimerError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| WorkTimerError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(WorkTimerError::Terminal(format!("Failed to setup terminal: {e}")));
    }

    let mut app = App::new(timer, entry);
    let backend = CrosstermBackend::new(stdout);
    let result = Terminal::new(backend)
        .map_err(|e| WorkTimerError::Terminal(format!("Failed to create terminal: {e}")))
        .and_then(|mut terminal| {
            let outcome = run_app(&mut terminal, &mut app);
            terminal.show_cursor().ok();
            outcome
        });

    app.close();

    // Restore terminal
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen).ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend, C: Clock, S: RecordStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, C, S>,
) -> Result<(), WorkTimerError> {
    while !app.should_quit {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| WorkTimerError::Terminal(format!("Failed to draw: {e}")))?;

        let timeout = poll_timeout(app.timer());
        if let Some(action) = event::handle_events(app, timeout)? {
            match action {
                Action::Quit => app.close(),
                Action::Toggle => app.toggle(),
                Action::Reset => app.reset(),
                Action::Increase => app.adjust(Direction::Increase),
                Action::Decrease => app.adjust(Direction::Decrease),
            }
        }

        app.poll_tick();
    }

    Ok(())
}

/// Time until the next refresh is due, capped at [`MAX_POLL`].
fn poll_timeout<C: Clock, S: RecordStore>(timer: &TimerController<C, S>) -> Duration {
    timer.next_tick().map_or(MAX_POLL, |due| {
        (due - timer.clock().now())
            .to_std()
            .unwrap_or(Duration::ZERO)
            .min(MAX_POLL)
    })
}
