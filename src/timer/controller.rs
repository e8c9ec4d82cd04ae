//! The timer controller.
//!
//! Owns the accumulated duration, the running/stopped state, the one-second
//! display refresh deadline and the bridge to the persisted record.

use chrono::{DateTime, Duration, Utc};

use super::clock::Clock;
use super::format::format_hms;
use super::record::{PersistedRecord, RecordStore};
use crate::error::WorkTimerError;

/// Interval between display refreshes while running.
pub const TICK_INTERVAL: Duration = Duration::seconds(1);

/// Whether a work session is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No session is open.
    Stopped,
    /// A session is open since `started_at`.
    Running {
        /// When the current session (or its last fold) began.
        started_at: DateTime<Utc>,
    },
}

/// Direction of a manual adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Add time.
    Increase,
    /// Remove time.
    Decrease,
}

impl Direction {
    /// `+1` or `-1`.
    #[must_use]
    pub const fn sign(self) -> i64 {
        match self {
            Self::Increase => 1,
            Self::Decrease => -1,
        }
    }
}

/// Work-hour stopwatch state machine.
pub struct TimerController<C, S> {
    clock: C,
    store: S,
    accumulated: Duration,
    state: SessionState,
    next_tick: Option<DateTime<Utc>>,
    display: String,
    last_failure: Option<String>,
}

impl<C: Clock, S: RecordStore> TimerController<C, S> {
    /// Create a stopped controller, seeding the accumulated time from the store.
    pub fn new(clock: C, store: S) -> Self {
        let mut timer = Self {
            clock,
            store,
            accumulated: Duration::zero(),
            state: SessionState::Stopped,
            next_tick: None,
            display: format_hms(Duration::zero()),
            last_failure: None,
        };
        timer.load();
        timer
    }

    /// Replace the accumulated time with the stored one and return it.
    ///
    /// Never fails: a missing or unreadable record yields zero. Read failures
    /// are logged and remembered in [`Self::last_failure`].
    pub fn load(&mut self) -> Duration {
        self.accumulated = match read_duration(&self.store) {
            Ok(d) => d,
            Err(e) => {
                log::warn!("{e}");
                self.last_failure = Some(e.to_string());
                Duration::zero()
            }
        };
        self.refresh_display();
        self.accumulated
    }

    /// Persist the accumulated duration.
    ///
    /// A running session is folded first and keeps running. Write failures
    /// are logged and remembered in [`Self::last_failure`]; in-memory state is
    /// left as it was.
    pub fn save(&mut self) {
        if self.is_running() {
            self.fold();
        }

        let record = PersistedRecord::from_duration(self.accumulated);
        match self.store.save(&record) {
            Ok(()) => {
                log::debug!("saved elapsed_seconds={}", record.elapsed_seconds);
                self.last_failure = None;
            }
            Err(e) => {
                log::warn!("{e}");
                self.last_failure = Some(e.to_string());
            }
        }
    }

    /// Start a session when stopped, or stop the open one.
    ///
    /// Stopping folds the session into the accumulated time but does not
    /// write the record.
    pub fn toggle(&mut self) {
        match self.state {
            SessionState::Stopped => {
                let now = self.clock.now();
                self.state = SessionState::Running { started_at: now };
                log::debug!("session started at {now}");
                self.tick();
            }
            SessionState::Running { started_at } => {
                let session = non_negative(self.clock.now() - started_at);
                self.accumulated = saturating_add(self.accumulated, session);
                self.state = SessionState::Stopped;
                self.next_tick = None;
                self.refresh_display();
                log::debug!("session stopped after {}s", session.num_seconds());
            }
        }
    }

    /// Stop, zero the accumulated time and persist it.
    pub fn reset(&mut self) {
        self.state = SessionState::Stopped;
        self.next_tick = None;
        self.accumulated = Duration::zero();
        self.refresh_display();
        log::debug!("timer reset");
        self.save();
    }

    /// Add or remove whole minutes, clamping at zero, then persist.
    ///
    /// Non-positive `minutes` are ignored.
    pub fn adjust_minutes(&mut self, minutes: i64, direction: Direction) {
        if minutes <= 0 {
            return;
        }
        let Some(delta) = minutes
            .checked_mul(direction.sign())
            .and_then(Duration::try_minutes)
        else {
            log::warn!("ignoring out-of-range adjustment of {minutes} minutes");
            return;
        };

        if self.is_running() {
            self.fold();
        }

        let Some(candidate) = self.accumulated.checked_add(&delta) else {
            log::warn!("ignoring adjustment of {minutes} minutes, total would overflow");
            return;
        };
        self.accumulated = non_negative(candidate);
        self.refresh_display();
        log::debug!("adjusted by {} minutes", delta.num_minutes());
        self.save();
    }

    /// Refresh the display and schedule the next tick.
    ///
    /// Does nothing once stopped, so no further tick is scheduled.
    pub fn tick(&mut self) {
        if !self.is_running() {
            self.next_tick = None;
            return;
        }
        self.refresh_display();
        self.next_tick = self.clock.now().checked_add_signed(TICK_INTERVAL);
    }

    /// Fire the tick if its deadline has passed. Returns whether it fired.
    pub fn poll_tick(&mut self) -> bool {
        match self.next_tick {
            Some(due) if self.clock.now() >= due => {
                self.tick();
                true
            }
            _ => false,
        }
    }

    /// Window-close hook: persist before the window goes away.
    pub fn on_close(&mut self) {
        log::info!("closing, saving {}", format_hms(self.displayed()));
        self.save();
    }

    /// Accumulated time, excluding the unfolded part of an open session.
    #[must_use]
    pub const fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Accumulated time plus the open session, if any.
    #[must_use]
    pub fn displayed(&self) -> Duration {
        match self.state {
            SessionState::Stopped => self.accumulated,
            SessionState::Running { started_at } => {
                saturating_add(self.accumulated, non_negative(self.clock.now() - started_at))
            }
        }
    }

    /// The visible `HH:MM:SS` text as of the last refresh.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Current session state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Check if a session is open.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running { .. })
    }

    /// When the next tick is due, if one is scheduled.
    #[must_use]
    pub const fn next_tick(&self) -> Option<DateTime<Utc>> {
        self.next_tick
    }

    /// The most recent load or save failure, cleared by a successful save.
    #[must_use]
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    /// The clock driving this controller.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    fn fold(&mut self) {
        if let SessionState::Running { started_at } = self.state {
            let now = self.clock.now();
            self.accumulated = saturating_add(self.accumulated, non_negative(now - started_at));
            self.state = SessionState::Running { started_at: now };
        }
    }

    fn refresh_display(&mut self) {
        self.display = format_hms(self.displayed());
    }
}

fn read_duration<S: RecordStore>(store: &S) -> Result<Duration, WorkTimerError> {
    match store.load()? {
        Some(record) => Ok(record.to_duration().unwrap_or_else(|| {
            log::warn!(
                "elapsed_seconds out of range ({}), starting from zero",
                record.elapsed_seconds
            );
            Duration::zero()
        })),
        None => {
            log::info!("no saved record, starting from zero");
            Ok(Duration::zero())
        }
    }
}

fn non_negative(d: Duration) -> Duration {
    d.max(Duration::zero())
}

fn saturating_add(a: Duration, b: Duration) -> Duration {
    a.checked_add(&b).unwrap_or_else(|| {
        log::warn!("accumulated time overflowed, holding at the maximum");
        Duration::MAX
    })
}
