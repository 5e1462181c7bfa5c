//! Timer lifecycle types

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a named timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerStatus {
    /// No start has been recorded (or the timer was reset)
    #[default]
    NotStarted,
    /// Started, not yet stopped
    InProgress,
    /// Both start and end are recorded
    Completed,
}

impl TimerStatus {
    /// Stable lowercase name, matching the serialized form
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A timestamped pause, resume or lap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerEvent {
    pub time: Instant,
    pub description: String,
}

impl TimerEvent {
    /// Create an event at `time`
    pub fn new(time: Instant, description: impl Into<String>) -> Self {
        Self { time, description: description.into() }
    }
}

/// Point-in-time copy of everything recorded for one timer
///
/// A timer that does not exist inspects as the default snapshot: no
/// timestamps, no events, [`TimerStatus::NotStarted`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub start: Option<Instant>,
    pub end: Option<Instant>,
    pub paused: Vec<TimerEvent>,
    pub resumed: Vec<TimerEvent>,
    pub status: TimerStatus,
    pub laps: Vec<TimerEvent>,
}
