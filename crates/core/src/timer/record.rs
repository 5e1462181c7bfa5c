//! Per-timer bookkeeping

use std::time::Instant;

use lapwatch_domain::{TimerError, TimerEvent, TimerSnapshot, TimerStatus};

/// Everything recorded for one timer id
///
/// A record only exists once the timer has been started, so `start` is
/// always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TimerRecord {
    pub(crate) start: Instant,
    pub(crate) end: Option<Instant>,
    pub(crate) pauses: Vec<TimerEvent>,
    pub(crate) resumes: Vec<TimerEvent>,
    pub(crate) laps: Vec<TimerEvent>,
}

impl TimerRecord {
    pub(crate) const fn started_at(start: Instant) -> Self {
        Self { start, end: None, pauses: Vec::new(), resumes: Vec::new(), laps: Vec::new() }
    }

    pub(crate) const fn status(&self) -> TimerStatus {
        if self.end.is_some() {
            TimerStatus::Completed
        } else {
            TimerStatus::InProgress
        }
    }

    /// An unresumed pause is open
    pub(crate) fn is_paused(&self) -> bool {
        self.pauses.len() > self.resumes.len()
    }

    /// Net elapsed seconds between start and end, excluding paused spans
    ///
    /// `None` while the timer has no end.
    pub(crate) fn net_seconds(&self, id: &str) -> Result<Option<f64>, TimerError> {
        let Some(end) = self.end else {
            return Ok(None);
        };
        if self.pauses.len() != self.resumes.len() {
            return Err(TimerError::UnmatchedPauseWithoutResume { id: id.to_string() });
        }

        let gross = end.saturating_duration_since(self.start).as_secs_f64();
        let paused: f64 = self
            .pauses
            .iter()
            .zip(&self.resumes)
            .map(|(pause, resume)| resume.time.saturating_duration_since(pause.time).as_secs_f64())
            .sum();
        Ok(Some(gross - paused))
    }

    pub(crate) fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            start: Some(self.start),
            end: self.end,
            paused: self.pauses.clone(),
            resumed: self.resumes.clone(),
            status: self.status(),
            laps: self.laps.clone(),
        }
    }
}
