//! Named timer state machine
//!
//! Each timer id moves `NotStarted -> InProgress -> Completed`; only
//! [`TimerStore::reset`] takes it back. Pauses, resumes and laps are
//! recorded against a started timer, and the net duration of a completed
//! timer excludes every paused span.

use std::collections::HashMap;
use std::sync::Arc;

use lapwatch_common::time::{format_elapsed_secs, Clock, SystemClock};
use lapwatch_domain::{
    Config, DurationsOptions, LapwatchError, TimerError, TimerEvent, TimerSnapshot, TimerStatus,
    UnitError,
};
use serde::Serialize;
use tracing::debug;

use super::record::TimerRecord;
use crate::config::registry_from_config;
use crate::diagnostics::rejected;
use crate::units::{DurationValue, UnitRegistry};

/// One completed timer as reported by [`TimerStore::durations`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerDuration {
    /// Timer id
    pub id: String,
    /// Net duration converted to the requested unit, unformatted
    pub value: DurationValue,
    /// The same duration rendered through the requested pattern
    pub formatted: Option<DurationValue>,
}

/// In-memory store of named timers
///
/// Not synchronized; wrap it in a
/// [`SharedTimerStore`](super::SharedTimerStore) to use it from several
/// threads.
#[derive(Debug)]
pub struct TimerStore<C: Clock = SystemClock> {
    clock: C,
    units: Arc<UnitRegistry>,
    defaults: DurationsOptions,
    records: HashMap<String, TimerRecord>,
    /// Started ids, oldest first
    order: Vec<String>,
}

impl TimerStore<SystemClock> {
    /// Create a store backed by the system clock and the built-in units
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TimerStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimerStore<C> {
    /// Create a store reading time from `clock`
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            units: Arc::new(UnitRegistry::new()),
            defaults: DurationsOptions::default(),
            records: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a store from configuration: custom units are registered and
    /// the configured durations options become the defaults
    ///
    /// # Errors
    /// Returns a unit error for an invalid custom unit, or a configuration
    /// error if a configured default unit is unknown.
    pub fn from_config(clock: C, config: &Config) -> Result<Self, LapwatchError> {
        let units = registry_from_config(config)?;
        Ok(Self::with_clock(clock).with_units(units).with_durations_options(config.durations.clone()))
    }

    /// Replace the unit registry
    #[must_use]
    pub fn with_units(mut self, units: impl Into<Arc<UnitRegistry>>) -> Self {
        self.units = units.into();
        self
    }

    /// Replace the options used by [`TimerStore::durations_default`]
    #[must_use]
    pub fn with_durations_options(mut self, options: DurationsOptions) -> Self {
        self.defaults = options;
        self
    }

    /// The unit registry shared by every value this store produces
    pub const fn units(&self) -> &Arc<UnitRegistry> {
        &self.units
    }

    /// The clock timestamps are read from
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Register a custom unit
    ///
    /// Values already handed out keep the registry they were created with.
    ///
    /// # Errors
    /// See [`UnitRegistry::add`].
    pub fn register_unit(&mut self, name: &str, operator: &str, value: f64) -> Result<(), UnitError> {
        Arc::make_mut(&mut self.units).add(name, operator, value)
    }

    /// Start (or restart) the timer `id`
    ///
    /// Restarting drops everything previously recorded for `id` and makes
    /// it the most recently started timer.
    pub fn start(&mut self, id: &str) {
        let restarted = self.forget(id);
        self.records.insert(id.to_string(), TimerRecord::started_at(self.clock.now()));
        self.order.push(id.to_string());
        debug!(timer_id = id, restarted, "Timer started");
    }

    /// Start the timer `id` only if nothing is recorded under it
    ///
    /// # Errors
    /// [`TimerError::TimerAlreadyStarted`] if `id` already has a record, in
    /// any state; the existing record is left untouched.
    pub fn try_start(&mut self, id: &str) -> Result<(), TimerError> {
        if self.records.contains_key(id) {
            return Err(rejected(
                TimerError::TimerAlreadyStarted { id: id.to_string() },
                id,
                "Start refused for a timer already in use",
            ));
        }
        self.start(id);
        Ok(())
    }

    /// Stop the timer `id`, or the most recently started one when `None`
    ///
    /// # Errors
    /// - [`TimerError::TimerNotStarted`] if no timer was ever started or `id`
    ///   has no start record
    /// - [`TimerError::NoActiveTimerToStop`] if the timer already stopped
    pub fn stop<'a>(&mut self, id: impl Into<Option<&'a str>>) -> Result<(), TimerError> {
        let id = match id.into() {
            Some(id) => id.to_string(),
            None => match self.order.last() {
                Some(latest) => latest.clone(),
                None => {
                    let err = not_started("(none)");
                    return Err(rejected(err, "(none)", "Stop requested before any start"));
                }
            },
        };

        let now = self.clock.now();
        let Some(record) = self.records.get_mut(&id) else {
            let err = not_started(&id);
            return Err(rejected(err, &id, "Stop requested on a timer that was never started"));
        };
        if record.end.is_some() {
            let err = TimerError::NoActiveTimerToStop { id: id.clone() };
            return Err(rejected(err, &id, "Stop requested on a timer that already stopped"));
        }

        record.end = Some(now);
        let elapsed = now.saturating_duration_since(record.start).as_secs_f64();
        debug!(timer_id = %id, gross = %format_elapsed_secs(elapsed), "Timer stopped");
        Ok(())
    }

    /// Record a checkpoint; allowed before and after stop
    ///
    /// # Errors
    /// [`TimerError::TimerNotStarted`] if `id` has no start record.
    pub fn lap(&mut self, id: &str, description: &str) -> Result<(), TimerError> {
        let now = self.clock.now();
        let record = self.record_mut(id)?;
        record.laps.push(TimerEvent::new(now, description));
        debug!(timer_id = id, lap = record.laps.len(), "Lap recorded");
        Ok(())
    }

    /// Open a pause
    ///
    /// # Errors
    /// - [`TimerError::TimerNotStarted`] if `id` has no start record
    /// - [`TimerError::TimerAlreadyPaused`] if a pause is already open
    pub fn pause(&mut self, id: &str, description: &str) -> Result<(), TimerError> {
        let now = self.clock.now();
        let record = self.record_mut(id)?;
        if record.is_paused() {
            let err = TimerError::TimerAlreadyPaused { id: id.to_string() };
            return Err(rejected(err, id, "Pause requested on a paused timer"));
        }

        record.pauses.push(TimerEvent::new(now, description));
        debug!(timer_id = id, "Timer paused");
        Ok(())
    }

    /// Close the open pause
    ///
    /// # Errors
    /// - [`TimerError::TimerNotStarted`] if `id` has no start record
    /// - [`TimerError::NoActivePausedTimerToResume`] if no pause is open
    pub fn resume(&mut self, id: &str, description: &str) -> Result<(), TimerError> {
        let now = self.clock.now();
        let record = self.record_mut(id)?;
        if !record.is_paused() {
            let err = TimerError::NoActivePausedTimerToResume { id: id.to_string() };
            return Err(rejected(err, id, "Resume requested without an open pause"));
        }

        record.resumes.push(TimerEvent::new(now, description));
        debug!(timer_id = id, "Timer resumed");
        Ok(())
    }

    /// Net elapsed time of a completed timer, in seconds
    ///
    /// Returns `Ok(None)` unless the timer has both a start and an end.
    ///
    /// # Errors
    /// [`TimerError::UnmatchedPauseWithoutResume`] if a pause was never
    /// resumed.
    pub fn calculate(&self, id: &str) -> Result<Option<DurationValue>, TimerError> {
        let Some(record) = self.records.get(id) else {
            return Ok(None);
        };
        let seconds = record
            .net_seconds(id)
            .map_err(|err| rejected(err, id, "Net duration unavailable"))?;
        Ok(seconds.map(|seconds| DurationValue::seconds(self.units.clone(), seconds)))
    }

    /// Forget the timer `id`, or every timer when `None`
    ///
    /// Resetting an unknown id is a no-op.
    pub fn reset<'a>(&mut self, id: impl Into<Option<&'a str>>) {
        match id.into() {
            Some(id) => {
                if self.forget(id) {
                    debug!(timer_id = id, "Timer reset");
                }
            }
            None => {
                let cleared = self.records.len();
                self.records.clear();
                self.order.clear();
                debug!(cleared, "All timers reset");
            }
        }
    }

    /// Lifecycle state of `id`
    pub fn status(&self, id: &str) -> TimerStatus {
        self.records.get(id).map_or(TimerStatus::NotStarted, TimerRecord::status)
    }

    /// Whether `id` has a start record
    pub fn is_started(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Whether `id` has an end record
    pub fn is_stopped(&self, id: &str) -> bool {
        self.records.get(id).is_some_and(|record| record.end.is_some())
    }

    /// Whether `id` has an open pause
    pub fn is_paused(&self, id: &str) -> bool {
        self.records.get(id).is_some_and(TimerRecord::is_paused)
    }

    /// Started timers that have not stopped, in start order
    pub fn active_timers(&self) -> Vec<String> {
        self.order.iter().filter(|id| !self.is_stopped(id)).cloned().collect()
    }

    /// Every started id, in start order
    pub fn timer_ids(&self) -> &[String] {
        &self.order
    }

    /// Number of started timers
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no timer is started
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Net duration of every completed timer, in start order
    ///
    /// `value` is the unformatted converted number; `formatted` carries the
    /// rendering through `options.format` when one is set.
    ///
    /// # Errors
    /// Fails on the first timer whose pauses are unbalanced, or if
    /// `options.unit` is unknown.
    pub fn durations(&self, options: &DurationsOptions) -> Result<Vec<TimerDuration>, TimerError> {
        let pattern = options.pattern();
        let mut report = Vec::new();

        for id in &self.order {
            let Some(elapsed) = self.calculate(id)? else {
                continue;
            };
            let value = elapsed.convert(&options.unit)?;
            let formatted = pattern.map(|pattern| value.format(pattern));
            report.push(TimerDuration { id: id.clone(), value, formatted });
        }

        Ok(report)
    }

    /// [`TimerStore::durations`] with the store's default options
    ///
    /// # Errors
    /// See [`TimerStore::durations`].
    pub fn durations_default(&self) -> Result<Vec<TimerDuration>, TimerError> {
        self.durations(&self.defaults)
    }

    /// Copy of everything recorded for `id`
    pub fn inspect(&self, id: &str) -> TimerSnapshot {
        self.records.get(id).map(TimerRecord::snapshot).unwrap_or_default()
    }

    fn record_mut(&mut self, id: &str) -> Result<&mut TimerRecord, TimerError> {
        self.records
            .get_mut(id)
            .ok_or_else(|| rejected(not_started(id), id, "Operation on a timer never started"))
    }

    fn forget(&mut self, id: &str) -> bool {
        if self.records.remove(id).is_none() {
            return false;
        }
        self.order.retain(|started| started != id);
        true
    }
}

fn not_started(id: &str) -> TimerError {
    TimerError::TimerNotStarted { id: id.to_string() }
}
