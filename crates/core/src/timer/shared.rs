//! Thread-safe handle over a [`TimerStore`]

use std::sync::Arc;

use lapwatch_common::time::{Clock, SystemClock};
use lapwatch_domain::{DurationsOptions, TimerError, TimerSnapshot, TimerStatus, UnitError};
use parking_lot::Mutex;

use super::store::{TimerDuration, TimerStore};
use crate::units::DurationValue;

/// Cloneable, lock-protected timer store
///
/// Every clone observes the same timers. Each call holds the lock for the
/// duration of one store operation only.
///
/// # Examples
///
/// ```
/// use lapwatch_core::SharedTimerStore;
///
/// let timers = SharedTimerStore::new();
/// let worker = timers.clone();
/// std::thread::spawn(move || worker.start("job")).join().unwrap();
/// assert!(timers.is_started("job"));
/// ```
#[derive(Debug)]
pub struct SharedTimerStore<C: Clock = SystemClock> {
    inner: Arc<Mutex<TimerStore<C>>>,
}

impl<C: Clock> Clone for SharedTimerStore<C> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl SharedTimerStore<SystemClock> {
    /// Create an empty shared store on the system clock
    pub fn new() -> Self {
        Self::with_store(TimerStore::new())
    }
}

impl Default for SharedTimerStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> From<TimerStore<C>> for SharedTimerStore<C> {
    fn from(store: TimerStore<C>) -> Self {
        Self::with_store(store)
    }
}

impl<C: Clock> SharedTimerStore<C> {
    /// Wrap an existing store
    pub fn with_store(store: TimerStore<C>) -> Self {
        Self { inner: Arc::new(Mutex::new(store)) }
    }

    /// Run `f` with exclusive access to the underlying store
    ///
    /// Use this to make several operations atomic with respect to other
    /// handles.
    pub fn with<R>(&self, f: impl FnOnce(&mut TimerStore<C>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Register a custom unit; see [`TimerStore::register_unit`]
    ///
    /// # Errors
    /// Same as [`TimerStore::register_unit`].
    pub fn register_unit(&self, name: &str, operator: &str, value: f64) -> Result<(), UnitError> {
        self.inner.lock().register_unit(name, operator, value)
    }

    /// Start (or restart) `id`; see [`TimerStore::start`]
    pub fn start(&self, id: &str) {
        self.inner.lock().start(id);
    }

    /// Start `id` unless it is already recorded, under a single lock
    ///
    /// # Errors
    /// Same as [`TimerStore::try_start`].
    pub fn try_start(&self, id: &str) -> Result<(), TimerError> {
        self.inner.lock().try_start(id)
    }

    /// See [`TimerStore::stop`]
    ///
    /// # Errors
    /// Same as [`TimerStore::stop`].
    pub fn stop<'a>(&self, id: impl Into<Option<&'a str>>) -> Result<(), TimerError> {
        self.inner.lock().stop(id)
    }

    /// Record a checkpoint on `id`
    ///
    /// # Errors
    /// Same as [`TimerStore::lap`].
    pub fn lap(&self, id: &str, description: &str) -> Result<(), TimerError> {
        self.inner.lock().lap(id, description)
    }

    /// Open a pause on `id`
    ///
    /// # Errors
    /// Same as [`TimerStore::pause`].
    pub fn pause(&self, id: &str, description: &str) -> Result<(), TimerError> {
        self.inner.lock().pause(id, description)
    }

    /// Close the open pause on `id`
    ///
    /// # Errors
    /// Same as [`TimerStore::resume`].
    pub fn resume(&self, id: &str, description: &str) -> Result<(), TimerError> {
        self.inner.lock().resume(id, description)
    }

    /// Net elapsed seconds of a completed timer
    ///
    /// # Errors
    /// Same as [`TimerStore::calculate`].
    pub fn calculate(&self, id: &str) -> Result<Option<DurationValue>, TimerError> {
        self.inner.lock().calculate(id)
    }

    /// Forget `id`, or every timer when `None`
    pub fn reset<'a>(&self, id: impl Into<Option<&'a str>>) {
        self.inner.lock().reset(id);
    }

    /// Lifecycle state of `id`
    pub fn status(&self, id: &str) -> TimerStatus {
        self.inner.lock().status(id)
    }

    /// Whether `id` has a start record
    pub fn is_started(&self, id: &str) -> bool {
        self.inner.lock().is_started(id)
    }

    /// Whether `id` has an end record
    pub fn is_stopped(&self, id: &str) -> bool {
        self.inner.lock().is_stopped(id)
    }

    /// Whether `id` has an open pause
    pub fn is_paused(&self, id: &str) -> bool {
        self.inner.lock().is_paused(id)
    }

    /// Started timers that have not stopped, in start order
    pub fn active_timers(&self) -> Vec<String> {
        self.inner.lock().active_timers()
    }

    /// Every started id, in start order (copied out of the lock)
    pub fn timer_ids(&self) -> Vec<String> {
        self.inner.lock().timer_ids().to_vec()
    }

    /// Number of started timers
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether no timer is started
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Net duration of every completed timer
    ///
    /// # Errors
    /// Same as [`TimerStore::durations`].
    pub fn durations(&self, options: &DurationsOptions) -> Result<Vec<TimerDuration>, TimerError> {
        self.inner.lock().durations(options)
    }

    /// Durations with the store's default options
    ///
    /// # Errors
    /// Same as [`TimerStore::durations_default`].
    pub fn durations_default(&self) -> Result<Vec<TimerDuration>, TimerError> {
        self.inner.lock().durations_default()
    }

    /// Copy of everything recorded for `id`
    pub fn inspect(&self, id: &str) -> TimerSnapshot {
        self.inner.lock().inspect(id)
    }
}
