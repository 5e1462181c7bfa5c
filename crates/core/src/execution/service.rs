//! Callback timing service
//!
//! Times one unit of work on a private timer and reports the elapsed time in
//! the requested unit. A failing callback is never swallowed: its error comes
//! back wrapped in [`ExecutionError::Failed`], with the elapsed time attached
//! whenever the private timer could be read back.

use std::sync::Arc;

use lapwatch_common::time::{format_elapsed_secs, Clock, SystemClock};
use lapwatch_domain::constants::DEFAULT_EXECUTION_UNIT;
use lapwatch_domain::{BoxedError, Config, ExecutionError, LapwatchError, TimerError, UnitError};
use serde::Serialize;
use tracing::{debug, error};

use super::ports::{IdGenerator, RandomIdGenerator};
use crate::diagnostics::rejected;
use crate::timer::{SharedTimerStore, TimerStore};
use crate::units::{DurationValue, UnitRegistry};

/// Outcome of a timed callback
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionReport<T> {
    /// Elapsed time as a unit-tagged value
    pub result: DurationValue,
    /// Elapsed time in `unit`
    pub time: f64,
    /// Unit of `time` and `result`
    pub unit: String,
    /// Whatever the callback returned
    pub output: T,
}

/// Callback timing service
pub struct CallbackTimer<C: Clock = SystemClock> {
    timers: SharedTimerStore<C>,
    ids: Arc<dyn IdGenerator>,
    default_unit: String,
}

impl CallbackTimer<SystemClock> {
    /// Create a callback timer on the system clock, reporting in seconds
    pub fn new() -> Self {
        Self::with_store(TimerStore::new())
    }
}

impl Default for CallbackTimer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CallbackTimer<C> {
    /// Create a callback timer reading time from `clock`
    pub fn with_clock(clock: C) -> Self {
        Self::with_store(TimerStore::with_clock(clock))
    }

    /// Create a callback timer around a private store
    ///
    /// The store's unit registry decides which units runs may report in.
    pub fn with_store(store: TimerStore<C>) -> Self {
        Self {
            timers: SharedTimerStore::with_store(store),
            ids: Arc::new(RandomIdGenerator::default()),
            default_unit: DEFAULT_EXECUTION_UNIT.to_string(),
        }
    }

    /// Create a callback timer from configuration
    ///
    /// # Errors
    /// Fails if a custom unit is invalid or a configured unit is unknown.
    pub fn from_config(clock: C, config: &Config) -> Result<Self, LapwatchError> {
        let store = TimerStore::from_config(clock, config)?;
        Ok(Self::with_store(store)
            .with_id_generator(Arc::new(RandomIdGenerator::new(config.execution.id_bytes)))
            .with_default_unit(config.execution.unit.clone()))
    }

    /// Replace the private id source
    #[must_use]
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Replace the unit used by [`CallbackTimer::watch`]
    #[must_use]
    pub fn with_default_unit(mut self, unit: impl Into<String>) -> Self {
        self.default_unit = unit.into();
        self
    }

    /// Unit used by [`CallbackTimer::watch`]
    pub fn default_unit(&self) -> &str {
        &self.default_unit
    }

    /// Registry deciding which units runs may report in
    pub fn units(&self) -> Arc<UnitRegistry> {
        self.timers.with(|store| Arc::clone(store.units()))
    }

    /// Time `callback` and report in the default unit
    ///
    /// # Errors
    /// See [`CallbackTimer::run_with`].
    pub fn watch<T, E, F>(&self, callback: F) -> Result<ExecutionReport<T>, ExecutionError>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxedError>,
    {
        self.run_with((), &self.default_unit, |()| callback())
    }

    /// Time `callback` and report in `unit`
    ///
    /// # Errors
    /// See [`CallbackTimer::run_with`].
    pub fn run<T, E, F>(&self, unit: &str, callback: F) -> Result<ExecutionReport<T>, ExecutionError>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxedError>,
    {
        self.run_with((), unit, |()| callback())
    }

    /// Time `callback(params)` and report in `unit`
    ///
    /// The private timer is stopped exactly once whether the callback
    /// succeeds or fails, and is forgotten once the report is built. The
    /// store lock is not held while the callback runs, so callbacks may
    /// start nested runs on the same timer.
    ///
    /// # Errors
    /// - [`ExecutionError::Timer`] wrapping [`UnitError::UnknownUnit`] if
    ///   `unit` is unknown; the callback is not invoked
    /// - [`ExecutionError::Timer`] wrapping [`TimerError::TimerAlreadyStarted`]
    ///   if the generated id is already in use; the callback is not invoked
    /// - [`ExecutionError::Failed`] if the callback fails, even when the
    ///   private timer can no longer be read
    /// - [`ExecutionError::Timer`] if the callback succeeded but its private
    ///   timer was lost
    pub fn run_with<P, T, E, F>(
        &self,
        params: P,
        unit: &str,
        callback: F,
    ) -> Result<ExecutionReport<T>, ExecutionError>
    where
        F: FnOnce(P) -> Result<T, E>,
        E: Into<BoxedError>,
    {
        if !self.timers.with(|store| store.units().accepts(unit)) {
            return Err(UnitError::UnknownUnit { unit: unit.to_string() }.into());
        }

        let entry = PrivateEntry::start(&self.timers, self.ids.generate())?;
        debug!(timer_id = %entry.id, unit, "Running callback");

        let outcome = callback(params);

        let timing = entry.finish().and_then(|elapsed| -> Result<_, TimerError> {
            let seconds = elapsed.as_f64().unwrap_or_default();
            Ok((seconds, elapsed.convert(unit)?))
        });

        match (outcome, timing) {
            (Ok(output), Ok((seconds, result))) => {
                debug!(
                    timer_id = %entry.id,
                    elapsed = %format_elapsed_secs(seconds),
                    "Callback completed"
                );
                let time = result.as_f64().unwrap_or_default();
                Ok(ExecutionReport { result, time, unit: unit.to_string(), output })
            }
            (Ok(_), Err(lost)) => Err(lost.into()),
            (Err(err), timing) => {
                let source: BoxedError = err.into();
                let (message, elapsed) = match timing {
                    Ok((seconds, result)) => {
                        let time = result.as_f64().unwrap_or_default();
                        error!(
                            timer_id = %entry.id,
                            elapsed = %format_elapsed_secs(seconds),
                            error = %source,
                            "Callback failed"
                        );
                        (format!("Callback failed after {time} {unit}: {source}"), Some(time))
                    }
                    Err(lost) => {
                        error!(
                            timer_id = %entry.id,
                            error = %source,
                            timer_error = %lost,
                            "Callback failed and its private timer was lost"
                        );
                        (format!("Callback failed: {source}"), None)
                    }
                };
                Err(ExecutionError::Failed { message, elapsed, unit: unit.to_string(), source })
            }
        }
    }
}

/// A started private timer, forgotten when dropped
struct PrivateEntry<'a, C: Clock> {
    timers: &'a SharedTimerStore<C>,
    id: String,
}

impl<'a, C: Clock> PrivateEntry<'a, C> {
    /// Claim `id`; an id already in use is never restarted
    fn start(timers: &'a SharedTimerStore<C>, id: String) -> Result<Self, TimerError> {
        timers.try_start(&id)?;
        Ok(Self { timers, id })
    }

    /// Stop the timer unless already stopped and return its net duration
    fn finish(&self) -> Result<DurationValue, TimerError> {
        self.timers.with(|store| {
            if !store.is_stopped(&self.id) {
                store.stop(self.id.as_str())?;
            }
            store.calculate(&self.id)?.ok_or_else(|| {
                let err = TimerError::TimerNotStarted { id: self.id.clone() };
                rejected(err, &self.id, "Private timer has no net duration")
            })
        })
    }
}

impl<C: Clock> Drop for PrivateEntry<'_, C> {
    fn drop(&mut self) {
        self.timers.reset(self.id.as_str());
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for execution::service.
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use lapwatch_common::testing::{assert_approx_eq, MockClock};

    use super::*;

    struct SequentialIds(AtomicUsize);

    impl IdGenerator for SequentialIds {
        fn generate(&self) -> String {
            format!("run-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    fn timer() -> (CallbackTimer<MockClock>, MockClock) {
        let clock = MockClock::new();
        (CallbackTimer::with_clock(clock.clone()), clock)
    }

    /// Validates a successful run reports elapsed time and output.
    ///
    /// Assertions:
    /// - Confirms `time` and `result` agree in the requested unit.
    /// - Confirms the callback output is returned unchanged.
    #[test]
    fn test_run_success() {
        let (timer, clock) = timer();

        let report = timer
            .run("ms", || {
                clock.advance(Duration::from_millis(120));
                Ok::<_, BoxedError>("done")
            })
            .unwrap();

        assert_eq!(report.output, "done");
        assert_eq!(report.unit, "ms");
        assert_approx_eq(report.time, 120.0, 1e-6);
        assert_eq!(report.result.as_f64(), Some(report.time));
        assert_eq!(report.result.unit(), "ms");
    }

    /// Validates a failing callback is wrapped with elapsed time.
    ///
    /// Assertions:
    /// - Confirms the message embeds the elapsed time and the cause.
    /// - Confirms the original error is the source.
    #[test]
    fn test_run_failure_wraps_error() {
        let (timer, clock) = timer();

        let err = timer
            .run("s", || -> Result<(), BoxedError> {
                clock.advance(Duration::from_secs(2));
                Err("disk full".into())
            })
            .unwrap_err();

        assert_eq!(err.to_string(), "Callback failed after 2 s: disk full");
        assert_eq!(err.elapsed(), Some((2.0, "s")));
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("disk full"));
    }

    /// Validates an unknown unit fails before the callback runs.
    #[test]
    fn test_unknown_unit_skips_callback() {
        let (timer, _) = timer();
        let mut called = false;

        let err = timer
            .run("fortnight", || {
                called = true;
                Ok::<_, BoxedError>(())
            })
            .unwrap_err();

        assert!(!called);
        assert!(matches!(
            err,
            ExecutionError::Timer(TimerError::Unit(UnitError::UnknownUnit { .. }))
        ));
    }

    /// Validates `run_with` hands parameters to the callback.
    #[test]
    fn test_run_with_params() {
        let (timer, _) = timer();
        let report = timer
            .run_with((3, 4), "us", |(a, b)| Ok::<_, BoxedError>(a * b))
            .unwrap();
        assert_eq!(report.output, 12);
        assert_eq!(report.unit, "us");
    }

    /// Validates `watch` uses the default unit.
    #[test]
    fn test_watch_default_unit() {
        let (timer, clock) = timer();
        let timer = timer.with_default_unit("m");

        let report = timer
            .watch(|| {
                clock.advance(Duration::from_secs(90));
                Ok::<_, BoxedError>(())
            })
            .unwrap();

        assert_eq!(report.unit, "m");
        assert_approx_eq(report.time, 1.5, 1e-9);
    }

    /// Validates private entries are forgotten after success and failure.
    ///
    /// Assertions:
    /// - Confirms the generated id was used and then removed.
    #[test]
    fn test_private_entries_are_removed() {
        let (timer, _) = timer();
        let timer = timer.with_id_generator(Arc::new(SequentialIds(AtomicUsize::new(0))));

        timer.run("s", || Ok::<_, BoxedError>(())).unwrap();
        timer.run("s", || Err::<(), BoxedError>("nope".into())).unwrap_err();

        assert!(timer.timers.is_empty());
    }

    /// Validates nested runs on the same timer.
    #[test]
    fn test_nested_runs() {
        let (timer, clock) = timer();

        let outer = timer
            .run("ms", || {
                clock.advance(Duration::from_millis(10));
                let inner = timer.run("ms", || {
                    clock.advance(Duration::from_millis(5));
                    Ok::<_, BoxedError>(())
                })?;
                Ok::<_, ExecutionError>(inner.time)
            })
            .unwrap();

        assert_approx_eq(outer.output, 5.0, 1e-6);
        assert_approx_eq(outer.time, 15.0, 1e-6);
    }

    /// Validates a callback error survives losing the private timer.
    ///
    /// Assertions:
    /// - Confirms the result is still `Failed` with the original source.
    /// - Confirms no elapsed time is claimed.
    #[test]
    fn test_failure_kept_when_private_timer_lost() {
        let (timer, clock) = timer();

        let err = timer
            .run("ms", || -> Result<(), BoxedError> {
                clock.advance(Duration::from_millis(30));
                timer.timers.reset(None);
                Err("disk full".into())
            })
            .unwrap_err();

        assert!(matches!(err, ExecutionError::Failed { elapsed: None, .. }));
        assert_eq!(err.to_string(), "Callback failed: disk full");
        assert_eq!(err.elapsed(), None);
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("disk full"));
    }

    /// Validates a successful callback whose private timer was lost
    /// reports the bookkeeping error.
    #[test]
    fn test_success_with_lost_private_timer() {
        let (timer, _) = timer();
        let timer = timer.with_id_generator(Arc::new(SequentialIds(AtomicUsize::new(0))));

        let err = timer
            .run("s", || {
                timer.timers.reset("run-0");
                Ok::<_, BoxedError>("output")
            })
            .unwrap_err();

        assert!(matches!(
            err,
            ExecutionError::Timer(TimerError::TimerNotStarted { ref id }) if id == "run-0"
        ));
    }

    /// Validates a generated id already in use is refused up front.
    ///
    /// Assertions:
    /// - Confirms the callback never runs.
    /// - Confirms the existing timer is left as it was.
    #[test]
    fn test_id_in_use_skips_callback() {
        let (timer, _) = timer();
        let timer = timer.with_id_generator(Arc::new(SequentialIds(AtomicUsize::new(0))));
        timer.timers.start("run-0");
        timer.timers.lap("run-0", "mine").unwrap();
        let mut called = false;

        let err = timer
            .run("s", || {
                called = true;
                Ok::<_, BoxedError>(())
            })
            .unwrap_err();

        assert!(!called);
        assert!(matches!(
            err,
            ExecutionError::Timer(TimerError::TimerAlreadyStarted { ref id }) if id == "run-0"
        ));
        assert_eq!(timer.timers.inspect("run-0").laps.len(), 1);
    }
}
