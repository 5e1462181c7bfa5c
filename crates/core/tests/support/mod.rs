//! Shared test helpers for `lapwatch-core` integration tests.
//!
//! Fixtures here build stores on a mock clock so tests can focus on timer
//! behaviour instead of wiring.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Once;

use lapwatch_common::testing::MockClock;
use lapwatch_core::{CallbackTimer, TimerStore};

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness, once per binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lapwatch_core=debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// A store on a fresh mock clock, with a handle to drive the clock.
pub fn mock_store() -> (TimerStore<MockClock>, MockClock) {
    init_tracing();
    let clock = MockClock::new();
    (TimerStore::with_clock(clock.clone()), clock)
}

/// A callback timer on a fresh mock clock.
pub fn mock_callback_timer() -> (CallbackTimer<MockClock>, MockClock) {
    init_tracing();
    let clock = MockClock::new();
    (CallbackTimer::with_clock(clock.clone()), clock)
}

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("config directory should be created");
    }
    std::fs::write(&path, contents).expect("config file should be written");
    path
}
