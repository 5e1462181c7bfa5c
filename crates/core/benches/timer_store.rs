use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lapwatch_common::time::MockClock;
use lapwatch_core::{DurationValue, TimerStore, UnitRegistry};
use lapwatch_domain::DurationsOptions;

fn populated_store(timers: usize) -> TimerStore<MockClock> {
    let clock = MockClock::new();
    let mut store = TimerStore::with_clock(clock.clone());
    for idx in 0..timers {
        let id = format!("timer-{idx}");
        store.start(&id);
        clock.advance(std::time::Duration::from_micros(250));
        store.pause(&id, "").unwrap();
        clock.advance(std::time::Duration::from_micros(50));
        store.resume(&id, "").unwrap();
        store.stop(id.as_str()).unwrap();
    }
    store
}

fn timer_lifecycle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("timer_store");

    group.bench_function("start_pause_resume_stop", |b| {
        let mut store = TimerStore::with_clock(MockClock::new());
        b.iter(|| {
            store.start("bench");
            store.pause("bench", "").unwrap();
            store.resume("bench", "").unwrap();
            store.stop("bench").unwrap();
            black_box(store.calculate("bench").unwrap());
        });
    });

    group.bench_function("durations_64", |b| {
        let store = populated_store(64);
        let options = DurationsOptions::default();
        b.iter(|| black_box(store.durations(&options).unwrap()));
    });

    group.finish();
}

fn conversion_benchmark(c: &mut Criterion) {
    let mut units = UnitRegistry::new();
    units.add("h", "/", 3600.0).unwrap();
    let value = DurationValue::new(Arc::new(units), 5_400.0, "s");

    let mut group = c.benchmark_group("units");

    group.bench_function("convert_chain", |b| {
        b.iter(|| {
            let hours = value.convert("h").unwrap();
            black_box(hours.convert("ns").unwrap());
        });
    });

    group.bench_function("format", |b| {
        b.iter(|| black_box(value.format("%s %s")));
    });

    group.finish();
}

criterion_group!(core_benchmarks, timer_lifecycle_benchmark, conversion_benchmark);
criterion_main!(core_benchmarks);
