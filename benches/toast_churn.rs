// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_toast::notifications::{
    Manager, ManualClock, MaxToasts, RecordingSurface, Settings, ToastOptions, EXIT_TRANSITION,
};
use std::hint::black_box;
use std::time::Duration;

fn toast_churn_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_churn");

    group.bench_function("show_evict_and_settle_1000", |b| {
        b.iter(|| {
            let clock = ManualClock::new();
            let settings = Settings {
                max_toasts: MaxToasts::new(5),
                ..Settings::default()
            };
            let mut manager =
                Manager::new(settings, |spec| Some(RecordingSurface::new(*spec)))
                    .with_clock(clock.clone());

            for i in 0..1000u64 {
                let options = ToastOptions::new().duration(Duration::from_millis(i % 7 * 100));
                black_box(manager.show("benchmark", options));
                clock.advance(Duration::from_millis(50));
                manager.tick();
            }
            manager.clear();
            clock.advance(EXIT_TRANSITION);
            manager.tick();
            black_box(manager.mounted_len())
        });
    });

    group.finish();
}

criterion_group!(benches, toast_churn_benchmark);
criterion_main!(benches);
