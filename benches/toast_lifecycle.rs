// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for driving many toasts through their lifecycle.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_toaster::ui::notifications::{Manager, ToastOptions};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn tick_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for count in [1usize, 16, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let start = Instant::now();
                let mut manager = Manager::<u32>::new();
                for i in 0..count {
                    let options = ToastOptions::new("bench")
                        .duration(Duration::from_millis(1000))
                        .on_close(i as u32);
                    manager.show(options, start);
                }
                let mut fired = 0;
                for frame in 0..100u64 {
                    fired += manager.tick(start + Duration::from_millis(frame * 16)).len();
                }
                black_box(fired)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, tick_many);
criterion_main!(benches);
