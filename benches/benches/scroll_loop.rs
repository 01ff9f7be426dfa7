// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;
use understory_scroll_loop::{LoopSession, MemoryScrollPort, Throttle};
use understory_virtual_list::AxisConfig;

fn bench_scroll_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_loop/burst");

    // A fling: many small scroll notifications, each followed by a frame
    // request, with and without the default throttle.
    for (name, interval) in [
        ("unthrottled", Duration::ZERO),
        ("throttled", Duration::from_millis(10)),
    ] {
        let items: Vec<u32> = (0..64).collect();
        group.bench_with_input(BenchmarkId::new(name, 256), &items, |b, items| {
            b.iter_batched(
                || {
                    let config = AxisConfig::new(180.0).with_gap(12.0).with_looping(true);
                    LoopSession::new(MemoryScrollPort::new(900.0), config, items.len())
                        .with_throttle_interval(interval)
                },
                |mut session| {
                    for step in 0..256_u64 {
                        let now = Duration::from_millis(step);
                        if let Some(event) = session.port_mut().scroll_by(-43.0) {
                            session.handle(event, now);
                        }
                        session.poll(now);
                        let frame = session.frame(items);
                        black_box(frame.translation());
                    }
                    black_box(session.logical_offset());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_throttle(c: &mut Criterion) {
    c.bench_function("scroll_loop/throttle_submit_poll", |b| {
        let mut throttle = Throttle::default();
        let mut tick = 0_u64;
        b.iter(|| {
            tick += 1;
            let now = Duration::from_micros(tick * 700);
            black_box(throttle.submit(now) | throttle.poll(now))
        });
    });
}

criterion_group!(benches, bench_scroll_burst, bench_throttle);
criterion_main!(benches);
