// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_virtual_list::{AxisConfig, DEFAULT_OVERSCAN, compute_track_geometry, compute_window};

fn bench_compute_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("virtual_list/compute_window");

    // Window computation should not depend on collection length; only the
    // number of realized items shows up in `resolve`.
    for len in [16usize, 1_024, 1_048_576] {
        let plain = AxisConfig::new(120.0_f64).with_gap(8.0);
        let looping = plain.with_looping(true);
        let loop_extent = looping.loop_extent(len);

        group.bench_with_input(BenchmarkId::new("plain", len), &len, |b, &len| {
            let mut offset = 0.0;
            b.iter(|| {
                offset = (offset + 37.5) % loop_extent;
                black_box(compute_window(
                    black_box(offset),
                    800.0,
                    &plain,
                    len,
                    DEFAULT_OVERSCAN,
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("looping", len), &len, |b, &len| {
            let mut offset = loop_extent;
            b.iter(|| {
                offset = loop_extent + (offset + 37.5) % loop_extent;
                black_box(compute_window(
                    black_box(offset),
                    800.0,
                    &looping,
                    len,
                    DEFAULT_OVERSCAN,
                ))
            });
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("virtual_list/resolve");

    // Realized count grows with the container, not with the collection.
    for container in [400.0_f64, 1_600.0, 6_400.0] {
        let items: Vec<u32> = (0..512).collect();
        let config = AxisConfig::new(64.0_f64).with_looping(true);
        let offset = config.loop_extent(items.len()) + 1_000.0;
        let span = compute_window(offset, container, &config, items.len(), DEFAULT_OVERSCAN);
        group.throughput(Throughput::Elements(span.count as u64));

        group.bench_with_input(
            BenchmarkId::new("entries", container as u32),
            &span,
            |b, span| {
                b.iter(|| {
                    let window = span.resolve(&items);
                    let mut sum = 0_u64;
                    for entry in &window {
                        sum += u64::from(*entry.item);
                    }
                    let geometry = compute_track_geometry(span.start_index, &config, items.len());
                    black_box((sum, geometry))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compute_window, bench_resolve);
criterion_main!(benches);
