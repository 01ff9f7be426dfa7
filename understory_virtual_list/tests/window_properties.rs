// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for `compute_window` and `compute_track_geometry`.
//!
//! These check the invariants hosts rely on: indices stay in bounds without
//! looping, every looping slot maps to the right item, and the computation
//! is a pure function of its inputs.

use proptest::prelude::*;
use understory_virtual_list::{AxisConfig, compute_track_geometry, compute_window};

fn config(item: f64, gap: f64, looping: bool) -> AxisConfig<f64> {
    AxisConfig::new(item).with_gap(gap).with_looping(looping)
}

proptest! {
    #[test]
    fn non_looping_indices_stay_in_bounds(
        len in 0_usize..500,
        item in 1.0_f64..200.0,
        gap in 0.0_f64..40.0,
        offset in -1_000.0_f64..100_000.0,
        container in 0.0_f64..2_000.0,
        overscan in 0_usize..8,
    ) {
        let config = config(item, gap, false);
        let span = compute_window(offset, container, &config, len, overscan);
        prop_assert!(span.start_index >= 0);
        for (logical, data) in span.indices() {
            prop_assert!(logical >= 0);
            prop_assert!((logical as usize) < len);
            prop_assert_eq!(logical as usize, data);
        }
    }

    #[test]
    fn looping_slots_map_through_true_modulo(
        len in 1_usize..300,
        item in 1.0_f64..200.0,
        offset in 0.0_f64..50_000.0,
        container in 0.0_f64..2_000.0,
        overscan in 0_usize..8,
    ) {
        let items: Vec<usize> = (0..len).collect();
        let config = config(item, 0.0, true);
        let span = compute_window(offset, container, &config, len, overscan);
        let window = span.resolve(&items);
        prop_assert_eq!(window.len(), span.count);

        let n = len as isize;
        for entry in &window {
            let expected = ((entry.logical_index % n) + n) % n;
            prop_assert_eq!(*entry.item, expected as usize);
        }
    }

    #[test]
    fn extreme_extents_stay_bounded(
        len in 1_usize..64,
        item in 0.5_f64..100.0,
        offset in prop_oneof![0.0_f64..1e6, 1e18_f64..1e300],
        container in prop_oneof![-1e300_f64..0.0, 1e6_f64..1e300],
        overscan in 0_usize..8,
        looping in any::<bool>(),
    ) {
        let items: Vec<usize> = (0..len).collect();
        let config = config(item, 0.0, looping);
        let span = compute_window(offset, container, &config, len, overscan);
        if container < 0.0 {
            prop_assert!(span.is_empty());
        }
        prop_assert!(span.count <= 3 * len + 1 + 2 * overscan);

        let window = span.resolve(&items);
        prop_assert_eq!(window.len(), span.count);
        let logical: Vec<isize> = window.iter().map(|entry| entry.logical_index).collect();
        prop_assert!(logical.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn window_is_a_pure_function(
        len in 0_usize..200,
        item in 0.5_f64..100.0,
        offset in -500.0_f64..20_000.0,
        container in 0.0_f64..1_000.0,
        overscan in 0_usize..6,
        looping in any::<bool>(),
    ) {
        let config = config(item, 0.0, looping);
        let first = compute_window(offset, container, &config, len, overscan);
        let second = compute_window(offset, container, &config, len, overscan);
        prop_assert_eq!(first, second);
        prop_assert_eq!(
            first.indices().collect::<Vec<_>>(),
            second.indices().collect::<Vec<_>>()
        );
    }

    #[test]
    fn empty_collection_is_always_empty(
        item in -10.0_f64..100.0,
        offset in -500.0_f64..20_000.0,
        container in 0.0_f64..1_000.0,
        overscan in 0_usize..6,
        looping in any::<bool>(),
    ) {
        let config = config(item, 0.0, looping);
        let span = compute_window(offset, container, &config, 0, overscan);
        prop_assert!(span.is_empty());
        let geometry = compute_track_geometry(span.start_index, &config, 0);
        prop_assert_eq!(geometry.total_extent, 0.0);
    }

    #[test]
    fn overscan_is_symmetric_when_unclamped(
        item in 1.0_f64..100.0,
        overscan in 0_usize..6,
        container in 1.0_f64..500.0,
    ) {
        // Looping never clamps, so the window is the plain visible count plus
        // `overscan` on each side.
        let config = config(item, 0.0, true);
        let offset = 1_000.5 * item;
        let span = compute_window(offset, container, &config, 500, overscan);
        let visible = (container / item).ceil() as usize;
        prop_assert_eq!(span.count, visible + 2 * overscan);
        prop_assert_eq!(span.start_index, 1_000 - overscan as isize);
    }
}

#[test]
fn total_extent_scenario() {
    let config = config(100.0, 10.0, false);
    let geometry = compute_track_geometry(0, &config, 5);
    assert_eq!(geometry.total_extent, 540.0);
}

#[test]
fn non_looping_scenario() {
    let config = config(100.0, 0.0, false);
    let span = compute_window(305.0, 250.0, &config, 10, 2);
    let logical: Vec<isize> = span.indices().map(|(logical, _)| logical).collect();
    assert_eq!(logical, [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn looping_scenario_matches_non_looping_shape() {
    let items: Vec<u32> = (0..10).collect();
    let plain = config(100.0, 0.0, false);
    let looped = config(100.0, 0.0, true);
    let loop_extent = looped.loop_extent(items.len());

    let a = compute_window(305.0, 250.0, &plain, items.len(), 2);
    let b = compute_window(loop_extent + 305.0, 250.0, &looped, items.len(), 2);

    assert_eq!(a.count, b.count);
    let a_items: Vec<u32> = a.resolve(&items).iter().map(|e| *e.item).collect();
    let b_items: Vec<u32> = b.resolve(&items).iter().map(|e| *e.item).collect();
    assert_eq!(a_items, b_items);
}
