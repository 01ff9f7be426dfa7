// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Endless horizontal carousel.
//!
//! Drive a looping `LoopSession` over an in-memory scroll surface and print
//! which photos are realized as the user flings past both ends.
//!
//! Run:
//! - `cargo run -p understory_demos --example loop_carousel`
//! - `RUST_LOG=understory_scroll_loop=trace cargo run -p understory_demos --example loop_carousel`

use std::time::Duration;

use understory_scroll_loop::{LoopSession, MemoryScrollPort, PresentedSet};
use understory_virtual_list::AxisConfig;

fn main() {
    understory_demos::init_tracing();

    let photos = [
        "harbor.jpg",
        "dunes.jpg",
        "glacier.jpg",
        "market.jpg",
        "orchard.jpg",
        "canyon.jpg",
    ];
    let config = AxisConfig::new(240.0).with_gap(16.0).with_looping(true);
    let surface = MemoryScrollPort::new(600.0);
    let mut session = LoopSession::new(surface, config, photos.len()).with_overscan(1);
    let mut presented = PresentedSet::new();

    tracing::info!(
        loop_extent = session.normalizer().loop_extent(),
        offset = session.logical_offset(),
        "carousel mounted"
    );

    // Fling right, then back left past the start. Each tick is ~16ms.
    let deltas = core::iter::repeat_n(90.0, 24).chain(core::iter::repeat_n(-120.0, 30));
    let mut now = Duration::ZERO;
    for delta in deltas {
        now += Duration::from_millis(16);
        if let Some(event) = session.port_mut().scroll_by(delta) {
            session.handle(event, now);
        }
        session.poll(now);

        let frame = session.frame(&photos);
        let strip: Vec<String> = frame
            .with_presence(&presented, |photo: &&str| *photo)
            .map(|(entry, seen)| {
                let marker = if seen { "" } else { "*" };
                format!("{}{marker}", entry.item)
            })
            .collect();
        println!(
            "offset {:>7.1}  shift {:>7.1}  [{}]",
            frame.logical_offset,
            frame.translation().x,
            strip.join(", ")
        );

        for entry in &frame.window {
            presented.mark(*entry.item);
        }
    }

    drop(session);
    println!("(* = first presentation)");
}
