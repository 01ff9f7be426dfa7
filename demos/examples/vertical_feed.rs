// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded vertical feed with throttled scrolling.
//!
//! Shows trailing-edge throttling: a burst of scroll notifications produces
//! one immediate frame and one trailing frame at the settled position.
//!
//! Run:
//! - `cargo run -p understory_demos --example vertical_feed`

use std::time::Duration;

use understory_scroll_loop::{LoopSession, MemoryScrollPort};
use understory_virtual_list::{AxisConfig, Orientation};

fn main() {
    understory_demos::init_tracing();

    let posts: Vec<String> = (0..200).map(|i| format!("post #{i}")).collect();
    let config = AxisConfig::new(72.0)
        .with_gap(4.0)
        .with_orientation(Orientation::Vertical);
    let content = config.loop_extent(posts.len()) - config.gap;
    let surface = MemoryScrollPort::new(480.0).with_content_extent(content);
    let mut session = LoopSession::new(surface, config, posts.len())
        .with_throttle_interval(Duration::from_millis(32));

    let mut now = Duration::ZERO;
    let mut frames = 0;
    for _ in 0..40 {
        now += Duration::from_millis(4);
        if let Some(event) = session.port_mut().scroll_by(55.0) {
            frames += usize::from(session.handle(event, now));
        }
        frames += usize::from(session.poll(now));
    }
    while let Some(deadline) = session.next_deadline() {
        now = deadline;
        frames += usize::from(session.poll(now));
    }

    let frame = session.frame(&posts);
    let size = frame.track_size(360.0);
    println!(
        "{frames} frames for 40 notifications; settled at {:.1} of {:.1}",
        frame.logical_offset, size.height
    );
    println!(
        "realized {} rows starting at #{} (strip offset {:.1})",
        frame.window.len(),
        frame.window.start_index(),
        frame.translation().y
    );
    let entries = frame.window.entries();
    if let (Some(first), Some(last)) = (entries.first(), entries.last()) {
        println!("  {} .. {}", first.item, last.item);
    }
}
