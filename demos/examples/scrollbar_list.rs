// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrollbar thumb over a thirty-row list, scrolled from top to bottom.
//!
//! This example shows how a host wires:
//! - `sample_visible_items` standing in for a list widget's realized rows,
//! - a `ScrollbarSession` kept for the lifetime of the list,
//! - `ThumbShape` turning each frame's geometry into a rounded rectangle.
//!
//! Run:
//! - `cargo run -p understory_scrollbar_demos --example scrollbar_list`
//! - `RUST_LOG=understory_scrollbar=trace cargo run -p understory_scrollbar_demos --example scrollbar_list`

use kurbo::Rect;
use understory_scrollbar::{
    ListLayoutSnapshot, ScrollbarConfig, ScrollbarSession, ThumbRenderer, ThumbShape, ThumbStyle,
    ViewportMetrics, sample_visible_items,
};

/// Physical pixels per logical pixel.
const SCALE: f32 = 2.0;

/// Stand-in for the host theme's primary color.
#[derive(Clone, Copy, Debug)]
struct Rgba(u8, u8, u8, u8);

impl Default for Rgba {
    fn default() -> Self {
        Self(0x67, 0x50, 0xa4, 0xff)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Each row is a padded line of text plus a 1px divider.
    let labels: Vec<String> = (1..=30).map(|n| format!("Item {n}")).collect();
    let extents: Vec<f32> = labels.iter().map(|_| (24.0 + 24.0 + 1.0) * SCALE).collect();

    let viewport = ViewportMetrics::new(640.0 * SCALE);
    let track = Rect::new(0.0, 0.0, 360.0 * f64::from(SCALE), f64::from(viewport.height));

    // Floor the thumb at 30 logical pixels.
    let mut session = ScrollbarSession::new(ScrollbarConfig::new(30.0 * SCALE));
    session.set_list_identity(0);
    let mut shape = ThumbShape::new(track);
    let style = ThumbStyle {
        width: 6.0 * f64::from(SCALE),
        ..ThumbStyle::<Rgba>::default()
    };

    let content: f32 = extents.iter().sum();
    let max_scroll = content - viewport.height;
    let steps = 8_u8;
    for step in 0..=steps {
        let scroll = max_scroll * f32::from(step) / f32::from(steps);
        let visible = sample_visible_items(&extents, scroll, viewport.height);
        let snapshot = ListLayoutSnapshot::new(&visible, labels.len());

        let first = visible.first().map_or("-", |item| labels[item.index].as_str());
        match session.try_compute(viewport, &snapshot) {
            Ok(geometry) => {
                let logical = geometry.to_logical(SCALE);
                let painted = shape.render(geometry, &style);
                println!(
                    "scroll {scroll:7.1}px  top row {first:<8} thumb offset {:6.1} height {:6.1} (logical)  rect {:?} {:?}",
                    logical.offset,
                    logical.height,
                    painted.shape.rect(),
                    painted.color,
                );
            }
            Err(reason) => println!("scroll {scroll:7.1}px  top row {first:<8} no thumb: {reason}"),
        }
    }

    // Swapping to a ten-row dataset drops the estimate; ten rows fit on screen, so the
    // fresh list shows no thumb.
    session.set_list_identity(1);
    assert!(!session.estimate().is_set());
    let short = &extents[..10];
    let visible = sample_visible_items(short, 0.0, viewport.height);
    let snapshot = ListLayoutSnapshot::new(&visible, short.len());
    if let Err(reason) = session.try_compute(viewport, &snapshot) {
        println!("short list: {reason}");
    }
}
