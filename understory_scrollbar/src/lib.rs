// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scrollbar --heading-base-level=0

//! Understory Scrollbar: thumb geometry for virtualized lists.
//!
//! A virtualized list only measures the items it has realized, so the true content height
//! is unknown. This crate estimates it and derives a scrollbar thumb whose length and
//! position track scroll progress anyway.
//!
//! The core concepts are:
//!
//! - [`ListLayoutSnapshot`]: a borrowed, per-frame read of the list's realized items
//!   ([`VisibleItem`]) and total item count.
//! - [`ViewportMetrics`]: the measured viewport height.
//! - [`ItemHeightEstimate`]: a write-once average item height, latched from the first
//!   non-empty snapshot and reused afterwards.
//! - [`compute_thumb`] / [`try_compute_thumb`]: the geometry derivation, returning a
//!   [`ThumbGeometry`] or nothing (with a [`NoThumb`] reason from the `try_` variant).
//! - [`ScrollbarSession`]: owns one list's estimate and [`ScrollbarConfig`], and drops the
//!   estimate when the list's item count or identity changes.
//! - [`ThumbRenderer`]: the seam to the host's drawing layer, with [`ThumbShape`] as a
//!   [`kurbo`]-based implementation.
//!
//! This crate deliberately does **not** know about widgets, themes, or input handling.
//! Host frameworks are responsible for:
//!
//! - Measuring the viewport and reading visible items from their list each frame.
//! - Keeping one [`ScrollbarSession`] per mounted list.
//! - Drawing (or hiding) the thumb for each result.
//!
//! ## Minimal example
//!
//! Thirty 50px rows in an 800px viewport, scrolled so row 10 sits at the top:
//!
//! ```rust
//! use understory_scrollbar::{
//!     ListLayoutSnapshot, ScrollbarSession, ViewportMetrics, sample_visible_items,
//! };
//!
//! let extents = [50.0_f32; 30];
//! let viewport = ViewportMetrics::new(800.0);
//! let mut session = ScrollbarSession::default();
//!
//! let visible = sample_visible_items(&extents, 500.0, viewport.height);
//! let snapshot = ListLayoutSnapshot::new(&visible, extents.len());
//!
//! let thumb = session.compute(viewport, &snapshot).unwrap();
//! assert!((thumb.height - 426.67).abs() < 0.01);
//! assert!((thumb.offset - 266.67).abs() < 0.01);
//! assert!(thumb.end() <= viewport.height);
//! ```
//!
//! Content that fits the viewport produces no thumb:
//!
//! ```rust
//! use understory_scrollbar::{ListLayoutSnapshot, ScrollbarSession, ViewportMetrics, VisibleItem};
//!
//! let rows = [VisibleItem { index: 0, size: 50.0_f64, offset: 0.0 }];
//! let snapshot = ListLayoutSnapshot::new(&rows, 10);
//! let mut session = ScrollbarSession::default();
//! assert_eq!(session.compute(ViewportMetrics::new(800.0), &snapshot), None);
//! ```
//!
//! ## Drawing
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_scrollbar::{ThumbGeometry, ThumbRenderer, ThumbShape, ThumbStyle};
//!
//! let mut shape = ThumbShape::new(Rect::new(0.0, 0.0, 360.0, 800.0));
//! let style = ThumbStyle { corner_radius: 3.0, ..ThumbStyle::<u32>::default() };
//! let painted = shape.render(ThumbGeometry { offset: 100.0_f64, height: 40.0 }, &style);
//! assert_eq!(painted.shape.rect(), Rect::new(354.0, 100.0, 360.0, 140.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for `kurbo`'s floating-point math.
//!
//! Diagnostics go through the [`log`] facade at `trace` and `debug` level.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod estimate;
mod geometry;
mod layout;
mod sample;
mod scalar;
mod session;
mod thumb;

pub use estimate::ItemHeightEstimate;
pub use geometry::{NoThumb, ScrollbarConfig, ThumbGeometry, compute_thumb, try_compute_thumb};
pub use layout::{ListLayoutSnapshot, ViewportMetrics, VisibleItem};
pub use sample::{VisibleItems, sample_visible_items};
pub use scalar::Scalar;
pub use session::ScrollbarSession;
pub use thumb::{PaintedThumb, ThumbRenderer, ThumbShape, ThumbStyle};
