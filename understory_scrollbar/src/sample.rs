// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Producing layout snapshots from known item extents.
//!
//! Real hosts read visible items straight out of their list widget. This helper builds
//! the same sequence from a slice of per-item extents and a scroll position, which is
//! handy for headless hosts, demos, and tests.

use smallvec::SmallVec;

use crate::{Scalar, VisibleItem};

/// Inline storage for the handful of items a viewport typically shows.
pub type VisibleItems<S> = SmallVec<[VisibleItem<S>; 32]>;

/// Returns the items overlapping `[scroll_offset, scroll_offset + viewport_height)`.
///
/// `extents[i]` is the size of item `i`; items are laid out back to back from `0`.
/// Each returned item's `offset` is relative to the viewport start, so the leading item is
/// negative while partially scrolled out. Negative `scroll_offset` models overscroll
/// past the start. Non-positive or non-finite extents take no space and are never
/// reported.
pub fn sample_visible_items<S: Scalar>(
    extents: &[S],
    scroll_offset: S,
    viewport_height: S,
) -> VisibleItems<S> {
    let mut visible = VisibleItems::new();
    if !scroll_offset.is_finite() || !viewport_height.is_finite() {
        return visible;
    }
    let view_end = scroll_offset + viewport_height.max(S::zero());

    let mut start = S::zero();
    for (index, &size) in extents.iter().enumerate() {
        if start >= view_end {
            break;
        }
        if !size.is_finite() || size <= S::zero() {
            continue;
        }
        let end = start + size;
        if end > scroll_offset {
            visible.push(VisibleItem {
                index,
                size,
                offset: start - scroll_offset,
            });
        }
        start = end;
    }
    visible
}
