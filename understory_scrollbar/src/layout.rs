// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only layout inputs supplied by the host list each frame.

use crate::Scalar;

/// Measured size of the scrollable viewport along the scroll axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics<S: Scalar> {
    /// Pixel height of the visible area.
    pub height: S,
}

impl<S: Scalar> ViewportMetrics<S> {
    /// Creates viewport metrics for a measured container of the given `height`.
    #[must_use]
    pub const fn new(height: S) -> Self {
        Self { height }
    }

    /// Metrics for a container that has not been laid out yet.
    #[must_use]
    pub fn unmeasured() -> Self {
        Self { height: S::zero() }
    }

    /// Returns `true` once the host has measured a positive, finite height.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.height.is_finite() && self.height > S::zero()
    }
}

/// Layout of one item the list currently has realized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleItem<S: Scalar> {
    /// Index of the item in the full list.
    pub index: usize,
    /// Measured extent of the item along the scroll axis.
    pub size: S,
    /// Offset of the item's leading edge relative to the viewport start.
    ///
    /// Negative while the item is partially scrolled above the viewport.
    pub offset: S,
}

/// A point-in-time read of a virtualized list's layout.
///
/// Borrowed from the host for a single computation; the calculator never retains it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListLayoutSnapshot<'a, S: Scalar> {
    /// Realized items in list order.
    pub visible_items: &'a [VisibleItem<S>],
    /// Number of items in the whole list, realized or not.
    pub total_item_count: usize,
}

impl<'a, S: Scalar> ListLayoutSnapshot<'a, S> {
    /// Creates a snapshot over `visible_items` for a list of `total_item_count` items.
    #[must_use]
    pub const fn new(visible_items: &'a [VisibleItem<S>], total_item_count: usize) -> Self {
        Self {
            visible_items,
            total_item_count,
        }
    }

    /// Returns `true` if nothing has been laid out yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.visible_items.is_empty() || self.total_item_count == 0
    }

    /// The first realized item in list order, if any.
    #[must_use]
    pub fn first_visible(&self) -> Option<&VisibleItem<S>> {
        self.visible_items.first()
    }

    /// Checks the snapshot for values a well-behaved list never reports.
    ///
    /// Sizes must be finite and positive, offsets finite, and indices strictly
    /// increasing and within `0..total_item_count`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let mut prev: Option<usize> = None;
        for item in self.visible_items {
            if !item.size.is_finite() || item.size <= S::zero() || !item.offset.is_finite() {
                return false;
            }
            if item.index >= self.total_item_count {
                return false;
            }
            if prev.is_some_and(|p| item.index <= p) {
                return false;
            }
            prev = Some(item.index);
        }
        true
    }
}
