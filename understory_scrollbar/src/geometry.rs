// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumb geometry derived from an estimated content height.

use core::cmp::Ordering;

use crate::{ItemHeightEstimate, ListLayoutSnapshot, Scalar, ViewportMetrics};

/// Geometry tuning supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarConfig<S: Scalar> {
    /// Smallest thumb height, in the same units as the viewport.
    ///
    /// Only applies while the viewport itself is at least this tall; the thumb never
    /// exceeds the track.
    pub min_thumb: S,
}

impl<S: Scalar> ScrollbarConfig<S> {
    /// Creates a config with the given minimum thumb height.
    #[must_use]
    pub const fn new(min_thumb: S) -> Self {
        Self { min_thumb }
    }
}

impl<S: Scalar> Default for ScrollbarConfig<S> {
    fn default() -> Self {
        Self {
            min_thumb: S::from_usize(30),
        }
    }
}

/// Position and size of the thumb along the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbGeometry<S: Scalar> {
    /// Distance from the top of the track to the top of the thumb.
    pub offset: S,
    /// Thumb length along the track.
    pub height: S,
}

impl<S: Scalar> ThumbGeometry<S> {
    /// Distance from the top of the track to the bottom of the thumb.
    #[must_use]
    pub fn end(&self) -> S {
        self.offset + self.height
    }

    /// Converts physical pixels into logical units by dividing by `scale_factor`.
    ///
    /// Non-positive or non-finite scale factors leave the geometry unchanged.
    #[must_use]
    pub fn to_logical(self, scale_factor: S) -> Self {
        if !scale_factor.is_finite() || scale_factor <= S::zero() {
            return self;
        }
        Self {
            offset: self.offset / scale_factor,
            height: self.height / scale_factor,
        }
    }
}

/// Why no thumb should be drawn for a frame.
///
/// None of these are faults; every variant means "render nothing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NoThumb {
    /// The list has not laid out any items yet.
    #[error("no items laid out")]
    Empty,
    /// The viewport has not been measured, or measured to a non-positive height.
    #[error("viewport not measured")]
    Unmeasured,
    /// The snapshot or config contained values a well-behaved host never reports.
    #[error("malformed layout snapshot")]
    Malformed,
    /// The estimated content fits inside the viewport.
    #[error("content fits viewport")]
    FitsViewport,
}

/// Computes the thumb geometry for one frame, reporting why none applies.
///
/// On the first call that passes the layout and viewport checks, `estimate` latches the
/// mean size of `snapshot.visible_items`; later calls reuse it. That latch is the only
/// mutation performed.
///
/// The estimated content height is `estimate * total_item_count`. The thumb height is
/// `viewport² / content`, clamped to `[config.min_thumb, viewport]`. The scroll position is
/// reconstructed from the first visible item as `index * estimate - offset`, and mapped
/// linearly onto the free part of the track, clamped so the thumb stays on it.
pub fn try_compute_thumb<S: Scalar>(
    viewport: ViewportMetrics<S>,
    snapshot: &ListLayoutSnapshot<'_, S>,
    estimate: &mut ItemHeightEstimate<S>,
    config: &ScrollbarConfig<S>,
) -> Result<ThumbGeometry<S>, NoThumb> {
    let Some(first) = snapshot.first_visible() else {
        return Err(NoThumb::Empty);
    };
    if snapshot.total_item_count == 0 {
        return Err(NoThumb::Empty);
    }
    if !viewport.is_measured() {
        return Err(NoThumb::Unmeasured);
    }
    let floor_valid = matches!(
        config.min_thumb.partial_cmp(&S::zero()),
        Some(Ordering::Greater | Ordering::Equal)
    );
    if !snapshot.is_well_formed() || !floor_valid {
        return Err(NoThumb::Malformed);
    }

    let item_height = estimate
        .get_or_init_with(snapshot.visible_items)
        .ok_or(NoThumb::Malformed)?;
    let viewport_height = viewport.height;

    let content_height = item_height * S::from_usize(snapshot.total_item_count);
    if !content_height.is_finite() {
        return Err(NoThumb::Malformed);
    }
    if content_height <= viewport_height {
        return Err(NoThumb::FitsViewport);
    }

    // Ceiling wins when the viewport is shorter than the floor.
    let thumb_height = (viewport_height * viewport_height / content_height)
        .max(config.min_thumb)
        .min(viewport_height);
    let free_track = viewport_height - thumb_height;
    let last_offset = last_offset_on_track(free_track, thumb_height, viewport_height);

    let scroll_offset = S::from_usize(first.index) * item_height - first.offset;
    let max_scroll = (content_height - viewport_height).max(S::one());

    // Overscroll can push `scroll_offset` outside `[0, max_scroll]`.
    let thumb_offset = (scroll_offset / max_scroll * free_track)
        .max(S::zero())
        .min(last_offset);

    Ok(ThumbGeometry {
        offset: thumb_offset,
        height: thumb_height,
    })
}

/// Largest offset at or below `free_track` whose rounded end stays within `track`.
///
/// `track - thumb_height` can round up, leaving `offset + thumb_height` one ulp past the
/// track. The cap does not depend on the scroll position, so clamping to it keeps the
/// thumb offset monotonic.
fn last_offset_on_track<S: Scalar>(free_track: S, thumb_height: S, track: S) -> S {
    let mut offset = free_track.max(S::zero());
    for _ in 0..4 {
        let overshoot = (offset + thumb_height) - track;
        if overshoot <= S::zero() {
            return offset;
        }
        offset = (offset - overshoot).max(S::zero());
    }
    if offset + thumb_height <= track {
        offset
    } else {
        // `0 + thumb_height` is exact and `thumb_height <= track`.
        S::zero()
    }
}

/// Computes the thumb geometry for one frame, or `None` when nothing should be drawn.
///
/// See [`try_compute_thumb`] for the derivation.
pub fn compute_thumb<S: Scalar>(
    viewport: ViewportMetrics<S>,
    snapshot: &ListLayoutSnapshot<'_, S>,
    estimate: &mut ItemHeightEstimate<S>,
    config: &ScrollbarConfig<S>,
) -> Option<ThumbGeometry<S>> {
    try_compute_thumb(viewport, snapshot, estimate, config).ok()
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{NoThumb, ScrollbarConfig, ThumbGeometry, compute_thumb, try_compute_thumb};
    use crate::{ItemHeightEstimate, ListLayoutSnapshot, Scalar, ViewportMetrics, VisibleItem};

    const EPS: f64 = 0.05;

    /// Items `first..first + count` of uniform `size`, the first one at `first_offset`.
    fn run(first: usize, count: usize, size: f64, first_offset: f64) -> Vec<VisibleItem<f64>> {
        (0..count)
            .map(|i| VisibleItem {
                index: first + i,
                size,
                offset: first_offset + size * i as f64,
            })
            .collect()
    }

    fn thumb(
        viewport: f64,
        items: &[VisibleItem<f64>],
        total: usize,
        estimate: &mut ItemHeightEstimate<f64>,
    ) -> Result<ThumbGeometry<f64>, NoThumb> {
        try_compute_thumb(
            ViewportMetrics::new(viewport),
            &ListLayoutSnapshot::new(items, total),
            estimate,
            &ScrollbarConfig::default(),
        )
    }

    #[test]
    fn thirty_items_at_top() {
        let mut estimate = ItemHeightEstimate::new();
        let geometry = thumb(800.0, &run(0, 16, 50.0, 0.0), 30, &mut estimate).unwrap();
        assert_eq!(estimate.get(), Some(50.0));
        assert!((geometry.height - 426.67).abs() < EPS);
        assert_eq!(geometry.offset, 0.0);
    }

    #[test]
    fn thirty_items_scrolled_to_tenth() {
        let mut estimate = ItemHeightEstimate::new();
        let geometry = thumb(800.0, &run(10, 16, 50.0, 0.0), 30, &mut estimate).unwrap();
        // scroll = 500, max scroll = 700, free track = 800 - 426.67.
        let expected = 500.0 / 700.0 * (800.0 - 800.0 * 800.0 / 1500.0);
        assert!((geometry.offset - expected).abs() < 1e-9);
        assert!((geometry.offset - 266.67).abs() < EPS);
    }

    #[test]
    fn content_smaller_than_viewport_has_no_thumb() {
        let mut estimate = ItemHeightEstimate::new();
        let result = thumb(800.0, &run(0, 10, 50.0, 0.0), 10, &mut estimate);
        assert_eq!(result, Err(NoThumb::FitsViewport));
    }

    #[test]
    fn content_exactly_filling_viewport_has_no_thumb() {
        let mut estimate = ItemHeightEstimate::new();
        let result = thumb(800.0, &run(0, 16, 50.0, 0.0), 16, &mut estimate);
        assert_eq!(result, Err(NoThumb::FitsViewport));
    }

    #[test]
    fn unmeasured_viewport_has_no_thumb_and_does_not_latch() {
        let mut estimate = ItemHeightEstimate::new();
        let result = thumb(0.0, &run(0, 16, 50.0, 0.0), 30, &mut estimate);
        assert_eq!(result, Err(NoThumb::Unmeasured));
        assert!(!estimate.is_set());

        let result = thumb(-10.0, &run(0, 16, 50.0, 0.0), 30, &mut estimate);
        assert_eq!(result, Err(NoThumb::Unmeasured));
    }

    #[test]
    fn empty_layout_has_no_thumb() {
        let mut estimate = ItemHeightEstimate::new();
        assert_eq!(thumb(800.0, &[], 30, &mut estimate), Err(NoThumb::Empty));
        assert_eq!(
            thumb(800.0, &run(0, 3, 50.0, 0.0), 0, &mut estimate),
            Err(NoThumb::Empty)
        );
        assert!(!estimate.is_set());
    }

    #[test]
    fn malformed_snapshot_has_no_thumb() {
        let mut estimate = ItemHeightEstimate::new();
        let items = [VisibleItem {
            index: 0,
            size: -5.0,
            offset: 0.0,
        }];
        assert_eq!(thumb(800.0, &items, 30, &mut estimate), Err(NoThumb::Malformed));
        assert!(!estimate.is_set());
    }

    #[test]
    fn estimate_is_not_resampled() {
        let mut estimate = ItemHeightEstimate::new();
        thumb(800.0, &run(0, 16, 50.0, 0.0), 30, &mut estimate).unwrap();
        // Later rows are twice as tall, but the latched estimate still drives the math.
        let geometry = thumb(800.0, &run(10, 8, 100.0, 0.0), 30, &mut estimate).unwrap();
        assert_eq!(estimate.get(), Some(50.0));
        assert!((geometry.height - 426.67).abs() < EPS);
    }

    #[test]
    fn thumb_height_is_floored() {
        let mut estimate = ItemHeightEstimate::new();
        // 10 000 items of 50px: proportional height would be 1.28px.
        let geometry = thumb(800.0, &run(0, 16, 50.0, 0.0), 10_000, &mut estimate).unwrap();
        assert_eq!(geometry.height, 30.0);
    }

    #[test]
    fn short_viewport_caps_thumb_at_track() {
        let mut estimate = ItemHeightEstimate::new();
        let geometry = thumb(20.0, &run(0, 1, 10.0, 0.0), 100, &mut estimate).unwrap();
        assert_eq!(geometry.height, 20.0);
        assert_eq!(geometry.offset, 0.0);
    }

    #[test]
    fn overscroll_keeps_thumb_on_track() {
        let mut estimate = ItemHeightEstimate::new();
        // Bounced past the top: leading item pushed down by 40px.
        let top = thumb(800.0, &run(0, 16, 50.0, 40.0), 30, &mut estimate).unwrap();
        assert_eq!(top.offset, 0.0);

        // Bounced past the bottom.
        let bottom = thumb(800.0, &run(29, 1, 50.0, -300.0), 30, &mut estimate).unwrap();
        assert!(bottom.end() <= 800.0);
        assert!(bottom.offset > 373.0);
    }

    #[test]
    fn partial_leading_item_advances_thumb() {
        let mut estimate = ItemHeightEstimate::new();
        let aligned = thumb(800.0, &run(4, 17, 50.0, 0.0), 30, &mut estimate).unwrap();
        let partial = thumb(800.0, &run(4, 17, 50.0, -25.0), 30, &mut estimate).unwrap();
        assert!(partial.offset > aligned.offset);
    }

    #[test]
    fn thumb_stays_within_track_while_scrolling() {
        let mut estimate = ItemHeightEstimate::new();
        let mut last = 0.0;
        for first in 0..30 {
            for step in 0_u8..5 {
                let geometry = thumb(
                    800.0,
                    &run(first, 17.min(30 - first), 50.0, -f64::from(step) * 10.0),
                    30,
                    &mut estimate,
                )
                .unwrap();
                assert!(geometry.offset >= 0.0);
                assert!(geometry.end() <= 800.0);
                assert!(geometry.height >= 30.0);
                assert!(geometry.offset >= last, "thumb moved backwards");
                last = geometry.offset;
            }
        }
    }

    #[test]
    fn compute_thumb_matches_try_compute() {
        let mut estimate = ItemHeightEstimate::new();
        let items = run(0, 10, 50.0, 0.0);
        let snapshot = ListLayoutSnapshot::new(&items, 10);
        let none = compute_thumb(
            ViewportMetrics::new(800.0),
            &snapshot,
            &mut estimate,
            &ScrollbarConfig::default(),
        );
        assert_eq!(none, None);
    }

    #[test]
    fn logical_conversion_divides_by_scale() {
        let geometry = ThumbGeometry {
            offset: 90.0_f32,
            height: 60.0,
        };
        assert_eq!(
            geometry.to_logical(3.0),
            ThumbGeometry {
                offset: 30.0,
                height: 20.0
            }
        );
        assert_eq!(geometry.to_logical(0.0), geometry);
    }

    /// Thumb for a single `size`-tall item at `index`, with a fresh estimate.
    fn single<S: Scalar>(
        viewport: S,
        size: S,
        index: usize,
        offset: S,
        total: usize,
    ) -> Result<ThumbGeometry<S>, NoThumb> {
        let items = [VisibleItem {
            index,
            size,
            offset,
        }];
        try_compute_thumb(
            ViewportMetrics::new(viewport),
            &ListLayoutSnapshot::new(&items, total),
            &mut ItemHeightEstimate::new(),
            &ScrollbarConfig::default(),
        )
    }

    /// Every thumb over a range of viewports, sizes, and counts ends on the track.
    fn assert_end_on_track<S: Scalar>(viewports: impl Iterator<Item = S>, sizes: &[S]) {
        for viewport in viewports {
            for &size in sizes {
                for total in [40, 97, 300] {
                    for (index, offset) in [(total - 1, S::zero()), (total - 1, -size), (0, size)] {
                        let Ok(geometry) = single(viewport, size, index, offset, total) else {
                            continue;
                        };
                        assert!(
                            geometry.end() <= viewport,
                            "thumb {geometry:?} overruns {viewport:?} (size {size:?}, {total} items)"
                        );
                        assert!(geometry.offset >= S::zero(), "negative offset {geometry:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn thumb_end_never_exceeds_track_f32() {
        // 171.3 with 40 rows of 17 used to end at 171.30002.
        let viewports = (0_u16..1400).map(|i| 100.3_f32 + f32::from(i));
        assert_end_on_track(viewports, &[17.0_f32, 33.3, 48.7, 50.0, 61.1]);

        let geometry = single(171.3_f32, 17.0, 39, 0.0, 40).unwrap();
        assert!(geometry.end() <= 171.3);
    }

    #[test]
    fn thumb_end_never_exceeds_track_f64() {
        let viewports = (0_u16..1400).map(|i| 100.3_f64 + f64::from(i) * 1.1);
        assert_end_on_track(viewports, &[17.0_f64, 33.3, 48.7, 50.0, 61.1]);
    }

    /// Whenever `size * count` fits the viewport, no thumb is produced; otherwise one is.
    fn assert_fits_means_no_thumb<S: Scalar>(viewports: &[S], sizes: &[S]) {
        for &viewport in viewports {
            for &size in sizes {
                for total in 1..=60 {
                    let content = size * S::from_usize(total);
                    let result = single(viewport, size, 0, S::zero(), total);
                    if content <= viewport {
                        assert_eq!(result, Err(NoThumb::FitsViewport), "{size:?} x {total}");
                    } else {
                        assert!(result.is_ok(), "{size:?} x {total} in {viewport:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn content_that_fits_never_shows_thumb() {
        assert_fits_means_no_thumb(&[100.0_f32, 333.3, 800.0, 1500.0], &[0.1, 17.0, 33.3, 50.0]);
        assert_fits_means_no_thumb(&[100.0_f64, 333.3, 800.0, 1500.0], &[0.1, 17.0, 33.3, 50.0]);
    }

    #[test]
    fn min_thumb_config_validation() {
        let items = run(0, 16, 50.0, 0.0);
        let snapshot = ListLayoutSnapshot::new(&items, 30);
        let viewport = ViewportMetrics::new(800.0);
        let with_floor = |min_thumb: f64| {
            try_compute_thumb(
                viewport,
                &snapshot,
                &mut ItemHeightEstimate::new(),
                &ScrollbarConfig::new(min_thumb),
            )
        };

        assert!(with_floor(-0.0).is_ok());
        assert!(with_floor(0.0).is_ok());
        assert_eq!(with_floor(f64::NAN), Err(NoThumb::Malformed));
        assert_eq!(with_floor(-1.0), Err(NoThumb::Malformed));
    }
}
