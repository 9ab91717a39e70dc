// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scrollbar session owning the per-list estimate.

use crate::{
    ItemHeightEstimate, ListLayoutSnapshot, NoThumb, Scalar, ScrollbarConfig, ThumbGeometry,
    ViewportMetrics, try_compute_thumb,
};

/// Scrollbar state for one mounted list.
///
/// This type:
/// - owns the [`ItemHeightEstimate`] for the list it is attached to,
/// - holds the [`ScrollbarConfig`] used for every frame,
/// - discards the estimate when the list's item count or identity changes,
///   since the old average would describe a different dataset.
///
/// Create one session per list and drop it (or call [`reset`](Self::reset)) when the list
/// unmounts. Sessions are not meant to be shared between lists.
#[derive(Debug, Clone)]
pub struct ScrollbarSession<S: Scalar> {
    config: ScrollbarConfig<S>,
    estimate: ItemHeightEstimate<S>,
    item_count: Option<usize>,
    list_identity: Option<u64>,
}

impl<S: Scalar> Default for ScrollbarSession<S> {
    fn default() -> Self {
        Self::new(ScrollbarConfig::default())
    }
}

impl<S: Scalar> ScrollbarSession<S> {
    /// Creates a session with no estimate and the given `config`.
    #[must_use]
    pub const fn new(config: ScrollbarConfig<S>) -> Self {
        Self {
            config,
            estimate: ItemHeightEstimate::new(),
            item_count: None,
            list_identity: None,
        }
    }

    /// Returns the geometry config.
    #[must_use]
    pub const fn config(&self) -> &ScrollbarConfig<S> {
        &self.config
    }

    /// Replaces the geometry config. The estimate is kept.
    pub fn set_config(&mut self, config: ScrollbarConfig<S>) {
        self.config = config;
    }

    /// Returns the estimate latched for the current list.
    #[must_use]
    pub const fn estimate(&self) -> &ItemHeightEstimate<S> {
        &self.estimate
    }

    /// Tells the session which dataset the list is showing.
    ///
    /// A change of identity discards the estimate. The first identity set on a fresh
    /// session is simply recorded.
    pub fn set_list_identity(&mut self, identity: u64) {
        match self.list_identity.replace(identity) {
            Some(previous) if previous != identity => {
                log::debug!("list identity changed from {previous} to {identity}");
                self.estimate.reset();
                self.item_count = None;
            }
            _ => {}
        }
    }

    /// Discards the estimate and everything known about the attached list.
    pub fn reset(&mut self) {
        log::debug!("scrollbar session reset");
        self.estimate.reset();
        self.item_count = None;
        self.list_identity = None;
    }

    /// Computes this frame's thumb, reporting why none applies.
    ///
    /// A change in `snapshot.total_item_count` since the previous frame discards the
    /// estimate before computing.
    pub fn try_compute(
        &mut self,
        viewport: ViewportMetrics<S>,
        snapshot: &ListLayoutSnapshot<'_, S>,
    ) -> Result<ThumbGeometry<S>, NoThumb> {
        let count = snapshot.total_item_count;
        match self.item_count.replace(count) {
            Some(previous) if previous != count => {
                log::debug!("item count changed from {previous} to {count}; dropping estimate");
                self.estimate.reset();
            }
            _ => {}
        }

        let result = try_compute_thumb(viewport, snapshot, &mut self.estimate, &self.config);
        match &result {
            Ok(geometry) => log::trace!("thumb {geometry:?}"),
            Err(reason) => log::trace!("no thumb: {reason}"),
        }
        result
    }

    /// Computes this frame's thumb, or `None` when nothing should be drawn.
    pub fn compute(
        &mut self,
        viewport: ViewportMetrics<S>,
        snapshot: &ListLayoutSnapshot<'_, S>,
    ) -> Option<ThumbGeometry<S>> {
        self.try_compute(viewport, snapshot).ok()
    }
}
