// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Write-once average item height.

use crate::{Scalar, VisibleItem};

/// Per-session estimate of the height of one list item.
///
/// The estimate latches on the first non-empty sample and is then reused for every
/// later frame, even if items measured afterwards differ. Only [`reset`](Self::reset)
/// clears it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemHeightEstimate<S: Scalar> {
    value: Option<S>,
}

impl<S: Scalar> ItemHeightEstimate<S> {
    /// Creates an unset estimate.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Returns the latched estimate, if any.
    #[must_use]
    pub const fn get(&self) -> Option<S> {
        self.value
    }

    /// Returns `true` once a sample has been taken.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the latched estimate, initializing it from `items` if unset.
    ///
    /// Initialization takes the arithmetic mean of `size` across `items`. An empty
    /// sample, or one whose mean is not a positive finite number, leaves the estimate
    /// unset and returns `None`.
    pub fn get_or_init_with(&mut self, items: &[VisibleItem<S>]) -> Option<S> {
        if let Some(value) = self.value {
            return Some(value);
        }
        let mean = mean_size(items)?;
        log::trace!("item height estimate latched at {mean:?} from {} items", items.len());
        self.value = Some(mean);
        Some(mean)
    }

    /// Clears the estimate so the next sample latches a fresh value.
    pub fn reset(&mut self) {
        self.value = None;
    }
}

fn mean_size<S: Scalar>(items: &[VisibleItem<S>]) -> Option<S> {
    if items.is_empty() {
        return None;
    }
    let sum = items.iter().fold(S::zero(), |acc, item| acc + item.size);
    let mean = sum / S::from_usize(items.len());
    (mean.is_finite() && mean > S::zero()).then_some(mean)
}
