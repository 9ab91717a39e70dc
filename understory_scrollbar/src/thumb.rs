// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing-layer seam: turning thumb geometry into something a host can paint.

use kurbo::{Rect, RoundedRect};

use crate::{Scalar, ThumbGeometry};

/// Cosmetic thumb parameters. None of these affect [`ThumbGeometry`].
///
/// `C` is the host's color type; its [`Default`] should be the theme's primary color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbStyle<C> {
    /// Thumb thickness across the track, in the track's coordinate space.
    pub width: f64,
    /// Corner rounding radius. `0.0` draws square corners.
    pub corner_radius: f64,
    /// Fill color.
    pub color: C,
}

impl<C: Default> Default for ThumbStyle<C> {
    fn default() -> Self {
        Self {
            width: 6.0,
            corner_radius: 0.0,
            color: C::default(),
        }
    }
}

/// Renders a thumb for a given geometry and style.
///
/// Hosts implement this for their own drawing primitive; the geometry calculator never
/// depends on one. [`ThumbShape`] is a ready-made implementation producing [`kurbo`]
/// shapes.
pub trait ThumbRenderer<S: Scalar, C> {
    /// Whatever the host's drawing layer consumes.
    type Output;

    /// Produces the visual for one frame's thumb.
    fn render(&mut self, geometry: ThumbGeometry<S>, style: &ThumbStyle<C>) -> Self::Output;
}

/// A thumb shape ready to fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintedThumb<C> {
    /// Outline of the thumb in track-parent coordinates.
    pub shape: RoundedRect,
    /// Fill color.
    pub color: C,
}

/// Places the thumb against the trailing (right) edge of a track rectangle.
///
/// The track's height is expected to match the viewport height the geometry was
/// computed for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbShape {
    /// The track the thumb slides along.
    pub track: Rect,
}

impl ThumbShape {
    /// Creates a renderer for the given `track`.
    #[must_use]
    pub const fn new(track: Rect) -> Self {
        Self { track }
    }

    /// The axis-aligned bounds of the thumb, without rounding.
    #[must_use]
    pub fn thumb_rect<S: Scalar>(&self, geometry: ThumbGeometry<S>, width: f64) -> Rect {
        let track = self.track.abs();
        let width = width.max(0.0).min(track.width());
        let top = track.y0 + geometry.offset.to_f64();
        let bottom = track.y0 + geometry.end().to_f64();
        Rect::new(track.x1 - width, top, track.x1, bottom)
    }
}

impl<S: Scalar, C: Clone> ThumbRenderer<S, C> for ThumbShape {
    type Output = PaintedThumb<C>;

    fn render(&mut self, geometry: ThumbGeometry<S>, style: &ThumbStyle<C>) -> PaintedThumb<C> {
        let rect = self.thumb_rect(geometry, style.width);
        // Radii larger than half the short side are clamped by kurbo.
        let shape = RoundedRect::from_rect(rect, style.corner_radius.max(0.0));
        PaintedThumb {
            shape,
            color: style.color.clone(),
        }
    }
}
