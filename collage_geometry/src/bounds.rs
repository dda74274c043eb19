// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding rules for drag and resize interactions.
//!
//! Transform handles propose a new [`RotatedBox`] on every pointer move. The
//! helpers here decide whether to accept it:
//!
//! - [`limit_box`] rejects proposals whose client rect leaves the canvas.
//! - [`limit_resize`] rejects proposals smaller than a minimum size.
//! - [`keep_inside`] computes the translation that moves a dragged group back
//!   inside the canvas.
//!
//! Rejection returns the previous box unchanged, so handles simply stop at the
//! boundary instead of jumping.

use kurbo::{Rect, Vec2};

use crate::RotatedBox;

/// Default minimum width/height for resized objects, in stage pixels.
pub const DEFAULT_MIN_SIZE: f64 = 5.0;

/// Returns `true` if `inner` lies entirely within `outer` (edges may touch).
#[must_use]
pub fn contains_rect(outer: Rect, inner: Rect) -> bool {
    inner.x0 >= outer.x0 && inner.y0 >= outer.y0 && inner.x1 <= outer.x1 && inner.y1 <= outer.y1
}

/// Accepts `new` only if its rotated client rect stays inside `bounds`.
#[must_use]
pub fn limit_box(old: RotatedBox, new: RotatedBox, bounds: Rect) -> RotatedBox {
    if contains_rect(bounds, new.client_rect()) {
        new
    } else {
        old
    }
}

/// Accepts `new` only if both of its sides are at least `min_size` long.
///
/// Sides are compared by magnitude so flipped (negative) sizes are judged the
/// same way as their mirror images.
#[must_use]
pub fn limit_resize(old: RotatedBox, new: RotatedBox, min_size: f64) -> RotatedBox {
    if new.size.width.abs() < min_size || new.size.height.abs() < min_size {
        old
    } else {
        new
    }
}

/// Returns the translation that pushes `total` back inside `bounds`.
///
/// Each axis is handled on its own. If the box sticks out on the far side it is
/// aligned with the far edge; otherwise, if it sticks out on the near side it is
/// aligned with the near edge. A box larger than `bounds` therefore ends up
/// flush with the far edge.
#[must_use]
pub fn keep_inside(total: Rect, bounds: Rect) -> Vec2 {
    Vec2::new(
        axis_correction(total.x0, total.x1, bounds.x0, bounds.x1),
        axis_correction(total.y0, total.y1, bounds.y0, bounds.y1),
    )
}

fn axis_correction(lo: f64, hi: f64, min: f64, max: f64) -> f64 {
    if hi > max {
        max - hi
    } else if lo < min {
        min - lo
    } else {
        0.0
    }
}
