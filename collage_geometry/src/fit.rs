// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting freshly loaded images onto the canvas.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Size};

/// Default margin, in stage pixels, taken off the viewport before fitting.
pub const DEFAULT_FIT_PADDING: f64 = 2.0;

/// Scales `natural` to fit inside `viewport` shrunk by `padding`.
///
/// Aspect ratio is preserved and the result is truncated to whole pixels.
/// Images smaller than the viewport are scaled up to fill it.
///
/// Returns [`Size::ZERO`] if either size is empty or the padding leaves no
/// room.
#[must_use]
pub fn fit_size(natural: Size, viewport: Size, padding: f64) -> Size {
    let target = Size::new(viewport.width - padding, viewport.height - padding);
    if natural.width <= 0.0 || natural.height <= 0.0 || target.width <= 0.0 || target.height <= 0.0
    {
        return Size::ZERO;
    }
    let scale = (target.width / natural.width).min(target.height / natural.height);
    Size::new(
        (natural.width * scale).floor(),
        (natural.height * scale).floor(),
    )
}

/// Where a newly added image is dropped: a quarter of the way into the viewport.
#[must_use]
pub fn initial_position(viewport: Size) -> Point {
    Point::new(viewport.width / 4.0, viewport.height / 4.0)
}
