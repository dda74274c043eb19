// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crop box to source-pixel transform.
//!
//! An image object shows some rectangle of its source image (its current
//! crop), stretched to its displayed size, then scaled, rotated, and placed
//! on the stage. The user draws a new crop box in stage space. This module
//! maps that box back into source pixels so the new crop is always expressed
//! against the original file, no matter how many crops and resizes came
//! before.
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use collage_geometry::crop::{crop_to_source, CropRequest};
//!
//! // A 1000x500 source shown at half size at (100, 100).
//! let request = CropRequest {
//!     crop_box: Rect::new(150.0, 100.0, 350.0, 200.0),
//!     position: Point::new(100.0, 100.0),
//!     rotation: 0.0,
//!     scale: Vec2::new(1.0, 1.0),
//!     displayed_size: Size::new(500.0, 250.0),
//!     prior_crop: Rect::new(0.0, 0.0, 1000.0, 500.0),
//!     source_size: Size::new(1000.0, 500.0),
//! };
//! let placement = crop_to_source(&request).unwrap();
//! assert_eq!(placement.source, Rect::new(100.0, 0.0, 500.0, 200.0));
//! assert_eq!(placement.position, Point::new(150.0, 100.0));
//! assert_eq!(placement.size, Size::new(200.0, 100.0));
//! ```

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::RotatedBox;

/// Everything needed to map a stage-space crop box into source pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropRequest {
    /// The crop box in stage space, measured along the object's own axes:
    /// `crop_box.origin()` is the box's top-left corner on the stage, and its
    /// width and height run along the object's rotated x and y axes.
    pub crop_box: Rect,
    /// Object position (its rotation pivot) in stage space.
    pub position: Point,
    /// Object rotation in degrees.
    pub rotation: f64,
    /// Object scale factors.
    pub scale: Vec2,
    /// Object width and height before scaling.
    pub displayed_size: Size,
    /// The crop currently applied, in source pixels.
    pub prior_crop: Rect,
    /// Natural size of the source image.
    pub source_size: Size,
}

/// The outcome of a crop: the new source rect and where the object now sits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropPlacement {
    /// New crop in source pixels, always inside the source image.
    pub source: Rect,
    /// New object position in stage space. Rotation is unchanged.
    pub position: Point,
    /// New displayed size with the previous scale folded in; the object's
    /// scale should be reset to 1.
    pub size: Size,
}

/// Maps `request.crop_box` into source pixels and derives the new placement.
///
/// The crop box origin is moved into the object's local frame (undoing
/// translation and rotation), then divided by the combined stage-pixels-per-
/// source-pixel factor (scale times the resize ratio of the prior crop to the
/// displayed size) and offset by the prior crop origin.
///
/// The result is clamped to the source image. When clamping trims the box,
/// position and size are recomputed from the clamped rect so the visible
/// pixels stay exactly where they were.
///
/// Returns `None` for degenerate inputs: zero scale, an empty prior crop or
/// displayed size, or a crop box that misses the source image entirely.
#[must_use]
pub fn crop_to_source(request: &CropRequest) -> Option<CropPlacement> {
    let prior = request.prior_crop;
    if prior.width() <= 0.0 || prior.height() <= 0.0 {
        return None;
    }
    let ratio = Vec2::new(
        request.displayed_size.width / prior.width(),
        request.displayed_size.height / prior.height(),
    );
    let per_source = Vec2::new(request.scale.x * ratio.x, request.scale.y * ratio.y);
    if per_source.x == 0.0 || per_source.y == 0.0 || !per_source.is_finite() {
        return None;
    }

    let frame = RotatedBox::new(request.position, Size::ZERO, request.rotation);
    let to_local = Affine::rotate(-frame.radians());
    let to_stage = Affine::rotate(frame.radians());

    let offset = request.crop_box.origin() - request.position;
    let local = (to_local * offset.to_point()).to_vec2();

    let unclamped = Rect::from_origin_size(
        (
            prior.x0 + local.x / per_source.x,
            prior.y0 + local.y / per_source.y,
        ),
        (
            request.crop_box.width() / per_source.x,
            request.crop_box.height() / per_source.y,
        ),
    );
    let source_bounds = Rect::from_origin_size(Point::ZERO, request.source_size);
    let source = unclamped.abs().intersect(source_bounds);
    if source.width() <= 0.0 || source.height() <= 0.0 {
        return None;
    }

    let local_origin = Vec2::new(
        (source.x0 - prior.x0) * per_source.x,
        (source.y0 - prior.y0) * per_source.y,
    );
    let position = request.position + (to_stage * local_origin.to_point()).to_vec2();
    let size = Size::new(
        source.width() * per_source.x,
        source.height() * per_source.y,
    );

    Some(CropPlacement {
        source,
        position,
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn base_request() -> CropRequest {
        CropRequest {
            crop_box: Rect::new(0.0, 0.0, 10.0, 10.0),
            position: Point::new(0.0, 0.0),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
            displayed_size: Size::new(400.0, 300.0),
            prior_crop: Rect::new(0.0, 0.0, 800.0, 600.0),
            source_size: Size::new(800.0, 600.0),
        }
    }

    #[test]
    fn scale_is_folded_into_size() {
        let request = CropRequest {
            crop_box: Rect::new(20.0, 20.0, 120.0, 70.0),
            scale: Vec2::new(2.0, 2.0),
            ..base_request()
        };
        let p = crop_to_source(&request).unwrap();
        // Two stage pixels per displayed pixel, two source pixels per displayed
        // pixel: one stage pixel per source pixel.
        assert_eq!(p.source, Rect::new(20.0, 20.0, 120.0, 70.0));
        assert_eq!(p.size, Size::new(100.0, 50.0));
    }

    #[test]
    fn rotation_is_undone_before_scaling() {
        let request = CropRequest {
            position: Point::new(500.0, 100.0),
            rotation: 90.0,
            // 90 degrees clockwise: the object's local +x runs down the stage
            // and local +y runs to the left. Local (40, 20) sits at (480, 140).
            crop_box: Rect::from_origin_size((480.0, 140.0), (100.0, 60.0)),
            displayed_size: Size::new(800.0, 600.0),
            ..base_request()
        };
        let p = crop_to_source(&request).unwrap();
        assert!(near(p.source.x0, 40.0), "x0 is {}", p.source.x0);
        assert!(near(p.source.y0, 20.0), "y0 is {}", p.source.y0);
        assert!(near(p.source.width(), 100.0), "width is {}", p.source.width());
        assert!(near(p.position.x, 480.0), "x is {}", p.position.x);
        assert!(near(p.position.y, 140.0), "y is {}", p.position.y);
    }

    #[test]
    fn crop_outside_source_is_clamped() {
        let request = CropRequest {
            crop_box: Rect::new(-50.0, -50.0, 100.0, 100.0),
            ..base_request()
        };
        let p = crop_to_source(&request).unwrap();
        assert_eq!(p.source, Rect::new(0.0, 0.0, 200.0, 200.0));
        // Placement moves to the visible part of the box.
        assert_eq!(p.position, Point::new(0.0, 0.0));
        assert_eq!(p.size, Size::new(100.0, 100.0));
    }

    #[test]
    fn crop_missing_the_image_is_rejected() {
        let request = CropRequest {
            crop_box: Rect::new(-500.0, -500.0, -400.0, -400.0),
            ..base_request()
        };
        assert_eq!(crop_to_source(&request), None);
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        let zero_scale = CropRequest {
            scale: Vec2::new(0.0, 1.0),
            ..base_request()
        };
        assert_eq!(crop_to_source(&zero_scale), None);

        let empty_prior = CropRequest {
            prior_crop: Rect::ZERO,
            ..base_request()
        };
        assert_eq!(crop_to_source(&empty_prior), None);
    }
}
