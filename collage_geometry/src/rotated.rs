// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// A rectangle rotated about its origin.
///
/// `origin` is the position of the unrotated top-left corner, which is also
/// the pivot of the rotation. This matches how scene graphs typically place a
/// node: translate to `origin`, then rotate, then draw the `size` rect at
/// `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatedBox {
    /// Pivot and unrotated top-left corner, in stage coordinates.
    pub origin: Point,
    /// Width and height before rotation.
    pub size: Size,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
}

impl RotatedBox {
    /// Creates a box from its origin, size, and rotation in degrees.
    #[must_use]
    pub const fn new(origin: Point, size: Size, rotation: f64) -> Self {
        Self {
            origin,
            size,
            rotation,
        }
    }

    /// Creates an unrotated box covering `rect`.
    #[must_use]
    pub fn axis_aligned(rect: Rect) -> Self {
        Self::new(rect.origin(), rect.size(), 0.0)
    }

    /// Returns the rotation in radians.
    #[must_use]
    pub fn radians(&self) -> f64 {
        self.rotation * (PI / 180.0)
    }

    /// Returns the local-to-stage transform: rotate about the origin, then translate.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.origin.to_vec2()) * Affine::rotate(self.radians())
    }

    /// Returns the four corners in stage coordinates.
    ///
    /// Order: origin, origin + width, origin + width + height, origin + height,
    /// each rotated about the origin.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        let t = self.transform();
        let Size { width, height } = self.size;
        [
            t * Point::ZERO,
            t * Point::new(width, 0.0),
            t * Point::new(width, height),
            t * Point::new(0.0, height),
        ]
    }

    /// Returns the axis-aligned bounding box of the rotated corners.
    ///
    /// Negative sizes (flipped boxes) are handled: the result is always a
    /// normalized rect.
    #[must_use]
    pub fn client_rect(&self) -> Rect {
        let [p0, p1, p2, p3] = self.corners();
        let min_x = p0.x.min(p1.x).min(p2.x).min(p3.x);
        let min_y = p0.y.min(p1.y).min(p2.y).min(p3.y);
        let max_x = p0.x.max(p1.x).max(p2.x).max(p3.x);
        let max_y = p0.y.max(p1.y).max(p2.y).max(p3.y);
        Rect::new(min_x, min_y, max_x, max_y)
    }

    /// Returns the center of the box in stage coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        self.transform() * Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// Returns the same box moved by `delta`.
    #[must_use]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            origin: self.origin + delta,
            ..*self
        }
    }
}

/// Returns the smallest rect enclosing all `rects`, or `None` if there are none.
///
/// This is the "total box" of a group of objects, used to keep the whole group
/// inside the canvas while dragging.
pub fn union_rect<I>(rects: I) -> Option<Rect>
where
    I: IntoIterator<Item = Rect>,
{
    rects.into_iter().reduce(|acc, r| acc.union(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn unrotated_corners_match_rect() {
        let b = RotatedBox::new(Point::new(10.0, 20.0), Size::new(30.0, 40.0), 0.0);
        let corners = b.corners();
        assert_near(corners[0], Point::new(10.0, 20.0));
        assert_near(corners[1], Point::new(40.0, 20.0));
        assert_near(corners[2], Point::new(40.0, 60.0));
        assert_near(corners[3], Point::new(10.0, 60.0));
        assert_eq!(b.client_rect(), Rect::new(10.0, 20.0, 40.0, 60.0));
    }

    #[test]
    fn quarter_turn_swings_width_downwards() {
        let b = RotatedBox::new(Point::new(0.0, 0.0), Size::new(100.0, 50.0), 90.0);
        let corners = b.corners();
        // Clockwise on a y-down canvas: +x axis maps onto +y.
        assert_near(corners[1], Point::new(0.0, 100.0));
        assert_near(corners[3], Point::new(-50.0, 0.0));

        let r = b.client_rect();
        assert!((r.x0 + 50.0).abs() < 1e-9, "left edge at {}", r.x0);
        assert!((r.height() - 100.0).abs() < 1e-9, "height is {}", r.height());
        assert!((r.width() - 50.0).abs() < 1e-9, "width is {}", r.width());
    }

    #[test]
    fn diagonal_rotation_grows_client_rect() {
        let b = RotatedBox::new(Point::new(0.0, 0.0), Size::new(100.0, 100.0), 45.0);
        let r = b.client_rect();
        let diag = 100.0 * core::f64::consts::SQRT_2;
        assert!((r.width() - diag).abs() < 1e-9, "width is {}", r.width());
        assert!((r.height() - diag).abs() < 1e-9, "height is {}", r.height());
    }

    #[test]
    fn center_follows_rotation() {
        let b = RotatedBox::new(Point::new(0.0, 0.0), Size::new(20.0, 10.0), 180.0);
        assert_near(b.center(), Point::new(-10.0, -5.0));
    }

    #[test]
    fn union_rect_of_nothing_is_none() {
        assert_eq!(union_rect(core::iter::empty()), None);
        let total = union_rect([
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(20.0, -5.0, 30.0, 5.0),
        ]);
        assert_eq!(total, Some(Rect::new(0.0, -5.0, 30.0, 10.0)));
    }
}
