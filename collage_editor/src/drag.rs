// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use collage_document::ImageId;
use collage_geometry::guide::Guides;
use kurbo::Point;

/// A live drag of one image object.
///
/// Moves are previewed in the editor's document but only committed to history
/// when the drag ends. Every move is measured from the pointer-down position,
/// so the object never drifts from the pointer however many moves arrive.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub(crate) id: ImageId,
    pub(crate) pointer_start: Point,
    pub(crate) object_start: Point,
    pub(crate) position: Point,
    pub(crate) guides: Guides,
    pub(crate) bounded: bool,
}

impl DragSession {
    pub(crate) fn new(id: ImageId, pointer: Point, object_start: Point, bounded: bool) -> Self {
        Self {
            id,
            pointer_start: pointer,
            object_start,
            position: object_start,
            guides: Guides::NONE,
            bounded,
        }
    }

    /// The image being dragged.
    #[must_use]
    pub fn id(&self) -> ImageId {
        self.id
    }

    /// Pointer position when the drag started.
    #[must_use]
    pub fn pointer_start(&self) -> Point {
        self.pointer_start
    }

    /// Object position when the drag started.
    #[must_use]
    pub fn object_start(&self) -> Point {
        self.object_start
    }

    /// Object position after the last move, snapped and bounded.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether moves are kept inside the canvas.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.bounded
    }

    /// Guides the object snapped to on the last move.
    #[must_use]
    pub fn guides(&self) -> &Guides {
        &self.guides
    }

    /// Unsnapped object position for pointer position `pointer`.
    pub(crate) fn proposed(&self, pointer: Point) -> Point {
        self.object_start + (pointer - self.pointer_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proposed_follows_the_pointer_from_the_start() {
        let session = DragSession::new(
            ImageId(1),
            Point::new(100.0, 100.0),
            Point::new(40.0, 50.0),
            false,
        );
        assert_eq!(
            session.proposed(Point::new(110.0, 95.0)),
            Point::new(50.0, 45.0)
        );
        assert_eq!(
            session.proposed(Point::new(100.0, 100.0)),
            Point::new(40.0, 50.0)
        );
    }

    #[test]
    fn new_session_starts_unsnapped_at_the_object() {
        let session = DragSession::new(ImageId(7), Point::ZERO, Point::new(3.0, 4.0), true);
        assert_eq!(session.position(), session.object_start());
        assert!(session.guides().is_empty());
        assert!(session.is_bounded());
    }
}
