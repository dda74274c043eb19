// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::{BackgroundColor, Document, Filter, FilterParam, ImageId, ImageObject, Transform};

/// A single edit to a [`Document`].
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Append an image on top. Rejected if the id is taken or the size is empty.
    AddImage(ImageObject),
    /// Replace an image's placement (drag, resize, rotate).
    SetTransform {
        /// Target image.
        id: ImageId,
        /// New placement.
        transform: Transform,
    },
    /// Replace an image's filter, parameters included.
    SetFilter {
        /// Target image.
        id: ImageId,
        /// New filter.
        filter: Filter,
    },
    /// Change one parameter of an image's current filter.
    ///
    /// The value is clamped into the parameter's range. Parameters the current
    /// filter does not carry are ignored.
    SetFilterParam {
        /// Target image.
        id: ImageId,
        /// Parameter to change.
        param: FilterParam,
        /// Requested value.
        value: f64,
    },
    /// Apply a crop computed by [`collage_geometry::crop::crop_to_source`].
    ///
    /// Sets the source crop and the new placement, and resets scale to 1.
    Crop {
        /// Target image.
        id: ImageId,
        /// New crop in source pixels.
        crop: Rect,
        /// New stage position.
        position: Point,
        /// New displayed size.
        size: Size,
    },
    /// Swap with the image directly above.
    BringForward(ImageId),
    /// Swap with the image directly below.
    SendBackward(ImageId),
    /// Move to the top of the stack.
    BringToFront(ImageId),
    /// Move to the bottom of the stack.
    SendToBack(ImageId),
    /// Delete an image.
    Remove(ImageId),
    /// Change the canvas background.
    SetBackground(BackgroundColor),
}

impl Action {
    /// Returns the image this action targets, if it targets one.
    #[must_use]
    pub fn target(&self) -> Option<ImageId> {
        match self {
            Self::AddImage(image) => Some(image.id),
            Self::SetTransform { id, .. }
            | Self::SetFilter { id, .. }
            | Self::SetFilterParam { id, .. }
            | Self::Crop { id, .. }
            | Self::BringForward(id)
            | Self::SendBackward(id)
            | Self::BringToFront(id)
            | Self::SendToBack(id)
            | Self::Remove(id) => Some(*id),
            Self::SetBackground(_) => None,
        }
    }
}

/// Applies `action` to a copy of `doc`.
///
/// Returns `None` if the action changes nothing: the target id is missing, the
/// values are already in place, or a reorder is already at the end of the
/// stack.
#[must_use]
pub fn reduce(doc: &Document, action: &Action) -> Option<Document> {
    let mut next = doc.clone();
    next.apply(action).then_some(next)
}

impl Document {
    /// Applies `action` in place. Returns `true` if the document changed.
    ///
    /// On `false` the document is left untouched.
    pub fn apply(&mut self, action: &Action) -> bool {
        match action {
            Action::AddImage(image) => {
                if self.contains(image.id)
                    || image.size.width <= 0.0
                    || image.size.height <= 0.0
                {
                    return false;
                }
                self.images.push(image.clone());
                true
            }
            Action::SetTransform { id, transform } => self.update(*id, |img| {
                if img.transform() == *transform {
                    return false;
                }
                img.set_transform(*transform);
                true
            }),
            Action::SetFilter { id, filter } => self.update(*id, |img| {
                if img.filter == *filter {
                    return false;
                }
                img.filter = *filter;
                true
            }),
            Action::SetFilterParam { id, param, value } => {
                self.update(*id, |img| img.filter.set_param(*param, *value))
            }
            Action::Crop {
                id,
                crop,
                position,
                size,
            } => {
                if crop.width() <= 0.0 || crop.height() <= 0.0 {
                    return false;
                }
                self.update(*id, |img| {
                    let scale = Vec2::new(1.0, 1.0);
                    if img.crop == *crop
                        && img.position == *position
                        && img.size == *size
                        && img.scale == scale
                    {
                        return false;
                    }
                    img.crop = *crop;
                    img.position = *position;
                    img.size = *size;
                    img.scale = scale;
                    true
                })
            }
            Action::BringForward(id) => match self.index_of(*id) {
                Some(i) if i + 1 < self.images.len() => {
                    self.images.swap(i, i + 1);
                    true
                }
                _ => false,
            },
            Action::SendBackward(id) => match self.index_of(*id) {
                Some(i) if i > 0 => {
                    self.images.swap(i - 1, i);
                    true
                }
                _ => false,
            },
            Action::BringToFront(id) => match self.index_of(*id) {
                Some(i) if i + 1 < self.images.len() => {
                    let image = self.images.remove(i);
                    self.images.push(image);
                    true
                }
                _ => false,
            },
            Action::SendToBack(id) => match self.index_of(*id) {
                Some(i) if i > 0 => {
                    let image = self.images.remove(i);
                    self.images.insert(0, image);
                    true
                }
                _ => false,
            },
            Action::Remove(id) => match self.index_of(*id) {
                Some(i) => {
                    self.images.remove(i);
                    true
                }
                None => false,
            },
            Action::SetBackground(color) => {
                if self.background == *color {
                    return false;
                }
                self.background = *color;
                true
            }
        }
    }

    fn update(&mut self, id: ImageId, f: impl FnOnce(&mut ImageObject) -> bool) -> bool {
        self.get_mut(id).is_some_and(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FilterKind, ImageSource};

    fn doc_with(ids: &[u64]) -> Document {
        let mut doc = Document::new();
        for &id in ids {
            let source = ImageSource::new(format!("blob:{id}"), Size::new(40.0, 30.0));
            let image = ImageObject::new(ImageId(id), source, Point::ZERO, Size::new(40.0, 30.0));
            assert!(doc.apply(&Action::AddImage(image)));
        }
        doc
    }

    fn order(doc: &Document) -> Vec<u64> {
        doc.ids().map(|id| id.0).collect()
    }

    #[test]
    fn add_rejects_duplicate_and_empty() {
        let doc = doc_with(&[1]);
        let again = doc.images[0].clone();
        assert!(reduce(&doc, &Action::AddImage(again)).is_none());

        let mut empty = doc.images[0].clone();
        empty.id = ImageId(2);
        empty.size = Size::new(0.0, 10.0);
        assert!(reduce(&doc, &Action::AddImage(empty)).is_none());
    }

    #[test]
    fn swaps_with_neighbours() {
        let doc = doc_with(&[1, 2, 3]);
        let up = reduce(&doc, &Action::BringForward(ImageId(1))).unwrap();
        assert_eq!(order(&up), [2, 1, 3]);
        let down = reduce(&doc, &Action::SendBackward(ImageId(3))).unwrap();
        assert_eq!(order(&down), [1, 3, 2]);
    }

    #[test]
    fn reorder_at_the_ends_is_noop() {
        let doc = doc_with(&[1, 2, 3]);
        assert!(reduce(&doc, &Action::BringForward(ImageId(3))).is_none());
        assert!(reduce(&doc, &Action::BringToFront(ImageId(3))).is_none());
        assert!(reduce(&doc, &Action::SendBackward(ImageId(1))).is_none());
        assert!(reduce(&doc, &Action::SendToBack(ImageId(1))).is_none());
    }

    #[test]
    fn front_and_back_move_across_the_stack() {
        let doc = doc_with(&[1, 2, 3, 4]);
        let front = reduce(&doc, &Action::BringToFront(ImageId(2))).unwrap();
        assert_eq!(order(&front), [1, 3, 4, 2]);
        let back = reduce(&doc, &Action::SendToBack(ImageId(3))).unwrap();
        assert_eq!(order(&back), [3, 1, 2, 4]);
    }

    #[test]
    fn missing_target_is_noop() {
        let doc = doc_with(&[1]);
        let ghost = ImageId(9);
        assert!(reduce(&doc, &Action::Remove(ghost)).is_none());
        assert!(
            reduce(
                &doc,
                &Action::SetFilter {
                    id: ghost,
                    filter: Filter::Invert
                }
            )
            .is_none()
        );
    }

    #[test]
    fn unchanged_values_are_noops() {
        let doc = doc_with(&[1]);
        let transform = doc.images[0].transform();
        let same = Action::SetTransform {
            id: ImageId(1),
            transform,
        };
        assert!(reduce(&doc, &same).is_none());
        assert!(reduce(&doc, &Action::SetBackground(BackgroundColor::WHITE)).is_none());
    }

    #[test]
    fn filter_param_is_clamped() {
        let mut doc = doc_with(&[1]);
        assert!(doc.apply(&Action::SetFilter {
            id: ImageId(1),
            filter: Filter::default_for(FilterKind::Brighten),
        }));
        let next = reduce(
            &doc,
            &Action::SetFilterParam {
                id: ImageId(1),
                param: FilterParam::Brightness,
                value: 9.0,
            },
        )
        .unwrap();
        assert_eq!(next.images[0].filter, Filter::Brighten { brightness: 2.0 });

        // Blur radius does not apply to Brighten.
        let ignored = Action::SetFilterParam {
            id: ImageId(1),
            param: FilterParam::BlurRadius,
            value: 3.0,
        };
        assert!(reduce(&next, &ignored).is_none());
    }

    #[test]
    fn crop_resets_scale() {
        let mut doc = doc_with(&[1]);
        doc.images[0].scale = Vec2::new(2.0, 2.0);
        let next = reduce(
            &doc,
            &Action::Crop {
                id: ImageId(1),
                crop: Rect::new(5.0, 5.0, 25.0, 20.0),
                position: Point::new(10.0, 10.0),
                size: Size::new(40.0, 30.0),
            },
        )
        .unwrap();
        let img = &next.images[0];
        assert_eq!(img.scale, Vec2::new(1.0, 1.0));
        assert_eq!(img.crop, Rect::new(5.0, 5.0, 25.0, 20.0));
        assert_eq!(img.position, Point::new(10.0, 10.0));
    }

    #[test]
    fn target_names_the_image() {
        assert_eq!(Action::Remove(ImageId(4)).target(), Some(ImageId(4)));
        assert_eq!(
            Action::SetBackground(BackgroundColor::WHITE).target(),
            None
        );
    }
}
