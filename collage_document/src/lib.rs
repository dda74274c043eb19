// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=collage_document --heading-base-level=0

//! Collage Document: the editable state of an image collage.
//!
//! A [`Document`] is a plain value: an ordered list of [`ImageObject`]s (last
//! is topmost) and a [`BackgroundColor`]. Every user edit is an [`Action`];
//! [`reduce`] applies one to a document and returns the new snapshot, or
//! `None` when the action would change nothing. That `None` is what keeps
//! no-op clicks (bring-forward on the top object, deleting an unknown id) out
//! of the undo history.
//!
//! Documents serialize with `serde`; kurbo geometry uses kurbo's own serde
//! representation and the background is written as a hex string.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use collage_document::{reduce, Action, Document, ImageId, ImageObject, ImageSource};
//!
//! let doc = Document::new();
//! let source = ImageSource::new("blob:cat", Size::new(800.0, 600.0));
//! let image = ImageObject::new(ImageId(1), source, Point::new(10.0, 10.0), Size::new(400.0, 300.0));
//!
//! let doc = reduce(&doc, &Action::AddImage(image)).unwrap();
//! assert_eq!(doc.images.len(), 1);
//!
//! // Already at the top: nothing to do.
//! assert!(reduce(&doc, &Action::BringForward(ImageId(1))).is_none());
//! ```

mod action;
mod color;
pub mod filter;

use collage_geometry::RotatedBox;
use collage_geometry::crop::CropRequest;
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

pub use action::{Action, reduce};
pub use color::{BackgroundColor, ParseColorError};
pub use filter::{Filter, FilterKind, FilterParam, ParamRange};

/// Identifier of an image object within a document.
///
/// Ids are handed out by the editor and never reused within a session.
#[repr(transparent)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ImageId(pub u64);

impl core::fmt::Display for ImageId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where an image's pixels come from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    /// Object URL or path the renderer loads the pixels from.
    pub url: String,
    /// Pixel dimensions of the source file.
    pub natural_size: Size,
}

impl ImageSource {
    /// Creates a source description.
    pub fn new(url: impl Into<String>, natural_size: Size) -> Self {
        Self {
            url: url.into(),
            natural_size,
        }
    }

    /// The whole source image as a rect in source pixels.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.natural_size)
    }
}

/// Placement of an image object on the stage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position of the unrotated top-left corner, which is also the rotation pivot.
    pub position: Point,
    /// Width and height before scaling.
    pub size: Size,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    /// Scale factors applied to `size`.
    pub scale: Vec2,
}

impl Transform {
    /// Unrotated, unscaled placement.
    #[must_use]
    pub const fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }

    /// Returns the on-stage box: `size` times `scale`, rotated about `position`.
    #[must_use]
    pub fn displayed_box(&self) -> RotatedBox {
        RotatedBox::new(
            self.position,
            Size::new(self.size.width * self.scale.x, self.size.height * self.scale.y),
            self.rotation,
        )
    }
}

/// An image placed on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageObject {
    /// Identifier.
    pub id: ImageId,
    /// Source file.
    pub source: ImageSource,
    /// Position of the unrotated top-left corner and rotation pivot.
    pub position: Point,
    /// Displayed width and height before scaling.
    pub size: Size,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    /// Scale factors.
    pub scale: Vec2,
    /// Visible part of the source, in source pixels.
    pub crop: Rect,
    /// Filter applied when rendering.
    #[serde(default)]
    pub filter: Filter,
}

impl ImageObject {
    /// Creates an unrotated, unscaled, uncropped, unfiltered object.
    pub fn new(id: ImageId, source: ImageSource, position: Point, size: Size) -> Self {
        let crop = source.bounds();
        Self {
            id,
            source,
            position,
            size,
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
            crop,
            filter: Filter::None,
        }
    }

    /// Returns the current placement.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform {
            position: self.position,
            size: self.size,
            rotation: self.rotation,
            scale: self.scale,
        }
    }

    /// Replaces the placement.
    pub fn set_transform(&mut self, transform: Transform) {
        self.position = transform.position;
        self.size = transform.size;
        self.rotation = transform.rotation;
        self.scale = transform.scale;
    }

    /// Returns the on-stage box with scale applied.
    #[must_use]
    pub fn displayed_box(&self) -> RotatedBox {
        self.transform().displayed_box()
    }

    /// Returns the axis-aligned bounds of the object on the stage.
    #[must_use]
    pub fn client_rect(&self) -> Rect {
        self.displayed_box().client_rect()
    }

    /// Builds the request that maps a stage-space `crop_box` onto this object's source.
    #[must_use]
    pub fn crop_request(&self, crop_box: Rect) -> CropRequest {
        CropRequest {
            crop_box,
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
            displayed_size: self.size,
            prior_crop: self.crop,
            source_size: self.source.natural_size,
        }
    }
}

/// A snapshot of the whole canvas.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Image objects in z-order, bottom first.
    #[serde(default)]
    pub images: Vec<ImageObject>,
    /// Canvas background.
    #[serde(default)]
    pub background: BackgroundColor,
}

impl Document {
    /// Creates an empty document with a white background.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document with the given background.
    #[must_use]
    pub fn with_background(background: BackgroundColor) -> Self {
        Self {
            images: Vec::new(),
            background,
        }
    }

    /// Returns `true` if there are no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the z-index of `id`, if present.
    #[must_use]
    pub fn index_of(&self, id: ImageId) -> Option<usize> {
        self.images.iter().position(|img| img.id == id)
    }

    /// Returns `true` if an image with `id` exists.
    #[must_use]
    pub fn contains(&self, id: ImageId) -> bool {
        self.index_of(id).is_some()
    }

    /// Looks up an image by id.
    #[must_use]
    pub fn get(&self, id: ImageId) -> Option<&ImageObject> {
        self.images.iter().find(|img| img.id == id)
    }

    /// Looks up an image by id for mutation.
    pub fn get_mut(&mut self, id: ImageId) -> Option<&mut ImageObject> {
        self.images.iter_mut().find(|img| img.id == id)
    }

    /// Iterates over image ids, bottom first.
    pub fn ids(&self) -> impl Iterator<Item = ImageId> + '_ {
        self.images.iter().map(|img| img.id)
    }

    /// Returns the largest id in use.
    #[must_use]
    pub fn max_id(&self) -> Option<ImageId> {
        self.ids().max()
    }

    /// Drops every image whose id already appeared lower in the stack.
    ///
    /// A well-formed document has unique ids; loaded files are cleaned with
    /// this. Returns the ids that had repeats, in first-repeat order.
    pub fn remove_duplicate_ids(&mut self) -> Vec<ImageId> {
        let mut seen = hashbrown::HashSet::with_capacity(self.images.len());
        let mut repeated = Vec::new();
        self.images.retain(|img| {
            if seen.insert(img.id) {
                return true;
            }
            if !repeated.contains(&img.id) {
                repeated.push(img.id);
            }
            false
        });
        repeated
    }

    /// Returns the client rects of every image except `skip`, bottom first.
    ///
    /// These are the snap targets for a dragged object.
    pub fn client_rects_except(&self, skip: ImageId) -> impl Iterator<Item = Rect> + '_ {
        self.images
            .iter()
            .filter(move |img| img.id != skip)
            .map(ImageObject::client_rect)
    }
}
