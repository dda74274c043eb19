// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use collage_document::ImageId;
use kurbo::Rect;

/// Crop mode state: the box the user is drawing over one image.
///
/// The box is in stage space and measured along the image's own axes: its
/// origin is the box's top-left corner on the stage and its size runs along
/// the image's rotated x and y axes. It starts out covering the whole
/// displayed image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropSession {
    pub(crate) id: ImageId,
    pub(crate) crop_box: Rect,
}

impl CropSession {
    /// The image being cropped.
    #[must_use]
    pub fn id(&self) -> ImageId {
        self.id
    }

    /// The current crop box.
    #[must_use]
    pub fn crop_box(&self) -> Rect {
        self.crop_box
    }
}
