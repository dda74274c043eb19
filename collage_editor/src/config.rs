// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor configuration, loaded from TOML.
//!
//! Every field has a default, so a config file only needs the keys it wants to
//! change:
//!
//! ```toml
//! snap_threshold = 8.0
//! background = "#202020"
//!
//! [canvas]
//! width = 1024.0
//! height = 768.0
//! ```

use std::io::ErrorKind;
use std::num::NonZeroUsize;
use std::path::Path;

use collage_document::BackgroundColor;
use collage_geometry::bounds::DEFAULT_MIN_SIZE;
use collage_geometry::fit::DEFAULT_FIT_PADDING;
use collage_geometry::guide::DEFAULT_SNAP_THRESHOLD;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Canvas (stage) dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasSize {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl CanvasSize {
    /// Returns the size as a kurbo [`Size`].
    #[must_use]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the canvas as a rect anchored at the origin.
    #[must_use]
    pub fn rect(self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size())
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Settings for an [`Editor`](crate::Editor).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Snap when an edge is strictly closer than this to a guide line.
    pub snap_threshold: f64,
    /// Smallest width or height a resize may produce.
    pub min_object_size: f64,
    /// Margin taken off the canvas when fitting a new image.
    pub fit_padding: f64,
    /// Maximum number of undo steps kept, unbounded if absent.
    pub history_limit: Option<NonZeroUsize>,
    /// Background of new documents.
    pub background: BackgroundColor,
    /// Reject drags and transforms that leave the canvas.
    pub keep_inside_canvas: bool,
    /// Stage size used for fitting, snapping, and bounding.
    pub canvas: CanvasSize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            min_object_size: DEFAULT_MIN_SIZE,
            fit_padding: DEFAULT_FIT_PADDING,
            history_limit: None,
            background: BackgroundColor::WHITE,
            keep_inside_canvas: true,
            canvas: CanvasSize::default(),
        }
    }
}

impl EditorConfig {
    /// Parses and validates a TOML string.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Like [`EditorConfig::load_from_file`], but a missing file yields the defaults.
    ///
    /// Any other failure, including a malformed file, is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Err(Error::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        let CanvasSize { width, height } = self.canvas;
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "canvas must have a positive size, got {width}x{height}"
            )));
        }
        for (name, value) in [
            ("snap_threshold", self.snap_threshold),
            ("min_object_size", self.min_object_size),
            ("fit_padding", self.fit_padding),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(
            EditorConfig::from_toml_str("").unwrap(),
            EditorConfig::default()
        );
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let err = EditorConfig::from_toml_str("snap_threshold = -1.0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)), "{err}");
    }

    #[test]
    fn zero_canvas_is_rejected() {
        let text = "[canvas]\nwidth = 0.0\nheight = 10.0\n";
        assert!(matches!(
            EditorConfig::from_toml_str(text),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            EditorConfig::from_toml_str("snap = 3.0"),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn zero_history_limit_is_rejected() {
        assert!(matches!(
            EditorConfig::from_toml_str("history_limit = 0"),
            Err(Error::ConfigParse(_))
        ));
    }
}
