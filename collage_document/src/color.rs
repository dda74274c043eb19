// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas background color and its hex notation.

use core::fmt;
use core::str::FromStr;

use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when a hex color string cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    /// The string does not start with `#`.
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),
    /// The digits after `#` are not a valid hex color.
    #[error("invalid color {input:?}: {reason}")]
    Invalid {
        /// The rejected string.
        input: String,
        /// What the color parser objected to.
        reason: String,
    },
}

/// Background color of the canvas.
///
/// Written and read as `#rrggbb`, or `#rrggbbaa` when not fully opaque. The
/// short forms `#rgb` and `#rgba` are accepted on input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundColor(pub Color);

impl BackgroundColor {
    /// Opaque white, the default canvas color.
    pub const WHITE: Self = Self(Color::from_rgba8(255, 255, 255, 255));

    /// Creates a color from 8-bit channels.
    #[must_use]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(Color::from_rgba8(r, g, b, a))
    }

    /// Returns the underlying color.
    #[must_use]
    pub const fn color(self) -> Color {
        self.0
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<Color> for BackgroundColor {
    fn from(color: Color) -> Self {
        Self(color)
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgba = self.0.to_rgba8();
        write!(f, "#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)?;
        if rgba.a != u8::MAX {
            write!(f, "{:02x}", rgba.a)?;
        }
        Ok(())
    }
}

impl FromStr for BackgroundColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.starts_with('#') {
            return Err(ParseColorError::MissingHash(s.to_owned()));
        }
        let parsed = parse_color(s).map_err(|err| ParseColorError::Invalid {
            input: s.to_owned(),
            reason: err.to_string(),
        })?;
        let rgba = parsed.to_alpha_color::<Srgb>().to_rgba8();
        Ok(Self::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a))
    }
}

impl Serialize for BackgroundColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BackgroundColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
