// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-object filter state.
//!
//! A [`Filter`] is a tagged variant: each kind carries exactly the parameters
//! it uses and nothing else. Picking a kind with [`Filter::default_for`] fills
//! in the default parameters; slider changes go through [`Filter::set_param`],
//! which clamps into the parameter's [`ParamRange`].
//!
//! Pixel work is the renderer's job. The document only records what to apply.

use serde::{Deserialize, Serialize};

/// The kinds of filter an image object can carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// No filter.
    #[default]
    None,
    /// Desaturate to gray.
    Grayscale,
    /// Warm brown tone.
    Sepia,
    /// Invert color channels.
    Invert,
    /// Gaussian-style blur.
    Blur,
    /// Emboss relief.
    Emboss,
    /// Mosaic of square cells.
    Pixelate,
    /// Brightness adjustment.
    Brighten,
    /// Black/white threshold.
    Threshold,
    /// Random noise.
    Noise,
    /// Hue/saturation/lightness adjustment.
    Hsl,
    /// Per-channel multiplier.
    Rgb,
}

impl FilterKind {
    /// Every kind, in menu order.
    pub const ALL: [Self; 12] = [
        Self::None,
        Self::Grayscale,
        Self::Sepia,
        Self::Invert,
        Self::Blur,
        Self::Emboss,
        Self::Pixelate,
        Self::Brighten,
        Self::Threshold,
        Self::Noise,
        Self::Hsl,
        Self::Rgb,
    ];

    /// Returns the parameters this kind carries, in slider order.
    #[must_use]
    pub fn params(self) -> &'static [FilterParam] {
        use FilterParam as P;
        match self {
            Self::None | Self::Grayscale | Self::Sepia | Self::Invert => &[],
            Self::Blur => &[P::BlurRadius],
            Self::Emboss => &[P::EmbossStrength],
            Self::Pixelate => &[P::PixelSize],
            Self::Brighten => &[P::Brightness],
            Self::Threshold => &[P::Threshold],
            Self::Noise => &[P::Noise],
            Self::Hsl => &[P::Hue, P::Saturation, P::Lightness],
            Self::Rgb => &[P::Red, P::Green, P::Blue],
        }
    }

    /// Returns the lowercase name used in saved documents and logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Grayscale => "grayscale",
            Self::Sepia => "sepia",
            Self::Invert => "invert",
            Self::Blur => "blur",
            Self::Emboss => "emboss",
            Self::Pixelate => "pixelate",
            Self::Brighten => "brighten",
            Self::Threshold => "threshold",
            Self::Noise => "noise",
            Self::Hsl => "hsl",
            Self::Rgb => "rgb",
        }
    }
}

/// A single adjustable filter parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterParam {
    /// [`Filter::Blur`] radius.
    BlurRadius,
    /// [`Filter::Emboss`] strength.
    EmbossStrength,
    /// [`Filter::Pixelate`] cell size.
    PixelSize,
    /// [`Filter::Brighten`] amount.
    Brightness,
    /// [`Filter::Threshold`] level.
    Threshold,
    /// [`Filter::Noise`] amount.
    Noise,
    /// [`Filter::Hsl`] hue, in degrees.
    Hue,
    /// [`Filter::Hsl`] saturation.
    Saturation,
    /// [`Filter::Hsl`] lightness.
    Lightness,
    /// [`Filter::Rgb`] red multiplier.
    Red,
    /// [`Filter::Rgb`] green multiplier.
    Green,
    /// [`Filter::Rgb`] blue multiplier.
    Blue,
}

impl FilterParam {
    /// Returns the slider range for this parameter.
    #[must_use]
    pub const fn range(self) -> ParamRange {
        match self {
            Self::BlurRadius => ParamRange::new(0.0, 50.0, 1.0),
            Self::PixelSize => ParamRange::new(1.0, 50.0, 1.0),
            Self::EmbossStrength => ParamRange::new(0.0, 10.0, 0.1),
            Self::Brightness => ParamRange::new(0.0, 2.0, 0.01),
            Self::Hue => ParamRange::new(0.0, 360.0, 1.0),
            Self::Threshold
            | Self::Noise
            | Self::Saturation
            | Self::Lightness
            | Self::Red
            | Self::Green
            | Self::Blue => ParamRange::new(0.0, 1.0, 0.01),
        }
    }
}

/// Inclusive slider range with a suggested step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    /// Smallest accepted value.
    pub min: f64,
    /// Largest accepted value.
    pub max: f64,
    /// Slider step. Values are not snapped to it.
    pub step: f64,
}

impl ParamRange {
    /// Creates a range.
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamps `value` into the range.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Returns `true` if `value` lies inside the range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Filter applied to an image object, with the parameters of its kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Filter {
    /// No filter.
    #[default]
    None,
    /// Desaturate to gray.
    Grayscale,
    /// Warm brown tone.
    Sepia,
    /// Invert color channels.
    Invert,
    /// Blur.
    Blur {
        /// Blur radius in pixels.
        radius: f64,
    },
    /// Emboss relief.
    Emboss {
        /// Relief strength.
        strength: f64,
    },
    /// Mosaic of square cells.
    Pixelate {
        /// Cell edge length in pixels.
        pixel_size: f64,
    },
    /// Brightness adjustment.
    Brighten {
        /// Brightness factor; 1 leaves the image unchanged.
        brightness: f64,
    },
    /// Black/white threshold.
    Threshold {
        /// Luminance cut-off in `0..=1`.
        level: f64,
    },
    /// Random noise.
    Noise {
        /// Noise amount in `0..=1`.
        amount: f64,
    },
    /// Hue/saturation/lightness adjustment.
    Hsl {
        /// Hue rotation in degrees.
        hue: f64,
        /// Saturation.
        saturation: f64,
        /// Lightness.
        lightness: f64,
    },
    /// Per-channel multiplier.
    Rgb {
        /// Red multiplier.
        red: f64,
        /// Green multiplier.
        green: f64,
        /// Blue multiplier.
        blue: f64,
    },
}

impl Filter {
    /// Returns the filter of `kind` with its default parameters.
    #[must_use]
    pub const fn default_for(kind: FilterKind) -> Self {
        match kind {
            FilterKind::None => Self::None,
            FilterKind::Grayscale => Self::Grayscale,
            FilterKind::Sepia => Self::Sepia,
            FilterKind::Invert => Self::Invert,
            FilterKind::Blur => Self::Blur { radius: 10.0 },
            FilterKind::Emboss => Self::Emboss { strength: 1.0 },
            FilterKind::Pixelate => Self::Pixelate { pixel_size: 10.0 },
            FilterKind::Brighten => Self::Brighten { brightness: 0.5 },
            FilterKind::Threshold => Self::Threshold { level: 0.5 },
            FilterKind::Noise => Self::Noise { amount: 0.5 },
            FilterKind::Hsl => Self::Hsl {
                hue: 0.0,
                saturation: 1.0,
                lightness: 0.5,
            },
            FilterKind::Rgb => Self::Rgb {
                red: 1.0,
                green: 1.0,
                blue: 1.0,
            },
        }
    }

    /// Returns the kind of this filter.
    #[must_use]
    pub const fn kind(&self) -> FilterKind {
        match self {
            Self::None => FilterKind::None,
            Self::Grayscale => FilterKind::Grayscale,
            Self::Sepia => FilterKind::Sepia,
            Self::Invert => FilterKind::Invert,
            Self::Blur { .. } => FilterKind::Blur,
            Self::Emboss { .. } => FilterKind::Emboss,
            Self::Pixelate { .. } => FilterKind::Pixelate,
            Self::Brighten { .. } => FilterKind::Brighten,
            Self::Threshold { .. } => FilterKind::Threshold,
            Self::Noise { .. } => FilterKind::Noise,
            Self::Hsl { .. } => FilterKind::Hsl,
            Self::Rgb { .. } => FilterKind::Rgb,
        }
    }

    /// Returns `true` for [`Filter::None`].
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the value of `param`, or `None` if this filter does not carry it.
    #[must_use]
    pub fn param(&self, param: FilterParam) -> Option<f64> {
        let mut this = *self;
        this.slot(param).map(|v| *v)
    }

    /// Sets `param` to `value` clamped into its range.
    ///
    /// Setting a parameter this filter does not carry, or a non-finite value,
    /// is a no-op. Returns `true` if the stored value changed.
    pub fn set_param(&mut self, param: FilterParam, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        let value = param.range().clamp(value);
        match self.slot(param) {
            Some(slot) if *slot != value => {
                *slot = value;
                true
            }
            _ => false,
        }
    }

    /// Iterates over `(param, value)` pairs in slider order.
    pub fn params(&self) -> impl Iterator<Item = (FilterParam, f64)> + '_ {
        self.kind()
            .params()
            .iter()
            .filter_map(|&p| self.param(p).map(|v| (p, v)))
    }

    fn slot(&mut self, param: FilterParam) -> Option<&mut f64> {
        use FilterParam as P;
        match (self, param) {
            (Self::Blur { radius }, P::BlurRadius) => Some(radius),
            (Self::Emboss { strength }, P::EmbossStrength) => Some(strength),
            (Self::Pixelate { pixel_size }, P::PixelSize) => Some(pixel_size),
            (Self::Brighten { brightness }, P::Brightness) => Some(brightness),
            (Self::Threshold { level }, P::Threshold) => Some(level),
            (Self::Noise { amount }, P::Noise) => Some(amount),
            (Self::Hsl { hue, .. }, P::Hue) => Some(hue),
            (Self::Hsl { saturation, .. }, P::Saturation) => Some(saturation),
            (Self::Hsl { lightness, .. }, P::Lightness) => Some(lightness),
            (Self::Rgb { red, .. }, P::Red) => Some(red),
            (Self::Rgb { green, .. }, P::Green) => Some(green),
            (Self::Rgb { blue, .. }, P::Blue) => Some(blue),
            _ => None,
        }
    }
}

impl From<FilterKind> for Filter {
    fn from(kind: FilterKind) -> Self {
        Self::default_for(kind)
    }
}
