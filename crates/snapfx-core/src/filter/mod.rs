//! Color and spatial filters.
//!
//! Each filter maps a bitmap to a bitmap of identical dimensions. The color
//! filters are pure per-pixel remappings and run in place; the box blur reads
//! a whole neighborhood per pixel and therefore writes into a fresh buffer.
//!
//! Three filters take a numeric parameter (brightness delta, contrast
//! amount, blur radius). Out-of-range values are silently clamped to their
//! documented interval rather than rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::PixelBuffer;

pub mod blur;
pub mod color;

pub use blur::{box_blur, MAX_BLUR_RADIUS};

/// The selectable filters.
///
/// A closed set: the preview pipeline dispatches on this enum rather than on
/// user-supplied strings, so the string layer exists only at the host
/// boundary (see [`FilterKind::from_str`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Luma-weighted desaturation.
    Grayscale,
    /// Classic sepia tone matrix.
    Sepia,
    /// Per-channel negation.
    Invert,
    /// Additive brightness, parameterized by [`FilterParams::brightness`].
    Brightness,
    /// Contrast curve around the 128 midpoint, parameterized by
    /// [`FilterParams::contrast`].
    Contrast,
    /// Box blur, parameterized by [`FilterParams::blur_radius`].
    Blur,
    /// Faded warm matrix with lifted shadows.
    Vintage,
    /// Blue boost / red cut.
    Cold,
    /// Red boost / blue cut.
    Warm,
    /// Aggressive per-channel contrast split.
    Dramatic,
    /// Hard black/white threshold on luminance.
    BlackWhite,
    /// Orange-heavy sunset grade.
    Sunset,
    /// Teal-heavy ocean grade.
    Ocean,
    /// Green-heavy forest grade.
    Forest,
    /// Instant-film color matrix with bias.
    Polaroid,
}

impl FilterKind {
    /// All filters, in menu order.
    pub const ALL: [FilterKind; 15] = [
        FilterKind::Grayscale,
        FilterKind::Sepia,
        FilterKind::Invert,
        FilterKind::Brightness,
        FilterKind::Contrast,
        FilterKind::Blur,
        FilterKind::Vintage,
        FilterKind::Cold,
        FilterKind::Warm,
        FilterKind::Dramatic,
        FilterKind::BlackWhite,
        FilterKind::Sunset,
        FilterKind::Ocean,
        FilterKind::Forest,
        FilterKind::Polaroid,
    ];

    /// The lowercase name used on the configuration surface.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Grayscale => "grayscale",
            FilterKind::Sepia => "sepia",
            FilterKind::Invert => "invert",
            FilterKind::Brightness => "brightness",
            FilterKind::Contrast => "contrast",
            FilterKind::Blur => "blur",
            FilterKind::Vintage => "vintage",
            FilterKind::Cold => "cold",
            FilterKind::Warm => "warm",
            FilterKind::Dramatic => "dramatic",
            FilterKind::BlackWhite => "blackwhite",
            FilterKind::Sunset => "sunset",
            FilterKind::Ocean => "ocean",
            FilterKind::Forest => "forest",
            FilterKind::Polaroid => "polaroid",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown filter name at the string boundary.
#[derive(Debug, Error)]
#[error("unknown filter: {0}")]
pub struct UnknownFilter(pub String);

impl FromStr for FilterKind {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}

/// Numeric parameters for the parameterized filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Brightness delta (-100 to 100).
    pub brightness: i32,
    /// Contrast amount (-100 to 100).
    pub contrast: i32,
    /// Box blur radius in pixels (0 to 20).
    pub blur_radius: u32,
}

impl FilterParams {
    /// Create parameters with default (no-op) values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Return a copy with every value clamped to its documented range.
    pub fn clamped(&self) -> Self {
        Self {
            brightness: self.brightness.clamp(-100, 100),
            contrast: self.contrast.clamp(-100, 100),
            blur_radius: self.blur_radius.min(MAX_BLUR_RADIUS),
        }
    }
}

/// Apply a filter to a bitmap in place.
///
/// Dimensions never change. Parameters are clamped before use; the alpha
/// channel is untouched by every filter except [`FilterKind::Blur`], which
/// averages it along with the color channels.
pub fn apply_filter(buffer: &mut PixelBuffer, kind: FilterKind, params: &FilterParams) {
    let params = params.clamped();
    match kind {
        FilterKind::Grayscale => color::grayscale(buffer),
        FilterKind::Sepia => color::sepia(buffer),
        FilterKind::Invert => color::invert(buffer),
        FilterKind::Brightness => color::brightness(buffer, params.brightness),
        FilterKind::Contrast => color::contrast(buffer, params.contrast),
        FilterKind::Blur => *buffer = box_blur(buffer, params.blur_radius),
        FilterKind::Vintage => color::vintage(buffer),
        FilterKind::Cold => color::cold(buffer),
        FilterKind::Warm => color::warm(buffer),
        FilterKind::Dramatic => color::dramatic(buffer),
        FilterKind::BlackWhite => color::black_white(buffer),
        FilterKind::Sunset => color::sunset(buffer),
        FilterKind::Ocean => color::ocean(buffer),
        FilterKind::Forest => color::forest(buffer),
        FilterKind::Polaroid => color::polaroid(buffer),
    }
}
