//! Shape masks: alpha cutouts over a geometric region.
//!
//! A shape mask classifies every pixel as inside or outside a region
//! centered on the image; outside pixels have all four channels zeroed
//! (fully transparent black) and inside pixels pass through byte-identical.
//! Dimensions never change.
//!
//! Pixels are sampled at their centers — the sample point for pixel (x, y)
//! is (x + 0.5, y + 0.5) — against a region centered at (w/2, h/2). Region
//! sizes scale with min(width, height), so the cutout survives rotations
//! and non-square inputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::{PixelBuffer, CHANNELS};

pub mod region;

pub use region::Region;

/// The selectable mask shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    /// Rectangle with quarter-circle corners.
    Rounded,
    /// Five-point star.
    Star,
    Heart,
    Hexagon,
    Diamond,
    Triangle,
    Pentagon,
    Cross,
    /// Axis-aligned ellipse spanning 90% of each dimension.
    Ellipse,
}

impl ShapeKind {
    /// All shapes, in menu order.
    pub const ALL: [ShapeKind; 10] = [
        ShapeKind::Circle,
        ShapeKind::Rounded,
        ShapeKind::Star,
        ShapeKind::Heart,
        ShapeKind::Hexagon,
        ShapeKind::Diamond,
        ShapeKind::Triangle,
        ShapeKind::Pentagon,
        ShapeKind::Cross,
        ShapeKind::Ellipse,
    ];

    /// The lowercase name used on the configuration surface.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rounded => "rounded",
            ShapeKind::Star => "star",
            ShapeKind::Heart => "heart",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Cross => "cross",
            ShapeKind::Ellipse => "ellipse",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown shape name at the string boundary.
#[derive(Debug, Error)]
#[error("unknown shape: {0}")]
pub struct UnknownShape(pub String);

impl FromStr for ShapeKind {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}

/// Cut a bitmap to a shape, zeroing everything outside it.
///
/// Returns a new buffer of identical dimensions. "In" pixels are
/// byte-identical to the input, including alpha; "out" pixels become
/// (0, 0, 0, 0).
pub fn apply_shape_mask(src: &PixelBuffer, shape: ShapeKind) -> PixelBuffer {
    let (w, h) = (src.width(), src.height());
    let region = Region::new(w, h);
    let pixels = src.pixels();
    let mut dst = vec![0u8; pixels.len()];

    for y in 0..h {
        for x in 0..w {
            // Sample at the pixel center
            let sx = x as f32 + 0.5;
            let sy = y as f32 + 0.5;
            if region.contains(shape, sx, sy) {
                let i = ((y * w + x) as usize) * CHANNELS;
                dst[i..i + CHANNELS].copy_from_slice(&pixels[i..i + CHANNELS]);
            }
        }
    }

    PixelBuffer::new(w, h, dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.name().parse::<ShapeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert!("octagon".parse::<ShapeKind>().is_err());
        assert!("Circle".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn test_mask_preserves_dimensions() {
        let src = PixelBuffer::filled(31, 17, [200, 100, 50, 255]);
        for shape in ShapeKind::ALL {
            let out = apply_shape_mask(&src, shape);
            assert_eq!(out.width(), 31, "{shape}");
            assert_eq!(out.height(), 17, "{shape}");
            assert_eq!(out.byte_size(), src.byte_size(), "{shape}");
        }
    }

    #[test]
    fn test_in_pixels_identical_out_pixels_zero() {
        let mut src = PixelBuffer::filled(20, 20, [1, 2, 3, 4]);
        // Vary the pixels so pass-through copying is actually observable
        for y in 0..20 {
            for x in 0..20 {
                src.set(x, y, [x as u8, y as u8, 77, 200]);
            }
        }
        for shape in ShapeKind::ALL {
            let out = apply_shape_mask(&src, shape);
            let region = Region::new(20, 20);
            for y in 0..20u32 {
                for x in 0..20u32 {
                    let inside = region.contains(shape, x as f32 + 0.5, y as f32 + 0.5);
                    if inside {
                        assert_eq!(out.get(x, y), src.get(x, y), "{shape} at ({x},{y})");
                    } else {
                        assert_eq!(out.get(x, y), [0, 0, 0, 0], "{shape} at ({x},{y})");
                    }
                }
            }
        }
    }

    #[test]
    fn test_mask_is_idempotent() {
        let src = PixelBuffer::filled(16, 16, [90, 90, 90, 255]);
        for shape in ShapeKind::ALL {
            let once = apply_shape_mask(&src, shape);
            let twice = apply_shape_mask(&once, shape);
            assert_eq!(once, twice, "{shape}");
        }
    }

    #[test]
    fn test_circle_on_4x4() {
        // Radius 0.45 * 4 = 1.8 from center (2, 2); corner sample points
        // are at distance sqrt(1.5^2 + 1.5^2) = 2.12 and fall outside,
        // the four center pixels at distance 0.71 stay
        let src = PixelBuffer::filled(4, 4, [255, 255, 255, 255]);
        let out = apply_shape_mask(&src, ShapeKind::Circle);

        for (x, y) in [(0, 0), (3, 0), (0, 3), (3, 3)] {
            assert_eq!(out.get(x, y), [0, 0, 0, 0], "corner ({x},{y})");
        }
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            assert_eq!(out.get(x, y), [255, 255, 255, 255], "center ({x},{y})");
        }
    }

    #[test]
    fn test_every_shape_keeps_center_and_drops_a_corner() {
        let src = PixelBuffer::filled(64, 64, [255, 255, 255, 255]);
        for shape in ShapeKind::ALL {
            let out = apply_shape_mask(&src, shape);
            assert_eq!(
                out.get(32, 32),
                [255, 255, 255, 255],
                "{shape} dropped the image center"
            );
            assert_eq!(out.get(0, 0), [0, 0, 0, 0], "{shape} kept the corner");
        }
    }
}
