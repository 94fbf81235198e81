//! Bitmap export to container formats.
//!
//! Encodes a rendered buffer to PNG, JPEG, WebP, or BMP bytes for download.
//! The quality knob applies to JPEG only: the `image` crate's WebP encoder
//! is lossless, and PNG/BMP have no quality dimension, so quality is
//! accepted and ignored for those formats.

use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::{PixelBuffer, CHANNELS};

/// Output container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless, carries alpha. The download default.
    #[default]
    Png,
    /// Lossy, no alpha channel; honors the quality setting.
    Jpeg,
    /// Lossless (as encoded here), carries alpha.
    Webp,
    /// Uncompressed, carries alpha.
    Bmp,
}

impl OutputFormat {
    /// All formats, in menu order.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Png,
        OutputFormat::Jpeg,
        OutputFormat::Webp,
        OutputFormat::Bmp,
    ];

    /// The lowercase name used on the configuration surface.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Webp => "webp",
            OutputFormat::Bmp => "bmp",
        }
    }

    /// Whether the quality setting changes this format's output.
    pub fn uses_quality(self) -> bool {
        matches!(self, OutputFormat::Jpeg)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown format name at the string boundary.
#[derive(Debug, Error)]
#[error("unknown output format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// Errors that can occur during export encoding.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Encoding failed
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: OutputFormat,
        message: String,
    },
}

/// Encode a buffer to the chosen container format.
///
/// # Arguments
///
/// * `image` - RGBA buffer to encode
/// * `format` - Target container format
/// * `quality` - Quality 0-100, clamped; only meaningful for JPEG
///
/// # Returns
///
/// Encoded file bytes on success.
///
/// # Errors
///
/// Returns `ExportError::InvalidDimensions` for zero-sized buffers and
/// `ExportError::EncodingFailed` when the underlying encoder reports an
/// error.
pub fn export(
    image: &PixelBuffer,
    format: OutputFormat,
    quality: u8,
) -> Result<Vec<u8>, ExportError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(ExportError::InvalidDimensions { width, height });
    }

    let quality = quality.min(100);
    let mut buffer = Cursor::new(Vec::new());
    let failed = |e: image::ImageError| ExportError::EncodingFailed {
        format,
        message: e.to_string(),
    };

    match format {
        OutputFormat::Png => {
            PngEncoder::new(&mut buffer)
                .write_image(image.pixels(), width, height, ExtendedColorType::Rgba8)
                .map_err(failed)?;
        }
        OutputFormat::Jpeg => {
            // JPEG has no alpha channel; drop it before encoding
            let rgb = strip_alpha(image);
            JpegEncoder::new_with_quality(&mut buffer, quality.max(1))
                .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
                .map_err(failed)?;
        }
        OutputFormat::Webp => {
            WebPEncoder::new_lossless(&mut buffer)
                .write_image(image.pixels(), width, height, ExtendedColorType::Rgba8)
                .map_err(failed)?;
        }
        OutputFormat::Bmp => {
            BmpEncoder::new(&mut buffer)
                .write_image(image.pixels(), width, height, ExtendedColorType::Rgba8)
                .map_err(failed)?;
        }
    }

    Ok(buffer.into_inner())
}

/// Repack RGBA bytes as RGB, discarding the alpha channel.
fn strip_alpha(image: &PixelBuffer) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(image.pixel_count() as usize * 3);
    for px in image.pixels().chunks_exact(CHANNELS) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}
