//! Fit-to-bounds scaling for display.
//!
//! The loader hands the pipeline a buffer that fits the presentation
//! surface. Scaling only ever shrinks: a source smaller than the bounds is
//! passed through untouched.

use super::{LoadError, ResizeFilter};
use crate::buffer::PixelBuffer;

/// Maximum display width in pixels.
pub const MAX_DISPLAY_WIDTH: u32 = 980;

/// Maximum display height in pixels.
pub const MAX_DISPLAY_HEIGHT: u32 = 650;

/// Scale a buffer to fit within `max_width` x `max_height`.
///
/// Aspect ratio is preserved and the image is never upscaled:
/// `scale = min(max_w / w, max_h / h, 1)`, with each target dimension
/// rounded and floored at 1 pixel. A source already inside the bounds is
/// returned as a plain copy.
///
/// # Errors
///
/// Returns `LoadError::InvalidBounds` when either bound is zero.
pub fn fit_to_bounds(
    image: &PixelBuffer,
    max_width: u32,
    max_height: u32,
    filter: ResizeFilter,
) -> Result<PixelBuffer, LoadError> {
    if max_width == 0 || max_height == 0 {
        return Err(LoadError::InvalidBounds {
            width: max_width,
            height: max_height,
        });
    }

    let (w, h) = (image.width(), image.height());
    if w <= max_width && h <= max_height {
        return Ok(image.clone());
    }

    let scale = (max_width as f64 / w as f64)
        .min(max_height as f64 / h as f64)
        .min(1.0);
    let new_w = ((w as f64 * scale).round() as u32).max(1);
    let new_h = ((h as f64 * scale).round() as u32).max(1);

    let rgba = image
        .to_rgba_image()
        .ok_or_else(|| LoadError::Corrupted("pixel buffer length mismatch".to_string()))?;
    let resized = image::imageops::resize(&rgba, new_w, new_h, filter.to_image_filter());

    Ok(PixelBuffer::from_rgba_image(resized))
}

/// Scale a buffer to the default display bounds (980 x 650, bilinear).
pub fn fit_to_display(image: &PixelBuffer) -> Result<PixelBuffer, LoadError> {
    fit_to_bounds(
        image,
        MAX_DISPLAY_WIDTH,
        MAX_DISPLAY_HEIGHT,
        ResizeFilter::default(),
    )
}
