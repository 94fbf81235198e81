//! Image loading boundary.
//!
//! This module turns encoded bytes into the pipeline's committed buffer:
//! - format-sniffing decode into RGBA (PNG, JPEG, WebP, BMP)
//! - EXIF orientation normalization, so camera files arrive upright
//! - fit-to-bounds scaling for the presentation surface (shrink only)
//!
//! Decoding failures surface as [`LoadError`] and leave the pipeline
//! untouched — no partial buffer is ever produced.

mod decode;
mod fit;
mod types;

pub use decode::{decode_image, decode_image_no_orientation, detect_orientation};
pub use fit::{fit_to_bounds, fit_to_display, MAX_DISPLAY_HEIGHT, MAX_DISPLAY_WIDTH};
pub use types::{LoadError, Orientation, ResizeFilter};

use crate::buffer::PixelBuffer;

/// Decode bytes and scale the result for display in one step.
///
/// Equivalent to [`decode_image`] followed by [`fit_to_display`].
pub fn load_for_display(bytes: &[u8]) -> Result<PixelBuffer, LoadError> {
    let decoded = decode_image(bytes)?;
    fit_to_display(&decoded)
}
