//! WASM-compatible wrapper types for bitmap data.
//!
//! This module provides the JavaScript-facing bitmap type, handling the
//! conversion between the core pixel buffer and JavaScript `Uint8Array`
//! data.

use snapfx_core::PixelBuffer;
use wasm_bindgen::prelude::*;

/// A bitmap wrapper for JavaScript.
///
/// Wraps the core RGBA pixel buffer and exposes dimensions and pixel bytes
/// in a form a host can hand straight to `ImageData`.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it out to a
/// JavaScript `Uint8Array`; wasm-bindgen's finalizer reclaims the WASM side
/// automatically, or call `free()` to do it eagerly for large bitmaps.
#[wasm_bindgen]
pub struct JsBitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Create a new JsBitmap from dimensions and RGBA pixel data.
    ///
    /// # Arguments
    /// * `width` - Bitmap width in pixels
    /// * `height` - Bitmap height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsBitmap {
        JsBitmap {
            width,
            height,
            pixels,
        }
    }

    /// Get the bitmap width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the bitmap height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as a Uint8Array copy.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional - the wasm-bindgen finalizer handles cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsBitmap {
    /// Create a JsBitmap from a core buffer.
    pub(crate) fn from_buffer(buffer: PixelBuffer) -> Self {
        let width = buffer.width();
        let height = buffer.height();
        Self {
            width,
            height,
            pixels: buffer.into_pixels(),
        }
    }

    /// Convert back to a core buffer. Clones the pixel data.
    #[allow(dead_code)] // Used by hosts that construct bitmaps JS-side
    pub(crate) fn to_buffer(&self) -> PixelBuffer {
        PixelBuffer::new(self.width, self.height, self.pixels.clone())
    }
}
