//! Editor session bindings.
//!
//! Exposes the core pipeline to JavaScript as a single stateful `Editor`
//! object: load bytes, pick a filter and shape by their menu names, adjust
//! parameters, flip/rotate, then pull out a rendered bitmap or encoded
//! download bytes.
//!
//! Filter and shape names here are the lowercase strings of the host's
//! `<select>` values, with `"none"` clearing the selection. Unknown names
//! are errors at this boundary; the core stays enum-dispatched.

use snapfx_core::{
    export, load_for_display, EditState, FilterKind, OutputFormat, Pipeline, ShapeKind,
};
use wasm_bindgen::prelude::*;

use crate::types::JsBitmap;

/// A stateful editing session over one loaded image.
#[wasm_bindgen]
pub struct Editor {
    pipeline: Pipeline,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Editor {
    /// Create an empty editor. Every operation before `load` is a no-op.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Editor {
        Editor {
            pipeline: Pipeline::new(),
        }
    }

    /// Whether an image is loaded.
    #[wasm_bindgen(getter)]
    pub fn loaded(&self) -> bool {
        self.pipeline.is_loaded()
    }

    /// Width of the committed image, 0 when empty.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.pipeline.committed().map_or(0, |b| b.width())
    }

    /// Height of the committed image, 0 when empty.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.pipeline.committed().map_or(0, |b| b.height())
    }

    /// Decode image bytes, scale them for display, and load the result.
    ///
    /// Replaces any previously loaded image and clears all selections.
    /// On failure the editor keeps its previous state.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), JsError> {
        let buffer = load_for_display(bytes)?;
        self.pipeline.load(buffer);
        Ok(())
    }

    /// Select a filter by name, or `"none"` to clear.
    pub fn set_filter(&mut self, name: &str) -> Result<(), JsError> {
        let filter = match name {
            "none" => None,
            other => Some(other.parse::<FilterKind>()?),
        };
        self.pipeline.set_filter(filter);
        Ok(())
    }

    /// Select a shape mask by name, or `"none"` to clear.
    pub fn set_shape(&mut self, name: &str) -> Result<(), JsError> {
        let shape = match name {
            "none" => None,
            other => Some(other.parse::<ShapeKind>()?),
        };
        self.pipeline.set_shape(shape);
        Ok(())
    }

    /// Set the brightness delta (clamped to -100..=100).
    pub fn set_brightness(&mut self, delta: i32) {
        self.pipeline.set_brightness(delta);
    }

    /// Set the contrast amount (clamped to -100..=100).
    pub fn set_contrast(&mut self, amount: i32) {
        self.pipeline.set_contrast(amount);
    }

    /// Set the blur radius (clamped to 0..=20).
    pub fn set_blur_radius(&mut self, radius: u32) {
        self.pipeline.set_blur_radius(radius);
    }

    /// Clear selections and parameters; orientation changes are kept.
    pub fn reset(&mut self) {
        self.pipeline.reset();
    }

    /// Mirror the image left-to-right (destructive).
    pub fn flip_horizontal(&mut self) {
        self.pipeline.flip_horizontal();
    }

    /// Mirror the image top-to-bottom (destructive).
    pub fn flip_vertical(&mut self) {
        self.pipeline.flip_vertical();
    }

    /// Rotate 90 degrees clockwise (destructive, swaps dimensions).
    pub fn rotate_clockwise(&mut self) {
        self.pipeline.rotate_cw();
    }

    /// Rotate 90 degrees counter-clockwise (destructive, swaps dimensions).
    pub fn rotate_counter_clockwise(&mut self) {
        self.pipeline.rotate_ccw();
    }

    /// Render the preview with the current filter and shape applied.
    ///
    /// Returns `None` when no image is loaded. The host should resize its
    /// presentation surface to the returned bitmap's dimensions — rotations
    /// change them.
    pub fn render(&self) -> Option<JsBitmap> {
        self.pipeline.render().map(JsBitmap::from_buffer)
    }

    /// Encode the current preview for download.
    ///
    /// `format` is one of `"png"`, `"jpeg"`, `"webp"`, `"bmp"`; `quality`
    /// (0-100) applies to JPEG only.
    pub fn export(&self, format: &str, quality: u8) -> Result<Vec<u8>, JsError> {
        let format = format.parse::<OutputFormat>()?;
        let preview = self
            .pipeline
            .render()
            .ok_or_else(|| JsError::new("no image loaded"))?;
        Ok(export(&preview, format, quality)?)
    }

    /// Snapshot the current selections as a plain JS object.
    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.pipeline.state())?)
    }

    /// Restore selections from a snapshot produced by `state()`.
    pub fn set_state(&mut self, value: JsValue) -> Result<(), JsError> {
        let state: EditState = serde_wasm_bindgen::from_value(value)?;
        self.pipeline.set_state(state);
        Ok(())
    }
}
