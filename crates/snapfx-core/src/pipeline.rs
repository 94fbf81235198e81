//! Edit pipeline state: committed buffer, selections, preview rendering.
//!
//! The pipeline holds two tiers of state. The *committed* buffer is the
//! image as loaded, mutated only by the destructive orientation transforms
//! (flips and quarter-turn rotations). The filter and shape selections are
//! non-destructive: every preview render starts from a fresh copy of the
//! committed buffer, applies the selected color/spatial filter, then the
//! selected shape mask, and hands the result out. Changing or clearing a
//! selection therefore never loses image data, while orientation changes
//! are permanent — `reset` reverts selections and parameters, not
//! orientation.
//!
//! The filter always runs before the mask, so color correction never
//! recolors pixels the mask has already cleared.

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::filter::{apply_filter, FilterKind, FilterParams};
use crate::mask::{apply_shape_mask, ShapeKind};
use crate::transform::{flip_horizontal, flip_vertical, rotate_ccw, rotate_cw};

/// The non-destructive edit selections, as a serializable snapshot.
///
/// Hosts can persist this and replay it onto a freshly loaded pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditState {
    /// Selected filter, if any.
    pub filter: Option<FilterKind>,
    /// Selected shape mask, if any.
    pub shape: Option<ShapeKind>,
    /// Numeric filter parameters.
    pub params: FilterParams,
}

/// The edit pipeline.
///
/// Starts empty; every operation except [`Pipeline::load`] is a no-op until
/// an image is loaded.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    committed: Option<PixelBuffer>,
    state: EditState,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an image is loaded.
    pub fn is_loaded(&self) -> bool {
        self.committed.is_some()
    }

    /// Load a bitmap, replacing any prior committed buffer.
    ///
    /// Selections and parameters are cleared, as on a fresh start.
    pub fn load(&mut self, buffer: PixelBuffer) {
        self.committed = Some(buffer);
        self.state = EditState::default();
    }

    /// The committed buffer, if loaded.
    ///
    /// Reflects exactly the orientation transforms applied since load;
    /// filters and shapes never touch it.
    pub fn committed(&self) -> Option<&PixelBuffer> {
        self.committed.as_ref()
    }

    /// The current selections and parameters.
    pub fn state(&self) -> EditState {
        self.state
    }

    /// Replace the selections and parameters wholesale.
    ///
    /// Parameters are clamped to their documented ranges. No-op when empty.
    pub fn set_state(&mut self, state: EditState) {
        if self.committed.is_none() {
            return;
        }
        self.state = EditState {
            params: state.params.clamped(),
            ..state
        };
    }

    /// Select a filter, or clear the selection with `None`.
    pub fn set_filter(&mut self, filter: Option<FilterKind>) {
        if self.committed.is_some() {
            self.state.filter = filter;
        }
    }

    /// Select a shape mask, or clear the selection with `None`.
    pub fn set_shape(&mut self, shape: Option<ShapeKind>) {
        if self.committed.is_some() {
            self.state.shape = shape;
        }
    }

    /// Set the brightness delta, clamped to [-100, 100].
    pub fn set_brightness(&mut self, delta: i32) {
        if self.committed.is_some() {
            self.state.params.brightness = delta.clamp(-100, 100);
        }
    }

    /// Set the contrast amount, clamped to [-100, 100].
    pub fn set_contrast(&mut self, amount: i32) {
        if self.committed.is_some() {
            self.state.params.contrast = amount.clamp(-100, 100);
        }
    }

    /// Set the blur radius, clamped to [0, 20].
    pub fn set_blur_radius(&mut self, radius: u32) {
        if self.committed.is_some() {
            self.state.params.blur_radius = radius.min(crate::filter::MAX_BLUR_RADIUS);
        }
    }

    /// Clear the filter/shape selections and reset parameters.
    ///
    /// Orientation is not reverted: flips and rotations are destructive and
    /// survive a reset.
    pub fn reset(&mut self) {
        if self.committed.is_some() {
            self.state = EditState::default();
        }
    }

    /// Mirror the committed buffer left-to-right.
    pub fn flip_horizontal(&mut self) {
        if let Some(committed) = &self.committed {
            self.committed = Some(flip_horizontal(committed));
        }
    }

    /// Mirror the committed buffer top-to-bottom.
    pub fn flip_vertical(&mut self) {
        if let Some(committed) = &self.committed {
            self.committed = Some(flip_vertical(committed));
        }
    }

    /// Rotate the committed buffer 90 degrees clockwise.
    ///
    /// Swaps the committed dimensions; presenters must resize to match.
    pub fn rotate_cw(&mut self) {
        if let Some(committed) = &self.committed {
            self.committed = Some(rotate_cw(committed));
        }
    }

    /// Rotate the committed buffer 90 degrees counter-clockwise.
    pub fn rotate_ccw(&mut self) {
        if let Some(committed) = &self.committed {
            self.committed = Some(rotate_ccw(committed));
        }
    }

    /// Render the preview: committed copy -> filter -> shape mask.
    ///
    /// Returns `None` when no image is loaded. The committed buffer is
    /// never modified by rendering.
    pub fn render(&self) -> Option<PixelBuffer> {
        let committed = self.committed.as_ref()?;
        let mut preview = committed.clone();

        if let Some(filter) = self.state.filter {
            apply_filter(&mut preview, filter, &self.state.params);
        }
        if let Some(shape) = self.state.shape {
            preview = apply_shape_mask(&preview, shape);
        }

        debug_assert_eq!(
            preview.byte_size(),
            preview.width() as usize * preview.height() as usize * 4,
            "preview buffer length out of sync with its dimensions"
        );
        Some(preview)
    }
}
