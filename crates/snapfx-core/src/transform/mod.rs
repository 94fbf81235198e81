//! Orientation transforms: flips and quarter-turn rotations.
//!
//! These are the only operations in the pipeline allowed to change buffer
//! dimensions, and the only destructive ones — the pipeline applies them to
//! the committed buffer itself, not to a preview copy. Each returns a fresh
//! buffer; the source is never written.
//!
//! Rotations are restricted to 90-degree steps, so every output pixel is an
//! exact copy of one input pixel and no resampling happens here.

mod flip;
mod rotate;

pub use flip::{flip_horizontal, flip_vertical};
pub use rotate::{rotate_ccw, rotate_cw};
