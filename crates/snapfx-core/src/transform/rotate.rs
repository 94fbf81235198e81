//! Quarter-turn rotations.
//!
//! Both directions swap the buffer dimensions: a w x h input becomes an
//! h x w output. Every consumer of the committed buffer re-derives width
//! and height from the buffer itself, so the swap propagates without any
//! out-of-band bookkeeping.

use crate::buffer::PixelBuffer;

/// Rotate 90 degrees clockwise.
///
/// Source pixel (x, y) lands at (h-1-y, x) in the rotated buffer.
pub fn rotate_cw(src: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (src.width(), src.height());
    let mut dst = PixelBuffer::filled(h, w, [0, 0, 0, 0]);

    for y in 0..h {
        for x in 0..w {
            dst.set(h - 1 - y, x, src.get(x, y));
        }
    }
    dst
}

/// Rotate 90 degrees counter-clockwise.
///
/// Source pixel (x, y) lands at (y, w-1-x) in the rotated buffer.
pub fn rotate_ccw(src: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (src.width(), src.height());
    let mut dst = PixelBuffer::filled(h, w, [0, 0, 0, 0]);

    for y in 0..h {
        for x in 0..w {
            dst.set(y, w - 1 - x, src.get(x, y));
        }
    }
    dst
}
