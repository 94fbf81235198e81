//! Mirror flips.

use crate::buffer::PixelBuffer;

/// Mirror left-to-right: `dst[y][w-1-x] = src[y][x]`.
///
/// Dimensions are unchanged. An involution: flipping twice restores the
/// input exactly.
pub fn flip_horizontal(src: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (src.width(), src.height());
    let mut dst = PixelBuffer::filled(w, h, [0, 0, 0, 0]);

    for y in 0..h {
        for x in 0..w {
            dst.set(w - 1 - x, y, src.get(x, y));
        }
    }
    dst
}

/// Mirror top-to-bottom: `dst[h-1-y][x] = src[y][x]`.
///
/// Dimensions are unchanged. An involution.
pub fn flip_vertical(src: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (src.width(), src.height());
    let mut dst = PixelBuffer::filled(w, h, [0, 0, 0, 0]);

    for y in 0..h {
        for x in 0..w {
            dst.set(x, h - 1 - y, src.get(x, y));
        }
    }
    dst
}
