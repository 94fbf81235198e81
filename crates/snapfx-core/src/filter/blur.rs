//! Box blur.
//!
//! Averages each channel over a square neighborhood clipped to the buffer
//! bounds. Edge pixels average fewer samples; there is no wraparound or
//! mirroring. All four channels are averaged independently, alpha included.
//!
//! Per-channel results use truncating integer division, matching the
//! byte-store semantics of the original renderer. Any optimized variant
//! (separable passes, prefix sums) must reproduce those truncated values
//! exactly; the direct sum here is the reference.

use crate::buffer::{PixelBuffer, CHANNELS};

/// Largest accepted blur radius.
pub const MAX_BLUR_RADIUS: u32 = 20;

/// Blur a bitmap with a box kernel of the given radius.
///
/// The radius is clamped to [0, [`MAX_BLUR_RADIUS`]]; radius 0 returns a
/// copy of the input. The output is always a new buffer of identical
/// dimensions — the source is read-only for the whole pass, so there are
/// no read-after-write hazards.
pub fn box_blur(src: &PixelBuffer, radius: u32) -> PixelBuffer {
    let radius = radius.min(MAX_BLUR_RADIUS);
    if radius == 0 || src.is_empty() {
        return src.clone();
    }

    let (w, h) = (src.width(), src.height());
    let r = radius as i64;
    let pixels = src.pixels();
    let mut dst = vec![0u8; pixels.len()];

    for y in 0..h as i64 {
        let y_min = (y - r).max(0);
        let y_max = (y + r).min(h as i64 - 1);

        for x in 0..w as i64 {
            let x_min = (x - r).max(0);
            let x_max = (x + r).min(w as i64 - 1);

            let mut sums = [0u32; CHANNELS];
            let mut count = 0u32;

            for yy in y_min..=y_max {
                let row = (yy as usize) * (w as usize);
                for xx in x_min..=x_max {
                    let idx = (row + xx as usize) * CHANNELS;
                    sums[0] += pixels[idx] as u32;
                    sums[1] += pixels[idx + 1] as u32;
                    sums[2] += pixels[idx + 2] as u32;
                    sums[3] += pixels[idx + 3] as u32;
                    count += 1;
                }
            }

            let o = ((y as usize) * (w as usize) + x as usize) * CHANNELS;
            dst[o] = (sums[0] / count) as u8;
            dst[o + 1] = (sums[1] / count) as u8;
            dst[o + 2] = (sums[2] / count) as u8;
            dst[o + 3] = (sums[3] / count) as u8;
        }
    }

    PixelBuffer::new(w, h, dst)
}
