//! Per-pixel color filters.
//!
//! Every function here rewrites R, G, B in place from that same pixel's
//! input values; no neighborhood reads, so in-place mutation is safe. The
//! alpha byte is never written. Channel results are clamped to [0, 255] and
//! rounded to the nearest byte.

use crate::buffer::{PixelBuffer, CHANNELS};

/// Clamp and round a channel value to a byte.
#[inline]
fn clamp_byte(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Iterate RGBA pixels, handing the filter each pixel's R, G, B as floats.
#[inline]
fn map_rgb(buffer: &mut PixelBuffer, f: impl Fn(f32, f32, f32) -> (f32, f32, f32)) {
    for px in buffer.pixels_mut().chunks_exact_mut(CHANNELS) {
        let (r, g, b) = (px[0] as f32, px[1] as f32, px[2] as f32);
        let (nr, ng, nb) = f(r, g, b);
        px[0] = clamp_byte(nr);
        px[1] = clamp_byte(ng);
        px[2] = clamp_byte(nb);
    }
}

/// Luma-weighted grayscale (ITU-R BT.601 coefficients).
///
/// `y = 0.299 R + 0.587 G + 0.114 B`, written to all three channels.
pub fn grayscale(buffer: &mut PixelBuffer) {
    map_rgb(buffer, |r, g, b| {
        let y = 0.299 * r + 0.587 * g + 0.114 * b;
        (y, y, y)
    });
}

/// Classic sepia tone matrix.
pub fn sepia(buffer: &mut PixelBuffer) {
    map_rgb(buffer, |r, g, b| {
        (
            0.393 * r + 0.769 * g + 0.189 * b,
            0.349 * r + 0.686 * g + 0.168 * b,
            0.272 * r + 0.534 * g + 0.131 * b,
        )
    });
}

/// Per-channel negation: `c' = 255 - c`.
///
/// An involution: applying it twice restores the input exactly.
pub fn invert(buffer: &mut PixelBuffer) {
    for px in buffer.pixels_mut().chunks_exact_mut(CHANNELS) {
        px[0] = 255 - px[0];
        px[1] = 255 - px[1];
        px[2] = 255 - px[2];
    }
}

/// Additive brightness: `c' = clamp(c + delta)`.
///
/// `delta` is clamped to [-100, 100] before use.
pub fn brightness(buffer: &mut PixelBuffer, delta: i32) {
    let delta = delta.clamp(-100, 100);
    if delta == 0 {
        return;
    }
    for px in buffer.pixels_mut().chunks_exact_mut(CHANNELS) {
        px[0] = (px[0] as i32 + delta).clamp(0, 255) as u8;
        px[1] = (px[1] as i32 + delta).clamp(0, 255) as u8;
        px[2] = (px[2] as i32 + delta).clamp(0, 255) as u8;
    }
}

/// Contrast curve around the 128 midpoint.
///
/// `factor = 259 (a + 255) / (255 (259 - a))`, then
/// `c' = clamp(factor (c - 128) + 128)`. The factor has a pole at a = 259;
/// `amount` is clamped to [-100, 100], which keeps the denominator bounded
/// away from zero. Channel value 128 is a fixed point for every amount.
pub fn contrast(buffer: &mut PixelBuffer, amount: i32) {
    let amount = amount.clamp(-100, 100);
    if amount == 0 {
        return;
    }
    let factor = contrast_factor(amount);
    map_rgb(buffer, |r, g, b| {
        (
            factor * (r - 128.0) + 128.0,
            factor * (g - 128.0) + 128.0,
            factor * (b - 128.0) + 128.0,
        )
    });
}

/// The contrast scaling factor for a clamped amount.
#[inline]
fn contrast_factor(amount: i32) -> f32 {
    debug_assert!(
        (-100..=100).contains(&amount),
        "contrast amount out of range: {amount}"
    );
    let a = amount as f32;
    (259.0 * (a + 255.0)) / (255.0 * (259.0 - a))
}

/// Faded warm matrix with lifted shadows.
pub fn vintage(buffer: &mut PixelBuffer) {
    map_rgb(buffer, |r, g, b| {
        (
            0.5 * r + 0.4 * g + 0.1 * b + 20.0,
            0.3 * r + 0.5 * g + 0.2 * b + 10.0,
            0.2 * r + 0.3 * g + 0.5 * b,
        )
    });
}

/// Blue boost / red cut.
pub fn cold(buffer: &mut PixelBuffer) {
    map_rgb(buffer, |r, g, b| (r * 0.9, g, b * 1.3));
}

/// Red boost / blue cut.
pub fn warm(buffer: &mut PixelBuffer) {
    map_rgb(buffer, |r, g, b| (r * 1.3, g * 1.1, b * 0.8));
}

/// Aggressive per-channel contrast split: red stretched, blue compressed.
pub fn dramatic(buffer: &mut PixelBuffer) {
    map_rgb(buffer, |r, g, b| {
        (
            (r - 128.0) * 1.5 + 128.0,
            (g - 128.0) * 1.2 + 128.0,
            (b - 128.0) * 0.8 + 128.0,
        )
    });
}

/// Hard threshold on BT.709 luminance: 255 above 128, 0 otherwise.
pub fn black_white(buffer: &mut PixelBuffer) {
    map_rgb(buffer, |r, g, b| {
        let gray = 0.2126 * r + 0.7152 * g + 0.0722 * b;
        let bw = if gray > 128.0 { 255.0 } else { 0.0 };
        (bw, bw, bw)
    });
}

/// Orange-heavy sunset grade.
pub fn sunset(buffer: &mut PixelBuffer) {
    map_rgb(buffer, |r, g, b| {
        (r * 1.2 + 30.0, g * 0.8 + 20.0, b * 0.5 - 20.0)
    });
}

/// Teal-heavy ocean grade.
pub fn ocean(buffer: &mut PixelBuffer) {
    map_rgb(buffer, |r, g, b| (r * 0.7, g * 0.9 + 10.0, b * 1.4 + 20.0));
}

/// Green-heavy forest grade.
pub fn forest(buffer: &mut PixelBuffer) {
    map_rgb(buffer, |r, g, b| (r * 0.8, g * 1.3 + 15.0, b * 0.6));
}

/// Instant-film color matrix with additive bias.
pub fn polaroid(buffer: &mut PixelBuffer) {
    map_rgb(buffer, |r, g, b| {
        (
            1.438 * r - 0.122 * g - 0.016 * b + 10.0,
            -0.062 * r + 1.378 * g - 0.016 * b + 5.0,
            -0.062 * r - 0.122 * g + 1.383 * b - 5.0,
        )
    });
}
