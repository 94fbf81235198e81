//! Snapfx Core - Image filter pipeline
//!
//! This crate provides the image processing core for Snapfx: raw RGBA
//! pixel buffers, the color/spatial filters, shape masks, orientation
//! transforms, and the committed/preview pipeline state, plus the load and
//! export boundaries (decode + fit-to-display, encode to PNG/JPEG/WebP/BMP).
//!
//! # Architecture
//!
//! The pipeline is synchronous and compute-bound; every operation completes
//! before returning. Preview operations are pure functions from buffer to
//! buffer, so the committed image survives any amount of filter and shape
//! churn; only the orientation transforms replace it.

pub mod buffer;
pub mod export;
pub mod filter;
pub mod load;
pub mod mask;
pub mod pipeline;
pub mod transform;

pub use buffer::PixelBuffer;
pub use export::{export, ExportError, OutputFormat};
pub use filter::{apply_filter, FilterKind, FilterParams};
pub use load::{load_for_display, LoadError};
pub use mask::{apply_shape_mask, ShapeKind};
pub use pipeline::{EditState, Pipeline};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Full flow: load -> select -> render -> export.
    #[test]
    fn test_end_to_end_preview_and_export() {
        let mut pipeline = Pipeline::new();
        pipeline.load(PixelBuffer::filled(40, 30, [180, 90, 45, 255]));

        pipeline.set_filter(Some(FilterKind::Sepia));
        pipeline.set_shape(Some(ShapeKind::Ellipse));
        pipeline.rotate_cw();

        let preview = pipeline.render().unwrap();
        assert_eq!((preview.width(), preview.height()), (30, 40));

        let bytes = export(&preview, OutputFormat::Png, 100).unwrap();
        let back = load::decode_image(&bytes).unwrap();
        assert_eq!(back, preview);
    }

    /// Selections never leak into the committed buffer.
    #[test]
    fn test_committed_isolated_from_preview() {
        let mut pipeline = Pipeline::new();
        pipeline.load(PixelBuffer::filled(10, 10, [200, 200, 200, 255]));
        let loaded = pipeline.committed().unwrap().clone();

        for kind in FilterKind::ALL {
            pipeline.set_filter(Some(kind));
            let _ = pipeline.render();
        }
        for shape in ShapeKind::ALL {
            pipeline.set_shape(Some(shape));
            let _ = pipeline.render();
        }

        assert_eq!(pipeline.committed().unwrap(), &loaded);
    }

    proptest! {
        /// Property: every filter preserves buffer length and dimensions.
        #[test]
        fn prop_filters_preserve_shape(
            (width, height) in (1u32..=16, 1u32..=16),
            seed in any::<u8>(),
        ) {
            let pixels: Vec<u8> = (0..(width * height * 4) as usize)
                .map(|i| (i as u8).wrapping_mul(seed))
                .collect();
            let src = PixelBuffer::new(width, height, pixels);
            let params = FilterParams { brightness: 40, contrast: -25, blur_radius: 2 };

            for kind in FilterKind::ALL {
                let mut buf = src.clone();
                apply_filter(&mut buf, kind, &params);
                prop_assert_eq!(buf.width(), width);
                prop_assert_eq!(buf.height(), height);
                prop_assert_eq!(buf.byte_size(), src.byte_size());
            }
        }

        /// Property: invert is an involution on arbitrary buffers.
        #[test]
        fn prop_invert_involution(
            (width, height) in (1u32..=16, 1u32..=16),
            seed in any::<u8>(),
        ) {
            let pixels: Vec<u8> = (0..(width * height * 4) as usize)
                .map(|i| (i as u8).wrapping_add(seed))
                .collect();
            let src = PixelBuffer::new(width, height, pixels);

            let mut buf = src.clone();
            apply_filter(&mut buf, FilterKind::Invert, &FilterParams::default());
            apply_filter(&mut buf, FilterKind::Invert, &FilterParams::default());
            prop_assert_eq!(buf, src);
        }

        /// Property: flips are involutions and quarter turns invert each
        /// other, on arbitrary dimensions.
        #[test]
        fn prop_transform_round_trips(
            (width, height) in (1u32..=16, 1u32..=16),
        ) {
            let pixels: Vec<u8> = (0..(width * height * 4) as usize)
                .map(|i| (i % 256) as u8)
                .collect();
            let src = PixelBuffer::new(width, height, pixels);

            prop_assert_eq!(
                transform::flip_horizontal(&transform::flip_horizontal(&src)),
                src.clone()
            );
            prop_assert_eq!(
                transform::flip_vertical(&transform::flip_vertical(&src)),
                src.clone()
            );
            prop_assert_eq!(transform::rotate_ccw(&transform::rotate_cw(&src)), src);
        }

        /// Property: masks keep "in" pixels byte-identical and dimensions
        /// unchanged.
        #[test]
        fn prop_masks_preserve_in_pixels(
            (width, height) in (1u32..=16, 1u32..=16),
        ) {
            let pixels: Vec<u8> = (0..(width * height * 4) as usize)
                .map(|i| (i % 256) as u8)
                .collect();
            let src = PixelBuffer::new(width, height, pixels);

            for shape in ShapeKind::ALL {
                let out = apply_shape_mask(&src, shape);
                prop_assert_eq!(out.width(), width);
                prop_assert_eq!(out.height(), height);
                for y in 0..height {
                    for x in 0..width {
                        let px = out.get(x, y);
                        prop_assert!(
                            px == src.get(x, y) || px == [0, 0, 0, 0],
                            "{} produced a pixel that is neither pass-through nor cleared",
                            shape
                        );
                    }
                }
            }
        }
    }
}
