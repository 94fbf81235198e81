//! Bitmap decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::ImageReader;

use super::{LoadError, Orientation};
use crate::buffer::PixelBuffer;
use crate::transform::{flip_horizontal, flip_vertical, rotate_ccw, rotate_cw};

/// Decode an image from bytes into RGBA, applying EXIF orientation.
///
/// The container format is sniffed from the bytes (PNG, JPEG, WebP, BMP
/// with the enabled features). Camera files carrying an EXIF orientation
/// tag are normalized so the returned buffer is upright; for orientation
/// values 5-8 that swaps the decoded dimensions.
///
/// # Errors
///
/// Returns `LoadError::InvalidFormat` if the bytes match no known
/// container, `LoadError::Corrupted` if decoding fails partway.
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer, LoadError> {
    let orientation = detect_orientation(bytes);
    let buffer = decode_image_no_orientation(bytes)?;
    Ok(apply_orientation(buffer, orientation))
}

/// Decode an image from bytes without applying EXIF orientation.
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<PixelBuffer, LoadError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| LoadError::Corrupted(e.to_string()))?;

    if reader.format().is_none() {
        return Err(LoadError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| LoadError::Corrupted(e.to_string()))?;

    Ok(PixelBuffer::from_rgba_image(img.into_rgba8()))
}

/// Extract the EXIF orientation tag, defaulting to `Normal` when the bytes
/// carry no EXIF data or it cannot be parsed.
pub fn detect_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Normalize a decoded buffer to upright using the pipeline's own
/// orientation transforms.
fn apply_orientation(buffer: PixelBuffer, orientation: Orientation) -> PixelBuffer {
    match orientation {
        Orientation::Normal => buffer,
        Orientation::FlipHorizontal => flip_horizontal(&buffer),
        Orientation::Rotate180 => flip_vertical(&flip_horizontal(&buffer)),
        Orientation::FlipVertical => flip_vertical(&buffer),
        Orientation::Transpose => flip_horizontal(&rotate_cw(&buffer)),
        Orientation::Rotate90CW => rotate_cw(&buffer),
        Orientation::Transverse => flip_horizontal(&rotate_ccw(&buffer)),
        Orientation::Rotate270CW => rotate_ccw(&buffer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal valid JPEG bytes (1x1 pixel) with no EXIF segment
    const MINIMAL_JPEG: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x08, 0x06, 0x06, 0x07, 0x06,
        0x05, 0x08, 0x07, 0x07, 0x07, 0x09, 0x09, 0x08, 0x0A, 0x0C, 0x14, 0x0D, 0x0C, 0x0B, 0x0B,
        0x0C, 0x19, 0x12, 0x13, 0x0F, 0x14, 0x1D, 0x1A, 0x1F, 0x1E, 0x1D, 0x1A, 0x1C, 0x1C, 0x20,
        0x24, 0x2E, 0x27, 0x20, 0x22, 0x2C, 0x23, 0x1C, 0x1C, 0x28, 0x37, 0x29, 0x2C, 0x30, 0x31,
        0x34, 0x34, 0x34, 0x1F, 0x27, 0x39, 0x3D, 0x38, 0x32, 0x3C, 0x2E, 0x33, 0x34, 0x32, 0xFF,
        0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00, 0xFF, 0xC4, 0x00,
        0x1F, 0x00, 0x00, 0x01, 0x05, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
        0xFF, 0xC4, 0x00, 0xB5, 0x10, 0x00, 0x02, 0x01, 0x03, 0x03, 0x02, 0x04, 0x03, 0x05, 0x05,
        0x04, 0x04, 0x00, 0x00, 0x01, 0x7D, 0x01, 0x02, 0x03, 0x00, 0x04, 0x11, 0x05, 0x12, 0x21,
        0x31, 0x41, 0x06, 0x13, 0x51, 0x61, 0x07, 0x22, 0x71, 0x14, 0x32, 0x81, 0x91, 0xA1, 0x08,
        0x23, 0x42, 0xB1, 0xC1, 0x15, 0x52, 0xD1, 0xF0, 0x24, 0x33, 0x62, 0x72, 0x82, 0x09, 0x0A,
        0x16, 0x17, 0x18, 0x19, 0x1A, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2A, 0x34, 0x35, 0x36, 0x37,
        0x38, 0x39, 0x3A, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4A, 0x53, 0x54, 0x55, 0x56,
        0x57, 0x58, 0x59, 0x5A, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6A, 0x73, 0x74, 0x75,
        0x76, 0x77, 0x78, 0x79, 0x7A, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8A, 0x92, 0x93,
        0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9A, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9,
        0xAA, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6,
        0xC7, 0xC8, 0xC9, 0xCA, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xE1, 0xE2,
        0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7,
        0xF8, 0xF9, 0xFA, 0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, 0xFB, 0xD5,
        0xDB, 0x20, 0xA8, 0xF1, 0x7E, 0xFF, 0xD9,
    ];

    #[test]
    fn test_decode_valid_jpeg() {
        let result = decode_image(MINIMAL_JPEG);
        assert!(result.is_ok(), "Failed to decode valid JPEG: {:?}", result);

        let buf = result.unwrap();
        assert_eq!(buf.width(), 1);
        assert_eq!(buf.height(), 1);
        assert_eq!(buf.byte_size(), 4); // 1x1 RGBA
        assert_eq!(buf.get(0, 0)[3], 255, "decoded JPEG should be opaque");
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(LoadError::InvalidFormat)));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_jpeg() {
        let result = decode_image(&MINIMAL_JPEG[0..20]);
        assert!(result.is_err());
    }

    #[test]
    fn test_orientation_defaults_to_normal() {
        assert_eq!(detect_orientation(MINIMAL_JPEG), Orientation::Normal);
        assert_eq!(detect_orientation(&[0x00, 0x01]), Orientation::Normal);
    }

    #[test]
    fn test_decode_png_round_trip() {
        // Encode a tiny RGBA PNG with the image crate, then decode it back
        let mut png = Vec::new();
        let img = image::RgbaImage::from_fn(2, 3, |x, y| {
            image::Rgba([x as u8 * 100, y as u8 * 50, 7, 200])
        });
        img.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let buf = decode_image(&png).unwrap();
        assert_eq!((buf.width(), buf.height()), (2, 3));
        assert_eq!(buf.get(1, 2), [100, 100, 7, 200]);
    }

    // ===== Orientation application =====

    fn two_by_one() -> PixelBuffer {
        // Red on the left, green on the right
        PixelBuffer::new(2, 1, vec![255, 0, 0, 255, 0, 255, 0, 255])
    }

    #[test]
    fn test_apply_orientation_normal() {
        let buf = apply_orientation(two_by_one(), Orientation::Normal);
        assert_eq!(buf.get(0, 0), [255, 0, 0, 255]);
    }

    #[test]
    fn test_apply_orientation_flip_horizontal() {
        let buf = apply_orientation(two_by_one(), Orientation::FlipHorizontal);
        assert_eq!(buf.get(0, 0), [0, 255, 0, 255]);
        assert_eq!(buf.get(1, 0), [255, 0, 0, 255]);
    }

    #[test]
    fn test_apply_orientation_rotate180() {
        let buf = apply_orientation(two_by_one(), Orientation::Rotate180);
        assert_eq!((buf.width(), buf.height()), (2, 1));
        assert_eq!(buf.get(0, 0), [0, 255, 0, 255]);
        assert_eq!(buf.get(1, 0), [255, 0, 0, 255]);
    }

    #[test]
    fn test_apply_orientation_rotate90_swaps_dimensions() {
        let buf = apply_orientation(two_by_one(), Orientation::Rotate90CW);
        assert_eq!((buf.width(), buf.height()), (1, 2));
        // Left edge becomes top edge
        assert_eq!(buf.get(0, 0), [255, 0, 0, 255]);
        assert_eq!(buf.get(0, 1), [0, 255, 0, 255]);
    }

    #[test]
    fn test_apply_orientation_swapping_variants() {
        for orientation in [
            Orientation::Transpose,
            Orientation::Rotate90CW,
            Orientation::Transverse,
            Orientation::Rotate270CW,
        ] {
            let buf = apply_orientation(two_by_one(), orientation);
            assert_eq!(
                (buf.width(), buf.height()),
                (1, 2),
                "{orientation:?} should swap dimensions"
            );
        }
    }
}
