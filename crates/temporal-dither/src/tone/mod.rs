//! Tone mapping: LUT application and photographic inversion.
//!
//! The tone stage runs after orientation normalization and before canvas
//! compositing. LUT application is a direct 65536-wide index -- no clamping
//! or interpolation, since the table's domain exactly covers the sample
//! range. Inversion converts the negative to a positive: `out = MAX - in`,
//! involutive at both bit depths.

use std::fmt;

use crate::image::{GrayImage16, GrayImage8};
use crate::lut::ToneLut;

/// Error type for tone-mapping operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ToneError {
    /// The input buffer holds no pixels; there is nothing to map.
    EmptyImage,
}

impl fmt::Display for ToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneError::EmptyImage => write!(f, "cannot tone-map an empty image"),
        }
    }
}

impl std::error::Error for ToneError {}

/// Apply a tone-correction LUT: `out[y,x] = lut[in[y,x]]`.
///
/// Direct table lookup over every sample. The 16-bit domain exactly covers
/// the table, so no value can miss.
pub fn apply_lut(image: &GrayImage16, lut: &ToneLut) -> Result<GrayImage16, ToneError> {
    if image.is_empty() {
        return Err(ToneError::EmptyImage);
    }

    let table = lut.table();
    let data = image
        .data()
        .iter()
        .map(|&v| table[v as usize])
        .collect();

    Ok(GrayImage16::new(data, image.width(), image.height()))
}

/// Apply a tone-correction LUT to an 8-bit source.
///
/// The source is first widened to 16-bit value-for-value (the pipeline's
/// one documented implicit coercion) so its levels index the low end of the
/// table; the result is 16-bit.
pub fn apply_lut8(image: &GrayImage8, lut: &ToneLut) -> Result<GrayImage16, ToneError> {
    let widened = GrayImage16::from_8bit(image.data(), image.width(), image.height());
    apply_lut(&widened, lut)
}

/// Invert a 16-bit image: `out = 65535 - in`.
///
/// Photographic negative-to-positive conversion. Involutive:
/// `invert(invert(x)) == x`.
pub fn invert(image: &GrayImage16) -> Result<GrayImage16, ToneError> {
    if image.is_empty() {
        return Err(ToneError::EmptyImage);
    }

    let data = image.data().iter().map(|&v| u16::MAX - v).collect();
    Ok(GrayImage16::new(data, image.width(), image.height()))
}

/// Invert an 8-bit image: `out = 255 - in`. Involutive.
pub fn invert8(image: &GrayImage8) -> Result<GrayImage8, ToneError> {
    if image.is_empty() {
        return Err(ToneError::EmptyImage);
    }

    let data = image.data().iter().map(|&v| u8::MAX - v).collect();
    Ok(GrayImage8::new(data, image.width(), image.height()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply_lut_is_exact_table_lookup() {
        // Table that doubles every level (saturating at the top).
        let grid: Vec<u16> = (0..65536u32)
            .map(|v| (v * 2).min(u16::MAX as u32) as u16)
            .collect();
        let lut = ToneLut::from_grid(grid, 256, 256).unwrap();
        let image = GrayImage16::new(vec![0, 1, 100, 40000], 2, 2);

        let out = apply_lut(&image, &lut).unwrap();
        assert_eq!(out.data(), &[0, 2, 200, 65535]);
    }

    #[test]
    fn test_apply_lut_identity_preserves_image() {
        let image = GrayImage16::new(vec![7, 65535, 0, 12345], 2, 2);
        let out = apply_lut(&image, &ToneLut::identity()).unwrap();
        assert_eq!(out.data(), image.data());
    }

    #[test]
    fn test_apply_lut8_widens_before_indexing() {
        // Mapping that adds 1000 to every level so widened 8-bit values are
        // distinguishable from rescaled ones.
        let grid: Vec<u16> = (0..65536u32)
            .map(|v| (v + 1000).min(u16::MAX as u32) as u16)
            .collect();
        let lut = ToneLut::from_grid(grid, 256, 256).unwrap();
        let image = GrayImage8::new(vec![0, 255], 2, 1);

        let out = apply_lut8(&image, &lut).unwrap();
        // 255 indexes entry 255, not entry 65535.
        assert_eq!(out.data(), &[1000, 1255]);
    }

    #[test]
    fn test_apply_lut_rejects_empty_image() {
        let empty = GrayImage16::new(Vec::new(), 0, 0);
        assert_eq!(
            apply_lut(&empty, &ToneLut::identity()),
            Err(ToneError::EmptyImage)
        );
    }

    #[test]
    fn test_invert_16bit() {
        let image = GrayImage16::new(vec![0, 100, 65535], 3, 1);
        let out = invert(&image).unwrap();
        assert_eq!(out.data(), &[65535, 65435, 0]);
    }

    #[test]
    fn test_invert_is_involutive_16bit() {
        let image = GrayImage16::new(vec![0, 1, 32768, 65534, 65535, 4242], 3, 2);
        let back = invert(&invert(&image).unwrap()).unwrap();
        assert_eq!(back, image);
    }

    #[test]
    fn test_invert_is_involutive_8bit() {
        let image = GrayImage8::new(vec![0, 1, 128, 254, 255, 42], 3, 2);
        let back = invert8(&invert8(&image).unwrap()).unwrap();
        assert_eq!(back, image);
    }

    #[test]
    fn test_invert_rejects_empty_image() {
        let empty = GrayImage16::new(Vec::new(), 0, 0);
        assert_eq!(invert(&empty), Err(ToneError::EmptyImage));
    }

    #[test]
    fn test_lut_then_invert_scenario() {
        // invert(apply_lut([[100,200],[300,400]], identity)) from the
        // pipeline contract.
        let image = GrayImage16::new(vec![100, 200, 300, 400], 2, 2);
        let toned = apply_lut(&image, &ToneLut::identity()).unwrap();
        let positive = invert(&toned).unwrap();
        assert_eq!(positive.data(), &[65435, 65335, 65235, 65135]);
    }
}
