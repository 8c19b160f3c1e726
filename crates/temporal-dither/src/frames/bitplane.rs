//! Bit-plane decomposition of canvas values.
//!
//! The display is driven at 12 significant bits: each 16-bit canvas value
//! is truncated (`value16 >> 4`) and split into an 8-bit `base` the display
//! can show directly plus a 4-bit `remainder` the temporal dither
//! reconstructs across the frame cycle.

use crate::image::GrayImage16;

/// Per-pixel base and remainder planes for one canvas.
///
/// For every pixel: `value12 = value16 >> 4`, `base = value12 >> 4`
/// (0-255), `remainder = value12 & 0xF` (0-15). Both planes are row-major
/// and share the canvas shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitPlanes {
    /// 8-bit base plane, one entry per canvas pixel.
    pub base: Vec<u8>,
    /// 4-bit remainder plane (values 0-15), one entry per canvas pixel.
    pub remainder: Vec<u8>,
    /// Canvas width.
    pub width: usize,
    /// Canvas height.
    pub height: usize,
}

/// Decompose a canvas into base and remainder planes.
pub fn decompose(canvas: &GrayImage16) -> BitPlanes {
    let mut base = Vec::with_capacity(canvas.data().len());
    let mut remainder = Vec::with_capacity(canvas.data().len());

    for &value16 in canvas.data() {
        let value12 = value16 >> 4;
        base.push((value12 >> 4) as u8);
        remainder.push((value12 & 0xF) as u8);
    }

    BitPlanes {
        base,
        remainder,
        width: canvas.width(),
        height: canvas.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decompose_splits_twelve_bit_value() {
        // value12 = 0x123 -> base 0x12 (18), remainder 0x3.
        let canvas = GrayImage16::new(vec![0x123 << 4], 1, 1);
        let planes = decompose(&canvas);
        assert_eq!(planes.base, vec![18]);
        assert_eq!(planes.remainder, vec![3]);
    }

    #[test]
    fn test_decompose_drops_low_four_bits() {
        // Values differing only in bits 0-3 decompose identically.
        let canvas = GrayImage16::new(vec![0x1230, 0x1231, 0x123F], 3, 1);
        let planes = decompose(&canvas);
        assert_eq!(planes.base, vec![0x12, 0x12, 0x12]);
        assert_eq!(planes.remainder, vec![3, 3, 3]);
    }

    #[test]
    fn test_decompose_extremes() {
        let canvas = GrayImage16::new(vec![0, u16::MAX], 2, 1);
        let planes = decompose(&canvas);
        assert_eq!(planes.base, vec![0, 255]);
        assert_eq!(planes.remainder, vec![0, 15]);
    }

    #[test]
    fn test_decompose_preserves_shape() {
        let canvas = GrayImage16::filled(0, 5, 3);
        let planes = decompose(&canvas);
        assert_eq!((planes.width, planes.height), (5, 3));
        assert_eq!(planes.base.len(), 15);
        assert_eq!(planes.remainder.len(), 15);
    }
}
