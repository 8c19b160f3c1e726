//! Tone-correction look-up table.
//!
//! A LUT file is a 256x256 16-bit TIFF whose 65536 samples, read row-major,
//! form a direct mapping from every raw 16-bit level to its corrected
//! level. The table is indexed, never interpolated: the domain exactly
//! covers the sample type's range, so `table[v]` is always defined.

mod error;

pub use error::LutError;

use std::path::Path;

use crate::image::{decode_gray16, TiffReadError};

/// Side length of the LUT grid; the flattened table has GRID * GRID entries.
pub const GRID: usize = 256;

/// A validated tone-correction table with one entry per 16-bit level.
///
/// Built from a 256x256 grid flattened row-major. `table()[v]` gives the
/// corrected value for raw input `v`.
///
/// # Example
///
/// ```
/// use temporal_dither::ToneLut;
///
/// let lut = ToneLut::identity();
/// assert_eq!(lut.map(12345), 12345);
/// assert_eq!(lut.table().len(), 65536);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneLut {
    table: Box<[u16]>,
}

impl ToneLut {
    /// Build a LUT from a row-major 256x256 grid of 16-bit values.
    ///
    /// Fails with [`LutError::GridSize`] unless the grid is exactly
    /// 256x256 (65536 entries).
    pub fn from_grid(grid: Vec<u16>, width: usize, height: usize) -> Result<Self, LutError> {
        if width != GRID || height != GRID || grid.len() != GRID * GRID {
            return Err(LutError::GridSize { width, height });
        }
        Ok(Self {
            table: grid.into_boxed_slice(),
        })
    }

    /// The identity mapping: every level corrects to itself.
    pub fn identity() -> Self {
        let table: Vec<u16> = (0..=u16::MAX).collect();
        Self {
            table: table.into_boxed_slice(),
        }
    }

    /// Load and validate a LUT from a 16-bit TIFF file.
    ///
    /// Fails with [`LutError::NotFound`] if the path does not exist,
    /// [`LutError::UnsupportedExtension`] if the extension is not
    /// `.tif`/`.tiff`, and the validation variants if the decoded grid is
    /// not exactly 256x256 16-bit unsigned.
    pub fn load(path: &Path) -> Result<Self, LutError> {
        let raw = decode_gray16(path).map_err(|e| LutError::from_read(e))?;

        tracing::debug!(
            path = %path.display(),
            width = raw.width,
            height = raw.height,
            "Loaded LUT grid"
        );

        Self::from_grid(raw.data, raw.width, raw.height)
    }

    /// The flat 65536-entry table, row-major from the source grid.
    #[inline]
    pub fn table(&self) -> &[u16] {
        &self.table
    }

    /// Corrected value for a single raw level.
    #[inline]
    pub fn map(&self, value: u16) -> u16 {
        self.table[value as usize]
    }
}

impl LutError {
    fn from_read(err: TiffReadError) -> Self {
        match err {
            TiffReadError::NotFound(path) => LutError::NotFound(path),
            TiffReadError::BadExtension(path) => LutError::UnsupportedExtension(path),
            TiffReadError::Decode(msg) => LutError::Decode(msg),
            TiffReadError::NotSixteenBit { found } => LutError::NotSixteenBit { found },
            TiffReadError::NotGrayscale { found } => LutError::NotGrayscale { found },
        }
    }
}

/// Load and validate a tone-correction LUT. Convenience for
/// [`ToneLut::load`].
pub fn load_lut(path: &Path) -> Result<ToneLut, LutError> {
    ToneLut::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::File;
    use tiff::encoder::{colortype, TiffEncoder};

    fn write_gray16(path: &Path, data: &[u16], width: u32, height: u32) {
        let file = File::create(path).unwrap();
        let mut encoder = TiffEncoder::new(file).unwrap();
        encoder
            .write_image::<colortype::Gray16>(width, height, data)
            .unwrap();
    }

    /// Row-major ramp grid: entry (row, col) holds row * 256 + col, which
    /// flattens to the identity table.
    fn ramp_grid() -> Vec<u16> {
        (0..GRID * GRID).map(|i| i as u16).collect()
    }

    #[test]
    fn test_identity_maps_every_level_to_itself() {
        let lut = ToneLut::identity();
        assert_eq!(lut.map(0), 0);
        assert_eq!(lut.map(255), 255);
        assert_eq!(lut.map(65535), 65535);
    }

    #[test]
    fn test_from_grid_flattens_row_major() {
        let lut = ToneLut::from_grid(ramp_grid(), GRID, GRID).unwrap();
        // Entry at grid row 1, column 2 sits at flat index 258.
        assert_eq!(lut.map(258), 258);
        assert_eq!(lut.table().len(), 65536);
    }

    #[test]
    fn test_from_grid_rejects_wrong_shape() {
        match ToneLut::from_grid(vec![0; 128 * 256], 128, 256) {
            Err(LutError::GridSize { width, height }) => {
                assert_eq!((width, height), (128, 256));
            }
            other => panic!("expected GridSize, got {:?}", other),
        }
    }

    #[test]
    fn test_load_valid_lut() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grade2.tif");
        write_gray16(&path, &ramp_grid(), GRID as u32, GRID as u32);

        let lut = ToneLut::load(&path).unwrap();
        assert_eq!(lut.map(1000), 1000);
    }

    #[test]
    fn test_load_missing_lut_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.tif");
        assert!(matches!(ToneLut::load(&path), Err(LutError::NotFound(_))));
    }

    #[test]
    fn test_load_rejects_non_tiff_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lut.dat");
        std::fs::write(&path, b"raw bytes").unwrap();

        assert!(matches!(
            ToneLut::load(&path),
            Err(LutError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn test_load_rejects_wrong_grid_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.tif");
        write_gray16(&path, &vec![0u16; 64 * 64], 64, 64);

        assert!(matches!(
            ToneLut::load(&path),
            Err(LutError::GridSize {
                width: 64,
                height: 64
            })
        ));
    }
}
