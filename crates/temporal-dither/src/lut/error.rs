//! Error type for LUT loading and validation.

use std::fmt;
use std::path::PathBuf;

/// Error type for loading and validating a tone-correction LUT.
#[derive(Debug, Clone, PartialEq)]
pub enum LutError {
    /// The LUT file does not exist.
    NotFound(PathBuf),
    /// The file extension is not a TIFF-family extension (.tif / .tiff).
    UnsupportedExtension(PathBuf),
    /// The container could not be decoded.
    Decode(String),
    /// The decoded samples are not 16-bit unsigned.
    NotSixteenBit {
        /// Description of the sample format actually found.
        found: String,
    },
    /// The decoded LUT is not single-channel.
    NotGrayscale {
        /// Description of the color type actually found.
        found: String,
    },
    /// The decoded grid is not exactly 256x256.
    GridSize {
        /// Grid width actually found.
        width: usize,
        /// Grid height actually found.
        height: usize,
    },
}

impl fmt::Display for LutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LutError::NotFound(path) => {
                write!(f, "LUT file not found: {}", path.display())
            }
            LutError::UnsupportedExtension(path) => {
                write!(
                    f,
                    "LUT file must be a TIFF file (.tif or .tiff): {}",
                    path.display()
                )
            }
            LutError::Decode(msg) => {
                write!(f, "failed to read TIFF LUT file: {}", msg)
            }
            LutError::NotSixteenBit { found } => {
                write!(f, "LUT must be 16-bit (u16), found: {}", found)
            }
            LutError::NotGrayscale { found } => {
                write!(f, "LUT must be grayscale, found: {}", found)
            }
            LutError::GridSize { width, height } => {
                write!(f, "LUT must be 256x256 pixels, found: {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for LutError {}
