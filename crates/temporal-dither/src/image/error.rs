//! Error type for image loading and validation.
//!
//! Each variant names the violated invariant; callers can recover from all
//! of them (re-prompting for a file is a caller concern, never retried here).

use std::fmt;
use std::path::PathBuf;

/// Error type for loading and validating a 16-bit grayscale image.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageError {
    /// The file does not exist.
    NotFound(PathBuf),
    /// The file extension is not a TIFF-family extension (.tif / .tiff).
    UnsupportedExtension(PathBuf),
    /// The container could not be decoded (corrupted or unsupported file).
    Decode(String),
    /// The decoded samples are not 16-bit unsigned.
    NotSixteenBit {
        /// Description of the sample format actually found.
        found: String,
    },
    /// The decoded image is not single-channel (2-dimensional).
    NotGrayscale {
        /// Description of the color type actually found.
        found: String,
    },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::NotFound(path) => {
                write!(f, "image file not found: {}", path.display())
            }
            ImageError::UnsupportedExtension(path) => {
                write!(
                    f,
                    "input file must be a TIFF file (.tif or .tiff): {}",
                    path.display()
                )
            }
            ImageError::Decode(msg) => {
                write!(f, "failed to read TIFF file: {}", msg)
            }
            ImageError::NotSixteenBit { found } => {
                write!(f, "input image must be 16-bit (u16), found: {}", found)
            }
            ImageError::NotGrayscale { found } => {
                write!(f, "input image must be grayscale (2D), found: {}", found)
            }
        }
    }
}

impl std::error::Error for ImageError {}
