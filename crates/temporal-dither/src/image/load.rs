//! 16-bit grayscale TIFF loading.
//!
//! Both pipeline inputs -- the negative and the tone-correction LUT -- are
//! 16-bit single-channel TIFF files, so the raw decode and validation steps
//! are shared here. Each caller maps the neutral [`TiffReadError`] onto its
//! own error type to keep messages specific to the input kind.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tiff::decoder::{Decoder, DecodingResult};
use tiff::ColorType;

use super::{normalize_orientation, GrayImage16, ImageError};

/// Raw decoded 16-bit grayscale samples, before any interpretation.
pub(crate) struct RawGray16 {
    pub data: Vec<u16>,
    pub width: usize,
    pub height: usize,
}

/// Neutral decode failure, mapped by each caller onto its own taxonomy.
pub(crate) enum TiffReadError {
    NotFound(PathBuf),
    BadExtension(PathBuf),
    Decode(String),
    NotSixteenBit { found: String },
    NotGrayscale { found: String },
}

/// True for the TIFF-family extensions the pipeline accepts.
fn has_tiff_extension(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref(),
        Some("tif") | Some("tiff")
    )
}

/// Decode a 16-bit single-channel TIFF into raw samples.
///
/// Validates, in order: existence, extension, container decode, color type
/// (single channel), and sample width (u16). Validation happens at this
/// boundary so later stages can assume well-formed buffers.
pub(crate) fn decode_gray16(path: &Path) -> Result<RawGray16, TiffReadError> {
    if !path.exists() {
        return Err(TiffReadError::NotFound(path.to_path_buf()));
    }
    if !has_tiff_extension(path) {
        return Err(TiffReadError::BadExtension(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| TiffReadError::Decode(e.to_string()))?;
    let mut decoder =
        Decoder::new(BufReader::new(file)).map_err(|e| TiffReadError::Decode(e.to_string()))?;

    let colortype = decoder
        .colortype()
        .map_err(|e| TiffReadError::Decode(e.to_string()))?;
    match colortype {
        ColorType::Gray(16) => {}
        ColorType::Gray(bits) => {
            return Err(TiffReadError::NotSixteenBit {
                found: format!("u{}", bits),
            })
        }
        other => {
            return Err(TiffReadError::NotGrayscale {
                found: format!("{:?}", other),
            })
        }
    }

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| TiffReadError::Decode(e.to_string()))?;

    let data = match decoder
        .read_image()
        .map_err(|e| TiffReadError::Decode(e.to_string()))?
    {
        DecodingResult::U16(data) => data,
        other => {
            return Err(TiffReadError::NotSixteenBit {
                found: format!("{:?}", other),
            })
        }
    };

    let (width, height) = (width as usize, height as usize);
    if data.len() != width * height {
        return Err(TiffReadError::Decode(format!(
            "sample count {} does not match dimensions {}x{}",
            data.len(),
            width,
            height
        )));
    }

    Ok(RawGray16 {
        data,
        width,
        height,
    })
}

impl From<TiffReadError> for ImageError {
    fn from(err: TiffReadError) -> Self {
        match err {
            TiffReadError::NotFound(path) => ImageError::NotFound(path),
            TiffReadError::BadExtension(path) => ImageError::UnsupportedExtension(path),
            TiffReadError::Decode(msg) => ImageError::Decode(msg),
            TiffReadError::NotSixteenBit { found } => ImageError::NotSixteenBit { found },
            TiffReadError::NotGrayscale { found } => ImageError::NotGrayscale { found },
        }
    }
}

/// Load a 16-bit grayscale TIFF negative and normalize its orientation.
///
/// Fails with [`ImageError::NotFound`] for a missing file,
/// [`ImageError::UnsupportedExtension`] for a non-TIFF extension, and the
/// validation variants when the decoded data is not 2-dimensional 16-bit
/// unsigned. Portrait images are rotated to landscape on the way in, so the
/// returned image is never portrait.
pub fn load_image(path: &Path) -> Result<GrayImage16, ImageError> {
    let raw = decode_gray16(path)?;
    let image = GrayImage16::new(raw.data, raw.width, raw.height);

    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        portrait = image.is_portrait(),
        "Loaded 16-bit grayscale image"
    );

    Ok(normalize_orientation(&image))
}
