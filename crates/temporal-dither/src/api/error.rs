//! Unified error type for the temporal-dither public API.
//!
//! [`PipelineError`] wraps all stage error types into a single enum for
//! convenient `?` propagation in application code.

use crate::canvas::ComposeError;
use crate::image::ImageError;
use crate::lut::LutError;
use crate::tone::ToneError;
use std::fmt;

/// Unified error type for the temporal-dither public API.
///
/// Wraps the per-stage error types into a single enum for convenient `?`
/// propagation. Every variant is recoverable by the caller; the pipeline
/// never terminates the host process.
///
/// # Example
///
/// ```no_run
/// use temporal_dither::{PipelineError, PrintPipeline, ToneLut};
///
/// fn build(lut_path: &std::path::Path) -> Result<PrintPipeline, PipelineError> {
///     let lut = ToneLut::load(lut_path)?;
///     Ok(PrintPipeline::new(lut))
/// }
/// ```
#[derive(Debug)]
pub enum PipelineError {
    /// Image loading or validation error.
    Image(ImageError),
    /// LUT loading or validation error.
    Lut(LutError),
    /// Tone-mapping error.
    Tone(ToneError),
    /// Canvas compositing error.
    Compose(ComposeError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Image(err) => write!(f, "image error: {}", err),
            PipelineError::Lut(err) => write!(f, "LUT error: {}", err),
            PipelineError::Tone(err) => write!(f, "tone error: {}", err),
            PipelineError::Compose(err) => write!(f, "compose error: {}", err),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Image(err) => Some(err),
            PipelineError::Lut(err) => Some(err),
            PipelineError::Tone(err) => Some(err),
            PipelineError::Compose(err) => Some(err),
        }
    }
}

impl From<ImageError> for PipelineError {
    fn from(err: ImageError) -> Self {
        PipelineError::Image(err)
    }
}

impl From<LutError> for PipelineError {
    fn from(err: LutError) -> Self {
        PipelineError::Lut(err)
    }
}

impl From<ToneError> for PipelineError {
    fn from(err: ToneError) -> Self {
        PipelineError::Tone(err)
    }
}

impl From<ComposeError> for PipelineError {
    fn from(err: ComposeError) -> Self {
        PipelineError::Compose(err)
    }
}
