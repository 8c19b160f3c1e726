use std::path::PathBuf;
use temporal_dither::PipelineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("LUT error: {0}")]
    Lut(#[from] temporal_dither::LutError),

    #[error("Image error: {0}")]
    Image(#[from] temporal_dither::ImageError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("LUT directory not configured (needed to resolve {0})")]
    NoLutDirectory(PathBuf),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
