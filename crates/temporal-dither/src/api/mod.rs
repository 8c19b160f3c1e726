//! Public builder API for the print pipeline.

mod builder;
mod error;

pub use builder::PrintPipeline;
pub use error::PipelineError;
