//! PrintPipeline builder -- the primary ergonomic entry point for the crate.
//!
//! [`PrintPipeline`] wraps the full negative-to-frames pipeline behind
//! fluent configuration with the physical display's defaults.

use std::path::Path;

use crate::canvas::{compose, CanvasOptions};
use crate::frames::{synthesize, DitherFrameSet, SynthOptions};
use crate::image::{load_image, normalize_orientation, GrayImage16};
use crate::lut::ToneLut;
use crate::tone::{apply_lut, invert};

use super::PipelineError;

/// High-level print pipeline builder.
///
/// `PrintPipeline` is the recommended entry point for the crate. It wraps
/// the complete pipeline (orientation, tone mapping, inversion, canvas
/// compositing, dither synthesis) behind a fluent builder with the physical
/// display's defaults.
///
/// # Design
///
/// - Constructor requires a [`ToneLut`] (a print without tone correction is
///   not a valid job)
/// - Configuration methods consume and return `self` (standard builder
///   pattern)
/// - [`process()`](Self::process) takes `&self` so the builder is
///   **reusable** across multiple negatives with the same settings
///
/// # Example
///
/// ```
/// use temporal_dither::{GrayImage16, PrintPipeline, ToneLut};
///
/// let pipeline = PrintPipeline::new(ToneLut::identity())
///     .canvas_size(64, 36)
///     .frame_count(16);
///
/// let negative = GrayImage16::filled(0x8000, 40, 30);
/// let frames = pipeline.process(&negative).unwrap();
///
/// assert_eq!(frames.len(), 16);
/// assert_eq!((frames.width(), frames.height()), (64, 36));
/// ```
pub struct PrintPipeline {
    lut: ToneLut,
    canvas: CanvasOptions,
    synth: SynthOptions,
}

impl PrintPipeline {
    /// Create a pipeline with the given tone-correction LUT.
    ///
    /// Canvas and synthesis defaults match the physical display: 7680x4320
    /// canvas, centered, white border, 16 frames, no marker.
    pub fn new(lut: ToneLut) -> Self {
        Self {
            lut,
            canvas: CanvasOptions::new(),
            synth: SynthOptions::new(),
        }
    }

    /// Set the canvas dimensions.
    #[inline]
    pub fn canvas_size(mut self, width: usize, height: usize) -> Self {
        self.canvas = self.canvas.size(width, height);
        self
    }

    /// Set centered placement on the canvas.
    #[inline]
    pub fn centered(mut self, centered: bool) -> Self {
        self.canvas = self.canvas.centered(centered);
        self
    }

    /// Set the canvas border fill value.
    #[inline]
    pub fn fill(mut self, fill: u16) -> Self {
        self.canvas = self.canvas.fill(fill);
        self
    }

    /// Set the number of dither frames per cycle.
    #[inline]
    pub fn frame_count(mut self, count: usize) -> Self {
        self.synth = self.synth.frame_count(count);
        self
    }

    /// Enable or disable the diagnostic frame marker.
    #[inline]
    pub fn frame_marker(mut self, enabled: bool) -> Self {
        self.synth = self.synth.frame_marker(enabled);
        self
    }

    /// Run the pipeline on an in-memory negative.
    ///
    /// Stages, in order:
    /// 1. Orientation normalization (portrait rotated to landscape)
    /// 2. Tone LUT application
    /// 3. Inversion (negative to positive)
    /// 4. Canvas compositing (scale-to-fit, center, border fill)
    /// 5. Dither frame synthesis
    ///
    /// Each stage returns a fresh buffer; the input is never mutated. The
    /// builder is reusable -- `process()` takes `&self`.
    pub fn process(&self, negative: &GrayImage16) -> Result<DitherFrameSet, PipelineError> {
        let landscape = normalize_orientation(negative);
        let toned = apply_lut(&landscape, &self.lut)?;
        let positive = invert(&toned)?;
        let canvas = compose(&positive, &self.canvas)?;
        Ok(synthesize(&canvas, &self.synth))
    }

    /// Load a negative from a 16-bit TIFF file and run the pipeline.
    pub fn process_file(&self, path: &Path) -> Result<DitherFrameSet, PipelineError> {
        let negative = load_image(path)?;
        self.process(&negative)
    }
}
