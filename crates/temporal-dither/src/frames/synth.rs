//! Temporal dither frame synthesis.
//!
//! For frame index f (0-based) and per-pixel remainder r, the frame shows
//! `base + 1` where `r >= f + 1` and `base` elsewhere. Across a full cycle
//! of N frames exactly r frames are boosted, so the time-averaged level is
//! `base + r/N` -- for N = 16 the four truncated bits are reconstructed
//! exactly on average. The threshold is fixed at `f + 1`; the boost count
//! per pixel must equal the remainder, and a threshold of `f` would boost
//! every pixel one frame too many.

use crate::image::{GrayImage16, GrayImage8};

use super::bitplane::decompose;
use super::marker::stamp_marker;

/// Canonical number of frames in a dither cycle; reconstructs a 4-bit
/// remainder exactly.
pub const DEFAULT_FRAME_COUNT: usize = 16;

/// Configuration for dither frame synthesis.
///
/// # Example
///
/// ```
/// use temporal_dither::SynthOptions;
///
/// let options = SynthOptions::new().frame_count(16).frame_marker(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthOptions {
    /// Number of frames in the cycle.
    ///
    /// Default: `16`
    pub frame_count: usize,

    /// Stamp a diagnostic marker box with the frame index, rotating through
    /// the four canvas corners by `f mod 4`. Cosmetic: no pixel outside the
    /// marker region is altered.
    ///
    /// Default: `false`
    pub frame_marker: bool,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
            frame_marker: false,
        }
    }
}

impl SynthOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of frames in the cycle.
    #[inline]
    pub fn frame_count(mut self, count: usize) -> Self {
        self.frame_count = count;
        self
    }

    /// Enable or disable the diagnostic frame marker.
    #[inline]
    pub fn frame_marker(mut self, enabled: bool) -> Self {
        self.frame_marker = enabled;
        self
    }
}

/// An ordered, immutable set of 8-bit dither frames.
///
/// Owned by the caller for the duration of one print job and regenerated
/// per job; synthesis is deterministic, so identical canvas and options
/// always yield a bit-identical set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DitherFrameSet {
    frames: Vec<GrayImage8>,
    width: usize,
    height: usize,
}

impl DitherFrameSet {
    /// Number of frames in the cycle.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when the set holds no frames.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame width (equals the canvas width).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame height (equals the canvas height).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The ordered frames.
    #[inline]
    pub fn frames(&self) -> &[GrayImage8] {
        &self.frames
    }

    /// A single frame by cycle index.
    #[inline]
    pub fn frame(&self, index: usize) -> &GrayImage8 {
        &self.frames[index]
    }
}

/// Synthesize the temporal dither frame set for a canvas.
///
/// Output is deterministic and clipped defensively to the 8-bit range (a
/// base of 255 with a nonzero remainder would otherwise wrap).
pub fn synthesize(canvas: &GrayImage16, options: &SynthOptions) -> DitherFrameSet {
    let planes = decompose(canvas);
    let n = options.frame_count;

    let mut frames = Vec::with_capacity(n);
    for f in 0..n {
        let threshold = f as u8;
        let data: Vec<u8> = planes
            .base
            .iter()
            .zip(planes.remainder.iter())
            .map(|(&base, &remainder)| {
                if remainder > threshold {
                    base.saturating_add(1)
                } else {
                    base
                }
            })
            .collect();

        let mut frame = GrayImage8::new(data, planes.width, planes.height);
        if options.frame_marker {
            stamp_marker(&mut frame, f);
        }
        frames.push(frame);
    }

    tracing::debug!(
        frame_count = n,
        width = planes.width,
        height = planes.height,
        "Synthesized dither frame set"
    );

    DitherFrameSet {
        frames,
        width: planes.width,
        height: planes.height,
    }
}
