//! temporal-dither: 16-bit to 8-bit temporal dithering for enlarger displays
//!
//! This library turns a 16-bit scanned negative into a sequence of 8-bit
//! frames that, cycled rapidly on an 8-bit-only transparent LCD, reproduce
//! near-12-bit tonal resolution through temporal dithering. Along the way it
//! applies a photographic tone-correction LUT, fixes orientation, inverts
//! negative to positive, and composites the result onto a fixed 7680x4320
//! canvas.
//!
//! # Quick Start
//!
//! The [`PrintPipeline`] builder is the primary entry point:
//!
//! ```no_run
//! use temporal_dither::{PrintPipeline, ToneLut};
//!
//! # fn main() -> Result<(), temporal_dither::PipelineError> {
//! let lut = ToneLut::load("luts/grade2.tif".as_ref())?;
//!
//! let pipeline = PrintPipeline::new(lut).frame_count(16);
//! let frames = pipeline.process_file("negatives/portrait.tif".as_ref())?;
//!
//! assert_eq!(frames.len(), 16);
//! # Ok(())
//! # }
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! 16-bit TIFF             (scanned or rendered negative)
//!     |
//!     v
//! GrayImage16             (decode + validate: 2-D, u16)
//!     |
//!     v
//! [Orientation]           (portrait input rotated 90 degrees clockwise)
//!     |
//!     v
//! [Tone LUT]              (direct 65536-entry lookup, no interpolation)
//!     |
//!     v
//! [Invert]                (negative -> positive, out = 65535 - in)
//!     |
//!     v
//! [Compose]               (area-filter downscale to fit, center on
//!     |                    7680x4320 canvas, white border fill)
//!     v
//! [Synthesize]            (N 8-bit frames, threshold temporal dither)
//!     |
//!     v
//! DitherFrameSet          (handed to the display driver)
//! ```
//!
//! Every stage consumes a borrowed buffer and returns a fresh one; nothing
//! is mutated in place, so stages compose and test independently.
//!
//! # Why Temporal Dithering
//!
//! The physical display accepts only 8-bit values, but photographic paper
//! responds to the *cumulative* exposure across the whole print. Each canvas
//! value is treated as a 12-bit level (`value16 >> 4`) and split into an
//! 8-bit `base` plus a 4-bit `remainder` r. Frame f (0-based) shows
//! `base + 1` wherever `r >= f + 1` and `base` elsewhere, so across a full
//! cycle of 16 frames exactly r frames are boosted: the time-averaged level
//! is `base + r/16`, recovering the four discarded bits exactly on average.
//!
//! The frame set is deterministic -- identical canvas and frame count always
//! produce a bit-identical sequence -- and immutable once synthesized, so a
//! display driver can cycle it without synchronization.
//!
//! # Timing Contract
//!
//! [`frame_interval`] defines the per-frame display interval:
//! `max(exposure / N, 500 ms)`. The floor reflects the LCD's slow response;
//! when it binds, total exposure exceeds the request, which is accepted.
//! [`FrameSequencer`] provides the cooperative wraparound stepper the
//! display driver ticks.

pub mod api;
pub mod canvas;
pub mod frames;
pub mod image;
pub mod lut;
pub mod tone;


pub use api::{PipelineError, PrintPipeline};
pub use canvas::{compose, CanvasOptions, ComposeError};
pub use frames::{
    decompose, frame_interval, synthesize, BitPlanes, DitherFrameSet, FrameSequencer,
    SynthOptions, DEFAULT_FRAME_COUNT, MIN_FRAME_INTERVAL,
};
pub use image::{load_image, normalize_orientation, GrayImage16, GrayImage8, ImageError};
pub use lut::{load_lut, LutError, ToneLut};
pub use tone::{apply_lut, apply_lut8, invert, invert8, ToneError};
