//! Dither frame synthesis and the frame-sequencing contract.

mod bitplane;
mod marker;
mod sequencer;
mod synth;

pub use bitplane::{decompose, BitPlanes};
pub use sequencer::{frame_interval, FrameSequencer, MIN_FRAME_INTERVAL};
pub use synth::{synthesize, DitherFrameSet, SynthOptions, DEFAULT_FRAME_COUNT};
