//! Frame sequencing contract.
//!
//! The display driver that actually cycles frames lives outside this crate;
//! what is fixed here is the timing contract and the cooperative stepper it
//! drives. Per-frame interval is `max(exposure / N, MIN_FRAME_INTERVAL)`:
//! the 500 ms floor reflects the transparent LCD's slow response, and when
//! it binds the real total exposure exceeds the request. That is accepted,
//! not a defect.

use std::time::Duration;

use crate::image::GrayImage8;

use super::DitherFrameSet;

/// Minimum per-frame display interval the LCD can follow.
pub const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(500);

/// Per-frame display interval for a cycle of `frame_count` frames spread
/// over `exposure`, floored at [`MIN_FRAME_INTERVAL`].
pub fn frame_interval(exposure: Duration, frame_count: usize) -> Duration {
    if frame_count == 0 {
        return MIN_FRAME_INTERVAL;
    }
    (exposure / frame_count as u32).max(MIN_FRAME_INTERVAL)
}

/// Cooperative circular stepper over a dither frame set.
///
/// Playback is a fixed sequence with wraparound, driven by one call to
/// [`advance`](Self::advance) per timer tick. The exclusive receiver makes
/// concurrent advances of the same sequence impossible; cancellation is
/// simply dropping the sequencer -- frames are immutable once synthesized,
/// so no frame is ever partially written.
#[derive(Debug)]
pub struct FrameSequencer {
    set: DitherFrameSet,
    interval: Duration,
    cursor: usize,
}

impl FrameSequencer {
    /// Create a sequencer for one print job.
    ///
    /// `exposure` is the requested total exposure duration; the actual
    /// per-frame interval is [`frame_interval`] of it.
    pub fn new(set: DitherFrameSet, exposure: Duration) -> Self {
        let interval = frame_interval(exposure, set.len());
        Self {
            set,
            interval,
            cursor: 0,
        }
    }

    /// The per-frame display interval.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The frame set being cycled.
    #[inline]
    pub fn frames(&self) -> &DitherFrameSet {
        &self.set
    }

    /// Index of the frame the next [`advance`](Self::advance) will return.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Step to the next frame, wrapping at the end of the cycle.
    ///
    /// Returns the frame and its cycle index, or `None` for an empty set.
    pub fn advance(&mut self) -> Option<(usize, &GrayImage8)> {
        if self.set.is_empty() {
            return None;
        }
        let index = self.cursor;
        self.cursor = (self.cursor + 1) % self.set.len();
        Some((index, self.set.frame(index)))
    }
}
