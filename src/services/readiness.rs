//! Pre-flight inspection of a negative against the configured display.
//!
//! Answers the questions an operator asks before committing to a print:
//! does the file decode, how will it sit on the canvas, and what does the
//! dither cycle look like for the chosen exposure.

use std::path::Path;
use std::time::Duration;

use temporal_dither::{frame_interval, load_image};

use crate::error::AppError;
use crate::models::AppConfig;

/// Everything the `inspect` command reports about one negative.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadinessReport {
    /// Image size after orientation normalization (width, height).
    pub source_size: (usize, usize),
    /// Canvas the frames will share (width, height).
    pub canvas_size: (usize, usize),
    /// Size the image will occupy on the canvas after any downscale.
    pub placed_size: (usize, usize),
    /// Scale factor applied (1.0 when the image already fits).
    pub scale: f64,
    /// Top-left placement offset on the canvas (x, y).
    pub offset: (usize, usize),
    /// Darkest and brightest sample in the negative.
    pub value_range: (u16, u16),
    /// Frames per dither cycle.
    pub frame_count: usize,
    /// Per-frame interval for the configured exposure.
    pub frame_interval: Duration,
}

impl ReadinessReport {
    /// Decode the negative and work out how it will print.
    ///
    /// This mirrors the compose geometry without touching pixel data: the
    /// same aspect-preserving downscale and centering arithmetic, computed
    /// on dimensions alone.
    pub fn analyze(image_path: &Path, config: &AppConfig) -> Result<Self, AppError> {
        let image = load_image(image_path)?;
        let (w, h) = (image.width(), image.height());
        let (cw, ch) = (config.canvas_width, config.canvas_height);

        let (placed, scale) = if w > cw || h > ch {
            let scale = (cw as f64 / w as f64).min(ch as f64 / h as f64);
            let pw = ((w as f64 * scale) as usize).max(1);
            let ph = ((h as f64 * scale) as usize).max(1);
            ((pw, ph), scale)
        } else {
            ((w, h), 1.0)
        };

        let offset = if config.centered {
            ((cw - placed.0) / 2, (ch - placed.1) / 2)
        } else {
            (0, 0)
        };

        let value_range = image
            .data()
            .iter()
            .fold((u16::MAX, u16::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        let exposure = Duration::from_secs_f64(config.exposure_seconds);

        Ok(Self {
            source_size: (w, h),
            canvas_size: (cw, ch),
            placed_size: placed,
            scale,
            offset,
            value_range,
            frame_count: config.frame_count,
            frame_interval: frame_interval(exposure, config.frame_count),
        })
    }

    /// True when the image prints at native resolution.
    pub fn native_resolution(&self) -> bool {
        self.scale == 1.0
    }
}
