//! One print session: owns the loaded LUT, the pipeline configuration, and
//! at most one actively cycling frame set.
//!
//! The session replaces any shared LUT-directory state: the directory is an
//! explicit configuration value carried by the session, constructed once per
//! job and discarded with it. Starting a new print cancels the prior one --
//! the display target can cycle only one frame set at a time.

use std::path::{Path, PathBuf};
use std::time::Duration;

use temporal_dither::{
    load_image, DitherFrameSet, FrameSequencer, GrayImage8, PrintPipeline, ToneLut,
};

use crate::error::AppError;
use crate::models::AppConfig;

/// What a started job looks like, for logging and operator feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    /// Source image size after orientation normalization (width, height).
    pub source_size: (usize, usize),
    /// Canvas size every frame shares (width, height).
    pub canvas_size: (usize, usize),
    /// Number of frames in the dither cycle.
    pub frame_count: usize,
    /// Per-frame display interval (exposure / frames, floored at 500 ms).
    pub frame_interval: Duration,
}

/// A print session bound to one LUT and one display configuration.
pub struct PrintSession {
    config: AppConfig,
    pipeline: PrintPipeline,
    active: Option<FrameSequencer>,
}

impl PrintSession {
    /// Create a session with the given configuration and LUT file.
    ///
    /// A bare LUT file name (no directory component) is resolved against
    /// the configured `lut_dir`; paths with directories are used as given.
    pub fn new(config: AppConfig, lut_path: &Path) -> Result<Self, AppError> {
        let resolved = Self::resolve_lut_path(&config, lut_path)?;
        let lut = ToneLut::load(&resolved)?;

        tracing::info!(lut = %resolved.display(), "Print session ready");

        let pipeline = PrintPipeline::new(lut)
            .canvas_size(config.canvas_width, config.canvas_height)
            .centered(config.centered)
            .fill(config.border_fill)
            .frame_count(config.frame_count)
            .frame_marker(config.frame_marker);

        Ok(Self {
            config,
            pipeline,
            active: None,
        })
    }

    fn resolve_lut_path(config: &AppConfig, lut_path: &Path) -> Result<PathBuf, AppError> {
        if lut_path.parent().is_some_and(|p| !p.as_os_str().is_empty()) {
            return Ok(lut_path.to_path_buf());
        }
        match &config.lut_dir {
            Some(dir) => Ok(dir.join(lut_path)),
            None if lut_path.exists() => Ok(lut_path.to_path_buf()),
            None => Err(AppError::NoLutDirectory(lut_path.to_path_buf())),
        }
    }

    /// Process a negative and start cycling its frames.
    ///
    /// Any previously active cycle is cancelled first; frames are immutable
    /// once synthesized, so cancellation is simply dropping the old
    /// sequencer.
    pub fn start(&mut self, image_path: &Path, exposure: Duration) -> Result<JobSummary, AppError> {
        // Cancel before the (long) synthesis so the display never cycles a
        // stale job while the new one is computed.
        if self.active.take().is_some() {
            tracing::info!("Cancelled previous print job");
        }

        let negative = load_image(image_path)?;
        let source_size = (negative.width(), negative.height());

        let frames = self.pipeline.process(&negative)?;
        let sequencer = FrameSequencer::new(frames, exposure);

        let summary = JobSummary {
            source_size,
            canvas_size: (self.config.canvas_width, self.config.canvas_height),
            frame_count: sequencer.frames().len(),
            frame_interval: sequencer.interval(),
        };

        tracing::info!(
            image = %image_path.display(),
            source_width = source_size.0,
            source_height = source_size.1,
            frames = summary.frame_count,
            interval_ms = summary.frame_interval.as_millis() as u64,
            "Print job started"
        );

        self.active = Some(sequencer);
        Ok(summary)
    }

    /// Stop the active cycle, if any.
    pub fn stop(&mut self) {
        if self.active.take().is_some() {
            tracing::info!("Print stopped");
        }
    }

    /// True while a frame set is actively cycling.
    pub fn is_printing(&self) -> bool {
        self.active.is_some()
    }

    /// The active frame set, for export or display.
    pub fn frames(&self) -> Option<&DitherFrameSet> {
        self.active.as_ref().map(|seq| seq.frames())
    }

    /// Cooperative tick: advance the active cycle by one frame.
    ///
    /// The display driver calls this once per timer interval. Returns the
    /// frame and its cycle index, or `None` when nothing is printing.
    pub fn advance(&mut self) -> Option<(usize, &GrayImage8)> {
        self.active.as_mut().and_then(|seq| seq.advance())
    }

    /// Per-frame interval of the active cycle.
    pub fn frame_interval(&self) -> Option<Duration> {
        self.active.as_ref().map(|seq| seq.interval())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::File;
    use tiff::encoder::{colortype, TiffEncoder};

    fn write_gray16(path: &Path, data: &[u16], width: u32, height: u32) {
        let file = File::create(path).unwrap();
        let mut encoder = TiffEncoder::new(file).unwrap();
        encoder
            .write_image::<colortype::Gray16>(width, height, data)
            .unwrap();
    }

    fn identity_lut(dir: &Path) -> PathBuf {
        let path = dir.join("identity.tif");
        let grid: Vec<u16> = (0..256 * 256).map(|i| i as u16).collect();
        write_gray16(&path, &grid, 256, 256);
        path
    }

    fn small_config() -> AppConfig {
        AppConfig {
            canvas_width: 32,
            canvas_height: 18,
            frame_count: 16,
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_lut_resolved_against_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        identity_lut(dir.path());

        let config = AppConfig {
            lut_dir: Some(dir.path().to_path_buf()),
            ..small_config()
        };
        let session = PrintSession::new(config, Path::new("identity.tif"));
        assert!(session.is_ok());
    }

    #[test]
    fn test_bare_lut_name_without_directory_fails() {
        let config = small_config();
        match PrintSession::new(config, Path::new("nowhere-to-look.tif")) {
            Err(AppError::NoLutDirectory(p)) => {
                assert_eq!(p, PathBuf::from("nowhere-to-look.tif"));
            }
            other => panic!("expected NoLutDirectory, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_explicit_lut_path_bypasses_directory() {
        let dir = tempfile::tempdir().unwrap();
        let lut_path = identity_lut(dir.path());

        let session = PrintSession::new(small_config(), &lut_path);
        assert!(session.is_ok());
    }

    #[test]
    fn test_start_produces_summary_and_activates() {
        let dir = tempfile::tempdir().unwrap();
        let lut_path = identity_lut(dir.path());
        let image_path = dir.path().join("neg.tif");
        write_gray16(&image_path, &vec![0x4000; 8 * 4], 8, 4);

        let mut session = PrintSession::new(small_config(), &lut_path).unwrap();
        assert!(!session.is_printing());

        let summary = session
            .start(&image_path, Duration::from_secs(32))
            .unwrap();

        assert_eq!(summary.source_size, (8, 4));
        assert_eq!(summary.canvas_size, (32, 18));
        assert_eq!(summary.frame_count, 16);
        assert_eq!(summary.frame_interval, Duration::from_secs(2));
        assert!(session.is_printing());
        assert_eq!(session.frames().unwrap().len(), 16);
    }

    #[test]
    fn test_start_cancels_prior_job() {
        let dir = tempfile::tempdir().unwrap();
        let lut_path = identity_lut(dir.path());
        let image_path = dir.path().join("neg.tif");
        write_gray16(&image_path, &vec![100u16; 4], 2, 2);

        let mut session = PrintSession::new(small_config(), &lut_path).unwrap();
        session.start(&image_path, Duration::from_secs(60)).unwrap();

        // Step partway into the first cycle.
        session.advance();
        session.advance();
        session.advance();

        session.start(&image_path, Duration::from_secs(60)).unwrap();
        // The replacement cycle starts from frame zero.
        let (index, _) = session.advance().unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_stop_clears_active_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let lut_path = identity_lut(dir.path());
        let image_path = dir.path().join("neg.tif");
        write_gray16(&image_path, &vec![100u16; 4], 2, 2);

        let mut session = PrintSession::new(small_config(), &lut_path).unwrap();
        session.start(&image_path, Duration::from_secs(60)).unwrap();
        session.stop();

        assert!(!session.is_printing());
        assert!(session.advance().is_none());
        assert!(session.frames().is_none());
    }

    #[test]
    fn test_advance_wraps_like_the_display_loop() {
        let dir = tempfile::tempdir().unwrap();
        let lut_path = identity_lut(dir.path());
        let image_path = dir.path().join("neg.tif");
        write_gray16(&image_path, &vec![100u16; 4], 2, 2);

        let config = AppConfig {
            frame_count: 4,
            ..small_config()
        };
        let mut session = PrintSession::new(config, &lut_path).unwrap();
        session.start(&image_path, Duration::from_secs(10)).unwrap();

        let indices: Vec<usize> = (0..6).map(|_| session.advance().unwrap().0).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 0, 1]);
    }
}
