use serde::Deserialize;
use std::path::{Path, PathBuf};
use temporal_dither::{CanvasOptions, SynthOptions, DEFAULT_FRAME_COUNT};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Canvas width in pixels (the transparent LCD's native width)
    #[serde(default = "default_canvas_width")]
    pub canvas_width: usize,

    /// Canvas height in pixels
    #[serde(default = "default_canvas_height")]
    pub canvas_height: usize,

    /// Number of dither frames per cycle
    #[serde(default = "default_frame_count")]
    pub frame_count: usize,

    /// Center the image on the canvas
    #[serde(default = "default_centered")]
    pub centered: bool,

    /// Border fill value (default: white, which prints as clean margin)
    #[serde(default = "default_border_fill")]
    pub border_fill: u16,

    /// Stamp the diagnostic frame marker on every frame
    #[serde(default)]
    pub frame_marker: bool,

    /// Directory searched for LUT files given by bare name
    #[serde(default)]
    pub lut_dir: Option<PathBuf>,

    /// Default exposure duration in seconds when the caller gives none
    #[serde(default = "default_exposure_seconds")]
    pub exposure_seconds: f64,
}

fn default_canvas_width() -> usize {
    temporal_dither::canvas::DISPLAY_WIDTH
}

fn default_canvas_height() -> usize {
    temporal_dither::canvas::DISPLAY_HEIGHT
}

fn default_frame_count() -> usize {
    DEFAULT_FRAME_COUNT
}

fn default_centered() -> bool {
    true
}

fn default_border_fill() -> u16 {
    u16::MAX
}

fn default_exposure_seconds() -> f64 {
    30.0
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file is missing or malformed.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        path = %path.display(),
                        canvas_width = config.canvas_width,
                        canvas_height = config.canvas_height,
                        frame_count = config.frame_count,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Canvas options for the configured display.
    pub fn canvas_options(&self) -> CanvasOptions {
        CanvasOptions::new()
            .size(self.canvas_width, self.canvas_height)
            .centered(self.centered)
            .fill(self.border_fill)
    }

    /// Synthesis options for the configured dither cycle.
    pub fn synth_options(&self) -> SynthOptions {
        SynthOptions::new()
            .frame_count(self.frame_count)
            .frame_marker(self.frame_marker)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            frame_count: default_frame_count(),
            centered: true,
            border_fill: u16::MAX,
            frame_marker: false,
            lut_dir: None,
            exposure_seconds: default_exposure_seconds(),
        }
    }
}
