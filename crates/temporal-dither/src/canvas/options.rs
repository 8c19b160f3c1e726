//! Canvas compositing options.

use super::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Configuration for canvas compositing.
///
/// # Defaults
///
/// The default configuration matches the physical display:
/// - Canvas size: 7680x4320 (the 8K transparent LCD)
/// - Centered placement (odd padding biased to the trailing edge)
/// - Border fill: 65535, i.e. white -- on a positive transparency, white
///   border blocks no light and prints as clean paper margin
///
/// # Example
///
/// ```
/// use temporal_dither::CanvasOptions;
///
/// // Use defaults (the physical display)
/// let options = CanvasOptions::new();
///
/// // Or customize with builder pattern
/// let options = CanvasOptions::new()
///     .size(1920, 1080)
///     .centered(false)
///     .fill(0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasOptions {
    /// Canvas width in pixels.
    pub width: usize,

    /// Canvas height in pixels.
    pub height: usize,

    /// Center the image on the canvas.
    ///
    /// When enabled, padding per axis is split `total // 2` on the leading
    /// side with any odd remainder on the trailing side. When disabled the
    /// image is placed at the origin.
    ///
    /// Default: `true`
    pub centered: bool,

    /// Border fill value written to every canvas pixel outside the image
    /// window.
    ///
    /// Default: `65535`
    pub fill: u16,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            centered: true,
            fill: u16::MAX,
        }
    }
}

impl CanvasOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas dimensions.
    #[inline]
    pub fn size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set centered placement.
    #[inline]
    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Set the border fill value.
    #[inline]
    pub fn fill(mut self, fill: u16) -> Self {
        self.fill = fill;
        self
    }
}
