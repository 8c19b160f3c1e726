//! Row-major grayscale buffers at the two bit depths the pipeline uses.
//!
//! [`GrayImage16`] is the working type for every tonal stage; [`GrayImage8`]
//! is the display-native type the dither synthesizer emits. Both are plain
//! owned buffers with dimension metadata. Pipeline stages never mutate an
//! input buffer: each stage takes a reference and returns a fresh image.

/// A 16-bit single-channel image, row-major.
///
/// Invariant: `data.len() == width * height`. Values span the full u16
/// range; the pipeline treats them as linear tonal levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage16 {
    data: Vec<u16>,
    width: usize,
    height: usize,
}

impl GrayImage16 {
    /// Create an image from row-major samples.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `data.len() == width * height`.
    pub fn new(data: Vec<u16>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            width * height,
            "sample count ({}) must match width * height ({}x{}={})",
            data.len(),
            width,
            height,
            width * height,
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Create a uniformly-filled image.
    pub fn filled(value: u16, width: usize, height: usize) -> Self {
        Self::new(vec![value; width * height], width, height)
    }

    /// Widen 8-bit samples to 16-bit.
    ///
    /// This is the pipeline's one intentional implicit coercion: an 8-bit
    /// source is widened value-for-value (`v as u16`, no rescaling) so its
    /// levels index the low end of the 65536-entry tone LUT, exactly as the
    /// raw bytes would.
    pub fn from_8bit(data: &[u8], width: usize, height: usize) -> Self {
        Self::new(data.iter().map(|&v| v as u16).collect(), width, height)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major samples.
    #[inline]
    pub fn data(&self) -> &[u16] {
        &self.data
    }

    /// True when the image holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at (x, y). Row-major: `data[y * width + x]`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u16 {
        self.data[y * self.width + x]
    }

    /// True iff height > width.
    #[inline]
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    /// Rotate 90 degrees clockwise into a new buffer.
    ///
    /// An HxW source becomes WxH output with
    /// `out[y][x] = src[H - 1 - x][y]` -- pixels relocate, the buffer is
    /// not merely reshaped.
    pub fn rotate_cw(&self) -> GrayImage16 {
        let (w, h) = (self.width, self.height);
        let mut out = vec![0u16; w * h];
        for y in 0..w {
            for x in 0..h {
                out[y * h + x] = self.data[(h - 1 - x) * w + y];
            }
        }
        GrayImage16::new(out, h, w)
    }
}

/// An 8-bit single-channel image, row-major.
///
/// The display-native frame format produced by the dither synthesizer.
/// Immutable once handed out of the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage8 {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl GrayImage8 {
    /// Create an image from row-major samples.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `data.len() == width * height`.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            width * height,
            "sample count ({}) must match width * height ({}x{}={})",
            data.len(),
            width,
            height,
            width * height,
        );
        Self {
            data,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
