//! Scale-to-fit compositing onto the display canvas.
//!
//! The canvas is filled with the border value first, then the (possibly
//! downscaled) image is blitted into its window. Downscaling uses an
//! area/box filter: each destination pixel is the coverage-weighted average
//! of the source pixels it spans, which is the correct filter for shrinking
//! continuous-tone scans. Images are never upscaled.

use std::fmt;

use crate::image::GrayImage16;

use super::CanvasOptions;

/// Error type for canvas compositing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// The input buffer holds no pixels.
    EmptyImage,
    /// After scaling, the image still exceeds the canvas. Unreachable under
    /// correct scaling with a non-degenerate canvas; guarded anyway.
    Overflow {
        /// Scaled image width.
        width: usize,
        /// Scaled image height.
        height: usize,
        /// Canvas width.
        canvas_width: usize,
        /// Canvas height.
        canvas_height: usize,
    },
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::EmptyImage => write!(f, "cannot compose an empty image"),
            ComposeError::Overflow {
                width,
                height,
                canvas_width,
                canvas_height,
            } => write!(
                f,
                "scaled image {}x{} exceeds canvas {}x{}",
                width, height, canvas_width, canvas_height
            ),
        }
    }
}

impl std::error::Error for ComposeError {}

/// Composite an image onto a border-filled canvas.
///
/// If either source dimension exceeds the corresponding canvas dimension,
/// the image is uniformly downscaled (aspect ratio preserved, area filter)
/// until both fit. Total padding per axis is `canvas - scaled`; centered
/// placement puts `total / 2` on the leading side with any odd remainder on
/// the trailing side, non-centered placement uses the origin. The output is
/// always exactly the configured canvas size.
pub fn compose(image: &GrayImage16, options: &CanvasOptions) -> Result<GrayImage16, ComposeError> {
    if image.is_empty() {
        return Err(ComposeError::EmptyImage);
    }

    let (cw, ch) = (options.width, options.height);

    let scaled;
    let source = if image.width() > cw || image.height() > ch {
        let scale = f64::min(
            cw as f64 / image.width() as f64,
            ch as f64 / image.height() as f64,
        );
        let new_w = ((image.width() as f64 * scale) as usize).max(1);
        let new_h = ((image.height() as f64 * scale) as usize).max(1);

        tracing::debug!(
            from_width = image.width(),
            from_height = image.height(),
            to_width = new_w,
            to_height = new_h,
            "Downscaling image to fit canvas"
        );

        scaled = downscale_area(image, new_w, new_h);
        &scaled
    } else {
        image
    };

    if source.width() > cw || source.height() > ch {
        return Err(ComposeError::Overflow {
            width: source.width(),
            height: source.height(),
            canvas_width: cw,
            canvas_height: ch,
        });
    }

    let (x_off, y_off) = if options.centered {
        ((cw - source.width()) / 2, (ch - source.height()) / 2)
    } else {
        (0, 0)
    };

    let mut data = vec![options.fill; cw * ch];
    let src = source.data();
    for row in 0..source.height() {
        let dst_start = (y_off + row) * cw + x_off;
        let src_start = row * source.width();
        data[dst_start..dst_start + source.width()]
            .copy_from_slice(&src[src_start..src_start + source.width()]);
    }

    Ok(GrayImage16::new(data, cw, ch))
}

/// Area/box downscale: each output pixel averages the source region it
/// covers, weighted by fractional overlap at the region edges.
fn downscale_area(image: &GrayImage16, new_w: usize, new_h: usize) -> GrayImage16 {
    let (sw, sh) = (image.width(), image.height());
    let x_ratio = sw as f64 / new_w as f64;
    let y_ratio = sh as f64 / new_h as f64;
    let src = image.data();

    let mut out = vec![0u16; new_w * new_h];
    for dy in 0..new_h {
        let y0 = dy as f64 * y_ratio;
        let y1 = y0 + y_ratio;
        let sy_end = (y1.ceil() as usize).min(sh);

        for dx in 0..new_w {
            let x0 = dx as f64 * x_ratio;
            let x1 = x0 + x_ratio;
            let sx_end = (x1.ceil() as usize).min(sw);

            let mut acc = 0.0f64;
            let mut area = 0.0f64;
            for sy in y0.floor() as usize..sy_end {
                let wy = (sy as f64 + 1.0).min(y1) - (sy as f64).max(y0);
                for sx in x0.floor() as usize..sx_end {
                    let wx = (sx as f64 + 1.0).min(x1) - (sx as f64).max(x0);
                    let weight = wx * wy;
                    acc += src[sy * sw + sx] as f64 * weight;
                    area += weight;
                }
            }
            out[dy * new_w + dx] = (acc / area).round() as u16;
        }
    }

    GrayImage16::new(out, new_w, new_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_is_always_canvas_sized() {
        let options = CanvasOptions::new().size(16, 9);
        for (w, h) in [(4usize, 3usize), (16, 9), (32, 18), (100, 1)] {
            let image = GrayImage16::filled(1, w, h);
            let canvas = compose(&image, &options).unwrap();
            assert_eq!((canvas.width(), canvas.height()), (16, 9));
        }
    }

    #[test]
    fn test_centered_blit_reproduces_source_exactly() {
        let image = GrayImage16::new(vec![1, 2, 3, 4, 5, 6], 3, 2);
        let options = CanvasOptions::new().size(7, 6).fill(9);
        let canvas = compose(&image, &options).unwrap();

        // Padding: x total 4 -> 2 leading; y total 4 -> 2 leading.
        for y in 0..2usize {
            for x in 0..3usize {
                assert_eq!(canvas.get(x + 2, y + 2), image.get(x, y));
            }
        }
        // Every pixel outside the window is the fill value.
        let mut fill_count = 0;
        for y in 0..6usize {
            for x in 0..7usize {
                let inside = (2..5).contains(&x) && (2..4).contains(&y);
                if !inside {
                    assert_eq!(canvas.get(x, y), 9, "border pixel ({},{})", x, y);
                    fill_count += 1;
                }
            }
        }
        assert_eq!(fill_count, 7 * 6 - 6);
    }

    #[test]
    fn test_odd_padding_biases_trailing_edge() {
        // 3-wide image on a 6-wide canvas: total padding 3 -> 1 leading,
        // 2 trailing. Same for the vertical axis.
        let image = GrayImage16::filled(5, 3, 1);
        let options = CanvasOptions::new().size(6, 4).fill(0);
        let canvas = compose(&image, &options).unwrap();

        assert_eq!(canvas.get(0, 1), 0);
        assert_eq!(canvas.get(1, 1), 5);
        assert_eq!(canvas.get(3, 1), 5);
        assert_eq!(canvas.get(4, 1), 0);
        assert_eq!(canvas.get(5, 1), 0);
    }

    #[test]
    fn test_origin_placement_when_not_centered() {
        let image = GrayImage16::new(vec![1, 2, 3, 4], 2, 2);
        let options = CanvasOptions::new().size(4, 4).centered(false).fill(0);
        let canvas = compose(&image, &options).unwrap();

        assert_eq!(canvas.get(0, 0), 1);
        assert_eq!(canvas.get(1, 1), 4);
        assert_eq!(canvas.get(2, 0), 0);
        assert_eq!(canvas.get(0, 2), 0);
    }

    #[test]
    fn test_oversized_image_is_downscaled_to_fit() {
        let image = GrayImage16::filled(1000, 32, 8);
        let options = CanvasOptions::new().size(16, 16).fill(0);
        let canvas = compose(&image, &options).unwrap();

        assert_eq!((canvas.width(), canvas.height()), (16, 16));
        // 32x8 scaled by min(16/32, 16/8) = 0.5 -> 16x4, centered rows 6..10.
        for x in 0..16usize {
            assert_eq!(canvas.get(x, 6), 1000);
            assert_eq!(canvas.get(x, 9), 1000);
            assert_eq!(canvas.get(x, 5), 0);
            assert_eq!(canvas.get(x, 10), 0);
        }
    }

    #[test]
    fn test_never_upscales() {
        let image = GrayImage16::new(vec![1, 2, 3, 4], 2, 2);
        let options = CanvasOptions::new().size(100, 100).fill(0);
        let canvas = compose(&image, &options).unwrap();

        // The 2x2 source lands as-is, centered at (49,49).
        assert_eq!(canvas.get(49, 49), 1);
        assert_eq!(canvas.get(50, 49), 2);
        assert_eq!(canvas.get(49, 50), 3);
        assert_eq!(canvas.get(50, 50), 4);
    }

    #[test]
    fn test_downscale_area_averages_blocks() {
        // Exact 2:1 ratio: every output pixel is the mean of a 2x2 block.
        let image = GrayImage16::new(vec![0, 10, 100, 110, 20, 30, 120, 130], 4, 2);
        let out = downscale_area(&image, 2, 1);
        assert_eq!(out.data(), &[15, 115]);
    }

    #[test]
    fn test_downscale_area_fractional_ratio() {
        // 3 -> 2: pixel 0 covers [0, 1.5) = src0 + half of src1.
        let image = GrayImage16::new(vec![0, 100, 200], 3, 1);
        let out = downscale_area(&image, 2, 1);
        // (0*1 + 100*0.5) / 1.5 ~ 33.3; (100*0.5 + 200*1) / 1.5 = 166.7
        assert_eq!(out.data(), &[33, 167]);
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let empty = GrayImage16::new(Vec::new(), 0, 0);
        assert_eq!(
            compose(&empty, &CanvasOptions::new()),
            Err(ComposeError::EmptyImage)
        );
    }

    #[test]
    fn test_degenerate_canvas_hits_range_guard() {
        let image = GrayImage16::filled(1, 4, 4);
        let options = CanvasOptions::new().size(0, 0);
        assert!(matches!(
            compose(&image, &options),
            Err(ComposeError::Overflow { .. })
        ));
    }
}
