//! Write synthesized frames to disk as 8-bit grayscale PNGs.
//!
//! Useful for inspecting the dither cycle frame by frame, or for feeding a
//! display driver that consumes files instead of buffers.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use temporal_dither::DitherFrameSet;

use crate::error::AppError;

/// Write every frame of the set into `dir` as `frame_00.png` .. `frame_NN.png`.
///
/// The directory is created if missing. Returns the written paths in frame
/// order.
pub fn write_frames(frames: &DitherFrameSet, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    std::fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(frames.len());
    for (index, frame) in frames.frames().iter().enumerate() {
        let path = dir.join(format!("frame_{:02}.png", index));
        write_png(frame.data(), frame.width(), frame.height(), &path)?;
        paths.push(path);
    }

    tracing::info!(
        count = paths.len(),
        dir = %dir.display(),
        "Exported frame set"
    );
    Ok(paths)
}

fn write_png(data: &[u8], width: usize, height: usize, path: &Path) -> Result<(), AppError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, width as u32, height as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(data)?;
    Ok(())
}
