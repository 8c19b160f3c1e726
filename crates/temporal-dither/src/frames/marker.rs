//! Diagnostic frame marker.
//!
//! Stamps a small solid box in one canvas corner, rotating through the four
//! corners by `frame_index mod 4` (top-left, top-right, bottom-right,
//! bottom-left). Even frames stamp white, odd frames black, so the marker
//! is visible against any border fill while cycling. Cosmetic only: nothing
//! outside the marker region changes.

use crate::image::GrayImage8;

/// Side length of the marker box in pixels.
const MARKER_SIZE: usize = 64;

pub(crate) fn stamp_marker(frame: &mut GrayImage8, frame_index: usize) {
    let (w, h) = (frame.width(), frame.height());
    let size = MARKER_SIZE.min(w).min(h);
    if size == 0 {
        return;
    }

    let (x0, y0) = match frame_index % 4 {
        0 => (0, 0),
        1 => (w - size, 0),
        2 => (w - size, h - size),
        _ => (0, h - size),
    };

    let value = if frame_index % 2 == 0 { u8::MAX } else { 0 };
    let data = frame.data_mut();
    for y in y0..y0 + size {
        for x in x0..x0 + size {
            data[y * w + x] = value;
        }
    }
}
