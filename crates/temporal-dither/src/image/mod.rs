//! Grayscale image buffers, TIFF loading, and orientation normalization.

mod error;
mod gray;
mod load;

pub use error::ImageError;
pub use gray::{GrayImage16, GrayImage8};
pub use load::load_image;

pub(crate) use load::{decode_gray16, TiffReadError};

/// Rotate portrait input to landscape; return landscape input unchanged.
///
/// The enlarger's transparent LCD is mounted in landscape, so portrait
/// images (height > width) are rotated 90 degrees clockwise before any
/// further processing. Landscape and square images pass through as an
/// identical copy.
///
/// Rotation is pixel-exact: the 3x2 source `[[1,2],[3,4],[5,6]]` becomes
/// the 2x3 result `[[5,3,1],[6,4,2]]`.
pub fn normalize_orientation(image: &GrayImage16) -> GrayImage16 {
    if image.is_portrait() {
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            "Rotating portrait image to landscape"
        );
        image.rotate_cw()
    } else {
        image.clone()
    }
}
