//! Canvas compositing: scale-to-fit and center onto the display canvas.

mod compose;
mod options;

pub use compose::{compose, ComposeError};
pub use options::CanvasOptions;

/// Native width of the enlarger's transparent LCD.
pub const DISPLAY_WIDTH: usize = 7680;

/// Native height of the enlarger's transparent LCD.
pub const DISPLAY_HEIGHT: usize = 4320;
