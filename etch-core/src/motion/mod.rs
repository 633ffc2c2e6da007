//! Cursor motion
//!
//! Maps raw joystick samples to single-pixel cursor steps.

pub mod axis;
pub mod cursor;

pub use axis::{wrap, Deflection};
pub use cursor::{first_pixel, Cursor};
