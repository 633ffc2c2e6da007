//! Drawing colors
//!
//! A fixed eight-entry palette and the counter that walks through it.

pub mod cycler;
pub mod palette;

pub use cycler::ColorCycler;
pub use palette::{Color, PALETTE, PALETTE_LEN};
