//! Hardware abstraction traits
//!
//! These traits define the interface between the sketch logic and the
//! board-specific sampler and display implementations.

pub mod display;
pub mod sampler;

pub use display::{Bounds, DisplayError, PixelDisplay};
pub use sampler::{Channel, Sampler};
