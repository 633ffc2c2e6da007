//! Configuration types
//!
//! Everything here is fixed at compile time; there is no runtime
//! configuration surface.

pub mod types;

pub use types::*;
