//! Board-agnostic core logic for the Etch sketch firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (analog sampler, pixel display)
//! - Joystick-to-cursor mapping with edge wraparound
//! - Palette and color cycling
//! - Button debouncing and edge events
//! - The sketch application state tying it all together
//! - Compile-time configuration

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod input;
pub mod motion;
pub mod sketch;
pub mod traits;

pub use sketch::Sketch;
