//! RP2040-specific HAL for the Etch sketch firmware
//!
//! This crate provides RP2040 implementations of the `etch-core`
//! collaborator traits:
//!
//! - The joystick [`Sampler`](etch_core::traits::Sampler)
//! - ST7735s LCD over SPI as a [`PixelDisplay`](etch_core::traits::PixelDisplay)

#![no_std]

pub mod adc;
pub mod lcd;

pub use adc::JoystickSampler;
pub use lcd::{Lcd, LCD_HEIGHT, LCD_WIDTH};
