//! Joystick sampling on the RP2040 ADC
//!
//! The joystick is wired to ADC0 (GPIO26, horizontal) and ADC1 (GPIO27,
//! vertical). The sampler takes those two pins by type, so the wiring
//! cannot be swapped at the call site.
//!
//! Readings are rescaled from 12 bits to the sketch's sample range.

use embassy_rp::adc::{self, Adc, Blocking};
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::{PIN_26, PIN_27};
use embassy_rp::Peri;

use etch_core::config::SketchConfig;
use etch_core::traits::{Channel, Sampler};

/// Exclusive upper bound of a raw RP2040 conversion
pub const ADC_FULL_SCALE: u16 = 4096;

/// Rescale a 12-bit conversion to `[0, full_scale)`
pub fn rescale(raw: u16, full_scale: u16) -> u16 {
    let raw = u32::from(raw.min(ADC_FULL_SCALE - 1));
    (raw * u32::from(full_scale) / u32::from(ADC_FULL_SCALE)) as u16
}

/// Two-axis joystick on the RP2040 ADC
///
/// Channels are read with blocking conversions. A failed conversion reads
/// as the center of the range so the cursor holds still.
pub struct JoystickSampler<'d> {
    adc: Adc<'d, Blocking>,
    horizontal: adc::Channel<'d>,
    vertical: adc::Channel<'d>,
    selected: Channel,
    full_scale: u16,
    center: u16,
}

impl<'d> JoystickSampler<'d> {
    /// Create a sampler on the joystick pins
    ///
    /// Samples are scaled to `config.full_scale`.
    pub fn new(
        adc: Adc<'d, Blocking>,
        x_pin: Peri<'d, PIN_26>,
        y_pin: Peri<'d, PIN_27>,
        config: &SketchConfig,
    ) -> Self {
        Self {
            adc,
            horizontal: adc::Channel::new_pin(x_pin, Pull::None),
            vertical: adc::Channel::new_pin(y_pin, Pull::None),
            selected: Channel::Vertical,
            full_scale: config.full_scale,
            center: config.center_sample(),
        }
    }
}

impl Sampler for JoystickSampler<'_> {
    fn init_channel(&mut self, channel: Channel) {
        self.selected = channel;
    }

    fn sample(&mut self) -> u16 {
        let channel = match self.selected {
            Channel::Horizontal => &mut self.horizontal,
            Channel::Vertical => &mut self.vertical,
        };

        match self.adc.blocking_read(channel) {
            Ok(raw) => rescale(raw, self.full_scale),
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("ADC conversion failed on {:?} axis", self.selected);
                self.center
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etch_core::config::FULL_SCALE;

    #[test]
    fn test_rescale_range() {
        assert_eq!(rescale(0, FULL_SCALE), 0);
        assert_eq!(rescale(2048, FULL_SCALE), 8192);
        assert_eq!(rescale(4095, FULL_SCALE), 16380);
        // Out of range conversions clamp
        assert_eq!(rescale(5000, FULL_SCALE), 16380);
    }

    #[test]
    fn test_rescale_follows_config() {
        let config = SketchConfig {
            full_scale: 1024,
            ..SketchConfig::DEFAULT
        };
        assert_eq!(rescale(2048, config.full_scale), config.center_sample());
        assert_eq!(rescale(4095, config.full_scale), 1023);
    }
}
