//! Configuration type definitions

/// Full-scale value of a raw joystick sample (14-bit converter range)
pub const FULL_SCALE: u16 = 16384;

/// Divider from a raw sample to the initial cursor coordinate
pub const SAMPLE_RATIO: u16 = 129;

/// Main loop period in milliseconds
pub const TICK_INTERVAL_MS: u32 = 25;

/// Settle time before a button level is trusted, in milliseconds
pub const SETTLE_MS: u32 = 10;

/// Sketch configuration
///
/// Holds the constants the sketch loop works with. Display bounds are not
/// part of it; they come from the display driver itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SketchConfig {
    /// Exclusive upper bound of raw samples
    pub full_scale: u16,
    /// Raw sample divider for the starting cursor position
    pub sample_ratio: u16,
    /// Delay between main loop iterations
    pub tick_interval_ms: u32,
    /// Button settle time
    pub settle_ms: u32,
}

impl SketchConfig {
    /// Board defaults
    pub const DEFAULT: Self = Self {
        full_scale: FULL_SCALE,
        sample_ratio: SAMPLE_RATIO,
        tick_interval_ms: TICK_INTERVAL_MS,
        settle_ms: SETTLE_MS,
    };

    /// Sample value that sits in the middle of the dead zone
    pub const fn center_sample(&self) -> u16 {
        self.full_scale / 2
    }
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
