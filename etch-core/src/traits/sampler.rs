//! Analog sampler trait

/// Logical joystick input channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Vertical (Y) axis
    Vertical,
    /// Horizontal (X) axis
    Horizontal,
}

/// Trait for the analog-to-digital sampler
///
/// The converter is multiplexed: a channel is selected first, then sampled.
/// Samples are always in `[0, full_scale)`.
pub trait Sampler {
    /// Select and prepare a channel for the next sample
    fn init_channel(&mut self, channel: Channel);

    /// Take one sample from the selected channel
    fn sample(&mut self) -> u16;

    /// Select a channel and take one sample from it
    fn read(&mut self, channel: Channel) -> u16 {
        self.init_channel(channel);
        self.sample()
    }
}
