//! Palette color cycling
//!
//! The counter is bounds-checked before it is incremented, so after the last
//! palette entry it steps onto a one-past-the-end slot and only the following
//! advance wraps it back to zero. That slot draws with the first palette
//! entry; the palette is never indexed out of range.

use super::palette::{Color, PALETTE, PALETTE_LEN};

/// Current palette position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorCycler {
    /// Raw counter in `0..=PALETTE_LEN`
    counter: u8,
}

impl ColorCycler {
    /// Start at the first palette entry
    pub const fn new() -> Self {
        Self { counter: 0 }
    }

    /// Step to the next color
    pub fn advance(&mut self) {
        if (self.counter as usize) < PALETTE_LEN {
            self.counter += 1;
        } else {
            self.counter = 0;
        }
    }

    /// Palette index used for drawing, always `< PALETTE_LEN`
    pub fn index(&self) -> usize {
        self.counter as usize % PALETTE_LEN
    }

    /// Color used for drawing
    pub fn color(&self) -> Color {
        PALETTE[self.index()]
    }

    /// Check if the counter sits on the one-past-the-end slot
    pub fn at_boundary(&self) -> bool {
        self.counter as usize == PALETTE_LEN
    }
}
