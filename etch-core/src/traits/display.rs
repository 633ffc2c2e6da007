//! Pixel display trait

use crate::color::Color;

/// Errors that can occur while talking to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the controller failed
    Communication,
    /// Display not initialized
    NotInitialized,
}

/// Inclusive display bounds in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bounds {
    /// Largest valid x coordinate
    pub max_x: i32,
    /// Largest valid y coordinate
    pub max_y: i32,
}

impl Bounds {
    /// Create bounds from the largest valid coordinates
    pub const fn new(max_x: i32, max_y: i32) -> Self {
        Self { max_x, max_y }
    }

    /// Check if a coordinate lies on the display
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x <= self.max_x && y >= 0 && y <= self.max_y
    }
}

/// Trait for a fixed-size pixel display
///
/// Coordinates are signed; implementations must silently discard pixels
/// outside [`PixelDisplay::BOUNDS`].
pub trait PixelDisplay {
    /// Display extent
    const BOUNDS: Bounds;

    /// Set a single pixel
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), DisplayError>;

    /// Fill the whole display with one color
    fn clear(&mut self, color: Color) -> Result<(), DisplayError>;
}
