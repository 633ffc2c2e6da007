//! Cursor position tracking

use super::axis::{wrap, Deflection};
use crate::traits::Bounds;

/// Current drawing position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    x: i32,
    y: i32,
}

impl Cursor {
    /// Create a cursor at a position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Starting position derived from the first sample pair
    pub fn from_samples(raw_y: u16, raw_x: u16, ratio: u16) -> Self {
        let ratio = ratio.max(1);
        Self {
            x: i32::from(raw_x / ratio),
            y: i32::from(raw_y / ratio),
        }
    }

    /// Move at most one pixel per axis, wrapping at the display edges
    ///
    /// Y is applied before X; wraparound happens after both.
    pub fn step(&mut self, raw_y: u16, raw_x: u16, full_scale: u16, bounds: Bounds) {
        self.y += Deflection::classify(raw_y, full_scale).y_delta();
        self.x += Deflection::classify(raw_x, full_scale).x_delta();

        self.x = wrap(self.x, bounds.max_x);
        self.y = wrap(self.y, bounds.max_y);
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// Location of the very first pixel, drawn before the loop starts
///
/// Uses the raw samples with X mirrored, unlike every later pixel which is
/// drawn at the tracked cursor. The result is usually off-screen.
pub fn first_pixel(raw_y: u16, raw_x: u16, bounds: Bounds) -> (i32, i32) {
    (bounds.max_x - i32::from(raw_x), i32::from(raw_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: u16 = 16384;
    const CENTER: u16 = 8192;
    const BOUNDS: Bounds = Bounds::new(127, 127);

    #[test]
    fn test_from_samples() {
        let cursor = Cursor::from_samples(CENTER, CENTER, 129);
        assert_eq!(cursor.position(), (63, 63));

        let cursor = Cursor::from_samples(0, FULL - 1, 129);
        assert_eq!(cursor.position(), (127, 0));
    }

    #[test]
    fn test_dead_zone_holds_still() {
        let mut cursor = Cursor::new(40, 50);
        cursor.step(CENTER, CENTER, FULL, BOUNDS);
        assert_eq!(cursor.position(), (40, 50));
    }

    #[test]
    fn test_y_high_moves_down() {
        let mut cursor = Cursor::new(40, 50);
        cursor.step(15000, CENTER, FULL, BOUNDS);
        assert_eq!(cursor.position(), (40, 51));
    }

    #[test]
    fn test_x_low_moves_right() {
        let mut cursor = Cursor::new(40, 50);
        cursor.step(CENTER, 1000, FULL, BOUNDS);
        assert_eq!(cursor.position(), (41, 50));
    }

    #[test]
    fn test_diagonal() {
        let mut cursor = Cursor::new(40, 50);
        cursor.step(0, FULL - 1, FULL, BOUNDS);
        assert_eq!(cursor.position(), (39, 49));
    }

    #[test]
    fn test_wraparound() {
        let mut cursor = Cursor::new(10, 127);
        cursor.step(15000, CENTER, FULL, BOUNDS);
        assert_eq!(cursor.y(), 0);

        let mut cursor = Cursor::new(0, 10);
        cursor.step(CENTER, 15000, FULL, BOUNDS);
        assert_eq!(cursor.x(), 127);

        let mut cursor = Cursor::new(127, 0);
        cursor.step(1000, 1000, FULL, BOUNDS);
        assert_eq!(cursor.position(), (0, 127));
    }

    #[test]
    fn test_first_pixel_uses_raw_samples() {
        assert_eq!(first_pixel(CENTER, CENTER, BOUNDS), (127 - 8192, 8192));
        assert_eq!(first_pixel(0, 127, BOUNDS), (0, 0));
    }
}
