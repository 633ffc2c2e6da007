//! Joystick axis classification

/// Position of a joystick axis relative to its dead zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Deflection {
    /// Below 20% of full scale
    Low,
    /// Inside the dead zone, 20% to 80% of full scale inclusive
    Centered,
    /// Above 80% of full scale
    High,
}

impl Deflection {
    /// Classify a raw sample
    ///
    /// Thresholds are compared exactly: `5 * s > 4 * full` and `5 * s < full`.
    pub fn classify(sample: u16, full_scale: u16) -> Self {
        let scaled = u32::from(sample) * 5;
        let full = u32::from(full_scale);

        if scaled > full * 4 {
            Deflection::High
        } else if scaled < full {
            Deflection::Low
        } else {
            Deflection::Centered
        }
    }

    /// Step along the Y axis
    pub fn y_delta(self) -> i32 {
        match self {
            Deflection::High => 1,
            Deflection::Low => -1,
            Deflection::Centered => 0,
        }
    }

    /// Step along the X axis (mirrored)
    pub fn x_delta(self) -> i32 {
        -self.y_delta()
    }
}

/// Wrap a coordinate that stepped off `[0, max]` to the opposite edge
pub fn wrap(value: i32, max: i32) -> i32 {
    if value > max {
        0
    } else if value < 0 {
        max
    } else {
        value
    }
}
