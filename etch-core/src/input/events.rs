//! Button events and actions

/// Sketch buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Button 1: cycle the drawing color
    ColorCycle,
    /// Button 2: clear the screen
    Clear,
}

impl Button {
    /// Both buttons, in debouncer order
    pub const ALL: [Button; 2] = [Button::ColorCycle, Button::Clear];

    /// Slot of this button in per-button arrays
    pub const fn index(self) -> usize {
        match self {
            Button::ColorCycle => 0,
            Button::Clear => 1,
        }
    }

    /// Action performed on a confirmed press
    pub const fn action(self) -> Action {
        match self {
            Button::ColorCycle => Action::AdvanceColor,
            Button::Clear => Action::ClearScreen,
        }
    }
}

/// Result of a confirmed button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Advance to the next palette color
    AdvanceColor,
    /// Clear the display to black
    ClearScreen,
}

/// Falling edge seen on a button pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEdge {
    /// Button that produced the edge
    pub button: Button,
    /// Monotonic timestamp of the edge in milliseconds
    pub at_ms: u64,
}

impl ButtonEdge {
    pub const fn new(button: Button, at_ms: u64) -> Self {
        Self { button, at_ms }
    }
}

/// Logic level of a button pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Pin held at its active level
    Pressed,
    /// Pin back at its rest level
    Released,
}

impl Level {
    /// Level of an active-low pin
    pub const fn from_active_low(is_high: bool) -> Self {
        if is_high {
            Level::Released
        } else {
            Level::Pressed
        }
    }
}

/// Current levels of both buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLevels {
    pub color_cycle: Level,
    pub clear: Level,
}

impl ButtonLevels {
    /// Both buttons released
    pub const RELEASED: Self = Self {
        color_cycle: Level::Released,
        clear: Level::Released,
    };

    /// Level of one button
    pub const fn get(&self, button: Button) -> Level {
        match button {
            Button::ColorCycle => self.color_cycle,
            Button::Clear => self.clear,
        }
    }
}
