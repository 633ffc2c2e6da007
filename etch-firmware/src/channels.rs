//! Inter-task communication
//!
//! Button tasks are the only producers; the sketch task is the only
//! consumer.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use portable_atomic::{AtomicBool, Ordering};

use etch_core::input::{Button, ButtonEdge, ButtonLevels, Level};

/// Channel capacity for button edges
const EDGE_CHANNEL_SIZE: usize = 8;

/// Falling edges from the button tasks, stamped with the edge time
pub static EDGE_CHANNEL: Channel<CriticalSectionRawMutex, ButtonEdge, EDGE_CHANNEL_SIZE> =
    Channel::new();

/// Mirrored pin level of the color button (true = high = released)
static COLOR_BUTTON_HIGH: AtomicBool = AtomicBool::new(true);

/// Mirrored pin level of the clear button (true = high = released)
static CLEAR_BUTTON_HIGH: AtomicBool = AtomicBool::new(true);

fn mirror(button: Button) -> &'static AtomicBool {
    match button {
        Button::ColorCycle => &COLOR_BUTTON_HIGH,
        Button::Clear => &CLEAR_BUTTON_HIGH,
    }
}

/// Publish the current pin level of a button
pub fn store_level(button: Button, is_high: bool) {
    mirror(button).store(is_high, Ordering::Release);
}

/// Last published levels of both buttons
pub fn button_levels() -> ButtonLevels {
    let level = |button| Level::from_active_low(mirror(button).load(Ordering::Acquire));
    ButtonLevels {
        color_cycle: level(Button::ColorCycle),
        clear: level(Button::Clear),
    }
}
