//! Button input
//!
//! Edge events posted by the button handlers and the debouncer that turns
//! them into confirmed presses.

pub mod debounce;
pub mod events;

pub use debounce::{DebounceState, Debouncer, Outcome};
pub use events::{Action, Button, ButtonEdge, ButtonLevels, Level};
