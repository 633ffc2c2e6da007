//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod buttons;
pub mod sketch;

pub use buttons::button_task;
pub use sketch::sketch_task;
