//! Button edge tasks
//!
//! One instance per button. Each task owns its pin, posts every falling
//! edge to the sketch task and mirrors the pin level so the sketch task
//! can confirm the press once the settle time has passed. No debouncing
//! happens here.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use etch_core::input::{Button, ButtonEdge};

use crate::channels::{store_level, EDGE_CHANNEL};

/// Button task - reports falling edges of an active-low button
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut pin: Input<'static>, button: Button) {
    info!("Button task started: {:?}", button);

    store_level(button, pin.is_high());

    loop {
        pin.wait_for_falling_edge().await;
        let edge = ButtonEdge::new(button, Instant::now().as_millis());
        store_level(button, false);

        trace!("Falling edge: {:?}", edge);
        if EDGE_CHANNEL.try_send(edge).is_err() {
            warn!("Edge channel full, dropping {:?} edge", button);
        }

        pin.wait_for_high().await;
        store_level(button, true);
    }
}
