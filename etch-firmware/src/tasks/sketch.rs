//! Sketch loop task
//!
//! Sole owner of the sketch state, the joystick and the LCD. Edges from the
//! button tasks are fed to the debouncers as they arrive; everything else
//! happens once per tick.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Instant, Ticker};

use etch_core::color::Color;
use etch_core::config::SketchConfig;
use etch_core::input::Action;
use etch_core::traits::PixelDisplay;
use etch_core::Sketch;
use etch_hal_rp2040::{JoystickSampler, Lcd};

use crate::channels::{button_levels, EDGE_CHANNEL};

/// Sketch task - main drawing loop
#[embassy_executor::task]
pub async fn sketch_task(
    mut sampler: JoystickSampler<'static>,
    mut lcd: Lcd<'static>,
    config: SketchConfig,
) {
    info!("Sketch task started");

    let mut sketch = Sketch::new(config);

    // Panel RAM is undefined after reset
    if let Err(e) = lcd.clear(Color::Black) {
        warn!("Initial clear failed: {:?}", e);
    }

    if let Err(e) = sketch.start(&mut sampler, &mut lcd) {
        warn!("First pixel failed: {:?}", e);
    }
    info!("Cursor starts at {:?}", sketch.cursor());

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(
        sketch.config().tick_interval_ms,
    )));

    loop {
        match select(ticker.next(), EDGE_CHANNEL.receive()).await {
            Either::First(()) => {
                let now_ms = Instant::now().as_millis();

                for action in sketch.poll_buttons(now_ms, button_levels()) {
                    if let Err(e) = sketch.apply(action, &mut lcd) {
                        warn!("{:?} failed: {:?}", action, e);
                        continue;
                    }
                    match action {
                        Action::AdvanceColor => info!(
                            "Color {} ({:?})",
                            sketch.color_index(),
                            sketch.color()
                        ),
                        Action::ClearScreen => info!("Screen cleared"),
                    }
                }

                if let Err(e) = sketch.tick(&mut sampler, &mut lcd) {
                    warn!("Draw failed: {:?}", e);
                }
                trace!("Cursor {:?}", sketch.cursor());
            }

            Either::Second(edge) => {
                if sketch.on_edge(edge) {
                    debug!("Settling {:?}", edge.button);
                } else {
                    trace!("{:?} already settling", edge.button);
                }
            }
        }
    }
}
