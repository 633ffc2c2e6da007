//! Etch - joystick sketch firmware
//!
//! Main firmware binary for an RP2040 board with an analog joystick, two
//! push buttons and a 128x128 ST7735s LCD. The joystick moves a cursor that
//! leaves a trail; button 1 cycles the trail color, button 2 clears the
//! screen.
//!
//! Wiring:
//! - Joystick X: GPIO26 (ADC0), Y: GPIO27 (ADC1)
//! - Button 1 (color): GPIO14, button 2 (clear): GPIO15, both active-low
//! - LCD on SPI0: SCK GPIO18, MOSI GPIO19, CS GPIO17, DC GPIO16, RST GPIO20
//!
//! Presses are confirmed on release. A button is checked at the first tick
//! after its 10 ms settle window, so a button still held at that point
//! (roughly 35 ms after the edge at most) counts as bounce and the press is
//! dropped. Buttons act on a tap, not a hold.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use etch_core::config::SketchConfig;
use etch_core::input::Button;
use etch_hal_rp2040::{JoystickSampler, Lcd};

mod channels;
mod tasks;

/// LCD SPI clock
const LCD_SPI_HZ: u32 = 16_000_000;

/// Transfer buffer size for the LCD interface
const LCD_BUFFER_SIZE: usize = 512;

// Interface buffer must live as long as the display
static LCD_BUFFER: StaticCell<[u8; LCD_BUFFER_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Etch firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = SketchConfig::DEFAULT;
    info!(
        "Tick {}ms, settle {}ms, full scale {}",
        config.tick_interval_ms, config.settle_ms, config.full_scale
    );

    // Setup ADC for the joystick
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let sampler = JoystickSampler::new(adc, p.PIN_26, p.PIN_27, &config);

    info!("Joystick ADC initialized");

    // Setup SPI0 for the LCD (write-only)
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = LCD_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);

    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let rst = Output::new(p.PIN_20, Level::Low);

    let buffer = LCD_BUFFER.init([0u8; LCD_BUFFER_SIZE]);
    let lcd = unwrap!(Lcd::new(spi, cs, dc, rst, buffer));

    info!("LCD initialized");

    // Buttons idle high through the pull-ups
    let color_button = Input::new(p.PIN_14, Pull::Up);
    let clear_button = Input::new(p.PIN_15, Pull::Up);

    // Spawn tasks
    spawner
        .spawn(tasks::button_task(color_button, Button::ColorCycle))
        .unwrap();
    spawner
        .spawn(tasks::button_task(clear_button, Button::Clear))
        .unwrap();
    spawner
        .spawn(tasks::sketch_task(sampler, lcd, config))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
