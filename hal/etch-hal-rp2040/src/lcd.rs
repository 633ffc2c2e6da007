//! ST7735s LCD driver
//!
//! 128x128 color LCD on SPI0, driven through mipidsi. Sketch colors are
//! converted to `Rgb565` here.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::Delay;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7735s;
use mipidsi::options::ColorOrder;
use mipidsi::Builder;

use etch_core::color::Color;
use etch_core::traits::{Bounds, DisplayError, PixelDisplay};

/// Panel width in pixels
pub const LCD_WIDTH: u16 = 128;

/// Panel height in pixels
pub const LCD_HEIGHT: u16 = 128;

type LcdSpi<'d> = ExclusiveDevice<Spi<'d, SPI0, Blocking>, Output<'d>, Delay>;
type LcdInterface<'d> = SpiInterface<'d, LcdSpi<'d>, Output<'d>>;
type LcdPanel<'d> = mipidsi::Display<LcdInterface<'d>, ST7735s, Output<'d>>;

/// Convert a palette color to the panel format
pub fn to_rgb565(color: Color) -> Rgb565 {
    let (r, g, b) = color.rgb();
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

/// ST7735s LCD
pub struct Lcd<'d> {
    panel: LcdPanel<'d>,
}

impl<'d> Lcd<'d> {
    /// Reset and initialize the panel
    ///
    /// `buffer` is the interface's transfer buffer and must outlive the
    /// display.
    pub fn new(
        spi: Spi<'d, SPI0, Blocking>,
        cs: Output<'d>,
        dc: Output<'d>,
        rst: Output<'d>,
        buffer: &'d mut [u8],
    ) -> Result<Self, DisplayError> {
        let device =
            ExclusiveDevice::new(spi, cs, Delay).map_err(|_| DisplayError::Communication)?;
        let interface = SpiInterface::new(device, dc, buffer);

        let panel = Builder::new(ST7735s, interface)
            .reset_pin(rst)
            .display_size(LCD_WIDTH, LCD_HEIGHT)
            .color_order(ColorOrder::Bgr)
            .init(&mut Delay)
            .map_err(|_| DisplayError::NotInitialized)?;

        Ok(Self { panel })
    }
}

impl PixelDisplay for Lcd<'_> {
    const BOUNDS: Bounds = Bounds::new(LCD_WIDTH as i32 - 1, LCD_HEIGHT as i32 - 1);

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), DisplayError> {
        if !Self::BOUNDS.contains(x, y) {
            return Ok(());
        }

        self.panel
            .set_pixel(x as u16, y as u16, to_rgb565(color))
            .map_err(|_| DisplayError::Communication)
    }

    fn clear(&mut self, color: Color) -> Result<(), DisplayError> {
        DrawTarget::clear(&mut self.panel, to_rgb565(color))
            .map_err(|_| DisplayError::Communication)
    }
}
