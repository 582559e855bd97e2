//! ST7735 colour LCD driver
//!
//! Driver for the 80x160 ST7735S panels found on small wash-station
//! boards, used in landscape (160x80). Pixels are RGB565 over SPI with a
//! separate data/command line.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// ST7735 commands
#[allow(dead_code)]
mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVOFF: u8 = 0x20;
    pub const INVON: u8 = 0x21;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

/// MADCTL bits
mod madctl {
    pub const MY: u8 = 0x80;
    pub const MV: u8 = 0x20;
    pub const BGR: u8 = 0x08;
}

/// Pixels pushed per SPI write when filling
const FILL_CHUNK_PIXELS: usize = 32;

/// Errors from the LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum St7735Error {
    /// SPI transfer failed
    Spi,
    /// Control pin could not be driven
    Pin,
}

/// Panel geometry after rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Visible width in pixels
    pub width: u16,
    /// Visible height in pixels
    pub height: u16,
    /// Column offset of the visible area in controller RAM
    pub x_offset: u16,
    /// Row offset of the visible area in controller RAM
    pub y_offset: u16,
    /// MADCTL value (rotation and colour order)
    pub madctl: u8,
    /// Panel needs colour inversion
    pub inverted: bool,
}

impl Geometry {
    /// 0.96" 80x160 panel, landscape with the buttons on the right
    pub const LANDSCAPE_80X160: Self = Self {
        width: 160,
        height: 80,
        x_offset: 1,
        y_offset: 26,
        madctl: madctl::MY | madctl::MV | madctl::BGR,
        inverted: true,
    };
}

impl Default for Geometry {
    fn default() -> Self {
        Self::LANDSCAPE_80X160
    }
}

/// ST7735 driver
pub struct St7735<SPI, DC, CS> {
    spi: SPI,
    dc: DC,
    cs: CS,
    geometry: Geometry,
}

impl<SPI, DC, CS> St7735<SPI, DC, CS>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin,
{
    /// Create a new driver; call [`St7735::init`] before drawing
    pub fn new(spi: SPI, dc: DC, cs: CS, geometry: Geometry) -> Self {
        Self {
            spi,
            dc,
            cs,
            geometry,
        }
    }

    /// Reset and configure the panel
    ///
    /// `rst` is pulsed low when given; otherwise a software reset is used.
    pub fn init<RST, D>(
        &mut self,
        rst: Option<&mut RST>,
        delay: &mut D,
    ) -> Result<(), St7735Error>
    where
        RST: OutputPin,
        D: DelayNs,
    {
        self.cs.set_high().map_err(|_| St7735Error::Pin)?;

        if let Some(rst) = rst {
            rst.set_high().map_err(|_| St7735Error::Pin)?;
            delay.delay_ms(1);
            rst.set_low().map_err(|_| St7735Error::Pin)?;
            delay.delay_ms(10);
            rst.set_high().map_err(|_| St7735Error::Pin)?;
            delay.delay_ms(120);
        }

        self.command(cmd::SWRESET, &[])?;
        delay.delay_ms(150);
        self.command(cmd::SLPOUT, &[])?;
        delay.delay_ms(255);

        // 16-bit colour
        self.command(cmd::COLMOD, &[0x05])?;
        self.command(cmd::MADCTL, &[self.geometry.madctl])?;
        let inversion = if self.geometry.inverted {
            cmd::INVON
        } else {
            cmd::INVOFF
        };
        self.command(inversion, &[])?;

        self.command(cmd::NORON, &[])?;
        delay.delay_ms(10);
        self.command(cmd::DISPON, &[])?;
        delay.delay_ms(100);

        Ok(())
    }

    /// Send a command byte followed by optional parameters
    fn command(&mut self, command: u8, params: &[u8]) -> Result<(), St7735Error> {
        self.cs.set_low().map_err(|_| St7735Error::Pin)?;
        let result = self.command_selected(command, params);
        self.cs.set_high().map_err(|_| St7735Error::Pin)?;
        result
    }

    fn command_selected(&mut self, command: u8, params: &[u8]) -> Result<(), St7735Error> {
        self.dc.set_low().map_err(|_| St7735Error::Pin)?;
        self.spi.write(&[command]).map_err(|_| St7735Error::Spi)?;
        if !params.is_empty() {
            self.dc.set_high().map_err(|_| St7735Error::Pin)?;
            self.spi.write(params).map_err(|_| St7735Error::Spi)?;
        }
        self.spi.flush().map_err(|_| St7735Error::Spi)
    }

    /// Set the RAM window (inclusive corners, visible coordinates)
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), St7735Error> {
        let (ox, oy) = (self.geometry.x_offset, self.geometry.y_offset);
        let [xs_hi, xs_lo] = (x0 + ox).to_be_bytes();
        let [xe_hi, xe_lo] = (x1 + ox).to_be_bytes();
        let [ys_hi, ys_lo] = (y0 + oy).to_be_bytes();
        let [ye_hi, ye_lo] = (y1 + oy).to_be_bytes();
        self.command(cmd::CASET, &[xs_hi, xs_lo, xe_hi, xe_lo])?;
        self.command(cmd::RASET, &[ys_hi, ys_lo, ye_hi, ye_lo])
    }

    /// Fill the current window with `count` pixels of one colour
    fn write_repeated(&mut self, color: Rgb565, count: u32) -> Result<(), St7735Error> {
        self.cs.set_low().map_err(|_| St7735Error::Pin)?;
        let result = self.write_repeated_selected(color, count);
        self.cs.set_high().map_err(|_| St7735Error::Pin)?;
        result
    }

    fn write_repeated_selected(&mut self, color: Rgb565, count: u32) -> Result<(), St7735Error> {
        let [hi, lo] = color.into_storage().to_be_bytes();
        let mut chunk = [0u8; FILL_CHUNK_PIXELS * 2];
        for pair in chunk.chunks_exact_mut(2) {
            pair[0] = hi;
            pair[1] = lo;
        }

        self.dc.set_low().map_err(|_| St7735Error::Pin)?;
        self.spi.write(&[cmd::RAMWR]).map_err(|_| St7735Error::Spi)?;
        self.dc.set_high().map_err(|_| St7735Error::Pin)?;

        let mut remaining = count as usize;
        while remaining > 0 {
            let n = remaining.min(FILL_CHUNK_PIXELS);
            self.spi.write(&chunk[..n * 2]).map_err(|_| St7735Error::Spi)?;
            remaining -= n;
        }
        self.spi.flush().map_err(|_| St7735Error::Spi)
    }

    /// Clip a rectangle to the visible area as inclusive corners
    fn clip(&self, area: &Rectangle) -> Option<(u16, u16, u16, u16)> {
        let visible = self.bounding_box().intersection(area);
        let bottom_right = visible.bottom_right()?;
        Some((
            visible.top_left.x as u16,
            visible.top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
        ))
    }
}

impl<SPI, DC, CS> OriginDimensions for St7735<SPI, DC, CS> {
    fn size(&self) -> Size {
        Size::new(self.geometry.width as u32, self.geometry.height as u32)
    }
}

impl<SPI, DC, CS> DrawTarget for St7735<SPI, DC, CS>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin,
{
    type Color = Rgb565;
    type Error = St7735Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if !bounds.contains(point) {
                continue;
            }
            let (x, y) = (point.x as u16, point.y as u16);
            self.set_window(x, y, x, y)?;
            self.write_repeated(color, 1)?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let Some((x0, y0, x1, y1)) = self.clip(area) else {
            return Ok(());
        };
        self.set_window(x0, y0, x1, y1)?;
        let count = (x1 - x0 + 1) as u32 * (y1 - y0 + 1) as u32;
        self.write_repeated(color, count)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_solid(&self.bounding_box(), color)
    }
}
