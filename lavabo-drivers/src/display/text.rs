//! Text panel on top of any RGB565 draw target
//!
//! Implements the core [`Panel`] vocabulary with a 6x8 character cell
//! scaled by the text size. Glyphs come from the embedded-graphics 5x8
//! font; each font pixel becomes a `size x size` block on the target.
//! Text wraps at the right edge of the screen.

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use lavabo_core::traits::{Color, Panel};

/// Character cell width at size 1
const CELL_WIDTH: i32 = 6;
/// Character cell height at size 1
const CELL_HEIGHT: i32 = 8;

/// Convert a palette entry to the target colour type
pub fn to_rgb565(color: Color) -> Rgb565 {
    Rgb565::from(RawU16::new(color.rgb565()))
}

/// [`Panel`] adapter over an embedded-graphics target
pub struct GraphicsPanel<D> {
    target: D,
    cursor: Point,
    size: u8,
    color: Rgb565,
    errors: u32,
}

impl<D> GraphicsPanel<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap a draw target; cursor at the origin, size 1, white text
    pub fn new(target: D) -> Self {
        Self {
            target,
            cursor: Point::zero(),
            size: 1,
            color: Rgb565::WHITE,
            errors: 0,
        }
    }

    /// Draw operations that failed since creation
    pub fn error_count(&self) -> u32 {
        self.errors
    }

    fn record<T, E>(&mut self, result: Result<T, E>) {
        if result.is_err() {
            self.errors = self.errors.saturating_add(1);
        }
    }

    fn newline(&mut self) {
        self.cursor.x = 0;
        self.cursor.y += CELL_HEIGHT * self.size as i32;
    }

    fn draw_char(&mut self, c: char) {
        let scale = self.size as i32;
        let advance = CELL_WIDTH * scale;
        let width = self.target.bounding_box().size.width as i32;
        if self.cursor.x > 0 && self.cursor.x + advance > width {
            self.newline();
        }

        let mut buf = [0u8; 4];
        let glyph = c.encode_utf8(&mut buf);
        let style = MonoTextStyle::new(&FONT_5X8, self.color);
        let mut scaled = Scaled {
            parent: &mut self.target,
            origin: self.cursor,
            scale: self.size as u32,
        };
        let result =
            Text::with_baseline(glyph, Point::zero(), style, Baseline::Top).draw(&mut scaled);
        self.record(result);

        self.cursor.x += advance;
    }
}

impl<D> Panel for GraphicsPanel<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn fill_screen(&mut self, color: Color) {
        let result = self.target.clear(to_rgb565(color));
        self.record(result);
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Point::new(x as i32, y as i32);
    }

    fn set_text_size(&mut self, size: u8) {
        self.size = size.max(1);
    }

    fn set_text_color(&mut self, color: Color) {
        self.color = to_rgb565(color);
    }

    fn print(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\n' => self.newline(),
                '\r' => {}
                c => self.draw_char(c),
            }
        }
    }
}

/// Draws every incoming pixel as a `scale x scale` block at `origin`
struct Scaled<'a, D> {
    parent: &'a mut D,
    origin: Point,
    scale: u32,
}

impl<D> OriginDimensions for Scaled<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn size(&self) -> Size {
        self.parent.bounding_box().size
    }
}

impl<D> DrawTarget for Scaled<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Color = Rgb565;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let scale = self.scale as i32;
        for Pixel(point, color) in pixels {
            let top_left = self.origin + point * scale;
            let block = Rectangle::new(top_left, Size::new_equal(self.scale));
            self.parent.fill_solid(&block, color)?;
        }
        Ok(())
    }
}
