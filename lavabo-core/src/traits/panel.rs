//! Text panel trait for the colour LCD
//!
//! Mirrors the small drawing vocabulary the wash screens need: fill the
//! background, place a cursor, pick a text size and colour, print.
//! Panel operations are assumed to always succeed.

use core::fmt::Write;

use heapless::String;

/// Fixed display palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    Blue,
    Red,
    Yellow,
    Green,
    White,
}

impl Color {
    /// RGB565 encoding of the palette entry
    pub const fn rgb565(self) -> u16 {
        match self {
            Color::Black => 0x0000,
            Color::Blue => 0x001F,
            Color::Red => 0xF800,
            Color::Yellow => 0xFFE0,
            Color::Green => 0x07E0,
            Color::White => 0xFFFF,
        }
    }
}

/// Trait for text-oriented display output
pub trait Panel {
    /// Fill the whole screen with one colour
    fn fill_screen(&mut self, color: Color);

    /// Move the text cursor (pixels, top-left origin)
    fn set_cursor(&mut self, x: u16, y: u16);

    /// Set the text scale factor (1 = 6x8 pixel cells)
    fn set_text_size(&mut self, size: u8);

    /// Set the text foreground colour
    fn set_text_color(&mut self, color: Color);

    /// Print text at the cursor, advancing it
    fn print(&mut self, text: &str);

    /// Print an unsigned integer in decimal
    fn print_number(&mut self, value: u32) {
        let mut buf: String<10> = String::new();
        // u32::MAX is 10 digits, always fits
        let _ = write!(buf, "{}", value);
        self.print(&buf);
    }
}

impl<T: Panel + ?Sized> Panel for &mut T {
    fn fill_screen(&mut self, color: Color) {
        (**self).fill_screen(color)
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        (**self).set_cursor(x, y)
    }

    fn set_text_size(&mut self, size: u8) {
        (**self).set_text_size(size)
    }

    fn set_text_color(&mut self, color: Color) {
        (**self).set_text_color(color)
    }

    fn print(&mut self, text: &str) {
        (**self).print(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPanel;

    #[test]
    fn test_print_number() {
        let mut panel = MockPanel::new();
        panel.print_number(20);
        panel.print_number(u32::MAX);
        assert_eq!(panel.printed(), ["20", "4294967295"]);
    }

    #[test]
    fn test_palette() {
        assert_eq!(Color::Black.rgb565(), 0);
        assert_eq!(Color::White.rgb565(), 0xFFFF);
        assert_eq!(Color::Red.rgb565(), 0xF800);
    }
}
