//! Screen layouts
//!
//! The LCD is 160x80 in landscape. Text cells are 6x8 pixels scaled by
//! the text size.

use crate::traits::{Color, Panel};

/// Last rendered screen, used to skip redundant idle redraws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Background {
    /// Nothing known about the panel contents
    Unknown,
    Banner,
    Blank,
    Ready,
    Countdown,
    Rinse,
    WellDone,
}

/// Screens the device can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen<'a> {
    /// Version banner shown at startup
    Banner(&'a str),
    /// Plain black screen
    Blank,
    /// Idle "READY" prompt
    Ready,
    /// Countdown value
    Count(u8),
    /// "RINSE HANDS" prompt
    Rinse,
    /// "WELL DONE" prompt
    WellDone,
}

impl Screen<'_> {
    /// Background this screen leaves on the panel
    pub fn background(&self) -> Background {
        match self {
            Screen::Banner(_) => Background::Banner,
            Screen::Blank => Background::Blank,
            Screen::Ready => Background::Ready,
            Screen::Count(_) => Background::Countdown,
            Screen::Rinse => Background::Rinse,
            Screen::WellDone => Background::WellDone,
        }
    }

    /// Draw the screen
    pub fn render<P: Panel + ?Sized>(&self, panel: &mut P) {
        match *self {
            Screen::Banner(version) => {
                panel.fill_screen(Color::Blue);
                panel.set_cursor(0, 0);
                panel.set_text_size(2);
                panel.set_text_color(Color::White);
                panel.print(version);
            }
            Screen::Blank => panel.fill_screen(Color::Black),
            Screen::Ready => {
                panel.fill_screen(Color::Black);
                panel.set_text_color(Color::Green);
                panel.set_text_size(2);
                panel.set_cursor(48, 14);
                panel.print("READY");
            }
            Screen::Count(count) => {
                panel.fill_screen(Color::Red);
                panel.set_text_color(Color::Yellow);
                panel.set_text_size(6);
                panel.set_cursor(60, 20);
                panel.print_number(count as u32);
            }
            Screen::Rinse => two_line_prompt(panel, Color::Yellow, "RINSE", "HANDS"),
            Screen::WellDone => two_line_prompt(panel, Color::Green, "WELL", "DONE"),
        }
    }
}

/// Large black text on a coloured background, two lines
fn two_line_prompt<P: Panel + ?Sized>(panel: &mut P, background: Color, top: &str, bottom: &str) {
    panel.fill_screen(background);
    panel.set_text_color(Color::Black);
    panel.set_text_size(4);
    panel.set_cursor(28, 4);
    panel.print(top);
    panel.set_cursor(28, 44);
    panel.print(bottom);
}
