//! Pin assignment
//!
//! ```text
//! GPIO 0-2   VGA red, green, blue (through 330R)
//! GPIO 8     VGA hsync
//! GPIO 9     VGA vsync
//! GPIO 10    keyboard clock   (input, keyboard pull-up)
//! GPIO 11    keyboard data    (open drain: input, or driven low to acknowledge)
//! GPIO 12    keyboard reset   (held low during bring-up, then watched)
//! ```
//!
//! The keyboard lines are 5V on the connector and need level shifting.

pub const PIN_RED: u8 = 0;
pub const PIN_GREEN: u8 = 1;
pub const PIN_BLUE: u8 = 2;
pub const PIN_HSYNC: u8 = 8;
pub const PIN_VSYNC: u8 = 9;
pub const PIN_KEYBOARD_CLOCK: u8 = 10;
pub const PIN_KEYBOARD_DATA: u8 = 11;
pub const PIN_KEYBOARD_RESET: u8 = 12;
