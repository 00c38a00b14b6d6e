//! Drawing surface trait
//!
//! Screen logic draws through `Canvas` so it can run against a recording
//! mock on the host and against the real frame buffer on the device.

use crate::color::Color;

/// The drawing operations the keyboard visualisation needs
///
/// Pixel coordinates for rectangles, character cells for text.
pub trait Canvas {
    /// Fill a rectangle with one color, clamped to the surface
    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Color);

    /// Copy a region of the keyboard artwork through a palette
    ///
    /// `palette[i]` is the color for artwork index `i`.
    fn copy_rect(&mut self, x: u16, y: u16, width: u16, height: u16, palette: &[Color]);

    /// Draw text starting at character cell `(col, row)`
    fn draw_text(&mut self, col: u16, row: u16, text: &str, color: Color);

    /// Surface size in pixels, `(width, height)`
    fn dimensions(&self) -> (u16, u16);
}
