//! Text on an 8x8 character grid

use crate::color::Color;
use crate::font::Font;
use crate::framebuffer::FrameBuffer;

/// Character cell size in pixels
pub const CELL_SIZE: u16 = 8;

/// Codes at or above this are shifted down into the lower glyph bank
pub const LOWERCASE_BANK_OFFSET: u8 = 0x60;

impl FrameBuffer<'_> {
    /// Grid size in character cells, `(cols, rows)`
    pub fn text_grid(&self) -> (u16, u16) {
        let res = self.resolution();
        (res.width / CELL_SIZE, res.height / CELL_SIZE)
    }

    /// Draw a string starting at character cell `(col, row)`
    ///
    /// The last column and row of the grid are a margin. A character that
    /// would land in the last column wraps to column 1 of the next row, and
    /// drawing stops once the cursor reaches the last row.
    pub fn draw_text(&mut self, col: u16, row: u16, text: &str, font: &Font<'_>, color: Color) {
        let (cols, rows) = self.text_grid();
        let (mut col, mut row) = (col, row);

        for mut code in text.bytes() {
            if col >= cols.saturating_sub(1) {
                col = 1;
                row = row.saturating_add(1);
            }
            if row >= rows.saturating_sub(1) {
                return;
            }
            if code >= LOWERCASE_BANK_OFFSET {
                code -= LOWERCASE_BANK_OFFSET;
            }
            self.draw_glyph(col * CELL_SIZE, row * CELL_SIZE, font, code, color);
            col += 1;
        }
    }
}
