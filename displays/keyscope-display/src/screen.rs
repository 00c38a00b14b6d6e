//! Frame buffer bundled with its artwork and font

use crate::backend::Canvas;
use crate::bitmap::IndexedBitmap;
use crate::color::Color;
use crate::font::Font;
use crate::framebuffer::FrameBuffer;

/// The device-side `Canvas`
///
/// Copies read from `artwork`, which is aligned with the top-left corner of
/// the frame. Text is drawn with `font`.
pub struct Screen<'a> {
    frame: FrameBuffer<'a>,
    artwork: IndexedBitmap<'a>,
    font: Font<'a>,
}

impl<'a> Screen<'a> {
    pub fn new(frame: FrameBuffer<'a>, artwork: IndexedBitmap<'a>, font: Font<'a>) -> Self {
        Self {
            frame,
            artwork,
            font,
        }
    }

    pub fn frame(&self) -> &FrameBuffer<'a> {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer<'a> {
        &mut self.frame
    }
}

impl Canvas for Screen<'_> {
    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Color) {
        self.frame.fill_rect(x, y, width, height, color);
    }

    fn copy_rect(&mut self, x: u16, y: u16, width: u16, height: u16, palette: &[Color]) {
        self.frame
            .copy_rect(x, y, width, height, &self.artwork, palette);
    }

    fn draw_text(&mut self, col: u16, row: u16, text: &str, color: Color) {
        self.frame.draw_text(col, row, text, &self.font, color);
    }

    fn dimensions(&self) -> (u16, u16) {
        let res = self.frame.resolution();
        (res.width, res.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Resolution;

    const W: u16 = 32;
    const H: u16 = 16;
    const BYTES: usize = (W as usize * H as usize) / 2;
    const ART: [u8; W as usize * 8] = [1; W as usize * 8];

    #[test]
    fn test_screen_delegates() {
        let glyphs = [[0xFFu8; 8]; 0x60];
        let mut bytes = [0u8; BYTES];
        let frame = FrameBuffer::new(&mut bytes, Resolution::new(W, H)).unwrap();
        let mut screen = Screen::new(
            frame,
            IndexedBitmap::new(W, 8, &ART),
            Font::new(&glyphs),
        );
        assert_eq!(screen.dimensions(), (W, H));

        screen.copy_rect(0, 0, 4, 2, &[Color::Black, Color::Blue]);
        assert_eq!(screen.frame().pixel(3, 1), Some(Color::Blue));

        screen.fill_rect(0, 0, 1, 1, Color::Red);
        assert_eq!(screen.frame().pixel(0, 0), Some(Color::Red));
        assert_eq!(screen.frame().pixel(1, 0), Some(Color::Blue));

        screen.draw_text(1, 0, "X", Color::Green);
        assert_eq!(screen.frame().pixel(8, 0), Some(Color::Green));
        assert_eq!(screen.frame().pixel(15, 7), Some(Color::Green));
    }
}
