//! Packed-pixel frame buffer and drawing primitives
//!
//! Two 3-bit pixels share one byte: the even column lives in bits 0-2, the
//! odd column in bits 3-5, and bits 6-7 are never displayed. Pixel `(x, y)`
//! lives in byte `(y * width + x) / 2`.

use crate::bitmap::IndexedBitmap;
use crate::color::Color;
use crate::font::{Font, GLYPH_SIZE};

/// Field holding the even pixel of a byte
const EVEN_FIELD: u8 = 0b0000_0111;

/// Field holding the odd pixel of a byte
const ODD_FIELD: u8 = 0b0011_1000;

/// Shift from the even field to the odd field
const ODD_SHIFT: u8 = 3;

/// Pack two colors into one byte (even pixel low, odd pixel high)
#[inline]
pub const fn pack(even: Color, odd: Color) -> u8 {
    (odd.bits() << ODD_SHIFT) | even.bits()
}

/// Frame buffer dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Resolution {
    pub width: u16,
    pub height: u16,
}

impl Resolution {
    /// 640x480, the only mode the scanout runs
    pub const VGA: Resolution = Resolution::new(640, 480);

    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Bytes needed to store one frame
    pub const fn bytes(self) -> usize {
        self.width as usize * self.height as usize / 2
    }

    /// Bytes per scanline
    pub const fn stride(self) -> usize {
        self.width as usize / 2
    }
}

/// Frame buffer construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Storage length does not match the resolution
    LengthMismatch { expected: usize, actual: usize },
    /// Width must be even so scanlines start on a byte boundary
    OddWidth,
}

/// Mutable view of a packed-pixel frame
///
/// The storage is borrowed so it can live in a static that the scanout DMA
/// reads at a fixed address.
pub struct FrameBuffer<'a> {
    bytes: &'a mut [u8],
    resolution: Resolution,
}

impl<'a> FrameBuffer<'a> {
    /// Wrap frame storage
    pub fn new(bytes: &'a mut [u8], resolution: Resolution) -> Result<Self, FrameError> {
        if resolution.width % 2 != 0 {
            return Err(FrameError::OddWidth);
        }
        let expected = resolution.bytes();
        if bytes.len() != expected {
            return Err(FrameError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes, resolution })
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Raw packed bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes
    }

    /// Read back one pixel, `None` outside the frame
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x >= self.resolution.width || y >= self.resolution.height {
            return None;
        }
        let byte = self.bytes[self.offset(x as usize, y as usize)];
        let bits = if x & 1 == 0 { byte } else { byte >> ODD_SHIFT };
        Some(Color::from_bits(bits))
    }

    /// Paint the whole frame one color
    pub fn clear(&mut self, color: Color) {
        self.bytes.fill(pack(color, color));
    }

    /// Fill a rectangle, clamped to the frame
    ///
    /// The rectangle is painted one byte column at a time. A leading odd
    /// column only touches the odd field of its bytes and a trailing even
    /// column only the even field, so neighbouring pixels and the unused top
    /// bits of those bytes are preserved. Whole-byte columns are overwritten.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Color) {
        let (x, y) = (x as usize, y as usize);
        let screen_width = self.resolution.width as usize;
        let screen_height = self.resolution.height as usize;

        let mut width = (width as usize).min(screen_width.saturating_sub(x));
        let height = (height as usize).min(screen_height.saturating_sub(y));
        if width == 0 || height == 0 {
            return;
        }

        let bits = color.bits();
        let mut offset = self.offset(x, y);

        if x & 1 == 1 {
            self.update_column(offset, height, |b| (b & !ODD_FIELD) | (bits << ODD_SHIFT));
            offset += 1;
            width -= 1;
        }

        let both = pack(color, color);
        while width >= 2 {
            self.update_column(offset, height, |_| both);
            offset += 1;
            width -= 2;
        }

        if width == 1 {
            self.update_column(offset, height, |b| (b & !EVEN_FIELD) | bits);
        }
    }

    /// Copy a region of artwork into the frame through a palette
    ///
    /// The artwork is addressed with the same coordinates as the frame. Each
    /// destination byte takes the palette colors of its two artwork samples.
    /// Copies `width / 2` bytes per row starting at byte `(y * W + x) / 2`.
    ///
    /// # Panics
    ///
    /// The region is not clipped. A region outside the frame or the artwork,
    /// or an artwork sample with no palette entry, panics on the index.
    pub fn copy_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        art: &IndexedBitmap<'_>,
        palette: &[Color],
    ) {
        let x0 = x as usize & !1;
        let pairs = width as usize / 2;
        let stride = self.resolution.stride();
        let mut row_offset = self.offset(x as usize, y as usize);

        for row in y as usize..y as usize + height as usize {
            let dest = &mut self.bytes[row_offset..row_offset + pairs];
            for (i, byte) in dest.iter_mut().enumerate() {
                let px = x0 + 2 * i;
                let even = palette[art.sample(px, row) as usize];
                let odd = palette[art.sample(px + 1, row) as usize];
                *byte = pack(even, odd);
            }
            row_offset += stride;
        }
    }

    /// Draw one 8x8 glyph
    ///
    /// Each font row byte is split into four 2-bit groups, written right to
    /// left from byte `offset + 3` down to `offset`; bit 1 of a group is the
    /// even pixel and bit 0 the odd pixel. Clear bits are written as black.
    ///
    /// A code missing from the font, or a cell that does not fit
    /// horizontally, draws nothing. Rows below the frame are dropped.
    pub fn draw_glyph(&mut self, x: u16, y: u16, font: &Font<'_>, code: u8, color: Color) {
        let Some(glyph) = font.glyph(code) else {
            return;
        };
        if x as usize + GLYPH_SIZE > self.resolution.width as usize {
            return;
        }

        let bits = color.bits();
        for (line, &pattern) in glyph.iter().enumerate() {
            let row = y as usize + line;
            if row >= self.resolution.height as usize {
                break;
            }
            let start = self.offset(x as usize, row);
            let mut pattern = pattern;
            for offset in (start..start + GLYPH_SIZE / 2).rev() {
                let mut pair = 0;
                if pattern & 0b10 != 0 {
                    pair = bits;
                }
                if pattern & 0b01 != 0 {
                    pair |= bits << ODD_SHIFT;
                }
                self.bytes[offset] = pair;
                pattern >>= 2;
            }
        }
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.resolution.width as usize + x) / 2
    }

    fn update_column(&mut self, offset: usize, rows: usize, f: impl Fn(u8) -> u8) {
        let stride = self.resolution.stride();
        for byte in self.bytes[offset..].iter_mut().step_by(stride).take(rows) {
            *byte = f(*byte);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const W: u16 = 16;
    const H: u16 = 6;
    const BYTES: usize = (W as usize * H as usize) / 2;

    const ART_SAMPLES: [u8; W as usize * H as usize] = {
        let mut samples = [0u8; W as usize * H as usize];
        let mut i = 0;
        while i < samples.len() {
            samples[i] = (i % 3) as u8;
            i += 1;
        }
        samples
    };

    fn decode(bytes: &[u8], x: u16, y: u16) -> Color {
        let byte = bytes[(y as usize * W as usize + x as usize) / 2];
        if x & 1 == 0 {
            Color::from_bits(byte)
        } else {
            Color::from_bits(byte >> 3)
        }
    }

    fn patterned() -> [u8; BYTES] {
        let mut bytes = [0u8; BYTES];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37) ^ 0xC5;
        }
        bytes
    }

    fn assert_fill(x: u16, y: u16, w: u16, h: u16, color: Color) {
        let before = patterned();
        let mut bytes = before;
        let mut fb = FrameBuffer::new(&mut bytes, Resolution::new(W, H)).unwrap();
        fb.fill_rect(x, y, w, h, color);

        for py in 0..H {
            for px in 0..W {
                let inside = px >= x && px < x + w && py >= y && py < y + h;
                let expected = if inside {
                    color
                } else {
                    decode(&before, px, py)
                };
                assert_eq!(fb.pixel(px, py), Some(expected), "pixel ({}, {})", px, py);
            }
        }
    }

    #[test]
    fn test_new_rejects_bad_storage() {
        let mut short = [0u8; BYTES - 1];
        assert_eq!(
            FrameBuffer::new(&mut short, Resolution::new(W, H)).err(),
            Some(FrameError::LengthMismatch {
                expected: BYTES,
                actual: BYTES - 1
            })
        );

        let mut odd = [0u8; 15];
        assert_eq!(
            FrameBuffer::new(&mut odd, Resolution::new(5, 6)).err(),
            Some(FrameError::OddWidth)
        );
    }

    #[test]
    fn test_vga_size() {
        assert_eq!(Resolution::VGA.bytes(), 153_600);
        assert_eq!(Resolution::VGA.stride(), 320);
    }

    #[test]
    fn test_fill_even_x_even_w() {
        assert_fill(2, 1, 4, 3, Color::Red);
    }

    #[test]
    fn test_fill_even_x_odd_w() {
        assert_fill(2, 1, 5, 3, Color::Green);
    }

    #[test]
    fn test_fill_odd_x_even_w() {
        assert_fill(3, 0, 6, 2, Color::Cyan);
    }

    #[test]
    fn test_fill_odd_x_odd_w() {
        assert_fill(3, 2, 5, 4, Color::White);
    }

    #[test]
    fn test_fill_single_odd_pixel_keeps_unused_bits() {
        let mut bytes = [0b1100_0101u8; BYTES];
        let mut fb = FrameBuffer::new(&mut bytes, Resolution::new(W, H)).unwrap();
        fb.fill_rect(1, 0, 1, 1, Color::Yellow);
        assert_eq!(fb.as_bytes()[0], 0b1101_1101);
        assert_eq!(fb.as_bytes()[1], 0b1100_0101);
    }

    #[test]
    fn test_fill_single_even_pixel_keeps_neighbour() {
        let mut bytes = [0b1111_1111u8; BYTES];
        let mut fb = FrameBuffer::new(&mut bytes, Resolution::new(W, H)).unwrap();
        fb.fill_rect(4, 2, 1, 1, Color::Black);
        assert_eq!(fb.as_bytes()[2 * 8 + 2], 0b1111_1000);
    }

    #[test]
    fn test_fill_whole_bytes_clear_unused_bits() {
        let mut bytes = [0xFFu8; BYTES];
        let mut fb = FrameBuffer::new(&mut bytes, Resolution::new(W, H)).unwrap();
        fb.fill_rect(0, 0, 2, 1, Color::Blue);
        assert_eq!(fb.as_bytes()[0], 0b0010_0100);
    }

    #[test]
    fn test_fill_clamps_and_ignores_offscreen() {
        assert_fill(12, 4, 100, 100, Color::Magenta);

        let before = patterned();
        let mut bytes = before;
        let mut fb = FrameBuffer::new(&mut bytes, Resolution::new(W, H)).unwrap();
        fb.fill_rect(W, 0, 4, 4, Color::White);
        fb.fill_rect(0, H, 4, 4, Color::White);
        fb.fill_rect(0, 0, 0, 4, Color::White);
        assert_eq!(fb.as_bytes(), &before[..]);
    }

    #[test]
    fn test_clear() {
        let mut bytes = [0u8; BYTES];
        let mut fb = FrameBuffer::new(&mut bytes, Resolution::new(W, H)).unwrap();
        fb.clear(Color::Blue);
        assert!(fb.as_bytes().iter().all(|&b| b == 0b0010_0100));
    }

    #[test]
    fn test_copy_rect_maps_through_palette() {
        let art = IndexedBitmap::new(W, H, &ART_SAMPLES);
        let palette = [Color::Black, Color::Blue, Color::White];
        let mut bytes = [0xFFu8; BYTES];
        let mut fb = FrameBuffer::new(&mut bytes, Resolution::new(W, H)).unwrap();
        fb.copy_rect(4, 1, 6, 2, &art, &palette);

        for py in 0..H {
            for px in 0..W {
                let inside = (4..10).contains(&px) && (1..3).contains(&py);
                let expected = if inside {
                    palette[art.sample(px as usize, py as usize) as usize]
                } else {
                    Color::White
                };
                assert_eq!(fb.pixel(px, py), Some(expected), "pixel ({}, {})", px, py);
            }
        }
    }

    #[test]
    fn test_copy_rect_odd_width_copies_whole_bytes_only() {
        let art = IndexedBitmap::new(W, H, &ART_SAMPLES);
        let palette = [Color::Red, Color::Red, Color::Red];
        let mut bytes = [0u8; BYTES];
        let mut fb = FrameBuffer::new(&mut bytes, Resolution::new(W, H)).unwrap();
        fb.copy_rect(0, 0, 3, 1, &art, &palette);
        assert_eq!(fb.pixel(1, 0), Some(Color::Red));
        assert_eq!(fb.pixel(2, 0), Some(Color::Black));
    }

    #[test]
    #[should_panic]
    fn test_copy_rect_out_of_range_panics() {
        let art = IndexedBitmap::new(W, H, &ART_SAMPLES);
        let palette = [Color::Black; 3];
        let mut bytes = [0u8; BYTES];
        let mut fb = FrameBuffer::new(&mut bytes, Resolution::new(W, H)).unwrap();
        fb.copy_rect(0, H - 1, W, 2, &art, &palette);
    }

    #[test]
    fn test_draw_glyph_bit_layout() {
        // Bits 7..0 map to pixels 0..7
        let glyphs = [[0b1000_0001, 0b0100_0010, 0, 0, 0, 0, 0, 0xFF]];
        let font = Font::new(&glyphs);
        let mut bytes = [0xFFu8; BYTES];
        let mut fb = FrameBuffer::new(&mut bytes, Resolution::new(W, H)).unwrap();
        fb.draw_glyph(8, 0, &font, 0, Color::Green);

        assert_eq!(fb.pixel(8, 0), Some(Color::Green));
        assert_eq!(fb.pixel(15, 0), Some(Color::Green));
        assert_eq!(fb.pixel(9, 0), Some(Color::Black));
        assert_eq!(fb.pixel(9, 1), Some(Color::Green));
        assert_eq!(fb.pixel(14, 1), Some(Color::Green));
        assert_eq!(fb.pixel(8, 1), Some(Color::Black));
        // Left half untouched
        assert_eq!(fb.pixel(7, 0), Some(Color::White));
        // Rows past the frame bottom are dropped
        assert_eq!(fb.pixel(8, 5), Some(Color::Black));
    }

    #[test]
    fn test_draw_glyph_skips_unknown_and_overhanging() {
        let glyphs = [[0xFF; 8]];
        let font = Font::new(&glyphs);
        let mut bytes = [0u8; BYTES];
        let mut fb = FrameBuffer::new(&mut bytes, Resolution::new(W, H)).unwrap();
        fb.draw_glyph(0, 0, &font, 1, Color::White);
        fb.draw_glyph(10, 0, &font, 0, Color::White);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    proptest! {
        #[test]
        fn prop_fill_rect_touches_only_its_pixels(
            x in 0u16..W + 2,
            y in 0u16..H + 2,
            w in 0u16..W + 4,
            h in 0u16..H + 4,
            color in 0u8..8,
        ) {
            let color = Color::from_bits(color);
            let before = patterned();
            let mut bytes = before;
            let mut fb = FrameBuffer::new(&mut bytes, Resolution::new(W, H)).unwrap();
            fb.fill_rect(x, y, w, h, color);

            for py in 0..H {
                for px in 0..W {
                    let inside = px >= x && px < x.saturating_add(w)
                        && py >= y && py < y.saturating_add(h);
                    let expected = if inside { color } else { decode(&before, px, py) };
                    prop_assert_eq!(fb.pixel(px, py), Some(expected));
                }
            }
        }
    }
}
