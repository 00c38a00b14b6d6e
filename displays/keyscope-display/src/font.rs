//! 8x8 bitmap font

/// Glyph width and height in pixels
pub const GLYPH_SIZE: usize = 8;

/// A bank of 8x8 glyphs indexed by character code
///
/// Each glyph is eight row bytes, top row first, with bit 7 the leftmost
/// pixel.
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    glyphs: &'a [[u8; GLYPH_SIZE]],
}

impl<'a> Font<'a> {
    pub const fn new(glyphs: &'a [[u8; GLYPH_SIZE]]) -> Self {
        Self { glyphs }
    }

    /// Glyph for a code, if the bank has one
    pub fn glyph(&self, code: u8) -> Option<&'a [u8; GLYPH_SIZE]> {
        self.glyphs.get(code as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_lookup() {
        let glyphs = [[0u8; 8], [0xFF; 8]];
        let font = Font::new(&glyphs);
        assert_eq!(font.glyph(0), Some(&[0u8; 8]));
        assert_eq!(font.glyph(1), Some(&[0xFF; 8]));
        assert!(font.glyph(2).is_none());
    }
}
