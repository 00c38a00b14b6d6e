//! Indexed artwork
//!
//! Artwork stores one palette index per pixel instead of a color, so the
//! same image can be copied into the frame with different palettes (a key
//! drawn idle, pressed or released).

/// One palette index per pixel, row-major
#[derive(Debug, Clone, Copy)]
pub struct IndexedBitmap<'a> {
    width: u16,
    height: u16,
    samples: &'a [u8],
}

impl<'a> IndexedBitmap<'a> {
    /// Wrap sample data
    ///
    /// # Panics
    ///
    /// If `samples` does not hold exactly `width * height` entries. In a
    /// const context this is a compile error.
    pub const fn new(width: u16, height: u16, samples: &'a [u8]) -> Self {
        assert!(samples.len() == width as usize * height as usize);
        Self {
            width,
            height,
            samples,
        }
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Palette index at `(x, y)`
    ///
    /// Panics outside the bitmap.
    #[inline]
    pub fn sample(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width as usize, "sample x out of range");
        self.samples[y * self.width as usize + x]
    }

    /// Largest index used, so callers can check a palette covers the artwork
    pub fn max_index(&self) -> u8 {
        self.samples.iter().copied().max().unwrap_or(0)
    }
}
