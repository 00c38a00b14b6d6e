//! Key positions on the keyboard artwork
//!
//! The firmware generates a table of shapes indexed by scan code at build
//! time. Most keys are one rectangle; the L-shaped Return key adds a tail.

use keyscope_protocol::ScanCode;

/// Entries in a scan-code-indexed table (7-bit codes)
pub const LAYOUT_SLOTS: usize = 128;

/// Pixel rectangle on the artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the right edge
    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    /// One past the bottom edge
    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }
}

/// Area covered by one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyShape {
    pub primary: Rect,
    /// Extra rectangle for keys that are not rectangular
    pub tail: Option<Rect>,
}

impl KeyShape {
    pub const fn rect(primary: Rect) -> Self {
        Self {
            primary,
            tail: None,
        }
    }

    pub const fn with_tail(primary: Rect, tail: Rect) -> Self {
        Self {
            primary,
            tail: Some(tail),
        }
    }

    /// Every rectangle of the shape, primary first
    pub fn rects(&self) -> impl Iterator<Item = Rect> {
        core::iter::once(self.primary).chain(self.tail)
    }
}

/// Scan-code-indexed key shapes
#[derive(Debug, Clone, Copy)]
pub struct KeyLayout<'a> {
    shapes: &'a [Option<KeyShape>],
}

impl<'a> KeyLayout<'a> {
    pub const fn new(shapes: &'a [Option<KeyShape>]) -> Self {
        Self { shapes }
    }

    /// Shape of a key, `None` for codes with no key on this keyboard
    pub fn shape(&self, code: ScanCode) -> Option<&'a KeyShape> {
        self.shapes.get(code.index()).and_then(Option::as_ref)
    }

    /// Number of keys with a shape
    pub fn key_count(&self) -> usize {
        self.shapes.iter().filter(|s| s.is_some()).count()
    }
}
