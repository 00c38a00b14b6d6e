//! 3-bit RGB colors

/// One of the eight colors a 3-bit RGB DAC can show
///
/// Bit 0 drives red, bit 1 green and bit 2 blue, matching the order of the
/// RGB output pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl Color {
    /// All colors in bit order
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// The 3-bit field value
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Build a color from a field value; bits above bit 2 are ignored
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0b111) as usize]
    }
}
