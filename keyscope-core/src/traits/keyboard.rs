//! Keyboard line trait
//!
//! The keyboard talks over two open-collector lines: a clock it drives and a
//! data line shared by both ends. The host only ever pulls data low to
//! acknowledge a byte, so the abstraction is a snapshot read plus the two
//! data-line directions.

/// Both line levels taken from a single port read
///
/// `true` means the line is high. Data is active-low: a high level is a 0 bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineLevels {
    pub clock: bool,
    pub data: bool,
}

impl LineLevels {
    /// Bit value carried by the data line
    pub const fn data_bit(self) -> u8 {
        if self.data {
            0
        } else {
            1
        }
    }
}

/// Trait for the keyboard clock and data lines
///
/// `sample` must read both lines at the same instant so that a bit sampled
/// with the clock low really belongs to that clock phase.
pub trait KeyboardLines {
    /// Read clock and data together
    fn sample(&self) -> LineLevels;

    /// Drive the data line low (start of an acknowledge)
    fn drive_data_low(&mut self);

    /// Stop driving the data line and go back to listening
    fn release_data(&mut self);
}
