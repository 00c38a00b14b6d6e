//! Keyboard lines on RP2040 GPIO
//!
//! Both lines are read from one SIO input register read so clock and data
//! always come from the same instant. The data line is a `Flex` pin with
//! its output latch held low: switching it to output pulls the line low,
//! switching back to input releases it to the keyboard's pull-up.

use embassy_rp::gpio::{Flex, Input, Pin, Pull};
use embassy_rp::{pac, Peri};

use keyscope_core::traits::{KeyboardLines, LineLevels};

/// Clock and data lines of the keyboard connector
pub struct SioKeyboardLines<'d> {
    clock_mask: u32,
    data_mask: u32,
    // Held to keep the pins configured as inputs
    _clock: Input<'d>,
    data: Flex<'d>,
}

impl<'d> SioKeyboardLines<'d> {
    /// Claim the clock and data pins
    ///
    /// Both pins must be in bank 0. The keyboard provides the pull-ups.
    pub fn new<CLK: Pin, DAT: Pin>(clock: Peri<'d, CLK>, data: Peri<'d, DAT>) -> Self {
        let clock_mask = 1 << clock.pin();
        let data_mask = 1 << data.pin();

        let clock = Input::new(clock, Pull::None);

        let mut data = Flex::new(data);
        data.set_pull(Pull::None);
        data.set_low();
        data.set_as_input();

        Self {
            clock_mask,
            data_mask,
            _clock: clock,
            data,
        }
    }
}

impl KeyboardLines for SioKeyboardLines<'_> {
    #[inline(always)]
    fn sample(&self) -> LineLevels {
        let levels = pac::SIO.gpio_in(0).read();
        LineLevels {
            clock: levels & self.clock_mask != 0,
            data: levels & self.data_mask != 0,
        }
    }

    fn drive_data_low(&mut self) {
        self.data.set_as_output();
    }

    fn release_data(&mut self) {
        self.data.set_as_input();
    }
}
