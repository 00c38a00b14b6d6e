//! Core 1 entry point
//!
//! The decoder busy-waits on the keyboard clock. Clock pulses are around
//! 20us wide, so nothing else may run on this core and no interrupt may
//! steal cycles from it.

use embassy_time::Delay;
use keyscope_core::decoder::Decoder;
use keyscope_hal_rp2040::SioKeyboardLines;

use crate::channels::KEY_EVENT;

/// Decoder type running on core 1
pub type KeyboardDecoder = Decoder<SioKeyboardLines<'static>, Delay>;

/// Take over the calling core and decode forever
pub fn decoder_core(decoder: KeyboardDecoder) -> ! {
    cortex_m::interrupt::disable();
    decoder.run(&KEY_EVENT)
}
