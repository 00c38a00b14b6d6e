//! RP2040-specific HAL for the keyboard analyser
//!
//! This crate provides RP2040 implementations of the `keyscope-core`
//! traits, plus RP2040-specific functionality:
//!
//! - Keyboard lines read from a single SIO snapshot, with an open-drain
//!   style data line for the acknowledge
//! - VGA scanout: three PIO0 state machines fed by two chained DMA channels
//! - PIO timing constants and clock divider math

#![no_std]

pub mod keyboard;
pub mod pio;
pub mod scanout;

pub use keyboard::SioKeyboardLines;
pub use scanout::{FrameRegion, Scanout, VgaPins};
