//! Amiga 500 Keyboard Wire Codes
//!
//! This crate defines what the bytes clocked out of an Amiga 500 keyboard
//! mean once the decoder has assembled them. It knows nothing about GPIO
//! or timing; that lives in `keyscope-core`.
//!
//! # Byte Layout
//!
//! The keyboard transmits bits in the order 6-5-4-3-2-1-0-7, so the byte the
//! decoder assembles MSB-first is the key code rotated left by one:
//! ```text
//! ┌───┬───┬───┬───┬───┬───┬───┬─────────┐
//! │ 7 │ 6 │ 5 │ 4 │ 3 │ 2 │ 1 │    0    │
//! ├───┴───┴───┴───┴───┴───┴───┼─────────┤
//! │        key code           │ up/down │
//! └───────────────────────────┴─────────┘
//! ```
//!
//! Raw bytes at or above `0xF9` carry controller status codes instead of keys,
//! and `0xFF` is what the line looks like while the keyboard is only clocking
//! out handshake bits.

#![no_std]
#![deny(unsafe_code)]

pub mod codes;
pub mod events;

pub use codes::{KeyState, ScanCode, StatusCode, STATUS_CODE_COUNT};
pub use events::{KeyEvent, RAW_IDLE, RAW_STARTUP_SENTINEL, RAW_STATUS_THRESHOLD};
