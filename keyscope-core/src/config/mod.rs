//! Configuration types
//!
//! Compile-time defaults for the decoder and the screen. Nothing is
//! persisted; the firmware builds a `KeyscopeConfig` at startup.

pub mod types;

pub use types::*;
