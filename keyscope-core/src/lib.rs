//! Board-agnostic core logic for the keyboard analyser
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Keyboard line abstraction trait
//! - Protocol decoder state machine (runs on the dedicated core)
//! - Shared event cell between the decoder and the screen
//! - Key layout types
//! - Event monitor, status histogram and screen renderer
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod cell;
pub mod config;
pub mod decoder;
pub mod layout;
pub mod monitor;
pub mod traits;
