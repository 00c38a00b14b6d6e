//! Packed-pixel frame buffer and drawing primitives for Keyscope
//!
//! This crate provides:
//! - `FrameBuffer` over a 3-bit, two-pixels-per-byte scanout buffer
//! - The minimal drawing primitives the keyboard visualisation needs:
//!   rectangle fill, palette-mapped artwork copy, glyph and text rendering
//! - `Canvas` trait so screen logic can be tested without a frame buffer
//!
//! # Architecture
//!
//! The frame buffer is read continuously by the scanout DMA while these
//! primitives write to it. Nothing here locks or double-buffers: a read that
//! races a write shows a partly drawn frame for one refresh, which is accepted.
//!
//! ```text
//! byte n:  ┌──┬──┬─────────┬─────────┐
//!          │ 7│ 6│  5 4 3  │  2 1 0  │
//!          │ unused │ x odd   │ x even  │
//!          └──┴──┴─────────┴─────────┘
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod bitmap;
pub mod color;
pub mod font;
pub mod framebuffer;
pub mod screen;
pub mod text;

// Re-export key types
pub use backend::Canvas;
pub use bitmap::IndexedBitmap;
pub use color::Color;
pub use font::{Font, GLYPH_SIZE};
pub use framebuffer::{FrameBuffer, FrameError, Resolution};
pub use screen::Screen;
pub use text::{CELL_SIZE, LOWERCASE_BANK_OFFSET};
