//! Keyboard diagram generated from layout.toml

use keyscope_core::layout::{KeyLayout, KeyShape, Rect, LAYOUT_SLOTS};
use keyscope_display::IndexedBitmap;

include!(concat!(env!("OUT_DIR"), "/key_layout.rs"));

const ARTWORK_SAMPLES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/keyboard_art.bin"));

/// Key outlines, one palette index per pixel
pub const ARTWORK: IndexedBitmap<'static> =
    IndexedBitmap::new(ARTWORK_WIDTH, ARTWORK_HEIGHT, ARTWORK_SAMPLES);

/// Scan code to key rectangles
pub static KEY_LAYOUT: KeyLayout<'static> = KeyLayout::new(&KEY_SHAPES);
