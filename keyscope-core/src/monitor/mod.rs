//! Screen-side event handling
//!
//! `KeyMonitor` turns the values polled from the event cell into
//! observations, keeping the status histogram as it goes. `Renderer` draws
//! those observations onto a `Canvas`.

pub mod histogram;
pub mod renderer;
pub mod tracker;

pub use histogram::StatusHistogram;
pub use renderer::{LinkState, Renderer, KEYBOARD_HEIGHT, KEYBOARD_WIDTH};
pub use tracker::{KeyMonitor, Observation};
