//! Embassy async tasks, plus the decoder core entry point
//!
//! Each task runs independently and communicates via channels/signals.

pub mod decoder;
pub mod monitor;
pub mod reset_watch;

pub use decoder::decoder_core;
pub use monitor::monitor_task;
pub use reset_watch::reset_watch_task;
