//! Cross-core and inter-task communication
//!
//! The decoder core never takes a lock or waits on anything: it only stores
//! into `KEY_EVENT`. Everything else runs on core 0 under the executor.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use keyscope_core::cell::EventCell;
use keyscope_core::monitor::LinkState;

/// Latest byte from the decoder core, plus its stall counter
pub static KEY_EVENT: EventCell = EventCell::new();

/// Reset line transitions (updated by the reset watch task)
pub static RESET_LINE: Signal<CriticalSectionRawMutex, LinkState> = Signal::new();
