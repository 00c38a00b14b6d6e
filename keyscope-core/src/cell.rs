//! Latest-value cell shared between the decoder and the screen
//!
//! The decoder core stores every completed byte; the screen core polls and
//! compares against the value it saw last. There is no queue: a byte that is
//! overwritten before the screen looks is lost. Relaxed ordering is enough
//! because the cell carries no other data with it.

use portable_atomic::{AtomicU32, AtomicU8, Ordering};

use keyscope_protocol::RAW_STARTUP_SENTINEL;

/// Single-writer, single-reader event word plus a stall counter
pub struct EventCell {
    raw: AtomicU8,
    stalls: AtomicU32,
}

impl Default for EventCell {
    fn default() -> Self {
        Self::new()
    }
}

impl EventCell {
    /// A cell holding the startup sentinel, usable in a `static`
    pub const fn new() -> Self {
        Self {
            raw: AtomicU8::new(RAW_STARTUP_SENTINEL),
            stalls: AtomicU32::new(0),
        }
    }

    /// Store a decoded byte (decoder side)
    #[inline]
    pub fn publish(&self, raw: u8) {
        self.raw.store(raw, Ordering::Relaxed);
    }

    /// Latest decoded byte (screen side)
    #[inline]
    pub fn load(&self) -> u8 {
        self.raw.load(Ordering::Relaxed)
    }

    /// Count a link stall (decoder side)
    pub fn record_stall(&self) {
        self.stalls.fetch_add(1, Ordering::Relaxed);
    }

    /// Stalls seen since boot
    pub fn stalls(&self) -> u32 {
        self.stalls.load(Ordering::Relaxed)
    }
}
