//! Change detection on the event cell

use keyscope_protocol::{KeyEvent, KeyState, ScanCode, StatusCode, RAW_STARTUP_SENTINEL};

use super::histogram::StatusHistogram;

/// What one poll of the event cell amounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Observation {
    /// Same value as last time
    Unchanged,
    /// New value that needs no drawing (idle noise, or a release before
    /// any press)
    Ignored,
    /// A key to redraw
    Key { code: ScanCode, state: KeyState },
    /// A status code was counted
    Status(StatusCode),
}

/// Screen-side view of the keyboard stream
///
/// Detects changes by comparing against the last value seen. A byte that
/// repeats is therefore only seen once, which matches the keyboard: it never
/// sends the same transition twice in a row.
#[derive(Debug, Clone)]
pub struct KeyMonitor {
    last_raw: u8,
    seen_press: bool,
    histogram: StatusHistogram,
}

impl Default for KeyMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyMonitor {
    pub const fn new() -> Self {
        Self {
            last_raw: RAW_STARTUP_SENTINEL,
            seen_press: false,
            histogram: StatusHistogram::new(),
        }
    }

    /// Process the current cell value
    pub fn observe(&mut self, raw: u8) -> Observation {
        if raw == self.last_raw {
            return Observation::Unchanged;
        }
        self.last_raw = raw;

        // Releases are only trusted once a press has been seen, so keys held
        // across a reset don't light up on their own
        if raw & 1 == 0 {
            self.seen_press = true;
        }

        match KeyEvent::from_raw(raw) {
            KeyEvent::Key { code, state } if self.seen_press => {
                if code.is_reset_warning() {
                    self.histogram.record(StatusCode::ResetWarning);
                }
                Observation::Key { code, state }
            }
            KeyEvent::Key { .. } | KeyEvent::Idle => Observation::Ignored,
            KeyEvent::Status(status) => {
                self.histogram.record(status);
                Observation::Status(status)
            }
        }
    }

    /// Forget the stream after a keyboard reset
    ///
    /// `current` is the value the cell holds right now. It is adopted without
    /// being reported, so a byte left over from before the reset is not
    /// redrawn. The histogram survives so counts accumulate across resets.
    pub fn resync(&mut self, current: u8) {
        self.last_raw = current;
        self.seen_press = false;
    }

    pub fn histogram(&self) -> &StatusHistogram {
        &self.histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_startup_sentinel_is_unchanged() {
        let mut m = KeyMonitor::new();
        assert_eq!(m.observe(0xF9), Observation::Unchanged);
        assert_eq!(m.histogram().total(), 0);
    }

    #[test]
    fn test_press_then_release() {
        let mut m = KeyMonitor::new();
        assert_eq!(
            m.observe(0x02),
            Observation::Key {
                code: ScanCode::new(0x01),
                state: KeyState::Pressed
            }
        );
        assert_eq!(
            m.observe(0x03),
            Observation::Key {
                code: ScanCode::new(0x01),
                state: KeyState::Released
            }
        );
    }

    #[test]
    fn test_release_before_press_is_ignored() {
        let mut m = KeyMonitor::new();
        assert_eq!(m.observe(0x03), Observation::Ignored);
        assert!(m.observe(0x04).is_key_for(0x02));
    }

    #[test]
    fn test_repeat_is_unchanged() {
        let mut m = KeyMonitor::new();
        m.observe(0x02);
        assert_eq!(m.observe(0x02), Observation::Unchanged);
    }

    #[test]
    fn test_change_detection_is_by_value() {
        let mut m = KeyMonitor::new();
        assert!(m.observe(0x02).is_key_for(0x01));
        assert!(m.observe(0x03).is_key_for(0x01));
        // Back to an earlier value is still a change
        assert_eq!(
            m.observe(0x02),
            Observation::Key {
                code: ScanCode::new(0x01),
                state: KeyState::Pressed
            }
        );
        assert_eq!(m.observe(0x02), Observation::Unchanged);
    }

    #[test]
    fn test_status_counts_once() {
        let mut m = KeyMonitor::new();
        m.observe(0x02);
        assert_eq!(
            m.observe(0xF9),
            Observation::Status(StatusCode::SelftestFailed)
        );
        assert_eq!(m.histogram().count(StatusCode::SelftestFailed), 1);
        assert_eq!(m.histogram().total(), 1);
    }

    #[test]
    fn test_idle_is_ignored() {
        let mut m = KeyMonitor::new();
        assert_eq!(m.observe(0xFF), Observation::Ignored);
        assert_eq!(m.histogram().total(), 0);
    }

    #[test]
    fn test_reset_warning_counted() {
        let mut m = KeyMonitor::new();
        let obs = m.observe(0xF0);
        assert!(obs.is_key_for(0x78));
        assert_eq!(m.histogram().count(StatusCode::ResetWarning), 1);
    }

    #[test]
    fn test_resync() {
        let mut m = KeyMonitor::new();
        m.observe(0x02);
        m.observe(0xFA);
        m.resync(0xFA);

        assert_eq!(m.observe(0xFA), Observation::Unchanged);
        assert_eq!(m.observe(0x03), Observation::Ignored);
        assert_eq!(m.histogram().count(StatusCode::InitiatePowerUp), 1);
    }

    #[test]
    fn test_resync_does_not_replay_stale_key() {
        let mut m = KeyMonitor::new();
        m.observe(0x02);
        // Key released while the keyboard was held in reset
        m.resync(0x02);
        assert_eq!(m.observe(0x02), Observation::Unchanged);
        assert!(m.observe(0x04).is_key_for(0x02));
    }

    impl Observation {
        fn is_key_for(&self, value: u8) -> bool {
            matches!(self, Observation::Key { code, .. } if code.value() == value)
        }
    }

    proptest! {
        #[test]
        fn prop_idle_never_counted(stream in proptest::collection::vec(any::<u8>(), 0..32)) {
            let mut m = KeyMonitor::new();
            for raw in stream {
                let before = m.histogram().clone();
                let obs = m.observe(raw);
                if raw == 0xFF {
                    let drew = matches!(obs, Observation::Key { .. } | Observation::Status(_));
                    prop_assert!(!drew, "idle byte produced {:?}", obs);
                    prop_assert_eq!(m.histogram(), &before);
                }
            }
        }
    }
}
