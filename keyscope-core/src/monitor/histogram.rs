//! Controller status counters

use keyscope_protocol::{StatusCode, STATUS_CODE_COUNT};

/// One counter per controller status code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusHistogram {
    counts: [u32; STATUS_CODE_COUNT],
}

impl StatusHistogram {
    pub const fn new() -> Self {
        Self {
            counts: [0; STATUS_CODE_COUNT],
        }
    }

    /// Count one occurrence
    pub fn record(&mut self, status: StatusCode) {
        let slot = &mut self.counts[status.slot()];
        *slot = slot.saturating_add(1);
    }

    pub fn count(&self, status: StatusCode) -> u32 {
        self.counts[status.slot()]
    }

    /// Sum over all codes, saturating like the counters themselves
    pub fn total(&self) -> u32 {
        self.counts.iter().copied().fold(0, u32::saturating_add)
    }

    /// Codes with their counts, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (StatusCode, u32)> + '_ {
        StatusCode::ALL.iter().map(|&s| (s, self.count(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_count() {
        let mut h = StatusHistogram::new();
        h.record(StatusCode::BufferOverflow);
        h.record(StatusCode::BufferOverflow);
        h.record(StatusCode::ResetWarning);

        assert_eq!(h.count(StatusCode::BufferOverflow), 2);
        assert_eq!(h.count(StatusCode::ResetWarning), 1);
        assert_eq!(h.count(StatusCode::LastKeyBad), 0);
        assert_eq!(h.total(), 3);
    }

    #[test]
    fn test_iter_slot_order() {
        let mut h = StatusHistogram::new();
        h.record(StatusCode::Interrupt);
        let (first, _) = h.iter().next().unwrap();
        assert_eq!(first, StatusCode::LastKeyBad);
        assert_eq!(h.iter().nth(6), Some((StatusCode::Interrupt, 1)));
    }

    #[test]
    fn test_total_saturates() {
        let mut h = StatusHistogram::new();
        h.counts[0] = u32::MAX;
        h.record(StatusCode::LastKeyBad);
        h.record(StatusCode::BufferOverflow);
        assert_eq!(h.count(StatusCode::LastKeyBad), u32::MAX);
        assert_eq!(h.total(), u32::MAX);
    }
}
