//! Decoder state machine

use embedded_hal::delay::DelayNs;

use super::state::{DecodeError, DecoderState};
use crate::cell::EventCell;
use crate::config::DecoderConfig;
use crate::traits::{KeyboardLines, LineLevels};

/// Keyboard protocol decoder
///
/// Generic over the line access and the delay source so the same state
/// machine runs on the RP2040 and against scripted lines in tests.
pub struct Decoder<L, D> {
    lines: L,
    delay: D,
    config: DecoderConfig,
    state: DecoderState,
}

impl<L: KeyboardLines, D: DelayNs> Decoder<L, D> {
    /// Create a decoder in the `Sync` state
    pub fn new(lines: L, delay: D, config: DecoderConfig) -> Self {
        Self {
            lines,
            delay,
            config,
            state: DecoderState::Sync,
        }
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Run one state
    ///
    /// `Sync` returns `Ok(None)` once a clock pulse has been seen and
    /// acknowledged. `Read` returns the raw byte after acknowledging it.
    /// Any error sends the machine back to `Sync` without an acknowledge.
    pub fn step(&mut self) -> Result<Option<u8>, DecodeError> {
        let result = match self.state {
            DecoderState::Sync => self.sync().map(|()| None),
            DecoderState::Read => self.read_byte().map(Some),
        };
        if result.is_ok() {
            self.acknowledge();
        }
        self.state = self.state.transition(result.is_ok());
        result
    }

    /// Decode forever, publishing every byte to `cell`
    ///
    /// Meant to own a core with interrupts disabled.
    pub fn run(mut self, cell: &EventCell) -> ! {
        loop {
            match self.step() {
                Ok(Some(raw)) => cell.publish(raw),
                Ok(None) => {}
                Err(err) => {
                    cell.record_stall();
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Keyboard link stalled: {}", err);
                    #[cfg(not(feature = "defmt"))]
                    let _ = err;
                }
            }
        }
    }

    fn sync(&mut self) -> Result<(), DecodeError> {
        self.wait_clock(false)
            .and_then(|_| self.wait_clock(true))
            .map(|_| ())
            .ok_or(DecodeError::SyncStalled)
    }

    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let mut raw = 0u8;
        for bit in 0..8 {
            // Data is sampled from the same read that saw the clock low
            let levels = self
                .wait_clock(false)
                .ok_or(DecodeError::Stalled { bit })?;
            raw = (raw << 1) | levels.data_bit();
            self.wait_clock(true)
                .ok_or(DecodeError::Stalled { bit })?;
        }
        Ok(raw)
    }

    fn acknowledge(&mut self) {
        let timing = self.config.timing;
        self.delay.delay_us(timing.quiescence_us);
        self.lines.drive_data_low();
        self.delay.delay_us(timing.ack_pulse_us);
        self.lines.release_data();
    }

    /// Poll until the clock reads `high`; `None` if the poll budget runs out
    fn wait_clock(&mut self, high: bool) -> Option<LineLevels> {
        let mut polls: u32 = 0;
        loop {
            let levels = self.lines.sample();
            if levels.clock == high {
                return Some(levels);
            }
            if let Some(limit) = self.config.edge_timeout_polls {
                polls += 1;
                if polls >= limit {
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::{Cell, RefCell};
    use heapless::Vec;
    use proptest::prelude::*;

    const IDLE: LineLevels = LineLevels {
        clock: true,
        data: true,
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Trace {
        DataLow,
        DataReleased,
        DelayUs(u32),
    }

    type TraceLog = RefCell<Vec<Trace, 32>>;

    /// Scripted lines; returns idle levels once the script runs out
    struct MockLines<'a> {
        script: Vec<LineLevels, 64>,
        pos: Cell<usize>,
        trace: &'a TraceLog,
    }

    impl<'a> MockLines<'a> {
        fn new(trace: &'a TraceLog) -> Self {
            Self {
                script: Vec::new(),
                pos: Cell::new(0),
                trace,
            }
        }

        fn push(&mut self, clock: bool, data: bool) {
            self.script.push(LineLevels { clock, data }).unwrap();
        }

        /// One full clock pulse, as seen while syncing
        fn pulse(&mut self) {
            self.push(true, true);
            self.push(false, true);
            self.push(true, true);
        }

        /// Eight clocked bits, most significant first, data active-low
        fn byte(&mut self, raw: u8) {
            self.bits(raw, 8);
        }

        fn bits(&mut self, raw: u8, count: u8) {
            for bit in (8 - count..8).rev() {
                let one = (raw >> bit) & 1 == 1;
                self.push(false, !one);
                self.push(true, true);
            }
        }
    }

    impl KeyboardLines for MockLines<'_> {
        fn sample(&self) -> LineLevels {
            let i = self.pos.get();
            self.pos.set(i + 1);
            self.script.get(i).copied().unwrap_or(IDLE)
        }

        fn drive_data_low(&mut self) {
            self.trace.borrow_mut().push(Trace::DataLow).unwrap();
        }

        fn release_data(&mut self) {
            self.trace.borrow_mut().push(Trace::DataReleased).unwrap();
        }
    }

    struct MockDelay<'a> {
        trace: &'a TraceLog,
    }

    impl DelayNs for MockDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            self.trace
                .borrow_mut()
                .push(Trace::DelayUs(ns / 1_000))
                .unwrap();
        }

        fn delay_us(&mut self, us: u32) {
            self.trace.borrow_mut().push(Trace::DelayUs(us)).unwrap();
        }
    }

    const ACK: [Trace; 4] = [
        Trace::DelayUs(20),
        Trace::DataLow,
        Trace::DelayUs(85),
        Trace::DataReleased,
    ];

    fn decoder<'a>(
        lines: MockLines<'a>,
        trace: &'a TraceLog,
        config: DecoderConfig,
    ) -> Decoder<MockLines<'a>, MockDelay<'a>> {
        Decoder::new(lines, MockDelay { trace }, config)
    }

    #[test]
    fn test_sync_then_byte() {
        let trace = TraceLog::default();
        let mut lines = MockLines::new(&trace);
        lines.pulse();
        lines.byte(0x8B);

        let mut dec = decoder(lines, &trace, DecoderConfig::default());
        assert_eq!(dec.state(), DecoderState::Sync);

        assert_eq!(dec.step(), Ok(None));
        assert_eq!(dec.state(), DecoderState::Read);
        assert_eq!(trace.borrow().as_slice(), &ACK);

        assert_eq!(dec.step(), Ok(Some(0x8B)));
        assert_eq!(dec.state(), DecoderState::Read);
        assert_eq!(&trace.borrow()[4..], &ACK);
        assert_eq!(trace.borrow().len(), 8);
    }

    #[test]
    fn test_sync_waits_through_low_clock() {
        let trace = TraceLog::default();
        let mut lines = MockLines::new(&trace);
        // Powered up mid-pulse: clock already low
        lines.push(false, true);
        lines.push(false, true);
        lines.push(true, true);
        lines.byte(0x02);

        let mut dec = decoder(lines, &trace, DecoderConfig::default());
        assert_eq!(dec.step(), Ok(None));
        assert_eq!(dec.step(), Ok(Some(0x02)));
    }

    #[test]
    fn test_same_byte_twice() {
        let trace = TraceLog::default();
        let mut lines = MockLines::new(&trace);
        lines.pulse();
        lines.byte(0x44);
        lines.byte(0x44);

        let cell = EventCell::new();
        let mut dec = decoder(lines, &trace, DecoderConfig::default());
        dec.step().unwrap();

        let mut seen: Vec<u8, 2> = Vec::new();
        for _ in 0..2 {
            if let Some(raw) = dec.step().unwrap() {
                cell.publish(raw);
                seen.push(cell.load()).unwrap();
            }
        }
        assert_eq!(seen.as_slice(), &[0x44, 0x44]);
        // One acknowledge per completed state
        assert_eq!(trace.borrow().len(), 3 * ACK.len());
    }

    #[test]
    fn test_idle_byte() {
        let trace = TraceLog::default();
        let mut lines = MockLines::new(&trace);
        lines.pulse();
        lines.byte(0xFF);

        let mut dec = decoder(lines, &trace, DecoderConfig::default());
        dec.step().unwrap();
        assert_eq!(dec.step(), Ok(Some(0xFF)));
    }

    #[test]
    fn test_stall_mid_byte_resyncs() {
        let trace = TraceLog::default();
        let mut lines = MockLines::new(&trace);
        lines.pulse();
        lines.bits(0xA5, 3);

        let config = DecoderConfig {
            edge_timeout_polls: Some(4),
            ..DecoderConfig::default()
        };
        let mut dec = decoder(lines, &trace, config);
        dec.step().unwrap();

        assert_eq!(dec.step(), Err(DecodeError::Stalled { bit: 3 }));
        assert_eq!(dec.state(), DecoderState::Sync);
        // No acknowledge for the partial byte
        assert_eq!(trace.borrow().len(), ACK.len());
    }

    #[test]
    fn test_stall_while_syncing() {
        let trace = TraceLog::default();
        let lines = MockLines::new(&trace);
        let config = DecoderConfig {
            edge_timeout_polls: Some(2),
            ..DecoderConfig::default()
        };
        let mut dec = decoder(lines, &trace, config);

        assert_eq!(dec.step(), Err(DecodeError::SyncStalled));
        assert_eq!(dec.state(), DecoderState::Sync);
        assert!(trace.borrow().is_empty());
    }

    #[test]
    fn test_custom_timing() {
        let trace = TraceLog::default();
        let mut lines = MockLines::new(&trace);
        lines.pulse();

        let mut config = DecoderConfig::default();
        config.timing.ack_pulse_us = 100;
        config.timing.quiescence_us = 5;
        let mut dec = decoder(lines, &trace, config);
        dec.step().unwrap();

        assert_eq!(
            trace.borrow().as_slice(),
            &[
                Trace::DelayUs(5),
                Trace::DataLow,
                Trace::DelayUs(100),
                Trace::DataReleased
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_every_byte_decodes(raw in any::<u8>()) {
            let trace = TraceLog::default();
            let mut lines = MockLines::new(&trace);
            lines.pulse();
            lines.byte(raw);

            let mut dec = decoder(lines, &trace, DecoderConfig::default());
            prop_assert_eq!(dec.step(), Ok(None));
            prop_assert_eq!(dec.step(), Ok(Some(raw)));
        }
    }
}
