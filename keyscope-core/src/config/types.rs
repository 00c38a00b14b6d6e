//! Configuration type definitions

use keyscope_display::Color;

/// Acknowledge pulse width required by the keyboard
pub const ACK_PULSE_US: u32 = 85;

/// Settle time between the last clock edge and the acknowledge
pub const QUIESCENCE_US: u32 = 20;

/// Default period of the screen's event-cell poll
pub const DEFAULT_POLL_INTERVAL_US: u64 = 250;

/// Handshake timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecoderTiming {
    /// How long data is held low to acknowledge a byte
    pub ack_pulse_us: u32,
    /// Delay before the acknowledge
    pub quiescence_us: u32,
}

impl Default for DecoderTiming {
    fn default() -> Self {
        Self {
            ack_pulse_us: ACK_PULSE_US,
            quiescence_us: QUIESCENCE_US,
        }
    }
}

/// Decoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecoderConfig {
    pub timing: DecoderTiming,
    /// Line samples allowed per clock edge before giving up and resyncing
    ///
    /// `None` waits forever, which is what a keyboard that is merely idle
    /// needs. `Some(n)` turns a dead link into counted stalls.
    pub edge_timeout_polls: Option<u32>,
}

/// Screen colors
///
/// The keyboard artwork has two indices: 0 for key faces and background,
/// 1 for outlines. The palettes below map those indices per key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorColors {
    /// Key face and background when idle
    pub background: Color,
    /// Key outlines
    pub outline: Color,
    /// Key face while held
    pub pressed: Color,
    /// Key face after release
    pub released: Color,
    /// Key info and "Running" text
    pub info: Color,
    /// "RESET!!" text
    pub alert: Color,
    /// Status counter text
    pub status: Color,
}

impl Default for MonitorColors {
    fn default() -> Self {
        Self {
            background: Color::Black,
            outline: Color::Blue,
            pressed: Color::White,
            released: Color::Green,
            info: Color::Green,
            alert: Color::Red,
            status: Color::Cyan,
        }
    }
}

impl MonitorColors {
    pub fn idle_palette(&self) -> [Color; 2] {
        [self.background, self.outline]
    }

    pub fn pressed_palette(&self) -> [Color; 2] {
        [self.pressed, self.outline]
    }

    pub fn released_palette(&self) -> [Color; 2] {
        [self.released, self.outline]
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyscopeConfig {
    pub decoder: DecoderConfig,
    pub colors: MonitorColors,
    /// Event-cell poll period on the screen core
    pub poll_interval_us: u64,
}

impl Default for KeyscopeConfig {
    fn default() -> Self {
        Self {
            decoder: DecoderConfig::default(),
            colors: MonitorColors::default(),
            poll_interval_us: DEFAULT_POLL_INTERVAL_US,
        }
    }
}
