//! Scan codes, key states and controller status codes

/// Number of distinct controller status codes (and histogram slots)
pub const STATUS_CODE_COUNT: usize = 8;

/// Physical key identifier, independent of press/release state
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanCode(u8);

impl ScanCode {
    /// Return key; drawn as an L shape on the A500 keyboard
    pub const RETURN: ScanCode = ScanCode(0x44);

    /// Wrap a 7-bit code
    pub const fn new(code: u8) -> Self {
        Self(code & 0x7F)
    }

    /// The 7-bit code value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Index into a scan-code-keyed table
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns true if this is the reset warning (Ctrl-Amiga-Amiga held)
    pub const fn is_reset_warning(self) -> bool {
        self.0 == StatusCode::ResetWarning.code()
    }
}

/// Key transition carried in bit 0 of the raw byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyState {
    /// Key went down
    Pressed,
    /// Key came up
    Released,
}

impl KeyState {
    /// Decode the up/down flag (0 = down, 1 = up)
    pub const fn from_flag(flag: u8) -> Self {
        if flag & 1 == 0 {
            KeyState::Pressed
        } else {
            KeyState::Released
        }
    }

    /// Human-readable label, padded to equal width so a redraw covers the old text
    pub const fn label(self) -> &'static str {
        match self {
            KeyState::Pressed => "Pressed ",
            KeyState::Released => "Released",
        }
    }
}

/// Conditions reported by the keyboard controller in place of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusCode {
    /// Ctrl-Amiga-Amiga pressed; a hard reset follows
    ResetWarning,
    /// Sent first after power-up; the previous key code was lost
    LastKeyBad,
    /// The keyboard's type-ahead buffer overflowed
    BufferOverflow,
    /// Controller hardware failure (not sent by A500 keyboards)
    ControllerFailure,
    /// Keyboard self-test failed
    SelftestFailed,
    /// Start of the power-up key stream
    InitiatePowerUp,
    /// End of the power-up key stream
    TerminatePowerUp,
    /// Interrupt request (not sent by A500 keyboards)
    Interrupt,
}

// Wire values (after un-rotating the raw byte)
const CODE_RESET_WARNING: u8 = 0x78;
const CODE_LAST_KEY_BAD: u8 = 0xF9;
const CODE_BUFFER_OVERFLOW: u8 = 0xFA;
const CODE_CONTROLLER_FAILURE: u8 = 0xFB;
const CODE_SELFTEST_FAILED: u8 = 0xFC;
const CODE_INITIATE_POWERUP: u8 = 0xFD;
const CODE_TERMINATE_POWERUP: u8 = 0xFE;
const CODE_INTERRUPT: u8 = 0xFF;

impl StatusCode {
    /// All status codes in histogram slot order
    pub const ALL: [StatusCode; STATUS_CODE_COUNT] = [
        StatusCode::LastKeyBad,
        StatusCode::BufferOverflow,
        StatusCode::ControllerFailure,
        StatusCode::SelftestFailed,
        StatusCode::InitiatePowerUp,
        StatusCode::TerminatePowerUp,
        StatusCode::Interrupt,
        StatusCode::ResetWarning,
    ];

    /// Parse a status code from its wire value
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            CODE_RESET_WARNING => Some(StatusCode::ResetWarning),
            CODE_LAST_KEY_BAD => Some(StatusCode::LastKeyBad),
            CODE_BUFFER_OVERFLOW => Some(StatusCode::BufferOverflow),
            CODE_CONTROLLER_FAILURE => Some(StatusCode::ControllerFailure),
            CODE_SELFTEST_FAILED => Some(StatusCode::SelftestFailed),
            CODE_INITIATE_POWERUP => Some(StatusCode::InitiatePowerUp),
            CODE_TERMINATE_POWERUP => Some(StatusCode::TerminatePowerUp),
            CODE_INTERRUPT => Some(StatusCode::Interrupt),
            _ => None,
        }
    }

    /// Wire value of this status code
    pub const fn code(self) -> u8 {
        match self {
            StatusCode::ResetWarning => CODE_RESET_WARNING,
            StatusCode::LastKeyBad => CODE_LAST_KEY_BAD,
            StatusCode::BufferOverflow => CODE_BUFFER_OVERFLOW,
            StatusCode::ControllerFailure => CODE_CONTROLLER_FAILURE,
            StatusCode::SelftestFailed => CODE_SELFTEST_FAILED,
            StatusCode::InitiatePowerUp => CODE_INITIATE_POWERUP,
            StatusCode::TerminatePowerUp => CODE_TERMINATE_POWERUP,
            StatusCode::Interrupt => CODE_INTERRUPT,
        }
    }

    /// Histogram slot: `code - 0xF9` for the high range, last slot for the reset warning
    pub const fn slot(self) -> usize {
        match self {
            StatusCode::ResetWarning => STATUS_CODE_COUNT - 1,
            other => (other.code() - CODE_LAST_KEY_BAD) as usize,
        }
    }

    /// Label shown next to the counter
    pub const fn label(self) -> &'static str {
        match self {
            StatusCode::ResetWarning => "Reset Warning",
            StatusCode::LastKeyBad => "Last Key Bad",
            StatusCode::BufferOverflow => "Buffer Overflow",
            StatusCode::ControllerFailure => "Controller Fail",
            StatusCode::SelftestFailed => "Selftest Failed",
            StatusCode::InitiatePowerUp => "Initiate PowerUp",
            StatusCode::TerminatePowerUp => "Terminate PowerUp",
            StatusCode::Interrupt => "Interrupt",
        }
    }

    /// Returns true for codes the A500 controller never actually sends
    pub const fn is_unused(self) -> bool {
        matches!(self, StatusCode::ControllerFailure | StatusCode::Interrupt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in StatusCode::ALL {
            assert_eq!(StatusCode::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_slots_are_unique_and_ordered() {
        for (i, status) in StatusCode::ALL.iter().enumerate() {
            assert_eq!(status.slot(), i);
        }
        assert_eq!(StatusCode::LastKeyBad.slot(), 0);
        assert_eq!(StatusCode::Interrupt.slot(), 6);
    }

    #[test]
    fn test_unknown_status() {
        assert!(StatusCode::from_code(0x00).is_none());
        assert!(StatusCode::from_code(0x77).is_none());
        assert!(StatusCode::from_code(0xF8).is_none());
    }

    #[test]
    fn test_scan_code_range() {
        assert!(!ScanCode::new(0x77).is_reset_warning());
        assert!(ScanCode::new(0x78).is_reset_warning());
        assert_eq!(ScanCode::new(0xC4), ScanCode::RETURN);
    }

    #[test]
    fn test_key_state_flag() {
        assert_eq!(KeyState::from_flag(0x02), KeyState::Pressed);
        assert_eq!(KeyState::from_flag(0x03), KeyState::Released);
        assert_eq!(KeyState::Pressed.label().len(), KeyState::Released.label().len());
    }
}
