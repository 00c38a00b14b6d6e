//! Classification of raw decoder bytes

use crate::codes::{KeyState, ScanCode, StatusCode};

/// Raw bytes at or above this value take the status path
pub const RAW_STATUS_THRESHOLD: u8 = 0xF9;

/// Raw byte seen while the keyboard is only clocking handshake bits
pub const RAW_IDLE: u8 = 0xFF;

/// Value the event cell and the consumer start from
pub const RAW_STARTUP_SENTINEL: u8 = 0xF9;

/// What one raw byte from the decoder means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    /// A physical key changed state
    Key {
        /// Which key
        code: ScanCode,
        /// Down or up
        state: KeyState,
    },
    /// The controller reported a condition instead of a key
    Status(StatusCode),
    /// Handshake clocking, carries no information
    Idle,
}

impl KeyEvent {
    /// Classify a raw byte
    ///
    /// The boundaries are the keyboard's observed constants and are kept
    /// exactly: everything below `0xF9` is a key (including the rotated forms
    /// of some status codes), `0xFF` is idle noise, and the remaining bytes
    /// are un-rotated with `(raw >> 1) | 0x80`.
    pub const fn from_raw(raw: u8) -> Self {
        if raw < RAW_STATUS_THRESHOLD {
            return KeyEvent::Key {
                code: ScanCode::new(raw >> 1),
                state: KeyState::from_flag(raw),
            };
        }
        if raw == RAW_IDLE {
            return KeyEvent::Idle;
        }
        // raw in 0xF9..=0xFE un-rotates to 0xFC..=0xFF, always a known code
        match StatusCode::from_code((raw >> 1) | 0x80) {
            Some(status) => KeyEvent::Status(status),
            None => KeyEvent::Idle,
        }
    }

    /// Raw byte for a key transition
    pub const fn key_raw(code: ScanCode, state: KeyState) -> u8 {
        let flag = match state {
            KeyState::Pressed => 0,
            KeyState::Released => 1,
        };
        (code.value() << 1) | flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_key(event: KeyEvent) -> bool {
        matches!(event, KeyEvent::Key { .. })
    }

    fn is_status(event: KeyEvent) -> bool {
        matches!(event, KeyEvent::Status(_))
    }

    #[test]
    fn test_press_and_release() {
        assert_eq!(
            KeyEvent::from_raw(0x02),
            KeyEvent::Key {
                code: ScanCode::new(0x01),
                state: KeyState::Pressed
            }
        );
        assert_eq!(
            KeyEvent::from_raw(0x03),
            KeyEvent::Key {
                code: ScanCode::new(0x01),
                state: KeyState::Released
            }
        );
    }

    #[test]
    fn test_idle_is_never_a_key_or_status() {
        let event = KeyEvent::from_raw(RAW_IDLE);
        assert_eq!(event, KeyEvent::Idle);
        assert!(!is_key(event));
        assert!(!is_status(event));
    }

    #[test]
    fn test_status_boundary() {
        // Last value on the key path
        assert!(is_key(KeyEvent::from_raw(0xF8)));

        // First value on the status path, un-rotated as (0xF9 >> 1) | 0x80
        assert_eq!(
            KeyEvent::from_raw(0xF9),
            KeyEvent::Status(StatusCode::SelftestFailed)
        );
        assert_eq!(
            KeyEvent::from_raw(0xFB),
            KeyEvent::Status(StatusCode::InitiatePowerUp)
        );
        assert_eq!(
            KeyEvent::from_raw(0xFD),
            KeyEvent::Status(StatusCode::TerminatePowerUp)
        );
        assert_eq!(
            KeyEvent::from_raw(0xFE),
            KeyEvent::Status(StatusCode::Interrupt)
        );
    }

    #[test]
    fn test_every_status_byte_classifies() {
        for raw in RAW_STATUS_THRESHOLD..RAW_IDLE {
            assert!(is_status(KeyEvent::from_raw(raw)), "raw {:#x}", raw);
        }
    }

    #[test]
    fn test_reset_warning_rides_the_key_path() {
        match KeyEvent::from_raw(0xF0) {
            KeyEvent::Key { code, state } => {
                assert!(code.is_reset_warning());
                assert_eq!(state, KeyState::Pressed);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_key_raw() {
        let code = ScanCode::new(0x45);
        assert_eq!(KeyEvent::key_raw(code, KeyState::Pressed), 0x8A);
        assert_eq!(KeyEvent::key_raw(code, KeyState::Released), 0x8B);
        assert_eq!(
            KeyEvent::from_raw(0x8B),
            KeyEvent::Key {
                code,
                state: KeyState::Released
            }
        );
    }
}
