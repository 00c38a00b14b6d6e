//! Decoder states and errors

/// Where the decoder is in the handshake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecoderState {
    /// Waiting for one full clock pulse to line up with the keyboard
    Sync,
    /// Clocking in bytes
    Read,
}

impl DecoderState {
    /// State after a step, given whether it succeeded
    pub fn transition(self, completed: bool) -> Self {
        match (self, completed) {
            (_, false) => DecoderState::Sync,
            (DecoderState::Sync, true) => DecoderState::Read,
            (DecoderState::Read, true) => DecoderState::Read,
        }
    }
}

/// Link failures, only reported when an edge timeout is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// No clock pulse while syncing
    SyncStalled,
    /// Clock stopped partway through a byte
    Stalled {
        /// Bit being received, 0 is the first (most significant)
        bit: u8,
    },
}
