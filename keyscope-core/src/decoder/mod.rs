//! Keyboard protocol decoder
//!
//! A busy-polling state machine that owns the keyboard lines on the
//! dedicated core. It never yields: the keyboard's bit cells are only tens
//! of microseconds long and the acknowledge must follow the last bit within
//! a fixed window.
//!
//! ```text
//!        ┌──────┐  clock ↓ then ↑, ack   ┌──────┐
//!  ───►  │ Sync │ ─────────────────────► │ Read │ ◄─┐ 8 bits, ack, publish
//!        └──────┘                        └──────┘ ──┘
//!            ▲        edge timeout (opt-in)   │
//!            └────────────────────────────────┘
//! ```

pub mod machine;
pub mod state;

pub use machine::Decoder;
pub use state::{DecodeError, DecoderState};
