//! Static screen data: character set, key shapes and keyboard artwork

pub mod font;
pub mod layout;

pub use font::FONT;
pub use layout::{ARTWORK, KEY_LAYOUT};
