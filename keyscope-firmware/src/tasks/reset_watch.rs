//! Keyboard reset line watcher
//!
//! The keyboard pulls the reset line low when Ctrl-Amiga-Amiga is held
//! (and while we hold it during bring-up). Each edge is forwarded to the
//! monitor task.

use defmt::*;
use embassy_rp::gpio::Flex;

use keyscope_core::monitor::LinkState;

use crate::channels::RESET_LINE;

/// Watch the released reset line and report every transition
#[embassy_executor::task]
pub async fn reset_watch_task(mut reset: Flex<'static>) {
    info!("Reset watch task started");

    loop {
        let state = if reset.is_high() {
            LinkState::Running
        } else {
            LinkState::Reset
        };
        info!("Keyboard link: {}", state);
        RESET_LINE.signal(state);

        match state {
            LinkState::Running => reset.wait_for_low().await,
            LinkState::Reset => reset.wait_for_high().await,
        }
    }
}
