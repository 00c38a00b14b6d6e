//! Screen update task
//!
//! Polls the event cell on a fixed ticker and paints whatever changed. The
//! frame buffer is streamed out by DMA while we draw; a key redraw can show
//! up half-finished for one frame, which is fine for a diagnostic display.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};

use keyscope_core::monitor::{KeyMonitor, LinkState, Observation, Renderer};
use keyscope_display::Screen;

use crate::channels::{KEY_EVENT, RESET_LINE};

#[embassy_executor::task]
pub async fn monitor_task(mut screen: Screen<'static>, renderer: Renderer<'static>, poll: Duration) {
    info!("Monitor task started (poll every {} us)", poll.as_micros());

    let mut monitor = KeyMonitor::new();
    let mut link = LinkState::Reset;
    let mut stalls = KEY_EVENT.stalls();
    let mut ticker = Ticker::every(poll);

    renderer.draw_link_state(&mut screen, link);

    loop {
        match select(RESET_LINE.wait(), ticker.next()).await {
            Either::First(LinkState::Running) => {
                if link == LinkState::Reset {
                    monitor.resync(KEY_EVENT.load());
                    renderer.draw_running(&mut screen, monitor.histogram());
                    renderer.draw_stalls(&mut screen, stalls);
                }
                link = LinkState::Running;
            }
            Either::First(LinkState::Reset) => {
                link = LinkState::Reset;
                renderer.draw_link_state(&mut screen, link);
            }
            Either::Second(()) => {
                if link == LinkState::Reset {
                    continue;
                }

                let observation = monitor.observe(KEY_EVENT.load());
                match observation {
                    Observation::Key { code, state } => {
                        debug!("Key {} {}", code, state)
                    }
                    Observation::Status(status) => {
                        warn!("Keyboard status: {} (total {})", status, monitor.histogram().total())
                    }
                    Observation::Unchanged | Observation::Ignored => {}
                }
                renderer.render(&mut screen, observation, monitor.histogram());

                let now = KEY_EVENT.stalls();
                if now != stalls {
                    stalls = now;
                    renderer.draw_stalls(&mut screen, stalls);
                }
            }
        }
    }
}
