//! Keyscope - Amiga 500 Keyboard Analyser
//!
//! Main firmware binary for RP2040 boards with a resistor-DAC VGA output.
//!
//! Core 1 decodes the keyboard's serial stream with interrupts off. Core 0
//! runs the executor: one task watches the keyboard reset line, the other
//! paints key presses and controller status codes onto the frame buffer
//! that PIO and DMA stream to the monitor.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Flex;
use embassy_rp::multicore::{spawn_core1, Stack};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_time::{Delay, Duration, Timer};
use static_cell::ConstStaticCell;
use {defmt_rtt as _, panic_probe as _};

use keyscope_core::config::KeyscopeConfig;
use keyscope_core::decoder::Decoder;
use keyscope_core::monitor::Renderer;
use keyscope_display::{FrameBuffer, Resolution, Screen};
use keyscope_hal_rp2040::{FrameRegion, Scanout, SioKeyboardLines, VgaPins};

mod board;
mod channels;
mod display;
mod tasks;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// Core 1 runs nothing but the decoder loop
static CORE1_STACK: ConstStaticCell<Stack<4096>> = ConstStaticCell::new(Stack::new());

/// 640x480 at two pixels per byte, streamed by DMA for the life of the program
static FRAME: ConstStaticCell<[u8; Resolution::VGA.bytes()]> =
    ConstStaticCell::new([0; Resolution::VGA.bytes()]);

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Keyscope firmware starting...");

    let p = embassy_rp::init(Default::default());
    let config = KeyscopeConfig::default();
    info!("Peripherals initialized");

    // Hold the keyboard in reset until the screen is up
    let mut reset = Flex::new(p.PIN_12);
    reset.set_low();
    reset.set_as_output();
    info!("Keyboard held in reset (GPIO {})", board::PIN_KEYBOARD_RESET);

    // Decoder gets core 1 to itself
    let lines = SioKeyboardLines::new(p.PIN_10, p.PIN_11);
    let decoder = Decoder::new(lines, Delay, config.decoder);
    spawn_core1(p.CORE1, CORE1_STACK.take(), move || {
        tasks::decoder_core(decoder)
    });
    info!(
        "Decoder running on core 1 (clock GPIO {}, data GPIO {})",
        board::PIN_KEYBOARD_CLOCK,
        board::PIN_KEYBOARD_DATA
    );

    // Frame buffer starts blank; the scanout streams from it from here on
    let frame = FRAME.take();
    let region = FrameRegion::of(&frame[..]);
    let frame = unwrap!(FrameBuffer::new(frame, Resolution::VGA));
    let mut screen = Screen::new(frame, display::ARTWORK, display::FONT);

    // Every artwork index needs a palette entry or a key copy would panic
    let palette_len = config.colors.idle_palette().len();
    assert!(
        usize::from(display::ARTWORK.max_index()) < palette_len,
        "artwork uses more colors than the palettes hold"
    );
    info!("Key layout: {} keys", display::KEY_LAYOUT.key_count());

    let renderer = Renderer::new(display::KEY_LAYOUT, config.colors);
    renderer.clear(&mut screen);

    let Pio {
        mut common,
        sm0,
        sm1,
        sm2,
        ..
    } = Pio::new(p.PIO0, Irqs);
    let _scanout = Scanout::start(
        &mut common,
        sm0,
        sm1,
        sm2,
        VgaPins {
            red: p.PIN_0,
            green: p.PIN_1,
            blue: p.PIN_2,
            hsync: p.PIN_8,
            vsync: p.PIN_9,
        },
        p.DMA_CH0,
        p.DMA_CH1,
        region,
    );
    info!(
        "VGA output on GPIO {}-{}, sync on GPIO {}/{}",
        board::PIN_RED,
        board::PIN_BLUE,
        board::PIN_HSYNC,
        board::PIN_VSYNC
    );

    // Release the keyboard: drive high, then let its pull-up hold the line
    reset.set_high();
    reset.set_as_input();
    info!("Keyboard released from reset");

    let poll = Duration::from_micros(config.poll_interval_us);

    spawner.spawn(tasks::reset_watch_task(reset)).unwrap();
    spawner
        .spawn(tasks::monitor_task(screen, renderer, poll))
        .unwrap();

    info!("All tasks spawned");

    // Main loop - heartbeat only
    loop {
        Timer::after_secs(60).await;
        trace!("Heartbeat");
    }
}
