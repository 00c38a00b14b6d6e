//! PIO + DMA VGA scanout
//!
//! Streams a packed-pixel frame buffer to a 640x480 VGA monitor without
//! CPU involvement once started.
//!
//! # Architecture
//!
//! ```text
//!   PIO0 SM0  hsync  ── irq 0 each line ──► SM1 vsync ── irq 1 each active line ──► SM2 rgb
//!
//!   DMA ch0: frame buffer ──bytes──► PIO0 TXF2   (paced by PIO0_TX2, chains to ch1)
//!   DMA ch1: FRAME_ADDRESS ──word──► ch0 READ_ADDR  (unpaced, chains to ch0)
//! ```
//!
//! Channel 0 moves one frame, then channel 1 rewinds channel 0's read address
//! and retriggers it, forever. The rgb machine shifts each byte out three bits
//! at a time: the low field first (even pixel), then the odd pixel.

use embassy_rp::pac;
use embassy_rp::pac::dma::regs::CtrlTrig;
use embassy_rp::pac::dma::vals::{DataSize, TreqSel};
use embassy_rp::peripherals::{DMA_CH0, DMA_CH1, PIO0};
use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, PioPin, ShiftConfig, ShiftDirection, StateMachine,
};
use embassy_rp::Peri;
use fixed::types::U24F8;
use portable_atomic::{AtomicU32, Ordering};

use crate::pio::{
    cycles_per_pixel, divider_bits, H_ACTIVE, PIXEL_CLOCK_HZ, RGB_ACTIVE, SYS_CLK_HZ, V_ACTIVE,
};

const PIXEL_CHANNEL: usize = 0;
const RELOAD_CHANNEL: usize = 1;
const RGB_SM: usize = 2;

/// System clocks per pixel hard-coded in the rgb program's delays
const RGB_CYCLES_PER_PIXEL: u32 = 5;
const _: () = assert!(cycles_per_pixel(SYS_CLK_HZ) == RGB_CYCLES_PER_PIXEL);

/// Start address of the frame, re-read by the reload channel every frame
static FRAME_ADDRESS: AtomicU32 = AtomicU32::new(0);

/// Location of the frame the DMA streams
///
/// The memory must stay put for as long as the scanout runs; in practice it
/// is a `static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameRegion {
    addr: u32,
    len: u32,
}

impl FrameRegion {
    pub fn of(frame: &[u8]) -> Self {
        Self {
            addr: frame.as_ptr() as u32,
            len: frame.len() as u32,
        }
    }
}

/// VGA output pins
///
/// Red, green and blue must be consecutive GPIOs (one `out pins, 3`).
pub struct VgaPins<'d, R: PioPin, G: PioPin, B: PioPin, HS: PioPin, VS: PioPin> {
    pub red: Peri<'d, R>,
    pub green: Peri<'d, G>,
    pub blue: Peri<'d, B>,
    pub hsync: Peri<'d, HS>,
    pub vsync: Peri<'d, VS>,
}

/// Running VGA scanout
///
/// Owns the state machines and DMA channels. Dropping it disables the state
/// machines, so keep it alive for the life of the program.
pub struct Scanout<'d> {
    _hsync: StateMachine<'d, PIO0, 0>,
    _vsync: StateMachine<'d, PIO0, 1>,
    _rgb: StateMachine<'d, PIO0, 2>,
    _pixel_dma: Peri<'d, DMA_CH0>,
    _reload_dma: Peri<'d, DMA_CH1>,
}

impl<'d> Scanout<'d> {
    /// Load the programs, configure DMA and start streaming `frame`
    ///
    /// The frame contents should already be valid: the first frame goes out
    /// as soon as this returns.
    #[allow(clippy::too_many_arguments)]
    pub fn start<R: PioPin, G: PioPin, B: PioPin, HS: PioPin, VS: PioPin>(
        common: &mut Common<'d, PIO0>,
        mut hsync_sm: StateMachine<'d, PIO0, 0>,
        mut vsync_sm: StateMachine<'d, PIO0, 1>,
        mut rgb_sm: StateMachine<'d, PIO0, 2>,
        pins: VgaPins<'d, R, G, B, HS, VS>,
        pixel_dma: Peri<'d, DMA_CH0>,
        reload_dma: Peri<'d, DMA_CH1>,
        frame: FrameRegion,
    ) -> Self {
        let sync_divider = U24F8::from_bits(divider_bits(SYS_CLK_HZ, PIXEL_CLOCK_HZ));

        // Horizontal sync: high through active + front porch, 96-clock pulse,
        // 48-clock back porch, then tell vsync a line ended
        let hsync_prg = pio::pio_asm!(
            "pull block",
            ".wrap_target",
            "mov x, osr",
            "activeporch:",
            "jmp x-- activeporch",
            "set pins, 0 [31]",
            "set pins, 0 [31]",
            "set pins, 0 [31]",
            "set pins, 1 [31]",
            "set pins, 1 [12]",
            "irq 0 [1]",
            ".wrap"
        );
        let installed = common.load_program(&hsync_prg.program);
        let hsync_pin = common.make_pio_pin(pins.hsync);
        let mut cfg = Config::default();
        cfg.use_program(&installed, &[]);
        cfg.set_set_pins(&[&hsync_pin]);
        cfg.clock_divider = sync_divider;
        hsync_sm.set_config(&cfg);
        hsync_sm.set_pin_dirs(PioDirection::Out, &[&hsync_pin]);

        // Vertical sync: count active lines (raising irq 1 for rgb), 10-line
        // front porch, 2-line pulse, 33-line back porch
        let vsync_prg = pio::pio_asm!(
            ".side_set 1 opt",
            "pull block",
            ".wrap_target",
            "mov x, osr",
            "active:",
            "wait 1 irq 0",
            "irq 1",
            "jmp x-- active",
            "set y, 9",
            "frontporch:",
            "wait 1 irq 0",
            "jmp y-- frontporch",
            "set pins, 0",
            "wait 1 irq 0",
            "wait 1 irq 0",
            "set y, 31",
            "backporch:",
            "wait 1 irq 0 side 1",
            "jmp y-- backporch",
            ".wrap"
        );
        let installed = common.load_program(&vsync_prg.program);
        let vsync_pin = common.make_pio_pin(pins.vsync);
        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&vsync_pin]);
        cfg.set_set_pins(&[&vsync_pin]);
        cfg.clock_divider = sync_divider;
        vsync_sm.set_config(&cfg);
        vsync_sm.set_pin_dirs(PioDirection::Out, &[&vsync_pin]);

        // Pixels: blank, wait for an active line, then five system clocks per
        // pixel, two pixels per pulled byte
        let rgb_prg = pio::pio_asm!(
            "pull block",
            "mov y, osr",
            ".wrap_target",
            "set pins, 0",
            "mov x, y",
            "wait 1 irq 1 [3]",
            "colorout:",
            "pull block",
            "out pins, 3 [4]",
            "out pins, 3 [2]",
            "jmp x-- colorout",
            ".wrap"
        );
        let installed = common.load_program(&rgb_prg.program);
        let red = common.make_pio_pin(pins.red);
        let green = common.make_pio_pin(pins.green);
        let blue = common.make_pio_pin(pins.blue);
        let mut cfg = Config::default();
        cfg.use_program(&installed, &[]);
        cfg.set_out_pins(&[&red, &green, &blue]);
        cfg.set_set_pins(&[&red, &green, &blue]);
        cfg.shift_out = ShiftConfig {
            threshold: 32,
            direction: ShiftDirection::Right,
            auto_fill: false,
        };
        rgb_sm.set_config(&cfg);
        rgb_sm.set_pin_dirs(PioDirection::Out, &[&red, &green, &blue]);

        // Loop counts, consumed once by each program's leading `pull block`
        let pushed = hsync_sm.tx().try_push(H_ACTIVE)
            & vsync_sm.tx().try_push(V_ACTIVE)
            & rgb_sm.tx().try_push(RGB_ACTIVE);
        debug_assert!(pushed, "fresh PIO FIFOs must accept the loop counts");

        let pixel_ctrl = configure_dma(frame);

        common.apply_sm_batch(|batch| {
            batch.set_enable(&mut hsync_sm, true);
            batch.set_enable(&mut vsync_sm, true);
            batch.set_enable(&mut rgb_sm, true);
        });

        // Rewriting the control word through the trigger alias starts ch0
        pac::DMA.ch(PIXEL_CHANNEL).ctrl_trig().write_value(pixel_ctrl);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "VGA scanout started: {} bytes at {:#010x}",
            frame.len,
            frame.addr
        );

        Self {
            _hsync: hsync_sm,
            _vsync: vsync_sm,
            _rgb: rgb_sm,
            _pixel_dma: pixel_dma,
            _reload_dma: reload_dma,
        }
    }
}

/// Program both channels without triggering them
///
/// Returns channel 0's control word so the caller can trigger it.
fn configure_dma(frame: FrameRegion) -> CtrlTrig {
    FRAME_ADDRESS.store(frame.addr, Ordering::Relaxed);

    let pixel = pac::DMA.ch(PIXEL_CHANNEL);
    let reload = pac::DMA.ch(RELOAD_CHANNEL);

    let mut pixel_ctrl = CtrlTrig(0);
    pixel_ctrl.set_en(true);
    pixel_ctrl.set_data_size(DataSize::SIZE_BYTE);
    pixel_ctrl.set_incr_read(true);
    pixel_ctrl.set_incr_write(false);
    pixel_ctrl.set_treq_sel(TreqSel::PIO0_TX2);
    pixel_ctrl.set_chain_to(RELOAD_CHANNEL as u8);

    pixel.read_addr().write_value(frame.addr);
    pixel
        .write_addr()
        .write_value(pac::PIO0.txf(RGB_SM).as_ptr() as u32);
    pixel.trans_count().write_value(frame.len);
    pixel.al1_ctrl().write_value(pixel_ctrl.0);

    let mut reload_ctrl = CtrlTrig(0);
    reload_ctrl.set_en(true);
    reload_ctrl.set_data_size(DataSize::SIZE_WORD);
    reload_ctrl.set_incr_read(false);
    reload_ctrl.set_incr_write(false);
    reload_ctrl.set_treq_sel(TreqSel::PERMANENT);
    reload_ctrl.set_chain_to(PIXEL_CHANNEL as u8);

    reload.read_addr().write_value(FRAME_ADDRESS.as_ptr() as u32);
    reload
        .write_addr()
        .write_value(pixel.read_addr().as_ptr() as u32);
    reload.trans_count().write_value(1);
    reload.al1_ctrl().write_value(reload_ctrl.0);

    pixel_ctrl
}
