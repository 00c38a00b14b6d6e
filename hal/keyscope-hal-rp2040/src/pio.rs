//! VGA timing for the PIO scanout
//!
//! 640x480 at 60 Hz runs a 25 MHz pixel clock. The sync state machines are
//! clocked at the pixel rate; the rgb machine runs at the system clock and
//! spends five cycles per pixel, so both sides agree on pixel timing.
//!
//! The loop counts below are pushed into each machine's FIFO once at start
//! and copied into a scratch register every line or frame. PIO `jmp x--`
//! loops run count + 1 times, hence the `- 1`s.

/// System clock frequency (RP2040 default)
pub const SYS_CLK_HZ: u32 = 125_000_000;

/// VGA 640x480 pixel clock
pub const PIXEL_CLOCK_HZ: u32 = 25_000_000;

/// Visible pixels per line
pub const H_VISIBLE: u32 = 640;

/// Pixels of horizontal front porch
pub const H_FRONT_PORCH: u32 = 16;

/// Visible lines per frame
pub const V_VISIBLE: u32 = 480;

/// Pixel clocks hsync stays high before the pulse (active + front porch)
pub const H_ACTIVE: u32 = H_VISIBLE + H_FRONT_PORCH - 1;

/// Lines vsync spends in the active region
pub const V_ACTIVE: u32 = V_VISIBLE - 1;

/// Frame buffer bytes per line (two pixels per byte)
pub const RGB_ACTIVE: u32 = H_VISIBLE / 2 - 1;

/// Calculate the clock divider for a target state machine frequency
///
/// Returns (integer_part, fractional_part) for the 16.8 fixed-point divider.
pub fn calc_clock_divider(sys_clk_hz: u32, target_hz: u32) -> (u16, u8) {
    if target_hz == 0 {
        return (0xFFFF, 0xFF); // Maximum divider = slowest clock
    }

    // divider * 256 = (SYS_CLK * 256) / target
    let divider_x256 = (sys_clk_hz as u64 * 256) / (target_hz as u64);

    let int_part = (divider_x256 / 256).min(0xFFFF) as u16;
    let frac_part = (divider_x256 % 256) as u8;

    // Below 1.0 the state machine cannot run faster than the system clock
    if int_part == 0 {
        return (1, 0);
    }

    (int_part, frac_part)
}

/// Divider as raw U24F8 bits, integer in the upper 24 bits
pub fn divider_bits(sys_clk_hz: u32, target_hz: u32) -> u32 {
    let (int_div, frac_div) = calc_clock_divider(sys_clk_hz, target_hz);
    ((int_div as u32) << 8) | (frac_div as u32)
}

/// System clocks the rgb program spends on one pixel
pub const fn cycles_per_pixel(sys_clk_hz: u32) -> u32 {
    sys_clk_hz / PIXEL_CLOCK_HZ
}
