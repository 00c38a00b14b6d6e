//! Screen layout for the keyboard analyser
//!
//! The top 200 lines hold the keyboard artwork. Text lives on the 8x8
//! character grid below it:
//!
//! ```text
//! row 32   Keyboard State = Running      Key Scan Code = 0x45 (69) State Pressed
//! row 40   Reset Warning = 0
//! row 42   Last Key Bad = 0
//! ...      one line per status code, every other row
//! row 54   Interrupt = 0 (unused)
//! row 58   Link Stalls = 3               (only once a stall happened)
//! ```

use core::fmt::Write;

use heapless::String;
use keyscope_display::{Canvas, Color, CELL_SIZE};
use keyscope_protocol::{KeyState, ScanCode, StatusCode};

use super::histogram::StatusHistogram;
use super::tracker::Observation;
use crate::config::MonitorColors;
use crate::layout::KeyLayout;

/// Size of the keyboard artwork at the top of the screen
pub const KEYBOARD_WIDTH: u16 = 640;
pub const KEYBOARD_HEIGHT: u16 = 200;

const STATE_CELL: (u16, u16) = (2, 32);
const KEY_INFO_CELL: (u16, u16) = (30, 32);
const RESET_WARNING_CELL: (u16, u16) = (2, 40);
const STATUS_FIRST_ROW: u16 = 42;
const STALLS_CELL: (u16, u16) = (2, 58);

const LINE_LEN: usize = 64;

/// Whether the keyboard is held in reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    Running,
    Reset,
}

impl LinkState {
    /// Status text, padded to equal width so a redraw covers the old text
    pub const fn label(self) -> &'static str {
        match self {
            LinkState::Running => "Keyboard State = Running",
            LinkState::Reset => "Keyboard State = RESET!!",
        }
    }
}

/// Draws monitor output onto a `Canvas`
pub struct Renderer<'a> {
    layout: KeyLayout<'a>,
    colors: MonitorColors,
}

impl<'a> Renderer<'a> {
    pub fn new(layout: KeyLayout<'a>, colors: MonitorColors) -> Self {
        Self { layout, colors }
    }

    /// Clear the screen to the background color
    pub fn clear<C: Canvas>(&self, canvas: &mut C) {
        let (width, height) = canvas.dimensions();
        canvas.fill_rect(0, 0, width, height, self.colors.background);
    }

    /// Draw the whole keyboard with every key idle
    pub fn draw_keyboard<C: Canvas>(&self, canvas: &mut C) {
        canvas.copy_rect(
            0,
            0,
            KEYBOARD_WIDTH,
            KEYBOARD_HEIGHT,
            &self.colors.idle_palette(),
        );
    }

    pub fn draw_link_state<C: Canvas>(&self, canvas: &mut C, state: LinkState) {
        let color = match state {
            LinkState::Running => self.colors.info,
            LinkState::Reset => self.colors.alert,
        };
        canvas.draw_text(STATE_CELL.0, STATE_CELL.1, state.label(), color);
    }

    /// Recolor one key and print its scan code
    pub fn draw_key<C: Canvas>(&self, canvas: &mut C, code: ScanCode, state: KeyState) {
        let palette = match state {
            KeyState::Pressed => self.colors.pressed_palette(),
            KeyState::Released => self.colors.released_palette(),
        };
        if let Some(shape) = self.layout.shape(code) {
            for rect in shape.rects() {
                canvas.copy_rect(rect.x, rect.y, rect.width, rect.height, &palette);
            }
        }

        let (width, _) = canvas.dimensions();
        let x = KEY_INFO_CELL.0 * CELL_SIZE;
        let y = KEY_INFO_CELL.1 * CELL_SIZE;
        canvas.fill_rect(
            x,
            y,
            width.saturating_sub(x),
            CELL_SIZE,
            self.colors.background,
        );

        let mut line: String<LINE_LEN> = String::new();
        let _ = write!(
            line,
            "Key Scan Code = 0x{:02X} ({}) State {}",
            code.value(),
            code.value(),
            state.label()
        );
        canvas.draw_text(KEY_INFO_CELL.0, KEY_INFO_CELL.1, &line, self.colors.info);
    }

    /// Print every status counter
    pub fn draw_status<C: Canvas>(&self, canvas: &mut C, histogram: &StatusHistogram) {
        let mut line: String<LINE_LEN> = String::new();
        let _ = write!(
            line,
            "{} = {}",
            StatusCode::ResetWarning.label(),
            histogram.count(StatusCode::ResetWarning)
        );
        canvas.draw_text(
            RESET_WARNING_CELL.0,
            RESET_WARNING_CELL.1,
            &line,
            self.colors.status,
        );

        let lines = histogram
            .iter()
            .filter(|(status, _)| *status != StatusCode::ResetWarning);
        for (i, (status, count)) in lines.enumerate() {
            line.clear();
            let _ = write!(line, "{} = {}", status.label(), count);
            if status.is_unused() {
                let _ = line.push_str(" (unused)");
            }
            let row = STATUS_FIRST_ROW + 2 * i as u16;
            canvas.draw_text(2, row, &line, self.colors.status);
        }
    }

    /// Print the stall counter, if there is anything to show
    pub fn draw_stalls<C: Canvas>(&self, canvas: &mut C, stalls: u32) {
        if stalls == 0 {
            return;
        }
        let mut line: String<LINE_LEN> = String::new();
        let _ = write!(line, "Link Stalls = {}", stalls);
        canvas.draw_text(STALLS_CELL.0, STALLS_CELL.1, &line, self.colors.alert);
    }

    /// Draw whatever an observation changed
    pub fn render<C: Canvas>(
        &self,
        canvas: &mut C,
        observation: Observation,
        histogram: &StatusHistogram,
    ) {
        match observation {
            Observation::Key { code, state } => {
                self.draw_key(canvas, code, state);
                if code.is_reset_warning() {
                    self.draw_status(canvas, histogram);
                }
            }
            Observation::Status(_) => self.draw_status(canvas, histogram),
            Observation::Unchanged | Observation::Ignored => {}
        }
    }

    /// Full redraw after the keyboard comes out of reset
    pub fn draw_running<C: Canvas>(&self, canvas: &mut C, histogram: &StatusHistogram) {
        self.draw_keyboard(canvas);
        self.draw_link_state(canvas, LinkState::Running);
        self.draw_status(canvas, histogram);
    }
}
