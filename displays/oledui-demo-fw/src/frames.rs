//! Demo frames and the uptime overlay

use core::fmt::Write;

use embassy_time::Instant;
use heapless::String;
use oledui_core::{Canvas, Color, Frame, Overlay, TextAlign, UiState};

use crate::font::FONT_5X7;

/// 16x16 XBM board outline with a lit centre
#[rustfmt::skip]
const BOARD_ICON: [u8; 32] = [
    0xFC, 0x3F, 0x02, 0x40, 0x01, 0x80, 0x01, 0x80,
    0x31, 0x8C, 0x31, 0x8C, 0x01, 0x80, 0xC1, 0x83,
    0xC1, 0x83, 0x01, 0x80, 0x31, 0x8C, 0x31, 0x8C,
    0x01, 0x80, 0x01, 0x80, 0x02, 0x40, 0xFC, 0x3F,
];

/// Title page with centered text
pub struct Title;

impl Frame for Title {
    fn render(&mut self, canvas: &mut Canvas, _state: &UiState, x: i32, y: i32) -> bool {
        canvas.set_font(FONT_5X7);
        canvas.set_text_alignment(TextAlign::Center);
        canvas.draw_string(64 + x, 12 + y, "OLEDUI");
        canvas.draw_string(64 + x, 28 + y, "SH1106 DEMO");
        canvas.set_text_alignment(TextAlign::Left);
        false
    }
}

/// Word-wrapped paragraph
pub struct About;

impl Frame for About {
    fn render(&mut self, canvas: &mut Canvas, _state: &UiState, x: i32, y: i32) -> bool {
        canvas.set_font(FONT_5X7);
        canvas.draw_string_max_width(
            x,
            10 + y,
            120,
            "TURN THE KNOB TO SLIDE. PRESS TO PAUSE, HOLD TO INVERT.",
        );
        false
    }
}

/// Primitive showcase
pub struct Shapes;

impl Frame for Shapes {
    fn render(&mut self, canvas: &mut Canvas, _state: &UiState, x: i32, y: i32) -> bool {
        canvas.draw_rect(4 + x, 10 + y, 30, 30);
        canvas.fill_rect(40 + x, 10 + y, 30, 30);

        // Punch a hole through the filled square
        canvas.set_color(Color::Inverse);
        canvas.fill_rect(48 + x, 18 + y, 14, 14);
        canvas.set_color(Color::White);

        canvas.draw_xbm(84 + x, 18 + y, 16, 16, &BOARD_ICON);
        false
    }
}

/// Live uptime bar, repainted every tick
pub struct Activity;

impl Frame for Activity {
    fn render(&mut self, canvas: &mut Canvas, state: &UiState, x: i32, y: i32) -> bool {
        let phase = (state.last_update / 20 % 100) as i32;
        canvas.set_font(FONT_5X7);
        canvas.draw_string(4 + x, 10 + y, "ACTIVITY");
        canvas.draw_rect(4 + x, 26 + y, 101, 10);
        canvas.fill_rect(5 + x, 27 + y, phase, 9);
        true
    }
}

/// `MM:SS` uptime in the top right corner
pub struct Uptime;

impl Overlay for Uptime {
    fn render(&mut self, canvas: &mut Canvas, _state: &UiState) -> bool {
        let secs = Instant::now().as_secs();
        let mut text: String<8> = String::new();
        // Fits: at most "9999:59"
        write!(text, "{:02}:{:02}", (secs / 60) % 10_000, secs % 60).ok();

        canvas.set_font(FONT_5X7);
        canvas.set_text_alignment(TextAlign::Right);
        canvas.draw_string(127, 0, &text);
        canvas.set_text_alignment(TextAlign::Left);
        // The seconds move on between ticks
        true
    }
}
