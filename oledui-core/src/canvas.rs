//! Drawing surface
//!
//! A [`Canvas`] owns the frame buffer together with the drawing state
//! (colour, font, alignment, text decoder). Every primitive clips silently:
//! pixels falling outside the 128x64 area are simply not drawn.

use crate::font::Font;
use core::ops::Range;

use crate::framebuffer::{Color, FrameBuffer, HEIGHT, WIDTH};
use crate::text::{LineWrapper, TextAlign, Utf8Ascii};

/// Cooperative yield hook, called inside long rasterization loops
pub type YieldFn = fn();

/// Default yield hook
pub fn no_yield() {}

/// Part of `[start, start + len)` that lies inside `[0, limit)`
fn visible(start: i32, len: i32, limit: usize) -> Range<i32> {
    start.max(0)..start.saturating_add(len).min(limit as i32)
}

/// Bytes covered by a `width` x `height` image at 8 pixels per byte
fn byte_count(width: i64, height: i32) -> usize {
    usize::try_from(width * i64::from(height) / 8).unwrap_or(usize::MAX)
}

/// Frame buffer plus drawing state
#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: FrameBuffer,
    color: Color,
    font: Option<Font>,
    align: TextAlign,
    decoder: Utf8Ascii,
    yield_now: YieldFn,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a blank canvas drawing in white, left aligned, without a font
    pub const fn new() -> Self {
        Self {
            buffer: FrameBuffer::new(),
            color: Color::White,
            font: None,
            align: TextAlign::Left,
            decoder: Utf8Ascii::new(),
            yield_now: no_yield,
        }
    }

    /// Frame buffer contents
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Set the combine mode for subsequent drawing
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Current combine mode
    pub fn color(&self) -> Color {
        self.color
    }

    /// Select the font used by text operations
    pub fn set_font(&mut self, font: Font) {
        self.font = Some(font);
    }

    /// Currently selected font
    pub fn font(&self) -> Option<Font> {
        self.font
    }

    /// Set the alignment used by `draw_string`
    pub fn set_text_alignment(&mut self, align: TextAlign) {
        self.align = align;
    }

    /// Current text alignment
    pub fn text_alignment(&self) -> TextAlign {
        self.align
    }

    /// Install the cooperative yield hook
    pub fn set_yield_hook(&mut self, hook: YieldFn) {
        self.yield_now = hook;
    }

    /// Current yield hook
    pub fn yield_hook(&self) -> YieldFn {
        self.yield_now
    }

    /// Zero the whole buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Draw one pixel in the current colour
    pub fn set_pixel(&mut self, x: i32, y: i32) {
        self.buffer.set_pixel(x, y, self.color);
    }

    /// Read back one pixel
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        self.buffer.pixel(x, y)
    }

    /// Draw the set bits of `data` as a column of 8 pixels, bit 0 at `y`
    pub fn set_char(&mut self, x: i32, y: i32, data: u8) {
        for i in 0..8 {
            if data & (1 << i) != 0 {
                self.set_pixel(x, y.saturating_add(i));
            }
        }
    }

    /// Rectangle outline
    ///
    /// The right and bottom edges lie at `x + width` and `y + height`, so
    /// the outline spans `width + 1` by `height + 1` pixels.
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let bottom = y.saturating_add(height);
        let right = x.saturating_add(width);
        for i in visible(x, width, WIDTH) {
            self.set_pixel(i, y);
            self.set_pixel(i, bottom);
        }
        for i in visible(y, height, HEIGHT) {
            self.set_pixel(x, i);
            self.set_pixel(right, i);
        }
    }

    /// Solid rectangle covering `[x, x + width) x [y, y + height)`
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        for i in visible(x, width, WIDTH) {
            for j in visible(y, height, HEIGHT) {
                self.set_pixel(i, j);
            }
        }
    }

    /// Draw a page-packed bitmap where a cleared bit is lit
    ///
    /// `data` holds `width * height / 8` bytes: runs of `width` column
    /// bytes, one run per 8-row band, least significant bit on top.
    pub fn draw_bitmap(&mut self, x: i32, y: i32, width: i32, height: i32, data: &[u8]) {
        if width <= 0 || height <= 0 {
            return;
        }
        let len = byte_count(i64::from(width), height);
        for (i, &byte) in data.iter().take(len).enumerate() {
            let column = !byte;
            let i = i as i32;
            for j in 0..8 {
                if column & (1 << j) != 0 {
                    self.set_pixel(
                        x.saturating_add(i % width),
                        y.saturating_add((i / width) * 8 + j),
                    );
                }
            }
        }
    }

    /// Draw an XBM image where a set bit is lit
    ///
    /// Rows are padded to whole bytes, least significant bit leftmost.
    pub fn draw_xbm(&mut self, x: i32, y: i32, width: i32, height: i32, data: &[u8]) {
        if width <= 0 || height <= 0 {
            return;
        }
        let row_bits = (i64::from(width) + 7) / 8 * 8;
        let len = byte_count(row_bits, height);
        for (i, &byte) in data.iter().take(len).enumerate() {
            let i = i as i64;
            for j in 0..8 {
                if byte & (1 << j) != 0 {
                    // Both fit in i32: the column is below `row_bits` and
                    // the row is bounded by `data.len()`
                    let column = ((i * 8 + j) % row_bits) as i32;
                    let row = (8 * i / row_bits) as i32;
                    self.set_pixel(x.saturating_add(column), y.saturating_add(row));
                }
            }
        }
    }

    /// Width of `text` folded through `decoder`, 0 without a font
    fn folded_width(font: Option<Font>, decoder: &mut Utf8Ascii, text: &str) -> i32 {
        let mut width: i32 = 0;
        for byte in text.bytes() {
            if let (Some(c), Some(font)) = (decoder.fold(byte), font) {
                width = width.saturating_add(font.char_width(c) as i32);
            }
        }
        width
    }

    /// Width in pixels of `text` in the current font
    ///
    /// Advances the text decoder like drawing does.
    pub fn string_width(&mut self, text: &str) -> i32 {
        Self::folded_width(self.font, &mut self.decoder, text)
    }

    /// Draw `text` at `(x, y)` using the current font and alignment
    ///
    /// The whole string is measured for alignment, however long it is.
    pub fn draw_string(&mut self, x: i32, y: i32, text: &str) {
        let Some(font) = self.font else {
            return;
        };
        // Measure on a copy so drawing folds from the same decoder state
        let mut lookahead = self.decoder;
        let width = Self::folded_width(Some(font), &mut lookahead, text);
        let start_x = self.align.start_x(x, width);

        let mut cursor: i32 = 0;
        for byte in text.bytes() {
            let Some(c) = self.decoder.fold(byte) else {
                continue;
            };
            let Some(glyph) = font.glyph(c) else {
                continue;
            };
            if glyph.width > 0 {
                let glyph_x = start_x.saturating_add(cursor);
                for (i, &bits) in glyph.bytes.iter().enumerate() {
                    for bit in 0..8 {
                        if bits & (1 << bit) != 0 {
                            let (gx, gy) = glyph.bit_position(i, bit);
                            self.set_pixel(glyph_x.saturating_add(gx), y.saturating_add(gy));
                        }
                    }
                    (self.yield_now)();
                }
            }
            cursor = cursor.saturating_add(glyph.width as i32);
        }
    }

    /// Draw `text` word-wrapped to `max_width`, one font height per line
    pub fn draw_string_max_width(&mut self, x: i32, y: i32, max_width: i32, text: &str) {
        let Some(font) = self.font else {
            return;
        };
        let line_height = font.height() as i32;

        let mut wrapper = LineWrapper::new(text, max_width);
        let mut line_number = 0;
        while let Some(line) = wrapper.next_line(|s| self.string_width(s)) {
            self.draw_string(x, y.saturating_add(line_number * line_height), line);
            line_number += 1;
        }
    }
}
