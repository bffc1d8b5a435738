//! Text decoding and layout helpers
//!
//! Fonts are indexed by single-byte character codes. UTF-8 input is folded
//! into that space by [`Utf8Ascii`], which understands exactly the Latin-1
//! supplement and the Euro sign; everything else outside ASCII is dropped.

use heapless::Vec;

/// Capacity of [`DecodedText`]
pub const MAX_TEXT_LEN: usize = 128;

/// Decoded single-byte text
pub type DecodedText = Vec<u8, MAX_TEXT_LEN>;

/// Horizontal alignment relative to the x coordinate given to `draw_string`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlign {
    /// Text starts at x
    #[default]
    Left,
    /// Text is centered on x
    Center,
    /// Text ends at x
    Right,
}

impl TextAlign {
    /// Left edge of a run of `width` pixels anchored at `x`
    pub fn start_x(self, x: i32, width: i32) -> i32 {
        match self {
            TextAlign::Left => x,
            TextAlign::Center => x.saturating_sub(width / 2),
            TextAlign::Right => x.saturating_sub(width),
        }
    }
}

/// Stateful UTF-8 to single-byte folder
///
/// Lead bytes are remembered across calls, so a sequence split between two
/// strings still folds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Utf8Ascii {
    last: u8,
}

impl Utf8Ascii {
    /// Create a decoder with no pending lead byte
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Forget any pending lead byte
    pub fn reset(&mut self) {
        self.last = 0;
    }

    /// Fold one input byte
    ///
    /// Returns `None` when the byte produces no output character.
    pub fn fold(&mut self, byte: u8) -> Option<u8> {
        if byte < 0x80 {
            self.last = 0;
            return (byte != 0).then_some(byte);
        }

        let last = self.last;
        self.last = byte;

        let folded = match (last, byte) {
            (0xC2, _) => byte,
            (0xC3, _) => byte | 0xC0,
            // Euro sign, E2 82 AC
            (0x82, 0xAC) => 0x80,
            _ => 0,
        };
        (folded != 0).then_some(folded)
    }

    /// Fold a whole string, keeping at most [`MAX_TEXT_LEN`] characters
    ///
    /// Drawing and measuring fold byte by byte and are not bound by the cap.
    pub fn decode(&mut self, text: &str) -> DecodedText {
        let mut out = DecodedText::new();
        for byte in text.bytes() {
            if let Some(c) = self.fold(byte) {
                if out.push(c).is_err() {
                    warn!("text truncated to {} chars", MAX_TEXT_LEN);
                    break;
                }
            }
        }
        out
    }
}

/// Greedy word wrapper
///
/// Break candidates are spaces and hyphens. Each line is the longest run
/// up to a candidate whose measured width still fits; the breaking
/// character itself is consumed. Whatever follows the last break is
/// always returned as a final line, so it can be empty, and it overflows
/// when it holds a single word wider than the line.
///
/// Widths are measured through a caller-supplied closure so the caller's
/// decoder state advances exactly as when drawing.
#[derive(Debug, Clone)]
pub struct LineWrapper<'t> {
    text: &'t str,
    max_width: i32,
    /// Byte index of the next candidate scan position
    pos: usize,
    /// Start of the current line
    start: usize,
    /// End of the longest fitting line found so far
    fit_end: Option<usize>,
    done: bool,
}

impl<'t> LineWrapper<'t> {
    /// Wrap `text` to `max_width` pixels
    pub fn new(text: &'t str, max_width: i32) -> Self {
        Self {
            text,
            max_width,
            pos: 0,
            start: 0,
            fit_end: None,
            done: false,
        }
    }

    /// Next line, or `None` once the remainder has been returned
    pub fn next_line<F>(&mut self, mut measure: F) -> Option<&'t str>
    where
        F: FnMut(&str) -> i32,
    {
        if self.done {
            return None;
        }

        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() {
            let i = self.pos;
            self.pos += 1;

            if bytes[i] != b' ' && bytes[i] != b'-' {
                continue;
            }

            if measure(&self.text[self.start..i]) <= self.max_width {
                self.fit_end = Some(i);
            } else {
                // A word wider than the line is emitted on its own
                let end = self.fit_end.take().unwrap_or(i);
                let line = &self.text[self.start..end];
                self.start = end + 1;
                // The word between the two breaks ends at `i` even when it
                // is too wide itself
                if end < i {
                    self.fit_end = Some(i);
                }
                return Some(line);
            }
        }

        let remainder = self.text.get(self.start..).unwrap_or("");
        if let Some(end) = self.fit_end.take() {
            if measure(remainder) > self.max_width {
                let line = &self.text[self.start..end];
                self.start = end + 1;
                return Some(line);
            }
        }

        self.done = true;
        Some(remainder)
    }
}
