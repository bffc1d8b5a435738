//! Packed bitmap font descriptor
//!
//! Font blob layout:
//! - byte 0: number of glyphs
//! - byte 1: character code of the first glyph
//! - byte 2: glyph height in pixels
//! - `glyph count` bytes: width of each glyph in pixels
//! - glyph bitmaps, back to back, each `(width * height) / 8 + 1` bytes
//!
//! Glyph bits are row-major over the glyph box: bit `k` of the bitmap
//! (byte `k / 8`, bit `k % 8`) is the pixel at `(k % width, k / width)`.
//! The trailing byte of each glyph is padding.

const GLYPH_COUNT_POS: usize = 0;
const FIRST_CHAR_POS: usize = 1;
const HEIGHT_POS: usize = 2;
const WIDTH_TABLE_POS: usize = 3;

/// Bytes occupied by one glyph bitmap
const fn glyph_len(width: u8, height: u8) -> usize {
    (width as usize * height as usize) / 8 + 1
}

/// Reference to a packed font blob
///
/// Cheap to copy; the blob itself is never modified.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Font {
    data: &'static [u8],
}

impl core::fmt::Debug for Font {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Font")
            .field("glyphs", &self.glyph_count())
            .field("first_char", &self.first_char())
            .field("height", &self.height())
            .finish()
    }
}

/// One glyph bitmap borrowed from a font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    /// Advance width in pixels
    pub width: u8,
    /// Bitmap bytes, padding byte included
    pub bytes: &'a [u8],
}

impl Glyph<'_> {
    /// Position inside the glyph box of bit `bit` of byte `byte`
    pub fn bit_position(&self, byte: usize, bit: usize) -> (i32, i32) {
        let k = byte * 8 + bit;
        let width = (self.width as usize).max(1);
        ((k % width) as i32, (k / width) as i32)
    }
}

impl Font {
    /// Wrap a packed font blob
    pub const fn new(data: &'static [u8]) -> Self {
        Self { data }
    }

    fn byte(&self, pos: usize) -> u8 {
        self.data.get(pos).copied().unwrap_or(0)
    }

    /// Number of glyphs in the font
    pub fn glyph_count(&self) -> u8 {
        self.byte(GLYPH_COUNT_POS)
    }

    /// Character code of the first glyph
    pub fn first_char(&self) -> u8 {
        self.byte(FIRST_CHAR_POS)
    }

    /// Glyph height in pixels, also the line height
    pub fn height(&self) -> u8 {
        self.byte(HEIGHT_POS)
    }

    /// Glyph index for a decoded character, `None` outside the font
    fn index(&self, code: u8) -> Option<usize> {
        let index = code.checked_sub(self.first_char())? as usize;
        (index < self.glyph_count() as usize).then_some(index)
    }

    /// Advance width of a decoded character
    ///
    /// Characters the font does not cover have zero width.
    pub fn char_width(&self, code: u8) -> u8 {
        self.index(code)
            .map(|index| self.byte(WIDTH_TABLE_POS + index))
            .unwrap_or(0)
    }

    /// Bitmap of a decoded character
    ///
    /// Returns `None` for characters outside the font or when the blob is
    /// shorter than its header claims.
    pub fn glyph(&self, code: u8) -> Option<Glyph<'static>> {
        let index = self.index(code)?;
        let height = self.height();

        let start = (0..index).fold(
            WIDTH_TABLE_POS + self.glyph_count() as usize,
            |offset, m| offset + glyph_len(self.byte(WIDTH_TABLE_POS + m), height),
        );
        let width = self.byte(WIDTH_TABLE_POS + index);
        let bytes = self.data.get(start..start + glyph_len(width, height))?;

        Some(Glyph { width, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Three glyphs starting at '0', 8px high: widths 2, 3, 1
    static FONT: [u8; 3 + 3 + 3 + 4 + 2] = [
        3, b'0', 8, // header
        2, 3, 1, // widths
        0x11, 0x22, 0x00, // '0': 2*8/8 + 1 = 3 bytes
        0xA1, 0xA2, 0xA3, 0x00, // '1': 3*8/8 + 1 = 4 bytes
        0xFF, 0x00, // '2': 1*8/8 + 1 = 2 bytes
    ];

    #[test]
    fn test_header() {
        let font = Font::new(&FONT);
        assert_eq!(font.glyph_count(), 3);
        assert_eq!(font.first_char(), b'0');
        assert_eq!(font.height(), 8);
    }

    #[test]
    fn test_char_width() {
        let font = Font::new(&FONT);
        assert_eq!(font.char_width(b'0'), 2);
        assert_eq!(font.char_width(b'1'), 3);
        assert_eq!(font.char_width(b'2'), 1);
        // Outside the font
        assert_eq!(font.char_width(b'/'), 0);
        assert_eq!(font.char_width(b'3'), 0);
    }

    #[test]
    fn test_glyph_offsets_skip_padding() {
        let font = Font::new(&FONT);

        let zero = font.glyph(b'0').unwrap();
        assert_eq!(zero.width, 2);
        assert_eq!(zero.bytes, &[0x11, 0x22, 0x00]);

        let one = font.glyph(b'1').unwrap();
        assert_eq!(one.bytes, &[0xA1, 0xA2, 0xA3, 0x00]);

        let two = font.glyph(b'2').unwrap();
        assert_eq!(two.bytes, &[0xFF, 0x00]);

        assert!(font.glyph(b'9').is_none());
    }

    #[test]
    fn test_truncated_blob() {
        static SHORT: [u8; 6] = [1, b'A', 8, 4, 0xFF, 0xFF];
        let font = Font::new(&SHORT);
        assert_eq!(font.char_width(b'A'), 4);
        // Glyph needs 5 bytes, only 2 present
        assert!(font.glyph(b'A').is_none());

        let empty = Font::new(&[]);
        assert_eq!(empty.glyph_count(), 0);
        assert_eq!(empty.char_width(b'A'), 0);
    }

    #[test]
    fn test_bit_position_row_major() {
        let glyph = Glyph {
            width: 3,
            bytes: &[0, 0],
        };
        assert_eq!(glyph.bit_position(0, 0), (0, 0));
        assert_eq!(glyph.bit_position(0, 2), (2, 0));
        assert_eq!(glyph.bit_position(0, 3), (0, 1));
        assert_eq!(glyph.bit_position(1, 1), (0, 3));
    }
}
