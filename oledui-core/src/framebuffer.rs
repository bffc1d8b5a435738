//! Page-packed monochrome frame buffer
//!
//! The SH1106 addresses its RAM in pages: each byte holds 8 vertically
//! stacked pixels of one column, least significant bit on top. The buffer
//! mirrors that layout so it can be streamed to the controller unchanged.

/// Display width in pixels
pub const WIDTH: usize = 128;

/// Display height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// Frame buffer size in bytes
pub const BUFFER_SIZE: usize = WIDTH * PAGES;

/// How a pixel write combines with the existing buffer bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Light the pixel
    #[default]
    White,
    /// Turn the pixel off
    Black,
    /// Flip the pixel
    Inverse,
}

/// 128x64 bit-packed frame buffer
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("lit", &self.lit_count())
            .finish()
    }
}

impl FrameBuffer {
    /// Create a cleared frame buffer
    pub const fn new() -> Self {
        Self {
            bytes: [0; BUFFER_SIZE],
        }
    }

    /// Byte index and bit mask for a pixel, `None` when off-screen
    fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((x + (y / 8) * WIDTH, 1 << (y & 7)))
    }

    /// Zero every pixel
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Combine one pixel into the buffer; off-screen writes are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some((index, mask)) = Self::locate(x, y) {
            let byte = &mut self.bytes[index];
            match color {
                Color::White => *byte |= mask,
                Color::Black => *byte &= !mask,
                Color::Inverse => *byte ^= mask,
            }
        }
    }

    /// Read one pixel; off-screen pixels read as unlit
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        Self::locate(x, y)
            .map(|(index, mask)| self.bytes[index] & mask != 0)
            .unwrap_or(false)
    }

    /// Raw buffer in controller page order
    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }

    /// One page (8 rows) of the buffer
    ///
    /// Returns `None` for `page >= PAGES`.
    pub fn page(&self, page: usize) -> Option<&[u8]> {
        self.bytes.get(page * WIDTH..(page + 1) * WIDTH)
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_page_layout() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(3, 10, Color::White);

        // Row 10 is page 1, bit 2
        assert_eq!(fb.as_bytes()[3 + WIDTH], 0b0000_0100);
        assert_eq!(fb.lit_count(), 1);
        assert_eq!(fb.page(1).unwrap()[3], 0b0000_0100);
        assert!(fb.page(PAGES).is_none());
    }

    #[test]
    fn test_corners() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, 0, Color::White);
        fb.set_pixel(127, 63, Color::White);

        assert_eq!(fb.as_bytes()[0], 0x01);
        assert_eq!(fb.as_bytes()[BUFFER_SIZE - 1], 0x80);
    }

    #[test]
    fn test_clear() {
        let mut fb = FrameBuffer::new();
        for x in 0..WIDTH as i32 {
            fb.set_pixel(x, x / 2, Color::White);
        }
        assert!(fb.lit_count() > 0);

        fb.clear();
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    proptest! {
        #[test]
        fn prop_out_of_bounds_is_noop(
            x in prop_oneof![-500i32..0, WIDTH as i32..500],
            y in -500i32..500,
        ) {
            let mut fb = FrameBuffer::new();
            fb.set_pixel(5, 5, Color::White);
            let before = fb.clone();

            fb.set_pixel(x, y, Color::White);
            fb.set_pixel(y, x, Color::Inverse);
            prop_assert_eq!(&fb, &before);
        }

        #[test]
        fn prop_white_then_black_clears(x in 0i32..WIDTH as i32, y in 0i32..HEIGHT as i32) {
            let mut fb = FrameBuffer::new();
            fb.set_pixel(x, y, Color::White);
            prop_assert!(fb.pixel(x, y));
            fb.set_pixel(x, y, Color::Black);
            prop_assert!(!fb.pixel(x, y));
            prop_assert_eq!(fb.lit_count(), 0);
        }

        #[test]
        fn prop_double_inverse_restores(
            x in 0i32..WIDTH as i32,
            y in 0i32..HEIGHT as i32,
            lit in any::<bool>(),
        ) {
            let mut fb = FrameBuffer::new();
            if lit {
                fb.set_pixel(x, y, Color::White);
            }
            let before = fb.clone();

            fb.set_pixel(x, y, Color::Inverse);
            prop_assert_eq!(fb.pixel(x, y), !lit);
            fb.set_pixel(x, y, Color::Inverse);
            prop_assert_eq!(&fb, &before);
        }
    }
}
