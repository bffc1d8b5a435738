//! Shared fixtures for unit tests

use core::cell::Cell;
use std::vec::Vec;

use crate::canvas::YieldFn;
use crate::font::Font;
use crate::framebuffer::BUFFER_SIZE;
use crate::traits::{Clock, Transport};

/// Font covering ' '..='A', 8px high
///
/// Space is 3px and blank, 'A' is 5px and solid, everything else is 4px
/// and solid.
pub fn test_font() -> Font {
    const FIRST: u8 = b' ';
    const LAST: u8 = b'A';
    const HEIGHT: usize = 8;

    let widths: Vec<u8> = (FIRST..=LAST)
        .map(|c| match c {
            b' ' => 3,
            b'A' => 5,
            _ => 4,
        })
        .collect();

    let mut blob = Vec::new();
    blob.push(widths.len() as u8);
    blob.push(FIRST);
    blob.push(HEIGHT as u8);
    blob.extend_from_slice(&widths);

    for (c, &width) in (FIRST..=LAST).zip(widths.iter()) {
        let bits = width as usize * HEIGHT;
        let mut glyph = std::vec![0u8; bits / 8 + 1];
        if c != b' ' {
            for k in 0..bits {
                glyph[k / 8] |= 1 << (k % 8);
            }
        }
        blob.extend_from_slice(&glyph);
    }

    Font::new(Box::leak(blob.into_boxed_slice()))
}

/// Transport that records everything sent to it
#[derive(Default)]
pub struct RecordingTransport {
    pub begun: bool,
    pub commands: Vec<u8>,
    pub frames: Vec<[u8; BUFFER_SIZE]>,
    pub fail_frames: bool,
}

/// Error raised by [`RecordingTransport`] when told to fail
#[derive(Debug, PartialEq, Eq)]
pub struct BusDown;

impl Transport for RecordingTransport {
    type Error = BusDown;

    fn begin(&mut self) -> Result<(), Self::Error> {
        self.begun = true;
        Ok(())
    }

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.commands.push(command);
        Ok(())
    }

    fn write_frame(
        &mut self,
        frame: &[u8; BUFFER_SIZE],
        yield_now: YieldFn,
    ) -> Result<(), Self::Error> {
        if self.fail_frames {
            return Err(BusDown);
        }
        self.frames.push(*frame);
        yield_now();
        Ok(())
    }
}

/// Clock driven by the test through a shared cell
pub struct TestClock<'a>(pub &'a Cell<u64>);

impl Clock for TestClock<'_> {
    fn now_ms(&mut self) -> u64 {
        self.0.get()
    }
}
