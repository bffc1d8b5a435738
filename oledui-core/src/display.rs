//! SH1106 display
//!
//! Couples a [`Canvas`] with the [`Transport`] it is flushed through and
//! provides the controller-level commands (init, power, contrast, flip).
//! Drawing goes through the canvas, reachable by deref.

use core::ops::{Deref, DerefMut};

use crate::canvas::Canvas;
use crate::command;
use crate::traits::Transport;

/// 128x64 SH1106 display driven through a transport
#[derive(Debug)]
pub struct Display<T> {
    canvas: Canvas,
    transport: T,
}

impl<T> Deref for Display<T> {
    type Target = Canvas;

    fn deref(&self) -> &Canvas {
        &self.canvas
    }
}

impl<T> DerefMut for Display<T> {
    fn deref_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }
}

impl<T> Display<T> {
    /// Create a display with a blank canvas
    ///
    /// Nothing is sent until [`Display::init`].
    pub fn new(transport: T) -> Self {
        Self {
            canvas: Canvas::new(),
            transport,
        }
    }

    /// Drawing surface
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Mutable drawing surface
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the underlying transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Split into canvas and transport
    pub fn into_parts(self) -> (Canvas, T) {
        (self.canvas, self.transport)
    }
}

impl<T: Transport> Display<T> {
    /// Bring up the link, configure the controller and blank the panel
    pub fn init(&mut self) -> Result<(), T::Error> {
        self.transport.begin()?;
        self.transport.send_commands(&command::INIT_SEQUENCE)?;
        self.reset_display()?;
        debug!("SH1106 initialized");
        Ok(())
    }

    /// Bring the link up again after the bus was reset or re-clocked
    ///
    /// The controller keeps its configuration and RAM.
    pub fn reconnect(&mut self) -> Result<(), T::Error> {
        self.transport.begin()
    }

    /// Turn the panel off, push a blank frame and turn it back on
    pub fn reset_display(&mut self) -> Result<(), T::Error> {
        self.display_off()?;
        self.canvas.clear();
        self.display()?;
        self.display_on()
    }

    /// Send a raw command byte
    pub fn send_command(&mut self, command: u8) -> Result<(), T::Error> {
        self.transport.send_command(command)
    }

    /// Wake the panel
    pub fn display_on(&mut self) -> Result<(), T::Error> {
        self.transport.send_command(command::DISPLAY_ON)
    }

    /// Put the panel to sleep; RAM contents are kept
    pub fn display_off(&mut self) -> Result<(), T::Error> {
        self.transport.send_command(command::DISPLAY_OFF)
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), T::Error> {
        self.transport
            .send_commands(&[command::SET_CONTRAST, contrast])
    }

    /// Invert display colours in the controller
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), T::Error> {
        self.transport.send_command(if inverted {
            command::INVERT_DISPLAY
        } else {
            command::NORMAL_DISPLAY
        })
    }

    /// Rotate the picture by 180 degrees
    pub fn flip_screen_vertically(&mut self) -> Result<(), T::Error> {
        self.transport.send_commands(&command::FLIP_VERTICAL)
    }

    /// Flush the frame buffer to the panel
    pub fn display(&mut self) -> Result<(), T::Error> {
        self.transport.send_commands(&command::FRAME_PREAMBLE)?;
        let yield_now = self.canvas.yield_hook();
        self.transport
            .write_frame(self.canvas.buffer().as_bytes(), yield_now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{BusDown, RecordingTransport};

    #[test]
    fn test_init_sends_sequence_then_blank_frame() {
        let mut display = Display::new(RecordingTransport::default());
        display.fill_rect(0, 0, 10, 10);
        display.init().unwrap();

        let transport = display.transport();
        assert!(transport.begun);
        assert_eq!(&transport.commands[..27], &command::INIT_SEQUENCE);

        let rest = &transport.commands[27..];
        assert_eq!(rest[0], command::DISPLAY_OFF);
        assert_eq!(&rest[1..8], &command::FRAME_PREAMBLE);
        assert_eq!(rest[8], command::DISPLAY_ON);
        assert_eq!(rest.len(), 9);

        assert_eq!(transport.frames.len(), 1);
        assert!(transport.frames[0].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_display_sends_buffer() {
        let mut display = Display::new(RecordingTransport::default());
        display.set_pixel(0, 0);
        display.set_pixel(127, 63);
        display.display().unwrap();

        let frame = &display.transport().frames[0];
        assert_eq!(frame[0], 0x01);
        assert_eq!(frame[1023], 0x80);
        assert_eq!(display.transport().commands, command::FRAME_PREAMBLE);
    }

    #[test]
    fn test_controller_commands() {
        let mut display = Display::new(RecordingTransport::default());
        display.set_contrast(0x40).unwrap();
        display.set_inverted(true).unwrap();
        display.set_inverted(false).unwrap();
        display.flip_screen_vertically().unwrap();
        display.display_off().unwrap();
        display.display_on().unwrap();

        assert_eq!(
            display.transport().commands,
            [0x81, 0x40, 0xA7, 0xA6, 0xA0, 0xDA, 0x22, 0xC0, 0xAE, 0xAF]
        );
    }

    #[test]
    fn test_flush_error_propagates() {
        let mut transport = RecordingTransport {
            fail_frames: true,
            ..Default::default()
        };
        let mut display = Display::new(&mut transport);
        assert_eq!(display.display(), Err(BusDown));
        assert_eq!(display.init(), Err(BusDown));
    }

    #[test]
    fn test_reconnect_only_begins() {
        let mut display = Display::new(RecordingTransport::default());
        display.reconnect().unwrap();
        assert!(display.transport().begun);
        assert!(display.transport().commands.is_empty());
        assert!(display.transport().frames.is_empty());
    }

    #[test]
    fn test_into_parts_keeps_drawing() {
        let mut display = Display::new(RecordingTransport::default());
        display.fill_rect(0, 0, 2, 2);
        let (canvas, transport) = display.into_parts();
        assert_eq!(canvas.buffer().lit_count(), 4);
        assert!(transport.commands.is_empty());
    }
}
