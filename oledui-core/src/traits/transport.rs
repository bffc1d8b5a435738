//! Controller transport trait

use crate::canvas::YieldFn;
use crate::framebuffer::BUFFER_SIZE;

/// Link to an SH1106 controller
///
/// Abstracts how command bytes and frame data reach the panel. Framing of
/// the frame data is transport policy: an I2C link batches the buffer into
/// data blocks, while an SPI link addresses every page and column.
///
/// Errors are reported, never retried; recovering the bus is up to the
/// implementation or its owner.
pub trait Transport {
    /// Error type for bus operations
    type Error;

    /// Bring the link up before the controller init sequence
    fn begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Send one byte in command mode
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send a run of command bytes in order
    fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
        for &command in commands {
            self.send_command(command)?;
        }
        Ok(())
    }

    /// Transfer a complete frame buffer in page order
    ///
    /// `yield_now` should be called between bus chunks.
    fn write_frame(
        &mut self,
        frame: &[u8; BUFFER_SIZE],
        yield_now: YieldFn,
    ) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn begin(&mut self) -> Result<(), Self::Error> {
        (**self).begin()
    }

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        (**self).send_command(command)
    }

    fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
        (**self).send_commands(commands)
    }

    fn write_frame(
        &mut self,
        frame: &[u8; BUFFER_SIZE],
        yield_now: YieldFn,
    ) -> Result<(), Self::Error> {
        (**self).write_frame(frame, yield_now)
    }
}
