//! I2C transport
//!
//! Every transaction starts with a control byte: `0x80` marks a single
//! command byte, `0x40` marks a run of display data. Frame data goes out
//! in 16-byte blocks so small I2C peripherals with limited FIFOs keep up.

use oledui_core::{Transport, YieldFn, BUFFER_SIZE};
use oledui_hal::I2cBus;

/// Default 7-bit address of SH1106 modules (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte: one command follows
const CONTROL_COMMAND: u8 = 0x80;

/// Control byte: display data follows
const CONTROL_DATA: u8 = 0x40;

/// Data bytes per frame transaction
const BLOCK_SIZE: usize = 16;

/// SH1106 on an I2C bus
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cTransport<B> {
    bus: B,
    address: u8,
}

impl<B> I2cTransport<B> {
    /// Transport at [`DEFAULT_ADDRESS`]
    pub fn new(bus: B) -> Self {
        Self::with_address(bus, DEFAULT_ADDRESS)
    }

    /// Transport at a specific address (0x3D with SA0 high)
    pub fn with_address(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the bus
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: I2cBus> Transport for I2cTransport<B> {
    type Error = B::Error;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.bus.write(self.address, &[CONTROL_COMMAND, command])
    }

    fn write_frame(
        &mut self,
        frame: &[u8; BUFFER_SIZE],
        yield_now: YieldFn,
    ) -> Result<(), Self::Error> {
        let mut block = [0u8; BLOCK_SIZE + 1];
        block[0] = CONTROL_DATA;

        for chunk in frame.chunks_exact(BLOCK_SIZE) {
            block[1..].copy_from_slice(chunk);
            self.bus.write(self.address, &block)?;
            yield_now();
        }
        Ok(())
    }
}
