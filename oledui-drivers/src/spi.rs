//! SPI transport
//!
//! Four-wire SPI: the D/C line selects command (low) or data (high) and
//! chip select frames every transfer. SH1106 modules wired this way are
//! driven in page addressing mode, so each data byte is preceded by its
//! page and column address. The controller's 132-column RAM is offset by
//! two columns from the visible 128.

use embedded_hal::delay::DelayNs;
use oledui_core::command;
use oledui_core::{Transport, YieldFn, BUFFER_SIZE, PAGES, WIDTH};
use oledui_hal::{OutputPin, SpiBus};

/// First visible controller column
const COLUMN_OFFSET: usize = 2;

/// SH1106 on an SPI bus
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiTransport<S, DC, CS> {
    spi: S,
    dc: DC,
    cs: CS,
}

impl<S, DC, CS> SpiTransport<S, DC, CS> {
    pub fn new(spi: S, dc: DC, cs: CS) -> Self {
        Self { spi, dc, cs }
    }

    /// Release the bus and pins
    pub fn release(self) -> (S, DC, CS) {
        (self.spi, self.dc, self.cs)
    }
}

impl<S: SpiBus, DC: OutputPin, CS: OutputPin> SpiTransport<S, DC, CS> {
    /// Pulse the controller reset line
    ///
    /// High for 1 ms, low for 10 ms, then released high. Call before
    /// [`Display::init`](oledui_core::Display::init).
    pub fn reset<RST: OutputPin, D: DelayNs>(&mut self, rst: &mut RST, delay: &mut D) {
        rst.set_high();
        delay.delay_ms(1);
        rst.set_low();
        delay.delay_ms(10);
        rst.set_high();
    }

    fn write_pages(
        &mut self,
        frame: &[u8; BUFFER_SIZE],
        yield_now: YieldFn,
    ) -> Result<(), S::Error> {
        for page in 0..PAGES {
            for column in COLUMN_OFFSET..COLUMN_OFFSET + WIDTH {
                self.send_commands(&command::address(page as u8, column as u8))?;
                self.cs.set_high();
                self.dc.set_high();
                self.cs.set_low();
                self.spi
                    .write(&[frame[column - COLUMN_OFFSET + page * WIDTH]])?;
            }
            yield_now();
        }
        Ok(())
    }
}

impl<S: SpiBus, DC: OutputPin, CS: OutputPin> Transport for SpiTransport<S, DC, CS> {
    type Error = S::Error;

    /// Park chip select high
    fn begin(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high();
        Ok(())
    }

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.cs.set_high();
        self.dc.set_low();
        self.cs.set_low();
        let result = self.spi.write(&[command]);
        self.cs.set_high();
        result
    }

    fn write_frame(
        &mut self,
        frame: &[u8; BUFFER_SIZE],
        yield_now: YieldFn,
    ) -> Result<(), Self::Error> {
        let result = self.write_pages(frame, yield_now);
        self.cs.set_high();
        result
    }
}
