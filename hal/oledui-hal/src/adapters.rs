//! Adapters from `embedded-hal` 1.0 peripherals
//!
//! Embassy and most other MCU HALs implement the blocking `embedded-hal`
//! traits. Wrapping such a peripheral in one of these newtypes makes it
//! usable wherever this crate's traits are expected.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin as EhOutputPin;
use embedded_hal::i2c::I2c as EhI2cTrait;
use embedded_hal::spi::SpiBus as EhSpiBus;

use crate::{I2cBus, OutputPin, SpiBus};

/// Blocking `embedded-hal` I2C master as an [`I2cBus`]
#[derive(Debug)]
pub struct EhI2c<T>(pub T);

impl<T> EhI2c<T> {
    /// Wrap an `embedded-hal` I2C master
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Release the wrapped peripheral
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: EhI2cTrait> I2cBus for EhI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, data)
    }
}

/// Blocking `embedded-hal` SPI bus as a [`SpiBus`]
///
/// Chip select is driven separately by the transport, so this wraps the
/// raw bus rather than an `SpiDevice`.
#[derive(Debug)]
pub struct EhSpi<T>(pub T);

impl<T> EhSpi<T> {
    /// Wrap an `embedded-hal` SPI bus
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Release the wrapped peripheral
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: EhSpiBus<u8>> SpiBus for EhSpi<T> {
    type Error = T::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(data)?;
        // CS may be raised right after this returns
        self.0.flush()
    }
}

/// Infallible `embedded-hal` output pin as an [`OutputPin`]
#[derive(Debug)]
pub struct EhPin<P>(pub P);

impl<P> EhPin<P> {
    /// Wrap an `embedded-hal` output pin
    pub fn new(inner: P) -> Self {
        Self(inner)
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P: EhOutputPin<Error = Infallible>> OutputPin for EhPin<P> {
    fn set_high(&mut self) {
        match self.0.set_high() {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.0.set_low() {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType as I2cErrorType, Operation};

    struct RecordingI2c {
        address: u8,
        last: [u8; 4],
        len: usize,
    }

    impl I2cErrorType for RecordingI2c {
        type Error = ErrorKind;
    }

    impl EhI2cTrait for RecordingI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            self.address = address;
            for op in operations {
                if let Operation::Write(bytes) = op {
                    self.len = bytes.len();
                    self.last[..bytes.len()].copy_from_slice(bytes);
                }
            }
            Ok(())
        }
    }

    struct Pin {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for Pin {
        type Error = Infallible;
    }

    impl EhOutputPin for Pin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn test_i2c_adapter_forwards_write() {
        let mut bus = EhI2c::new(RecordingI2c {
            address: 0,
            last: [0; 4],
            len: 0,
        });
        I2cBus::write(&mut bus, 0x3C, &[0x80, 0xAF]).unwrap();

        let inner = bus.into_inner();
        assert_eq!(inner.address, 0x3C);
        assert_eq!(&inner.last[..inner.len], &[0x80, 0xAF]);
    }

    #[test]
    fn test_pin_adapter_sets_state() {
        let mut pin = EhPin::new(Pin { high: false });
        OutputPin::set_high(&mut pin);
        assert!(pin.0.high);
        pin.set_state(false);
        assert!(!pin.0.high);
    }
}
