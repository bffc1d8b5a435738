//! I2C bus abstractions
//!
//! The SH1106 is write-only from the driver's point of view, so the bus
//! trait only carries the write half of an I2C master.

/// I2C bus master
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write, sent as one transaction
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<B: I2cBus + ?Sized> I2cBus for &mut B {
    type Error = B::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        // SH1106 panels are normally clocked in fast mode
        Self::FAST
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        frequency: 1_000_000,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fast_mode() {
        assert_eq!(I2cConfig::default(), I2cConfig::FAST);
        assert_eq!(I2cConfig::default().frequency, 400_000);
    }
}
