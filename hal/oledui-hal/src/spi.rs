//! SPI bus abstractions
//!
//! Chip select and data/command lines are plain GPIOs driven by the
//! transport, so the bus itself only needs to clock bytes out.

/// SPI bus master
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Write data without reading
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

impl<S: SpiBus + ?Sized> SpiBus for &mut S {
    type Error = S::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(data)
    }
}
