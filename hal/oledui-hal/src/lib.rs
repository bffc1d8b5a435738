//! oledui Hardware Abstraction Layer
//!
//! This crate defines the bus traits the SH1106 transports are written
//! against. Chip HALs can implement them directly, or any `embedded-hal` 1.0
//! peripheral can be wrapped with the adapters in [`adapters`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  oledui-core (canvas, display, ui)      │
//! └─────────────────────────────────────────┘
//!                     │  Transport
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  oledui-drivers (I2C / SPI transports)  │
//! └─────────────────────────────────────────┘
//!                     │  I2cBus / SpiBus / OutputPin
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  oledui-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (D/C, chip select, reset)
//! - [`i2c::I2cBus`] - I2C bus writes
//! - [`spi::SpiBus`] - SPI bus writes

#![no_std]
#![deny(unsafe_code)]

pub mod adapters;
pub mod gpio;
pub mod i2c;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use adapters::{EhI2c, EhPin, EhSpi};
pub use gpio::OutputPin;
pub use i2c::{I2cBus, I2cConfig};
pub use spi::SpiBus;
