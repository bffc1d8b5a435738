//! SH1106 transports
//!
//! This crate provides the [`Transport`](oledui_core::Transport)
//! implementations for the two ways an SH1106 module is wired:
//!
//! - [`I2cTransport`] - two-wire bus, control byte prefixed writes
//! - [`SpiTransport`] - four-wire bus with D/C and chip select lines
//!
//! Both are written against the `oledui-hal` bus traits.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod i2c;
pub mod spi;

pub use i2c::{I2cTransport, DEFAULT_ADDRESS};
pub use spi::SpiTransport;
