//! Frame-buffer graphics and frame/animation UI for SH1106 OLED displays
//!
//! This crate contains everything that does not depend on the bus the
//! panel is wired to:
//!
//! - Page-packed 128x64 frame buffer and drawing primitives ([`Canvas`])
//! - Packed bitmap fonts, text alignment and word wrapping
//! - SH1106 command set and the [`Display`] that flushes a canvas
//! - The [`Ui`] scheduler rotating through application frames
//!
//! Bus specifics live behind the [`Transport`] trait, implemented for I2C
//! and SPI in `oledui-drivers`.
//!
//! # Example
//!
//! ```ignore
//! let display = Display::new(transport);
//! let mut ui = Ui::new(display, clock);
//! ui.set_frames([&mut status as &mut dyn Frame, &mut graph]);
//! ui.init()?;
//!
//! loop {
//!     let budget = ui.update();
//!     if budget > 0 {
//!         delay_ms(budget as u32);
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod canvas;
pub mod command;
pub mod config;
pub mod display;
pub mod font;
pub mod framebuffer;
pub mod text;
pub mod traits;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types
pub use canvas::{Canvas, YieldFn};
pub use config::UiConfig;
pub use display::Display;
pub use font::{Font, Glyph};
pub use framebuffer::{Color, FrameBuffer, BUFFER_SIZE, HEIGHT, PAGES, WIDTH};
pub use text::{TextAlign, Utf8Ascii};
pub use traits::{Clock, Transport};
pub use ui::{
    AnimationDirection, Frame, FrameState, IndicatorDirection, IndicatorPosition, Overlay, Ui,
    UiState,
};
