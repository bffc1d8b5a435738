//! UI configuration
//!
//! Timing is given in milliseconds and converted to ticks when applied to
//! a [`Ui`](crate::Ui), so a config stays valid across frame rates.

use crate::ui::{AnimationDirection, IndicatorDirection, IndicatorPosition};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scheduler settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UiConfig {
    /// Milliseconds between ticks (33 ≈ 30 fps)
    pub update_interval_ms: u32,
    /// How long a frame stays fixed before auto transition
    pub time_per_frame_ms: u32,
    /// Duration of a slide
    pub time_per_transition_ms: u32,
    /// Advance frames on a timer
    pub auto_transition: bool,
    /// Auto transition direction; `false` walks the frames backwards
    pub forwards: bool,
    /// Slide animation
    pub animation: AnimationDirection,
    /// Edge the page indicator is drawn along
    pub indicator_position: IndicatorPosition,
    /// Order of the indicator icons
    pub indicator_direction: IndicatorDirection,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: 33,
            time_per_frame_ms: 5000,
            time_per_transition_ms: 500,
            auto_transition: true,
            forwards: true,
            animation: AnimationDirection::SlideRight,
            indicator_position: IndicatorPosition::Bottom,
            indicator_direction: IndicatorDirection::LeftRight,
        }
    }
}

impl UiConfig {
    /// Tick interval, never zero
    pub fn interval(&self) -> u32 {
        self.update_interval_ms.max(1)
    }

    /// `time_per_frame_ms` in ticks
    pub fn ticks_per_frame(&self) -> u32 {
        self.time_per_frame_ms / self.interval()
    }

    /// `time_per_transition_ms` in ticks
    pub fn ticks_per_transition(&self) -> u32 {
        self.time_per_transition_ms / self.interval()
    }
}
