//! Page indicator placement and icons

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance between indicator icons in pixels
pub const INDICATOR_PITCH: i32 = 12;

/// Indicator icon size in pixels (square)
pub const INDICATOR_SIZE: i32 = 8;

/// 8x8 XBM ring marking the current frame
pub const ACTIVE_SYMBOL: [u8; 8] = [0x00, 0x00, 0x18, 0x24, 0x42, 0x42, 0x24, 0x18];

/// 8x8 XBM dot marking the other frames
pub const INACTIVE_SYMBOL: [u8; 8] = [0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00];

/// Screen edge the indicator is drawn along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndicatorPosition {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

/// Order of the indicator icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndicatorDirection {
    /// Frame 0 first (leftmost or topmost)
    #[default]
    LeftRight,
    /// Frame 0 last
    RightLeft,
}

impl IndicatorDirection {
    /// Icon slot holding the active marker
    pub fn active_slot(self, current_frame: u8, frame_count: u8) -> u8 {
        match self {
            IndicatorDirection::LeftRight => current_frame,
            IndicatorDirection::RightLeft => {
                frame_count.saturating_sub(1).saturating_sub(current_frame)
            }
        }
    }
}

impl IndicatorPosition {
    /// Top-left corner of icon `slot` out of `count`
    ///
    /// Icons are centered along the chosen edge.
    pub fn origin(self, slot: u8, count: u8) -> (i32, i32) {
        let count = count as i32;
        let offset = INDICATOR_PITCH * slot as i32;
        let along_x = 64 - (INDICATOR_PITCH * count / 2) + offset;
        let along_y = 32 - (INDICATOR_PITCH * count / 2) + offset;

        match self {
            IndicatorPosition::Top => (along_x, 0),
            IndicatorPosition::Bottom => (along_x, 56),
            IndicatorPosition::Right => (120, along_y),
            IndicatorPosition::Left => (0, along_y),
        }
    }
}
