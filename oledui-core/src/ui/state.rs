//! UI state shared with frame and overlay callbacks

/// Lifecycle of the frame on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameState {
    /// One frame fully shown
    #[default]
    Fixed,
    /// Sliding from the current frame to the next
    InTransition,
}

/// Scheduler state visible to callbacks
///
/// Callbacks receive it by shared reference and can use it to vary their
/// own rendering; only the scheduler advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiState {
    /// Clock reading at the last tick (ms), 0 before the first one
    pub last_update: u64,
    /// Ticks since the last `Fixed`/`InTransition` switch
    pub ticks_since_last_state_switch: u32,
    /// Current lifecycle state
    pub frame_state: FrameState,
    /// Index of the frame being shown (outgoing frame while sliding)
    pub current_frame: u8,
}

impl UiState {
    /// State at scheduler construction: frame 0, fixed
    pub const fn new() -> Self {
        Self {
            last_update: 0,
            ticks_since_last_state_switch: 0,
            frame_state: FrameState::Fixed,
            current_frame: 0,
        }
    }

    /// Whether a transition is running
    pub fn in_transition(&self) -> bool {
        self.frame_state == FrameState::InTransition
    }
}
