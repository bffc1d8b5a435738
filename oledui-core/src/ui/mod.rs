//! Frame/animation UI
//!
//! The [`Ui`] scheduler shows one application frame at a time, slides to
//! the next one on a timer or on request, and paints a page indicator and
//! any overlays on top.
//!
//! Frame lifecycle:
//!
//! ```text
//!          ticks_per_frame elapsed (auto transition)
//!          or next_frame() / previous_frame()
//!   ┌───────┐ ───────────────────────────────► ┌──────────────┐
//!   │ Fixed │                                  │ InTransition │
//!   └───────┘ ◄─────────────────────────────── └──────────────┘
//!          ticks_per_transition elapsed,
//!          current frame advanced by direction
//! ```

pub mod animation;
pub mod frame;
pub mod indicator;
pub mod scheduler;
pub mod state;

pub use animation::{AnimationDirection, TransitionOffsets};
pub use frame::{Frame, Overlay};
pub use indicator::{IndicatorDirection, IndicatorPosition, ACTIVE_SYMBOL, INACTIVE_SYMBOL};
pub use scheduler::{Ui, MAX_FRAMES, MAX_OVERLAYS};
pub use state::{FrameState, UiState};
