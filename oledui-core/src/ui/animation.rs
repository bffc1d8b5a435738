//! Sliding transition geometry

use crate::framebuffer::{HEIGHT, WIDTH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction frames slide in during a forward transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AnimationDirection {
    /// Outgoing frame leaves to the left
    SlideLeft,
    /// Outgoing frame leaves to the right
    #[default]
    SlideRight,
    /// Outgoing frame leaves upwards
    SlideUp,
    /// Outgoing frame leaves downwards
    SlideDown,
}

/// Frame origins during a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransitionOffsets {
    /// Origin of the outgoing frame
    pub current: (i32, i32),
    /// Origin of the incoming frame, one screen away from `current`
    pub next: (i32, i32),
}

impl AnimationDirection {
    /// Frame origins after `ticks` of a `ticks_per_transition` slide
    ///
    /// A negative `direction` mirrors the slide so going backwards plays
    /// the forward animation in reverse.
    pub fn offsets(
        self,
        ticks: u32,
        ticks_per_transition: u32,
        direction: i8,
    ) -> TransitionOffsets {
        let total = ticks_per_transition.max(1) as i64;
        let ticks = ticks as i64;
        let dx = (WIDTH as i64 * ticks / total) as i32;
        let dy = (HEIGHT as i64 * ticks / total) as i32;
        let (w, h) = (WIDTH as i32, HEIGHT as i32);

        let (x, y, x1, y1) = match self {
            AnimationDirection::SlideLeft => (-dx, 0, -dx + w, 0),
            AnimationDirection::SlideRight => (dx, 0, dx - w, 0),
            AnimationDirection::SlideUp => (0, -dy, 0, -dy + h),
            AnimationDirection::SlideDown => (0, dy, 0, dy - h),
        };

        let sign = if direction >= 0 { 1 } else { -1 };
        TransitionOffsets {
            current: (x * sign, y * sign),
            next: (x1 * sign, y1 * sign),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_right_forward() {
        let start = AnimationDirection::SlideRight.offsets(0, 10, 1);
        assert_eq!(start.current, (0, 0));
        assert_eq!(start.next, (-128, 0));

        let half = AnimationDirection::SlideRight.offsets(5, 10, 1);
        assert_eq!(half.current, (64, 0));
        assert_eq!(half.next, (-64, 0));
    }

    #[test]
    fn test_slide_left_truncates() {
        // 128 * 1 / 3 = 42.67 truncates toward zero
        let offsets = AnimationDirection::SlideLeft.offsets(1, 3, 1);
        assert_eq!(offsets.current, (-42, 0));
        assert_eq!(offsets.next, (86, 0));
    }

    #[test]
    fn test_vertical_slides() {
        let up = AnimationDirection::SlideUp.offsets(4, 16, 1);
        assert_eq!(up.current, (0, -16));
        assert_eq!(up.next, (0, 48));

        let down = AnimationDirection::SlideDown.offsets(4, 16, 1);
        assert_eq!(down.current, (0, 16));
        assert_eq!(down.next, (0, -48));
    }

    #[test]
    fn test_backward_mirrors() {
        for animation in [
            AnimationDirection::SlideLeft,
            AnimationDirection::SlideRight,
            AnimationDirection::SlideUp,
            AnimationDirection::SlideDown,
        ] {
            let forward = animation.offsets(3, 8, 1);
            let backward = animation.offsets(3, 8, -1);
            assert_eq!(backward.current, (-forward.current.0, -forward.current.1));
            assert_eq!(backward.next, (-forward.next.0, -forward.next.1));
        }
    }

    #[test]
    fn test_incoming_frame_one_screen_away() {
        let offsets = AnimationDirection::SlideLeft.offsets(7, 15, -1);
        assert_eq!((offsets.next.0 - offsets.current.0).abs(), WIDTH as i32);
        let offsets = AnimationDirection::SlideDown.offsets(7, 15, 1);
        assert_eq!((offsets.next.1 - offsets.current.1).abs(), HEIGHT as i32);
    }

    #[test]
    fn test_zero_length_transition() {
        let offsets = AnimationDirection::SlideRight.offsets(0, 0, 1);
        assert_eq!(offsets.current, (0, 0));
    }
}
