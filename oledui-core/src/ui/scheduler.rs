//! Frame scheduler
//!
//! Drives the frame lifecycle from a millisecond clock. The host loop
//! calls [`Ui::update`] as often as it likes and sleeps for the returned
//! budget; the scheduler ticks at most once per update interval and skips
//! ticks it fell behind on so timed transitions stay on schedule.

use heapless::Vec;

use super::animation::AnimationDirection;
use super::frame::{Frame, Overlay};
use super::indicator::{
    IndicatorDirection, IndicatorPosition, ACTIVE_SYMBOL, INACTIVE_SYMBOL, INDICATOR_SIZE,
};
use super::state::{FrameState, UiState};
use crate::config::UiConfig;
use crate::display::Display;
use crate::traits::{Clock, Transport};

/// Maximum number of frames
pub const MAX_FRAMES: usize = 16;

/// Maximum number of overlays
pub const MAX_OVERLAYS: usize = 8;

/// Frame/animation UI on top of a [`Display`]
///
/// Frames and overlays are borrowed for `'a`; the scheduler only calls
/// them and never stores what they draw.
pub struct Ui<'a, T, C> {
    display: Display<T>,
    clock: C,
    state: UiState,

    frames: Vec<&'a mut dyn Frame, MAX_FRAMES>,
    overlays: Vec<&'a mut dyn Overlay, MAX_OVERLAYS>,

    update_interval: u32,
    ticks_per_frame: u32,
    ticks_per_transition: u32,

    auto_transition: bool,
    transition_direction: i8,
    animation: AnimationDirection,

    indicator_position: IndicatorPosition,
    indicator_direction: IndicatorDirection,
    active_symbol: &'a [u8],
    inactive_symbol: &'a [u8],

    dirty: bool,
}

impl<'a, T, C> Ui<'a, T, C> {
    /// Create a scheduler with the default configuration
    pub fn new(display: Display<T>, clock: C) -> Self {
        Self::with_config(display, clock, &UiConfig::default())
    }

    /// Create a scheduler from a configuration
    pub fn with_config(display: Display<T>, clock: C, config: &UiConfig) -> Self {
        let mut ui = Self {
            display,
            clock,
            state: UiState::new(),
            frames: Vec::new(),
            overlays: Vec::new(),
            update_interval: 33,
            ticks_per_frame: 0,
            ticks_per_transition: 0,
            auto_transition: true,
            transition_direction: 1,
            animation: AnimationDirection::default(),
            indicator_position: IndicatorPosition::default(),
            indicator_direction: IndicatorDirection::default(),
            active_symbol: &ACTIVE_SYMBOL,
            inactive_symbol: &INACTIVE_SYMBOL,
            dirty: true,
        };
        ui.apply_config(config);
        ui
    }

    /// Replace timing and presentation settings
    ///
    /// Tick counters and the current frame are left alone.
    pub fn apply_config(&mut self, config: &UiConfig) {
        self.update_interval = config.interval();
        self.ticks_per_frame = config.ticks_per_frame();
        self.ticks_per_transition = config.ticks_per_transition();
        self.auto_transition = config.auto_transition;
        self.transition_direction = if config.forwards { 1 } else { -1 };
        self.animation = config.animation;
        self.indicator_position = config.indicator_position;
        self.indicator_direction = config.indicator_direction;
        self.dirty = true;
    }

    /// Change the tick rate, keeping frame and transition durations
    ///
    /// `fps` of 0 is treated as 1.
    pub fn set_target_fps(&mut self, fps: u8) {
        let old = self.update_interval;
        let new = (1000 / fps.max(1) as u32).max(1);
        self.update_interval = new;
        self.ticks_per_frame = rescale(self.ticks_per_frame, old, new);
        self.ticks_per_transition = rescale(self.ticks_per_transition, old, new);
        trace!(
            "Update interval {} ms, {} ticks per frame",
            new,
            self.ticks_per_frame
        );
    }

    /// How long a frame stays fixed before auto transition
    pub fn set_time_per_frame(&mut self, ms: u32) {
        self.ticks_per_frame = ms / self.update_interval;
    }

    /// Duration of a slide
    pub fn set_time_per_transition(&mut self, ms: u32) {
        self.ticks_per_transition = ms / self.update_interval;
    }

    pub fn enable_auto_transition(&mut self) {
        self.auto_transition = true;
    }

    pub fn disable_auto_transition(&mut self) {
        self.auto_transition = false;
    }

    pub fn auto_transition(&self) -> bool {
        self.auto_transition
    }

    /// Auto transitions move to the following frame
    pub fn set_auto_transition_forwards(&mut self) {
        self.transition_direction = 1;
    }

    /// Auto transitions move to the preceding frame
    pub fn set_auto_transition_backwards(&mut self) {
        self.transition_direction = -1;
    }

    pub fn set_indicator_position(&mut self, position: IndicatorPosition) {
        self.indicator_position = position;
        self.dirty = true;
    }

    pub fn set_indicator_direction(&mut self, direction: IndicatorDirection) {
        self.indicator_direction = direction;
    }

    /// 8x8 XBM icon for the current frame
    pub fn set_active_symbol(&mut self, symbol: &'a [u8]) {
        self.active_symbol = symbol;
        self.dirty = true;
    }

    /// 8x8 XBM icon for the other frames
    pub fn set_inactive_symbol(&mut self, symbol: &'a [u8]) {
        self.inactive_symbol = symbol;
        self.dirty = true;
    }

    pub fn set_frame_animation(&mut self, animation: AnimationDirection) {
        self.animation = animation;
    }

    /// Replace the frame list
    ///
    /// Frames beyond [`MAX_FRAMES`] are dropped. If the current frame no
    /// longer exists the UI restarts at frame 0.
    pub fn set_frames<I>(&mut self, frames: I)
    where
        I: IntoIterator<Item = &'a mut dyn Frame>,
    {
        self.frames.clear();
        for frame in frames {
            if self.frames.push(frame).is_err() {
                warn!("Frame list full, dropping frames past {}", MAX_FRAMES);
                break;
            }
        }
        if self.state.current_frame as usize >= self.frames.len() {
            self.state.current_frame = 0;
        }
        self.dirty = true;
    }

    /// Replace the overlay list; overlays past [`MAX_OVERLAYS`] are dropped
    pub fn set_overlays<I>(&mut self, overlays: I)
    where
        I: IntoIterator<Item = &'a mut dyn Overlay>,
    {
        self.overlays.clear();
        for overlay in overlays {
            if self.overlays.push(overlay).is_err() {
                warn!("Overlay list full, dropping overlays past {}", MAX_OVERLAYS);
                break;
            }
        }
        self.dirty = true;
    }

    /// Start sliding to the following frame
    pub fn next_frame(&mut self) {
        self.start_transition(1);
    }

    /// Start sliding to the preceding frame
    pub fn previous_frame(&mut self) {
        self.start_transition(-1);
    }

    fn start_transition(&mut self, direction: i8) {
        self.state.frame_state = FrameState::InTransition;
        self.state.ticks_since_last_state_switch = 0;
        self.transition_direction = direction;
    }

    /// Scheduler state as seen by callbacks
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Index the current transition leads to
    pub fn next_frame_number(&self) -> u8 {
        let count = self.frames.len() as i32;
        if count == 0 {
            return 0;
        }
        let next = self.state.current_frame as i32 + self.transition_direction as i32;
        next.rem_euclid(count) as u8
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn update_interval(&self) -> u32 {
        self.update_interval
    }

    pub fn ticks_per_frame(&self) -> u32 {
        self.ticks_per_frame
    }

    pub fn ticks_per_transition(&self) -> u32 {
        self.ticks_per_transition
    }

    pub fn display(&self) -> &Display<T> {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut Display<T> {
        &mut self.display
    }
}

impl<'a, T: Transport, C: Clock> Ui<'a, T, C> {
    /// Initialize the display
    pub fn init(&mut self) -> Result<(), T::Error> {
        self.display.init()
    }

    /// Tick if the update interval has elapsed
    ///
    /// Returns the remaining time budget in milliseconds: positive means
    /// the caller may sleep that long, zero or negative means a tick ran
    /// (late by the magnitude). With auto transition enabled, whole
    /// intervals missed since the previous tick are counted towards the
    /// frame timers.
    pub fn update(&mut self) -> i64 {
        let now = self.clock.now_ms();
        let interval = self.update_interval as i64;
        let elapsed = i64::try_from(now.saturating_sub(self.state.last_update))
            .unwrap_or(i64::MAX);
        let budget = interval.saturating_sub(elapsed);

        if budget <= 0 {
            if self.auto_transition && self.state.last_update != 0 {
                let skipped = u32::try_from(budget.saturating_neg() / interval)
                    .unwrap_or(u32::MAX);
                if skipped > 0 {
                    trace!("Skipping {} ticks", skipped);
                }
                self.state.ticks_since_last_state_switch = self
                    .state
                    .ticks_since_last_state_switch
                    .saturating_add(skipped);
            }
            self.state.last_update = now;
            self.tick();
        }

        budget
    }

    /// Advance the lifecycle by one tick and repaint if needed
    ///
    /// Returns whether a repaint happened. A failed flush is logged and
    /// the frame is treated as painted.
    pub fn tick(&mut self) -> bool {
        self.state.ticks_since_last_state_switch =
            self.state.ticks_since_last_state_switch.saturating_add(1);

        match self.state.frame_state {
            FrameState::InTransition => {
                self.dirty = true;
                if self.state.ticks_since_last_state_switch >= self.ticks_per_transition {
                    self.state.current_frame = self.next_frame_number();
                    self.state.frame_state = FrameState::Fixed;
                    self.state.ticks_since_last_state_switch = 0;
                    trace!("Showing frame {}", self.state.current_frame);
                }
            }
            FrameState::Fixed => {
                if self.state.ticks_since_last_state_switch >= self.ticks_per_frame {
                    if self.auto_transition {
                        self.state.frame_state = FrameState::InTransition;
                        self.dirty = true;
                    }
                    self.state.ticks_since_last_state_switch = 0;
                }
            }
        }

        if !self.dirty {
            return false;
        }

        self.dirty = false;
        self.display.clear();
        self.draw_indicator();
        self.draw_frames();
        self.draw_overlays();
        if self.display.display().is_err() {
            warn!("Frame flush failed");
        }
        true
    }

    fn draw_frames(&mut self) {
        if self.frames.is_empty() {
            return;
        }
        let current = self.state.current_frame as usize;
        let next = self.next_frame_number() as usize;
        let canvas = self.display.canvas_mut();

        match self.state.frame_state {
            FrameState::Fixed => {
                self.dirty |= self.frames[current].render(canvas, &self.state, 0, 0);
            }
            FrameState::InTransition => {
                let offsets = self.animation.offsets(
                    self.state.ticks_since_last_state_switch,
                    self.ticks_per_transition,
                    self.transition_direction,
                );
                let (x, y) = offsets.current;
                self.dirty |= self.frames[current].render(canvas, &self.state, x, y);
                let (x, y) = offsets.next;
                self.dirty |= self.frames[next].render(canvas, &self.state, x, y);
            }
        }
    }

    fn draw_indicator(&mut self) {
        let count = self.frames.len() as u8;
        let active = self
            .indicator_direction
            .active_slot(self.state.current_frame, count);

        for slot in 0..count {
            let icon = if slot == active {
                self.active_symbol
            } else {
                self.inactive_symbol
            };
            let (x, y) = self.indicator_position.origin(slot, count);
            self.display
                .draw_xbm(x, y, INDICATOR_SIZE, INDICATOR_SIZE, icon);
        }
    }

    fn draw_overlays(&mut self) {
        let canvas = self.display.canvas_mut();
        for overlay in self.overlays.iter_mut() {
            self.dirty |= overlay.render(canvas, &self.state);
        }
    }
}

/// Scale a tick count from one interval to another, keeping its duration
fn rescale(ticks: u32, old_interval: u32, new_interval: u32) -> u32 {
    let scaled = ticks as u64 * old_interval as u64 / new_interval.max(1) as u64;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::canvas::Canvas;
    use crate::testing::{RecordingTransport, TestClock};

    fn blank(_: &mut Canvas, _: &UiState, _: i32, _: i32) -> bool {
        false
    }

    fn ui<'a>(now: &'a Cell<u64>) -> Ui<'a, RecordingTransport, TestClock<'a>> {
        Ui::new(Display::new(RecordingTransport::default()), TestClock(now))
    }

    fn repaints(ui: &Ui<'_, RecordingTransport, TestClock<'_>>) -> usize {
        ui.display().transport().frames.len()
    }

    #[test]
    fn test_defaults() {
        let now = Cell::new(0);
        let ui = ui(&now);
        assert_eq!(ui.update_interval(), 33);
        assert_eq!(ui.ticks_per_frame(), 151);
        assert_eq!(ui.ticks_per_transition(), 15);
        assert_eq!(ui.state(), &UiState::new());
        assert_eq!(ui.next_frame_number(), 0);
    }

    #[test]
    fn test_auto_transition_cycle() {
        let now = Cell::new(0);
        let (mut a, mut b) = (blank, blank);
        let mut ui = ui(&now);
        ui.set_frames([&mut a as &mut dyn Frame, &mut b]);
        ui.set_time_per_frame(5 * 33);
        ui.set_time_per_transition(3 * 33);

        for _ in 0..4 {
            ui.tick();
            assert_eq!(ui.state().frame_state, FrameState::Fixed);
        }
        ui.tick();
        assert!(ui.state().in_transition());
        assert_eq!(ui.state().ticks_since_last_state_switch, 0);

        ui.tick();
        ui.tick();
        assert!(ui.state().in_transition());
        ui.tick();
        assert_eq!(ui.state().frame_state, FrameState::Fixed);
        assert_eq!(ui.state().current_frame, 1);
    }

    #[test]
    fn test_fixed_without_auto_transition() {
        let now = Cell::new(0);
        let (mut a, mut b) = (blank, blank);
        let mut ui = ui(&now);
        ui.set_frames([&mut a as &mut dyn Frame, &mut b]);
        ui.set_time_per_frame(2 * 33);
        ui.disable_auto_transition();
        assert!(!ui.auto_transition());

        for _ in 0..10 {
            ui.tick();
        }
        assert_eq!(ui.state().frame_state, FrameState::Fixed);
        assert_eq!(ui.state().current_frame, 0);
        // Only the initial paint, nothing changed since
        assert_eq!(repaints(&ui), 1);
    }

    #[test]
    fn test_manual_navigation() {
        let now = Cell::new(0);
        let (mut a, mut b, mut c) = (blank, blank, blank);
        let mut ui = ui(&now);
        ui.set_frames([&mut a as &mut dyn Frame, &mut b, &mut c]);
        ui.disable_auto_transition();
        ui.set_time_per_transition(2 * 33);

        ui.next_frame();
        assert!(ui.state().in_transition());
        assert_eq!(ui.next_frame_number(), 1);
        ui.tick();
        ui.tick();
        assert_eq!(ui.state().current_frame, 1);

        ui.previous_frame();
        ui.previous_frame();
        assert_eq!(ui.state().ticks_since_last_state_switch, 0);
        ui.tick();
        ui.tick();
        assert_eq!(ui.state().current_frame, 0);

        ui.previous_frame();
        assert_eq!(ui.next_frame_number(), 2);
    }

    #[test]
    fn test_backwards_wraps() {
        let now = Cell::new(0);
        let (mut a, mut b, mut c) = (blank, blank, blank);
        let mut ui = ui(&now);
        ui.set_frames([&mut a as &mut dyn Frame, &mut b, &mut c]);
        ui.set_auto_transition_backwards();
        assert_eq!(ui.next_frame_number(), 2);
        ui.set_auto_transition_forwards();
        assert_eq!(ui.next_frame_number(), 1);
    }

    #[test]
    fn test_set_target_fps_keeps_durations() {
        let now = Cell::new(0);
        let mut ui = ui(&now);
        ui.set_target_fps(60);
        assert_eq!(ui.update_interval(), 16);
        // 151 * 33 / 16 and 15 * 33 / 16
        assert_eq!(ui.ticks_per_frame(), 311);
        assert_eq!(ui.ticks_per_transition(), 30);

        ui.set_target_fps(0);
        assert_eq!(ui.update_interval(), 1000);
    }

    #[test]
    fn test_update_budget_and_skipping() {
        let now = Cell::new(10);
        let mut ui = ui(&now);

        assert_eq!(ui.update(), 23);
        assert_eq!(ui.state().last_update, 0);

        // First tick: nothing to catch up on
        now.set(40);
        assert_eq!(ui.update(), -7);
        assert_eq!(ui.state().last_update, 40);
        assert_eq!(ui.state().ticks_since_last_state_switch, 1);

        // 100 ms late: 67 / 33 = 2 skipped ticks plus this one
        now.set(140);
        assert_eq!(ui.update(), -67);
        assert_eq!(ui.state().ticks_since_last_state_switch, 4);

        now.set(150);
        assert_eq!(ui.update(), 23);
        assert_eq!(ui.state().ticks_since_last_state_switch, 4);
    }

    #[test]
    fn test_no_skipping_without_auto_transition() {
        let now = Cell::new(100);
        let mut ui = ui(&now);
        ui.disable_auto_transition();
        ui.update();
        now.set(400);
        ui.update();
        assert_eq!(ui.state().ticks_since_last_state_switch, 2);
    }

    #[test]
    fn test_frames_receive_offsets() {
        let now = Cell::new(0);
        let first = Cell::new((i32::MIN, i32::MIN));
        let second = Cell::new((i32::MIN, i32::MIN));
        let mut a = |_: &mut Canvas, _: &UiState, x: i32, y: i32| {
            first.set((x, y));
            false
        };
        let mut b = |_: &mut Canvas, _: &UiState, x: i32, y: i32| {
            second.set((x, y));
            false
        };

        let mut ui = ui(&now);
        ui.set_frames([&mut a as &mut dyn Frame, &mut b]);
        ui.set_time_per_transition(4 * 33);

        ui.tick();
        assert_eq!(first.get(), (0, 0));
        assert_eq!(second.get(), (i32::MIN, i32::MIN));

        ui.next_frame();
        ui.tick();
        assert_eq!(first.get(), (32, 0));
        assert_eq!(second.get(), (-96, 0));

        ui.set_frame_animation(AnimationDirection::SlideUp);
        ui.tick();
        assert_eq!(first.get(), (0, -32));
        assert_eq!(second.get(), (0, 32));
    }

    #[test]
    fn test_backward_transition_mirrors_offsets() {
        let now = Cell::new(0);
        let seen = Cell::new((0, 0));
        let mut a = |_: &mut Canvas, _: &UiState, x: i32, y: i32| {
            seen.set((x, y));
            false
        };
        let mut b = blank;

        let mut ui = ui(&now);
        ui.set_frames([&mut a as &mut dyn Frame, &mut b]);
        ui.set_time_per_transition(4 * 33);
        ui.previous_frame();
        ui.tick();
        assert_eq!(seen.get(), (-32, 0));
    }

    #[test]
    fn test_frame_requests_repaint() {
        let now = Cell::new(0);
        let live = Cell::new(true);
        let mut a = |canvas: &mut Canvas, _: &UiState, x: i32, y: i32| {
            canvas.fill_rect(x, y, 4, 4);
            live.get()
        };

        let mut ui = ui(&now);
        ui.set_frames([&mut a as &mut dyn Frame]);

        assert!(ui.tick());
        assert!(ui.tick());
        live.set(false);
        assert!(ui.tick());
        assert!(!ui.tick());
        assert_eq!(repaints(&ui), 3);
        assert!(ui.display().pixel(3, 3));
    }

    #[test]
    fn test_overlays_drawn_on_top() {
        let now = Cell::new(0);
        let calls = Cell::new(0);
        let mut frame = |canvas: &mut Canvas, _: &UiState, _: i32, _: i32| {
            canvas.fill_rect(0, 0, 10, 10);
            false
        };
        let mut overlay = |canvas: &mut Canvas, state: &UiState| {
            calls.set(calls.get() + 1);
            assert_eq!(state.current_frame, 0);
            canvas.set_color(crate::Color::Black);
            canvas.set_pixel(5, 5);
            canvas.set_color(crate::Color::White);
            false
        };

        let mut ui = ui(&now);
        ui.set_frames([&mut frame as &mut dyn Frame]);
        ui.set_overlays([&mut overlay as &mut dyn Overlay]);
        ui.tick();

        assert_eq!(calls.get(), 1);
        assert!(ui.display().pixel(4, 4));
        assert!(!ui.display().pixel(5, 5));
    }

    #[test]
    fn test_indicator_icons() {
        let now = Cell::new(0);
        let (mut a, mut b, mut c) = (blank, blank, blank);
        let mut ui = ui(&now);
        ui.set_frames([&mut a as &mut dyn Frame, &mut b, &mut c]);
        ui.tick();

        // Active ring at slot 0, origin (46, 56)
        assert!(ui.display().pixel(49, 58));
        assert!(ui.display().pixel(47, 60));
        // Inactive dot at slot 1, origin (58, 56)
        assert!(ui.display().pixel(61, 60));
        assert!(!ui.display().pixel(59, 60));

        ui.set_indicator_direction(IndicatorDirection::RightLeft);
        ui.set_indicator_position(IndicatorPosition::Top);
        ui.tick();
        // Frame 0 is now the last slot, origin (70, 0)
        assert!(ui.display().pixel(73, 2));
        assert!(!ui.display().pixel(49, 2));
        assert!(ui.display().pixel(49, 4));
    }

    #[test]
    fn test_custom_symbols() {
        let now = Cell::new(0);
        let full = [0xFFu8; 8];
        let none = [0u8; 8];
        let mut a = blank;
        let mut ui = ui(&now);
        ui.set_frames([&mut a as &mut dyn Frame]);
        ui.set_active_symbol(&full);
        ui.set_inactive_symbol(&none);
        ui.tick();
        // One icon centered at (58, 56)
        assert_eq!(ui.display().buffer().lit_count(), 64);
        assert!(ui.display().pixel(58, 56));
    }

    #[test]
    fn test_flush_error_tolerated() {
        let now = Cell::new(0);
        let mut transport = RecordingTransport {
            fail_frames: true,
            ..Default::default()
        };
        let mut a = blank;
        let mut ui = Ui::new(Display::new(&mut transport), TestClock(&now));
        ui.set_frames([&mut a as &mut dyn Frame]);
        assert!(ui.tick());
        assert!(!ui.tick());
        assert_eq!(ui.state().ticks_since_last_state_switch, 2);
    }

    #[test]
    fn test_no_frames() {
        let now = Cell::new(0);
        let mut ui = ui(&now);
        ui.set_time_per_frame(33);
        ui.set_time_per_transition(33);
        for _ in 0..5 {
            ui.tick();
        }
        assert_eq!(ui.state().current_frame, 0);
        assert_eq!(ui.display().buffer().lit_count(), 0);
    }

    #[test]
    fn test_set_frames_clamps_current() {
        let now = Cell::new(0);
        let (mut a, mut b, mut c, mut d) = (blank, blank, blank, blank);
        let mut ui = ui(&now);
        ui.set_frames([&mut a as &mut dyn Frame, &mut b, &mut c]);
        ui.disable_auto_transition();
        ui.set_time_per_transition(33);
        ui.previous_frame();
        ui.tick();
        assert_eq!(ui.state().current_frame, 2);

        ui.set_frames([&mut d as &mut dyn Frame]);
        assert_eq!(ui.state().current_frame, 0);
        assert_eq!(ui.frame_count(), 1);
    }

    #[test]
    fn test_with_config() {
        let now = Cell::new(0);
        let config = UiConfig {
            update_interval_ms: 20,
            time_per_frame_ms: 1000,
            time_per_transition_ms: 200,
            auto_transition: false,
            forwards: false,
            animation: AnimationDirection::SlideDown,
            indicator_position: IndicatorPosition::Left,
            indicator_direction: IndicatorDirection::RightLeft,
        };
        let ui = Ui::with_config(
            Display::new(RecordingTransport::default()),
            TestClock(&now),
            &config,
        );
        assert_eq!(ui.update_interval(), 20);
        assert_eq!(ui.ticks_per_frame(), 50);
        assert_eq!(ui.ticks_per_transition(), 10);
    }
}
