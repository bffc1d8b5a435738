//! Rotary encoder and push button
//!
//! Quadrature decoding with a small state machine for noise rejection.
//! Detents turn into frame navigation, button presses into UI toggles.

use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::Input;
use embassy_time::{with_timeout, Duration, Instant, Timer};

/// User input for the UI loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Nav {
    /// Clockwise detent
    Next,
    /// Counter-clockwise detent
    Previous,
    /// Short button press
    ToggleAutoTransition,
    /// Long button press
    ToggleInvert,
}

/// Encoder state machine states
#[derive(Clone, Copy, PartialEq)]
enum State {
    Idle,
    CwStep1,
    CwStep2,
    CcwStep1,
    CcwStep2,
}

/// Quadrature encoder handler
pub struct Encoder<'d> {
    a: Input<'d>,
    b: Input<'d>,
    state: State,
    last_a: bool,
    last_b: bool,
}

impl<'d> Encoder<'d> {
    pub fn new(a: Input<'d>, b: Input<'d>) -> Self {
        let last_a = a.is_high();
        let last_b = b.is_high();

        Self {
            a,
            b,
            state: State::Idle,
            last_a,
            last_b,
        }
    }

    /// Sample both lines after a 2 ms poll interval
    ///
    /// Returns a navigation step when a full detent completes.
    pub async fn poll(&mut self) -> Option<Nav> {
        Timer::after(Duration::from_millis(2)).await;

        let a = self.a.is_high();
        let b = self.b.is_high();

        if a == self.last_a && b == self.last_b {
            return None;
        }

        let nav = self.decode(a, b);

        self.last_a = a;
        self.last_b = b;

        nav
    }

    /// Advance the decoder
    ///
    /// A detent goes (1,1) -> (0,1) -> (0,0) -> back up when turning
    /// clockwise and (1,1) -> (1,0) -> (0,0) -> back up the other way.
    /// Falling back to (1,1) mid-sequence is treated as bounce.
    fn decode(&mut self, a: bool, b: bool) -> Option<Nav> {
        match self.state {
            State::Idle => {
                if !a && b {
                    self.state = State::CwStep1;
                } else if a && !b {
                    self.state = State::CcwStep1;
                }
                None
            }
            State::CwStep1 | State::CcwStep1 => {
                if !a && !b {
                    self.state = if self.state == State::CwStep1 {
                        State::CwStep2
                    } else {
                        State::CcwStep2
                    };
                } else if a && b {
                    self.state = State::Idle;
                }
                None
            }
            State::CwStep2 => {
                if a || b {
                    self.state = State::Idle;
                    return Some(Nav::Next);
                }
                None
            }
            State::CcwStep2 => {
                if a || b {
                    self.state = State::Idle;
                    return Some(Nav::Previous);
                }
                None
            }
        }
    }
}

/// Hold time that turns a press into a long press
const LONG_PRESS: Duration = Duration::from_millis(500);

/// Wait for the next debounced button press
pub async fn wait_for_press(btn: &mut ExtiInput<'_>) -> Nav {
    loop {
        btn.wait_for_falling_edge().await;
        let press_start = Instant::now();

        // Debounce
        Timer::after(Duration::from_millis(20)).await;
        if !btn.is_low() {
            continue;
        }

        let nav = match with_timeout(LONG_PRESS, btn.wait_for_rising_edge()).await {
            Ok(()) if press_start.elapsed().as_millis() > 50 => Some(Nav::ToggleAutoTransition),
            Ok(()) => None,
            Err(_) => {
                btn.wait_for_rising_edge().await;
                Some(Nav::ToggleInvert)
            }
        };

        // Debounce after release
        Timer::after(Duration::from_millis(50)).await;

        if let Some(nav) = nav {
            return nav;
        }
    }
}
