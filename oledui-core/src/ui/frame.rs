//! Frame and overlay callbacks
//!
//! Closures with the matching signature implement both traits, so a frame
//! can be a plain `|canvas, state, x, y| { ...; false }`.

use crate::canvas::Canvas;
use crate::ui::state::UiState;

/// One page of the UI
pub trait Frame {
    /// Draw the frame with its origin shifted to `(x, y)`
    ///
    /// `(x, y)` is `(0, 0)` while the frame is fixed and slides off-screen
    /// during transitions. Return `true` to request another repaint on the
    /// next tick, e.g. for frames showing live data.
    fn render(&mut self, canvas: &mut Canvas, state: &UiState, x: i32, y: i32) -> bool;
}

impl<F> Frame for F
where
    F: FnMut(&mut Canvas, &UiState, i32, i32) -> bool,
{
    fn render(&mut self, canvas: &mut Canvas, state: &UiState, x: i32, y: i32) -> bool {
        self(canvas, state, x, y)
    }
}

/// Drawing on top of every frame, unaffected by transitions
pub trait Overlay {
    /// Draw the overlay; return `true` to request another repaint
    fn render(&mut self, canvas: &mut Canvas, state: &UiState) -> bool;
}

impl<F> Overlay for F
where
    F: FnMut(&mut Canvas, &UiState) -> bool,
{
    fn render(&mut self, canvas: &mut Canvas, state: &UiState) -> bool {
        self(canvas, state)
    }
}
