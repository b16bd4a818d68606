//! Host view-framework contract.
//!
//! The display service owns the frame loop and the input queue. Anything it
//! can show implements [`View`]: it gets a canvas to paint on whenever a
//! frame is due, and every input event the focused view should see.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::DrawTarget};

use crate::config::Orientation;
use crate::input::InputEvent;

/// A drawable, input-receiving screen element.
pub trait View {
    /// Paint the current state onto `canvas`.
    fn draw<D>(&self, canvas: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>;

    /// Handle `event`. Returns `true` when consumed; unconsumed events
    /// propagate to the host (e.g. Back to the scene stack).
    fn input(&self, event: InputEvent) -> bool;

    /// Orientation the host should present this view in.
    fn orientation(&self) -> Orientation {
        Orientation::Horizontal
    }
}
