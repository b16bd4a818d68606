//! Panel Testing Utilities
//!
//! Headless test doubles for the panel widget.
//!
//! - [`TestCanvas`]: an in-memory monochrome framebuffer implementing
//!   [`DrawTarget`], with pixel queries, assertions and an optional injected
//!   delay per draw call (to widen race windows in concurrency tests).
//! - [`InstrumentedRawMutex`]: an `embassy-sync` raw mutex that counts
//!   acquisitions and contention and flags any overlap of critical sections.
//!
//! # Quick start
//!
//! ```
//! use panel_testing::TestCanvas;
//! use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::{PrimitiveStyle, Rectangle}};
//!
//! let mut canvas = TestCanvas::new(16, 16);
//! Rectangle::new(Point::new(2, 2), Size::new(4, 4))
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut canvas)
//!     .unwrap();
//!
//! canvas.assert_pixel(3, 3, BinaryColor::On).unwrap();
//! assert_eq!(canvas.count_on(), 16);
//! ```

#![warn(clippy::all)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

use std::time::Duration;

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PointsIter, Rectangle},
};

mod mutex;

pub use mutex::{InstrumentedRawMutex, LockStats};

// ─────────────────────────────────────────────────────────────────────────────
// TestCanvas
// ─────────────────────────────────────────────────────────────────────────────

/// Headless monochrome framebuffer.
///
/// Pixels outside the canvas are dropped and counted rather than rejected,
/// so tests can place content near the edges without special setup.
pub struct TestCanvas {
    width: u32,
    height: u32,
    pixels: Vec<BinaryColor>,
    clears: usize,
    draw_calls: usize,
    clipped: usize,
    delay: Option<Duration>,
}

impl TestCanvas {
    /// Create a canvas of `width x height`, all pixels off.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BinaryColor::Off; (width * height) as usize],
            clears: 0,
            draw_calls: 0,
            clipped: 0,
            delay: None,
        }
    }

    /// Create a canvas of the given size.
    pub fn with_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }

    /// Sleep for `delay` at the start of every draw call.
    #[must_use]
    pub fn with_draw_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn pause(&self) {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
    }

    /// Colour at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<BinaryColor> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    /// Assert the colour at `(x, y)`.
    pub fn assert_pixel(&self, x: i32, y: i32, expected: BinaryColor) -> Result<(), String> {
        match self.pixel(x, y) {
            Some(actual) if actual == expected => Ok(()),
            Some(actual) => Err(format!(
                "pixel ({x}, {y}): expected {expected:?}, got {actual:?}\n{}",
                self.to_ascii()
            )),
            None => Err(format!("pixel ({x}, {y}) is outside the {}x{} canvas", self.width, self.height)),
        }
    }

    /// Number of lit pixels on the whole canvas.
    pub fn count_on(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_on()).count()
    }

    /// Number of lit pixels inside `area`.
    pub fn count_on_in(&self, area: Rectangle) -> usize {
        area.points()
            .filter(|p| self.pixel(p.x, p.y) == Some(BinaryColor::On))
            .count()
    }

    /// How many times the canvas was cleared.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// How many draw calls (pixel batches) reached the canvas.
    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    /// How many pixels fell outside the canvas.
    pub fn clipped(&self) -> usize {
        self.clipped
    }

    /// Text dump, `#` for lit and `.` for dark pixels, one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for row in self.pixels.chunks(self.width as usize) {
            out.extend(row.iter().map(|p| if p.is_on() { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}

impl OriginDimensions for TestCanvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for TestCanvas {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.pause();
        self.draw_calls += 1;
        for Pixel(point, color) in pixels {
            match self.offset(point.x, point.y) {
                Some(i) => self.pixels[i] = color,
                None => self.clipped += 1,
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pause();
        self.clears += 1;
        self.pixels.fill(color);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::PrimitiveStyle;

    #[test]
    fn test_new_canvas_is_dark() {
        let canvas = TestCanvas::new(8, 4);
        assert_eq!(canvas.count_on(), 0);
        assert_eq!(canvas.size(), Size::new(8, 4));
    }

    #[test]
    fn test_draw_and_query() {
        let mut canvas = TestCanvas::new(8, 8);
        Pixel(Point::new(2, 3), BinaryColor::On)
            .draw(&mut canvas)
            .unwrap();
        assert!(canvas.assert_pixel(2, 3, BinaryColor::On).is_ok());
        assert!(canvas.assert_pixel(3, 2, BinaryColor::On).is_err());
        assert_eq!(canvas.count_on(), 1);
    }

    #[test]
    fn test_out_of_bounds_pixels_are_clipped() {
        let mut canvas = TestCanvas::new(4, 4);
        Rectangle::new(Point::new(2, 2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut canvas)
            .unwrap();
        assert_eq!(canvas.count_on(), 4);
        assert_eq!(canvas.clipped(), 12);
    }

    #[test]
    fn test_clear_counts() {
        let mut canvas = TestCanvas::new(4, 4);
        canvas.clear(BinaryColor::On).unwrap();
        assert_eq!(canvas.clears(), 1);
        assert_eq!(canvas.count_on(), 16);
        assert_eq!(canvas.count_on_in(Rectangle::new(Point::zero(), Size::new(2, 2))), 4);
    }

    #[test]
    fn test_ascii_dump() {
        let mut canvas = TestCanvas::new(3, 2);
        Pixel(Point::new(1, 0), BinaryColor::On)
            .draw(&mut canvas)
            .unwrap();
        assert_eq!(canvas.to_ascii(), ".#.\n...\n");
    }
}
