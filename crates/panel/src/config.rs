//! Panel configuration and compile-time constants.
//!
//! Capacities are fixed at compile time (no heap). The defaults cover a
//! remote-control layout of a few dozen cells; pick larger const generics on
//! [`Panel`](crate::Panel) when a screen needs more.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::Size};

/// Native width of the monochrome display in pixels (landscape).
pub const DISPLAY_WIDTH: u32 = 128;

/// Native height of the monochrome display in pixels (landscape).
pub const DISPLAY_HEIGHT: u32 = 64;

/// Default maximum number of grid cells (`columns * rows`).
pub const DEFAULT_CELLS: usize = 32;

/// Default maximum number of free-floating icons.
pub const DEFAULT_ICONS: usize = 16;

/// Default maximum number of text labels.
pub const DEFAULT_LABELS: usize = 16;

/// How the host view framework rotates the display for this panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Landscape, 128x64.
    Horizontal,
    /// Portrait, 64x128. Remote-control layouts use this.
    Vertical,
}

impl Orientation {
    /// Size of the canvas the host must supply in this orientation.
    #[must_use]
    pub const fn canvas_size(self) -> Size {
        match self {
            Orientation::Horizontal => Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT),
            Orientation::Vertical => Size::new(DISPLAY_HEIGHT, DISPLAY_WIDTH),
        }
    }
}

/// Per-panel presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    /// Orientation reported to the host view framework.
    pub orientation: Orientation,
    /// Colour the canvas is cleared to before each frame.
    pub background: BinaryColor,
    /// Colour label text is drawn in.
    pub text_color: BinaryColor,
}

impl PanelConfig {
    /// Portrait panel, dark background, lit text.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            orientation: Orientation::Vertical,
            background: BinaryColor::Off,
            text_color: BinaryColor::On,
        }
    }

    /// Landscape preset.
    #[must_use]
    pub const fn horizontal() -> Self {
        Self::new().orientation(Orientation::Horizontal)
    }

    /// Set orientation
    #[must_use]
    pub const fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set background colour
    #[must_use]
    pub const fn background(mut self, color: BinaryColor) -> Self {
        self.background = color;
        self
    }

    /// Set label text colour
    #[must_use]
    pub const fn text_color(mut self, color: BinaryColor) -> Self {
        self.text_color = color;
        self
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new()
    }
}
