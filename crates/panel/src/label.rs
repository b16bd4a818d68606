//! Text labels

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_5X8, FONT_6X10, FONT_7X13_BOLD},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    text::Text,
};

/// Font selector for labels
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Headings, 7x13 bold
    Primary,
    /// Body text, 6x10
    Secondary,
    /// Dense captions, 5x8
    Keyboard,
    /// Large readouts (temperature, timers), 10x20
    BigNumbers,
}

impl Font {
    /// Backing monospace font.
    #[must_use]
    pub fn mono_font(self) -> &'static MonoFont<'static> {
        match self {
            Font::Primary => &FONT_7X13_BOLD,
            Font::Secondary => &FONT_6X10,
            Font::Keyboard => &FONT_5X8,
            Font::BigNumbers => &FONT_10X20,
        }
    }

    /// Glyph cell height in pixels
    #[must_use]
    pub fn line_height(self) -> u32 {
        self.mono_font().character_size.height
    }

    /// Glyph cell width in pixels
    #[must_use]
    pub fn char_width(self) -> u32 {
        self.mono_font().character_size.width
    }
}

/// A positioned string.
///
/// The text is borrowed, not copied: the caller keeps it alive for as long as
/// the label is on the panel and swaps it with
/// [`Panel::set_label_text`](crate::Panel::set_label_text).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelElement<'a> {
    index: i32,
    position: Point,
    font: Font,
    text: &'a str,
}

impl<'a> LabelElement<'a> {
    /// Create a label. `position` is the left end of the text baseline.
    #[must_use]
    pub const fn new(index: i32, position: Point, font: Font, text: &'a str) -> Self {
        Self {
            index,
            position,
            font,
            text,
        }
    }

    /// Identifier used for in-place text replacement
    #[must_use]
    pub const fn index(&self) -> i32 {
        self.index
    }

    /// Baseline start
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Font
    #[must_use]
    pub const fn font(&self) -> Font {
        self.font
    }

    /// Current text
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Point the label at new text.
    pub fn set_text(&mut self, text: &'a str) {
        self.text = text;
    }

    /// Draw the label in `color`.
    pub fn render<D>(&self, canvas: &mut D, color: BinaryColor) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let style = MonoTextStyle::new(self.font.mono_font(), color);
        Text::new(self.text, self.position, style).draw(canvas)?;
        Ok(())
    }
}
