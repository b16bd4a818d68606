//! Icons: 1-bpp bitmaps placed at a fixed canvas position.

use embedded_graphics::{
    image::{Image, ImageRaw},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
};

/// A monochrome bitmap, one bit per pixel, MSB first, rows padded to a byte.
pub type Icon<'a> = ImageRaw<'a, BinaryColor>;

/// An icon placed on the canvas, with the variant shown while selected.
///
/// Free-floating decorations use the same bitmap for both variants; button
/// items swap to `icon_selected` while their cell holds the selection.
#[derive(Clone, Copy)]
pub struct IconElement<'a> {
    position: Point,
    icon: &'a Icon<'a>,
    icon_selected: &'a Icon<'a>,
}

impl<'a> IconElement<'a> {
    /// A decoration: same bitmap in both states.
    #[must_use]
    pub const fn new(position: Point, icon: &'a Icon<'a>) -> Self {
        Self {
            position,
            icon,
            icon_selected: icon,
        }
    }

    /// An icon with a distinct selected variant.
    #[must_use]
    pub const fn with_selected(
        position: Point,
        icon: &'a Icon<'a>,
        icon_selected: &'a Icon<'a>,
    ) -> Self {
        Self {
            position,
            icon,
            icon_selected,
        }
    }

    /// Top-left corner on the canvas
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Bitmap for the given selection state.
    #[must_use]
    pub const fn variant(&self, selected: bool) -> &'a Icon<'a> {
        if selected {
            self.icon_selected
        } else {
            self.icon
        }
    }

    /// Replace both bitmaps, keeping the position.
    pub fn set_icons(&mut self, icon: &'a Icon<'a>, icon_selected: &'a Icon<'a>) {
        self.icon = icon;
        self.icon_selected = icon_selected;
    }

    /// Bounding box of the normal variant.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.position, self.icon.size())
    }

    /// Draw the variant for `selected` at this element's position.
    pub fn render<D>(&self, canvas: &mut D, selected: bool) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        Image::new(self.variant(selected), self.position).draw(canvas)
    }
}

impl core::fmt::Debug for IconElement<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IconElement")
            .field("position", &self.position)
            .field("size", &self.icon.size())
            .finish_non_exhaustive()
    }
}
