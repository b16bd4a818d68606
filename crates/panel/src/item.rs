//! Button items: the interactive content of a grid cell.

use embedded_graphics::prelude::Point;

use crate::icon::{Icon, IconElement};
use crate::input::PressKind;

/// Activation handler attached to a button item.
///
/// Called on the input actor, after the panel lock has been released, so a
/// handler may call back into the panel (reset it, repopulate it, swap icons).
/// Any `Fn(PressKind, u16) + Sync` closure is a handler.
pub trait ButtonHandler: Sync {
    /// The item's cell was confirmed with `press`; `index` is the item's
    /// group identifier, not its grid coordinate.
    fn activate(&self, press: PressKind, index: u16);
}

impl<F> ButtonHandler for F
where
    F: Fn(PressKind, u16) + Sync,
{
    fn activate(&self, press: PressKind, index: u16) {
        self(press, index);
    }
}

/// One interactive grid cell.
#[derive(Clone, Copy)]
pub struct ButtonItem<'a> {
    index: u16,
    icon: IconElement<'a>,
    handler: Option<&'a dyn ButtonHandler>,
}

impl<'a> ButtonItem<'a> {
    /// Create an item without a handler.
    ///
    /// `index` groups cells that share icon state (see
    /// [`Panel::set_icons_by_index`](crate::Panel::set_icons_by_index));
    /// several cells may carry the same index.
    #[must_use]
    pub const fn new(
        index: u16,
        position: Point,
        icon: &'a Icon<'a>,
        icon_selected: &'a Icon<'a>,
    ) -> Self {
        Self {
            index,
            icon: IconElement::with_selected(position, icon, icon_selected),
            handler: None,
        }
    }

    /// Attach an activation handler
    #[must_use]
    pub const fn on_activate(mut self, handler: &'a dyn ButtonHandler) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Group identifier
    #[must_use]
    pub const fn index(&self) -> u16 {
        self.index
    }

    /// Icon placement and variants
    #[must_use]
    pub const fn icon(&self) -> &IconElement<'a> {
        &self.icon
    }

    /// Whether a handler is attached
    #[must_use]
    pub const fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    pub(crate) fn set_icons(&mut self, icon: &'a Icon<'a>, icon_selected: &'a Icon<'a>) {
        self.icon.set_icons(icon, icon_selected);
    }

    /// Run the handler, if any. Returns whether one ran.
    pub fn activate(&self, press: PressKind) -> bool {
        match self.handler {
            Some(handler) => {
                handler.activate(press, self.index);
                true
            }
            None => false,
        }
    }
}

impl core::fmt::Debug for ButtonItem<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ButtonItem")
            .field("index", &self.index)
            .field("icon", &self.icon)
            .field("has_handler", &self.has_handler())
            .finish()
    }
}
