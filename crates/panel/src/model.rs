//! Panel model: everything the render and input actors share.
//!
//! The model itself is plain data with no locking; [`Panel`](crate::Panel)
//! owns it behind a mutex and is the only way other code reaches it.

use embedded_graphics::prelude::Point;
use heapless::Vec;

use crate::error::PanelError;
use crate::icon::{Icon, IconElement};
use crate::item::ButtonItem;
use crate::label::{Font, LabelElement};
use crate::matrix::ButtonMatrix;
use crate::navigation::{next_selection, Cell, Direction};

/// Grid, decorations, labels and selection of one panel.
pub struct PanelModel<'a, const CELLS: usize, const ICONS: usize, const LABELS: usize> {
    matrix: ButtonMatrix<'a, CELLS>,
    icons: Vec<IconElement<'a>, ICONS>,
    labels: Vec<LabelElement<'a>, LABELS>,
    selection: Cell,
    dirty: bool,
}

impl<'a, const CELLS: usize, const ICONS: usize, const LABELS: usize>
    PanelModel<'a, CELLS, ICONS, LABELS>
{
    /// Empty, zero-dimension model with the selection at the origin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            matrix: ButtonMatrix::new(),
            icons: Vec::new(),
            labels: Vec::new(),
            selection: Cell::ORIGIN,
            dirty: true,
        }
    }

    /// Size the button grid.
    pub fn reserve(&mut self, columns: u16, rows: u16) -> Result<(), PanelError> {
        self.matrix.reserve(columns, rows)?;
        self.dirty = true;
        Ok(())
    }

    /// Store a button item at `(col, row)`.
    pub fn add_item(&mut self, col: u16, row: u16, item: ButtonItem<'a>) -> Result<(), PanelError> {
        self.matrix.insert(col, row, item)?;
        self.dirty = true;
        Ok(())
    }

    /// Append a decoration icon.
    pub fn add_icon(&mut self, position: Point, icon: &'a Icon<'a>) -> Result<(), PanelError> {
        self.icons
            .push(IconElement::new(position, icon))
            .map_err(|_| PanelError::IconsFull)?;
        self.dirty = true;
        Ok(())
    }

    /// Append a label.
    pub fn add_label(
        &mut self,
        index: i32,
        position: Point,
        font: Font,
        text: &'a str,
    ) -> Result<(), PanelError> {
        self.labels
            .push(LabelElement::new(index, position, font, text))
            .map_err(|_| PanelError::LabelsFull)?;
        self.dirty = true;
        Ok(())
    }

    /// Swap the bitmaps of every item whose index is `index`. Returns how
    /// many items changed.
    pub fn set_icons_by_index(
        &mut self,
        index: u16,
        icon: &'a Icon<'a>,
        icon_selected: &'a Icon<'a>,
    ) -> usize {
        let mut updated = 0usize;
        for item in self.matrix.items_mut().filter(|item| item.index() == index) {
            item.set_icons(icon, icon_selected);
            updated = updated.saturating_add(1);
        }
        self.dirty = true;
        updated
    }

    /// Point every label whose index is `index` at `text`. Returns how many
    /// labels changed.
    pub fn set_label_text(&mut self, index: i32, text: &'a str) -> usize {
        let mut updated = 0usize;
        for label in self.labels.iter_mut().filter(|label| label.index() == index) {
            label.set_text(text);
            updated = updated.saturating_add(1);
        }
        self.dirty = true;
        updated
    }

    /// Move the selection back to `(0, 0)` without checking occupancy.
    pub fn reset_selection(&mut self) {
        self.selection = Cell::ORIGIN;
        self.dirty = true;
    }

    /// Drop all content and return to the freshly constructed state.
    pub fn reset(&mut self) {
        self.matrix.clear();
        self.icons.clear();
        self.labels.clear();
        self.selection = Cell::ORIGIN;
        self.dirty = true;
    }

    /// Step the selection. Returns whether it moved.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        self.dirty = true;
        match next_selection(&self.matrix, self.selection, direction) {
            Some(cell) => {
                self.selection = cell;
                true
            }
            None => false,
        }
    }

    /// Copy of the item under the selection, if the cell is occupied.
    #[must_use]
    pub fn selected_item(&self) -> Option<ButtonItem<'a>> {
        self.item(self.selection.col, self.selection.row)
    }

    /// Copy of the item at `(col, row)`; `None` for empty or out-of-range cells.
    #[must_use]
    pub fn item(&self, col: u16, row: u16) -> Option<ButtonItem<'a>> {
        self.matrix.get(col, row).ok().flatten().copied()
    }

    /// Current selection
    #[must_use]
    pub fn selection(&self) -> Cell {
        self.selection
    }

    /// Button grid
    #[must_use]
    pub fn matrix(&self) -> &ButtonMatrix<'a, CELLS> {
        &self.matrix
    }

    /// Decorations in insertion order
    #[must_use]
    pub fn icons(&self) -> &[IconElement<'a>] {
        &self.icons
    }

    /// Labels in insertion order
    #[must_use]
    pub fn labels(&self) -> &[LabelElement<'a>] {
        &self.labels
    }

    /// Flag a redraw without changing content.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Return and clear the redraw flag.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }
}

impl<const CELLS: usize, const ICONS: usize, const LABELS: usize> Default
    for PanelModel<'_, CELLS, ICONS, LABELS>
{
    fn default() -> Self {
        Self::new()
    }
}
