//! Sparse button matrix.
//!
//! A fixed-capacity arena of optional cells addressed by `(col, row)`.
//! Dimensions are set once by [`ButtonMatrix::reserve`] and stay fixed until
//! [`ButtonMatrix::clear`]. Storage is row-major; iteration is column-major
//! (every row of column 0, then column 1, ...), which is the paint order.

use heapless::Vec;

use crate::error::PanelError;
use crate::item::ButtonItem;
use crate::navigation::Occupancy;

/// Sparse `columns x rows` grid holding at most one [`ButtonItem`] per cell.
pub struct ButtonMatrix<'a, const CELLS: usize> {
    cells: Vec<Option<ButtonItem<'a>>, CELLS>,
    columns: u16,
    rows: u16,
}

impl<'a, const CELLS: usize> ButtonMatrix<'a, CELLS> {
    /// An unreserved, zero-dimension matrix.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: Vec::new(),
            columns: 0,
            rows: 0,
        }
    }

    /// Size the grid and mark every cell empty.
    pub fn reserve(&mut self, columns: u16, rows: u16) -> Result<(), PanelError> {
        if columns == 0 || rows == 0 {
            return Err(PanelError::ZeroDimension);
        }
        if self.is_reserved() {
            return Err(PanelError::AlreadyReserved);
        }
        let requested = usize::from(columns).saturating_mul(usize::from(rows));
        if requested > CELLS {
            return Err(PanelError::CapacityExceeded {
                requested,
                capacity: CELLS,
            });
        }

        self.cells.clear();
        for _ in 0..requested {
            self.cells
                .push(None)
                .map_err(|_| PanelError::CapacityExceeded {
                    requested,
                    capacity: CELLS,
                })?;
        }
        self.columns = columns;
        self.rows = rows;
        Ok(())
    }

    /// Drop every item and return to the unreserved state.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.columns = 0;
        self.rows = 0;
    }

    /// Whether `reserve` has been called since construction or the last clear.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.columns != 0
    }

    /// `(columns, rows)`
    #[must_use]
    pub fn dimensions(&self) -> (u16, u16) {
        (self.columns, self.rows)
    }

    fn slot(&self, col: u16, row: u16) -> Result<usize, PanelError> {
        if col >= self.columns || row >= self.rows {
            return Err(PanelError::OutOfBounds { col, row });
        }
        usize::from(row)
            .checked_mul(usize::from(self.columns))
            .and_then(|base| base.checked_add(usize::from(col)))
            .ok_or(PanelError::OutOfBounds { col, row })
    }

    /// Item at `(col, row)`; `Ok(None)` for an empty cell.
    pub fn get(&self, col: u16, row: u16) -> Result<Option<&ButtonItem<'a>>, PanelError> {
        let slot = self.slot(col, row)?;
        Ok(self.cells.get(slot).and_then(Option::as_ref))
    }

    /// Store `item` at `(col, row)`. The cell must be in range and empty.
    pub fn insert(&mut self, col: u16, row: u16, item: ButtonItem<'a>) -> Result<(), PanelError> {
        let slot = self.slot(col, row)?;
        let cell = self
            .cells
            .get_mut(slot)
            .ok_or(PanelError::OutOfBounds { col, row })?;
        if cell.is_some() {
            return Err(PanelError::CellOccupied { col, row });
        }
        *cell = Some(item);
        Ok(())
    }

    /// Occupied cells in paint order, with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, &ButtonItem<'a>)> + '_ {
        (0..self.columns).flat_map(move |col| {
            (0..self.rows).filter_map(move |row| {
                self.get(col, row)
                    .ok()
                    .flatten()
                    .map(|item| (col, row, item))
            })
        })
    }

    /// Every stored item, in storage order.
    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut ButtonItem<'a>> + '_ {
        self.cells.iter_mut().flatten()
    }

    /// Number of occupied cells
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().count()
    }
}

impl<const CELLS: usize> Default for ButtonMatrix<'_, CELLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CELLS: usize> Occupancy for ButtonMatrix<'_, CELLS> {
    fn columns(&self) -> u16 {
        self.columns
    }

    fn rows(&self) -> u16 {
        self.rows
    }

    fn is_occupied(&self, col: u16, row: u16) -> bool {
        matches!(self.get(col, row), Ok(Some(_)))
    }
}
