//! Selection navigation over a sparse grid.
//!
//! Moving one step along an axis picks the neighbouring row (or column) and
//! then scans it for the first occupied cell, starting at the current cross
//! coordinate and wrapping around. The selection therefore never lands on an
//! empty cell; if the whole target row or column is empty the move is a
//! silent no-op. There is no wrap along the movement axis itself.

/// Direction of a navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Previous row
    Up,
    /// Next row
    Down,
    /// Previous column
    Left,
    /// Next column
    Right,
}

impl Direction {
    /// Stable name for log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A `(column, row)` grid coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    /// Column, `0..columns`
    pub col: u16,
    /// Row, `0..rows`
    pub row: u16,
}

impl Cell {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Cell = Cell { col: 0, row: 0 };

    /// Create a cell coordinate
    #[must_use]
    pub const fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }
}

/// Read-only view of which grid cells hold an item.
pub trait Occupancy {
    /// Number of columns (0 before reservation).
    fn columns(&self) -> u16;

    /// Number of rows (0 before reservation).
    fn rows(&self) -> u16;

    /// Whether `(col, row)` holds an item. Out-of-range cells are empty.
    fn is_occupied(&self, col: u16, row: u16) -> bool;
}

/// Compute where the selection goes when stepping from `from` in `direction`.
///
/// Returns `None` when the selection must stay put: at the grid edge, when the
/// target row/column has no occupied cell, or when the grid has no dimensions.
#[must_use]
pub fn next_selection<G>(grid: &G, from: Cell, direction: Direction) -> Option<Cell>
where
    G: Occupancy + ?Sized,
{
    let columns = grid.columns();
    let rows = grid.rows();
    if columns == 0 || rows == 0 {
        return None;
    }

    match direction {
        Direction::Down => {
            let row = from.row.checked_add(1).filter(|r| *r < rows)?;
            scan_row(grid, row, from.col)
        }
        Direction::Up => {
            let row = from.row.checked_sub(1)?;
            scan_row(grid, row, from.col)
        }
        Direction::Right => {
            let col = from.col.checked_add(1).filter(|c| *c < columns)?;
            scan_column(grid, col, from.row)
        }
        Direction::Left => {
            let col = from.col.checked_sub(1)?;
            scan_column(grid, col, from.row)
        }
    }
}

/// `start, start+1, .., len-1, 0, .., start-1`
fn wrapping_from(start: u16, len: u16) -> impl Iterator<Item = u16> {
    (start..len).chain(0..start.min(len))
}

fn scan_row<G: Occupancy + ?Sized>(grid: &G, row: u16, start_col: u16) -> Option<Cell> {
    wrapping_from(start_col, grid.columns())
        .find(|&col| grid.is_occupied(col, row))
        .map(|col| Cell::new(col, row))
}

fn scan_column<G: Occupancy + ?Sized>(grid: &G, col: u16, start_row: u16) -> Option<Cell> {
    wrapping_from(start_row, grid.rows())
        .find(|&row| grid.is_occupied(col, row))
        .map(|row| Cell::new(col, row))
}
