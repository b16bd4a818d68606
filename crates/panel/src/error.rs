//! Contract violations reported by the panel.
//!
//! None of these are runtime conditions: each one means the embedding code
//! configured the panel wrongly. The plain panel operations abort on them;
//! the `try_*` variants hand them back instead.

/// Panel contract violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// `reserve` called with a zero column or row count
    ZeroDimension,
    /// `reserve` called on a panel that already has dimensions
    AlreadyReserved,
    /// `columns * rows` does not fit the compile-time cell capacity
    CapacityExceeded {
        /// Cells requested
        requested: usize,
        /// Cells available
        capacity: usize,
    },
    /// Cell coordinate outside the reserved grid
    OutOfBounds {
        /// Column requested
        col: u16,
        /// Row requested
        row: u16,
    },
    /// Cell already holds a button item
    CellOccupied {
        /// Column requested
        col: u16,
        /// Row requested
        row: u16,
    },
    /// Icon collection is at capacity
    IconsFull,
    /// Label collection is at capacity
    LabelsFull,
}

#[cfg(feature = "std")]
impl std::error::Error for PanelError {}

impl core::fmt::Display for PanelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "panel dimensions must be non-zero"),
            Self::AlreadyReserved => write!(f, "panel already reserved; reset it first"),
            Self::CapacityExceeded {
                requested,
                capacity,
            } => write!(
                f,
                "panel needs {requested} cells but only {capacity} are available"
            ),
            Self::OutOfBounds { col, row } => {
                write!(f, "cell ({col}, {row}) is outside the reserved grid")
            }
            Self::CellOccupied { col, row } => write!(f, "cell ({col}, {row}) is already occupied"),
            Self::IconsFull => write!(f, "icon capacity exhausted"),
            Self::LabelsFull => write!(f, "label capacity exhausted"),
        }
    }
}
