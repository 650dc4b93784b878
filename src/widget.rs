use crate::config::GridConfig;

/// Where a widget sits in the GUI's grid layout. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
}

/// Anything that can report its grid-layout placement.
pub trait GridPlacement {
    fn grid_info(&self) -> Placement;
}

/// A terminal cell acting as the display frame of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellFrame {
    pub row: usize,
    pub column: usize,
}

impl CellFrame {
    pub fn new(row: usize, column: usize) -> Self {
        CellFrame { row, column }
    }

    /// The frame that displays grid cell `(x, y)`.
    ///
    /// `y` must be below `dims.rows`; use [`CellFrame::try_for_cell`] when
    /// that is not known.
    pub fn for_cell(dims: GridConfig, x: usize, y: usize) -> Self {
        debug_assert!(y < dims.rows, "y = {} outside {} rows", y, dims.rows);
        CellFrame {
            row: dims.rows.saturating_sub(y).saturating_sub(1),
            column: x,
        }
    }

    /// Like [`CellFrame::for_cell`], but `None` when `y` is outside the grid.
    pub fn try_for_cell(dims: GridConfig, x: usize, y: usize) -> Option<Self> {
        let row = dims.rows.checked_sub(y)?.checked_sub(1)?;
        Some(CellFrame { row, column: x })
    }
}

impl GridPlacement for CellFrame {
    fn grid_info(&self) -> Placement {
        Placement {
            row: self.row,
            column: self.column,
        }
    }
}
