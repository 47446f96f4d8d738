//! Row types

use crate::cell::Cell;
use crate::DEFAULT_ROW_HEIGHT;

/// A sheet row with its sparse cell list
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// Row index (0-based)
    pub index: u32,
    /// Custom height in points (None = default)
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: Option<f64>,
    /// Row is hidden
    #[cfg_attr(feature = "serde", serde(default))]
    pub hidden: bool,
    /// Populated cells, ordered by column
    #[cfg_attr(feature = "serde", serde(default))]
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create a new row with default settings
    pub fn new(index: u32) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    /// Height in points, falling back to the sheet default
    pub fn height_pt(&self) -> f64 {
        self.height.unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    /// Get a cell by column index
    pub fn cell(&self, col: u16) -> Option<&Cell> {
        self.cells
            .binary_search_by_key(&col, |c| c.col)
            .ok()
            .map(|i| &self.cells[i])
    }

    /// Insert a cell, replacing any cell already stored at its column
    pub fn insert_cell(&mut self, cell: Cell) {
        match self.cells.binary_search_by_key(&cell.col, |c| c.col) {
            Ok(i) => self.cells[i] = cell,
            Err(i) => self.cells.insert(i, cell),
        }
    }

    /// Get or create the cell at a column
    pub fn cell_entry(&mut self, col: u16) -> &mut Cell {
        let i = match self.cells.binary_search_by_key(&col, |c| c.col) {
            Ok(i) => i,
            Err(i) => {
                self.cells.insert(i, Cell::new(self.index, col, crate::CellValue::Empty));
                i
            }
        };
        &mut self.cells[i]
    }
}
