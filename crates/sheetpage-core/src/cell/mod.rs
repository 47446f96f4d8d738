//! Cell-related types
//!
//! This module contains:
//! - [`Cell`] - A populated cell: position, value, formula source and style
//! - [`CellValue`] - The value stored in a cell
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A range of cells (e.g., "A1:B10")

mod address;
mod value;

pub use address::{CellAddress, CellRange};
pub use value::{CellError, CellValue, RichTextRun};

use crate::style::Style;

/// A single cell of a row's sparse cell list
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Row index (0-based); taken from the enclosing row when deserialized
    #[cfg_attr(feature = "serde", serde(default))]
    pub row: u32,
    /// Column index (0-based)
    pub col: u16,
    /// The cell's pre-evaluated value
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: CellValue,
    /// Formula source text, if the cell holds a formula
    #[cfg_attr(feature = "serde", serde(default))]
    pub formula: Option<String>,
    /// Cell formatting
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: Style,
}

impl Cell {
    /// Create a cell with a value and no style
    pub fn new<V: Into<CellValue>>(row: u32, col: u16, value: V) -> Self {
        Self {
            row,
            col,
            value: value.into(),
            formula: None,
            style: Style::default(),
        }
    }

    /// Set the style
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the formula source
    pub fn with_formula<S: Into<String>>(mut self, formula: S) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// A cell is *effective* when it contributes anything printable:
    /// a value, a visible border side, or a fill.
    pub fn is_effective(&self) -> bool {
        !self.value.is_empty() || self.style.has_visible_border() || self.style.has_fill()
    }
}
