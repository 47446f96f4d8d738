//! Worksheet type

use crate::cell::{Cell, CellAddress, CellRange, CellValue};
use crate::column::Column;
use crate::error::{Error, Result};
use crate::image::Image;
use crate::page_setup::PageSetup;
use crate::row::Row;
use crate::style::Style;
use crate::{MAX_COLS, MAX_ROWS};

/// A worksheet (single sheet in a workbook)
///
/// Rows and columns are kept sorted by index; only rows and columns that
/// carry data or custom settings are stored.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "WorksheetData"))]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Position in the workbook (assigned by the workbook)
    index: usize,
    /// Print settings
    page_setup: PageSetup,
    /// Declared print area
    print_area: Option<CellRange>,
    /// Rows ordered by index
    rows: Vec<Row>,
    /// Columns ordered by index
    columns: Vec<Column>,
    /// Merged regions
    merged_regions: Vec<CellRange>,
    /// Anchored images
    images: Vec<Image>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the sheet in its workbook
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    // === Page setup ===

    /// Get the print settings
    pub fn page_setup(&self) -> &PageSetup {
        &self.page_setup
    }

    /// Get the print settings mutably
    pub fn page_setup_mut(&mut self) -> &mut PageSetup {
        &mut self.page_setup
    }

    /// Get the declared print area
    pub fn print_area(&self) -> Option<&CellRange> {
        self.print_area.as_ref()
    }

    /// Set or clear the print area
    pub fn set_print_area(&mut self, range: Option<CellRange>) {
        self.print_area = range.map(|r| CellRange::new(r.start, r.end));
    }

    // === Cell Access ===

    /// All stored rows, ordered by index
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a row by index
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows
            .binary_search_by_key(&index, |r| r.index)
            .ok()
            .map(|i| &self.rows[i])
    }

    /// Get a cell by row and column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&Cell> {
        self.row(row).and_then(|r| r.cell(col))
    }

    /// Get a cell by address string (e.g., "A1")
    pub fn cell(&self, address: &str) -> Result<Option<&Cell>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_at(addr.row, addr.col))
    }

    /// Iterate over every stored cell, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }

    /// Number of stored cells
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
    }

    /// Check if the worksheet stores no cells
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    // === Cell Modification ===

    /// Insert a fully built cell, replacing any cell at the same position
    pub fn insert_cell(&mut self, cell: Cell) -> Result<()> {
        self.validate_cell_position(cell.row, cell.col)?;
        self.row_entry(cell.row).insert_cell(cell);
        Ok(())
    }

    /// Set a cell value by address string
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    /// Set a cell value by row and column indices
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.row_entry(row).cell_entry(col).value = value.into();
        Ok(())
    }

    /// Set a cell formula source by row and column indices
    ///
    /// The cached value is left untouched.
    pub fn set_cell_formula_at(&mut self, row: u32, col: u16, formula: &str) -> Result<()> {
        self.validate_cell_position(row, col)?;
        let formula = if formula.starts_with('=') {
            formula.to_string()
        } else {
            format!("={}", formula)
        };
        self.row_entry(row).cell_entry(col).formula = Some(formula);
        Ok(())
    }

    /// Set a cell style by address string
    pub fn set_cell_style(&mut self, address: &str, style: &Style) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_style_at(addr.row, addr.col, style)
    }

    /// Set a cell style by row and column indices
    pub fn set_cell_style_at(&mut self, row: u32, col: u16, style: &Style) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.row_entry(row).cell_entry(col).style = style.clone();
        Ok(())
    }

    // === Row/Column Operations ===

    /// Get row height in points
    pub fn row_height(&self, row: u32) -> f64 {
        self.row(row)
            .map(Row::height_pt)
            .unwrap_or(crate::DEFAULT_ROW_HEIGHT)
    }

    /// Set row height in points
    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.row_entry(row).height = Some(height);
    }

    /// Check if row is hidden
    pub fn is_row_hidden(&self, row: u32) -> bool {
        self.row(row).is_some_and(|r| r.hidden)
    }

    /// Set row hidden state
    pub fn set_row_hidden(&mut self, row: u32, hidden: bool) {
        self.row_entry(row).hidden = hidden;
    }

    /// All stored columns, ordered by index
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by index
    pub fn column(&self, index: u16) -> Option<&Column> {
        self.columns
            .binary_search_by_key(&index, |c| c.index)
            .ok()
            .map(|i| &self.columns[i])
    }

    /// Get column width in characters
    pub fn column_width(&self, col: u16) -> f64 {
        self.column(col)
            .map(Column::width_chars)
            .unwrap_or(crate::DEFAULT_COLUMN_WIDTH)
    }

    /// Set column width in characters
    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_entry(col).width = Some(width);
    }

    /// Check if column is hidden
    pub fn is_column_hidden(&self, col: u16) -> bool {
        self.column(col).is_some_and(|c| c.hidden)
    }

    /// Set column hidden state
    pub fn set_column_hidden(&mut self, col: u16, hidden: bool) {
        self.column_entry(col).hidden = hidden;
    }

    // === Merged Cells ===

    /// Get merged regions
    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged_regions
    }

    /// Merge cells
    pub fn merge_cells(&mut self, range: &CellRange) -> Result<()> {
        let range = CellRange::new(range.start, range.end);
        if self.merged_regions.iter().any(|m| m.overlaps(&range)) {
            return Err(Error::other(format!(
                "Cell range {} overlaps an existing merged region",
                range
            )));
        }
        self.merged_regions.push(range);
        Ok(())
    }

    // === Images ===

    /// Get anchored images
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    /// Anchor an image on the sheet
    pub fn add_image(&mut self, image: Image) {
        self.images.push(image);
    }

    // === Internals ===

    fn row_entry(&mut self, index: u32) -> &mut Row {
        let i = match self.rows.binary_search_by_key(&index, |r| r.index) {
            Ok(i) => i,
            Err(i) => {
                self.rows.insert(i, Row::new(index));
                i
            }
        };
        &mut self.rows[i]
    }

    fn column_entry(&mut self, index: u16) -> &mut Column {
        let i = match self.columns.binary_search_by_key(&index, |c| c.index) {
            Ok(i) => i,
            Err(i) => {
                self.columns.insert(i, Column::new(index));
                i
            }
        };
        &mut self.columns[i]
    }

    fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col as u32, MAX_COLS - 1));
        }
        Ok(())
    }
}

/// Wire shape of a worksheet
///
/// Rows, cells and columns may arrive in any order and may repeat; they are
/// re-inserted through the sorted accessors. A repeated row is merged into the
/// first, later cells replacing earlier ones at the same column. Every cell
/// takes its row from the row that holds it.
#[cfg(feature = "serde")]
#[derive(Default, serde::Deserialize)]
#[serde(default)]
struct WorksheetData {
    name: String,
    page_setup: PageSetup,
    print_area: Option<CellRange>,
    rows: Vec<Row>,
    columns: Vec<Column>,
    merged_regions: Vec<CellRange>,
    images: Vec<Image>,
}

#[cfg(feature = "serde")]
impl TryFrom<WorksheetData> for Worksheet {
    type Error = Error;

    fn try_from(data: WorksheetData) -> Result<Self> {
        let mut ws = Worksheet::new(data.name);
        ws.page_setup = data.page_setup;
        ws.set_print_area(data.print_area);

        for row in data.rows {
            for cell in &row.cells {
                ws.validate_cell_position(row.index, cell.col)?;
            }
            ws.validate_cell_position(row.index, 0)?;

            let entry = ws.row_entry(row.index);
            if row.height.is_some() {
                entry.height = row.height;
            }
            entry.hidden |= row.hidden;
            for mut cell in row.cells {
                cell.row = row.index;
                entry.insert_cell(cell);
            }
        }

        for column in data.columns {
            ws.validate_cell_position(0, column.index)?;
            let index = column.index;
            *ws.column_entry(index) = column;
        }

        for range in &data.merged_regions {
            ws.merge_cells(range)?;
        }
        ws.images = data.images;
        Ok(ws)
    }
}
