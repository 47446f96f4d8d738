//! Row/column filtering
//!
//! Reduces a sheet to the dense grid that actually prints. The result is an
//! index-based view: local rows and columns map back to the sheet through
//! `row_indices` / `col_indices`, and cells are borrowed, never cloned.

use ahash::{AHashMap, AHashSet};
use sheetpage_core::{Cell, CellRange, Worksheet};

use crate::used_range::UsedRange;

/// Which part of the sheet is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Exactly this rectangle, minus hidden rows and columns
    PrintArea(CellRange),
    /// The used range, minus hidden and (optionally) empty rows and columns
    AutoTrim {
        skip_empty_rows: bool,
        skip_empty_columns: bool,
    },
}

/// A cell placed on the filtered grid
#[derive(Debug, Clone, Copy)]
pub struct FilteredCell<'a> {
    pub row: usize,
    pub col: usize,
    pub cell: &'a Cell,
}

/// Inclusive rectangle on the filtered grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalRange {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl LocalRange {
    pub fn row_span(&self) -> usize {
        self.end_row - self.start_row + 1
    }

    pub fn col_span(&self) -> usize {
        self.end_col - self.start_col + 1
    }
}

/// The printable grid of one sheet
#[derive(Debug, Clone, Default)]
pub struct FilteredSheet<'a> {
    /// Sheet row index of each local row
    pub row_indices: Vec<u32>,
    /// Sheet column index of each local column
    pub col_indices: Vec<u16>,
    /// Row heights in points, per local row
    pub row_heights: Vec<f64>,
    /// Column widths in characters, per local column
    pub col_widths: Vec<f64>,
    /// Cells ordered by local (row, col)
    pub cells: Vec<FilteredCell<'a>>,
    /// Merged ranges whose four corners all survived
    pub merges: Vec<LocalRange>,
    /// Merged ranges inside the printed block that lost a corner
    pub dropped_merges: Vec<CellRange>,
    row_map: AHashMap<u32, usize>,
    col_map: AHashMap<u16, usize>,
}

impl<'a> FilteredSheet<'a> {
    /// Filter `sheet` according to `mode`
    pub fn build(sheet: &'a Worksheet, mode: FilterMode) -> Self {
        let (rows, cols) = match mode {
            FilterMode::PrintArea(area) => print_area_axes(sheet, &area),
            FilterMode::AutoTrim {
                skip_empty_rows,
                skip_empty_columns,
            } => auto_trim_axes(sheet, skip_empty_rows, skip_empty_columns),
        };

        let mut filtered = FilteredSheet {
            row_heights: rows.iter().map(|&r| sheet.row_height(r)).collect(),
            col_widths: cols.iter().map(|&c| sheet.column_width(c)).collect(),
            row_map: rows.iter().enumerate().map(|(i, &r)| (r, i)).collect(),
            col_map: cols.iter().enumerate().map(|(i, &c)| (c, i)).collect(),
            row_indices: rows,
            col_indices: cols,
            ..Default::default()
        };
        filtered.collect_cells(sheet);
        filtered.remap_merges(sheet);
        filtered
    }

    pub fn row_count(&self) -> usize {
        self.row_indices.len()
    }

    pub fn col_count(&self) -> usize {
        self.col_indices.len()
    }

    /// Nothing to print
    pub fn is_empty(&self) -> bool {
        self.row_indices.is_empty() || self.col_indices.is_empty()
    }

    /// Local index of a sheet row, if it survived
    pub fn local_row(&self, row: u32) -> Option<usize> {
        self.row_map.get(&row).copied()
    }

    /// Local index of a sheet column, if it survived
    pub fn local_col(&self, col: u16) -> Option<usize> {
        self.col_map.get(&col).copied()
    }

    fn collect_cells(&mut self, sheet: &'a Worksheet) {
        for (local_row, &row_index) in self.row_indices.iter().enumerate() {
            let Some(row) = sheet.row(row_index) else {
                // Rows without backing data print as empty default-height rows
                continue;
            };
            for cell in &row.cells {
                if let Some(&local_col) = self.col_map.get(&cell.col) {
                    self.cells.push(FilteredCell {
                        row: local_row,
                        col: local_col,
                        cell,
                    });
                }
            }
        }
        self.cells.sort_by_key(|c| (c.row, c.col));
    }

    fn remap_merges(&mut self, sheet: &Worksheet) {
        for range in sheet.merged_regions() {
            let range = &CellRange::new(range.start, range.end);
            let corners = (
                self.local_row(range.start.row),
                self.local_col(range.start.col),
                self.local_row(range.end.row),
                self.local_col(range.end.col),
            );
            match corners {
                (Some(start_row), Some(start_col), Some(end_row), Some(end_col)) => {
                    self.merges.push(LocalRange {
                        start_row,
                        start_col,
                        end_row,
                        end_col,
                    })
                }
                _ if self.bounds().is_some_and(|b| b.overlaps(range)) => {
                    self.dropped_merges.push(*range)
                }
                // Entirely outside the printed block
                _ => {}
            }
        }
    }

    /// Sheet rectangle spanned by the surviving rows and columns
    fn bounds(&self) -> Option<CellRange> {
        Some(CellRange::from_indices(
            *self.row_indices.first()?,
            *self.col_indices.first()?,
            *self.row_indices.last()?,
            *self.col_indices.last()?,
        ))
    }
}

fn print_area_axes(sheet: &Worksheet, area: &CellRange) -> (Vec<u32>, Vec<u16>) {
    let rows = (area.start.row..=area.end.row)
        .filter(|&r| !sheet.is_row_hidden(r))
        .collect();
    let cols = (area.start.col..=area.end.col)
        .filter(|&c| !sheet.is_column_hidden(c))
        .collect();
    (rows, cols)
}

fn auto_trim_axes(
    sheet: &Worksheet,
    skip_empty_rows: bool,
    skip_empty_columns: bool,
) -> (Vec<u32>, Vec<u16>) {
    // An empty sheet scans the degenerate A1 box; the skip flags then drop it
    let used = UsedRange::compute(sheet);

    let mut effective_rows = AHashSet::new();
    let mut effective_cols = AHashSet::new();
    for cell in sheet.iter_cells().filter(|c| c.is_effective()) {
        effective_rows.insert(cell.row);
        effective_cols.insert(cell.col);
    }

    let rows = (used.min_row..=used.max_row)
        .filter(|&r| !sheet.is_row_hidden(r))
        .filter(|r| !skip_empty_rows || effective_rows.contains(r))
        .collect();
    let cols = (used.min_col..=used.max_col)
        .filter(|&c| !sheet.is_column_hidden(c))
        .filter(|c| !skip_empty_columns || effective_cols.contains(c))
        .collect();
    (rows, cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetpage_core::CellAddress;

    const TRIM: FilterMode = FilterMode::AutoTrim {
        skip_empty_rows: true,
        skip_empty_columns: true,
    };

    fn positions(f: &FilteredSheet<'_>) -> Vec<(usize, usize)> {
        f.cells.iter().map(|c| (c.row, c.col)).collect()
    }

    #[test]
    fn test_auto_trim_single_cell() {
        let mut ws = Worksheet::new("S");
        ws.set_cell_value_at(5, 5, "Target").unwrap();

        let f = FilteredSheet::build(&ws, TRIM);
        assert_eq!(f.row_indices, vec![5]);
        assert_eq!(f.col_indices, vec![5]);
        assert_eq!(positions(&f), vec![(0, 0)]);
        assert_eq!(f.local_row(5), Some(0));
        assert_eq!(f.local_row(4), None);
    }

    #[test]
    fn test_auto_trim_skips_hidden_and_empty() {
        let mut ws = Worksheet::new("S");
        ws.set_cell_value_at(0, 0, "a").unwrap();
        ws.set_cell_value_at(2, 2, "b").unwrap();
        ws.set_cell_value_at(3, 1, "hidden").unwrap();
        ws.set_row_hidden(3, true);
        ws.set_cell_value_at(4, 4, "c").unwrap();
        ws.set_column_hidden(4, true);

        let f = FilteredSheet::build(&ws, TRIM);
        assert_eq!(f.row_indices, vec![0, 2, 4]);
        assert_eq!(f.col_indices, vec![0, 1, 2]);
        // (4,4) lost its column
        assert_eq!(positions(&f), vec![(0, 0), (1, 2)]);

        let keep = FilterMode::AutoTrim {
            skip_empty_rows: false,
            skip_empty_columns: false,
        };
        let f = FilteredSheet::build(&ws, keep);
        assert_eq!(f.row_indices, vec![0, 1, 2, 4]);
        assert_eq!(f.col_indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_print_area_synthesizes_rows() {
        let mut ws = Worksheet::new("S");
        ws.set_cell_value_at(1, 1, "x").unwrap();
        ws.set_cell_value_at(1, 9, "outside").unwrap();
        ws.set_row_height(1, 30.0);
        ws.set_column_hidden(2, true);

        let area = CellRange::parse("B1:D4").unwrap();
        let f = FilteredSheet::build(&ws, FilterMode::PrintArea(area));

        assert_eq!(f.row_indices, vec![0, 1, 2, 3]);
        assert_eq!(f.col_indices, vec![1, 3]);
        assert_eq!(f.row_heights, vec![15.0, 30.0, 15.0, 15.0]);
        assert_eq!(positions(&f), vec![(1, 0)]);
    }

    #[test]
    fn test_merge_remapping() {
        let mut ws = Worksheet::new("S");
        for r in 0..4 {
            for c in 0..4 {
                ws.set_cell_value_at(r, c, "v").unwrap();
            }
        }
        ws.set_row_hidden(1, true);
        ws.merge_cells(&CellRange::parse("A1:B3").unwrap()).unwrap();
        ws.merge_cells(&CellRange::parse("C2:D2").unwrap()).unwrap();
        ws.merge_cells(&CellRange::parse("C4:D5").unwrap()).unwrap();

        let f = FilteredSheet::build(&ws, TRIM);
        assert_eq!(
            f.merges,
            vec![LocalRange {
                start_row: 0,
                start_col: 0,
                end_row: 1,
                end_col: 1
            }]
        );
        // C2:D2 sits on the hidden row; C4:D5 loses its bottom edge
        assert_eq!(
            f.dropped_merges,
            vec![
                CellRange::parse("C2:D2").unwrap(),
                CellRange::parse("C4:D5").unwrap()
            ]
        );

        let area = FilterMode::PrintArea(CellRange::parse("A1:B4").unwrap());
        let f = FilteredSheet::build(&ws, area);
        assert_eq!(f.merges.len(), 1);
        assert!(f.dropped_merges.is_empty());
    }

    #[test]
    fn test_empty_sheet() {
        let ws = Worksheet::new("S");
        let f = FilteredSheet::build(&ws, TRIM);
        assert!(f.is_empty());
        assert!(f.cells.is_empty());
    }

    #[test]
    fn test_empty_sheet_keeps_a1_without_skipping() {
        let ws = Worksheet::new("S");
        let keep = FilterMode::AutoTrim {
            skip_empty_rows: false,
            skip_empty_columns: false,
        };
        let f = FilteredSheet::build(&ws, keep);
        assert_eq!(f.row_indices, vec![0]);
        assert_eq!(f.col_indices, vec![0]);
        assert!(f.cells.is_empty());

        let rows_only = FilterMode::AutoTrim {
            skip_empty_rows: true,
            skip_empty_columns: false,
        };
        assert!(FilteredSheet::build(&ws, rows_only).is_empty());
    }

    #[test]
    fn test_merge_with_reversed_corners() {
        let mut ws = Worksheet::new("S");
        for r in 0..3 {
            for c in 0..3 {
                ws.set_cell_value_at(r, c, "v").unwrap();
            }
        }
        let reversed = CellRange {
            start: CellAddress::new(2, 1),
            end: CellAddress::new(0, 0),
        };
        ws.merge_cells(&reversed).unwrap();

        let f = FilteredSheet::build(&ws, TRIM);
        assert_eq!(
            f.merges,
            vec![LocalRange {
                start_row: 0,
                start_col: 0,
                end_row: 2,
                end_col: 1
            }]
        );
        assert_eq!(f.merges[0].row_span(), 3);
        assert_eq!(f.merges[0].col_span(), 2);
    }
}
