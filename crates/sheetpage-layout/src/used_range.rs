//! Used-range calculation

use sheetpage_core::{Cell, CellRange, Worksheet};

/// Inclusive bounding box of all effective cells of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UsedRange {
    pub min_row: u32,
    pub max_row: u32,
    pub min_col: u16,
    pub max_col: u16,
}

impl UsedRange {
    /// Smallest box holding every effective cell, or `None` for a sheet
    /// without any
    pub fn find(sheet: &Worksheet) -> Option<Self> {
        sheet
            .iter_cells()
            .filter(|c| c.is_effective())
            .fold(None, |acc: Option<UsedRange>, cell| {
                Some(match acc {
                    None => UsedRange::at(cell),
                    Some(r) => r.extend(cell),
                })
            })
    }

    /// Like [`find`](Self::find), but an empty sheet yields the
    /// degenerate `{0, 0, 0, 0}` box
    pub fn compute(sheet: &Worksheet) -> Self {
        Self::find(sheet).unwrap_or_default()
    }

    pub fn to_cell_range(&self) -> CellRange {
        CellRange::from_indices(self.min_row, self.min_col, self.max_row, self.max_col)
    }

    fn at(cell: &Cell) -> Self {
        Self {
            min_row: cell.row,
            max_row: cell.row,
            min_col: cell.col,
            max_col: cell.col,
        }
    }

    fn extend(self, cell: &Cell) -> Self {
        Self {
            min_row: self.min_row.min(cell.row),
            max_row: self.max_row.max(cell.row),
            min_col: self.min_col.min(cell.col),
            max_col: self.max_col.max(cell.col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetpage_core::{BorderLineStyle, BorderStyle, Color, FillStyle, PatternType, Style};

    #[test]
    fn test_empty_sheet_is_degenerate() {
        let ws = Worksheet::new("Empty");
        assert_eq!(UsedRange::find(&ws), None);
        assert_eq!(UsedRange::compute(&ws), UsedRange::default());
    }

    #[test]
    fn test_single_cell() {
        let mut ws = Worksheet::new("S");
        ws.set_cell_value_at(7, 3, "x").unwrap();
        assert_eq!(
            UsedRange::compute(&ws),
            UsedRange {
                min_row: 7,
                max_row: 7,
                min_col: 3,
                max_col: 3
            }
        );
    }

    #[test]
    fn test_styles_count_but_font_only_does_not() {
        let mut ws = Worksheet::new("S");
        ws.set_cell_style_at(1, 1, &Style::new().bold(true)).unwrap();
        ws.set_cell_value_at(0, 5, "").unwrap();
        assert_eq!(UsedRange::find(&ws), None);

        ws.set_cell_style_at(
            2,
            4,
            &Style::new().with_border(BorderStyle::new().with_bottom(BorderLineStyle::Thin, Color::Auto)),
        )
        .unwrap();
        ws.set_cell_style_at(
            9,
            2,
            &Style {
                fill: Some(FillStyle::solid(Color::RED)),
                ..Default::default()
            },
        )
        .unwrap();
        ws.set_cell_style_at(
            20,
            20,
            &Style {
                fill: Some(FillStyle::pattern(PatternType::None, Color::RED, Color::RED)),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(
            UsedRange::find(&ws),
            Some(UsedRange {
                min_row: 2,
                max_row: 9,
                min_col: 2,
                max_col: 4
            })
        );
    }
}
