//! Table building for one page

use ahash::{AHashMap, AHashSet};

use crate::border::resolve_conflicts;
use crate::document::{OutputCell, Table};
use crate::filter::FilteredSheet;
use crate::page_break::Band;
use crate::style::StyleConverter;

/// Span of a merge anchor on the page grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    rows: usize,
    cols: usize,
}

/// Build the table for the page covering `rows` × `cols` of `sheet`
///
/// `row_heights` and `col_widths` are the scaled sizes (mm) of every
/// filtered row and column; the page takes its slices of them.
pub fn build_table(
    sheet: &FilteredSheet<'_>,
    rows: Band,
    cols: Band,
    row_heights: &[f64],
    col_widths: &[f64],
    converter: &StyleConverter<'_>,
) -> Table {
    let (anchors, covered) = page_merges(sheet, rows, cols);

    let first = sheet.cells.partition_point(|c| c.row < rows.start);
    let mut cells: Vec<OutputCell> = Vec::new();
    let mut placed: AHashSet<(usize, usize)> = AHashSet::new();

    for fc in sheet.cells[first..]
        .iter()
        .take_while(|c| c.row <= rows.end)
        .filter(|c| cols.contains(c.col))
    {
        let key = (fc.row - rows.start, fc.col - cols.start);
        if covered.contains(&key) {
            continue;
        }
        let mut out = converter.convert(fc.cell, key.0, key.1);
        if let Some(span) = anchors.get(&key) {
            out.row_span = Some(span.rows);
            out.col_span = Some(span.cols);
        }
        placed.insert(key);
        cells.push(out);
    }

    // Merges whose anchor holds no data still occupy their area
    let mut missing: Vec<_> = anchors
        .iter()
        .filter(|(key, _)| !placed.contains(*key))
        .collect();
    if !missing.is_empty() {
        missing.sort_unstable_by_key(|(key, _)| **key);
        for (&(row, col), span) in missing {
            let mut out = converter.blank(row, col);
            out.row_span = Some(span.rows);
            out.col_span = Some(span.cols);
            cells.push(out);
        }
        cells.sort_by_key(|c| (c.row, c.col));
    }

    resolve_conflicts(&mut cells);

    Table {
        row_heights: row_heights[rows.indices()].to_vec(),
        column_widths: col_widths[cols.indices()].to_vec(),
        cells,
    }
}

/// Merges lying wholly on the page, keyed by page-local anchor, plus the
/// page-local keys they cover
fn page_merges(
    sheet: &FilteredSheet<'_>,
    rows: Band,
    cols: Band,
) -> (AHashMap<(usize, usize), Span>, AHashSet<(usize, usize)>) {
    let mut anchors = AHashMap::new();
    let mut covered = AHashSet::new();

    let on_page = sheet.merges.iter().filter(|m| {
        rows.contains(m.start_row)
            && rows.contains(m.end_row)
            && cols.contains(m.start_col)
            && cols.contains(m.end_col)
    });
    for m in on_page {
        let anchor = (m.start_row - rows.start, m.start_col - cols.start);
        anchors.insert(
            anchor,
            Span {
                rows: m.row_span(),
                cols: m.col_span(),
            },
        );
        for r in 0..m.row_span() {
            for c in 0..m.col_span() {
                if (r, c) != (0, 0) {
                    covered.insert((anchor.0 + r, anchor.1 + c));
                }
            }
        }
    }
    (anchors, covered)
}
