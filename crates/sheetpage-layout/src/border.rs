//! Border conversion and conflict resolution
//!
//! Two adjacent cells may both declare the edge they share. Printing both
//! would double the line, so one value is chosen and written to both sides:
//! the wider line wins, then `double > solid > dashed > dotted`, then the
//! first cell in reading order.

use ahash::AHashMap;
use sheetpage_core::{BorderEdge, BorderLineStyle, BorderStyle};

use crate::document::{BorderLine, CellBorders, Edge, LineStyle, OutputCell};
use crate::units::pixels_to_mm;

/// Line width in 96 dpi pixels for a spreadsheet border style
pub fn width_px(style: BorderLineStyle) -> f64 {
    match style {
        BorderLineStyle::None => 0.0,
        BorderLineStyle::Hair => 0.5,
        BorderLineStyle::Thin
        | BorderLineStyle::Dotted
        | BorderLineStyle::Dashed
        | BorderLineStyle::DashDot
        | BorderLineStyle::DashDotDot => 1.0,
        BorderLineStyle::Medium
        | BorderLineStyle::MediumDashed
        | BorderLineStyle::MediumDashDot
        | BorderLineStyle::MediumDashDotDot
        | BorderLineStyle::SlantDashDot => 2.0,
        BorderLineStyle::Thick | BorderLineStyle::Double => 3.0,
    }
}

/// Rendered line style for a spreadsheet border style
pub fn line_style(style: BorderLineStyle) -> Option<LineStyle> {
    Some(match style {
        BorderLineStyle::None => return None,
        BorderLineStyle::Double => LineStyle::Double,
        BorderLineStyle::Dotted => LineStyle::Dotted,
        BorderLineStyle::Dashed
        | BorderLineStyle::DashDot
        | BorderLineStyle::DashDotDot
        | BorderLineStyle::MediumDashed
        | BorderLineStyle::MediumDashDot
        | BorderLineStyle::MediumDashDotDot
        | BorderLineStyle::SlantDashDot => LineStyle::Dashed,
        BorderLineStyle::Thin
        | BorderLineStyle::Medium
        | BorderLineStyle::Thick
        | BorderLineStyle::Hair => LineStyle::Solid,
    })
}

/// Convert one edge; `None` styles produce no line
pub fn convert_edge(edge: &BorderEdge) -> Option<BorderLine> {
    Some(BorderLine {
        style: line_style(edge.style)?,
        width: pixels_to_mm(width_px(edge.style)),
        color: edge.color.to_css_hex(),
    })
}

/// Convert all four sides; `None` when nothing is drawn
pub fn convert_borders(border: &BorderStyle) -> Option<CellBorders> {
    let side = |edge: &Option<BorderEdge>| edge.as_ref().and_then(convert_edge);
    let borders = CellBorders {
        top: side(&border.top),
        right: side(&border.right),
        bottom: side(&border.bottom),
        left: side(&border.left),
    };
    (!borders.is_empty()).then_some(borders)
}

/// Pick the line drawn on an edge shared by `first` and `second`
///
/// A side without a line yields to one that has one.
pub fn resolve<'a>(
    first: Option<&'a BorderLine>,
    second: Option<&'a BorderLine>,
) -> Option<&'a BorderLine> {
    match (first, second) {
        (Some(a), Some(b)) => {
            if b.width > a.width
                || (b.width == a.width && b.style.priority() > a.style.priority())
            {
                Some(b)
            } else {
                Some(a)
            }
        }
        (a, b) => a.or(b),
    }
}

/// Make every shared edge between the cells of one table agree
///
/// Each cell is compared with its right neighbour at `(row, col + colSpan)`
/// and its bottom neighbour at `(row + rowSpan, col)`. Cells without a
/// neighbour in the slice are left untouched.
pub fn resolve_conflicts(cells: &mut [OutputCell]) {
    let index: AHashMap<(usize, usize), usize> = cells
        .iter()
        .enumerate()
        .map(|(i, c)| ((c.row, c.col), i))
        .collect();

    for i in 0..cells.len() {
        let (row, col) = (cells[i].row, cells[i].col);
        let right = index.get(&(row, col + cells[i].col_span())).copied();
        let below = index.get(&(row + cells[i].row_span(), col)).copied();

        if let Some(j) = right {
            reconcile(cells, i, Edge::Right, j, Edge::Left);
        }
        if let Some(j) = below {
            reconcile(cells, i, Edge::Bottom, j, Edge::Top);
        }
    }

    for cell in cells.iter_mut() {
        cell.border = cell.borders.as_ref().and_then(|b| b.representative().cloned());
    }
}

fn reconcile(cells: &mut [OutputCell], i: usize, edge_i: Edge, j: usize, edge_j: Edge) {
    let winner = resolve(cells[i].edge(edge_i), cells[j].edge(edge_j)).cloned();
    if winner.is_none() {
        return;
    }
    cells[i].set_edge(edge_i, winner.clone());
    cells[j].set_edge(edge_j, winner);
}
