//! Output document model
//!
//! The document is a flat list of page surfaces plus positioned nodes that
//! reference their surface by id. All lengths are millimetres.

use serde::{Deserialize, Serialize};

/// A paginated document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub surfaces: Vec<Surface>,
    pub nodes: Vec<Node>,
}

impl Document {
    /// Nodes placed on a surface
    pub fn nodes_on<'a>(&'a self, surface_id: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.surface_id() == surface_id)
    }

    /// Table nodes in document order
    pub fn tables(&self) -> impl Iterator<Item = &TableNode> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Table(t) => Some(t),
            Node::Image(_) => None,
        })
    }

    /// Image nodes in document order
    pub fn images(&self) -> impl Iterator<Item = &ImageNode> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Image(i) => Some(i),
            Node::Table(_) => None,
        })
    }
}

/// Page margins in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    /// Same margin on every side
    pub fn uniform(mm: f64) -> Self {
        Self {
            top: mm,
            right: mm,
            bottom: mm,
            left: mm,
        }
    }
}

/// Kind of surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SurfaceKind {
    #[default]
    Page,
}

/// One printed page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surface {
    pub id: String,
    pub kind: SurfaceKind,
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderFooterText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<HeaderFooterText>,
    /// Name of the sheet printed on this page
    pub sheet_name: String,
    /// 1-based page number within the sheet
    pub page_number: u32,
}

/// Resolved header or footer text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeaderFooterText {
    pub left: String,
    pub center: String,
    pub right: String,
}

impl HeaderFooterText {
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.center.is_empty() && self.right.is_empty()
    }
}

/// A positioned element on a surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Table(TableNode),
    Image(ImageNode),
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Node::Table(t) => &t.id,
            Node::Image(i) => &i.id,
        }
    }

    pub fn surface_id(&self) -> &str {
        match self {
            Node::Table(t) => &t.surface_id,
            Node::Image(i) => &i.surface_id,
        }
    }
}

/// A table placed on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableNode {
    pub id: String,
    pub surface_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub table: Table,
}

/// Grid geometry and cells of a table node
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub row_heights: Vec<f64>,
    pub column_widths: Vec<f64>,
    pub cells: Vec<OutputCell>,
}

impl Table {
    /// Cell anchored at a local position
    pub fn cell(&self, row: usize, col: usize) -> Option<&OutputCell> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }
}

/// An image placed on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    pub id: String,
    pub surface_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub mime_type: String,
    /// Inline `data:` URI
    pub src: String,
}

/// Rendered line style of a border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    Double,
}

impl LineStyle {
    /// Tie-break rank when two borders of equal width meet
    pub fn priority(&self) -> u8 {
        match self {
            LineStyle::Double => 4,
            LineStyle::Solid => 3,
            LineStyle::Dashed => 2,
            LineStyle::Dotted => 1,
        }
    }
}

/// A single border line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderLine {
    pub style: LineStyle,
    /// Width in mm
    pub width: f64,
    /// `#RRGGBB`
    pub color: String,
}

/// Per-edge borders of an output cell
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CellBorders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<BorderLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<BorderLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<BorderLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<BorderLine>,
}

impl CellBorders {
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }

    /// Widest edge, checked top, right, bottom, left; the first wins ties
    pub fn representative(&self) -> Option<&BorderLine> {
        [&self.top, &self.right, &self.bottom, &self.left]
            .into_iter()
            .flatten()
            .fold(None, |best: Option<&BorderLine>, line| match best {
                Some(b) if b.width >= line.width => Some(b),
                _ => Some(line),
            })
    }
}

/// Resolved horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Resolved vertical alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerticalAlign {
    Top,
    Middle,
    #[default]
    Bottom,
}

/// A styled run of rich text
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strike: Option<bool>,
}

/// A cell of an output table, positioned on the page's local grid
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputCell {
    pub row: usize,
    pub col: usize,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rich_text: Option<Vec<TextRun>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_span: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_span: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<CellBorders>,
    /// Single representative border for consumers that draw one line style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    pub font_name: String,
    pub font_size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    pub horizontal_align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    pub wrap: bool,
}

impl OutputCell {
    /// Rows covered, at least 1
    pub fn row_span(&self) -> usize {
        self.row_span.unwrap_or(1)
    }

    /// Columns covered, at least 1
    pub fn col_span(&self) -> usize {
        self.col_span.unwrap_or(1)
    }

    pub(crate) fn edge(&self, edge: Edge) -> Option<&BorderLine> {
        let borders = self.borders.as_ref()?;
        match edge {
            Edge::Top => borders.top.as_ref(),
            Edge::Right => borders.right.as_ref(),
            Edge::Bottom => borders.bottom.as_ref(),
            Edge::Left => borders.left.as_ref(),
        }
    }

    pub(crate) fn set_edge(&mut self, edge: Edge, line: Option<BorderLine>) {
        let borders = self.borders.get_or_insert_with(CellBorders::default);
        match edge {
            Edge::Top => borders.top = line,
            Edge::Right => borders.right = line,
            Edge::Bottom => borders.bottom = line,
            Edge::Left => borders.left = line,
        }
        if borders.is_empty() {
            self.borders = None;
        }
    }
}

/// Cell edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}
