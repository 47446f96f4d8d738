//! # sheetpage
//!
//! Lays out spreadsheet workbooks the way a spreadsheet application prints
//! them: page surfaces carrying positioned, styled tables and images,
//! serializable as JSON for a separate rendering layer.
//!
//! ## Features
//!
//! - Print areas, custom ranges and used-range trimming
//! - Hidden and empty row/column filtering
//! - Manual scale, fit-to-page and the sheet's own print scale
//! - Automatic and manual page breaks on both axes
//! - Merged cells, shared-border resolution and rich text
//! - Header/footer field codes (`&P`, `&N`, `&A`, ...)
//! - Anchored images as inline data URIs
//!
//! ## Example
//!
//! ```rust
//! use sheetpage::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! sheet.set_cell_value("A1", "Region").unwrap();
//! sheet.set_cell_value("B1", 1250.0).unwrap();
//!
//! let result = workbook
//!     .paginate_with_options(&ConvertOptions::default().with_paper_size(PaperSize::Letter))
//!     .unwrap();
//!
//! assert_eq!(result.document.surfaces.len(), 1);
//! assert!(result.diagnostics.is_empty());
//! ```

pub mod paginate;
pub mod prelude;

pub use paginate::WorkbookPaginateExt;

// Re-export the input model
pub use sheetpage_core::{
    Alignment,
    AnchorPoint,
    BorderEdge,
    BorderLineStyle,
    BorderStyle,
    Cell,
    CellAddress,
    CellError,
    CellRange,
    // Cell types
    CellValue,
    Color,
    // Error types
    Error,
    FillStyle,
    FitToPage,
    FontStyle,
    HorizontalAlignment,
    Image,
    ImageAnchor,
    Orientation,
    PageMargins,
    PageOrder,
    // Page setup
    PageSetup,
    PatternType,
    RichTextRun,
    // Style types
    Style,
    Underline,
    VerticalAlignment,
    // Main types
    Workbook,
    Worksheet,

    DEFAULT_COLUMN_WIDTH,
    DEFAULT_ROW_HEIGHT,
    MAX_COLS,
    // Constants
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};

// Re-export the layout engine
pub use sheetpage_layout::{
    convert, convert_with_ids, BorderLine, CellBorders, Conversion, ConvertOptions, Diagnostic,
    Document, HeaderFooterText, HorizontalAlign, IdGenerator, IdKind, ImageNode, LayoutError,
    LineStyle, Margins, Node, OutputCell, PaperSize, Result, SequentialIds, SheetSelector,
    Surface, SurfaceKind, Table, TableNode, TextRun, UsedRange, VerticalAlign, SCALE_FLOOR,
};
