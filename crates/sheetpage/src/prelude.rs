//! Prelude module - common imports for sheetpage users
//!
//! ```rust
//! use sheetpage::prelude::*;
//! ```

pub use crate::{
    // Style types
    Alignment,
    BorderLineStyle,
    BorderStyle,
    CellAddress,
    CellRange,
    // Cell types
    CellValue,
    Color,

    // Layout types
    Conversion,
    ConvertOptions,
    Diagnostic,
    Document,
    // Error types
    Error,
    FillStyle,
    FontStyle,
    HorizontalAlignment,
    LayoutError,
    Node,
    Orientation,
    PageSetup,
    PaperSize,
    Result,
    SheetSelector,
    Style,
    Surface,
    VerticalAlignment,
    // Main types
    Workbook,
    // Extension traits
    WorkbookPaginateExt,
    Worksheet,
};
