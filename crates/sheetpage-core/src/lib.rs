//! # sheetpage-core
//!
//! Input model for the sheetpage print layout engine.
//!
//! A [`Workbook`] is produced by an external decoder (xlsx, xls, JSON, ...)
//! and handed to the layout engine read-only. This crate provides:
//! - [`CellValue`] - Tagged cell values (string, number, date, rich text, ...)
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing
//! - [`Style`] - Cell formatting (fonts, fills, borders, alignment)
//! - [`PageSetup`] - Paper, margins, scaling and manual page breaks
//! - [`Workbook`], [`Worksheet`] - The document structures
//!
//! ## Example
//!
//! ```rust
//! use sheetpage_core::{CellValue, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_cell_value("A1", "Hello").unwrap();
//! sheet.set_cell_value_at(1, 1, CellValue::Number(3.5)).unwrap();
//! sheet.set_row_height(1, 30.0);
//!
//! assert_eq!(sheet.rows().len(), 2);
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod image;
pub mod page_setup;
pub mod row;
pub mod style;
pub mod workbook;
pub mod worksheet;

pub use cell::{Cell, CellAddress, CellError, CellRange, CellValue, RichTextRun};
pub use column::Column;
pub use error::{Error, Result};
pub use image::{AnchorPoint, Image, ImageAnchor};
pub use page_setup::{FitToPage, Orientation, PageMargins, PageOrder, PageSetup};
pub use row::Row;
pub use workbook::Workbook;
pub use worksheet::Worksheet;

pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FillStyle, FontStyle,
    GradientStop, HorizontalAlignment, PatternType, Style, Underline, VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Row height used when a row carries no explicit height (points)
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;

/// Column width used when a column carries no explicit width (characters)
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.43;
