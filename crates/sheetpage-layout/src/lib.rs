//! # sheetpage-layout
//!
//! Print layout engine. Takes a read-only [`Workbook`](sheetpage_core::Workbook)
//! and lays it out the way a spreadsheet application prints it: one or more
//! page [`Surface`]s per sheet, each carrying a positioned [`TableNode`] and
//! any anchored [`ImageNode`]s.
//!
//! The pipeline for each sheet:
//! 1. Filter rows and columns (print area, custom range or used-range trim)
//! 2. Resolve a scale factor (manual, fit-to-page or the sheet's own scale)
//! 3. Plan page breaks on both axes, honouring manual breaks
//! 4. Build one table per page, resolving merges and shared borders
//! 5. Expand header/footer field codes per page
//!
//! ## Example
//!
//! ```rust
//! use sheetpage_core::Workbook;
//! use sheetpage_layout::{convert, ConvertOptions, PaperSize};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! sheet.set_cell_value("A1", "Hello").unwrap();
//!
//! let options = ConvertOptions::default().with_paper_size(PaperSize::Letter);
//! let result = convert(&workbook, &options).unwrap();
//!
//! assert_eq!(result.document.surfaces.len(), 1);
//! assert_eq!(result.document.tables().count(), 1);
//! ```

pub mod assemble;
pub mod border;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod filter;
pub mod format;
pub mod header_footer;
pub mod ids;
pub mod image;
pub mod options;
pub mod page_break;
pub mod paper;
pub mod scale;
pub mod style;
pub mod table;
pub mod units;
pub mod used_range;

pub use assemble::{convert, convert_with_ids, Conversion};
pub use diagnostics::Diagnostic;
pub use document::{
    BorderLine, CellBorders, Document, HeaderFooterText, HorizontalAlign, ImageNode, LineStyle,
    Margins, Node, OutputCell, Surface, SurfaceKind, Table, TableNode, TextRun, VerticalAlign,
};
pub use error::{LayoutError, Result};
pub use ids::{IdGenerator, IdKind, SequentialIds};
pub use options::{ConvertOptions, SheetSelector};
pub use paper::{PageGeometry, PaperSize};
pub use scale::SCALE_FLOOR;
pub use used_range::UsedRange;
