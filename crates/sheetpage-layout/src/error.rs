//! Layout error types

use thiserror::Error;

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors that abort a conversion
///
/// Anything recoverable is reported as a [`Diagnostic`](crate::Diagnostic)
/// instead and never surfaces here.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// No sheet with the requested name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Sheet index beyond the workbook
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// Workbook has no sheets to convert
    #[error("Workbook contains no worksheets")]
    EmptyWorkbook,

    /// Custom range string could not be parsed
    #[error("Invalid print range '{range}': {source}")]
    InvalidRange {
        range: String,
        #[source]
        source: sheetpage_core::Error,
    },

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetpage_core::Error),
}
