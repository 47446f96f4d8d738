//! Column types

use crate::DEFAULT_COLUMN_WIDTH;

/// Column metadata
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// Column index (0-based)
    pub index: u16,
    /// Custom width in characters (None = default)
    #[cfg_attr(feature = "serde", serde(default))]
    pub width: Option<f64>,
    /// Column is hidden
    #[cfg_attr(feature = "serde", serde(default))]
    pub hidden: bool,
}

impl Column {
    /// Create a new column with default settings
    pub fn new(index: u16) -> Self {
        Self {
            index,
            width: None,
            hidden: false,
        }
    }

    /// Set width
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set hidden
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Width in characters, falling back to the sheet default
    pub fn width_chars(&self) -> f64 {
        self.width.unwrap_or(DEFAULT_COLUMN_WIDTH)
    }
}
