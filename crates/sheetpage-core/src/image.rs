//! Embedded images

/// A raster image anchored to the cell grid
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Image {
    /// Image identifier as assigned by the decoder
    pub id: String,
    /// File extension of the raster payload ("png", "jpeg", ...)
    pub extension: String,
    /// Raw image bytes
    pub data: Vec<u8>,
    /// Placement on the grid
    pub anchor: ImageAnchor,
}

impl Image {
    /// Create an image with a two-cell anchor
    pub fn new<S: Into<String>, E: Into<String>>(
        id: S,
        extension: E,
        data: Vec<u8>,
        from: AnchorPoint,
        to: Option<AnchorPoint>,
    ) -> Self {
        Self {
            id: id.into(),
            extension: extension.into(),
            data,
            anchor: ImageAnchor { from, to },
        }
    }
}

/// Two-cell anchor: top-left and (when known) bottom-right corner
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageAnchor {
    pub from: AnchorPoint,
    pub to: Option<AnchorPoint>,
}

/// A corner position: a cell plus a pixel offset inside that cell
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorPoint {
    pub row: u32,
    pub col: u16,
    /// Offset down from the cell's top edge, in pixels
    #[cfg_attr(feature = "serde", serde(default))]
    pub row_offset: f64,
    /// Offset right from the cell's left edge, in pixels
    #[cfg_attr(feature = "serde", serde(default))]
    pub col_offset: f64,
}

impl AnchorPoint {
    /// Anchor at a cell's top-left corner
    pub fn at(row: u32, col: u16) -> Self {
        Self {
            row,
            col,
            row_offset: 0.0,
            col_offset: 0.0,
        }
    }

    /// Set pixel offsets inside the anchor cell
    pub fn with_offset(mut self, row_offset: f64, col_offset: f64) -> Self {
        self.row_offset = row_offset;
        self.col_offset = col_offset;
        self
    }
}
