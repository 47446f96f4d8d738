//! Print settings declared by a sheet

/// Page setup for printing
///
/// Every field mirrors what the sheet itself declares; `None` means the sheet
/// is silent and the layout engine picks its own default.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageSetup {
    /// Paper size code (e.g., 1 = Letter, 9 = A4)
    pub paper_size: Option<u16>,
    /// Orientation
    pub orientation: Option<Orientation>,
    /// Margins in inches
    pub margins: Option<PageMargins>,
    /// Scale percentage (10-400)
    pub scale: Option<u16>,
    /// Fit-to-page page counts
    pub fit_to_page: Option<FitToPage>,
    /// Header string in `&L`/`&C`/`&R` notation
    pub header: Option<String>,
    /// Footer string in `&L`/`&C`/`&R` notation
    pub footer: Option<String>,
    /// Manual horizontal page breaks: each index is the first row of a new page
    pub row_breaks: Vec<u32>,
    /// Manual vertical page breaks: each index is the first column of a new page
    pub col_breaks: Vec<u16>,
    /// Order in which page bands are numbered
    pub page_order: PageOrder,
    /// Center the printed block horizontally on the page
    pub center_horizontally: bool,
    /// Center the printed block vertically on the page
    pub center_vertically: bool,
}

impl PageSetup {
    /// Create an empty page setup
    pub fn new() -> Self {
        Self::default()
    }

    /// Set fit-to-page page counts
    pub fn with_fit_to_page(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        self.fit_to_page = Some(FitToPage { width, height });
        self
    }

    /// Set the percentage scale
    pub fn with_scale(mut self, scale: u16) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set the orientation
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
}

/// Page margins in inches
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PageMargins {
    /// Excel's "Normal" margins
    fn default() -> Self {
        Self {
            top: 0.75,
            right: 0.7,
            bottom: 0.75,
            left: 0.7,
        }
    }
}

/// Fit-to-page request: number of pages wide / tall
///
/// `None` or `Some(0)` leaves that direction unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitToPage {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Page numbering order across row and column bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PageOrder {
    /// All row bands of the first column band, then the next column band
    #[default]
    DownThenOver,
    /// All column bands of the first row band, then the next row band
    OverThenDown,
}
