//! Conversion options

use std::collections::HashMap;

use chrono::NaiveDateTime;
use sheetpage_core::Orientation;

use crate::document::Margins;
use crate::paper::PaperSize;

/// Default fallback font
pub const DEFAULT_FONT: &str = "Calibri";

/// Default date display format (chrono strftime syntax)
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Which sheet(s) to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    /// Sheet at a 0-based position
    Index(usize),
    /// Sheet with an exact name
    Name(String),
}

impl From<usize> for SheetSelector {
    fn from(index: usize) -> Self {
        SheetSelector::Index(index)
    }
}

impl From<&str> for SheetSelector {
    fn from(name: &str) -> Self {
        SheetSelector::Name(name.to_string())
    }
}

impl From<String> for SheetSelector {
    fn from(name: String) -> Self {
        SheetSelector::Name(name)
    }
}

/// Options for a conversion
///
/// Every field is independently optional; page-level fields set here take
/// precedence over the sheet's own page setup.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Target paper size
    pub paper_size: Option<PaperSize>,
    /// Orientation override
    pub orientation: Option<Orientation>,
    /// Margin override in millimetres
    pub margins_mm: Option<Margins>,
    /// Font used when a cell names none
    pub default_font: String,
    /// Font-name remap table
    pub font_map: HashMap<String, String>,
    /// Explicit fit-to-one-page request (`None` = not requested either way)
    pub fit_to_page: Option<bool>,
    /// Fit to one page when nothing else decides the scale
    pub default_fit_to_page: bool,
    /// Manual scale multiplier, used verbatim
    pub manual_scale: Option<f64>,
    /// Sheet to convert (`None` = every sheet)
    pub sheet: Option<SheetSelector>,
    /// Honour the sheet's declared print area
    pub only_print_area: bool,
    /// Custom print range in A1 notation, overrides the sheet's print area
    pub range: Option<String>,
    /// Drop wholly empty rows in auto-trim mode
    pub skip_empty_rows: bool,
    /// Drop wholly empty columns in auto-trim mode
    pub skip_empty_columns: bool,
    /// Render formula cells as their source text
    pub preserve_formula_as_text: bool,
    /// Date display format
    pub date_format: String,
    /// Output document id (generated when absent)
    pub document_id: Option<String>,
    /// Output document title (falls back to the workbook title)
    pub title: Option<String>,
    /// Timestamp for the `&D` / `&T` header codes
    pub print_timestamp: Option<NaiveDateTime>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            paper_size: None,
            orientation: None,
            margins_mm: None,
            default_font: DEFAULT_FONT.to_string(),
            font_map: HashMap::new(),
            fit_to_page: None,
            default_fit_to_page: true,
            manual_scale: None,
            sheet: None,
            only_print_area: true,
            range: None,
            skip_empty_rows: true,
            skip_empty_columns: true,
            preserve_formula_as_text: false,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            document_id: None,
            title: None,
            print_timestamp: None,
        }
    }
}

impl ConvertOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paper_size(mut self, paper: PaperSize) -> Self {
        self.paper_size = Some(paper);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn with_margins_mm(mut self, margins: Margins) -> Self {
        self.margins_mm = Some(margins);
        self
    }

    pub fn with_default_font<S: Into<String>>(mut self, font: S) -> Self {
        self.default_font = font.into();
        self
    }

    /// Add a font-name remap entry
    pub fn with_font_mapping<S: Into<String>, T: Into<String>>(mut self, from: S, to: T) -> Self {
        self.font_map.insert(from.into(), to.into());
        self
    }

    pub fn with_fit_to_page(mut self, fit: bool) -> Self {
        self.fit_to_page = Some(fit);
        self
    }

    pub fn with_default_fit_to_page(mut self, fit: bool) -> Self {
        self.default_fit_to_page = fit;
        self
    }

    pub fn with_manual_scale(mut self, scale: f64) -> Self {
        self.manual_scale = Some(scale);
        self
    }

    pub fn with_sheet<S: Into<SheetSelector>>(mut self, sheet: S) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    pub fn with_only_print_area(mut self, only: bool) -> Self {
        self.only_print_area = only;
        self
    }

    pub fn with_range<S: Into<String>>(mut self, range: S) -> Self {
        self.range = Some(range.into());
        self
    }

    pub fn with_skip_empty_rows(mut self, skip: bool) -> Self {
        self.skip_empty_rows = skip;
        self
    }

    pub fn with_skip_empty_columns(mut self, skip: bool) -> Self {
        self.skip_empty_columns = skip;
        self
    }

    pub fn with_preserve_formula_as_text(mut self, preserve: bool) -> Self {
        self.preserve_formula_as_text = preserve;
        self
    }

    pub fn with_date_format<S: Into<String>>(mut self, format: S) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn with_document_id<S: Into<String>>(mut self, id: S) -> Self {
        self.document_id = Some(id.into());
        self
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_print_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.print_timestamp = Some(timestamp);
        self
    }

    /// Resolve a font name through the remap table and the default font
    pub fn resolve_font(&self, name: Option<&str>) -> String {
        match name.filter(|n| !n.is_empty()) {
            Some(n) => self
                .font_map
                .get(n)
                .cloned()
                .unwrap_or_else(|| n.to_string()),
            None => self.default_font.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConvertOptions::default();
        assert!(options.default_fit_to_page);
        assert!(options.only_print_area);
        assert!(options.skip_empty_rows && options.skip_empty_columns);
        assert_eq!(options.default_font, "Calibri");
        assert!(options.fit_to_page.is_none());
    }

    #[test]
    fn test_resolve_font() {
        let options = ConvertOptions::default()
            .with_default_font("Arial")
            .with_font_mapping("MS Sans Serif", "Helvetica");

        assert_eq!(options.resolve_font(None), "Arial");
        assert_eq!(options.resolve_font(Some("")), "Arial");
        assert_eq!(options.resolve_font(Some("MS Sans Serif")), "Helvetica");
        assert_eq!(options.resolve_font(Some("Consolas")), "Consolas");
    }

    #[test]
    fn test_sheet_selector_from() {
        let options = ConvertOptions::default().with_sheet("Data");
        assert_eq!(options.sheet, Some(SheetSelector::Name("Data".into())));
        let options = ConvertOptions::default().with_sheet(2usize);
        assert_eq!(options.sheet, Some(SheetSelector::Index(2)));
    }
}
