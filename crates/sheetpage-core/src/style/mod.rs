//! Cell styling types
//!
//! This module contains types for cell formatting:
//! - [`Style`] - Complete cell style, every part optional
//! - [`FontStyle`] - Font settings
//! - [`FillStyle`] - Background fill
//! - [`BorderStyle`] - Cell borders
//! - [`Alignment`] - Text alignment
//! - [`Color`] - Color representation

mod alignment;
mod border;
mod color;
mod fill;
mod font;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use border::{BorderEdge, BorderLineStyle, BorderStyle};
pub use color::Color;
pub use fill::{FillStyle, GradientStop, PatternType};
pub use font::{FontStyle, Underline};

/// Complete cell style as handed over by the workbook decoder
///
/// Absent parts fall back to defaults during conversion.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    /// Font settings
    pub font: Option<FontStyle>,
    /// Fill/background settings
    pub fill: Option<FillStyle>,
    /// Border settings
    pub border: Option<BorderStyle>,
    /// Text alignment
    pub alignment: Option<Alignment>,
    /// Number format code (e.g. "0.00", "#,##0", "0%")
    pub number_format: Option<String>,
}

impl Style {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    fn font_or_default(&mut self) -> &mut FontStyle {
        self.font.get_or_insert_with(FontStyle::default)
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font_or_default().bold = bold;
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.font_or_default().italic = italic;
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_or_default().size = size;
        self
    }

    /// Set font name
    pub fn font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font_or_default().name = name.into();
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font_or_default().color = color;
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = Some(FillStyle::Solid { color });
        self
    }

    /// Set the border
    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = Some(border);
        self
    }

    /// Set number format string
    pub fn number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.number_format = Some(format.into());
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.get_or_insert_with(Alignment::default).horizontal = align;
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.alignment.get_or_insert_with(Alignment::default).vertical = align;
        self
    }

    /// Enable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.alignment.get_or_insert_with(Alignment::default).wrap_text = wrap;
        self
    }

    /// True when any border side has a line style other than `None`
    pub fn has_visible_border(&self) -> bool {
        self.border.as_ref().is_some_and(BorderStyle::has_visible_edge)
    }

    /// True when a fill is present and is not a "no pattern" pattern fill
    pub fn has_fill(&self) -> bool {
        self.fill.as_ref().is_some_and(|f| !f.is_none())
    }
}
