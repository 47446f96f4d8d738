//! Cell style conversion

use sheetpage_core::{
    Cell, CellValue, Color, FontStyle, HorizontalAlignment, RichTextRun, VerticalAlignment,
};

use crate::border::convert_borders;
use crate::document::{HorizontalAlign, OutputCell, TextRun, VerticalAlign};
use crate::format::format_cell;
use crate::options::ConvertOptions;

/// Converts cells into output cells for one resolved scale
#[derive(Debug, Clone, Copy)]
pub struct StyleConverter<'a> {
    options: &'a ConvertOptions,
    scale: f64,
}

impl<'a> StyleConverter<'a> {
    /// Font sizes are multiplied by `scale`
    pub fn new(options: &'a ConvertOptions, scale: f64) -> Self {
        Self { options, scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Convert value and style of `cell`, placed at a local grid position
    pub fn convert(&self, cell: &Cell, row: usize, col: usize) -> OutputCell {
        let style = &cell.style;
        let font = style.font.as_ref();
        let alignment = style.alignment.clone().unwrap_or_default();
        let borders = style.border.as_ref().and_then(convert_borders);

        OutputCell {
            row,
            col,
            value: format_cell(cell, self.options),
            rich_text: self.rich_text(cell),
            row_span: None,
            col_span: None,
            border: borders.as_ref().and_then(|b| b.representative().cloned()),
            borders,
            background_color: style
                .fill
                .as_ref()
                .and_then(|f| f.representative_color())
                .filter(|c| !c.is_auto())
                .map(|c| c.to_css_hex()),
            font_name: self.options.resolve_font(font.map(|f| f.name.as_str())),
            font_size: font.map_or(FontStyle::default().size, |f| f.size) * self.scale,
            font_color: font.and_then(|f| css_color(f.color)),
            bold: font.is_some_and(|f| f.bold),
            italic: font.is_some_and(|f| f.italic),
            underline: font.is_some_and(|f| f.underline.is_underlined()),
            strike: font.is_some_and(|f| f.strikethrough),
            horizontal_align: self.horizontal(cell, alignment.horizontal),
            vertical_align: vertical(alignment.vertical),
            wrap: alignment.wrap_text,
        }
    }

    /// An empty, unstyled cell (used for merge anchors without data)
    pub fn blank(&self, row: usize, col: usize) -> OutputCell {
        self.convert(&Cell::default(), row, col)
    }

    fn rich_text(&self, cell: &Cell) -> Option<Vec<TextRun>> {
        if self.options.preserve_formula_as_text && cell.formula.is_some() {
            return None;
        }
        match &cell.value {
            CellValue::RichText(runs) => Some(runs.iter().map(|r| self.run(r)).collect()),
            _ => None,
        }
    }

    fn run(&self, run: &RichTextRun) -> TextRun {
        let Some(font) = run.font.as_ref() else {
            return TextRun {
                text: run.text.clone(),
                ..Default::default()
            };
        };
        TextRun {
            text: run.text.clone(),
            font_name: (!font.name.is_empty()).then(|| self.options.resolve_font(Some(&font.name))),
            font_size: Some(font.size * self.scale),
            font_color: css_color(font.color),
            bold: Some(font.bold),
            italic: Some(font.italic),
            underline: Some(font.underline.is_underlined()),
            strike: Some(font.strikethrough),
        }
    }

    fn horizontal(&self, cell: &Cell, align: HorizontalAlignment) -> HorizontalAlign {
        match align {
            HorizontalAlignment::General => {
                if self.options.preserve_formula_as_text && cell.formula.is_some() {
                    return HorizontalAlign::Left;
                }
                match cell.value {
                    CellValue::Number(_) | CellValue::Date(_) => HorizontalAlign::Right,
                    CellValue::Boolean(_) | CellValue::Error(_) => HorizontalAlign::Center,
                    _ => HorizontalAlign::Left,
                }
            }
            HorizontalAlignment::Left | HorizontalAlignment::Fill => HorizontalAlign::Left,
            HorizontalAlignment::Center | HorizontalAlignment::CenterContinuous => {
                HorizontalAlign::Center
            }
            HorizontalAlignment::Right => HorizontalAlign::Right,
            HorizontalAlignment::Justify | HorizontalAlignment::Distributed => {
                HorizontalAlign::Justify
            }
        }
    }
}

fn vertical(align: VerticalAlignment) -> VerticalAlign {
    match align {
        VerticalAlignment::Top | VerticalAlignment::Justify | VerticalAlignment::Distributed => {
            VerticalAlign::Top
        }
        VerticalAlignment::Center => VerticalAlign::Middle,
        VerticalAlignment::Bottom => VerticalAlign::Bottom,
    }
}

fn css_color(color: Color) -> Option<String> {
    (!color.is_auto()).then(|| color.to_css_hex())
}
