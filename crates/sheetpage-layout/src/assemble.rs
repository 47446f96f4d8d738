//! Surface assembly
//!
//! Drives one conversion: sheet selection, filtering, scaling, pagination,
//! table building, header/footer text and image placement.

use sheetpage_core::{CellRange, PageOrder, Workbook, Worksheet};

use crate::diagnostics::Diagnostic;
use crate::document::{Document, HeaderFooterText, ImageNode, Node, Surface, SurfaceKind, TableNode};
use crate::error::{LayoutError, Result};
use crate::filter::{FilterMode, FilteredSheet};
use crate::header_footer::{PageFields, Sections};
use crate::ids::{IdGenerator, IdKind, SequentialIds};
use crate::image::{anchor_position, data_uri, mime_type, prefix_sums, PLACEHOLDER_SIZE_MM};
use crate::options::{ConvertOptions, SheetSelector};
use crate::page_break::{map_breaks, plan_bands, Band};
use crate::paper::PageGeometry;
use crate::scale::{resolve_scale, Extents, SCALE_FLOOR};
use crate::style::StyleConverter;
use crate::table::build_table;
use crate::units::{column_width_to_mm, points_to_mm};

/// Result of a conversion: the document plus everything that was degraded
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert a workbook with sequential ids
pub fn convert(workbook: &Workbook, options: &ConvertOptions) -> Result<Conversion> {
    convert_with_ids(workbook, options, &mut SequentialIds::new())
}

/// Convert a workbook, drawing ids from `ids`
pub fn convert_with_ids(
    workbook: &Workbook,
    options: &ConvertOptions,
    ids: &mut dyn IdGenerator,
) -> Result<Conversion> {
    let sheets = select_sheets(workbook, options.sheet.as_ref())?;
    let custom_range = options
        .range
        .as_deref()
        .map(|range| {
            CellRange::parse(range).map_err(|source| LayoutError::InvalidRange {
                range: range.to_string(),
                source,
            })
        })
        .transpose()?;

    let id = match &options.document_id {
        Some(id) => id.clone(),
        None => ids.next_id(IdKind::Document),
    };
    let title = options
        .title
        .clone()
        .or_else(|| workbook.title().map(str::to_string));

    let mut assembler = Assembler {
        options,
        ids,
        title: title.as_deref(),
        surfaces: Vec::new(),
        nodes: Vec::new(),
        diagnostics: Vec::new(),
    };
    for sheet in sheets {
        assembler.layout_sheet(sheet, custom_range);
    }
    let Assembler {
        surfaces,
        nodes,
        diagnostics,
        ..
    } = assembler;

    log::debug!(
        "converted {} surface(s), {} node(s), {} diagnostic(s)",
        surfaces.len(),
        nodes.len(),
        diagnostics.len()
    );

    Ok(Conversion {
        document: Document {
            id,
            title,
            surfaces,
            nodes,
        },
        diagnostics,
    })
}

fn select_sheets<'w>(
    workbook: &'w Workbook,
    selector: Option<&SheetSelector>,
) -> Result<Vec<&'w Worksheet>> {
    match selector {
        None if workbook.is_empty() => Err(LayoutError::EmptyWorkbook),
        None => Ok(workbook.worksheets().collect()),
        Some(SheetSelector::Index(i)) => workbook
            .worksheet(*i)
            .map(|ws| vec![ws])
            .ok_or(LayoutError::SheetOutOfBounds(*i, workbook.sheet_count())),
        Some(SheetSelector::Name(name)) => workbook
            .worksheet_by_name(name)
            .map(|ws| vec![ws])
            .ok_or_else(|| LayoutError::SheetNotFound(name.clone())),
    }
}

/// A page already emitted for the current sheet
struct PlacedPage {
    rows: Band,
    cols: Band,
    surface_id: String,
    /// Page position of the table's top-left corner
    x: f64,
    y: f64,
}

struct Assembler<'a> {
    options: &'a ConvertOptions,
    ids: &'a mut dyn IdGenerator,
    title: Option<&'a str>,
    surfaces: Vec<Surface>,
    nodes: Vec<Node>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Assembler<'a> {
    fn filter_mode(&self, sheet: &Worksheet, custom_range: Option<CellRange>) -> FilterMode {
        let print_area = custom_range.or_else(|| {
            self.options
                .only_print_area
                .then(|| sheet.print_area().copied())
                .flatten()
        });
        match print_area {
            Some(area) => FilterMode::PrintArea(area),
            None => FilterMode::AutoTrim {
                skip_empty_rows: self.options.skip_empty_rows,
                skip_empty_columns: self.options.skip_empty_columns,
            },
        }
    }

    fn layout_sheet(&mut self, sheet: &Worksheet, custom_range: Option<CellRange>) {
        let setup = sheet.page_setup();
        let geometry = PageGeometry::resolve(setup, self.options);
        let filtered = FilteredSheet::build(sheet, self.filter_mode(sheet, custom_range));

        for range in &filtered.dropped_merges {
            log::warn!("{}: merged range {} dropped by filtering", sheet.name(), range);
            self.diagnostics.push(Diagnostic::MergeDropped {
                sheet: sheet.name().to_string(),
                range: range.to_a1_string(),
            });
        }

        let raw_heights: Vec<f64> = filtered.row_heights.iter().map(|&pt| points_to_mm(pt)).collect();
        let raw_widths: Vec<f64> = filtered.col_widths.iter().map(|&w| column_width_to_mm(w)).collect();
        let extents = Extents {
            content_width: raw_widths.iter().sum(),
            content_height: raw_heights.iter().sum(),
            drawable_width: geometry.drawable_width(),
            drawable_height: geometry.drawable_height(),
        };

        let decision = resolve_scale(&extents, setup, self.options);
        let scale = decision.scale;
        log::debug!(
            "{}: {:?} {:?}, {}x{} grid, scale {:.4} ({:?})",
            sheet.name(),
            geometry.paper,
            geometry.orientation,
            filtered.row_count(),
            filtered.col_count(),
            scale,
            decision.source
        );
        if decision.below_floor() {
            log::warn!(
                "{}: scale {:.3} is below the readable floor {}",
                sheet.name(),
                scale,
                SCALE_FLOOR
            );
            self.diagnostics.push(Diagnostic::LowScale {
                sheet: sheet.name().to_string(),
                scale,
                floor: SCALE_FLOOR,
            });
        }

        let heights: Vec<f64> = raw_heights.iter().map(|h| h * scale).collect();
        let widths: Vec<f64> = raw_widths.iter().map(|w| w * scale).collect();

        let pages = if filtered.is_empty() {
            Vec::new()
        } else {
            let single = decision.fits_one_page();
            let (row_breaks, col_breaks) = if single {
                (Vec::new(), Vec::new())
            } else {
                (
                    map_breaks(&setup.row_breaks, &filtered.row_indices),
                    map_breaks(&setup.col_breaks, &filtered.col_indices),
                )
            };
            let row_bands = plan_bands(&heights, geometry.drawable_height(), &row_breaks, single);
            let col_bands = plan_bands(&widths, geometry.drawable_width(), &col_breaks, single);
            page_sequence(&row_bands, &col_bands, setup.page_order)
        };
        let total_pages = pages.len().max(1) as u32;
        log::debug!("{}: {} page(s)", sheet.name(), total_pages);

        let text = PageText::new(
            sheet,
            self.title,
            self.options,
            total_pages,
            &mut self.diagnostics,
        );

        if pages.is_empty() {
            self.push_surface(sheet, &geometry, &text, 1);
        }

        let converter = StyleConverter::new(self.options, scale);
        let mut placed = Vec::with_capacity(pages.len());
        for (n, &(rows, cols)) in pages.iter().enumerate() {
            let surface_id = self.push_surface(sheet, &geometry, &text, n as u32 + 1);

            let table = build_table(&filtered, rows, cols, &heights, &widths, &converter);
            let width: f64 = table.column_widths.iter().sum();
            let height: f64 = table.row_heights.iter().sum();
            let x = geometry.margins.left
                + centered_offset(setup.center_horizontally, geometry.drawable_width(), width);
            let y = geometry.margins.top
                + centered_offset(setup.center_vertically, geometry.drawable_height(), height);

            self.nodes.push(Node::Table(TableNode {
                id: self.ids.next_id(IdKind::Table),
                surface_id: surface_id.clone(),
                x,
                y,
                width,
                height,
                table,
            }));
            placed.push(PlacedPage {
                rows,
                cols,
                surface_id,
                x,
                y,
            });
        }

        self.place_images(sheet, &filtered, &placed, &heights, &widths, scale);
    }

    fn push_surface(
        &mut self,
        sheet: &Worksheet,
        geometry: &PageGeometry,
        text: &PageText,
        page_number: u32,
    ) -> String {
        let id = self.ids.next_id(IdKind::Page);
        let (header, footer) = text.resolve(page_number);
        self.surfaces.push(Surface {
            id: id.clone(),
            kind: SurfaceKind::Page,
            width: geometry.width,
            height: geometry.height,
            margins: geometry.margins,
            header,
            footer,
            sheet_name: sheet.name().to_string(),
            page_number,
        });
        id
    }

    fn place_images(
        &mut self,
        sheet: &Worksheet,
        filtered: &FilteredSheet<'_>,
        pages: &[PlacedPage],
        heights: &[f64],
        widths: &[f64],
        scale: f64,
    ) {
        let row_offsets = prefix_sums(heights);
        let col_offsets = prefix_sums(widths);

        for image in sheet.images() {
            let from = anchor_position(&image.anchor.from, filtered, &row_offsets, &col_offsets, scale);
            let page = from.and_then(|(x, y)| {
                let local = (
                    filtered.local_row(image.anchor.from.row)?,
                    filtered.local_col(image.anchor.from.col)?,
                );
                page_for_point(pages, &row_offsets, &col_offsets, x, y, local)
            });
            let (Some((gx, gy)), Some(page)) = (from, page) else {
                log::warn!("{}: image {} is not on a printed cell", sheet.name(), image.id);
                self.diagnostics.push(Diagnostic::ImageDropped {
                    sheet: sheet.name().to_string(),
                    image_id: image.id.clone(),
                    reason: "anchor cell is not printed".to_string(),
                });
                continue;
            };

            let (width, height) = image
                .anchor
                .to
                .as_ref()
                .and_then(|to| anchor_position(to, filtered, &row_offsets, &col_offsets, scale))
                .map(|(tx, ty)| (tx - gx, ty - gy))
                .filter(|&(w, h)| w > 0.0 && h > 0.0)
                .unwrap_or((PLACEHOLDER_SIZE_MM, PLACEHOLDER_SIZE_MM));

            self.nodes.push(Node::Image(ImageNode {
                id: self.ids.next_id(IdKind::Image),
                surface_id: page.surface_id.clone(),
                x: page.x + gx - col_offsets[page.cols.start],
                y: page.y + gy - row_offsets[page.rows.start],
                width,
                height,
                mime_type: mime_type(&image.extension).to_string(),
                src: data_uri(image),
            }));
        }
    }
}

/// Header and footer sections of one sheet, expanded per page
struct PageText<'a> {
    header: Option<Sections>,
    footer: Option<Sections>,
    sheet_name: &'a str,
    title: Option<&'a str>,
    pages: u32,
    options: &'a ConvertOptions,
}

impl<'a> PageText<'a> {
    fn new(
        sheet: &'a Worksheet,
        title: Option<&'a str>,
        options: &'a ConvertOptions,
        pages: u32,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Self {
        let setup = sheet.page_setup();
        let text = Self {
            header: setup.header.as_deref().map(Sections::parse),
            footer: setup.footer.as_deref().map(Sections::parse),
            sheet_name: sheet.name(),
            title,
            pages,
            options,
        };

        let fields = text.fields(1);
        let raw = [
            (&text.header, setup.header.as_deref()),
            (&text.footer, setup.footer.as_deref()),
        ];
        for (sections, raw) in raw {
            let (Some(sections), Some(raw)) = (sections, raw) else {
                continue;
            };
            if sections.resolve(&fields).1 {
                log::warn!("{}: dangling '&' in header/footer {:?}", sheet.name(), raw);
                diagnostics.push(Diagnostic::HeaderFooterMarker {
                    sheet: sheet.name().to_string(),
                    text: raw.to_string(),
                });
            }
        }
        text
    }

    fn fields(&self, page: u32) -> PageFields<'_> {
        PageFields {
            page,
            pages: self.pages,
            sheet_name: self.sheet_name,
            title: self.title,
            timestamp: self.options.print_timestamp,
            date_format: &self.options.date_format,
        }
    }

    fn resolve(&self, page: u32) -> (Option<HeaderFooterText>, Option<HeaderFooterText>) {
        let fields = self.fields(page);
        let expand = |sections: &Option<Sections>| {
            sections
                .as_ref()
                .map(|s| s.resolve(&fields).0)
                .filter(|t| !t.is_empty())
        };
        (expand(&self.header), expand(&self.footer))
    }
}

/// Order the (row band, column band) pairs into pages
fn page_sequence(rows: &[Band], cols: &[Band], order: PageOrder) -> Vec<(Band, Band)> {
    match order {
        PageOrder::DownThenOver => cols
            .iter()
            .flat_map(|&c| rows.iter().map(move |&r| (r, c)))
            .collect(),
        PageOrder::OverThenDown => rows
            .iter()
            .flat_map(|&r| cols.iter().map(move |&c| (r, c)))
            .collect(),
    }
}

fn centered_offset(center: bool, drawable: f64, content: f64) -> f64 {
    if center {
        ((drawable - content) / 2.0).max(0.0)
    } else {
        0.0
    }
}

/// The page whose content rectangle holds `(x, y)`; when an offset pushes
/// the point past every page, the page holding the anchor cell
fn page_for_point<'p>(
    pages: &'p [PlacedPage],
    row_offsets: &[f64],
    col_offsets: &[f64],
    x: f64,
    y: f64,
    (row, col): (usize, usize),
) -> Option<&'p PlacedPage> {
    let holds = |band: &Band, offsets: &[f64], v: f64| {
        v >= offsets[band.start] && v < offsets[band.end + 1]
    };
    pages
        .iter()
        .find(|p| holds(&p.cols, col_offsets, x) && holds(&p.rows, row_offsets, y))
        .or_else(|| {
            pages
                .iter()
                .find(|p| p.rows.contains(row) && p.cols.contains(col))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn band(start: usize, end: usize) -> Band {
        Band { start, end }
    }

    #[test]
    fn test_page_sequence_orders() {
        let rows = [band(0, 1), band(2, 3)];
        let cols = [band(0, 0), band(1, 1)];

        let down = page_sequence(&rows, &cols, PageOrder::DownThenOver);
        assert_eq!(
            down,
            vec![
                (band(0, 1), band(0, 0)),
                (band(2, 3), band(0, 0)),
                (band(0, 1), band(1, 1)),
                (band(2, 3), band(1, 1)),
            ]
        );

        let over = page_sequence(&rows, &cols, PageOrder::OverThenDown);
        assert_eq!(over[1], (band(0, 1), band(1, 1)));
    }

    #[test]
    fn test_centered_offset() {
        assert_eq!(centered_offset(true, 100.0, 60.0), 20.0);
        assert_eq!(centered_offset(true, 100.0, 160.0), 0.0);
        assert_eq!(centered_offset(false, 100.0, 60.0), 0.0);
    }

    #[test]
    fn test_select_sheets() {
        let mut wb = Workbook::new();
        wb.add_worksheet_with_name("Data").unwrap();

        assert_eq!(select_sheets(&wb, None).unwrap().len(), 2);
        let by_name = select_sheets(&wb, Some(&SheetSelector::Name("Data".into()))).unwrap();
        assert_eq!(by_name[0].name(), "Data");
        assert!(matches!(
            select_sheets(&wb, Some(&SheetSelector::Index(5))),
            Err(LayoutError::SheetOutOfBounds(5, 2))
        ));
        assert!(matches!(
            select_sheets(&wb, Some(&SheetSelector::Name("Nope".into()))),
            Err(LayoutError::SheetNotFound(_))
        ));
        assert!(matches!(
            select_sheets(&Workbook::empty(), None),
            Err(LayoutError::EmptyWorkbook)
        ));
    }

    #[test]
    fn test_empty_sheet_gets_blank_surface() {
        let wb = Workbook::new();
        let result = convert(&wb, &ConvertOptions::default()).unwrap();

        assert_eq!(result.document.surfaces.len(), 1);
        assert_eq!(result.document.surfaces[0].page_number, 1);
        assert!(result.document.nodes.is_empty());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_empty_sheet_prints_a1_when_not_skipping() {
        let wb = Workbook::new();
        let options = ConvertOptions::default()
            .with_skip_empty_rows(false)
            .with_skip_empty_columns(false);
        let result = convert(&wb, &options).unwrap();

        assert_eq!(result.document.surfaces.len(), 1);
        let tables: Vec<_> = result.document.tables().collect();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].table.row_heights.len(), 1);
        assert_eq!(tables[0].table.column_widths.len(), 1);
        assert!(tables[0].table.cells.is_empty());
    }

    #[test]
    fn test_invalid_range_is_fatal() {
        let wb = Workbook::new();
        let options = ConvertOptions::default().with_range("not a range");
        assert!(matches!(
            convert(&wb, &options),
            Err(LayoutError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_image_on_hidden_row_is_dropped() {
        use sheetpage_core::{AnchorPoint, Image};

        let mut wb = Workbook::new();
        let ws = wb.worksheet_mut(0).unwrap();
        ws.set_cell_value_at(0, 0, "a").unwrap();
        ws.set_cell_value_at(2, 0, "b").unwrap();
        ws.set_row_hidden(1, true);
        ws.add_image(Image::new("pic", "png", vec![1, 2, 3], AnchorPoint::at(1, 0), None));
        ws.add_image(Image::new("ok", "png", vec![1, 2, 3], AnchorPoint::at(2, 0), None));

        let result = convert(&wb, &ConvertOptions::default()).unwrap();
        let images = result.document.images().count();
        assert_eq!(images, 1);
        assert!(matches!(
            &result.diagnostics[..],
            [Diagnostic::ImageDropped { image_id, .. }] if image_id == "pic"
        ));
    }

    #[test]
    fn test_dangling_marker_reported_once() {
        let mut wb = Workbook::new();
        let ws = wb.worksheet_mut(0).unwrap();
        ws.set_cell_value_at(0, 0, "a").unwrap();
        ws.page_setup_mut().footer = Some("&CPage &P&".to_string());

        let result = convert(&wb, &ConvertOptions::default()).unwrap();
        let footer = result.document.surfaces[0].footer.clone().unwrap();
        assert_eq!(footer.center, "Page 1");
        assert_eq!(result.diagnostics.len(), 1);
    }
}
