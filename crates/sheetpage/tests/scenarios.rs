//! End-to-end layout scenarios

use pretty_assertions::assert_eq;
use sheetpage::prelude::*;
use sheetpage::{AnchorPoint, FitToPage, Image, LineStyle, Margins, PageOrder, SequentialIds};

/// Points per 100 mm
const ROW_100_MM: f64 = 100.0 * 72.0 / 25.4;

/// Column width (characters) that renders as roughly 100 mm
const COL_100_MM: f64 = 53.3;

fn single_sheet(build: impl FnOnce(&mut Worksheet)) -> Workbook {
    let mut wb = Workbook::new();
    build(wb.worksheet_mut(0).unwrap());
    wb
}

#[test]
fn test_thin_and_thick_shared_edge_resolve_to_thick() {
    let wb = single_sheet(|ws| {
        let thin = Style::new().with_border(BorderStyle::new().with_right(BorderLineStyle::Thin, Color::Auto));
        let thick = Style::new().with_border(BorderStyle::new().with_left(BorderLineStyle::Thick, Color::Auto));
        ws.set_cell_value("A1", "left").unwrap();
        ws.set_cell_style("A1", &thin).unwrap();
        ws.set_cell_value("B1", "right").unwrap();
        ws.set_cell_style("B1", &thick).unwrap();
    });

    let result = wb.paginate().unwrap();
    let table = &result.document.tables().next().unwrap().table;
    let left = table.cell(0, 0).unwrap().borders.clone().unwrap();
    let right = table.cell(0, 1).unwrap().borders.clone().unwrap();

    let thick_mm = 3.0 * 25.4 / 96.0;
    assert_eq!(left.right, right.left);
    let edge = left.right.unwrap();
    assert!((edge.width - thick_mm).abs() < 1e-9);
    assert_eq!(edge.style, LineStyle::Solid);
}

#[test]
fn test_single_target_cell_trims_to_one_by_one() {
    let wb = single_sheet(|ws| {
        for row in 0..10 {
            ws.set_row_height(row, 20.0);
        }
        ws.set_cell_value_at(5, 5, "Target").unwrap();
    });

    let result = wb.paginate().unwrap();
    let tables: Vec<_> = result.document.tables().collect();
    assert_eq!(tables.len(), 1);

    let table = &tables[0].table;
    assert_eq!(table.row_heights.len(), 1);
    assert_eq!(table.column_widths.len(), 1);
    assert_eq!(table.cells.len(), 1);
    assert_eq!((table.cells[0].row, table.cells[0].col), (0, 0));
    assert_eq!(table.cells[0].value, "Target");
}

#[test]
fn test_sheet_fit_to_one_page_shrinks_wide_content() {
    let wb = single_sheet(|ws| {
        ws.page_setup_mut().fit_to_page = Some(FitToPage {
            width: Some(1),
            height: Some(1),
        });
        for col in 0..4 {
            ws.set_column_width(col, COL_100_MM);
            ws.set_cell_value_at(0, col, "wide").unwrap();
        }
    });

    let result = wb
        .paginate_with_options(&ConvertOptions::default().with_paper_size(PaperSize::A4))
        .unwrap();

    assert_eq!(result.document.surfaces.len(), 1);
    let node = result.document.tables().next().unwrap();
    assert!(node.width <= 210.0 + 1e-6, "width {}", node.width);
    assert!(node.x + node.width <= 210.0 + 1e-6);
}

#[test]
fn test_manual_break_splits_first_row() {
    let wb = single_sheet(|ws| {
        for row in 0..4 {
            ws.set_row_height(row, ROW_100_MM);
            ws.set_cell_value_at(row, 0, f64::from(row)).unwrap();
        }
        ws.page_setup_mut().row_breaks = vec![1];
    });

    let options = ConvertOptions::default().with_fit_to_page(false);
    let result = wb.paginate_with_options(&options).unwrap();

    assert!(result.document.surfaces.len() >= 2);
    let first_surface = &result.document.surfaces[0].id;
    let first_table = result
        .document
        .tables()
        .find(|t| &t.surface_id == first_surface)
        .unwrap();
    assert_eq!(first_table.table.row_heights.len(), 1);
}

#[test]
fn test_page_order_over_then_down() {
    let build = |order: PageOrder| {
        single_sheet(|ws| {
            for row in 0..2 {
                ws.set_row_height(row, ROW_100_MM * 2.0);
                for col in 0..2 {
                    ws.set_column_width(col, COL_100_MM * 1.5);
                    ws.set_cell_value_at(row, col, format!("r{row}c{col}")).unwrap();
                }
            }
            ws.page_setup_mut().page_order = order;
        })
    };
    let options = ConvertOptions::default().with_fit_to_page(false);
    let first_values = |wb: &Workbook| -> Vec<String> {
        let result = wb.paginate_with_options(&options).unwrap();
        result
            .document
            .tables()
            .map(|t| t.table.cells[0].value.clone())
            .collect()
    };

    assert_eq!(
        first_values(&build(PageOrder::DownThenOver)),
        vec!["r0c0", "r1c0", "r0c1", "r1c1"]
    );
    assert_eq!(
        first_values(&build(PageOrder::OverThenDown)),
        vec!["r0c0", "r0c1", "r1c0", "r1c1"]
    );
}

#[test]
fn test_multi_sheet_page_numbers_restart() {
    let mut wb = Workbook::new();
    wb.worksheet_mut(0).unwrap().set_cell_value("A1", "one").unwrap();
    let second = wb.add_worksheet_with_name("Second").unwrap();
    wb.worksheet_mut(second).unwrap().set_cell_value("A1", "two").unwrap();

    let result = wb.paginate().unwrap();
    let pages: Vec<_> = result
        .document
        .surfaces
        .iter()
        .map(|s| (s.sheet_name.as_str(), s.page_number))
        .collect();
    assert_eq!(pages, vec![("Sheet1", 1), ("Second", 1)]);
    assert_eq!(result.document.tables().count(), 2);
}

#[test]
fn test_missing_sheet_is_fatal() {
    let wb = Workbook::new();

    let by_name = ConvertOptions::default().with_sheet("Nope");
    assert!(matches!(
        wb.paginate_with_options(&by_name),
        Err(LayoutError::SheetNotFound(name)) if name == "Nope"
    ));

    let by_index = ConvertOptions::default().with_sheet(3usize);
    assert!(matches!(
        wb.paginate_with_options(&by_index),
        Err(LayoutError::SheetOutOfBounds(3, 1))
    ));
}

#[test]
fn test_custom_range_beats_print_area() {
    let wb = single_sheet(|ws| {
        for row in 0..5 {
            for col in 0..5 {
                ws.set_cell_value_at(row, col, format!("{row}{col}")).unwrap();
            }
        }
        ws.set_print_area(Some(CellRange::parse("A1:E5").unwrap()));
    });

    let options = ConvertOptions::default().with_range("B2:C3");
    let result = wb.paginate_with_options(&options).unwrap();
    let table = &result.document.tables().next().unwrap().table;
    let values: Vec<_> = table.cells.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(values, vec!["11", "12", "21", "22"]);
}

#[test]
fn test_header_and_footer_fields() {
    let wb = single_sheet(|ws| {
        for row in 0..3 {
            ws.set_row_height(row, ROW_100_MM * 2.0);
            ws.set_cell_value_at(row, 0, "x").unwrap();
        }
        ws.page_setup_mut().header = Some("&L&A&RPage &P of &N".to_string());
        ws.page_setup_mut().footer = Some("&C&F".to_string());
    });

    let options = ConvertOptions::default()
        .with_fit_to_page(false)
        .with_title("Quarterly");
    let result = wb.paginate_with_options(&options).unwrap();

    assert_eq!(result.document.surfaces.len(), 3);
    let second = &result.document.surfaces[1];
    let header = second.header.clone().unwrap();
    assert_eq!(header.left, "Sheet1");
    assert_eq!(header.right, "Page 2 of 3");
    assert_eq!(second.footer.clone().unwrap().center, "Quarterly");
}

#[test]
fn test_margin_override_positions_table() {
    let wb = single_sheet(|ws| {
        ws.set_cell_value("A1", "x").unwrap();
    });

    let options = ConvertOptions::default().with_margins_mm(Margins::uniform(12.5));
    let result = wb.paginate_with_options(&options).unwrap();
    let node = result.document.tables().next().unwrap();
    assert_eq!((node.x, node.y), (12.5, 12.5));
}

#[test]
fn test_image_becomes_data_uri_node() {
    let wb = single_sheet(|ws| {
        ws.set_cell_value("A1", "x").unwrap();
        ws.set_cell_value("B2", "y").unwrap();
        ws.set_cell_value("C3", "z").unwrap();
        ws.add_image(Image::new(
            "logo",
            "png",
            b"png-bytes".to_vec(),
            AnchorPoint::at(1, 1),
            Some(AnchorPoint::at(2, 2)),
        ));
    });

    let result = wb.paginate().unwrap();
    let image = result.document.images().next().unwrap();
    assert_eq!(image.mime_type, "image/png");
    assert!(image.src.starts_with("data:image/png;base64,"));
    assert_eq!(image.surface_id, result.document.surfaces[0].id);
    assert!(image.width > 0.0 && image.height > 0.0);
}

#[test]
fn test_image_geometry_on_second_page() {
    let wb = single_sheet(|ws| {
        for row in 0..6 {
            ws.set_row_height(row, ROW_100_MM);
            ws.set_cell_value_at(row, 0, "a").unwrap();
            ws.set_cell_value_at(row, 1, "b").unwrap();
        }
        ws.set_cell_value_at(7, 0, "hidden").unwrap();
        ws.set_row_hidden(7, true);

        ws.add_image(Image::new(
            "sized",
            "png",
            b"one".to_vec(),
            AnchorPoint::at(5, 1).with_offset(20.0, 40.0),
            Some(AnchorPoint::at(5, 1).with_offset(60.0, 100.0)),
        ));
        ws.add_image(Image::new(
            "lost-end",
            "png",
            b"two".to_vec(),
            AnchorPoint::at(5, 0),
            Some(AnchorPoint::at(7, 0)),
        ));
        ws.add_image(Image::new(
            "overhang",
            "png",
            b"three".to_vec(),
            AnchorPoint::at(5, 0).with_offset(1000.0, 0.0),
            None,
        ));
    });

    // 100 mm rows at half scale: five rows fill the first page
    let options = ConvertOptions::default()
        .with_manual_scale(0.5)
        .with_margins_mm(Margins::uniform(10.0));
    let result = wb.paginate_with_options(&options).unwrap();
    assert_eq!(result.document.surfaces.len(), 2);
    let second = &result.document.surfaces[1];
    assert_eq!(second.page_number, 2);

    let table = result
        .document
        .tables()
        .find(|t| t.surface_id == second.id)
        .unwrap();
    assert_eq!(table.table.row_heights.len(), 1);
    assert_eq!((table.x, table.y), (10.0, 10.0));

    let px = |n: f64| n * 25.4 / 96.0 * 0.5;
    let images: Vec<_> = result.document.images().collect();
    assert_eq!(images.len(), 3);
    assert!(images.iter().all(|i| i.surface_id == second.id));

    let sized = images[0];
    let first_col = table.table.column_widths[0];
    assert!((sized.x - (10.0 + first_col + px(40.0))).abs() < 1e-9, "x {}", sized.x);
    assert!((sized.y - (10.0 + px(20.0))).abs() < 1e-9, "y {}", sized.y);
    assert!((sized.width - px(60.0)).abs() < 1e-9);
    assert!((sized.height - px(40.0)).abs() < 1e-9);

    let lost_end = images[1];
    assert!((lost_end.x - 10.0).abs() < 1e-9 && (lost_end.y - 10.0).abs() < 1e-9);
    assert_eq!((lost_end.width, lost_end.height), (10.0, 10.0));

    // Pushed below the page content, it stays with its anchor cell
    let overhang = images[2];
    assert!((overhang.y - (10.0 + px(1000.0))).abs() < 1e-9);
    assert_eq!((overhang.width, overhang.height), (10.0, 10.0));
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_low_scale_is_reported_not_fatal() {
    let wb = single_sheet(|ws| {
        ws.set_cell_value("A1", "tiny").unwrap();
    });

    let options = ConvertOptions::default().with_manual_scale(0.1);
    let result = wb.paginate_with_options(&options).unwrap();
    assert!(matches!(
        &result.diagnostics[..],
        [Diagnostic::LowScale { scale, .. }] if (*scale - 0.1).abs() < 1e-12
    ));
    assert_eq!(result.document.surfaces.len(), 1);
}

#[test]
fn test_output_serializes_camel_case() {
    let wb = single_sheet(|ws| {
        ws.set_cell_value("A1", "x").unwrap();
    });

    let result = wb
        .paginate_with_ids(&ConvertOptions::default(), &mut SequentialIds::new())
        .unwrap();
    let json = serde_json::to_value(&result.document).unwrap();

    assert_eq!(json["surfaces"][0]["pageNumber"], 1);
    assert_eq!(json["nodes"][0]["type"], "table");
    assert_eq!(json["nodes"][0]["surfaceId"], "page-1");
    assert!(json["nodes"][0]["table"]["rowHeights"].is_array());
}
