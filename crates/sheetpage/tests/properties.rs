//! Property tests for pagination, border resolution, scaling and determinism

use proptest::prelude::*;
use sheetpage::prelude::*;
use sheetpage::{FitToPage, SequentialIds};
use sheetpage_layout::page_break::plan_bands;
use sheetpage_layout::scale::{resolve_scale, Extents};

const LINE_STYLES: [BorderLineStyle; 8] = [
    BorderLineStyle::None,
    BorderLineStyle::Hair,
    BorderLineStyle::Thin,
    BorderLineStyle::Dotted,
    BorderLineStyle::Dashed,
    BorderLineStyle::Medium,
    BorderLineStyle::Thick,
    BorderLineStyle::Double,
];

fn line_style() -> impl Strategy<Value = BorderLineStyle> {
    prop::sample::select(LINE_STYLES.to_vec())
}

fn cell_borders() -> impl Strategy<Value = BorderStyle> {
    (line_style(), line_style(), line_style(), line_style()).prop_map(|(t, r, b, l)| {
        BorderStyle::new()
            .with_top(t, Color::Auto)
            .with_right(r, Color::Auto)
            .with_bottom(b, Color::Auto)
            .with_left(l, Color::Auto)
    })
}

/// A sheet with one text cell per row, using the given row heights (points)
fn tall_sheet(heights: &[f64], breaks: &[u32]) -> Workbook {
    let mut wb = Workbook::new();
    let ws = wb.worksheet_mut(0).unwrap();
    for (row, &height) in heights.iter().enumerate() {
        let row = row as u32;
        ws.set_row_height(row, height);
        ws.set_cell_value_at(row, 0, format!("row {row}")).unwrap();
    }
    ws.page_setup_mut().row_breaks = breaks.to_vec();
    wb
}

proptest! {
    #[test]
    fn prop_bands_cover_every_index_once(
        sizes in prop::collection::vec(0.0f64..400.0, 1..60),
        limit in 10.0f64..300.0,
        mut manual in prop::collection::vec(0usize..60, 0..6),
    ) {
        manual.sort_unstable();
        manual.dedup();
        let bands = plan_bands(&sizes, limit, &manual, false);

        let covered: Vec<usize> = bands.iter().flat_map(|b| b.indices()).collect();
        let expected: Vec<usize> = (0..sizes.len()).collect();
        prop_assert_eq!(covered, expected);

        for band in &bands {
            let total: f64 = sizes[band.indices()].iter().sum();
            prop_assert!(band.len() == 1 || total <= limit + 1e-6);
        }
    }

    #[test]
    fn prop_pages_reconstruct_filtered_rows(
        heights in prop::collection::vec(5.0f64..400.0, 1..40),
        breaks in prop::collection::vec(0u32..40, 0..4),
    ) {
        let wb = tall_sheet(&heights, &breaks);
        let options = ConvertOptions::default().with_fit_to_page(false);
        let result = wb.paginate_with_options(&options).unwrap();

        let mut rows = Vec::new();
        for node in result.document.tables() {
            let mut on_page: Vec<String> = node.table.cells.iter().map(|c| c.value.clone()).collect();
            rows.append(&mut on_page);
        }
        let expected: Vec<String> = (0..heights.len()).map(|r| format!("row {r}")).collect();
        prop_assert_eq!(rows, expected);
    }

    #[test]
    fn prop_shared_edges_agree(styles in prop::collection::vec(cell_borders(), 9)) {
        let mut wb = Workbook::new();
        let ws = wb.worksheet_mut(0).unwrap();
        for (i, border) in styles.iter().enumerate() {
            let (row, col) = ((i / 3) as u32, (i % 3) as u16);
            ws.set_cell_value_at(row, col, "x").unwrap();
            ws.set_cell_style_at(row, col, &Style::new().with_border(border.clone())).unwrap();
        }

        let result = wb.paginate().unwrap();
        let table = &result.document.tables().next().unwrap().table;
        let edges = |row: usize, col: usize| {
            table
                .cell(row, col)
                .and_then(|c| c.borders.clone())
                .unwrap_or_default()
        };

        for row in 0..3 {
            for col in 0..3 {
                let here = edges(row, col);
                if col + 1 < 3 {
                    prop_assert_eq!(&here.right, &edges(row, col + 1).left);
                }
                if row + 1 < 3 {
                    prop_assert_eq!(&here.bottom, &edges(row + 1, col).top);
                }
            }
        }
    }

    #[test]
    fn prop_wider_content_never_scales_up(
        width in 1.0f64..2000.0,
        height in 1.0f64..2000.0,
        fit_width in prop::option::of(1u32..4),
        fit_height in prop::option::of(1u32..4),
        requested in any::<bool>(),
    ) {
        let mut setup = PageSetup::new();
        if !requested {
            setup.fit_to_page = Some(FitToPage { width: fit_width, height: fit_height });
        }
        let options = ConvertOptions::default().with_fit_to_page(requested);
        let extents = Extents {
            content_width: width,
            content_height: height,
            drawable_width: 174.4,
            drawable_height: 258.9,
        };
        let doubled = Extents { content_width: width * 2.0, ..extents };

        let narrow = resolve_scale(&extents, &setup, &options).scale;
        let wide = resolve_scale(&doubled, &setup, &options).scale;
        prop_assert!(wide <= narrow + 1e-12, "{} > {}", wide, narrow);
    }

    #[test]
    fn prop_conversion_is_deterministic(
        values in prop::collection::vec(prop::option::of(-1.0e6f64..1.0e6), 1..30),
        fit in any::<bool>(),
    ) {
        let mut wb = Workbook::new();
        let ws = wb.worksheet_mut(0).unwrap();
        for (i, value) in values.iter().enumerate() {
            if let Some(v) = value {
                ws.set_cell_value_at((i / 5) as u32, (i % 5) as u16, *v).unwrap();
            }
        }
        let options = ConvertOptions::default().with_fit_to_page(fit);

        let first = wb.paginate_with_ids(&options, &mut SequentialIds::new()).unwrap();
        let second = wb.paginate_with_ids(&options, &mut SequentialIds::new()).unwrap();
        prop_assert_eq!(first, second);
    }
}
