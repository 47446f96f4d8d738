//! Workbook pagination
//!
//! # Example
//!
//! ```rust
//! use sheetpage::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! for row in 0..200 {
//!     sheet.set_cell_value_at(row, 0, f64::from(row)).unwrap();
//! }
//!
//! // Without fit-to-page the rows spill over several pages
//! let options = ConvertOptions::default().with_fit_to_page(false);
//! let result = workbook.paginate_with_options(&options).unwrap();
//! assert!(result.document.surfaces.len() > 1);
//! ```

use crate::{convert, convert_with_ids, Conversion, ConvertOptions, IdGenerator, Result, Workbook};

/// Extension trait for Workbook to add print layout methods
pub trait WorkbookPaginateExt {
    /// Lay out every sheet with default options
    fn paginate(&self) -> Result<Conversion>;

    /// Lay out with custom options
    fn paginate_with_options(&self, options: &ConvertOptions) -> Result<Conversion>;

    /// Lay out with custom options, drawing surface and node ids from `ids`
    fn paginate_with_ids(
        &self,
        options: &ConvertOptions,
        ids: &mut dyn IdGenerator,
    ) -> Result<Conversion>;
}

impl WorkbookPaginateExt for Workbook {
    fn paginate(&self) -> Result<Conversion> {
        self.paginate_with_options(&ConvertOptions::default())
    }

    fn paginate_with_options(&self, options: &ConvertOptions) -> Result<Conversion> {
        convert(self, options)
    }

    fn paginate_with_ids(
        &self,
        options: &ConvertOptions,
        ids: &mut dyn IdGenerator,
    ) -> Result<Conversion> {
        convert_with_ids(self, options, ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IdKind, SheetSelector};

    struct Fixed(u32);

    impl IdGenerator for Fixed {
        fn next_id(&mut self, kind: IdKind) -> String {
            self.0 += 1;
            format!("{}#{}", kind.prefix(), self.0)
        }
    }

    #[test]
    fn test_paginate_default() {
        let mut wb = Workbook::new();
        wb.worksheet_mut(0).unwrap().set_cell_value("B2", "x").unwrap();

        let result = wb.paginate().unwrap();
        assert_eq!(result.document.id, "document-1");
        assert_eq!(result.document.surfaces[0].id, "page-1");
    }

    #[test]
    fn test_paginate_with_custom_ids() {
        let mut wb = Workbook::new();
        wb.worksheet_mut(0).unwrap().set_cell_value("A1", "x").unwrap();

        let result = wb
            .paginate_with_ids(&ConvertOptions::default(), &mut Fixed(0))
            .unwrap();
        assert_eq!(result.document.id, "document#1");
        assert_eq!(result.document.surfaces[0].id, "page#2");
        assert_eq!(result.document.nodes[0].id(), "table#3");
    }

    #[test]
    fn test_paginate_missing_sheet() {
        let wb = Workbook::new();
        let options = ConvertOptions::default().with_sheet(SheetSelector::Name("Missing".into()));
        assert!(wb.paginate_with_options(&options).is_err());
    }
}
