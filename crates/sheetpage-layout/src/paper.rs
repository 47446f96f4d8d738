//! Paper sizes and page geometry

use serde::{Deserialize, Serialize};
use sheetpage_core::{Orientation, PageSetup};

use crate::document::Margins;
use crate::options::ConvertOptions;
use crate::units::inches_to_mm;

/// Supported paper sizes, keyed by their spreadsheet paper code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaperSize {
    Letter,
    Tabloid,
    Legal,
    A3,
    #[default]
    A4,
    A5,
    B4,
    B5,
}

impl PaperSize {
    /// All known sizes
    pub const ALL: [PaperSize; 8] = [
        PaperSize::Letter,
        PaperSize::Tabloid,
        PaperSize::Legal,
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::A5,
        PaperSize::B4,
        PaperSize::B5,
    ];

    /// Look up a spreadsheet paper code; unknown codes yield `None`
    pub fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            1 => PaperSize::Letter,
            3 => PaperSize::Tabloid,
            5 => PaperSize::Legal,
            8 => PaperSize::A3,
            9 => PaperSize::A4,
            11 => PaperSize::A5,
            12 => PaperSize::B4,
            13 => PaperSize::B5,
            _ => return None,
        })
    }

    /// Spreadsheet paper code
    pub fn code(&self) -> u16 {
        match self {
            PaperSize::Letter => 1,
            PaperSize::Tabloid => 3,
            PaperSize::Legal => 5,
            PaperSize::A3 => 8,
            PaperSize::A4 => 9,
            PaperSize::A5 => 11,
            PaperSize::B4 => 12,
            PaperSize::B5 => 13,
        }
    }

    /// Portrait dimensions `(width, height)` in millimetres
    pub fn dimensions_mm(&self) -> (f64, f64) {
        match self {
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::B4 => (250.0, 353.0),
            PaperSize::B5 => (176.0, 250.0),
        }
    }

    /// Parse a case-insensitive name such as "a4" or "letter"
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            PaperSize::Letter => "Letter",
            PaperSize::Tabloid => "Tabloid",
            PaperSize::Legal => "Legal",
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::B4 => "B4",
            PaperSize::B5 => "B5",
        }
    }
}

/// Resolved physical page for one sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub paper: PaperSize,
    pub orientation: Orientation,
    /// Page width in mm (after orientation)
    pub width: f64,
    /// Page height in mm (after orientation)
    pub height: f64,
    pub margins: Margins,
}

impl PageGeometry {
    /// Resolve paper, orientation and margins
    ///
    /// Explicit options win over the sheet's page setup, which wins over
    /// the defaults (A4, portrait, Normal margins).
    pub fn resolve(setup: &PageSetup, options: &ConvertOptions) -> Self {
        let paper = options
            .paper_size
            .or_else(|| setup.paper_size.and_then(PaperSize::from_code))
            .unwrap_or_default();
        let orientation = options
            .orientation
            .or(setup.orientation)
            .unwrap_or_default();
        let margins = options.margins_mm.unwrap_or_else(|| {
            let m = setup.margins.unwrap_or_default();
            Margins {
                top: inches_to_mm(m.top),
                right: inches_to_mm(m.right),
                bottom: inches_to_mm(m.bottom),
                left: inches_to_mm(m.left),
            }
        });

        let (w, h) = paper.dimensions_mm();
        let (width, height) = match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        };

        Self {
            paper,
            orientation,
            width,
            height,
            margins,
        }
    }

    /// Width available for content, never negative
    pub fn drawable_width(&self) -> f64 {
        (self.width - self.margins.left - self.margins.right).max(0.0)
    }

    /// Height available for content, never negative
    pub fn drawable_height(&self) -> f64 {
        (self.height - self.margins.top - self.margins.bottom).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetpage_core::PageMargins;

    #[test]
    fn test_code_roundtrip() {
        for paper in PaperSize::ALL {
            assert_eq!(PaperSize::from_code(paper.code()), Some(paper));
        }
        assert_eq!(PaperSize::from_code(70), None);
    }

    #[test]
    fn test_defaults_a4_portrait() {
        let geom = PageGeometry::resolve(&PageSetup::default(), &ConvertOptions::default());
        assert_eq!(geom.paper, PaperSize::A4);
        assert_eq!((geom.width, geom.height), (210.0, 297.0));
        assert!((geom.margins.left - 17.78).abs() < 1e-9);
        assert!((geom.margins.top - 19.05).abs() < 1e-9);
        assert!((geom.drawable_width() - (210.0 - 2.0 * 17.78)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_code_falls_back_to_a4() {
        let setup = PageSetup {
            paper_size: Some(999),
            ..Default::default()
        };
        let geom = PageGeometry::resolve(&setup, &ConvertOptions::default());
        assert_eq!(geom.paper, PaperSize::A4);
    }

    #[test]
    fn test_options_override_sheet() {
        let setup = PageSetup {
            paper_size: Some(1),
            orientation: Some(Orientation::Portrait),
            margins: Some(PageMargins {
                top: 1.0,
                right: 1.0,
                bottom: 1.0,
                left: 1.0,
            }),
            ..Default::default()
        };

        let geom = PageGeometry::resolve(&setup, &ConvertOptions::default());
        assert_eq!(geom.paper, PaperSize::Letter);
        assert_eq!(geom.margins.top, 25.4);

        let options = ConvertOptions::default()
            .with_paper_size(PaperSize::A3)
            .with_orientation(Orientation::Landscape)
            .with_margins_mm(Margins::uniform(10.0));
        let geom = PageGeometry::resolve(&setup, &options);
        assert_eq!((geom.width, geom.height), (420.0, 297.0));
        assert_eq!(geom.drawable_width(), 400.0);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(PaperSize::from_name("letter"), Some(PaperSize::Letter));
        assert_eq!(PaperSize::from_name("A5"), Some(PaperSize::A5));
        assert_eq!(PaperSize::from_name("foolscap"), None);
    }
}
