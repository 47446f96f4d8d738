//! Scale resolution
//!
//! The first rule that applies decides the scale:
//!
//! 1. a manual scale from the options, used verbatim
//! 2. an explicit fit-to-one-page request from the options
//! 3. the sheet's own fit-to-page page counts
//! 4. the default fit-to-page policy, when nothing was requested
//! 5. the sheet's percentage scale (100% when absent)
//!
//! Scales below [`SCALE_FLOOR`] are applied as computed and flagged.

use sheetpage_core::PageSetup;

use crate::options::ConvertOptions;

/// Smallest scale considered readable
pub const SCALE_FLOOR: f64 = 0.3;

/// Which rule produced the scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleSource {
    Manual,
    RequestedFit,
    SheetFit,
    DefaultFit,
    SheetScale,
}

/// Content and drawable extents in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub content_width: f64,
    pub content_height: f64,
    pub drawable_width: f64,
    pub drawable_height: f64,
}

/// Outcome of scale resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleDecision {
    pub scale: f64,
    pub source: ScaleSource,
}

impl ScaleDecision {
    /// Content must land on exactly one page
    pub fn fits_one_page(&self) -> bool {
        matches!(self.source, ScaleSource::RequestedFit | ScaleSource::DefaultFit)
    }

    pub fn below_floor(&self) -> bool {
        self.scale < SCALE_FLOOR
    }
}

/// Resolve the content scale for one sheet
pub fn resolve_scale(extents: &Extents, setup: &PageSetup, options: &ConvertOptions) -> ScaleDecision {
    let decide = |scale: f64, source| ScaleDecision {
        scale: scale.max(0.0),
        source,
    };

    if let Some(manual) = options.manual_scale {
        return decide(manual, ScaleSource::Manual);
    }
    if options.fit_to_page == Some(true) {
        return decide(fit_one_page(extents), ScaleSource::RequestedFit);
    }
    if let Some(fit) = setup.fit_to_page {
        let pages = |n: Option<u32>| n.filter(|&n| n > 0).map(f64::from);
        let scale_x = pages(fit.width)
            .map(|n| ratio(extents.drawable_width * n, extents.content_width));
        let scale_y = pages(fit.height)
            .map(|n| ratio(extents.drawable_height * n, extents.content_height));

        return match (scale_x, scale_y) {
            (Some(x), Some(y)) => decide(x.min(y), ScaleSource::SheetFit),
            (Some(s), None) | (None, Some(s)) => decide(s, ScaleSource::SheetFit),
            (None, None) => decide(sheet_scale(setup), ScaleSource::SheetScale),
        };
    }
    if options.fit_to_page.is_none() && options.default_fit_to_page {
        return decide(fit_one_page(extents), ScaleSource::DefaultFit);
    }
    decide(sheet_scale(setup), ScaleSource::SheetScale)
}

/// Largest scale up to 1 at which the content fits one drawable area
pub fn fit_one_page(extents: &Extents) -> f64 {
    ratio(extents.drawable_width, extents.content_width)
        .min(ratio(extents.drawable_height, extents.content_height))
        .min(1.0)
}

/// Sheet percentage scale as a factor
pub fn sheet_scale(setup: &PageSetup) -> f64 {
    match setup.scale {
        Some(pct) if pct > 0 => f64::from(pct) / 100.0,
        _ => 1.0,
    }
}

// Zero-sized content fits at any scale; stand in the drawable size
fn ratio(drawable: f64, content: f64) -> f64 {
    if content > 0.0 {
        drawable / content
    } else {
        1.0
    }
}
