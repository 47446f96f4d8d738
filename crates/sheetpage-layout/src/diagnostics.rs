//! Non-fatal conversion diagnostics

use std::fmt;

use serde::{Deserialize, Serialize};

/// Something the converter degraded instead of failing on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Diagnostic {
    /// Resolved scale fell below the safety floor; it is still applied
    #[serde(rename_all = "camelCase")]
    LowScale { sheet: String, scale: f64, floor: f64 },

    /// A merged range lost a corner to filtering and was dropped
    #[serde(rename_all = "camelCase")]
    MergeDropped { sheet: String, range: String },

    /// An image could not be placed
    #[serde(rename_all = "camelCase")]
    ImageDropped {
        sheet: String,
        image_id: String,
        reason: String,
    },

    /// A header/footer string ended in a dangling `&`
    #[serde(rename_all = "camelCase")]
    HeaderFooterMarker { sheet: String, text: String },
}

impl Diagnostic {
    /// Sheet the diagnostic refers to
    pub fn sheet(&self) -> &str {
        match self {
            Diagnostic::LowScale { sheet, .. }
            | Diagnostic::MergeDropped { sheet, .. }
            | Diagnostic::ImageDropped { sheet, .. }
            | Diagnostic::HeaderFooterMarker { sheet, .. } => sheet,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::LowScale { sheet, scale, floor } => write!(
                f,
                "{}: scale {:.3} is below the readable floor {}",
                sheet, scale, floor
            ),
            Diagnostic::MergeDropped { sheet, range } => {
                write!(f, "{}: merged range {} dropped by filtering", sheet, range)
            }
            Diagnostic::ImageDropped {
                sheet,
                image_id,
                reason,
            } => write!(f, "{}: image {} dropped ({})", sheet, image_id, reason),
            Diagnostic::HeaderFooterMarker { sheet, text } => {
                write!(f, "{}: malformed header/footer marker in {:?}", sheet, text)
            }
        }
    }
}
