//! Image embedding and placement helpers

use base64::{engine::general_purpose::STANDARD, Engine};
use sheetpage_core::{AnchorPoint, Image};

use crate::filter::FilteredSheet;
use crate::units::pixels_to_mm;

/// Size used when an image's extent cannot be derived from its anchor
pub const PLACEHOLDER_SIZE_MM: f64 = 10.0;

/// MIME type for a raster file extension
pub fn mime_type(extension: &str) -> &'static str {
    match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "emf" => "image/emf",
        "wmf" => "image/wmf",
        _ => "application/octet-stream",
    }
}

/// Inline `data:` URI for an image payload
pub fn data_uri(image: &Image) -> String {
    format!(
        "data:{};base64,{}",
        mime_type(&image.extension),
        STANDARD.encode(&image.data)
    )
}

/// Scaled prefix sums: `offsets[i]` is where local index `i` starts
pub fn prefix_sums(sizes: &[f64]) -> Vec<f64> {
    let mut offsets = Vec::with_capacity(sizes.len() + 1);
    let mut acc = 0.0;
    offsets.push(acc);
    for size in sizes {
        acc += size;
        offsets.push(acc);
    }
    offsets
}

/// Position of an anchor point on the scaled, filtered grid (mm from the
/// grid origin), or `None` when its row or column did not survive
pub fn anchor_position(
    point: &AnchorPoint,
    sheet: &FilteredSheet<'_>,
    row_offsets: &[f64],
    col_offsets: &[f64],
    scale: f64,
) -> Option<(f64, f64)> {
    let row = sheet.local_row(point.row)?;
    let col = sheet.local_col(point.col)?;
    let x = col_offsets[col] + pixels_to_mm(point.col_offset) * scale;
    let y = row_offsets[row] + pixels_to_mm(point.row_offset) * scale;
    Some((x, y))
}
