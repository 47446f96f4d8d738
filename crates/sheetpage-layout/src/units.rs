//! Unit conversions
//!
//! Everything in the output document is measured in millimetres. Sheets
//! measure rows in points, columns in character widths, margins in inches
//! and sub-cell offsets in 96 dpi pixels.

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Pixels per inch (screen resolution assumed by spreadsheet pixel units)
pub const PIXELS_PER_INCH: f64 = 96.0;

/// Maximum digit width of the default font (Calibri 11) in pixels
pub const MAX_DIGIT_WIDTH_PX: f64 = 7.0;

/// Cell padding added to every column, in pixels
pub const COLUMN_PADDING_PX: f64 = 5.0;

/// Inches to millimetres
pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// Millimetres to inches
pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Points to millimetres
pub fn points_to_mm(points: f64) -> f64 {
    points * MM_PER_INCH / POINTS_PER_INCH
}

/// Pixels to millimetres
pub fn pixels_to_mm(pixels: f64) -> f64 {
    pixels * MM_PER_INCH / PIXELS_PER_INCH
}

/// Column width in characters to whole pixels
///
/// Non-positive widths collapse to zero.
pub fn column_width_to_pixels(chars: f64) -> f64 {
    if chars > 0.0 {
        (chars * MAX_DIGIT_WIDTH_PX + COLUMN_PADDING_PX).trunc()
    } else {
        0.0
    }
}

/// Column width in characters to millimetres
pub fn column_width_to_mm(chars: f64) -> f64 {
    pixels_to_mm(column_width_to_pixels(chars))
}
