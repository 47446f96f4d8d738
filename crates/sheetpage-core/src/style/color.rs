//! Color representation

use std::fmt;

/// Color as delivered by the workbook decoder
///
/// Theme and indexed colors are resolved against the default Office theme
/// and the legacy 56-entry palette when converted to RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Color {
    /// Automatic/default color
    #[default]
    Auto,

    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },

    /// ARGB color; alpha is ignored on paper
    Argb { a: u8, r: u8, g: u8, b: u8 },

    /// Theme color with tint (-100..=100 percent)
    Theme { index: u8, tint: i8 },

    /// Indexed color (legacy Excel palette)
    Indexed(u8),
}

/// Legacy palette, indices 0..56
const PALETTE: [(u8, u8, u8); 56] = [
    (0, 0, 0),
    (255, 255, 255),
    (255, 0, 0),
    (0, 255, 0),
    (0, 0, 255),
    (255, 255, 0),
    (255, 0, 255),
    (0, 255, 255),
    (0, 0, 0),
    (255, 255, 255),
    (255, 0, 0),
    (0, 255, 0),
    (0, 0, 255),
    (255, 255, 0),
    (255, 0, 255),
    (0, 255, 255),
    (128, 0, 0),
    (0, 128, 0),
    (0, 0, 128),
    (128, 128, 0),
    (128, 0, 128),
    (0, 128, 128),
    (192, 192, 192),
    (128, 128, 128),
    (153, 153, 255),
    (153, 51, 102),
    (255, 255, 204),
    (204, 255, 255),
    (102, 0, 102),
    (255, 128, 128),
    (0, 102, 204),
    (204, 204, 255),
    (0, 0, 128),
    (255, 0, 255),
    (255, 255, 0),
    (0, 255, 255),
    (128, 0, 128),
    (128, 0, 0),
    (0, 128, 128),
    (0, 0, 255),
    (0, 204, 255),
    (204, 255, 255),
    (204, 255, 204),
    (255, 255, 153),
    (153, 204, 255),
    (255, 153, 204),
    (204, 153, 255),
    (255, 204, 153),
    (51, 102, 255),
    (51, 204, 204),
    (153, 204, 0),
    (255, 204, 0),
    (255, 153, 0),
    (255, 102, 0),
    (102, 102, 153),
    (150, 150, 150),
];

/// Default Office theme: lt1, dk1, lt2, dk2, accent1..accent6
const THEME: [(u8, u8, u8); 10] = [
    (255, 255, 255),
    (0, 0, 0),
    (238, 236, 225),
    (31, 73, 125),
    (79, 129, 189),
    (192, 80, 77),
    (155, 187, 89),
    (128, 100, 162),
    (75, 172, 198),
    (247, 150, 70),
];

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create a theme color
    pub const fn theme(index: u8, tint: i8) -> Self {
        Color::Theme { index, tint }
    }

    /// Create from a hex string ("#FF0000", "FF0000" or ARGB "FFFF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

        match hex.len() {
            6 => Some(Color::Rgb {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
            }),
            8 => Some(Color::Argb {
                a: byte(0)?,
                r: byte(2)?,
                g: byte(4)?,
                b: byte(6)?,
            }),
            _ => None,
        }
    }

    /// Check if color is automatic/default
    pub fn is_auto(&self) -> bool {
        matches!(self, Color::Auto)
    }

    /// Convert to an RGB tuple (`Auto` is black)
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match *self {
            Color::Auto => (0, 0, 0),
            Color::Rgb { r, g, b } | Color::Argb { r, g, b, .. } => (r, g, b),
            Color::Theme { index, tint } => {
                let base = THEME.get(index as usize).copied().unwrap_or((0, 0, 0));
                apply_tint(base, tint)
            }
            Color::Indexed(i) => PALETTE.get(i as usize).copied().unwrap_or((0, 0, 0)),
        }
    }

    /// CSS-style `#RRGGBB` string
    pub fn to_css_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
}

fn apply_tint(color: (u8, u8, u8), tint: i8) -> (u8, u8, u8) {
    let t = tint as f64 / 100.0;
    let apply = |c: u8| -> u8 {
        let c = c as f64;
        let out = if t < 0.0 { c * (1.0 + t) } else { c + (255.0 - c) * t };
        out.round().clamp(0.0, 255.0) as u8
    };
    (apply(color.0), apply(color.1), apply(color.2))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            other => write!(f, "{}", other.to_css_hex()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        assert_eq!(
            Color::from_hex("80FFFFFF"),
            Some(Color::Argb {
                a: 128,
                r: 255,
                g: 255,
                b: 255
            })
        );
        assert_eq!(Color::from_hex("12345"), None);
        assert_eq!(Color::from_hex("GG0000"), None);
    }

    #[test]
    fn test_to_css_hex() {
        assert_eq!(Color::Auto.to_css_hex(), "#000000");
        assert_eq!(Color::rgb(18, 52, 86).to_css_hex(), "#123456");
        assert_eq!(Color::Indexed(2).to_css_hex(), "#FF0000");
        assert_eq!(Color::theme(4, 0).to_css_hex(), "#4F81BD");
        assert_eq!(Color::Indexed(200).to_css_hex(), "#000000");
    }

    #[test]
    fn test_theme_tint() {
        // Fully lightened becomes white, fully darkened becomes black
        assert_eq!(Color::theme(1, 100).to_rgb(), (255, 255, 255));
        assert_eq!(Color::theme(0, -100).to_rgb(), (0, 0, 0));
    }
}
