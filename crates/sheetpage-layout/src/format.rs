//! Cell value to display text

use std::fmt::Write;

use chrono::NaiveDateTime;
use sheetpage_core::{Cell, CellValue};

use crate::options::{ConvertOptions, DEFAULT_DATE_FORMAT};

/// Significant digits shown by the General format
const GENERAL_DIGITS: i32 = 10;

/// Render a cell the way it prints
pub fn format_cell(cell: &Cell, options: &ConvertOptions) -> String {
    if options.preserve_formula_as_text {
        if let Some(formula) = cell.formula.as_deref().filter(|f| !f.is_empty()) {
            return if formula.starts_with('=') {
                formula.to_string()
            } else {
                format!("={}", formula)
            };
        }
    }
    format_value(&cell.value, cell.style.number_format.as_deref(), &options.date_format)
}

/// Render a value with an optional number format code
pub fn format_value(value: &CellValue, number_format: Option<&str>, date_format: &str) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::String(s) => s.clone(),
        CellValue::Number(n) => format_number(*n, number_format),
        CellValue::Boolean(true) => "TRUE".to_string(),
        CellValue::Boolean(false) => "FALSE".to_string(),
        CellValue::Date(dt) => format_date(dt, date_format),
        CellValue::RichText(runs) => runs.iter().map(|r| r.text.as_str()).collect(),
        CellValue::Error(e) => e.as_str().to_string(),
    }
}

/// Format a date; an unusable format string falls back to ISO dates
pub fn format_date(dt: &NaiveDateTime, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", dt.format(date_format)).is_ok() {
        return out;
    }
    out.clear();
    // The default pattern is always valid
    let _ = write!(out, "{}", dt.format(DEFAULT_DATE_FORMAT));
    out
}

/// Format a number with a subset of spreadsheet number formats
///
/// Supported: General, `@`, and patterns built from `0`, `#`, `,`, `.`
/// with an optional trailing `%`. Anything else renders as General.
pub fn format_number(n: f64, number_format: Option<&str>) -> String {
    let code = number_format.map(str::trim).unwrap_or("");
    if code.is_empty() || code.eq_ignore_ascii_case("general") || code == "@" {
        return format_general(n);
    }
    match NumericPattern::parse(code) {
        Some(pattern) => pattern.apply(n),
        None => format_general(n),
    }
}

/// General format: integers without decimals, otherwise up to ten
/// significant digits with trailing zeros trimmed
pub fn format_general(n: f64) -> String {
    if !n.is_finite() {
        return "#NUM!".to_string();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }
    let abs = n.abs();
    if abs >= 1e15 || abs < 1e-9 {
        return format_scientific(n);
    }

    let magnitude = abs.log10().floor() as i32 + 1;
    let decimals = (GENERAL_DIGITS - magnitude).clamp(0, 15) as usize;
    trim_fraction(format!("{:.*}", decimals, n))
}

fn format_scientific(n: f64) -> String {
    // Rust renders "1.23450E15"; spreadsheets show "1.2345E+15"
    let raw = format!("{:.5E}", n);
    let (mantissa, exponent) = raw.split_once('E').unwrap_or((raw.as_str(), "0"));
    let mantissa = trim_fraction(mantissa.to_string());
    let exp: i32 = exponent.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}E{}{:02}", mantissa, sign, exp.abs())
}

fn trim_fraction(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// A fixed-decimal pattern such as `#,##0.00` or `0%`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumericPattern {
    decimals: usize,
    thousands: bool,
    percent: bool,
}

impl NumericPattern {
    fn parse(code: &str) -> Option<Self> {
        // Only the positive section of a multi-section format is honoured
        let code = code.split(';').next().unwrap_or(code);
        let (body, percent) = match code.strip_suffix('%') {
            Some(body) => (body, true),
            None => (code, false),
        };
        if body.is_empty() || !body.chars().all(|c| matches!(c, '0' | '#' | ',' | '.')) {
            return None;
        }
        if !body.contains('0') && !body.contains('#') {
            return None;
        }

        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        if frac_part.contains('.') || frac_part.contains(',') {
            return None;
        }
        Some(Self {
            decimals: frac_part.chars().filter(|c| *c == '0').count(),
            thousands: int_part.contains(','),
            percent,
        })
    }

    fn apply(&self, n: f64) -> String {
        let value = if self.percent { n * 100.0 } else { n };
        let mut text = format!("{:.*}", self.decimals, value);
        if self.thousands {
            text = group_thousands(&text);
        }
        if text.starts_with('-') && text[1..].chars().all(|c| matches!(c, '0' | '.' | ',')) {
            text.remove(0);
        }
        if self.percent {
            text.push('%');
        }
        text
    }
}

fn group_thousands(text: &str) -> String {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}
