//! Header/footer mini-language
//!
//! A header string is split into left / center / right sections by the
//! `&L`, `&C` and `&R` markers. Text before the first marker belongs to no
//! section and is discarded. Field codes inside a section are expanded per
//! page; formatting codes are stripped.

use chrono::NaiveDateTime;

use crate::document::HeaderFooterText;
use crate::format::format_date;

/// Time format used by the `&T` code
const TIME_FORMAT: &str = "%H:%M";

/// The three raw sections of a header or footer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sections {
    pub left: String,
    pub center: String,
    pub right: String,
}

#[derive(Clone, Copy)]
enum Slot {
    Left,
    Center,
    Right,
}

impl Sections {
    /// Split on section markers, keeping every other code for later expansion
    pub fn parse(text: &str) -> Self {
        let mut sections = Sections::default();
        let mut slot: Option<Slot> = None;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '&' {
                match chars.peek().copied() {
                    Some('L') => {
                        chars.next();
                        slot = Some(Slot::Left);
                        continue;
                    }
                    Some('C') => {
                        chars.next();
                        slot = Some(Slot::Center);
                        continue;
                    }
                    Some('R') => {
                        chars.next();
                        slot = Some(Slot::Right);
                        continue;
                    }
                    Some('&') => {
                        chars.next();
                        if let Some(s) = slot {
                            sections.slot_mut(s).push_str("&&");
                        }
                        continue;
                    }
                    _ => {}
                }
            }
            if let Some(s) = slot {
                sections.slot_mut(s).push(c);
            }
        }
        sections
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut String {
        match slot {
            Slot::Left => &mut self.left,
            Slot::Center => &mut self.center,
            Slot::Right => &mut self.right,
        }
    }

    /// Expand the field codes of all three sections for one page
    ///
    /// Returns the text and whether any section ended in a dangling `&`.
    pub fn resolve(&self, fields: &PageFields<'_>) -> (HeaderFooterText, bool) {
        let (left, l) = expand(&self.left, fields);
        let (center, c) = expand(&self.center, fields);
        let (right, r) = expand(&self.right, fields);
        (HeaderFooterText { left, center, right }, l || c || r)
    }
}

/// Values substituted for field codes on one page
#[derive(Debug, Clone, Copy)]
pub struct PageFields<'a> {
    /// `&P`
    pub page: u32,
    /// `&N`
    pub pages: u32,
    /// `&A`
    pub sheet_name: &'a str,
    /// `&F`
    pub title: Option<&'a str>,
    /// `&D` and `&T`
    pub timestamp: Option<NaiveDateTime>,
    /// Format for `&D`
    pub date_format: &'a str,
}

/// Expand one section; the flag reports a dangling `&`
pub fn expand(section: &str, fields: &PageFields<'_>) -> (String, bool) {
    let mut out = String::with_capacity(section.len());
    let mut chars = section.chars().peekable();
    let mut dangling = false;

    while let Some(c) = chars.next() {
        if c != '&' {
            out.push(c);
            continue;
        }
        let Some(code) = chars.next() else {
            dangling = true;
            break;
        };
        match code {
            '&' => out.push('&'),
            'P' => out.push_str(&fields.page.to_string()),
            'N' => out.push_str(&fields.pages.to_string()),
            'A' => out.push_str(fields.sheet_name),
            'F' => out.push_str(fields.title.unwrap_or_default()),
            'D' => {
                if let Some(ts) = fields.timestamp {
                    out.push_str(&format_date(&ts, fields.date_format));
                }
            }
            'T' => {
                if let Some(ts) = fields.timestamp {
                    out.push_str(&ts.format(TIME_FORMAT).to_string());
                }
            }
            // Font name and style: &"Arial,Bold"
            '"' => {
                for c in chars.by_ref() {
                    if c == '"' {
                        break;
                    }
                }
            }
            // Font color: &KRRGGBB
            'K' => {
                for _ in 0..6 {
                    if chars.next_if(|c| c.is_ascii_alphanumeric()).is_none() {
                        break;
                    }
                }
            }
            // Font size: &12
            d if d.is_ascii_digit() => while chars.next_if(|c| c.is_ascii_digit()).is_some() {},
            // Bold, italic, underline, strike, double underline,
            // super/subscript, outline, shadow; picture and path codes
            'B' | 'I' | 'U' | 'S' | 'E' | 'X' | 'Y' | 'O' | 'H' | 'G' | 'Z' => {}
            other => out.push(other),
        }
    }
    (out, dangling)
}
