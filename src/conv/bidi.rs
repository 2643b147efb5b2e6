//! Bidirectional text layout for Hebrew and Arabic code pages.
//!
//! Host data in a visual string type is stored in display order; Rust
//! strings hold logical order. The transform here reverses each run of
//! right-to-left text (and the whole string for RTL-base string types).
//! It is its own inverse, so visual -> logical -> visual is lossless.

use crate::error::{Error, Result};

/// CDRA bidi string type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BidiStringType {
    /// Use the string type the table was built with.
    #[default]
    Default,
    /// Visual, left-to-right.
    St4,
    /// Implicit, left-to-right.
    St5,
    /// Implicit, right-to-left.
    St6,
    /// Visual contextual, left-to-right.
    St7,
    /// Visual, right-to-left.
    St8,
    /// Visual, right-to-left, shaped.
    St9,
    /// Implicit contextual, left-to-right.
    St10,
    /// Implicit contextual, right-to-left.
    St11,
}

impl BidiStringType {
    /// Map a CDRA string type code.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Default),
            4 => Ok(Self::St4),
            5 => Ok(Self::St5),
            6 => Ok(Self::St6),
            7 => Ok(Self::St7),
            8 => Ok(Self::St8),
            9 => Ok(Self::St9),
            10 => Ok(Self::St10),
            11 => Ok(Self::St11),
            _ => Err(Error::InvalidProperty {
                name: "bidi string type".to_string(),
                value: code.to_string(),
            }),
        }
    }

    /// CDRA code for this string type.
    pub fn code(self) -> u8 {
        match self {
            Self::Default => 0,
            Self::St4 => 4,
            Self::St5 => 5,
            Self::St6 => 6,
            Self::St7 => 7,
            Self::St8 => 8,
            Self::St9 => 9,
            Self::St10 => 10,
            Self::St11 => 11,
        }
    }

    /// Whether data of this type is stored in display order.
    pub fn is_visual(self) -> bool {
        matches!(self, Self::St4 | Self::St7 | Self::St8 | Self::St9)
    }

    /// Whether the paragraph direction is right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::St6 | Self::St8 | Self::St9 | Self::St11)
    }
}

/// Layout flags attached to a bidi code page table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidiLayoutRule {
    /// String type of data stored in this CCSID.
    pub string_type: BidiStringType,
    /// Reorder at all when converting.
    pub implicit_reordering: bool,
    /// Keep digits inside RTL runs in left-to-right order.
    pub numeric_ordering: bool,
}

impl BidiLayoutRule {
    pub fn new(string_type: BidiStringType) -> Self {
        Self {
            string_type,
            implicit_reordering: true,
            numeric_ordering: false,
        }
    }

    /// Copy of this rule with session flags applied.
    pub fn with_flags(mut self, implicit_reordering: bool, numeric_ordering: bool) -> Self {
        self.implicit_reordering = implicit_reordering;
        self.numeric_ordering = numeric_ordering;
        self
    }

    fn effective(&self, requested: BidiStringType) -> BidiStringType {
        match requested {
            BidiStringType::Default => self.string_type,
            other => other,
        }
    }

    /// Host layout to logical order.
    pub fn to_logical(&self, text: &str, requested: BidiStringType) -> String {
        let string_type = self.effective(requested);
        if !self.implicit_reordering || !string_type.is_visual() {
            return text.to_string();
        }
        let mut chars: Vec<char> = text.chars().collect();
        if string_type.is_rtl() {
            chars.reverse();
        }
        reverse_rtl_runs(&mut chars, self.numeric_ordering);
        chars.into_iter().collect()
    }

    /// Logical order to host layout.
    pub fn to_visual(&self, text: &str, requested: BidiStringType) -> String {
        let string_type = self.effective(requested);
        if !self.implicit_reordering || !string_type.is_visual() {
            return text.to_string();
        }
        let mut chars: Vec<char> = text.chars().collect();
        reverse_rtl_runs(&mut chars, self.numeric_ordering);
        if string_type.is_rtl() {
            chars.reverse();
        }
        chars.into_iter().collect()
    }
}

/// Default layout for CCSIDs that carry bidi data.
pub fn default_rule(ccsid: u32) -> Option<BidiLayoutRule> {
    match ccsid {
        916 | 1089 => Some(BidiLayoutRule::new(BidiStringType::St4)),
        _ => None,
    }
}

/// Strong right-to-left character.
pub fn is_rtl_char(ch: char) -> bool {
    let c = ch as u32;
    if (0x0660..=0x0669).contains(&c) || (0x06F0..=0x06F9).contains(&c) {
        return false;
    }
    (0x0590..=0x08FF).contains(&c) || (0xFB1D..=0xFDFF).contains(&c) || (0xFE70..=0xFEFF).contains(&c)
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit() || ('\u{0660}'..='\u{0669}').contains(&ch) || ('\u{06F0}'..='\u{06F9}').contains(&ch)
}

fn is_neutral(ch: char) -> bool {
    !ch.is_alphanumeric() && !is_rtl_char(ch)
}

/// Reverse every maximal run that starts and ends with an RTL character.
///
/// Neutrals between RTL characters join the run. With `numeric_ordering`,
/// digits join too and each digit group is flipped back afterwards.
fn reverse_rtl_runs(chars: &mut [char], numeric_ordering: bool) {
    let joins = |ch: char| is_rtl_char(ch) || is_neutral(ch) || (numeric_ordering && is_digit(ch));
    let mut i = 0;
    while i < chars.len() {
        if !is_rtl_char(chars[i]) {
            i += 1;
            continue;
        }
        let start = i;
        let mut end = i;
        let mut j = i + 1;
        while j < chars.len() && joins(chars[j]) {
            if is_rtl_char(chars[j]) {
                end = j;
            }
            j += 1;
        }
        let run = &mut chars[start..=end];
        run.reverse();
        if numeric_ordering {
            let mut k = 0;
            while k < run.len() {
                if is_digit(run[k]) {
                    let digit_start = k;
                    while k < run.len() && is_digit(run[k]) {
                        k += 1;
                    }
                    run[digit_start..k].reverse();
                } else {
                    k += 1;
                }
            }
        }
        i = end + 1;
    }
}
