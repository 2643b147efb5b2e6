//! Character conversion between host CCSIDs and Rust strings.
//!
//! A [`ConvTable`] covers one CCSID. Single-byte tables are expanded from a
//! compressed form at construction; Unicode tables (UCS-2, UTF-16, UTF-8)
//! convert algorithmically. Bidi CCSIDs carry a [`BidiLayoutRule`] that
//! reorders text between visual and logical order.
//!
//! Tables are immutable and shared through a [`ConvTableCache`].

pub mod bidi;
mod cache;
mod tables;

pub use bidi::{BidiLayoutRule, BidiStringType};
pub use cache::ConvTableCache;

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::protocol::constants::{
    CCSID_NO_CONVERSION, CCSID_UCS2, CCSID_UTF16, CCSID_UTF8, DEFAULT_PAD_BYTE,
};

/// How bytes map to characters for a table.
#[derive(Debug, Clone)]
pub enum TableKind {
    /// One byte per character through a 256-entry map.
    SingleByte {
        to_unicode: Box<[char; 256]>,
        from_unicode: HashMap<char, u8>,
    },
    /// Two bytes per character, big-endian UCS-2. Characters outside the
    /// BMP substitute.
    Ucs2,
    /// Big-endian UTF-16 with surrogate pairs.
    Utf16,
    /// UTF-8.
    Utf8,
    /// CCSID 65535: bytes pass through as U+0000..U+00FF.
    NoConversion,
}

/// Conversion table for one CCSID.
#[derive(Debug, Clone)]
pub struct ConvTable {
    ccsid: u32,
    kind: TableKind,
    substitution: &'static [u8],
    bidi: Option<BidiLayoutRule>,
}

const EBCDIC_SUB: &[u8] = &[0x3F];
const ASCII_SUB: &[u8] = &[0x1A];
const DOUBLE_BYTE_SUB: &[u8] = &[0xFF, 0xFD];
const UTF8_SUB: &[u8] = &[0xEF, 0xBF, 0xBD];

/// Byte values tables use for "unmappable". Never valid as padding.
const SINGLE_BYTE_SUBSTITUTES: [u8; 3] = [0x3F, 0x7F, 0x1A];
const DOUBLE_BYTE_SUBSTITUTES: [[u8; 2]; 5] = [
    [0xFE, 0xFE],
    [0xFF, 0xFD],
    [0x00, 0x3F],
    [0x00, 0x7F],
    [0x00, 0x1A],
];

impl ConvTable {
    /// Build the table for a CCSID.
    ///
    /// Returns an internal `UnsupportedEncoding` error when no table ships
    /// for the CCSID.
    pub fn new(ccsid: u32) -> Result<Self> {
        let kind = match ccsid {
            CCSID_UCS2 | 61952 => TableKind::Ucs2,
            CCSID_UTF16 => TableKind::Utf16,
            CCSID_UTF8 => TableKind::Utf8,
            CCSID_NO_CONVERSION => TableKind::NoConversion,
            _ => {
                let compressed =
                    tables::compressed_table(ccsid).ok_or_else(|| Error::unsupported_encoding(ccsid))?;
                let to_unicode = Box::new(tables::expand(compressed));
                let from_unicode = to_unicode
                    .iter()
                    .enumerate()
                    .map(|(byte, &ch)| (ch, byte as u8))
                    .collect();
                TableKind::SingleByte {
                    to_unicode,
                    from_unicode,
                }
            }
        };
        let substitution = match &kind {
            TableKind::SingleByte { .. } if is_ebcdic(ccsid) => EBCDIC_SUB,
            TableKind::SingleByte { .. } | TableKind::NoConversion => ASCII_SUB,
            TableKind::Ucs2 | TableKind::Utf16 => DOUBLE_BYTE_SUB,
            TableKind::Utf8 => UTF8_SUB,
        };
        Ok(Self {
            ccsid,
            kind,
            substitution,
            bidi: bidi::default_rule(ccsid),
        })
    }

    /// CCSID this table converts.
    pub fn ccsid(&self) -> u32 {
        self.ccsid
    }

    /// Table kind.
    pub fn kind(&self) -> &TableKind {
        &self.kind
    }

    /// Bytes written for an unmappable character.
    pub fn substitution(&self) -> &[u8] {
        self.substitution
    }

    /// Bidi layout, for bidi CCSIDs.
    pub fn bidi_rule(&self) -> Option<&BidiLayoutRule> {
        self.bidi.as_ref()
    }

    /// Copy of this table with session bidi flags applied.
    pub fn with_bidi_flags(&self, implicit_reordering: bool, numeric_ordering: bool) -> Self {
        let mut table = self.clone();
        table.bidi = table
            .bidi
            .map(|rule| rule.with_flags(implicit_reordering, numeric_ordering));
        table
    }

    /// Bytes per character for fixed-width tables, `None` for UTF-8.
    pub fn char_width(&self) -> Option<usize> {
        match self.kind {
            TableKind::SingleByte { .. } | TableKind::NoConversion => Some(1),
            TableKind::Ucs2 | TableKind::Utf16 => Some(2),
            TableKind::Utf8 => None,
        }
    }

    /// Decode host bytes into a string in logical order.
    pub fn decode(&self, data: &[u8], string_type: BidiStringType) -> Result<String> {
        let text = match &self.kind {
            TableKind::SingleByte { to_unicode, .. } => {
                data.iter().map(|&b| to_unicode[b as usize]).collect()
            }
            TableKind::NoConversion => data.iter().map(|&b| char::from(b)).collect(),
            TableKind::Ucs2 | TableKind::Utf16 => {
                let units: Vec<u16> = data
                    .chunks(2)
                    .map(|pair| match pair {
                        [hi, lo] => u16::from_be_bytes([*hi, *lo]),
                        _ => 0xFFFD,
                    })
                    .collect();
                char::decode_utf16(units)
                    .map(|r| r.unwrap_or('\u{FFFD}'))
                    .collect()
            }
            TableKind::Utf8 => String::from_utf8_lossy(data).into_owned(),
        };
        Ok(match &self.bidi {
            Some(rule) => rule.to_logical(&text, string_type),
            None => text,
        })
    }

    /// Encode a string into host bytes.
    ///
    /// Unmappable characters become the table's substitution bytes.
    pub fn encode(&self, text: &str, string_type: BidiStringType) -> Vec<u8> {
        let reordered;
        let text = match &self.bidi {
            Some(rule) => {
                reordered = rule.to_visual(text, string_type);
                reordered.as_str()
            }
            None => text,
        };
        match &self.kind {
            TableKind::SingleByte { from_unicode, .. } => text
                .chars()
                .map(|ch| from_unicode.get(&ch).copied().unwrap_or(self.substitution[0]))
                .collect(),
            TableKind::NoConversion => text
                .chars()
                .map(|ch| u8::try_from(ch as u32).unwrap_or(self.substitution[0]))
                .collect(),
            TableKind::Ucs2 => {
                let mut out = Vec::with_capacity(text.len() * 2);
                for ch in text.chars() {
                    match u16::try_from(ch as u32) {
                        Ok(unit) => out.extend_from_slice(&unit.to_be_bytes()),
                        Err(_) => out.extend_from_slice(self.substitution),
                    }
                }
                out
            }
            TableKind::Utf16 => text
                .encode_utf16()
                .flat_map(|unit| unit.to_be_bytes())
                .collect(),
            TableKind::Utf8 => text.as_bytes().to_vec(),
        }
    }

    /// Bytes used to pad fixed-width character fields.
    ///
    /// Prefers the encoded space, then the ideographic space, then
    /// [`DEFAULT_PAD_BYTE`]. A candidate that encodes to a substitution
    /// code is not a real space and is skipped.
    pub fn pad_bytes(&self) -> Vec<u8> {
        let space = self.encode(" ", BidiStringType::Default);
        if is_valid_space(&space) {
            return space;
        }
        let ideographic = self.encode("\u{3000}", BidiStringType::Default);
        if is_valid_space(&ideographic) {
            return ideographic;
        }
        vec![DEFAULT_PAD_BYTE]
    }
}

fn is_valid_space(candidate: &[u8]) -> bool {
    match candidate {
        [b] => !SINGLE_BYTE_SUBSTITUTES.contains(b),
        [hi, lo] => !DOUBLE_BYTE_SUBSTITUTES.contains(&[*hi, *lo]),
        _ => false,
    }
}

fn is_ebcdic(ccsid: u32) -> bool {
    matches!(ccsid, 37 | 500 | 1047 | 1140 | 1148)
}
