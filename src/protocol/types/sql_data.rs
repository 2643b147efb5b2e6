//! Per-field value holder and its raw byte codec.
//!
//! One [`SqlData`] exists per field of a row shape and is reused for every
//! row: [`SqlData::convert_from_raw_bytes`] replaces the held value from a
//! row buffer, [`SqlData::convert_to_raw_bytes`] writes it back out. The
//! value setters live in `coerce.rs` and the typed getters in `getters.rs`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use bigdecimal::BigDecimal;
use tracing::trace;

use super::lob::LobLocator;
use super::metadata::FieldShape;
use super::sql_type::{SqlType, TypeFamily};
use crate::config::ConversionSettings;
use crate::conv::ConvTable;
use crate::error::{Error, Result};
use crate::protocol::buffer::{self, PrefixWidth};
use crate::protocol::constants::{
    CCSID_NO_CONVERSION, CCSID_UCS2, CCSID_UTF16, CCSID_UTF8, DEFAULT_PAD_BYTE, NO_LOCATOR,
    ROWID_MAX_LENGTH,
};
use crate::protocol::decode::{
    decode_packed, decode_zoned, encode_packed, encode_zoned, format_date, format_time,
    format_timestamp, packed_length, parse_date, parse_time, parse_timestamp, DATE_LENGTH,
    TIMESTAMP_LENGTH, TIME_LENGTH,
};

/// Value currently held by a field.
///
/// The variant is fixed by the field's [`TypeFamily`]: text types hold
/// `Text`, integer types hold the unscaled `Int`, and so on.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Datum {
    Null,
    Text(String),
    Bytes(Vec<u8>),
    /// Unscaled integer; the field scale places the decimal point.
    Int(i64),
    Float(f64),
    Decimal(BigDecimal),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    Locator(LobLocator),
}

/// Value holder for one field.
#[derive(Debug, Clone)]
pub struct SqlData {
    pub(super) sql_type: SqlType,
    pub(super) shape: FieldShape,
    pub(super) settings: ConversionSettings,
    pub(super) datum: Datum,
    pub(super) truncated: usize,
}

impl SqlData {
    /// Create the holder for a type. The value starts out NULL, except for
    /// locator parameters described with a handle.
    pub fn new(sql_type: SqlType, shape: FieldShape, settings: &ConversionSettings) -> Self {
        let datum = if sql_type.family() == TypeFamily::Locator && shape.lob_locator != NO_LOCATOR
        {
            Datum::Locator(LobLocator::new(shape.lob_locator, shape.lob_max_size))
        } else {
            Datum::Null
        };
        Self {
            sql_type,
            shape,
            settings: settings.clone(),
            datum,
            truncated: 0,
        }
    }

    /// Create the holder for a JDBC type code.
    pub fn for_jdbc(
        jdbc_type: i32,
        shape: FieldShape,
        settings: &ConversionSettings,
    ) -> Result<Self> {
        let sql_type = SqlType::from_jdbc(jdbc_type, shape.ccsid, settings)?;
        Ok(Self::new(sql_type, shape, settings))
    }

    /// Create the holder for a native type id.
    pub fn for_native(
        native_type: u16,
        shape: FieldShape,
        settings: &ConversionSettings,
    ) -> Result<Self> {
        let sql_type = SqlType::from_native(native_type, shape.length, shape.ccsid, settings)?;
        Ok(Self::new(sql_type, shape, settings))
    }

    /// Create the holder for a native type name.
    pub fn for_type_name(
        type_name: &str,
        shape: FieldShape,
        settings: &ConversionSettings,
    ) -> Result<Self> {
        let sql_type = SqlType::from_type_name(type_name, shape.ccsid, settings)?;
        Ok(Self::new(sql_type, shape, settings))
    }

    /// Wire type.
    pub fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    /// Byte length on the wire, including any prefix.
    pub fn length(&self) -> usize {
        self.shape.length
    }

    /// Declared CCSID.
    pub fn ccsid(&self) -> u32 {
        self.shape.ccsid
    }

    /// CCSID of the table this field converts text with.
    ///
    /// Types without text use the pass-through table. A 65535 or missing
    /// CCSID on a text type falls back to the session default (or UCS-2 for
    /// graphic types).
    pub fn table_ccsid(&self) -> u32 {
        if !self.sql_type.needs_conversion() {
            return CCSID_NO_CONVERSION;
        }
        match self.shape.ccsid {
            0 | CCSID_NO_CONVERSION if self.sql_type.is_graphic() => CCSID_UCS2,
            0 | CCSID_NO_CONVERSION => self.settings.default_ccsid,
            ccsid => ccsid,
        }
    }

    /// Whether the held value is NULL.
    pub fn is_null(&self) -> bool {
        self.datum == Datum::Null
    }

    /// Set the value to NULL.
    pub fn set_null(&mut self) {
        self.datum = Datum::Null;
        self.truncated = 0;
    }

    /// Characters or bytes lost by the most recent read or set.
    pub fn truncated(&self) -> usize {
        self.truncated
    }

    /// Locator bookkeeping, for locator fields holding a handle.
    pub fn locator(&self) -> Option<&LobLocator> {
        match &self.datum {
            Datum::Locator(loc) => Some(loc),
            _ => None,
        }
    }

    /// Mutable locator bookkeeping, for the streaming layer.
    pub fn locator_mut(&mut self) -> Option<&mut LobLocator> {
        match &mut self.datum {
            Datum::Locator(loc) => Some(loc),
            _ => None,
        }
    }

    /// Bytes per character of the field's text.
    pub(super) fn char_width(&self) -> usize {
        if self.sql_type.is_graphic() {
            return 2;
        }
        match self.table_ccsid() {
            CCSID_UCS2 | 61952 | CCSID_UTF16 => 2,
            _ => 1,
        }
    }

    /// Bytes one character takes in the field's encoding.
    pub(super) fn encoded_len(&self, c: char) -> usize {
        match self.table_ccsid() {
            CCSID_UTF8 => c.len_utf8(),
            CCSID_UTF16 => c.len_utf16() * 2,
            _ => self.char_width(),
        }
    }

    /// Bytes available for the value, excluding any length prefix.
    pub(super) fn data_capacity(&self) -> usize {
        match self.sql_type {
            SqlType::Decimal => packed_length(self.shape.precision),
            SqlType::Numeric => self.shape.precision as usize,
            SqlType::SmallInt => 2,
            SqlType::Integer
            | SqlType::Real
            | SqlType::ClobLocator
            | SqlType::DbClobLocator
            | SqlType::BlobLocator => 4,
            SqlType::BigInt | SqlType::Double => 8,
            SqlType::RowId => {
                let prefix = PrefixWidth::Short.size();
                self.shape.length.saturating_sub(prefix).min(ROWID_MAX_LENGTH)
            }
            _ => {
                let prefix = self.sql_type.prefix().map_or(0, PrefixWidth::size);
                self.shape.length.saturating_sub(prefix)
            }
        }
    }

    /// Characters (text) or bytes (binary) the field can hold.
    pub(super) fn char_capacity(&self) -> usize {
        match self.sql_type.family() {
            TypeFamily::Text => self.data_capacity() / self.char_width(),
            TypeFamily::Locator => self.shape.lob_max_size,
            _ => self.data_capacity(),
        }
    }

    /// Record a truncation from the latest read or set.
    pub(super) fn record_truncation(&mut self, dropped: usize) {
        if dropped > 0 {
            trace!(sql_type = %self.sql_type, dropped, "value truncated");
        }
        self.truncated = dropped;
    }

    /// Maximum number of characters shown for the value.
    pub fn display_size(&self) -> usize {
        match self.sql_type {
            SqlType::Decimal | SqlType::Numeric => self.shape.precision as usize + 2,
            SqlType::SmallInt => 6 + usize::from(self.shape.scale > 0),
            SqlType::Integer => 11 + usize::from(self.shape.scale > 0),
            SqlType::BigInt => 20 + usize::from(self.shape.scale > 0),
            SqlType::Real => 13,
            SqlType::Double => 22,
            SqlType::Date | SqlType::Time | SqlType::Timestamp => self.precision(),
            _ => match self.sql_type.family() {
                TypeFamily::Binary => self.char_capacity() * 2,
                _ => self.char_capacity(),
            },
        }
    }

    /// SQL precision: digits for numbers, characters or bytes otherwise.
    pub fn precision(&self) -> usize {
        match self.sql_type {
            SqlType::Decimal | SqlType::Numeric => self.shape.precision as usize,
            SqlType::SmallInt => 5,
            SqlType::Integer => 10,
            SqlType::BigInt => 19,
            SqlType::Real => 7,
            SqlType::Double => 15,
            SqlType::Date => DATE_LENGTH,
            SqlType::Time => TIME_LENGTH,
            SqlType::Timestamp => TIMESTAMP_LENGTH,
            _ => self.char_capacity(),
        }
    }

    /// SQL scale.
    pub fn scale(&self) -> u32 {
        match self.sql_type.family() {
            TypeFamily::Decimal | TypeFamily::Integer => self.shape.scale,
            TypeFamily::Timestamp => 6,
            _ => 0,
        }
    }

    /// Decode this field's value from `buf` at `offset`.
    ///
    /// Text goes through `table`; the truncation count is reset (or set,
    /// when the session's maximum field size cuts the value).
    pub fn convert_from_raw_bytes(
        &mut self,
        buf: &[u8],
        offset: usize,
        table: &ConvTable,
    ) -> Result<()> {
        self.truncated = 0;
        let datum = match self.sql_type.family() {
            TypeFamily::Text => {
                let raw = self.read_payload(buf, offset)?;
                let text = table.decode(raw, self.settings.bidi_string_type)?;
                Datum::Text(self.limit_text(text))
            }
            TypeFamily::Binary => {
                let raw = self.read_payload(buf, offset)?.to_vec();
                Datum::Bytes(self.limit_bytes(raw))
            }
            TypeFamily::Decimal => {
                let precision = self.shape.precision;
                let value = if self.sql_type == SqlType::Numeric {
                    decode_zoned(buffer::slice(buf, offset, precision as usize)?, self.shape.scale)?
                } else {
                    let raw = buffer::slice(buf, offset, packed_length(precision))?;
                    decode_packed(raw, self.shape.scale)?
                };
                Datum::Decimal(value)
            }
            TypeFamily::Integer => Datum::Int(match self.sql_type {
                SqlType::SmallInt => i64::from(buffer::read_i16(buf, offset)?),
                SqlType::Integer => i64::from(buffer::read_i32(buf, offset)?),
                _ => buffer::read_i64(buf, offset)?,
            }),
            TypeFamily::Float => Datum::Float(match self.sql_type {
                SqlType::Real => f64::from(buffer::read_f32(buf, offset)?),
                _ => buffer::read_f64(buf, offset)?,
            }),
            TypeFamily::Date => {
                let text = self.read_fixed_text(buf, offset, table)?;
                Datum::Date(parse_date(&text).map_err(|_| bad_temporal("DATE", &text))?)
            }
            TypeFamily::Time => {
                let text = self.read_fixed_text(buf, offset, table)?;
                Datum::Time(parse_time(&text).map_err(|_| bad_temporal("TIME", &text))?)
            }
            TypeFamily::Timestamp => {
                let text = self.read_fixed_text(buf, offset, table)?;
                Datum::Timestamp(
                    parse_timestamp(&text).map_err(|_| bad_temporal("TIMESTAMP", &text))?,
                )
            }
            TypeFamily::Locator => {
                let handle = buffer::read_u32(buf, offset)?;
                Datum::Locator(LobLocator::new(handle, self.shape.lob_max_size))
            }
        };
        self.datum = datum;
        Ok(())
    }

    /// Encode the held value into `buf` at `offset`.
    ///
    /// Variable-length types write their length prefix first. Fixed-width
    /// text is padded with the table's space; fixed-width binary with zeros.
    /// A NULL value writes zeros over the whole field.
    pub fn convert_to_raw_bytes(&self, buf: &mut [u8], offset: usize, table: &ConvTable) -> Result<()> {
        let scale = self.shape.scale;
        match &self.datum {
            Datum::Null => {
                buffer::slice_mut(buf, offset, self.shape.length)?.fill(0);
                Ok(())
            }
            Datum::Text(text) => self.write_text(buf, offset, table, text),
            Datum::Date(date) => self.write_text(buf, offset, table, &format_date(date)),
            Datum::Time(time) => self.write_text(buf, offset, table, &format_time(time)),
            Datum::Timestamp(ts) => self.write_text(buf, offset, table, &format_timestamp(ts)),
            Datum::Bytes(bytes) => {
                let pad = match self.sql_type {
                    SqlType::CharForBitData => DEFAULT_PAD_BYTE,
                    _ => 0x00,
                };
                self.write_payload(buf, offset, bytes, &[pad])
            }
            Datum::Decimal(value) => {
                let precision = self.shape.precision;
                if self.sql_type == SqlType::Numeric {
                    let out = buffer::slice_mut(buf, offset, precision as usize)?;
                    encode_zoned(value, precision, scale, out)
                } else {
                    let out = buffer::slice_mut(buf, offset, packed_length(precision))?;
                    encode_packed(value, precision, scale, out)
                }
            }
            Datum::Int(value) => match self.sql_type {
                SqlType::SmallInt => buffer::write_i16(buf, offset, narrow(*value)?),
                SqlType::Integer => buffer::write_i32(buf, offset, narrow(*value)?),
                _ => buffer::write_i64(buf, offset, *value),
            },
            Datum::Float(value) => match self.sql_type {
                SqlType::Real => buffer::write_f32(buf, offset, *value as f32),
                _ => buffer::write_f64(buf, offset, *value),
            },
            Datum::Locator(locator) => buffer::write_u32(buf, offset, locator.handle()),
        }
    }

    /// Data bytes of the field, after any length prefix.
    fn read_payload<'a>(&self, buf: &'a [u8], offset: usize) -> Result<&'a [u8]> {
        let Some(width) = self.sql_type.prefix() else {
            return buffer::slice(buf, offset, self.data_capacity());
        };
        let count = buffer::read_length_prefix(buf, offset, width)?;
        let byte_length = if self.sql_type.prefix_counts_chars() {
            count * 2
        } else {
            count
        };
        let capacity = self.data_capacity();
        if capacity > 0 && byte_length > capacity {
            return Err(Error::protocol(format!(
                "{} length {} exceeds declared {}",
                self.sql_type, byte_length, capacity
            )));
        }
        buffer::slice(buf, offset + width.size(), byte_length)
    }

    fn read_fixed_text(&self, buf: &[u8], offset: usize, table: &ConvTable) -> Result<String> {
        let raw = buffer::slice(buf, offset, self.shape.length)?;
        let text = table.decode(raw, self.settings.bidi_string_type)?;
        Ok(text.trim_end_matches(|c: char| c == '\0' || c == ' ').to_string())
    }

    fn limit_text(&mut self, text: String) -> String {
        let max = self.settings.max_field_size;
        if max == 0 || self.sql_type == SqlType::Datalink {
            return text;
        }
        let count = text.chars().count();
        if count <= max {
            return text;
        }
        self.record_truncation(count - max);
        text.chars().take(max).collect()
    }

    fn limit_bytes(&mut self, mut bytes: Vec<u8>) -> Vec<u8> {
        let max = self.settings.max_field_size;
        if max > 0 && bytes.len() > max {
            self.record_truncation(bytes.len() - max);
            bytes.truncate(max);
        }
        bytes
    }

    fn write_text(&self, buf: &mut [u8], offset: usize, table: &ConvTable, text: &str) -> Result<()> {
        let mut encoded = table.encode(text, self.settings.bidi_string_type);
        let capacity = self.data_capacity();
        if encoded.len() > capacity {
            let cut = char_boundary(&encoded, capacity, table);
            encoded.truncate(cut);
        }
        let pad = table.pad_bytes();
        self.write_payload(buf, offset, &encoded, &pad)
    }

    /// Write prefix (if any) and data; fill the rest of the field.
    ///
    /// Variable-length fields fill with zeros, fixed ones with `pad`.
    fn write_payload(&self, buf: &mut [u8], offset: usize, data: &[u8], pad: &[u8]) -> Result<()> {
        let capacity = self.data_capacity();
        let data = &data[..data.len().min(capacity)];
        match self.sql_type.prefix() {
            Some(width) => {
                let count = if self.sql_type.prefix_counts_chars() {
                    data.len().div_ceil(2)
                } else {
                    data.len()
                };
                buffer::write_length_prefix(buf, offset, width, count)?;
                let field = buffer::slice_mut(buf, offset + width.size(), capacity)?;
                field[..data.len()].copy_from_slice(data);
                field[data.len()..].fill(0);
            }
            None => {
                let field = buffer::slice_mut(buf, offset, capacity)?;
                field[..data.len()].copy_from_slice(data);
                for (slot, &byte) in field[data.len()..].iter_mut().zip(pad.iter().cycle()) {
                    *slot = byte;
                }
            }
        }
        Ok(())
    }
}

fn bad_temporal(kind: &str, text: &str) -> Error {
    Error::protocol(format!("invalid {} value {:?}", kind, text))
}

fn narrow<T: TryFrom<i64>>(value: i64) -> Result<T> {
    T::try_from(value).map_err(|_| Error::out_of_range(format!("{} does not fit the field", value)))
}

/// Largest cut at or below `limit` that does not split a character.
fn char_boundary(encoded: &[u8], limit: usize, table: &ConvTable) -> usize {
    match table.char_width() {
        Some(width) => limit - limit % width,
        None if table.ccsid() == CCSID_UTF8 => {
            let mut cut = limit;
            while cut > 0 && encoded.get(cut).is_some_and(|b| b & 0xC0 == 0x80) {
                cut -= 1;
            }
            cut
        }
        None => limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::*;
    use std::str::FromStr;

    fn settings() -> ConversionSettings {
        ConversionSettings::default()
    }

    fn cp37() -> ConvTable {
        ConvTable::new(37).unwrap()
    }

    #[test]
    fn test_char_read_and_pad_on_write() {
        let mut data =
            SqlData::for_native(NATIVE_CHAR, FieldShape::new(5).with_ccsid(37), &settings()).unwrap();
        data.convert_from_raw_bytes(&[0xC1, 0xC2, 0x40, 0x40, 0x40], 0, &cp37()).unwrap();
        assert_eq!(data.datum, Datum::Text("AB   ".to_string()));

        data.datum = Datum::Text("Z".to_string());
        let mut out = [0u8; 5];
        data.convert_to_raw_bytes(&mut out, 0, &cp37()).unwrap();
        assert_eq!(out, [0xE9, 0x40, 0x40, 0x40, 0x40]);
    }

    #[test]
    fn test_varchar_prefix_and_offset() {
        let mut data =
            SqlData::for_native(NATIVE_VARCHAR, FieldShape::new(12).with_ccsid(37), &settings())
                .unwrap();
        let buf = [0xFF, 0x00, 0x03, 0xC1, 0xC2, 0xC3, 0x00];
        data.convert_from_raw_bytes(&buf, 1, &cp37()).unwrap();
        assert_eq!(data.datum, Datum::Text("ABC".to_string()));

        let mut out = [0xEEu8; 12];
        data.convert_to_raw_bytes(&mut out, 0, &cp37()).unwrap();
        assert_eq!(&out[..5], &[0x00, 0x03, 0xC1, 0xC2, 0xC3]);
        assert!(out[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_vargraphic_prefix_counts_characters() {
        let ucs2 = ConvTable::new(13488).unwrap();
        let mut data = SqlData::for_native(
            NATIVE_VARGRAPHIC,
            FieldShape::new(22).with_ccsid(13488),
            &settings(),
        )
        .unwrap();
        let buf = [0x00, 0x02, 0x00, 0x41, 0x4E, 0x00];
        data.convert_from_raw_bytes(&buf, 0, &ucs2).unwrap();
        assert_eq!(data.datum, Datum::Text("A\u{4E00}".to_string()));

        let mut out = [0u8; 22];
        data.convert_to_raw_bytes(&mut out, 0, &ucs2).unwrap();
        assert_eq!(&out[..6], &buf);
    }

    #[test]
    fn test_varchar_prefix_too_long_is_protocol_error() {
        let mut data =
            SqlData::for_native(NATIVE_VARCHAR, FieldShape::new(4).with_ccsid(37), &settings())
                .unwrap();
        let buf = [0x00, 0x09, 0xC1, 0xC2];
        assert!(matches!(
            data.convert_from_raw_bytes(&buf, 0, &cp37()),
            Err(Error::Protocol { .. })
        ));
    }

    #[test]
    fn test_numeric_types_bit_for_bit() {
        let table = ConvTable::new(CCSID_NO_CONVERSION).unwrap();
        let cases: [(u16, FieldShape, &[u8]); 6] = [
            (NATIVE_SMALLINT, FieldShape::new(2), &[0xFF, 0x85]),
            (NATIVE_INTEGER, FieldShape::new(4).with_precision(9, 2), &[0x80, 0x00, 0x00, 0x01]),
            (NATIVE_BIGINT, FieldShape::new(8), &[0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]),
            (NATIVE_FLOAT, FieldShape::new(4), &[0x7F, 0x80, 0x00, 0x00]),
            (NATIVE_DECIMAL, FieldShape::new(3).with_precision(5, 2), &[0x12, 0x34, 0x5D]),
            (NATIVE_NUMERIC, FieldShape::new(3).with_precision(3, 1), &[0xF1, 0xF2, 0xD3]),
        ];
        for (native_type, shape, bytes) in cases {
            let mut data = SqlData::for_native(native_type, shape, &settings()).unwrap();
            data.convert_from_raw_bytes(bytes, 0, &table).unwrap();
            let mut out = vec![0u8; bytes.len()];
            data.convert_to_raw_bytes(&mut out, 0, &table).unwrap();
            assert_eq!(out, bytes, "native type {}", native_type);
        }
    }

    #[test]
    fn test_packed_decimal_value() {
        let table = ConvTable::new(CCSID_NO_CONVERSION).unwrap();
        let mut data = SqlData::for_native(
            NATIVE_DECIMAL,
            FieldShape::new(3).with_precision(5, 2),
            &settings(),
        )
        .unwrap();
        data.convert_from_raw_bytes(&[0x12, 0x34, 0x5C], 0, &table).unwrap();
        assert_eq!(data.datum, Datum::Decimal(BigDecimal::from_str("123.45").unwrap()));
    }

    #[test]
    fn test_temporal_text() {
        let mut data =
            SqlData::for_native(NATIVE_DATE, FieldShape::new(10).with_ccsid(37), &settings())
                .unwrap();
        let bytes = cp37().encode("2024-02-29", crate::conv::BidiStringType::Default);
        data.convert_from_raw_bytes(&bytes, 0, &cp37()).unwrap();
        assert_eq!(data.datum, Datum::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));

        let garbage = [0x40u8; 10];
        assert!(matches!(
            data.convert_from_raw_bytes(&garbage, 0, &cp37()),
            Err(Error::Protocol { .. })
        ));
    }

    #[test]
    fn test_max_field_size_truncates_reads() {
        let settings = settings().with_max_field_size(2);
        let mut data =
            SqlData::for_native(NATIVE_VARCHAR, FieldShape::new(12).with_ccsid(37), &settings)
                .unwrap();
        data.convert_from_raw_bytes(&[0x00, 0x03, 0xC1, 0xC2, 0xC3], 0, &cp37()).unwrap();
        assert_eq!(data.datum, Datum::Text("AB".to_string()));
        assert_eq!(data.truncated(), 1);
    }

    #[test]
    fn test_locator_handle() {
        let table = ConvTable::new(CCSID_NO_CONVERSION).unwrap();
        let mut data = SqlData::for_native(
            NATIVE_BLOB_LOCATOR,
            FieldShape::new(4).with_lob(NO_LOCATOR, 1 << 20),
            &settings(),
        )
        .unwrap();
        assert!(data.is_null());
        data.convert_from_raw_bytes(&[0x00, 0x00, 0x01, 0x02], 0, &table).unwrap();
        let locator = data.locator().unwrap();
        assert_eq!(locator.handle(), 0x0102);
        assert_eq!(locator.max_size(), 1 << 20);
    }

    #[test]
    fn test_rowid_capacity_is_capped() {
        let table = ConvTable::new(CCSID_NO_CONVERSION).unwrap();
        let mut rowid =
            SqlData::for_native(NATIVE_ROWID, FieldShape::new(60), &settings()).unwrap();
        assert_eq!(rowid.sql_type(), SqlType::RowId);
        assert_eq!(rowid.data_capacity(), ROWID_MAX_LENGTH);

        let mut buf = vec![0u8; 60];
        buf[1] = 41;
        assert!(matches!(
            rowid.convert_from_raw_bytes(&buf, 0, &table),
            Err(Error::Protocol { .. })
        ));
        buf[1] = 40;
        rowid.convert_from_raw_bytes(&buf, 0, &table).unwrap();
        assert_eq!(rowid.datum, Datum::Bytes(vec![0; 40]));
    }

    #[test]
    fn test_table_ccsid_resolution() {
        let translate = settings().with_translate_binary(true).with_default_ccsid(500);
        let text =
            SqlData::for_native(NATIVE_CHAR, FieldShape::new(4).with_ccsid(65535), &translate)
                .unwrap();
        assert_eq!(text.sql_type(), SqlType::Char);
        assert_eq!(text.table_ccsid(), 500);

        let number = SqlData::for_native(NATIVE_INTEGER, FieldShape::new(4), &settings()).unwrap();
        assert_eq!(number.table_ccsid(), CCSID_NO_CONVERSION);
    }

    #[test]
    fn test_sizes() {
        let decimal = SqlData::for_native(
            NATIVE_DECIMAL,
            FieldShape::new(4).with_precision(7, 2),
            &settings(),
        )
        .unwrap();
        assert_eq!(decimal.precision(), 7);
        assert_eq!(decimal.scale(), 2);
        assert_eq!(decimal.display_size(), 9);

        let graphic =
            SqlData::for_native(NATIVE_GRAPHIC, FieldShape::new(10).with_ccsid(13488), &settings())
                .unwrap();
        assert_eq!(graphic.precision(), 5);

        let ts = SqlData::for_jdbc(JDBC_TIMESTAMP, FieldShape::new(26).with_ccsid(37), &settings())
            .unwrap();
        assert_eq!(ts.display_size(), 26);
        assert_eq!(ts.scale(), 6);
    }
}
