//! Setting field values from loosely typed input.
//!
//! Each type family accepts a fixed set of [`SqlValue`] kinds:
//!
//! | Family | Accepts |
//! |--------|---------|
//! | Text | String, Clob, Int, Double, Decimal, Boolean, Date, Time, Timestamp |
//! | Binary | Bytes, Blob, String (hex digits) |
//! | Decimal, Integer, Float | String, Int, Double, Decimal, Boolean |
//! | Date | String, Date, Timestamp |
//! | Time | String, Time, Timestamp |
//! | Timestamp | String, Timestamp, Date |
//! | Locator | Locator; Blob/Bytes (BLOB) or Clob/String (CLOB, DBCLOB) staged |
//!
//! DATALINK only takes String or Clob. Everything else is
//! `Error::DataTypeMismatch`, and the held value is left untouched.

use bigdecimal::num_traits::ToPrimitive;
use bigdecimal::BigDecimal;

use super::lob::{LobData, LobLocator};
use super::sql_data::{Datum, SqlData};
use super::sql_type::{SqlType, TypeFamily};
use super::value::SqlValue;
use crate::error::{Error, Result};
use crate::protocol::decode::{
    decimal_from_f64, format_date, format_decimal, format_time, format_timestamp, parse_date,
    parse_decimal, parse_time, parse_timestamp, truncate_precision, truncate_scale,
};

impl SqlData {
    /// Set the value.
    ///
    /// `scale`, when given, truncates a numeric input to that many fraction
    /// digits before it is fitted to the field. Values longer than the
    /// field are cut and the number of lost characters, bytes, or digits is
    /// available from [`SqlData::truncated`].
    pub fn set(&mut self, value: SqlValue, scale: Option<u32>) -> Result<()> {
        if value.is_null() {
            self.set_null();
            return Ok(());
        }
        let (datum, dropped) = match self.sql_type.family() {
            TypeFamily::Text => self.coerce_text(value)?,
            TypeFamily::Binary => self.coerce_binary(value)?,
            TypeFamily::Decimal => self.coerce_decimal(value, scale)?,
            TypeFamily::Integer => self.coerce_integer(value, scale)?,
            TypeFamily::Float => (self.coerce_float(value)?, 0),
            TypeFamily::Date => (self.coerce_date(value)?, 0),
            TypeFamily::Time => (self.coerce_time(value)?, 0),
            TypeFamily::Timestamp => (self.coerce_timestamp(value)?, 0),
            TypeFamily::Locator => self.coerce_locator(value)?,
        };
        self.datum = datum;
        self.record_truncation(dropped);
        Ok(())
    }

    fn reject(&self, value: &SqlValue) -> Error {
        Error::mismatch(format!("cannot set {} on {} field", value.kind(), self.sql_type))
    }

    fn coerce_text(&self, value: SqlValue) -> Result<(Datum, usize)> {
        let text = match value {
            SqlValue::String(s) | SqlValue::Clob(s) => s,
            other if self.sql_type == SqlType::Datalink => return Err(self.reject(&other)),
            SqlValue::Int(v) => v.to_string(),
            SqlValue::Double(v) => v.to_string(),
            SqlValue::Decimal(v) => format_decimal(&v),
            SqlValue::Boolean(v) => v.to_string(),
            SqlValue::Date(d) => format_date(&d),
            SqlValue::Time(t) => format_time(&t),
            SqlValue::Timestamp(ts) => format_timestamp(&ts),
            other => return Err(self.reject(&other)),
        };
        // Capacity is in encoded bytes; UTF-8 and UTF-16 characters vary
        let capacity = self.data_capacity();
        let mut used = 0;
        let mut cut = text.len();
        for (at, c) in text.char_indices() {
            used += self.encoded_len(c);
            if used > capacity {
                cut = at;
                break;
            }
        }
        if cut == text.len() {
            return Ok((Datum::Text(text), 0));
        }
        let dropped = text[cut..].chars().count();
        let mut kept = text;
        kept.truncate(cut);
        Ok((Datum::Text(kept), dropped))
    }

    fn coerce_binary(&self, value: SqlValue) -> Result<(Datum, usize)> {
        let mut bytes = match value {
            SqlValue::Bytes(b) | SqlValue::Blob(b) => b,
            SqlValue::String(s) => parse_hex(&s).ok_or_else(|| {
                Error::mismatch(format!("{:?} is not hexadecimal", s))
            })?,
            other => return Err(self.reject(&other)),
        };
        let capacity = self.data_capacity();
        let dropped = bytes.len().saturating_sub(capacity);
        bytes.truncate(capacity);
        Ok((Datum::Bytes(bytes), dropped))
    }

    fn numeric_input(&self, value: SqlValue) -> Result<BigDecimal> {
        match value {
            SqlValue::String(s) => parse_decimal(&s),
            SqlValue::Int(v) => Ok(BigDecimal::from(v)),
            SqlValue::Double(v) => decimal_from_f64(v),
            SqlValue::Decimal(v) => Ok(v),
            SqlValue::Boolean(v) => Ok(BigDecimal::from(u8::from(v))),
            other => Err(self.reject(&other)),
        }
    }

    fn coerce_decimal(&self, value: SqlValue, scale: Option<u32>) -> Result<(Datum, usize)> {
        let mut v = self.numeric_input(value)?;
        if let Some(scale) = scale {
            v = truncate_scale(v, scale).0;
        }
        let (v, fraction_dropped) = truncate_scale(v, self.shape.scale);
        let (v, high_dropped) = truncate_precision(v, self.shape.precision);
        Ok((Datum::Decimal(v), fraction_dropped + high_dropped))
    }

    fn coerce_integer(&self, value: SqlValue, scale: Option<u32>) -> Result<(Datum, usize)> {
        let mut v = self.numeric_input(value)?;
        if let Some(scale) = scale {
            v = truncate_scale(v, scale).0;
        }
        let (v, dropped) = truncate_scale(v, self.shape.scale);
        let (mantissa, _) = v.as_bigint_and_exponent();
        let (min, max) = match self.sql_type {
            SqlType::SmallInt => (i64::from(i16::MIN), i64::from(i16::MAX)),
            SqlType::Integer => (i64::from(i32::MIN), i64::from(i32::MAX)),
            _ => (i64::MIN, i64::MAX),
        };
        match i64::try_from(&mantissa) {
            Ok(raw) if (min..=max).contains(&raw) => Ok((Datum::Int(raw), dropped)),
            _ => Err(Error::out_of_range(format!(
                "{} does not fit {}",
                format_decimal(&v),
                self.sql_type
            ))),
        }
    }

    fn coerce_float(&self, value: SqlValue) -> Result<Datum> {
        let v = match value {
            SqlValue::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::mismatch(format!("not a number: {:?}", s)))?,
            SqlValue::Int(v) => v as f64,
            SqlValue::Double(v) => v,
            SqlValue::Decimal(v) => v.to_f64().ok_or_else(|| {
                Error::out_of_range(format!("{} has no double value", format_decimal(&v)))
            })?,
            SqlValue::Boolean(v) => f64::from(u8::from(v)),
            other => return Err(self.reject(&other)),
        };
        if self.sql_type == SqlType::Real {
            if v.is_finite() && v.abs() > f64::from(f32::MAX) {
                return Err(Error::out_of_range(format!("{} does not fit REAL", v)));
            }
            return Ok(Datum::Float(f64::from(v as f32)));
        }
        Ok(Datum::Float(v))
    }

    fn coerce_date(&self, value: SqlValue) -> Result<Datum> {
        let date = match value {
            SqlValue::String(s) => match parse_date(&s) {
                Ok(date) => date,
                Err(err) => parse_timestamp(&s).map(|ts| ts.date()).map_err(|_| err)?,
            },
            SqlValue::Date(d) => d,
            SqlValue::Timestamp(ts) => ts.date(),
            other => return Err(self.reject(&other)),
        };
        Ok(Datum::Date(date))
    }

    fn coerce_time(&self, value: SqlValue) -> Result<Datum> {
        let time = match value {
            SqlValue::String(s) => match parse_time(&s) {
                Ok(time) => time,
                Err(err) => parse_timestamp(&s).map(|ts| ts.time()).map_err(|_| err)?,
            },
            SqlValue::Time(t) => t,
            SqlValue::Timestamp(ts) => ts.time(),
            other => return Err(self.reject(&other)),
        };
        Ok(Datum::Time(time))
    }

    fn coerce_timestamp(&self, value: SqlValue) -> Result<Datum> {
        let ts = match value {
            SqlValue::String(s) => parse_timestamp(&s)?,
            SqlValue::Timestamp(ts) => ts,
            SqlValue::Date(d) => d
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| Error::out_of_range(format!("{} has no midnight", d)))?,
            other => return Err(self.reject(&other)),
        };
        Ok(Datum::Timestamp(ts))
    }

    fn coerce_locator(&self, value: SqlValue) -> Result<(Datum, usize)> {
        let is_blob = self.sql_type == SqlType::BlobLocator;
        let data = match value {
            SqlValue::Locator(locator) => return Ok((Datum::Locator(locator), 0)),
            SqlValue::Bytes(b) | SqlValue::Blob(b) if is_blob => LobData::Bytes(b),
            SqlValue::String(s) | SqlValue::Clob(s) if !is_blob => LobData::Text(s),
            other => return Err(self.reject(&other)),
        };
        let mut locator = match &self.datum {
            Datum::Locator(current) => current.clone(),
            _ => LobLocator::new(self.shape.lob_locator, self.shape.lob_max_size),
        };
        let dropped = locator.stage(data);
        Ok((Datum::Locator(locator), dropped))
    }
}

fn parse_hex(text: &str) -> Option<Vec<u8>> {
    let text = text.trim();
    if text.len() % 2 != 0 {
        return None;
    }
    text.as_bytes()
        .chunks(2)
        .map(|pair| {
            let hi = char::from(pair[0]).to_digit(16)?;
            let lo = char::from(pair[1]).to_digit(16)?;
            Some((hi * 16 + lo) as u8)
        })
        .collect()
}
