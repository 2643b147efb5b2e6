//! Typed reads of a field's value.
//!
//! Every getter returns `Ok(None)` for NULL. Values that cannot be viewed
//! as the requested type give `Error::DataTypeMismatch`; numbers that do
//! not fit give `Error::OutOfRange`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use bigdecimal::num_bigint::BigInt;
use bigdecimal::num_traits::{ToPrimitive, Zero};
use bigdecimal::{BigDecimal, RoundingMode};

use super::sql_data::{Datum, SqlData};
use super::sql_type::SqlType;
use super::value::SqlValue;
use crate::error::{Error, Result};
use crate::protocol::decode::{
    decimal_from_f64, format_date, format_decimal, format_time, format_timestamp, parse_date,
    parse_decimal, parse_time, parse_timestamp,
};

impl SqlData {
    fn unreadable(&self, target: &str) -> Error {
        Error::mismatch(format!("cannot read {} field as {}", self.sql_type, target))
    }

    /// Unscaled integer with the field scale applied.
    fn scaled(&self, raw: i64) -> BigDecimal {
        BigDecimal::new(BigInt::from(raw), i64::from(self.shape.scale))
    }

    pub fn get_string(&self) -> Result<Option<String>> {
        let text = match &self.datum {
            Datum::Null => return Ok(None),
            Datum::Text(s) => s.clone(),
            Datum::Bytes(b) => b.iter().map(|byte| format!("{:02X}", byte)).collect(),
            Datum::Int(v) if self.shape.scale == 0 => v.to_string(),
            Datum::Int(v) => format_decimal(&self.scaled(*v)),
            Datum::Float(v) if self.sql_type == SqlType::Real => (*v as f32).to_string(),
            Datum::Float(v) => v.to_string(),
            Datum::Decimal(d) => format_decimal(d),
            Datum::Date(d) => format_date(d),
            Datum::Time(t) => format_time(t),
            Datum::Timestamp(ts) => format_timestamp(ts),
            Datum::Locator(_) => return Err(self.unreadable("string")),
        };
        Ok(Some(text))
    }

    pub fn get_decimal(&self) -> Result<Option<BigDecimal>> {
        let value = match &self.datum {
            Datum::Null => return Ok(None),
            Datum::Text(s) => parse_decimal(s)?,
            Datum::Int(v) => self.scaled(*v),
            Datum::Float(v) => decimal_from_f64(*v)?,
            Datum::Decimal(d) => d.clone(),
            _ => return Err(self.unreadable("decimal")),
        };
        Ok(Some(value))
    }

    /// Integer value; fractions are truncated toward zero.
    pub fn get_i64(&self) -> Result<Option<i64>> {
        let value = match &self.datum {
            Datum::Null => return Ok(None),
            Datum::Int(v) if self.shape.scale == 0 => return Ok(Some(*v)),
            Datum::Float(v) => {
                let truncated = v.trunc();
                if !truncated.is_finite()
                    || truncated < i64::MIN as f64
                    || truncated >= i64::MAX as f64
                {
                    return Err(Error::out_of_range(format!("{} does not fit BIGINT", v)));
                }
                return Ok(Some(truncated as i64));
            }
            _ => match self.get_decimal()? {
                Some(d) => d,
                None => return Ok(None),
            },
        };
        let (whole, _) = value
            .with_scale_round(0, RoundingMode::Down)
            .into_bigint_and_exponent();
        i64::try_from(&whole).map(Some).map_err(|_| {
            Error::out_of_range(format!("{} does not fit BIGINT", format_decimal(&value)))
        })
    }

    pub fn get_i32(&self) -> Result<Option<i32>> {
        self.get_i64()?
            .map(|v| {
                i32::try_from(v)
                    .map_err(|_| Error::out_of_range(format!("{} does not fit INTEGER", v)))
            })
            .transpose()
    }

    pub fn get_i16(&self) -> Result<Option<i16>> {
        self.get_i64()?
            .map(|v| {
                i16::try_from(v)
                    .map_err(|_| Error::out_of_range(format!("{} does not fit SMALLINT", v)))
            })
            .transpose()
    }

    pub fn get_f64(&self) -> Result<Option<f64>> {
        let value = match &self.datum {
            Datum::Null => return Ok(None),
            Datum::Float(v) => *v,
            Datum::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::mismatch(format!("not a number: {:?}", s)))?,
            Datum::Int(v) if self.shape.scale == 0 => *v as f64,
            _ => match self.get_decimal()? {
                Some(d) => d.to_f64().ok_or_else(|| {
                    Error::out_of_range(format!("{} has no double value", format_decimal(&d)))
                })?,
                None => return Ok(None),
            },
        };
        Ok(Some(value))
    }

    pub fn get_f32(&self) -> Result<Option<f32>> {
        Ok(self.get_f64()?.map(|v| v as f32))
    }

    /// Boolean view: numbers are true when non-zero; text is false for
    /// `"0"`, `"false"` (any case), or blanks.
    pub fn get_bool(&self) -> Result<Option<bool>> {
        let value = match &self.datum {
            Datum::Null => return Ok(None),
            Datum::Text(s) => {
                let s = s.trim();
                !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
            }
            Datum::Int(v) => *v != 0,
            Datum::Float(v) => *v != 0.0,
            Datum::Decimal(d) => !d.is_zero(),
            _ => return Err(self.unreadable("boolean")),
        };
        Ok(Some(value))
    }

    pub fn get_bytes(&self) -> Result<Option<Vec<u8>>> {
        match &self.datum {
            Datum::Null => Ok(None),
            Datum::Bytes(b) => Ok(Some(b.clone())),
            _ => Err(self.unreadable("bytes")),
        }
    }

    pub fn get_date(&self) -> Result<Option<NaiveDate>> {
        let value = match &self.datum {
            Datum::Null => return Ok(None),
            Datum::Date(d) => *d,
            Datum::Timestamp(ts) => ts.date(),
            Datum::Text(s) => match parse_date(s) {
                Ok(d) => d,
                Err(err) => parse_timestamp(s).map(|ts| ts.date()).map_err(|_| err)?,
            },
            _ => return Err(self.unreadable("date")),
        };
        Ok(Some(value))
    }

    pub fn get_time(&self) -> Result<Option<NaiveTime>> {
        let value = match &self.datum {
            Datum::Null => return Ok(None),
            Datum::Time(t) => *t,
            Datum::Timestamp(ts) => ts.time(),
            Datum::Text(s) => match parse_time(s) {
                Ok(t) => t,
                Err(err) => parse_timestamp(s).map(|ts| ts.time()).map_err(|_| err)?,
            },
            _ => return Err(self.unreadable("time")),
        };
        Ok(Some(value))
    }

    pub fn get_timestamp(&self) -> Result<Option<NaiveDateTime>> {
        let value = match &self.datum {
            Datum::Null => return Ok(None),
            Datum::Timestamp(ts) => *ts,
            Datum::Date(d) => d
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| Error::out_of_range(format!("{} has no midnight", d)))?,
            Datum::Text(s) => parse_timestamp(s)?,
            _ => return Err(self.unreadable("timestamp")),
        };
        Ok(Some(value))
    }

    /// The value as its natural [`SqlValue`].
    ///
    /// Scaled integers come back as decimals. Decimals come back as doubles
    /// unless the session prefers exact decimals. Inline LOB types give
    /// `Clob`/`Blob`.
    pub fn get_object(&self) -> Result<SqlValue> {
        let value = match &self.datum {
            Datum::Null => SqlValue::Null,
            Datum::Text(s) => match self.sql_type {
                SqlType::Clob | SqlType::DbClob => SqlValue::Clob(s.clone()),
                _ => SqlValue::String(s.clone()),
            },
            Datum::Bytes(b) => match self.sql_type {
                SqlType::Blob => SqlValue::Blob(b.clone()),
                _ => SqlValue::Bytes(b.clone()),
            },
            Datum::Int(v) if self.shape.scale == 0 => SqlValue::Int(*v),
            Datum::Int(v) => self.decimal_object(self.scaled(*v))?,
            Datum::Float(v) => SqlValue::Double(*v),
            Datum::Decimal(d) => self.decimal_object(d.clone())?,
            Datum::Date(d) => SqlValue::Date(*d),
            Datum::Time(t) => SqlValue::Time(*t),
            Datum::Timestamp(ts) => SqlValue::Timestamp(*ts),
            Datum::Locator(loc) => SqlValue::Locator(loc.clone()),
        };
        Ok(value)
    }

    fn decimal_object(&self, value: BigDecimal) -> Result<SqlValue> {
        if self.settings.prefer_exact_decimal {
            return Ok(SqlValue::Decimal(value));
        }
        value.to_f64().map(SqlValue::Double).ok_or_else(|| {
            Error::out_of_range(format!("{} has no double value", format_decimal(&value)))
        })
    }
}
