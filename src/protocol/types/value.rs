//! Values moving in and out of fields.

use std::fmt;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::LobLocator;
use crate::protocol::decode::{format_date, format_decimal, format_time, format_timestamp};

/// A field value.
///
/// This is both what [`SqlData::set`](super::SqlData::set) accepts and what
/// [`SqlData::get_object`](super::SqlData::get_object) returns. Each field
/// type accepts a fixed subset of kinds; the rest are rejected with
/// `Error::DataTypeMismatch`.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL.
    Null,
    /// Text.
    String(String),
    /// Any integer.
    Int(i64),
    /// Floating point.
    Double(f64),
    /// Exact decimal, any precision.
    Decimal(BigDecimal),
    Boolean(bool),
    /// Raw bytes.
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    /// Character large object, fully materialized.
    Clob(String),
    /// Binary large object, fully materialized.
    Blob(Vec<u8>),
    /// Handle to a server-side large object.
    Locator(LobLocator),
}

impl SqlValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Name of the value kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::String(_) => "string",
            SqlValue::Int(_) => "integer",
            SqlValue::Double(_) => "double",
            SqlValue::Decimal(_) => "decimal",
            SqlValue::Boolean(_) => "boolean",
            SqlValue::Bytes(_) => "bytes",
            SqlValue::Date(_) => "date",
            SqlValue::Time(_) => "time",
            SqlValue::Timestamp(_) => "timestamp",
            SqlValue::Clob(_) => "clob",
            SqlValue::Blob(_) => "blob",
            SqlValue::Locator(_) => "locator",
        }
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::String(s) | SqlValue::Clob(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as raw bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            SqlValue::Bytes(b) | SqlValue::Blob(b) => Some(b),
            _ => None,
        }
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::String(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::String(s)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Int(i64::from(v))
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Int(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Double(v)
    }
}

impl From<BigDecimal> for SqlValue {
    fn from(v: BigDecimal) -> Self {
        SqlValue::Decimal(v)
    }
}

impl From<rust_decimal::Decimal> for SqlValue {
    fn from(v: rust_decimal::Decimal) -> Self {
        SqlValue::Decimal(BigDecimal::new(BigInt::from(v.mantissa()), i64::from(v.scale())))
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Boolean(v)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Bytes(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::String(s) | SqlValue::Clob(s) => write!(f, "{}", s),
            SqlValue::Int(v) => write!(f, "{}", v),
            SqlValue::Double(v) => write!(f, "{}", v),
            SqlValue::Decimal(v) => write!(f, "{}", format_decimal(v)),
            SqlValue::Boolean(v) => write!(f, "{}", v),
            SqlValue::Bytes(b) => write!(f, "<BINARY: {} bytes>", b.len()),
            SqlValue::Blob(b) => write!(f, "<BLOB: {} bytes>", b.len()),
            SqlValue::Date(d) => write!(f, "{}", format_date(d)),
            SqlValue::Time(t) => write!(f, "{}", format_time(t)),
            SqlValue::Timestamp(ts) => write!(f, "{}", format_timestamp(ts)),
            SqlValue::Locator(loc) => write!(f, "<LOCATOR: {:08X}>", loc.handle()),
        }
    }
}
