//! Canonical wire type enum.
//!
//! The host identifies field types three ways: JDBC type codes (parameter
//! binding from the JDBC surface), native numeric type ids (row formats),
//! and native type names (catalog metadata). All three normalize to one
//! [`SqlType`] so the per-type codecs exist exactly once.
//!
//! Note: nullability is a field property, not a type property.

use std::fmt;

use tracing::warn;

use crate::config::ConversionSettings;
use crate::error::{Error, Result};
use crate::protocol::buffer::PrefixWidth;
use crate::protocol::constants::*;

/// Server SQL type of a field, after CCSID and version adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    /// CHAR - fixed-length text.
    Char,
    /// CHAR FOR BIT DATA - fixed-length bytes (CCSID 65535).
    CharForBitData,
    /// VARCHAR - 2-byte length prefix, text.
    VarChar,
    /// VARCHAR FOR BIT DATA. `double_byte` when the prefix counts 2-byte
    /// characters (a VARGRAPHIC field tagged 65535).
    VarCharForBitData { double_byte: bool },
    /// LONG VARCHAR.
    LongVarChar,
    /// LONG VARCHAR FOR BIT DATA.
    LongVarCharForBitData { double_byte: bool },
    /// GRAPHIC - fixed-length double-byte text.
    Graphic,
    /// VARGRAPHIC - prefix counts characters.
    VarGraphic,
    /// LONG VARGRAPHIC.
    LongVarGraphic,
    /// BINARY (V5R3 and later).
    Binary,
    /// VARBINARY (V5R3 and later).
    VarBinary,
    /// DECIMAL - packed decimal.
    Decimal,
    /// NUMERIC - zoned decimal.
    Numeric,
    /// SMALLINT - 2-byte integer with optional implied scale.
    SmallInt,
    /// INTEGER - 4-byte integer with optional implied scale.
    Integer,
    /// BIGINT - 8-byte integer with optional implied scale.
    BigInt,
    /// REAL - 4-byte float.
    Real,
    /// DOUBLE - 8-byte float.
    Double,
    /// DATE - ISO text.
    Date,
    /// TIME - ISO text.
    Time,
    /// TIMESTAMP - ISO text with microseconds.
    Timestamp,
    /// CLOB with inline data behind a 4-byte prefix.
    Clob,
    /// DBCLOB with inline data; prefix counts characters.
    DbClob,
    /// BLOB with inline data.
    Blob,
    /// CLOB locator handle.
    ClobLocator,
    /// DBCLOB locator handle.
    DbClobLocator,
    /// BLOB locator handle.
    BlobLocator,
    /// ROWID - up to 40 bytes behind a 2-byte prefix.
    RowId,
    /// DATALINK - URL text behind a 2-byte prefix.
    Datalink,
}

/// Value family shared by several wire types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFamily {
    Text,
    Binary,
    Decimal,
    Integer,
    Float,
    Date,
    Time,
    Timestamp,
    Locator,
}

impl SqlType {
    /// Map a JDBC type code.
    ///
    /// Returns `Err(Error::InvalidDataType)` for codes with no server
    /// representation.
    pub fn from_jdbc(jdbc_type: i32, ccsid: u32, settings: &ConversionSettings) -> Result<Self> {
        let for_bit_data = is_for_bit_data(ccsid, settings);
        let sql_type = match jdbc_type {
            JDBC_BIT | JDBC_BOOLEAN | JDBC_TINYINT | JDBC_SMALLINT => SqlType::SmallInt,
            JDBC_INTEGER => SqlType::Integer,
            JDBC_BIGINT => SqlType::BigInt,
            JDBC_REAL => SqlType::Real,
            JDBC_FLOAT | JDBC_DOUBLE => SqlType::Double,
            JDBC_DECIMAL => SqlType::Decimal,
            JDBC_NUMERIC => SqlType::Numeric,
            JDBC_CHAR if for_bit_data => SqlType::CharForBitData,
            JDBC_CHAR => SqlType::Char,
            JDBC_NCHAR => SqlType::Graphic,
            JDBC_VARCHAR if for_bit_data => SqlType::VarCharForBitData { double_byte: false },
            JDBC_VARCHAR => SqlType::VarChar,
            JDBC_NVARCHAR => SqlType::VarGraphic,
            JDBC_LONGVARCHAR if for_bit_data => {
                SqlType::LongVarCharForBitData { double_byte: false }
            }
            JDBC_LONGVARCHAR => SqlType::LongVarChar,
            JDBC_LONGNVARCHAR => SqlType::LongVarGraphic,
            JDBC_BINARY => binary_or_char(settings),
            JDBC_VARBINARY => varbinary_or_varchar(settings),
            JDBC_LONGVARBINARY => SqlType::LongVarCharForBitData { double_byte: false },
            JDBC_DATE => SqlType::Date,
            JDBC_TIME => SqlType::Time,
            JDBC_TIMESTAMP => SqlType::Timestamp,
            JDBC_CLOB => SqlType::Clob,
            JDBC_NCLOB => SqlType::DbClob,
            JDBC_BLOB => SqlType::Blob,
            JDBC_ROWID => SqlType::RowId,
            JDBC_DATALINK => SqlType::Datalink,
            _ => return Err(Error::InvalidDataType { jdbc_type }),
        };
        Ok(sql_type)
    }

    /// Map a native type id from a row format.
    ///
    /// The nullable bit is ignored. `length` picks REAL or DOUBLE for
    /// FLOAT fields. Unknown ids are an internal error.
    pub fn from_native(
        native_type: u16,
        length: usize,
        ccsid: u32,
        settings: &ConversionSettings,
    ) -> Result<Self> {
        let for_bit_data = is_for_bit_data(ccsid, settings);
        let sql_type = match base_native_type(native_type) {
            NATIVE_DATE => SqlType::Date,
            NATIVE_TIME => SqlType::Time,
            NATIVE_TIMESTAMP => SqlType::Timestamp,
            NATIVE_DATALINK => SqlType::Datalink,
            NATIVE_BLOB => SqlType::Blob,
            NATIVE_CLOB | NATIVE_DBCLOB if for_bit_data => SqlType::Blob,
            NATIVE_CLOB => SqlType::Clob,
            NATIVE_DBCLOB => SqlType::DbClob,
            NATIVE_VARCHAR if for_bit_data => SqlType::VarCharForBitData { double_byte: false },
            NATIVE_VARCHAR => SqlType::VarChar,
            NATIVE_CHAR if for_bit_data => SqlType::CharForBitData,
            NATIVE_CHAR => SqlType::Char,
            NATIVE_LONGVARCHAR if for_bit_data => {
                SqlType::LongVarCharForBitData { double_byte: false }
            }
            NATIVE_LONGVARCHAR => SqlType::LongVarChar,
            NATIVE_VARGRAPHIC if for_bit_data => SqlType::VarCharForBitData { double_byte: true },
            NATIVE_VARGRAPHIC => SqlType::VarGraphic,
            NATIVE_GRAPHIC if for_bit_data => SqlType::CharForBitData,
            NATIVE_GRAPHIC => SqlType::Graphic,
            NATIVE_LONGVARGRAPHIC if for_bit_data => {
                SqlType::LongVarCharForBitData { double_byte: true }
            }
            NATIVE_LONGVARGRAPHIC => SqlType::LongVarGraphic,
            NATIVE_FLOAT if length == 4 => SqlType::Real,
            NATIVE_FLOAT => SqlType::Double,
            NATIVE_DECIMAL => SqlType::Decimal,
            NATIVE_NUMERIC => SqlType::Numeric,
            NATIVE_BIGINT => SqlType::BigInt,
            NATIVE_INTEGER => SqlType::Integer,
            NATIVE_SMALLINT => SqlType::SmallInt,
            NATIVE_ROWID => SqlType::RowId,
            NATIVE_VARBINARY => varbinary_or_varchar(settings),
            NATIVE_BINARY => binary_or_char(settings),
            NATIVE_BLOB_LOCATOR => SqlType::BlobLocator,
            NATIVE_CLOB_LOCATOR | NATIVE_DBCLOB_LOCATOR if for_bit_data => SqlType::BlobLocator,
            NATIVE_CLOB_LOCATOR => SqlType::ClobLocator,
            NATIVE_DBCLOB_LOCATOR => SqlType::DbClobLocator,
            other => {
                warn!(native_type = other, "unknown native type in row format");
                return Err(Error::illegal_argument(format!("native type {}", other)));
            }
        };
        Ok(sql_type)
    }

    /// Map a native type name such as `"VARCHAR"` or `"CHAR FOR BIT DATA"`.
    ///
    /// Names are matched case-insensitively. Unknown names are an internal
    /// error.
    pub fn from_type_name(name: &str, ccsid: u32, settings: &ConversionSettings) -> Result<Self> {
        let for_bit_data = is_for_bit_data(ccsid, settings);
        let normalized = name.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase();
        let sql_type = match normalized.as_str() {
            "CHAR" | "CHARACTER" if for_bit_data => SqlType::CharForBitData,
            "CHAR" | "CHARACTER" => SqlType::Char,
            "CHAR FOR BIT DATA" => SqlType::CharForBitData,
            "VARCHAR" | "CHARACTER VARYING" if for_bit_data => {
                SqlType::VarCharForBitData { double_byte: false }
            }
            "VARCHAR" | "CHARACTER VARYING" => SqlType::VarChar,
            "VARCHAR FOR BIT DATA" => SqlType::VarCharForBitData { double_byte: false },
            "LONG VARCHAR" if for_bit_data => SqlType::LongVarCharForBitData { double_byte: false },
            "LONG VARCHAR" => SqlType::LongVarChar,
            "LONG VARCHAR FOR BIT DATA" => SqlType::LongVarCharForBitData { double_byte: false },
            "GRAPHIC" | "NCHAR" => SqlType::Graphic,
            "VARGRAPHIC" | "NVARCHAR" => SqlType::VarGraphic,
            "LONG VARGRAPHIC" => SqlType::LongVarGraphic,
            "BINARY" => binary_or_char(settings),
            "VARBINARY" => varbinary_or_varchar(settings),
            "DECIMAL" | "DEC" => SqlType::Decimal,
            "NUMERIC" => SqlType::Numeric,
            "SMALLINT" => SqlType::SmallInt,
            "INTEGER" | "INT" => SqlType::Integer,
            "BIGINT" => SqlType::BigInt,
            "REAL" => SqlType::Real,
            "FLOAT" | "DOUBLE" | "DOUBLE PRECISION" => SqlType::Double,
            "DATE" => SqlType::Date,
            "TIME" => SqlType::Time,
            "TIMESTAMP" => SqlType::Timestamp,
            "CLOB" if for_bit_data => SqlType::Blob,
            "CLOB" => SqlType::Clob,
            "DBCLOB" | "NCLOB" => SqlType::DbClob,
            "BLOB" => SqlType::Blob,
            "CLOB LOCATOR" | "DBCLOB LOCATOR" if for_bit_data => SqlType::BlobLocator,
            "CLOB LOCATOR" => SqlType::ClobLocator,
            "DBCLOB LOCATOR" => SqlType::DbClobLocator,
            "BLOB LOCATOR" => SqlType::BlobLocator,
            "ROWID" => SqlType::RowId,
            "DATALINK" => SqlType::Datalink,
            _ => {
                warn!(type_name = name, "unknown native type name");
                return Err(Error::illegal_argument(format!("type name {:?}", name)));
            }
        };
        Ok(sql_type)
    }

    /// JDBC type code reported for this type.
    pub fn jdbc_type(&self) -> i32 {
        match self {
            SqlType::Char | SqlType::Graphic => JDBC_CHAR,
            SqlType::CharForBitData | SqlType::Binary => JDBC_BINARY,
            SqlType::VarChar | SqlType::VarGraphic => JDBC_VARCHAR,
            SqlType::VarCharForBitData { .. } | SqlType::VarBinary => JDBC_VARBINARY,
            SqlType::LongVarChar | SqlType::LongVarGraphic => JDBC_LONGVARCHAR,
            SqlType::LongVarCharForBitData { .. } => JDBC_LONGVARBINARY,
            SqlType::Decimal => JDBC_DECIMAL,
            SqlType::Numeric => JDBC_NUMERIC,
            SqlType::SmallInt => JDBC_SMALLINT,
            SqlType::Integer => JDBC_INTEGER,
            SqlType::BigInt => JDBC_BIGINT,
            SqlType::Real => JDBC_REAL,
            SqlType::Double => JDBC_DOUBLE,
            SqlType::Date => JDBC_DATE,
            SqlType::Time => JDBC_TIME,
            SqlType::Timestamp => JDBC_TIMESTAMP,
            SqlType::Clob | SqlType::DbClob | SqlType::ClobLocator | SqlType::DbClobLocator => {
                JDBC_CLOB
            }
            SqlType::Blob | SqlType::BlobLocator => JDBC_BLOB,
            SqlType::RowId => JDBC_ROWID,
            SqlType::Datalink => JDBC_DATALINK,
        }
    }

    /// Native type id (not nullable) used when describing parameters.
    pub fn native_type(&self) -> u16 {
        match self {
            SqlType::Char | SqlType::CharForBitData => NATIVE_CHAR,
            SqlType::VarChar | SqlType::VarCharForBitData { double_byte: false } => NATIVE_VARCHAR,
            SqlType::VarCharForBitData { double_byte: true } | SqlType::VarGraphic => {
                NATIVE_VARGRAPHIC
            }
            SqlType::LongVarChar | SqlType::LongVarCharForBitData { double_byte: false } => {
                NATIVE_LONGVARCHAR
            }
            SqlType::LongVarCharForBitData { double_byte: true } | SqlType::LongVarGraphic => {
                NATIVE_LONGVARGRAPHIC
            }
            SqlType::Graphic => NATIVE_GRAPHIC,
            SqlType::Binary => NATIVE_BINARY,
            SqlType::VarBinary => NATIVE_VARBINARY,
            SqlType::Decimal => NATIVE_DECIMAL,
            SqlType::Numeric => NATIVE_NUMERIC,
            SqlType::SmallInt => NATIVE_SMALLINT,
            SqlType::Integer => NATIVE_INTEGER,
            SqlType::BigInt => NATIVE_BIGINT,
            SqlType::Real | SqlType::Double => NATIVE_FLOAT,
            SqlType::Date => NATIVE_DATE,
            SqlType::Time => NATIVE_TIME,
            SqlType::Timestamp => NATIVE_TIMESTAMP,
            SqlType::Clob => NATIVE_CLOB,
            SqlType::DbClob => NATIVE_DBCLOB,
            SqlType::Blob => NATIVE_BLOB,
            SqlType::ClobLocator => NATIVE_CLOB_LOCATOR,
            SqlType::DbClobLocator => NATIVE_DBCLOB_LOCATOR,
            SqlType::BlobLocator => NATIVE_BLOB_LOCATOR,
            SqlType::RowId => NATIVE_ROWID,
            SqlType::Datalink => NATIVE_DATALINK,
        }
    }

    /// Native type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlType::Char => "CHAR",
            SqlType::CharForBitData => "CHAR FOR BIT DATA",
            SqlType::VarChar => "VARCHAR",
            SqlType::VarCharForBitData { .. } => "VARCHAR FOR BIT DATA",
            SqlType::LongVarChar => "LONG VARCHAR",
            SqlType::LongVarCharForBitData { .. } => "LONG VARCHAR FOR BIT DATA",
            SqlType::Graphic => "GRAPHIC",
            SqlType::VarGraphic => "VARGRAPHIC",
            SqlType::LongVarGraphic => "LONG VARGRAPHIC",
            SqlType::Binary => "BINARY",
            SqlType::VarBinary => "VARBINARY",
            SqlType::Decimal => "DECIMAL",
            SqlType::Numeric => "NUMERIC",
            SqlType::SmallInt => "SMALLINT",
            SqlType::Integer => "INTEGER",
            SqlType::BigInt => "BIGINT",
            SqlType::Real => "REAL",
            SqlType::Double => "DOUBLE",
            SqlType::Date => "DATE",
            SqlType::Time => "TIME",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::Clob => "CLOB",
            SqlType::DbClob => "DBCLOB",
            SqlType::Blob => "BLOB",
            SqlType::ClobLocator => "CLOB LOCATOR",
            SqlType::DbClobLocator => "DBCLOB LOCATOR",
            SqlType::BlobLocator => "BLOB LOCATOR",
            SqlType::RowId => "ROWID",
            SqlType::Datalink => "DATALINK",
        }
    }

    /// Value family.
    pub fn family(&self) -> TypeFamily {
        match self {
            SqlType::Char
            | SqlType::VarChar
            | SqlType::LongVarChar
            | SqlType::Graphic
            | SqlType::VarGraphic
            | SqlType::LongVarGraphic
            | SqlType::Clob
            | SqlType::DbClob
            | SqlType::Datalink => TypeFamily::Text,
            SqlType::CharForBitData
            | SqlType::VarCharForBitData { .. }
            | SqlType::LongVarCharForBitData { .. }
            | SqlType::Binary
            | SqlType::VarBinary
            | SqlType::Blob
            | SqlType::RowId => TypeFamily::Binary,
            SqlType::Decimal | SqlType::Numeric => TypeFamily::Decimal,
            SqlType::SmallInt | SqlType::Integer | SqlType::BigInt => TypeFamily::Integer,
            SqlType::Real | SqlType::Double => TypeFamily::Float,
            SqlType::Date => TypeFamily::Date,
            SqlType::Time => TypeFamily::Time,
            SqlType::Timestamp => TypeFamily::Timestamp,
            SqlType::ClobLocator | SqlType::DbClobLocator | SqlType::BlobLocator => {
                TypeFamily::Locator
            }
        }
    }

    /// Length prefix in front of the data, for variable-length types.
    pub fn prefix(&self) -> Option<PrefixWidth> {
        match self {
            SqlType::VarChar
            | SqlType::VarCharForBitData { .. }
            | SqlType::LongVarChar
            | SqlType::LongVarCharForBitData { .. }
            | SqlType::VarGraphic
            | SqlType::LongVarGraphic
            | SqlType::VarBinary
            | SqlType::RowId
            | SqlType::Datalink => Some(PrefixWidth::Short),
            SqlType::Clob | SqlType::DbClob | SqlType::Blob => Some(PrefixWidth::Long),
            _ => None,
        }
    }

    /// Whether the length prefix counts 2-byte characters instead of bytes.
    pub fn prefix_counts_chars(&self) -> bool {
        matches!(
            self,
            SqlType::VarGraphic
                | SqlType::LongVarGraphic
                | SqlType::DbClob
                | SqlType::VarCharForBitData { double_byte: true }
                | SqlType::LongVarCharForBitData { double_byte: true }
        )
    }

    /// Whether the data is always double-byte text.
    pub fn is_graphic(&self) -> bool {
        matches!(
            self,
            SqlType::Graphic | SqlType::VarGraphic | SqlType::LongVarGraphic | SqlType::DbClob
        )
    }

    /// Whether values go through a conversion table.
    pub fn needs_conversion(&self) -> bool {
        matches!(
            self.family(),
            TypeFamily::Text | TypeFamily::Date | TypeFamily::Time | TypeFamily::Timestamp
        )
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

fn is_for_bit_data(ccsid: u32, settings: &ConversionSettings) -> bool {
    ccsid == CCSID_NO_CONVERSION && !settings.translate_binary
}

fn binary_or_char(settings: &ConversionSettings) -> SqlType {
    if settings.server_vrm >= VRM_BINARY_TYPES {
        SqlType::Binary
    } else {
        SqlType::CharForBitData
    }
}

fn varbinary_or_varchar(settings: &ConversionSettings) -> SqlType {
    if settings.server_vrm >= VRM_BINARY_TYPES {
        SqlType::VarBinary
    } else {
        SqlType::VarCharForBitData { double_byte: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InternalError;

    const ALL: [SqlType; 29] = [
        SqlType::Char,
        SqlType::CharForBitData,
        SqlType::VarChar,
        SqlType::VarCharForBitData { double_byte: false },
        SqlType::LongVarChar,
        SqlType::LongVarCharForBitData { double_byte: false },
        SqlType::Graphic,
        SqlType::VarGraphic,
        SqlType::LongVarGraphic,
        SqlType::Binary,
        SqlType::VarBinary,
        SqlType::Decimal,
        SqlType::Numeric,
        SqlType::SmallInt,
        SqlType::Integer,
        SqlType::BigInt,
        SqlType::Real,
        SqlType::Double,
        SqlType::Date,
        SqlType::Time,
        SqlType::Timestamp,
        SqlType::Clob,
        SqlType::DbClob,
        SqlType::Blob,
        SqlType::ClobLocator,
        SqlType::DbClobLocator,
        SqlType::BlobLocator,
        SqlType::RowId,
        SqlType::Datalink,
    ];

    #[test]
    fn test_from_native_basic() {
        let settings = ConversionSettings::default();
        assert_eq!(
            SqlType::from_native(NATIVE_VARCHAR, 12, 37, &settings).unwrap(),
            SqlType::VarChar
        );
        // Nullable bit is ignored
        assert_eq!(
            SqlType::from_native(NATIVE_INTEGER + 1, 4, 0, &settings).unwrap(),
            SqlType::Integer
        );
        assert_eq!(SqlType::from_native(NATIVE_FLOAT, 4, 0, &settings).unwrap(), SqlType::Real);
        assert_eq!(SqlType::from_native(NATIVE_FLOAT, 8, 0, &settings).unwrap(), SqlType::Double);
    }

    #[test]
    fn test_native_round_trip_for_every_type() {
        let settings = ConversionSettings::default();
        for sql_type in ALL {
            let length = if sql_type == SqlType::Real { 4 } else { 8 };
            let ccsid = match sql_type.family() {
                TypeFamily::Binary => CCSID_NO_CONVERSION,
                _ => 37,
            };
            let mapped =
                SqlType::from_native(sql_type.native_type(), length, ccsid, &settings).unwrap();
            assert_eq!(mapped, sql_type, "{}", sql_type);
        }
    }

    #[test]
    fn test_type_name_round_trip() {
        let settings = ConversionSettings::default();
        for sql_type in ALL {
            let mapped = SqlType::from_type_name(sql_type.type_name(), 37, &settings).unwrap();
            assert_eq!(mapped, sql_type);
        }
        assert_eq!(
            SqlType::from_type_name("  character   varying ", 37, &settings).unwrap(),
            SqlType::VarChar
        );
    }

    #[test]
    fn test_binary_depends_on_server_version() {
        let old = ConversionSettings::default().with_server_vrm(5, 2, 0);
        let new = ConversionSettings::default().with_server_vrm(5, 3, 0);
        assert_eq!(
            SqlType::from_native(NATIVE_BINARY, 10, 65535, &old).unwrap(),
            SqlType::CharForBitData
        );
        assert_eq!(
            SqlType::from_native(NATIVE_VARBINARY, 12, 65535, &old).unwrap(),
            SqlType::VarCharForBitData { double_byte: false }
        );
        assert_eq!(SqlType::from_native(NATIVE_BINARY, 10, 65535, &new).unwrap(), SqlType::Binary);
        assert_eq!(SqlType::from_jdbc(JDBC_VARBINARY, 0, &old).unwrap().jdbc_type(), JDBC_VARBINARY);
    }

    #[test]
    fn test_no_conversion_ccsid_depends_on_translate_binary() {
        let raw = ConversionSettings::default();
        let translate = ConversionSettings::default().with_translate_binary(true);
        assert_eq!(
            SqlType::from_native(NATIVE_CHAR, 10, 65535, &raw).unwrap(),
            SqlType::CharForBitData
        );
        assert_eq!(SqlType::from_native(NATIVE_CHAR, 10, 65535, &translate).unwrap(), SqlType::Char);
        assert_eq!(
            SqlType::from_native(NATIVE_VARGRAPHIC, 22, 65535, &raw).unwrap(),
            SqlType::VarCharForBitData { double_byte: true }
        );
        assert_eq!(
            SqlType::from_jdbc(JDBC_VARCHAR, 65535, &raw).unwrap(),
            SqlType::VarCharForBitData { double_byte: false }
        );
    }

    #[test]
    fn test_clob_locator_degrades_to_blob_locator() {
        let raw = ConversionSettings::default();
        let translate = ConversionSettings::default().with_translate_binary(true);
        assert_eq!(
            SqlType::from_native(NATIVE_CLOB_LOCATOR, 4, 65535, &raw).unwrap(),
            SqlType::BlobLocator
        );
        assert_eq!(
            SqlType::from_native(NATIVE_DBCLOB_LOCATOR, 4, 65535, &raw).unwrap(),
            SqlType::BlobLocator
        );
        assert_eq!(
            SqlType::from_native(NATIVE_CLOB_LOCATOR, 4, 65535, &translate).unwrap(),
            SqlType::ClobLocator
        );
    }

    #[test]
    fn test_failures_differ_by_scheme() {
        let settings = ConversionSettings::default();
        assert!(matches!(
            SqlType::from_jdbc(JDBC_STRUCT, 37, &settings),
            Err(Error::InvalidDataType { jdbc_type: JDBC_STRUCT })
        ));
        assert!(matches!(
            SqlType::from_native(999, 4, 37, &settings),
            Err(Error::Internal(InternalError::IllegalArgument { .. }))
        ));
        assert!(matches!(
            SqlType::from_type_name("XML", 37, &settings),
            Err(Error::Internal(InternalError::IllegalArgument { .. }))
        ));
    }

    #[test]
    fn test_layout_properties() {
        assert_eq!(SqlType::VarChar.prefix(), Some(PrefixWidth::Short));
        assert_eq!(SqlType::Blob.prefix(), Some(PrefixWidth::Long));
        assert_eq!(SqlType::Integer.prefix(), None);
        assert!(SqlType::VarGraphic.prefix_counts_chars());
        assert!(!SqlType::VarChar.prefix_counts_chars());
        assert!(SqlType::Date.needs_conversion());
        assert!(!SqlType::Binary.needs_conversion());
        assert_eq!(format!("{}", SqlType::LongVarGraphic), "LONG VARGRAPHIC");
    }
}
