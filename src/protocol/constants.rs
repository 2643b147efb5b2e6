//! Host server datastream constants.
//!
//! Native type ids are the even (not nullable) codes; the server sets the
//! low bit for nullable fields. Use [`base_native_type`] before matching.

// Native SQL type ids
pub const NATIVE_DATE: u16 = 384;
pub const NATIVE_TIME: u16 = 388;
pub const NATIVE_TIMESTAMP: u16 = 392;
pub const NATIVE_DATALINK: u16 = 396;
pub const NATIVE_BLOB: u16 = 404;
pub const NATIVE_CLOB: u16 = 408;
pub const NATIVE_DBCLOB: u16 = 412;
pub const NATIVE_VARCHAR: u16 = 448;
pub const NATIVE_CHAR: u16 = 452;
pub const NATIVE_LONGVARCHAR: u16 = 456;
pub const NATIVE_VARGRAPHIC: u16 = 464;
pub const NATIVE_GRAPHIC: u16 = 468;
pub const NATIVE_LONGVARGRAPHIC: u16 = 472;
pub const NATIVE_FLOAT: u16 = 480;
pub const NATIVE_DECIMAL: u16 = 484;
pub const NATIVE_NUMERIC: u16 = 488;
pub const NATIVE_BIGINT: u16 = 492;
pub const NATIVE_INTEGER: u16 = 496;
pub const NATIVE_SMALLINT: u16 = 500;
pub const NATIVE_ROWID: u16 = 904;
pub const NATIVE_VARBINARY: u16 = 908;
pub const NATIVE_BINARY: u16 = 912;
pub const NATIVE_BLOB_LOCATOR: u16 = 960;
pub const NATIVE_CLOB_LOCATOR: u16 = 964;
pub const NATIVE_DBCLOB_LOCATOR: u16 = 968;

/// Strip the nullable bit from a native type id.
#[inline]
pub fn base_native_type(native_type: u16) -> u16 {
    native_type & 0xFFFE
}

// JDBC type codes (java.sql.Types)
pub const JDBC_BIT: i32 = -7;
pub const JDBC_TINYINT: i32 = -6;
pub const JDBC_SMALLINT: i32 = 5;
pub const JDBC_INTEGER: i32 = 4;
pub const JDBC_BIGINT: i32 = -5;
pub const JDBC_FLOAT: i32 = 6;
pub const JDBC_REAL: i32 = 7;
pub const JDBC_DOUBLE: i32 = 8;
pub const JDBC_NUMERIC: i32 = 2;
pub const JDBC_DECIMAL: i32 = 3;
pub const JDBC_CHAR: i32 = 1;
pub const JDBC_VARCHAR: i32 = 12;
pub const JDBC_LONGVARCHAR: i32 = -1;
pub const JDBC_DATE: i32 = 91;
pub const JDBC_TIME: i32 = 92;
pub const JDBC_TIMESTAMP: i32 = 93;
pub const JDBC_BINARY: i32 = -2;
pub const JDBC_VARBINARY: i32 = -3;
pub const JDBC_LONGVARBINARY: i32 = -4;
pub const JDBC_NULL: i32 = 0;
pub const JDBC_OTHER: i32 = 1111;
pub const JDBC_JAVA_OBJECT: i32 = 2000;
pub const JDBC_DISTINCT: i32 = 2001;
pub const JDBC_STRUCT: i32 = 2002;
pub const JDBC_ARRAY: i32 = 2003;
pub const JDBC_BLOB: i32 = 2004;
pub const JDBC_CLOB: i32 = 2005;
pub const JDBC_REF: i32 = 2006;
pub const JDBC_DATALINK: i32 = 70;
pub const JDBC_BOOLEAN: i32 = 16;
pub const JDBC_ROWID: i32 = -8;
pub const JDBC_NCHAR: i32 = -15;
pub const JDBC_NVARCHAR: i32 = -9;
pub const JDBC_LONGNVARCHAR: i32 = -16;
pub const JDBC_NCLOB: i32 = 2011;
pub const JDBC_SQLXML: i32 = 2009;

// Server versions, encoded as 0x00VVRRMM
pub const VRM_V5R3M0: u32 = 0x0005_0300;
pub const VRM_V7R1M0: u32 = 0x0007_0100;

/// First version that describes BINARY/VARBINARY as true binary types.
pub const VRM_BINARY_TYPES: u32 = VRM_V5R3M0;

// Per-field indicator values
pub const INDICATOR_NULL: i16 = -1;
pub const INDICATOR_DATA_MAPPING_ERROR: i16 = -2;

// CCSIDs with fixed meaning
pub const CCSID_NO_CONVERSION: u32 = 65535;
pub const CCSID_UCS2: u32 = 13488;
pub const CCSID_UTF16: u32 = 1200;
pub const CCSID_UTF8: u32 = 1208;
pub const CCSID_DEFAULT: u32 = 37;

/// Byte width of a variable-length prefix on the wire.
pub const VARIABLE_LENGTH_PREFIX: usize = 2;
/// Byte width of a LOB length prefix and of a LOB locator handle.
pub const LOB_LENGTH_PREFIX: usize = 4;
/// Sentinel locator handle for fields that are not locators.
pub const NO_LOCATOR: u32 = 0;
/// Maximum ROWID length.
pub const ROWID_MAX_LENGTH: usize = 40;
/// Most digits a DECIMAL or NUMERIC field can declare.
pub const MAX_DECIMAL_PRECISION: u32 = 63;

/// Fallback pad byte when a table offers no usable space.
pub const DEFAULT_PAD_BYTE: u8 = 0x40;
