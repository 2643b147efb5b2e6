//! IBM i datastream row marshaling for Rust
//!
//! Converts between the host's CCSID-encoded row buffers and typed values:
//! code page conversion (including bidi layout), packed and zoned decimals,
//! binary integers and floats, temporal text, and LOB locators. Row buffers
//! come from whatever transport talks to the host; this crate only marshals
//! them.
//!
//! # Example
//!
//! ```
//! use ibmi_datastream_rs::protocol::constants::{NATIVE_INTEGER, NATIVE_VARCHAR};
//! use ibmi_datastream_rs::{
//!     ConvTableCache, ConversionSettings, FieldFormat, Result, RowBuffer, ServerRow,
//! };
//!
//! fn main() -> Result<()> {
//!     let mut row = ServerRow::new(ConvTableCache::global(), ConversionSettings::default());
//!     row.set_format(vec![
//!         FieldFormat::new(NATIVE_VARCHAR, 12).with_name("NAME").with_ccsid(37),
//!         FieldFormat::new(NATIVE_INTEGER, 4).with_name("QTY"),
//!     ])?;
//!
//!     // "AB" in EBCDIC followed by 3, uncompressed
//!     let mut data = vec![0u8; 16];
//!     data[..4].copy_from_slice(&[0x00, 0x02, 0xC1, 0xC2]);
//!     data[12..].copy_from_slice(&3i32.to_be_bytes());
//!     row.set_row_buffer(RowBuffer::fixed(data, 16, 1))?;
//!     row.set_row_index(0)?;
//!
//!     let qty = row.find_field_index("qty")?;
//!     assert_eq!(row.get_field_value(1)?.get_string()?.as_deref(), Some("AB"));
//!     assert_eq!(row.get_field_value(qty)?.get_i32()?, Some(3));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod conv;
pub mod error;
pub mod parameters;
pub mod protocol;
pub mod row;

// Re-export main types
pub use config::ConversionSettings;
pub use conv::{BidiStringType, ConvTable, ConvTableCache};
pub use error::{Error, InternalError, Result};
pub use parameters::ParameterRow;
pub use protocol::types::{
    FieldFormat, FieldShape, LobData, LobLocator, ParameterDirection, RowBuffer, SqlData,
    SqlType, SqlValue, TypeFamily,
};
pub use row::{Row, ServerRow};
