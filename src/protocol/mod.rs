//! Host datastream encodings: the binary codec, type constants, decimal and
//! temporal codecs, and the field types built on them.

pub mod buffer;
pub mod constants;
pub mod decode;
pub mod types;

pub use buffer::PrefixWidth;
pub use types::{
    FieldFormat, FieldNames, FieldShape, LobData, LobLocator, ParameterDirection, RowBuffer,
    SqlData, SqlType, SqlValue, TypeFamily,
};
