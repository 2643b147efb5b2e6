//! Field types, values, and row data.

mod coerce;
mod column;
mod getters;
mod lob;
mod metadata;
mod row_buffer;
mod sql_data;
mod sql_type;
mod value;

pub use column::FieldNames;
pub use lob::{LobData, LobLocator};
pub use metadata::{FieldFormat, FieldShape, ParameterDirection};
pub use row_buffer::RowBuffer;
pub use sql_data::SqlData;
pub use sql_type::{SqlType, TypeFamily};
pub use value::SqlValue;
