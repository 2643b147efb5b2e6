//! Field-level decoders for host numeric and temporal formats.
//!
//! ## Currently Supported
//!
//! | Host format | Module |
//! |-------------|--------|
//! | Packed decimal (DECIMAL) | `packed` |
//! | Zoned decimal (NUMERIC)  | `zoned` |
//! | Numeric text, scientific notation | `number` |
//! | ISO date/time/timestamp text | `date` |
//!
//! Binary integers and floats are plain big-endian and live in
//! [`crate::protocol::buffer`].

mod date;
mod number;
mod packed;
mod zoned;

pub use date::{
    format_date, format_time, format_timestamp, parse_date, parse_time, parse_timestamp,
    DATE_LENGTH, TIMESTAMP_LENGTH, TIME_LENGTH,
};
pub use number::{
    decimal_from_f64, format_decimal, normalize_scientific, parse_decimal, significant_digits,
    truncate_precision, truncate_scale,
};
pub use packed::{decode_packed, encode_packed, packed_length};
pub use zoned::{decode_zoned, encode_zoned};
