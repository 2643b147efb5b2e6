//! Integration tests for row marshaling: offsets, lazy translation,
//! indicators, and field lookup.

use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use ibmi_datastream_rs::protocol::constants::*;
use ibmi_datastream_rs::{
    ConvTableCache, ConversionSettings, Error, FieldFormat, Row, RowBuffer, ServerRow, SqlValue,
};
use bigdecimal::BigDecimal;

fn server_row(formats: Vec<FieldFormat>) -> ServerRow {
    let mut row = ServerRow::new(Arc::new(ConvTableCache::new()), ConversionSettings::default());
    row.set_format(formats).unwrap();
    row
}

/// VARCHAR(10) in CCSID 37 followed by INTEGER.
fn varchar_then_int() -> ServerRow {
    server_row(vec![
        FieldFormat::new(NATIVE_VARCHAR, 12).with_name("NAME").with_ccsid(37),
        FieldFormat::new(NATIVE_INTEGER, 4).with_name("QTY"),
    ])
}

#[test]
fn test_compressed_offsets_follow_actual_length() {
    let mut row = varchar_then_int();
    let data = vec![0x00, 0x04, 0xC1, 0xC2, 0xC3, 0xC4, 0x00, 0x00, 0x00, 0x09];
    row.set_row_buffer(RowBuffer::compressed(data, vec![0])).unwrap();
    row.set_row_index(0).unwrap();

    assert_eq!(row.field_offset(2).unwrap(), 6);
    assert_eq!(row.get_field_value(1).unwrap().get_string().unwrap().as_deref(), Some("ABCD"));
    assert_eq!(row.get_field_value(2).unwrap().get_i32().unwrap(), Some(9));
}

#[test]
fn test_compressed_rows_recompute_per_row() {
    let mut row = varchar_then_int();
    let mut data = vec![0x00, 0x04, 0xC1, 0xC2, 0xC3, 0xC4, 0x00, 0x00, 0x00, 0x01];
    data.extend_from_slice(&[0x00, 0x01, 0xE9, 0x00, 0x00, 0x00, 0x02]);
    row.set_row_buffer(RowBuffer::compressed(data, vec![0, 10])).unwrap();

    row.set_row_index(1).unwrap();
    assert_eq!(row.field_offset(1).unwrap(), 10);
    assert_eq!(row.field_offset(2).unwrap(), 13);
    assert_eq!(row.get_field_value(1).unwrap().get_string().unwrap().as_deref(), Some("Z"));
    assert_eq!(row.get_field_value(2).unwrap().get_i32().unwrap(), Some(2));
}

#[test]
fn test_uncompressed_fetch_restores_fixed_offsets() {
    let mut row = varchar_then_int();
    let compressed = vec![0x00, 0x01, 0xC1, 0x00, 0x00, 0x00, 0x05];
    row.set_row_buffer(RowBuffer::compressed(compressed, vec![0])).unwrap();
    row.set_row_index(0).unwrap();
    assert_eq!(row.field_offset(2).unwrap(), 3);

    let mut fixed = vec![0u8; 16];
    fixed[..3].copy_from_slice(&[0x00, 0x01, 0xC1]);
    fixed[12..].copy_from_slice(&6i32.to_be_bytes());
    row.set_row_buffer(RowBuffer::fixed(fixed, row.row_length(), 1)).unwrap();
    row.set_row_index(0).unwrap();
    assert_eq!(row.field_offset(2).unwrap(), 12);
    assert_eq!(row.get_field_value(2).unwrap().get_i32().unwrap(), Some(6));
}

#[test]
fn test_each_field_translates_once_per_row() {
    let mut row = varchar_then_int();
    let mut data = vec![0u8; 32];
    data[..3].copy_from_slice(&[0x00, 0x01, 0xC1]);
    data[12..16].copy_from_slice(&1i32.to_be_bytes());
    data[16..19].copy_from_slice(&[0x00, 0x01, 0xC2]);
    data[28..].copy_from_slice(&2i32.to_be_bytes());
    row.set_row_buffer(RowBuffer::fixed(data, 16, 2)).unwrap();

    row.set_row_index(0).unwrap();
    row.get_field_value(1).unwrap();
    row.get_field_value(1).unwrap();
    assert_eq!(row.translation_count(1).unwrap(), 1);
    assert_eq!(row.translation_count(2).unwrap(), 0);

    row.set_row_index(1).unwrap();
    assert_eq!(row.get_field_value(1).unwrap().get_string().unwrap().as_deref(), Some("B"));
    row.get_field_value(1).unwrap();
    assert_eq!(row.translation_count(1).unwrap(), 2);

    // Same position again still forces one fresh decode
    row.set_row_index(1).unwrap();
    row.get_field_value(1).unwrap();
    assert_eq!(row.translation_count(1).unwrap(), 3);
}

#[test]
fn test_null_and_mapping_error_indicators() {
    let mut row = server_row(vec![
        FieldFormat::new(NATIVE_DECIMAL + 1, 3).with_precision(5, 2),
        FieldFormat::new(NATIVE_INTEGER + 1, 4),
    ]);
    // Packed bytes that would not decode
    let data = vec![0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x2A];
    let rows = RowBuffer::fixed(data, 7, 1)
        .with_indicators(2, vec![INDICATOR_NULL, INDICATOR_DATA_MAPPING_ERROR])
        .unwrap();
    row.set_row_buffer(rows).unwrap();
    row.set_row_index(0).unwrap();

    assert!(row.is_null(1).unwrap());
    assert!(!row.is_data_mapping_error(1).unwrap());
    let value = row.get_field_value(1).unwrap();
    assert!(value.is_null());
    assert_eq!(value.get_decimal().unwrap(), None);
    assert_eq!(row.translation_count(1).unwrap(), 0);

    assert!(row.is_data_mapping_error(2).unwrap());
    assert!(!row.is_null(2).unwrap());
    assert_eq!(row.get_field_value(2).unwrap().get_i32().unwrap(), Some(42));
}

#[test]
fn test_field_lookup_by_name() {
    let row = server_row(vec![
        FieldFormat::new(NATIVE_INTEGER, 4).with_raw_name(vec![0xC9, 0xC4], 37),
        FieldFormat::new(NATIVE_INTEGER, 4).with_name("MYCOL"),
        FieldFormat::new(NATIVE_INTEGER, 4).with_name("MyCol"),
    ]);
    assert_eq!(row.field_name(1).unwrap(), "ID");
    assert_eq!(row.find_field_index("id").unwrap(), 1);
    assert_eq!(row.find_field_index("\"MyCol\"").unwrap(), 3);
    assert_eq!(row.find_field_index("mycol").unwrap(), 2);
    assert!(matches!(
        row.find_field_index("\"mycol\""),
        Err(Error::ColumnNotFound { .. })
    ));
    assert!(matches!(
        row.find_field_index("missing"),
        Err(Error::ColumnNotFound { .. })
    ));
}

#[test]
fn test_fields_convert_with_their_own_ccsid() {
    let mut row = server_row(vec![
        FieldFormat::new(NATIVE_CHAR, 3).with_ccsid(37),
        FieldFormat::new(NATIVE_CHAR, 3).with_ccsid(819),
        FieldFormat::new(NATIVE_GRAPHIC, 4).with_ccsid(13488),
    ]);
    let data = vec![0xC1, 0xC2, 0xC3, 0x41, 0x42, 0x43, 0x4E, 0x00, 0x00, 0x41];
    row.set_row_buffer(RowBuffer::fixed(data, 10, 1)).unwrap();
    row.set_row_index(0).unwrap();
    for index in 1..=2 {
        assert_eq!(
            row.get_field_value(index).unwrap().get_string().unwrap().as_deref(),
            Some("ABC")
        );
    }
    assert_eq!(
        row.get_field_value(3).unwrap().get_string().unwrap().as_deref(),
        Some("\u{4E00}A")
    );
}

#[test]
fn test_mixed_field_types() {
    let mut row = server_row(vec![
        FieldFormat::new(NATIVE_DECIMAL, 3).with_precision(5, 2),
        FieldFormat::new(NATIVE_DATE, 10).with_ccsid(37),
        FieldFormat::new(NATIVE_BIGINT, 8).with_precision(19, 3),
        FieldFormat::new(NATIVE_BLOB_LOCATOR, 4).with_lob_locator(NO_LOCATOR, 1 << 20),
    ]);
    let mut data = vec![0x12, 0x34, 0x5D];
    data.extend_from_slice(&[0xF2, 0xF0, 0xF2, 0xF4, 0x60, 0xF0, 0xF1, 0x60, 0xF3, 0xF1]);
    data.extend_from_slice(&(-1500i64).to_be_bytes());
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x63]);
    row.set_row_buffer(RowBuffer::fixed(data, 25, 1)).unwrap();
    row.set_row_index(0).unwrap();

    assert_eq!(
        row.get_field_value(1).unwrap().get_decimal().unwrap(),
        Some(BigDecimal::from_str("-123.45").unwrap())
    );
    assert_eq!(
        row.get_field_value(2).unwrap().get_date().unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 31)
    );
    assert_eq!(
        row.get_field_value(3).unwrap().get_object().unwrap(),
        SqlValue::Decimal(BigDecimal::from_str("-1.500").unwrap())
    );
    let locator = row.get_field_value(4).unwrap().locator().cloned().unwrap();
    assert_eq!(locator.handle(), 0x63);
    assert_eq!(locator.max_size(), 1 << 20);
}

#[test]
fn test_errors_are_reported_at_read_and_do_not_poison() {
    let mut row = server_row(vec![
        FieldFormat::new(NATIVE_CHAR, 2).with_ccsid(4242),
        FieldFormat::new(NATIVE_INTEGER, 4),
    ]);
    row.set_row_buffer(RowBuffer::fixed(vec![0x40, 0x40, 0, 0, 0, 1], 6, 1)).unwrap();
    row.set_row_index(0).unwrap();

    let err = row.get_field_value(1).unwrap_err();
    assert!(err.is_internal());

    let value = row.get_field_value(2).unwrap();
    assert!(matches!(value.get_date(), Err(Error::DataTypeMismatch { .. })));
    assert_eq!(value.get_i32().unwrap(), Some(1));
}

#[test]
fn test_row_shape_accessors() {
    let mut row = varchar_then_int();
    assert_eq!(row.field_count(), 2);
    assert_eq!(row.row_length(), 16);
    assert_eq!(row.field_format(1).unwrap().ccsid, 37);
    assert!(matches!(
        row.field_format(3),
        Err(Error::DescriptorIndexInvalid { index: 3, count: 2 })
    ));

    let settings = ConversionSettings::default().with_max_field_size(2);
    let mut limited = ServerRow::new(ConvTableCache::global(), settings);
    limited
        .set_format(vec![FieldFormat::new(NATIVE_VARCHAR, 12).with_ccsid(37)])
        .unwrap();
    limited
        .set_row_buffer(RowBuffer::compressed(vec![0x00, 0x03, 0xC1, 0xC2, 0xC3], vec![0]))
        .unwrap();
    limited.set_row_index(0).unwrap();
    assert_eq!(
        limited.get_field_value(1).unwrap().get_string().unwrap().as_deref(),
        Some("AB")
    );
    assert_eq!(limited.truncation(1).unwrap(), 1);

    row.set_format(Vec::new()).unwrap();
    assert_eq!(row.field_count(), 0);
}

#[test]
fn test_decimal_beyond_28_digits() {
    let mut row = server_row(vec![
        FieldFormat::new(NATIVE_DECIMAL, 16).with_precision(31, 0),
        FieldFormat::new(NATIVE_NUMERIC, 40).with_precision(40, 4),
    ]);
    let mut data = vec![0u8; 56];
    data[0] = 0x10;
    data[15] = 0x0F;
    data[16..].fill(0xF9);
    data[55] = 0xD9;
    row.set_row_buffer(RowBuffer::fixed(data, 56, 1)).unwrap();
    row.set_row_index(0).unwrap();

    assert_eq!(
        row.get_field_value(1).unwrap().get_string().unwrap().as_deref(),
        Some("1000000000000000000000000000000")
    );
    let numeric = row.get_field_value(2).unwrap().get_decimal().unwrap().unwrap();
    let expected = format!("-{}.9999", "9".repeat(36));
    assert_eq!(numeric, BigDecimal::from_str(&expected).unwrap());
}

#[test]
fn test_indicator_count_must_match_shape() {
    let mut row = varchar_then_int();
    let rows = RowBuffer::fixed(vec![0u8; 16], 16, 1)
        .with_indicators(3, vec![0, 0, INDICATOR_NULL])
        .unwrap();
    assert!(matches!(row.set_row_buffer(rows), Err(Error::Protocol { .. })));
    assert!(matches!(row.set_row_index(0), Err(Error::NoCurrentRow)));

    let rows = RowBuffer::fixed(vec![0u8; 16], 16, 1)
        .with_indicators(2, vec![0, INDICATOR_NULL])
        .unwrap();
    row.set_row_buffer(rows).unwrap();
    row.set_row_index(0).unwrap();
    assert!(row.is_null(2).unwrap());
}
