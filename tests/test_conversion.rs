//! Integration tests for code page conversion and field value coercion.

use std::str::FromStr;
use std::sync::Arc;

use ibmi_datastream_rs::protocol::constants::*;
use ibmi_datastream_rs::protocol::decode::normalize_scientific;
use ibmi_datastream_rs::{
    BidiStringType, ConvTable, ConvTableCache, ConversionSettings, Error, FieldShape, SqlData,
    SqlType, SqlValue,
};
use bigdecimal::BigDecimal;

#[test]
fn test_text_round_trips_in_every_shipped_code_page() {
    let cache = ConvTableCache::new();
    let text = "Hello, World! 0123456789 (a+b)*c = d; x_y \"quoted\"";
    for ccsid in [37, 500, 1047, 1140, 1148, 819, 1252, 1208, 1200, 13488, 61952] {
        let table = cache.get(ccsid).unwrap();
        let encoded = table.encode(text, BidiStringType::Default);
        let decoded = table.decode(&encoded, BidiStringType::Default).unwrap();
        assert_eq!(decoded, text, "ccsid {}", ccsid);
    }
    assert_eq!(cache.len(), 11);
}

#[test]
fn test_substitution_is_deterministic_per_table() {
    let cache = ConvTableCache::new();
    let ebcdic = cache.get(37).unwrap();
    let latin = cache.get(819).unwrap();
    for _ in 0..2 {
        assert_eq!(ebcdic.encode("\u{4E00}", BidiStringType::Default), vec![0x3F]);
        assert_eq!(latin.encode("\u{4E00}", BidiStringType::Default), vec![0x1A]);
    }
    let mixed = ebcdic.encode("A\u{4E00}B", BidiStringType::Default);
    assert_eq!(
        ebcdic.decode(&mixed, BidiStringType::Default).unwrap(),
        ebcdic.decode(&[0xC1, 0x3F, 0xC2], BidiStringType::Default).unwrap()
    );
}

#[test]
fn test_unsupported_ccsid_is_internal() {
    let err = ConvTable::new(4242).unwrap_err();
    assert!(err.is_internal());
    assert!(ConvTableCache::new().get(4242).is_err());
}

#[test]
fn test_scientific_notation_normalization() {
    assert_eq!(normalize_scientific("1.5E3").unwrap(), "1500.0");
    assert_eq!(normalize_scientific("1.5E-3").unwrap(), "0.0015");
    assert_eq!(normalize_scientific("-2.5E2").unwrap(), "-250.0");
}

#[test]
fn test_huge_exponents_are_out_of_range() {
    let settings = ConversionSettings::default();
    let shape = FieldShape::new(5).with_precision(9, 2);
    let mut data = SqlData::for_native(NATIVE_DECIMAL, shape, &settings).unwrap();
    for input in ["1E9223372036854775807", "1E-4000000000", "-7E-9223372036854775808"] {
        assert!(
            matches!(data.set(SqlValue::from(input), None), Err(Error::OutOfRange { .. })),
            "{}",
            input
        );
        assert!(data.is_null());
    }
}

#[test]
fn test_scientific_text_into_decimal_fields() {
    let settings = ConversionSettings::default();
    let cases = [
        ("1.5E3", 9, 2, "1500.00"),
        ("1.5E-3", 10, 4, "0.0015"),
        ("-2.5E2", 5, 1, "-250.0"),
    ];
    for (input, precision, scale, expected) in cases {
        let shape = FieldShape::new(precision as usize).with_precision(precision, scale);
        let mut data = SqlData::for_native(NATIVE_NUMERIC, shape, &settings).unwrap();
        data.set(SqlValue::from(input), None).unwrap();
        assert_eq!(data.get_string().unwrap().as_deref(), Some(expected), "{}", input);
        assert_eq!(data.truncated(), 0);
    }
}

#[test]
fn test_character_truncation_accounting() {
    let settings = ConversionSettings::default();
    let mut data =
        SqlData::for_native(NATIVE_CHAR, FieldShape::new(5).with_ccsid(37), &settings).unwrap();
    data.set(SqlValue::from("ABCDEFGH"), None).unwrap();
    assert_eq!(data.get_string().unwrap().as_deref(), Some("ABCDE"));
    assert_eq!(data.truncated(), 3);
}

/// Write a value, read it back into a fresh holder, write again.
fn reencode(native_type: u16, shape: FieldShape, value: SqlValue) -> (Vec<u8>, Vec<u8>, SqlData) {
    let settings = ConversionSettings::default();
    let table = ConvTable::new(CCSID_NO_CONVERSION).unwrap();
    let mut source = SqlData::for_native(native_type, shape, &settings).unwrap();
    source.set(value, None).unwrap();
    let mut first = vec![0u8; shape.length];
    source.convert_to_raw_bytes(&mut first, 0, &table).unwrap();

    let mut target = SqlData::for_native(native_type, shape, &settings).unwrap();
    target.convert_from_raw_bytes(&first, 0, &table).unwrap();
    let mut second = vec![0u8; shape.length];
    target.convert_to_raw_bytes(&mut second, 0, &table).unwrap();
    (first, second, target)
}

#[test]
fn test_fixed_width_numbers_reencode_bit_for_bit() {
    for scale in 0..=3u32 {
        for text in ["0", "1", "-1", "12.345", "-9.87"] {
            let value = BigDecimal::from_str(text).unwrap();
            for (native_type, length, precision) in [
                (NATIVE_SMALLINT, 2, 4),
                (NATIVE_INTEGER, 4, 9),
                (NATIVE_BIGINT, 8, 18),
                (NATIVE_DECIMAL, 5, 9),
                (NATIVE_NUMERIC, 9, 9),
            ] {
                let shape = FieldShape::new(length).with_precision(precision, scale);
                let (first, second, target) =
                    reencode(native_type, shape, SqlValue::Decimal(value.clone()));
                assert_eq!(first, second, "type {} scale {} value {}", native_type, scale, text);
                let (expected, _) =
                    ibmi_datastream_rs::protocol::decode::truncate_scale(value.clone(), scale);
                assert_eq!(target.get_decimal().unwrap(), Some(expected));
            }
        }
    }
}

#[test]
fn test_wide_decimals_reencode_bit_for_bit() {
    let cases = [
        (NATIVE_DECIMAL, 16, 31, 0, "1000000000000000000000000000000"),
        (NATIVE_DECIMAL, 16, 31, 5, "-12345678901234567890123456.78901"),
        (NATIVE_NUMERIC, 40, 40, 10, "123456789012345678901234567890.1234567890"),
        (
            NATIVE_DECIMAL,
            32,
            63,
            0,
            "999999999999999999999999999999999999999999999999999999999999999",
        ),
    ];
    for (native_type, length, precision, scale, text) in cases {
        let value = BigDecimal::from_str(text).unwrap();
        let shape = FieldShape::new(length).with_precision(precision, scale);
        let (first, second, target) =
            reencode(native_type, shape, SqlValue::Decimal(value.clone()));
        assert_eq!(first, second, "{}", text);
        assert_eq!(target.get_decimal().unwrap(), Some(value));
        assert_eq!(target.get_string().unwrap().as_deref(), Some(text));
        assert_eq!(target.truncated(), 0);
    }
}

#[test]
fn test_floats_reencode_bit_for_bit() {
    for value in [0.0, -0.5, 1.0e10, f64::MIN_POSITIVE, f64::INFINITY] {
        let (first, second, target) =
            reencode(NATIVE_FLOAT, FieldShape::new(8), SqlValue::Double(value));
        assert_eq!(first, second);
        assert_eq!(target.get_f64().unwrap(), Some(value));
    }
    let (first, second, target) =
        reencode(NATIVE_FLOAT, FieldShape::new(4), SqlValue::Double(1.5));
    assert_eq!(first, second);
    assert_eq!(target.sql_type(), SqlType::Real);
    assert_eq!(target.get_f32().unwrap(), Some(1.5));
}

#[test]
fn test_integer_overflow_is_out_of_range() {
    let settings = ConversionSettings::default();
    let mut data = SqlData::for_native(NATIVE_SMALLINT, FieldShape::new(2), &settings).unwrap();
    assert!(matches!(
        data.set(SqlValue::Int(40_000), None),
        Err(Error::OutOfRange { .. })
    ));
    assert!(data.is_null());
}

#[test]
fn test_translate_binary_setting() {
    let shape = FieldShape::new(4).with_ccsid(CCSID_NO_CONVERSION);
    let raw = SqlData::for_native(NATIVE_CHAR, shape, &ConversionSettings::default()).unwrap();
    assert_eq!(raw.sql_type(), SqlType::CharForBitData);

    let settings = ConversionSettings::parse("translate binary=true").unwrap();
    let mut text = SqlData::for_native(NATIVE_CHAR, shape, &settings).unwrap();
    assert_eq!(text.sql_type(), SqlType::Char);

    let cache = Arc::new(ConvTableCache::new());
    let table = cache.get(text.table_ccsid()).unwrap();
    text.convert_from_raw_bytes(&[0xC1, 0xC2, 0xC3, 0xC4], 0, &table).unwrap();
    assert_eq!(text.get_string().unwrap().as_deref(), Some("ABCD"));
}
