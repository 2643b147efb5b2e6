//! Zoned decimal (NUMERIC) codec.
//!
//! One byte per digit: the low nibble is the digit, the high nibble the
//! zone (`0xF` in EBCDIC). The zone of the last byte carries the sign, with
//! `0xB` and `0xD` meaning negative.

use std::panic::Location;

use bigdecimal::num_bigint::Sign;
use bigdecimal::BigDecimal;

use super::packed::{from_digits, to_digits};
use crate::error::{Error, Result};

const ZONE: u8 = 0xF0;
const ZONE_NEGATIVE: u8 = 0xD0;

/// Decode a zoned decimal.
pub fn decode_zoned(data: &[u8], scale: u32) -> Result<BigDecimal> {
    let Some(&last) = data.last() else {
        return Err(Error::protocol("zoned decimal is empty"));
    };

    let mut digits = Vec::with_capacity(data.len());
    for &byte in data {
        let digit = byte & 0x0F;
        if digit > 9 {
            return Err(Error::protocol(format!(
                "invalid zoned digit 0x{:02X} in {:02X?}",
                byte, data
            )));
        }
        digits.push(digit);
    }

    let sign = match last >> 4 {
        0x0B | 0x0D => Sign::Minus,
        0x0A | 0x0C | 0x0E | 0x0F => Sign::Plus,
        // ASCII digits (0x3n) show up from some host tools
        0x03 => Sign::Plus,
        zone => {
            return Err(Error::protocol(format!("invalid zoned sign 0x{:X}", zone)));
        }
    };
    Ok(BigDecimal::new(from_digits(sign, &digits)?, i64::from(scale)))
}

/// Encode `value` as a zoned decimal of `precision` bytes into `out`.
#[track_caller]
pub fn encode_zoned(value: &BigDecimal, precision: u32, scale: u32, out: &mut [u8]) -> Result<()> {
    let length = precision as usize;
    if out.len() < length {
        return Err(Error::BufferTooSmall {
            needed: length,
            available: out.len(),
            location: Location::caller(),
        });
    }

    let (sign, digits) = to_digits(value, precision, scale, "NUMERIC")?;

    let out = &mut out[..length];
    out.fill(ZONE);
    let start = length.saturating_sub(digits.len());
    for (slot, &digit) in out[start..].iter_mut().zip(&digits) {
        *slot = ZONE | digit;
    }
    if sign == Sign::Minus {
        if let Some(last) = out.last_mut() {
            *last = ZONE_NEGATIVE | (*last & 0x0F);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(text: &str) -> BigDecimal {
        BigDecimal::from_str(text).unwrap()
    }

    #[test]
    fn test_decode_zoned() {
        assert_eq!(
            decode_zoned(&[0xF0, 0xF1, 0xF2, 0xF5], 1).unwrap(),
            dec("12.5")
        );
        assert_eq!(
            decode_zoned(&[0xF4, 0xD2], 0).unwrap(),
            BigDecimal::from(-42)
        );
    }

    #[test]
    fn test_decode_rejects_bad_digit() {
        assert!(matches!(decode_zoned(&[0xFA], 0), Err(Error::Protocol { .. })));
        assert!(decode_zoned(&[], 0).is_err());
    }

    #[test]
    fn test_encode_zoned() {
        let mut out = [0u8; 5];
        encode_zoned(&dec("-3.14"), 5, 2, &mut out).unwrap();
        assert_eq!(out, [0xF0, 0xF0, 0xF3, 0xF1, 0xD4]);

        let mut out = [0u8; 3];
        encode_zoned(&BigDecimal::from(0), 3, 0, &mut out).unwrap();
        assert_eq!(out, [0xF0, 0xF0, 0xF0]);
    }

    #[test]
    fn test_encode_overflow() {
        let mut out = [0u8; 2];
        assert!(matches!(
            encode_zoned(&BigDecimal::from(123), 2, 0, &mut out),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_forty_digit_numeric() {
        let value = dec("-123456789012345678901234567890.1234567890");
        let mut out = [0u8; 40];
        encode_zoned(&value, 40, 10, &mut out).unwrap();
        assert_eq!(out[0], 0xF1);
        assert_eq!(out[39], 0xD0);
        assert_eq!(decode_zoned(&out, 10).unwrap(), value);
    }
}
