//! Packed decimal (DECIMAL) codec.
//!
//! A packed decimal of precision `p` occupies `p / 2 + 1` bytes. Each byte
//! holds two BCD digits, most significant first; the low nibble of the last
//! byte is the sign:
//! - `0xA`, `0xC`, `0xE`, `0xF`: positive
//! - `0xB`, `0xD`: negative
//!
//! An even precision leaves one leading pad nibble, always written as zero.

use std::panic::Location;

use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::{BigDecimal, RoundingMode};

use crate::error::{Error, Result};

const SIGN_POSITIVE: u8 = 0x0F;
const SIGN_NEGATIVE: u8 = 0x0D;

/// Bytes needed for a packed decimal of `precision` digits.
pub fn packed_length(precision: u32) -> usize {
    precision as usize / 2 + 1
}

/// Decode a packed decimal.
///
/// # Errors
/// Returns `Error::Protocol` for a digit nibble above 9 or an invalid sign
/// nibble.
///
/// # Example
/// ```ignore
/// let value = decode_packed(&[0x12, 0x34, 0x5C], 2)?;
/// // Returns: 123.45
/// ```
pub fn decode_packed(data: &[u8], scale: u32) -> Result<BigDecimal> {
    let Some((&last, leading)) = data.split_last() else {
        return Err(Error::protocol("packed decimal is empty"));
    };

    let digits: Vec<u8> = leading
        .iter()
        .flat_map(|&b| [b >> 4, b & 0x0F])
        .chain(std::iter::once(last >> 4))
        .collect();
    if let Some(nibble) = digits.iter().find(|&&d| d > 9) {
        return Err(Error::protocol(format!(
            "invalid packed digit 0x{:X} in {:02X?}",
            nibble, data
        )));
    }

    let sign = match last & 0x0F {
        0x0B | 0x0D => Sign::Minus,
        0x0A | 0x0C | 0x0E | 0x0F => Sign::Plus,
        sign => {
            return Err(Error::protocol(format!("invalid packed sign nibble 0x{:X}", sign)));
        }
    };
    Ok(BigDecimal::new(from_digits(sign, &digits)?, i64::from(scale)))
}

/// Integer from base-10 digits, most significant first.
pub(super) fn from_digits(sign: Sign, digits: &[u8]) -> Result<BigInt> {
    BigInt::from_radix_be(sign, digits, 10)
        .ok_or_else(|| Error::protocol(format!("invalid decimal digits {:?}", digits)))
}

/// Sign and base-10 digits of `value` at `scale`, most significant first.
///
/// Fails with `Error::OutOfRange` when more than `precision` digits are
/// needed.
pub(super) fn to_digits(
    value: &BigDecimal,
    precision: u32,
    scale: u32,
    kind: &str,
) -> Result<(Sign, Vec<u8>)> {
    let (mantissa, _) = value
        .with_scale_round(i64::from(scale), RoundingMode::Down)
        .into_bigint_and_exponent();
    let (sign, digits) = mantissa.to_radix_be(10);
    if sign != Sign::NoSign && digits.len() > precision as usize {
        return Err(Error::out_of_range(format!(
            "{} does not fit {}({}, {})",
            super::format_decimal(value),
            kind,
            precision,
            scale
        )));
    }
    Ok((sign, digits))
}

/// Encode `value` as a packed decimal into `out`.
///
/// The value is rescaled to `scale` first; callers truncate beforehand when
/// they need to count dropped digits.
///
/// # Errors
/// Returns `Error::BufferTooSmall` if `out` is shorter than
/// [`packed_length`], and `Error::OutOfRange` if the value needs more than
/// `precision` digits.
#[track_caller]
pub fn encode_packed(value: &BigDecimal, precision: u32, scale: u32, out: &mut [u8]) -> Result<()> {
    let length = packed_length(precision);
    if out.len() < length {
        return Err(Error::BufferTooSmall {
            needed: length,
            available: out.len(),
            location: Location::caller(),
        });
    }

    let (sign, digits) = to_digits(value, precision, scale, "DECIMAL")?;

    let out = &mut out[..length];
    out.fill(0);
    out[length - 1] = if sign == Sign::Minus { SIGN_NEGATIVE } else { SIGN_POSITIVE };

    // Nibble positions counted from the sign nibble leftwards.
    for (i, &digit) in digits.iter().rev().enumerate() {
        let nibble_pos = 2 * length - 2 - i;
        let byte = &mut out[nibble_pos / 2];
        if nibble_pos % 2 == 0 {
            *byte |= digit << 4;
        } else {
            *byte |= digit;
        }
    }
    Ok(())
}
