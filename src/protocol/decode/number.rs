//! Exact decimal helpers shared by the numeric field types.
//!
//! Decimals are held as [`BigDecimal`] so that every precision the host
//! can declare (up to 63 digits) survives a round trip.

use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode};

use crate::error::{Error, Result};
use crate::protocol::constants::MAX_DECIMAL_PRECISION;

/// Rewrite scientific notation as plain decimal text.
///
/// `"1.5E3"` becomes `"1500.0"`, `"1.5E-3"` becomes `"0.0015"`. Text without
/// an exponent is returned unchanged. The digits are moved, never
/// multiplied, so no floating-point error is introduced.
///
/// # Errors
/// Returns `Error::OutOfRange` when the exponent would move the decimal
/// point more than 63 places past the digits given.
pub fn normalize_scientific(text: &str) -> Result<String> {
    let text = text.trim();
    let Some(e_pos) = text.find(|c: char| c == 'E' || c == 'e') else {
        return Ok(text.to_string());
    };
    let (mantissa, exponent_text) = (&text[..e_pos], &text[e_pos + 1..]);
    let exponent = match exponent_text.trim_start_matches('+').parse::<i64>() {
        Ok(exponent) => exponent,
        Err(_) if is_signed_digits(exponent_text) => {
            return Err(Error::out_of_range(format!("exponent of {:?} is too large", text)));
        }
        Err(_) => return Ok(text.to_string()),
    };

    let (negative, mantissa) = match mantissa.as_bytes().first() {
        Some(b'-') => (true, &mantissa[1..]),
        Some(b'+') => (false, &mantissa[1..]),
        _ => (false, mantissa),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{}{}", int_part, frac_part);

    let limit = i64::from(MAX_DECIMAL_PRECISION);
    let point = i64::try_from(int_part.len())
        .ok()
        .and_then(|len| len.checked_add(exponent))
        .filter(|point| *point >= -limit && *point <= digits.len() as i64 + limit)
        .ok_or_else(|| Error::out_of_range(format!("exponent of {:?} is too large", text)))?;

    let mut result = String::with_capacity(digits.len() + limit as usize + 4);
    if negative {
        result.push('-');
    }
    if point <= 0 {
        result.push_str("0.");
        result.extend(std::iter::repeat('0').take(point.unsigned_abs() as usize));
        result.push_str(&digits);
    } else if point as usize >= digits.len() {
        result.push_str(&digits);
        result.extend(std::iter::repeat('0').take(point as usize - digits.len()));
        result.push_str(".0");
    } else {
        let (whole, frac) = digits.split_at(point as usize);
        result.push_str(whole);
        result.push('.');
        result.push_str(frac);
    }
    Ok(result)
}

fn is_signed_digits(text: &str) -> bool {
    let unsigned = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit())
}

/// Parse numeric text (plain or scientific) into an exact decimal.
pub fn parse_decimal(text: &str) -> Result<BigDecimal> {
    let plain = normalize_scientific(text)?;
    BigDecimal::from_str(&plain).map_err(|_| Error::mismatch(format!("not a number: {:?}", text)))
}

/// Exact decimal for a double, using its shortest round-trip text.
pub fn decimal_from_f64(value: f64) -> Result<BigDecimal> {
    if !value.is_finite() {
        return Err(Error::out_of_range(format!("{} has no decimal value", value)));
    }
    parse_decimal(&value.to_string())
}

/// Plain text of a decimal, keeping its scale: `1.50` stays `"1.50"`.
pub fn format_decimal(value: &BigDecimal) -> String {
    let (mantissa, scale) = value.as_bigint_and_exponent();
    let negative = mantissa.sign() == bigdecimal::num_bigint::Sign::Minus;
    let mut digits = mantissa.magnitude().to_string();
    if scale <= 0 {
        digits.extend(std::iter::repeat('0').take(scale.unsigned_abs() as usize));
    } else {
        let scale = scale as usize;
        if digits.len() <= scale {
            let zeros = scale + 1 - digits.len();
            digits.insert_str(0, &"0".repeat(zeros));
        }
        digits.insert(digits.len() - scale, '.');
    }
    if negative {
        digits.insert(0, '-');
    }
    digits
}

/// Number of significant digits, ignoring sign, leading zeros, and the
/// scale's trailing zeros.
pub fn significant_digits(value: &BigDecimal) -> usize {
    let (mantissa, _) = value.as_bigint_and_exponent();
    let magnitude = mantissa.magnitude();
    if magnitude.bits() == 0 {
        return 0;
    }
    magnitude.to_string().len()
}

/// Drop fraction digits beyond `scale`. Returns the value and the number of
/// digits dropped.
pub fn truncate_scale(value: BigDecimal, scale: u32) -> (BigDecimal, usize) {
    let target = i64::from(scale);
    let (_, current) = value.as_bigint_and_exponent();
    if current <= target {
        return (value.with_scale(target), 0);
    }
    let truncated = value.with_scale_round(target, RoundingMode::Down);
    (truncated, (current - target) as usize)
}

/// Keep at most `precision` low-order digits. Returns the value and the
/// number of high-order digits dropped.
pub fn truncate_precision(value: BigDecimal, precision: u32) -> (BigDecimal, usize) {
    let digits = significant_digits(&value);
    if digits <= precision as usize {
        return (value, 0);
    }
    let dropped = digits - precision as usize;
    let (mantissa, scale) = value.into_bigint_and_exponent();
    let modulus = BigInt::from(10u8).pow(precision);
    (BigDecimal::new(mantissa % modulus, scale), dropped)
}
