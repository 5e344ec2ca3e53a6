use super::CurrencyFormat;
use crate::error::CodecError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Largest magnitude an `f64` holds with integer precision.
pub const MAX_FORMATTABLE_AMOUNT: f64 = 9_007_199_254_740_991.0;

// Far below half a cent; also keeps the decimal text within Decimal's 28-digit scale.
const NEGLIGIBLE_AMOUNT: f64 = 1e-9;

/// Rounds `amount` to whole cents, half away from zero.
///
/// Rounding is applied to the shortest decimal text that reproduces the float
/// (`1234.565` rather than its binary expansion `1234.56499…`).
pub(crate) fn to_cents(amount: f64) -> Result<i64, CodecError> {
    if !amount.is_finite() || amount.abs() > MAX_FORMATTABLE_AMOUNT {
        tracing::warn!("Rejecting amount {} for formatting", amount);
        return Err(CodecError::InvalidAmount(amount));
    }
    if amount.abs() < NEGLIGIBLE_AMOUNT {
        return Ok(0);
    }

    // f64 Display never uses exponent notation.
    let exact = Decimal::from_str(&amount.to_string()).map_err(|e| {
        tracing::warn!("Amount {} has no decimal representation: {}", amount, e);
        CodecError::InvalidAmount(amount)
    })?;
    let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    (rounded * Decimal::ONE_HUNDRED)
        .trunc()
        .to_i64()
        .ok_or(CodecError::InvalidAmount(amount))
}

pub(crate) fn render(cents: i64, format: &CurrencyFormat, with_symbol: bool) -> String {
    let magnitude = cents.unsigned_abs();
    let integer = group_digits(magnitude / 100, format.group_separator());
    let fraction = magnitude % 100;

    let mut out = String::with_capacity(integer.len() + format.symbol().len() + 5);
    if cents < 0 {
        out.push('-');
    }
    if with_symbol {
        out.push_str(format.symbol());
        if format.space_after_symbol() {
            out.push(' ');
        }
    }
    out.push_str(&integer);
    out.push(format.decimal_separator());
    out.push_str(&format!("{:02}", fraction));
    out
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}
