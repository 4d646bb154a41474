//! Canonical text forms for amounts, dates and timestamps
//!
//! pain messages carry money as fixed-point decimal text and dates as ISO
//! strings. Amounts stay in [`Decimal`] end to end so that a render/parse
//! cycle is lossless.

use crate::error::{FormatError, FormatKind};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits carried by every amount on the wire
pub const AMOUNT_SCALE: u32 = 2;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// 'd' = ASCII digit, anything else must match literally
const DATE_SHAPE: &str = "dddd-dd-dd";
const TIMESTAMP_SHAPE: &str = "dddd-dd-ddTdd:dd:dd";

/// Render an amount with exactly two fractional digits ("100.00")
///
/// Fails for amounts too large to carry two fractional digits within the
/// 96-bit decimal mantissa.
pub fn render_amount(amount: Decimal) -> Result<String, FormatError> {
    let rounded =
        amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    let mut fixed = rounded;
    fixed.rescale(AMOUNT_SCALE);

    if fixed.scale() != AMOUNT_SCALE || fixed != rounded {
        return Err(FormatError::new(FormatKind::Amount, &amount.to_string()));
    }
    Ok(fixed.to_string())
}

/// Parse a wire amount
///
/// Accepts `digits` or `digits.digits`. Signs, exponents, whitespace and
/// grouping separators are rejected.
pub fn parse_amount(value: &str) -> Result<Decimal, FormatError> {
    let err = || FormatError::new(FormatKind::Amount, value);

    let (int_part, frac_part) = match value.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (value, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !frac_part.map_or(true, all_digits) {
        return Err(err());
    }

    Decimal::from_str_exact(value).map_err(|_| err())
}

/// Render a calendar date as `YYYY-MM-DD`
pub fn render_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate, FormatError> {
    if !matches_shape(value, DATE_SHAPE) {
        return Err(FormatError::new(FormatKind::Date, value));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| FormatError::new(FormatKind::Date, value))
}

/// Render a timestamp as `YYYY-MM-DDTHH:MM:SS`, dropping sub-second precision
pub fn render_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DDTHH:MM:SS` timestamp
///
/// Offsets (`Z`, `+01:00`) and fractional seconds are rejected.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, FormatError> {
    if !matches_shape(value, TIMESTAMP_SHAPE) {
        return Err(FormatError::new(FormatKind::Timestamp, value));
    }
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|_| FormatError::new(FormatKind::Timestamp, value))
}

fn matches_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape.bytes()).all(|(v, s)| match s {
            b'd' => v.is_ascii_digit(),
            literal => v == literal,
        })
}
