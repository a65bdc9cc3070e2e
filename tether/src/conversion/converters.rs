//! Built-in converters.
//!
//! Each constructor returns a ready-to-share [`Converter`] between a
//! string field and a typed model value. The supplied message is used for
//! malformed input and doubles as the panic fallback.

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::Converter;

/// String to any `FromStr` model type.
///
/// Input is trimmed before parsing; the presentation direction uses the
/// model's `Display`.
pub fn parsed<T>(message: impl Into<String>) -> Converter<String, T>
where
    T: FromStr + Display + 'static,
{
    let message = message.into();
    let parse_message = message.clone();
    Converter::new(
        move |value: &String, _cx| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| parse_message.clone())
        },
        |model: &T, _cx| model.to_string(),
    )
    .with_fallback(message)
}

/// String to [`Decimal`], for money-like amounts.
pub fn decimal(message: impl Into<String>) -> Converter<String, Decimal> {
    parsed::<Decimal>(message)
}

/// String to [`NaiveDate`] using an explicit chrono format string.
pub fn date(format: &str, message: impl Into<String>) -> Converter<String, NaiveDate> {
    let present_format = format.to_string();
    let parse_format = format.to_string();
    let message = message.into();
    let parse_message = message.clone();
    Converter::new(
        move |value: &String, _cx| {
            NaiveDate::parse_from_str(value.trim(), &parse_format)
                .map_err(|_| parse_message.clone())
        },
        move |model: &NaiveDate, _cx| model.format(&present_format).to_string(),
    )
    .with_fallback(message)
}

/// Whitespace-trimming string pass-through.
pub fn trimmed() -> Converter<String, String> {
    Converter::new(
        |value: &String, _cx| Ok(value.trim().to_string()),
        |model: &String, _cx| model.clone(),
    )
}
