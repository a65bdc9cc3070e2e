//! Built-in validation rules.
//!
//! Each constructor returns a ready-to-share [`Validator`]. Messages are
//! always supplied by the caller.

use email_address::EmailAddress;
use regex::Regex;

use super::Validator;

/// Require the string to be non-blank.
pub fn required(message: impl Into<String>) -> Validator<String> {
    Validator::new(|value: &String, _cx| !value.trim().is_empty(), message)
}

/// Require minimum length (in characters).
pub fn min_length(min: usize, message: impl Into<String>) -> Validator<String> {
    Validator::new(move |value: &String, _cx| value.chars().count() >= min, message)
}

/// Require maximum length (in characters).
pub fn max_length(max: usize, message: impl Into<String>) -> Validator<String> {
    Validator::new(move |value: &String, _cx| value.chars().count() <= max, message)
}

/// Require the value to match a regex pattern.
///
/// # Panics
///
/// Panics if `pattern` is not a valid regular expression.
pub fn pattern(pattern: &str, message: impl Into<String>) -> Validator<String> {
    let re = Regex::new(pattern).expect("Invalid regex pattern");
    Validator::new(move |value: &String, _cx| re.is_match(value), message)
}

/// Require a syntactically valid email address.
///
/// Empty input passes; combine with [`required`] to reject it.
pub fn email(message: impl Into<String>) -> Validator<String> {
    Validator::new(
        |value: &String, _cx| value.is_empty() || EmailAddress::is_valid(value),
        message,
    )
}

/// Require the value to equal another value.
pub fn equals(other: impl Into<String>, message: impl Into<String>) -> Validator<String> {
    let other = other.into();
    Validator::new(move |value: &String, _cx| value == &other, message)
}

/// Require the value to contain a substring.
pub fn contains(substr: impl Into<String>, message: impl Into<String>) -> Validator<String> {
    let substr = substr.into();
    Validator::new(move |value: &String, _cx| value.contains(&substr), message)
}

/// Require the value to fall within an inclusive range.
pub fn range<T>(range: std::ops::RangeInclusive<T>, message: impl Into<String>) -> Validator<T>
where
    T: PartialOrd + Send + Sync + 'static,
{
    Validator::new(move |value: &T, _cx| range.contains(value), message)
}

/// Wrap a bare predicate into a validator.
pub fn custom<T: 'static>(
    predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    message: impl Into<String>,
) -> Validator<T> {
    Validator::new(move |value, _cx| predicate(value), message)
}
