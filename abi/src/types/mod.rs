mod booking;
mod chain;
mod employee;
mod hotel;
mod rental;
mod room;
mod room_search;

use std::{fmt::Display, str::FromStr};

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer};

pub use booking::*;
pub use chain::*;
pub use employee::*;
pub use hotel::*;
pub use rental::*;
pub use room::*;
pub use room_search::*;

use crate::Error;

/// parse a calendar date, accepting `2023-03-06` as well as `2023.03.06`
pub fn parse_date(s: &str) -> Result<NaiveDate, Error> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y.%m.%d"))
        .map_err(|_| Error::Validation(format!("invalid date: {}", s)))
}

/// stays are half-open `[start, end)`, so an empty or inverted range is rejected
pub fn validate_range(start: NaiveDate, end: NaiveDate) -> Result<(), Error> {
    if start >= end {
        return Err(Error::InvalidDateRange);
    }
    Ok(())
}

pub(crate) fn require(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub(crate) fn non_negative<T>(field: &str, value: T) -> Result<(), Error>
where
    T: PartialOrd + Default + Display,
{
    if value < T::default() {
        return Err(Error::Validation(format!(
            "{} must not be negative, got {}",
            field, value
        )));
    }
    Ok(())
}

/// money amounts: finite and not negative, NaN and inf parse as f64 but are not prices
pub(crate) fn price(field: &str, value: f64) -> Result<(), Error> {
    if !value.is_finite() {
        return Err(Error::Validation(format!(
            "{} must be a finite number, got {}",
            field, value
        )));
    }
    non_negative(field, value)
}

pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_date(&s).map_err(de::Error::custom)
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => parse_date(&s).map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}

/// query strings send `field=` for untouched inputs, treat those as absent
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => s.trim().parse().map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}

pub(crate) fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(de::Error::custom(format!("invalid flag: {}", other))),
    }
}

/// `wifi,tv,PS5` on the wire, a sorted set of names in storage
pub(crate) fn deserialize_amenities<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(split_amenities(&s))
}

pub(crate) fn split_amenities(s: &str) -> Vec<String> {
    let mut amenities: Vec<String> = s
        .split(',')
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .map(String::from)
        .collect();
    amenities.sort();
    amenities.dedup();
    amenities
}
