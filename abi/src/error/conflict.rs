// "Key (room_id, daterange(start_date, end_date, '[)'::text))=(1, [2023-03-06,2023-03-14)) conflicts with existing key (room_id, daterange(start_date, end_date, '[)'::text))=(1, [2023-03-01,2023-03-10))."

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::{convert::Infallible, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BookingConflictInfo {
    Parsed(BookingConflict),
    Unparsed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingConflict {
    pub new: BookingWindow,
    pub old: BookingWindow,
}

/// half-open `[start, end)` stay of a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingWindow {
    pub room_id: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FromStr for BookingConflictInfo {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl From<&str> for BookingConflictInfo {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(conflict) => Self::Parsed(conflict),
            Err(_) => Self::Unparsed(s.to_string()),
        }
    }
}

impl FromStr for BookingConflict {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re = Regex::new(
            r"=\((?P<room>\d+),\s*\[(?P<start>\d{4}-\d{2}-\d{2}),(?P<end>\d{4}-\d{2}-\d{2})\)\)",
        )
        .map_err(|_| ())?;

        let mut windows = re
            .captures_iter(s)
            .map(|cap| {
                Ok(BookingWindow {
                    room_id: cap["room"].parse().map_err(|_| ())?,
                    start: parse_date(&cap["start"])?,
                    end: parse_date(&cap["end"])?,
                })
            })
            .collect::<Result<Vec<_>, ()>>()?;

        if windows.len() != 2 {
            return Err(());
        }
        let old = windows.pop().ok_or(())?;
        let new = windows.pop().ok_or(())?;
        Ok(Self { new, old })
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, ()> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ())
}
