use std::{num::ParseIntError, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{LENGTH_SEPARATOR, RANGE_SEPARATOR, prelude::*};

/// A run of whole Gregorian years, `[start, start + years)`.
/// Always covers at least one year, from January 1 of `start` through
/// December 31 of the last year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}/{}", start, "last.year()")]
pub struct YearSpan {
    start: i32,
    years: u16,
    first: NaiveDate,
    last:  NaiveDate,
}

/// Error type for year span operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Span of zero years.
    #[error("Empty year span starting at {0}")]
    EmptySpan(i32),

    /// End year before start year.
    #[error("Invalid year span: start ({start}) is after end ({end})")]
    InvalidRange { start: i32, end: i32 },

    /// Span leaves the representable date range.
    #[error("Year span out of range: {years} years from {start}")]
    OutOfRange { start: i32, years: u16 },

    /// Error parsing a year or length.
    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    /// Invalid span format.
    #[error("Invalid year span format: {0}")]
    InvalidFormat(String),
}

impl YearSpan {
    /// Creates a span of `years` Gregorian years starting at `start`.
    ///
    /// # Errors
    /// Returns `SpanError::EmptySpan` if `years` is 0 and
    /// `SpanError::OutOfRange` if the span leaves the supported date range.
    pub fn new(start: i32, years: u16) -> Result<Self, SpanError> {
        if years == 0 {
            return Err(SpanError::EmptySpan(start));
        }
        let out_of_range = SpanError::OutOfRange { start, years };
        let end = start
            .checked_add(i32::from(years) - 1)
            .ok_or_else(|| out_of_range.clone())?;
        let first = NaiveDate::from_ymd_opt(start, 1, 1).ok_or_else(|| out_of_range.clone())?;
        let last = NaiveDate::from_ymd_opt(end, 12, 31).ok_or(out_of_range)?;
        Ok(Self {
            start,
            years,
            first,
            last,
        })
    }

    /// Creates the span covering `start..=end`.
    ///
    /// # Errors
    /// Returns `SpanError::InvalidRange` if `start > end`, otherwise as [`YearSpan::new`].
    pub fn inclusive(start: i32, end: i32) -> Result<Self, SpanError> {
        if start > end {
            return Err(SpanError::InvalidRange { start, end });
        }
        let years = u16::try_from(i64::from(end) - i64::from(start) + 1).map_err(|_| {
            SpanError::OutOfRange {
                start,
                years: u16::MAX,
            }
        })?;
        Self::new(start, years)
    }

    /// Returns the first Gregorian year
    pub const fn start(&self) -> i32 {
        self.start
    }

    /// Returns the number of years covered
    pub const fn years(&self) -> u16 {
        self.years
    }

    /// Returns the last Gregorian year (inclusive)
    pub fn end_inclusive(&self) -> i32 {
        self.last.year()
    }

    /// Checks if the span covers a Gregorian year
    pub fn contains_year(&self, year: i32) -> bool {
        self.start <= year && year <= self.end_inclusive()
    }

    /// January 1 of the first year
    pub const fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// December 31 of the last year
    pub const fn last_day(&self) -> NaiveDate {
        self.last
    }

    /// Every day of the span, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let last = self.last;
        self.first.iter_days().take_while(move |d| *d <= last)
    }
}

impl FromStr for YearSpan {
    type Err = SpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SpanError::InvalidFormat(s.to_owned()));
        }

        if let Some((start, end)) = trimmed.split_once(RANGE_SEPARATOR) {
            if end.contains(RANGE_SEPARATOR) || end.contains(LENGTH_SEPARATOR) {
                return Err(SpanError::InvalidFormat(format!(
                    "Too many separators: {s}"
                )));
            }
            return Self::inclusive(start.trim().parse()?, end.trim().parse()?);
        }

        // Skip the first character so a leading sign isn't taken as a separator
        if let Some(pos) = trimmed
            .char_indices()
            .skip(1)
            .find_map(|(i, c)| (c == LENGTH_SEPARATOR).then_some(i))
        {
            let start = trimmed[..pos].trim().parse()?;
            let years = trimmed[pos + 1..].trim().parse()?;
            return Self::new(start, years);
        }

        // No separator, single year
        Self::new(trimmed.parse()?, 1)
    }
}

impl Serialize for YearSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
