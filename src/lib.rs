mod consts;
pub mod ics;
mod label;
mod prelude;
mod span;
mod types;

pub use consts::*;
pub use ics::{Calendar, Event, EventOptions, Recurrence, build_calendar};
pub use label::{description, label};
pub use span::{SpanError, YearSpan};
pub use types::{ComplementaryDay, Day, MetricError, Month, Year, is_sextile};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A date in the French Republican ("Metric") calendar.
///
/// Either one of the 360 days of the twelve thirty-day months, or one of the
/// five (six in sextile years) complementary days that close the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "MetricDateRepr", into = "MetricDateRepr")]
pub enum MetricDate {
    /// Day within one of the twelve regular months
    #[display(fmt = "Día {} de {} / Año {}", "day.get()", "month.name()", "year")]
    Day { year: Year, month: Month, day: Day },
    /// One of the days following Fructidor
    #[display(fmt = "{} / Año {}", "day.name()", "year")]
    Complementary { year: Year, day: ComplementaryDay },
}

/// How the first day of a Metric year is located in the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YearStart {
    /// Every Metric year starts on September 22.
    #[default]
    Fixed,
    /// Like `Fixed`, but every date of Gregorian 2024 is counted from
    /// 2023-09-22. Dates from 2024-09-22 onward then fall past the end of the
    /// year and have no mapping.
    #[serde(rename = "legacy-2024-anchor")]
    Legacy2024Anchor,
}

/// Error type for Gregorian to Metric conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The day offset within the Metric year has no month or complementary slot.
    #[error("No Metric date for day {day_of_year} of year {year}")]
    InvalidMetricMapping { year: i32, day_of_year: i64 },

    /// The start of the Metric year lies outside the representable date range.
    #[error("Date out of supported range: {date}")]
    OutOfRange { date: NaiveDate },
}

/// Converts a Gregorian date with the fixed September 22 year start.
///
/// Returns `None` when the date has no Metric mapping.
pub fn convert(date: NaiveDate) -> Option<MetricDate> {
    try_convert(date).ok()
}

/// Converts a Gregorian date under the given year-start policy.
pub fn convert_with(date: NaiveDate, year_start: YearStart) -> Option<MetricDate> {
    try_convert_with(date, year_start).ok()
}

/// Converts a Gregorian date, reporting why a date has no mapping.
///
/// # Errors
/// See [`try_convert_with`].
pub fn try_convert(date: NaiveDate) -> Result<MetricDate, ConversionError> {
    try_convert_with(date, YearStart::Fixed)
}

/// Converts a Gregorian date under the given year-start policy.
///
/// # Errors
/// Returns `ConversionError::InvalidMetricMapping` when the day offset has no
/// slot, e.g. the 366th day of a common year, and
/// `ConversionError::OutOfRange` when the year start cannot be represented.
pub fn try_convert_with(
    date: NaiveDate,
    year_start: YearStart,
) -> Result<MetricDate, ConversionError> {
    let this_start = gregorian_year_start(date.year(), date)?;
    let (year, start) = if date < this_start {
        (
            date.year() - EPOCH_OFFSET,
            gregorian_year_start(date.year() - 1, date)?,
        )
    } else {
        (date.year() - EPOCH_OFFSET + 1, this_start)
    };

    let start = match year_start {
        YearStart::Legacy2024Anchor if date.year() == LEGACY_ANCHOR_YEAR => {
            gregorian_year_start(LEGACY_ANCHOR_YEAR - 1, date)?
        }
        YearStart::Fixed | YearStart::Legacy2024Anchor => start,
    };

    let day_of_year = date.signed_duration_since(start).num_days() + 1;
    MetricDate::from_day_of_year(Year::new(year), day_of_year)
        .ok_or(ConversionError::InvalidMetricMapping { year, day_of_year })
}

/// Gregorian year whose 2024 dates the legacy policy re-anchors
const LEGACY_ANCHOR_YEAR: i32 = 2024;

fn gregorian_year_start(year: i32, date: NaiveDate) -> Result<NaiveDate, ConversionError> {
    NaiveDate::from_ymd_opt(year, YEAR_START_MONTH, YEAR_START_DAY)
        .ok_or(ConversionError::OutOfRange { date })
}

impl MetricDate {
    /// Builds the date at the 1-based `day_of_year` of `year`.
    ///
    /// Days 1-360 fall in the twelve months; 361 onward are complementary and
    /// only valid up to the year's complementary-day count.
    pub fn from_day_of_year(year: Year, day_of_year: i64) -> Option<Self> {
        let offset = u16::try_from(day_of_year).ok()?.checked_sub(1)?;
        if offset >= REGULAR_DAYS {
            let index = u8::try_from(offset + 1 - REGULAR_DAYS).ok()?;
            let day = ComplementaryDay::for_year(index, year).ok()?;
            return Some(Self::Complementary { year, day });
        }

        let per_month = u16::from(DAYS_PER_MONTH);
        let month = Month::new(u8::try_from(offset / per_month).ok()? + 1).ok()?;
        let day = Day::new(u8::try_from(offset % per_month).ok()? + 1).ok()?;
        Some(Self::Day { year, month, day })
    }

    /// Returns the Metric year
    pub const fn year(&self) -> Year {
        match *self {
            Self::Day { year, .. } | Self::Complementary { year, .. } => year,
        }
    }

    /// Whether this is one of the days following Fructidor
    pub const fn is_complementary(&self) -> bool {
        matches!(self, Self::Complementary { .. })
    }

    /// Returns the month component if present
    pub const fn month(&self) -> Option<Month> {
        match *self {
            Self::Day { month, .. } => Some(month),
            Self::Complementary { .. } => None,
        }
    }

    /// Returns the 1-based month index if present (as u8 for convenience)
    pub const fn month_index(&self) -> Option<u8> {
        match *self {
            Self::Day { month, .. } => Some(month.get()),
            Self::Complementary { .. } => None,
        }
    }

    /// Returns the French month name if present
    pub const fn month_name(&self) -> Option<&'static str> {
        match *self {
            Self::Day { month, .. } => Some(month.name()),
            Self::Complementary { .. } => None,
        }
    }

    /// Returns the month name, or "Días Complementarios" for complementary days
    pub const fn period_name(&self) -> &'static str {
        match *self {
            Self::Day { month, .. } => month.name(),
            Self::Complementary { .. } => COMPLEMENTARY_PERIOD_NAME,
        }
    }

    /// Returns the Spanish month description if present
    pub const fn month_description(&self) -> Option<&'static str> {
        match *self {
            Self::Day { month, .. } => Some(month.description()),
            Self::Complementary { .. } => None,
        }
    }

    /// Returns the day within the month if present (as u8 for convenience)
    pub const fn day(&self) -> Option<u8> {
        match *self {
            Self::Day { day, .. } => Some(day.get()),
            Self::Complementary { .. } => None,
        }
    }

    /// Returns the complementary day index if present
    pub const fn complementary_day_index(&self) -> Option<u8> {
        match *self {
            Self::Complementary { day, .. } => Some(day.get()),
            Self::Day { .. } => None,
        }
    }

    /// Returns the complementary day name if present
    pub const fn complementary_day_name(&self) -> Option<&'static str> {
        match *self {
            Self::Complementary { day, .. } => Some(day.name()),
            Self::Day { .. } => None,
        }
    }

    /// 1-based position of this date within its Metric year
    pub fn total_metric_day(&self) -> u16 {
        match *self {
            Self::Day { month, day, .. } => {
                (u16::from(month.get()) - 1) * u16::from(DAYS_PER_MONTH) + u16::from(day.get())
            }
            Self::Complementary { day, .. } => REGULAR_DAYS + u16::from(day.get()),
        }
    }
}

/// Flat wire form of [`MetricDate`]; deserializing re-validates the
/// complementary day against the year.
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum MetricDateRepr {
    Day { year: Year, month: Month, day: Day },
    Complementary { year: Year, day: u8 },
}

impl TryFrom<MetricDateRepr> for MetricDate {
    type Error = MetricError;

    fn try_from(repr: MetricDateRepr) -> Result<Self, Self::Error> {
        match repr {
            MetricDateRepr::Day { year, month, day } => Ok(Self::Day { year, month, day }),
            MetricDateRepr::Complementary { year, day } => Ok(Self::Complementary {
                year,
                day: ComplementaryDay::for_year(day, year)?,
            }),
        }
    }
}

impl From<MetricDate> for MetricDateRepr {
    fn from(date: MetricDate) -> Self {
        match date {
            MetricDate::Day { year, month, day } => Self::Day { year, month, day },
            MetricDate::Complementary { year, day } => Self::Complementary {
                year,
                day: day.get(),
            },
        }
    }
}
