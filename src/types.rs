use crate::consts::{
    COMPLEMENTARY_DAY_NAMES, COMPLEMENTARY_DAYS_COMMON, COMPLEMENTARY_DAYS_SEXTILE,
    DAYS_PER_MONTH, MONTHS, MONTHS_PER_YEAR, SEXTILE_CYCLE, SEXTILE_REMAINDER,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// Error type for the validating constructors of the Metric date components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MetricError {
    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MONTHS_PER_YEAR)]
    InvalidMonth(u8),

    /// Day outside `1..=30`.
    #[error("Invalid day: {0} (must be 1-{max})", max = DAYS_PER_MONTH)]
    InvalidDay(u8),

    /// Complementary day outside the range allowed for the year.
    #[error("Invalid complementary day {day} for year {year} (must be 1-{max})")]
    InvalidComplementaryDay { day: u8, year: i32, max: u8 },
}

/// A Metric year number.
///
/// Year 1 began in September 1792; years before that are zero or negative,
/// which is still arithmetically meaningful for the sextile rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// Creates a new Year
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Whether this year carries a sixth complementary day
    #[inline]
    pub const fn is_sextile(self) -> bool {
        is_sextile(self.0)
    }

    /// Number of complementary days following Fructidor in this year
    #[inline]
    pub const fn complementary_days(self) -> u8 {
        if self.is_sextile() {
            COMPLEMENTARY_DAYS_SEXTILE
        } else {
            COMPLEMENTARY_DAYS_COMMON
        }
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Metric month guaranteed to be in the range `1..=MONTHS_PER_YEAR` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MONTHS_PER_YEAR`
    ///
    /// # Errors
    /// Returns `MetricError::InvalidMonth` if the value is 0 or > `MONTHS_PER_YEAR`.
    pub fn new(value: u8) -> Result<Self, MetricError> {
        let non_zero = NonZeroU8::new(value).ok_or(MetricError::InvalidMonth(value))?;
        if value > MONTHS_PER_YEAR {
            return Err(MetricError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// French name of the month, e.g. "Vendémiaire"
    pub const fn name(self) -> &'static str {
        MONTHS[self.table_index()].0
    }

    /// Spanish description of the month, e.g. "Mes de la vendimia"
    pub const fn description(self) -> &'static str {
        MONTHS[self.table_index()].1
    }

    /// English meaning of the month name, e.g. "Vintage/Wine Harvest"
    pub const fn meaning(self) -> &'static str {
        MONTHS[self.table_index()].2
    }

    const fn table_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl TryFrom<u8> for Month {
    type Error = MetricError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A day within a Metric month, guaranteed to be in `1..=DAYS_PER_MONTH` (1..=30)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and <= `DAYS_PER_MONTH`
    ///
    /// # Errors
    /// Returns `MetricError::InvalidDay` if the value is 0 or > `DAYS_PER_MONTH`.
    pub fn new(value: u8) -> Result<Self, MetricError> {
        let non_zero = NonZeroU8::new(value).ok_or(MetricError::InvalidDay(value))?;
        if value > DAYS_PER_MONTH {
            return Err(MetricError::InvalidDay(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = MetricError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the days following Fructidor.
///
/// Context-free validation only admits `1..=6`; use [`ComplementaryDay::for_year`]
/// to also enforce the common-year limit of five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ComplementaryDay(NonZeroU8);

impl ComplementaryDay {
    /// Creates a complementary day valid for the given year
    ///
    /// # Errors
    /// Returns `MetricError::InvalidComplementaryDay` if the value is 0 or
    /// exceeds the number of complementary days in `year`.
    pub fn for_year(value: u8, year: Year) -> Result<Self, MetricError> {
        let max = year.complementary_days();
        let err = MetricError::InvalidComplementaryDay {
            day: value,
            year: year.get(),
            max,
        };
        let non_zero = NonZeroU8::new(value).ok_or(err)?;
        if value > max {
            return Err(err);
        }
        Ok(Self(non_zero))
    }

    /// Returns the complementary day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Name of the complementary day, e.g. "Jour de la Révolution"
    pub const fn name(self) -> &'static str {
        COMPLEMENTARY_DAY_NAMES[(self.0.get() - 1) as usize]
    }
}

impl TryFrom<u8> for ComplementaryDay {
    type Error = MetricError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't check the sextile limit without a year, so admit the largest one
        let err = MetricError::InvalidComplementaryDay {
            day: value,
            year: 0,
            max: COMPLEMENTARY_DAYS_SEXTILE,
        };
        let non_zero = NonZeroU8::new(value).ok_or(err)?;
        if value > COMPLEMENTARY_DAYS_SEXTILE {
            return Err(err);
        }
        Ok(Self(non_zero))
    }
}

impl From<ComplementaryDay> for u8 {
    fn from(day: ComplementaryDay) -> Self {
        day.0.get()
    }
}

impl fmt::Display for ComplementaryDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Helper functions

/// A Metric year is sextile when `year mod 4 == 3` (floored modulo).
pub const fn is_sextile(year: i32) -> bool {
    year.rem_euclid(SEXTILE_CYCLE) == SEXTILE_REMAINDER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sextile_cases() {
        struct TestCase {
            year: i32,
            sextile: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 3,
                sextile: true,
                description: "first sextile year of the Republic",
            },
            TestCase {
                year: 231,
                sextile: true,
                description: "231 mod 4 == 3",
            },
            TestCase {
                year: 232,
                sextile: false,
                description: "232 mod 4 == 0",
            },
            TestCase {
                year: 233,
                sextile: false,
                description: "233 mod 4 == 1",
            },
            TestCase {
                year: 234,
                sextile: false,
                description: "234 mod 4 == 2",
            },
            TestCase {
                year: 0,
                sextile: false,
                description: "year zero",
            },
            TestCase {
                year: -1,
                sextile: true,
                description: "floored modulo of a negative year",
            },
            TestCase {
                year: -2,
                sextile: false,
                description: "floored modulo of a negative year",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_sextile(case.year),
                case.sextile,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_is_sextile_matches_modulo_rule() {
        for y in -400..=400 {
            assert_eq!(is_sextile(y), y.rem_euclid(4) == 3, "Year {y}");
            assert_eq!(Year::new(y).is_sextile(), is_sextile(y));
        }
    }

    #[test]
    fn test_year_complementary_days() {
        assert_eq!(Year::new(231).complementary_days(), 6);
        assert_eq!(Year::new(232).complementary_days(), 5);
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(232);
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "232");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(MetricError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(MetricError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_names() {
        let first = Month::new(1).unwrap();
        assert_eq!(first.name(), "Vendémiaire");
        assert_eq!(first.description(), "Mes de la vendimia");
        assert_eq!(first.meaning(), "Vintage/Wine Harvest");

        let sixth = Month::new(6).unwrap();
        assert_eq!(sixth.name(), "Ventôse");
        assert_eq!(sixth.to_string(), "Ventôse");

        let last = Month::new(12).unwrap();
        assert_eq!(last.name(), "Fructidor");
    }

    #[test]
    fn test_month_serde_validation() {
        let month: Month = serde_json::from_str("6").unwrap();
        assert_eq!(month.get(), 6);
        assert!(serde_json::from_str::<Month>("13").is_err());
        assert!(serde_json::from_str::<Month>("0").is_err());
    }

    #[test]
    fn test_day_bounds() {
        assert!(Day::new(1).is_ok());
        assert!(Day::new(30).is_ok());
        assert!(matches!(Day::new(0), Err(MetricError::InvalidDay(0))));
        assert!(matches!(Day::new(31), Err(MetricError::InvalidDay(31))));
    }

    #[test]
    fn test_day_try_from_and_into() {
        let day: Day = 15.try_into().unwrap();
        let value: u8 = day.into();
        assert_eq!(value, 15);
        assert_eq!(day.to_string(), "15");
    }

    #[test]
    fn test_complementary_day_for_year() {
        let sextile = Year::new(231);
        let common = Year::new(232);

        for d in 1..=5 {
            assert!(ComplementaryDay::for_year(d, common).is_ok());
            assert!(ComplementaryDay::for_year(d, sextile).is_ok());
        }

        let sixth = ComplementaryDay::for_year(6, sextile).unwrap();
        assert_eq!(sixth.name(), "Jour de la Révolution");

        assert_eq!(
            ComplementaryDay::for_year(6, common),
            Err(MetricError::InvalidComplementaryDay {
                day: 6,
                year: 232,
                max: 5
            })
        );
        assert!(ComplementaryDay::for_year(0, sextile).is_err());
    }

    #[test]
    fn test_complementary_day_try_from() {
        let first: ComplementaryDay = 1.try_into().unwrap();
        assert_eq!(first.name(), "Primero de Días Complementarios");

        let result: Result<ComplementaryDay, _> = 7.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MetricError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            MetricError::InvalidComplementaryDay {
                day: 6,
                year: 232,
                max: 5
            }
            .to_string(),
            "Invalid complementary day 6 for year 232 (must be 1-5)"
        );
    }
}
