//! Reference period model.
//!
//! Payroll and attendance reports are always computed for a single calendar
//! month. This module contains the [`ReferencePeriod`] type that identifies it.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Day of month used as the stored reference date of a report.
pub const REFERENCE_DAY: u32 = 15;

/// A calendar month/year pair that reports are computed for.
///
/// Fields are public so the type can be built from request payloads; every
/// calculation calls [`ReferencePeriod::validate`] before using it.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ReferencePeriod;
/// use chrono::NaiveDate;
///
/// let period: ReferencePeriod = "2025-03".parse().unwrap();
/// assert_eq!(period.year, 2025);
/// assert_eq!(period.month, 3);
/// assert!(period.contains(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()));
/// assert!(!period.contains(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReferencePeriod {
    /// The calendar year.
    pub year: i32,
    /// The calendar month, 1 through 12.
    pub month: u32,
}

impl ReferencePeriod {
    /// Creates a validated reference period.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` if `month` is outside 1–12 or the year is
    /// outside the supported calendar range.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        let period = Self { year, month };
        period.validate()?;
        Ok(period)
    }

    /// Checks that this period names a real calendar month.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(EngineError::InvalidPeriod {
                year: self.year,
                month: self.month,
                message: "month must be between 1 and 12".to_string(),
            });
        }

        if NaiveDate::from_ymd_opt(self.year, self.month, 1).is_none() {
            return Err(EngineError::InvalidPeriod {
                year: self.year,
                month: self.month,
                message: "year is outside the supported calendar range".to_string(),
            });
        }

        Ok(())
    }

    /// Returns true if `date` falls in this month of this year.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The date stored alongside a report snapshot: the 15th of the month.
    pub fn reference_date(&self) -> EngineResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, REFERENCE_DAY).ok_or_else(|| {
            EngineError::InvalidPeriod {
                year: self.year,
                month: self.month,
                message: "not a valid calendar month".to_string(),
            }
        })
    }

    /// Returns the period containing `date`.
    pub fn of_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for ReferencePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for ReferencePeriod {
    type Err = EngineError;

    /// Parses the `YYYY-MM` month format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || EngineError::InvalidPeriod {
            year: 0,
            month: 0,
            message: format!("expected YYYY-MM, got '{}'", s),
        };

        let (year, month) = s.trim().split_once('-').ok_or_else(malformed)?;
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;

        Self::new(year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_accepts_valid_months() {
        assert!(ReferencePeriod::new(2025, 1).is_ok());
        assert!(ReferencePeriod::new(2025, 12).is_ok());
    }

    #[test]
    fn test_new_rejects_month_zero_and_thirteen() {
        for month in [0, 13] {
            match ReferencePeriod::new(2025, month) {
                Err(EngineError::InvalidPeriod { month: m, .. }) => assert_eq!(m, month),
                other => panic!("Expected InvalidPeriod, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_contains_checks_year_and_month() {
        let period = ReferencePeriod::new(2025, 3).unwrap();
        assert!(period.contains(date(2025, 3, 1)));
        assert!(period.contains(date(2025, 3, 31)));
        assert!(!period.contains(date(2025, 2, 28)));
        assert!(!period.contains(date(2024, 3, 15)));
    }

    #[test]
    fn test_reference_date_is_fifteenth() {
        let period = ReferencePeriod::new(2025, 2).unwrap();
        assert_eq!(period.reference_date().unwrap(), date(2025, 2, 15));
    }

    #[test]
    fn test_parse_year_month() {
        let period: ReferencePeriod = "2024-11".parse().unwrap();
        assert_eq!(period, ReferencePeriod { year: 2024, month: 11 });
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("november".parse::<ReferencePeriod>().is_err());
        assert!("2024-xx".parse::<ReferencePeriod>().is_err());
        assert!("2024-13".parse::<ReferencePeriod>().is_err());
    }

    #[test]
    fn test_display_pads_month() {
        let period = ReferencePeriod::new(2025, 7).unwrap();
        assert_eq!(period.to_string(), "2025-07");
    }

    #[test]
    fn test_of_date() {
        assert_eq!(
            ReferencePeriod::of_date(date(2026, 10, 18)),
            ReferencePeriod { year: 2026, month: 10 }
        );
    }

    #[test]
    fn test_deserialize_period() {
        let period: ReferencePeriod = serde_json::from_str(r#"{"year": 2025, "month": 6}"#).unwrap();
        assert_eq!(period.month, 6);
    }
}
