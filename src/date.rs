use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DATE_SEPARATOR, DECEMBER, JANUARY, MIN_DAY};
use crate::types::{Day, Month, Year, days_in_month};
use crate::{DateError, prelude::*};

/// A real date of the proleptic Gregorian calendar, years 1 through 9999.
///
/// Ordering is chronological. Displays and serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct GregorianDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl GregorianDate {
    /// Validates a raw (year, month, day) triple.
    ///
    /// # Errors
    /// Returns a `DateError` naming the first component that is out of range,
    /// e.g. `InvalidDay` for February 29 of a common year.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        Self::from_raw(i64::from(year), month, day)
    }

    pub(crate) fn from_raw(year: i64, month: u32, day: u32) -> Result<Self, DateError> {
        let year = Year::try_from(year)?;
        let month = Month::try_from(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Builds a date from typed components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` is past the end of `month` in
    /// `year` (components validated against a different month can disagree).
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, DateError> {
        let day = Day::new(u32::from(day.get()), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Const constructor for compiled-in dates; an invalid date is a
    /// compile-time error when evaluated in a `static`.
    pub(crate) const fn known(year: u16, month: u8, day: u8) -> Self {
        let year = Year::known(year);
        let month = Month::known(month);
        let day = Day::known(day, year, month);
        Self { year, month, day }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns `(year, month, day)`
    pub const fn as_tuple(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// The following day, or `None` past 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        let (year, month, day) = self.as_tuple();
        let (year, month, day) = if day < days_in_month(year, month) {
            (year, month, day + 1)
        } else if month < DECEMBER {
            (year, month + 1, MIN_DAY)
        } else {
            (year.checked_add(1)?, JANUARY, MIN_DAY)
        };
        Self::from_raw(i64::from(year), u32::from(month), u32::from(day)).ok()
    }

    /// The preceding day, or `None` before 0001-01-01.
    pub fn pred(&self) -> Option<Self> {
        let (year, month, day) = self.as_tuple();
        let (year, month, day) = if day > MIN_DAY {
            (year, month, day - 1)
        } else if month > JANUARY {
            (year, month - 1, days_in_month(year, month - 1))
        } else {
            (year.checked_sub(1)?, DECEMBER, days_in_month(year.saturating_sub(1), DECEMBER))
        };
        Self::from_raw(i64::from(year), u32::from(month), u32::from(day)).ok()
    }

    fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
        s.parse::<T>().map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    /// Parses the ISO 8601 calendar date form `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} {DATE_SEPARATOR} separators",
                parts.len() - 1
            )));
        };

        let year = Self::parse_component::<i64>(year)?;
        let month = Self::parse_component::<u32>(month)?;
        let day = Self::parse_component::<u32>(day)?;
        Self::from_raw(year, month, day)
    }
}

impl TryFrom<(i32, u32, u32)> for GregorianDate {
    type Error = DateError;

    fn try_from((year, month, day): (i32, u32, u32)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
mod chrono_interop {
    use chrono::{Datelike, NaiveDate};

    use super::GregorianDate;
    use crate::DateError;

    impl From<GregorianDate> for NaiveDate {
        fn from(date: GregorianDate) -> Self {
            let (year, month, day) = date.as_tuple();
            // chrono covers years -262143..=262142, a superset of 1..=9999.
            Self::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
                .expect("GregorianDate is always representable as NaiveDate")
        }
    }

    impl TryFrom<NaiveDate> for GregorianDate {
        type Error = DateError;

        fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
            Self::new(date.year(), date.month(), date.day())
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_validates_each_component() {
        struct TestCase {
            ymd:         (i32, u32, u32),
            expected:    Result<(u16, u8, u8), DateError>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                ymd:         (2026, 2, 23),
                expected:    Ok((2026, 2, 23)),
                description: "ordinary date",
            },
            TestCase {
                ymd:         (2024, 2, 29),
                expected:    Ok((2024, 2, 29)),
                description: "leap day in a leap year",
            },
            TestCase {
                ymd:         (2023, 2, 29),
                expected:    Err(DateError::InvalidDay {
                    year:  2023,
                    month: 2,
                    day:   29,
                }),
                description: "leap day in a common year",
            },
            TestCase {
                ymd:         (2024, 4, 31),
                expected:    Err(DateError::InvalidDay {
                    year:  2024,
                    month: 4,
                    day:   31,
                }),
                description: "31st of a 30-day month",
            },
            TestCase {
                ymd:         (2024, 13, 1),
                expected:    Err(DateError::InvalidMonth(13)),
                description: "month past December",
            },
            TestCase {
                ymd:         (0, 1, 1),
                expected:    Err(DateError::InvalidYear(0)),
                description: "year zero",
            },
            TestCase {
                ymd:         (-1, 1, 1),
                expected:    Err(DateError::InvalidYear(-1)),
                description: "negative year",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.ymd;
            let result = GregorianDate::new(y, m, d).map(|date| date.as_tuple());
            assert_eq!(result, case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_from_parts_rechecks_day() {
        let y2024 = Year::new(2024).unwrap();
        let y2023 = Year::new(2023).unwrap();
        let feb = Month::new(2).unwrap();
        let leap_day = Day::new(29, y2024, feb).unwrap();

        assert!(GregorianDate::from_parts(y2024, feb, leap_day).is_ok());
        assert!(matches!(
            GregorianDate::from_parts(y2023, feb, leap_day),
            Err(DateError::InvalidDay { year: 2023, .. })
        ));
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(1989, 1, 7) < date(1989, 1, 8));
        assert!(date(1988, 12, 31) < date(1989, 1, 1));
        assert!(date(2019, 4, 30) < date(2019, 5, 1));
    }

    #[test]
    fn test_succ_rollover() {
        assert_eq!(date(2019, 4, 30).succ(), Some(date(2019, 5, 1)));
        assert_eq!(date(2024, 2, 28).succ(), Some(date(2024, 2, 29)));
        assert_eq!(date(2023, 2, 28).succ(), Some(date(2023, 3, 1)));
        assert_eq!(date(1926, 12, 31).succ(), Some(date(1927, 1, 1)));
        assert_eq!(date(9999, 12, 31).succ(), None);
    }

    #[test]
    fn test_pred_rollover() {
        assert_eq!(date(1989, 1, 8).pred(), Some(date(1989, 1, 7)));
        assert_eq!(date(2024, 3, 1).pred(), Some(date(2024, 2, 29)));
        assert_eq!(date(2023, 3, 1).pred(), Some(date(2023, 2, 28)));
        assert_eq!(date(1927, 1, 1).pred(), Some(date(1926, 12, 31)));
        assert_eq!(date(1, 1, 1).pred(), None);
    }

    #[test]
    fn test_display_and_parse() {
        let d = date(1912, 7, 30);
        assert_eq!(d.to_string(), "1912-07-30");
        assert_eq!("1912-07-30".parse::<GregorianDate>().unwrap(), d);
        assert_eq!(" 1912-7-30 ".parse::<GregorianDate>().unwrap(), d);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<GregorianDate>(), Err(DateError::EmptyInput));
        assert!(matches!(
            "2024-02".parse::<GregorianDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-02-30-1".parse::<GregorianDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-XX-01".parse::<GregorianDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2023-02-29".parse::<GregorianDate>(),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(2026, 2, 23);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2026-02-23""#);
        assert_eq!(serde_json::from_str::<GregorianDate>(&json).unwrap(), d);

        let result: Result<GregorianDate, _> = serde_json::from_str(r#""2023-02-29""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_known_is_const() {
        const HEISEI_START: GregorianDate = GregorianDate::known(1989, 1, 8);
        assert_eq!(HEISEI_START, date(1989, 1, 8));
    }
}
