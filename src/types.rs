use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR,
};
use crate::{DateError, prelude::*};
use std::num::{NonZeroU8, NonZeroU16};

/// A Gregorian year guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        match NonZeroU16::new(value) {
            Some(non_zero) if value <= MAX_YEAR => Ok(Self(non_zero)),
            _ => Err(DateError::InvalidYear(i64::from(value))),
        }
    }

    /// Const-context constructor for compiled-in tables. Fails compilation
    /// when used in a `static` with an out-of-range value.
    pub(crate) const fn known(value: u16) -> Self {
        match NonZeroU16::new(value) {
            Some(non_zero) if value <= MAX_YEAR => Self(non_zero),
            _ => panic!("year out of range"),
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<i64> for Year {
    type Error = DateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .map_err(|_| DateError::InvalidYear(value))
            .and_then(Self::new)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= MAX_MONTH => Ok(Self(non_zero)),
            _ => Err(DateError::InvalidMonth(u32::from(value))),
        }
    }

    pub(crate) const fn known(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= MAX_MONTH => Self(non_zero),
            _ => panic!("month out of range"),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u32> for Month {
    type Error = DateError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| DateError::InvalidMonth(value))
            .and_then(Self::new)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

/// A day of month. Only constructible against a year and month, so it is
/// always valid for the date it was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of `month` in `year`
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u32, year: Year, month: Month) -> Result<Self, DateError> {
        let invalid = || DateError::InvalidDay {
            year:  year.get(),
            month: month.get(),
            day:   value,
        };

        let value_u8 = u8::try_from(value).map_err(|_| invalid())?;
        match NonZeroU8::new(value_u8) {
            Some(non_zero) if value_u8 <= days_in_month(year.get(), month.get()) => Ok(Self(non_zero)),
            _ => Err(invalid()),
        }
    }

    pub(crate) const fn known(value: u8, year: Year, month: Month) -> Self {
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= days_in_month(year.get(), month.get()) => Self(non_zero),
            _ => panic!("day out of range"),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
