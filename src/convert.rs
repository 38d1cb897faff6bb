//! Gregorian ⇄ wareki conversion.

use std::num::NonZeroU32;

use tracing::debug;

use crate::{EraTable, GregorianDate, WarekiDate, WarekiError};

impl EraTable<'_> {
    /// Converts a raw Gregorian (year, month, day) to a wareki date.
    ///
    /// # Errors
    /// Returns `WarekiError::InvalidDate` if the triple is not a real date, and
    /// `WarekiError::OutOfSupportedRange` if no era of this table contains it.
    pub fn to_wareki(self, year: i32, month: u32, day: u32) -> Result<WarekiDate, WarekiError> {
        let date = GregorianDate::new(year, month, day)?;
        self.date_to_wareki(date)
    }

    /// Converts an already validated Gregorian date to a wareki date.
    ///
    /// Era-year 1 is the calendar year the era starts in; the era-year
    /// increments every January 1 after that.
    ///
    /// # Errors
    /// Returns `WarekiError::OutOfSupportedRange` if no era of this table contains `date`.
    pub fn date_to_wareki(self, date: GregorianDate) -> Result<WarekiDate, WarekiError> {
        let record = self.era_containing(date)?;
        // era_containing guarantees date >= start
        let elapsed = date.year().saturating_sub(record.start().year());
        let era_year = NonZeroU32::MIN.saturating_add(u32::from(elapsed));

        let wareki = WarekiDate::from_record(record, era_year, date.month_typed(), date.day_typed());
        debug!(%date, era = %record.era(), era_year = wareki.era_year(), "converted to wareki");
        Ok(wareki)
    }

    /// Converts a wareki date to the Gregorian calendar.
    ///
    /// `era_token` may be the full era name ("令和"), its abbreviation ("令"),
    /// or its Latin code in either case ("R", "r").
    ///
    /// # Errors
    /// - `WarekiError::UnknownEra` if `era_token` names no era of this table
    /// - `WarekiError::InvalidEraYear` if `era_year` is 0
    /// - `WarekiError::InvalidDate` if the resulting year/month/day is not a real date
    /// - `WarekiError::DateOutsideEra` if the date precedes the era's start or
    ///   follows its end
    pub fn to_gregorian(
        self,
        era_token: &str,
        era_year: u32,
        month: u32,
        day: u32,
    ) -> Result<GregorianDate, WarekiError> {
        let record = self.lookup_by_name(era_token)?;
        let offset = era_year
            .checked_sub(1)
            .ok_or(WarekiError::InvalidEraYear { era_year })?;

        let year = i64::from(record.start().year()) + i64::from(offset);
        let date = GregorianDate::from_raw(year, month, day)?;

        if !record.contains(date) {
            debug!(%date, era = %record.era(), "date falls outside named era");
            return Err(WarekiError::DateOutsideEra { date, era: record.era() });
        }

        debug!(era = %record.era(), era_year, %date, "converted to gregorian");
        Ok(date)
    }
}

/// Converts a Gregorian date to a wareki date using the built-in era table.
///
/// ```
/// let w = wareki::to_wareki(2026, 2, 23).unwrap();
/// assert_eq!(w.era_name(), "令和");
/// assert_eq!(w.era_year(), 8);
/// assert_eq!(w.to_string(), "令和8年");
/// ```
///
/// # Errors
/// See [`EraTable::to_wareki`].
pub fn to_wareki(year: i32, month: u32, day: u32) -> Result<WarekiDate, WarekiError> {
    EraTable::STANDARD.to_wareki(year, month, day)
}

/// Converts a wareki date to a Gregorian date using the built-in era table.
///
/// ```
/// let d = wareki::from_wareki("r", 8, 2, 23).unwrap();
/// assert_eq!(d.to_string(), "2026-02-23");
/// ```
///
/// # Errors
/// See [`EraTable::to_gregorian`].
pub fn from_wareki(era_token: &str, era_year: u32, month: u32, day: u32) -> Result<GregorianDate, WarekiError> {
    EraTable::STANDARD.to_gregorian(era_token, era_year, month, day)
}
