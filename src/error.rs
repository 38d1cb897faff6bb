//! Error types for the wareki crate.

use crate::{Era, GregorianDate, MAX_MONTH, MAX_YEAR, prelude::*};

/// A Gregorian (year, month, day) triple that is not a real calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u32),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// Error type for the conversions between Gregorian and wareki dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WarekiError {
    /// The year/month/day triple is not a real calendar date.
    #[error(transparent)]
    InvalidDate(#[from] DateError),

    /// The date precedes the first era of the table, or follows the last
    /// era of a closed table.
    #[error("Date is out of supported range: {date}")]
    OutOfSupportedRange { date: GregorianDate },

    /// No era record matches the token.
    #[error("Unknown era: {token:?}")]
    UnknownEra { token: String },

    /// Era-relative years start at 1.
    #[error("Invalid era year: {era_year} (must be 1 or greater)")]
    InvalidEraYear { era_year: u32 },

    /// The reconstructed date is a real date but lies outside the named era.
    #[error("Date {date} is outside the {era} era")]
    DateOutsideEra { date: GregorianDate, era: Era },

    /// Text did not have the `{era}{year}年{month}月{day}日` shape.
    #[error("Invalid wareki format: {0}")]
    InvalidFormat(String),
}

/// Error type for building an [`EraTable`](crate::EraTable) from custom records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("Era table is empty")]
    Empty,

    #[error("Era {era} ends ({end}) before it starts ({start})")]
    InvertedRange {
        era:   Era,
        start: GregorianDate,
        end:   GregorianDate,
    },

    #[error("Era {era} is open-ended but is not the last era")]
    OpenEndedBeforeLast { era: Era },

    #[error("Era {next} does not start on the day after {previous} ends")]
    NotContiguous { previous: Era, next: Era },
}
