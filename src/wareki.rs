use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DAY_MARKER, GANNEN_MARKER, MONTH_MARKER, YEAR_MARKER};
use crate::types::{Day, Month};
use crate::{Era, EraRecord, EraTable, WarekiError, prelude::*};

/// A date expressed in the Japanese era calendar.
///
/// The canonical display is the short form `{era_name}{era_year}年`, with
/// era-year 1 written numerically ("平成1年"). Use [`WarekiDate::long`] for
/// month and day, and [`YearStyle::Gannen`] for "元年".
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{era_name}{era_year}年")]
pub struct WarekiDate {
    era:      Era,
    era_name: &'static str,
    era_year: NonZeroU32,
    month:    Month,
    day:      Day,
}

/// How era-year 1 is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YearStyle {
    /// "令和1年"
    #[default]
    Numeric,
    /// "令和元年"
    Gannen,
}

impl WarekiDate {
    pub(crate) const fn from_record(record: &EraRecord, era_year: NonZeroU32, month: Month, day: Day) -> Self {
        Self {
            era: record.era(),
            era_name: record.name(),
            era_year,
            month,
            day,
        }
    }

    pub const fn era(&self) -> Era {
        self.era
    }

    /// Full era name, e.g. "令和"
    pub const fn era_name(&self) -> &'static str {
        self.era_name
    }

    /// 1-based year within the era
    pub const fn era_year(&self) -> u32 {
        self.era_year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// `(era_name, era_year, month, day)`, in the argument order of
    /// [`from_wareki`](crate::from_wareki).
    pub const fn as_tuple(&self) -> (&'static str, u32, u32, u32) {
        (self.era_name, self.era_year.get(), self.month.get() as u32, self.day.get() as u32)
    }

    /// Short form without month and day: "令和8年"
    pub const fn short(&self, style: YearStyle) -> WarekiDisplay<'_> {
        WarekiDisplay {
            date: self,
            style,
            long: false,
        }
    }

    /// Long form with month and day: "令和8年2月23日"
    pub const fn long(&self, style: YearStyle) -> WarekiDisplay<'_> {
        WarekiDisplay {
            date: self,
            style,
            long: true,
        }
    }
}

/// Renders a [`WarekiDate`] in a requested form.
#[derive(Debug, Clone, Copy)]
pub struct WarekiDisplay<'a> {
    date:  &'a WarekiDate,
    style: YearStyle,
    long:  bool,
}

impl fmt::Display for WarekiDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.date;
        f.write_str(date.era_name)?;
        match self.style {
            YearStyle::Gannen if date.era_year == NonZeroU32::MIN => write!(f, "{GANNEN_MARKER}")?,
            YearStyle::Numeric | YearStyle::Gannen => write!(f, "{}", date.era_year)?,
        }
        write!(f, "{YEAR_MARKER}")?;
        if self.long {
            write!(f, "{}{MONTH_MARKER}{}{DAY_MARKER}", date.month, date.day)?;
        }
        Ok(())
    }
}

impl WarekiDate {
    fn parse_number(s: &str, field: &str) -> Result<u32, WarekiError> {
        s.parse::<u32>()
            .map_err(|_| WarekiError::InvalidFormat(format!("Invalid {field}: {s:?}")))
    }

    fn missing(marker: char, s: &str) -> WarekiError {
        WarekiError::InvalidFormat(format!("Missing '{marker}' in {s:?}"))
    }
}

impl FromStr for WarekiDate {
    type Err = WarekiError;

    /// Parses the long form `{era}{year}年{month}月{day}日` against the
    /// built-in era table. The era may be given in any token shape and the
    /// year may be "元".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(WarekiError::InvalidFormat("Empty wareki string".to_owned()));
        }

        let year_pos = trimmed
            .find(|c: char| c.is_ascii_digit() || c == GANNEN_MARKER)
            .ok_or_else(|| WarekiError::InvalidFormat(format!("Missing era year in {s:?}")))?;
        let (era_token, rest) = trimmed.split_at(year_pos);

        let (year_str, rest) = rest.split_once(YEAR_MARKER).ok_or_else(|| Self::missing(YEAR_MARKER, s))?;
        let (month_str, rest) = rest.split_once(MONTH_MARKER).ok_or_else(|| Self::missing(MONTH_MARKER, s))?;
        let day_str = rest.strip_suffix(DAY_MARKER).ok_or_else(|| Self::missing(DAY_MARKER, s))?;

        let era_year = if year_str.chars().eq([GANNEN_MARKER]) {
            1
        } else {
            Self::parse_number(year_str, "era year")?
        };
        let month = Self::parse_number(month_str, "month")?;
        let day = Self::parse_number(day_str, "day")?;

        let table = EraTable::STANDARD;
        let date = table.to_gregorian(era_token, era_year, month, day)?;
        table.date_to_wareki(date)
    }
}

impl Serialize for WarekiDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.long(YearStyle::Numeric))
    }
}

impl<'de> Deserialize<'de> for WarekiDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
