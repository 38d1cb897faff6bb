//! The Japanese era table.
//!
//! [`ERAS`] is the compiled-in table of modern eras, Meiji through Reiwa.
//! [`EraTable`] is a validated view over a slice of [`EraRecord`]s and owns
//! the two lookups the converters are built on: resolving an era token and
//! finding the era that contains a Gregorian date.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{GregorianDate, TableError, WarekiError, prelude::*};

/// Identifies one of the supported eras. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    Meiji,
    Taisho,
    Showa,
    Heisei,
    Reiwa,
}

impl Era {
    /// All eras, oldest first.
    pub const ALL: [Self; 5] = [Self::Meiji, Self::Taisho, Self::Showa, Self::Heisei, Self::Reiwa];

    /// The built-in record for this era.
    pub fn record(self) -> &'static EraRecord {
        &ERAS[self as usize]
    }
}

/// One era: its three name forms and the inclusive span of Gregorian dates it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EraRecord {
    era:          Era,
    name:         &'static str,
    abbreviation: &'static str,
    latin_code:   char,
    start:        GregorianDate,
    end:          Option<GregorianDate>,
}

impl EraRecord {
    /// `end` is the last day of the era, or `None` for the current era.
    pub const fn new(
        era: Era,
        name: &'static str,
        abbreviation: &'static str,
        latin_code: char,
        start: GregorianDate,
        end: Option<GregorianDate>,
    ) -> Self {
        Self {
            era,
            name,
            abbreviation,
            latin_code,
            start,
            end,
        }
    }

    pub const fn era(&self) -> Era {
        self.era
    }

    /// Full name, e.g. "令和"
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Single-character form, e.g. "令"
    pub const fn abbreviation(&self) -> &'static str {
        self.abbreviation
    }

    /// Upper-case Latin letter, e.g. 'R'
    pub const fn latin_code(&self) -> char {
        self.latin_code
    }

    /// First day of the era
    pub const fn start(&self) -> GregorianDate {
        self.start
    }

    /// Last day of the era, `None` while it is still current
    pub const fn end(&self) -> Option<GregorianDate> {
        self.end
    }

    pub const fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }

    /// Checks whether `token` names this era. The full name and abbreviation
    /// match exactly; the Latin code matches in either case.
    pub fn matches(&self, token: &str) -> bool {
        if token == self.name || token == self.abbreviation {
            return true;
        }
        let mut chars = token.chars();
        matches!(
            (chars.next(), chars.next()),
            (Some(c), None) if c.eq_ignore_ascii_case(&self.latin_code)
        )
    }

    pub fn contains(&self, date: GregorianDate) -> bool {
        self.start <= date && self.end.is_none_or(|end| date <= end)
    }
}

/// Modern eras, oldest first. Meiji starts on the Gregorian equivalent of
/// the first day of its first lunisolar year.
pub static ERAS: [EraRecord; 5] = [
    EraRecord::new(
        Era::Meiji,
        "明治",
        "明",
        'M',
        GregorianDate::known(1868, 1, 25),
        Some(GregorianDate::known(1912, 7, 29)),
    ),
    EraRecord::new(
        Era::Taisho,
        "大正",
        "大",
        'T',
        GregorianDate::known(1912, 7, 30),
        Some(GregorianDate::known(1926, 12, 24)),
    ),
    EraRecord::new(
        Era::Showa,
        "昭和",
        "昭",
        'S',
        GregorianDate::known(1926, 12, 25),
        Some(GregorianDate::known(1989, 1, 7)),
    ),
    EraRecord::new(
        Era::Heisei,
        "平成",
        "平",
        'H',
        GregorianDate::known(1989, 1, 8),
        Some(GregorianDate::known(2019, 4, 30)),
    ),
    EraRecord::new(Era::Reiwa, "令和", "令", 'R', GregorianDate::known(2019, 5, 1), None),
];

/// A non-empty, contiguous, chronologically sorted run of era records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraTable<'a> {
    records: &'a [EraRecord],
}

impl EraTable<'static> {
    /// The built-in table, open-ended at Reiwa.
    pub const STANDARD: Self = Self { records: &ERAS };
}

impl Default for EraTable<'static> {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl<'a> EraTable<'a> {
    /// Builds a table over `records`, e.g. a closed snapshot of historical eras.
    ///
    /// # Errors
    /// Returns a `TableError` if `records` is empty, a record ends before it
    /// starts, a record other than the last is open-ended, or a record does
    /// not begin on the day after the previous one ends.
    pub fn try_new(records: &'a [EraRecord]) -> Result<Self, TableError> {
        if records.is_empty() {
            return Err(TableError::Empty);
        }

        for record in records {
            if let Some(end) = record.end.filter(|end| *end < record.start) {
                return Err(TableError::InvertedRange {
                    era: record.era,
                    start: record.start,
                    end,
                });
            }
        }

        for pair in records.windows(2) {
            let [previous, next] = pair else { continue };
            let Some(previous_end) = previous.end else {
                return Err(TableError::OpenEndedBeforeLast { era: previous.era });
            };
            if previous_end.succ() != Some(next.start) {
                return Err(TableError::NotContiguous {
                    previous: previous.era,
                    next:     next.era,
                });
            }
        }

        Ok(Self { records })
    }

    pub const fn records(&self) -> &'a [EraRecord] {
        self.records
    }

    /// Oldest era of the table
    pub const fn first(&self) -> Option<&'a EraRecord> {
        self.records.first()
    }

    /// Newest era of the table
    pub const fn last(&self) -> Option<&'a EraRecord> {
        self.records.last()
    }

    /// Whether the last era has no end date
    pub fn is_open_ended(&self) -> bool {
        self.last().is_some_and(EraRecord::is_open_ended)
    }

    /// First supported date, and the last one if the table is closed.
    pub fn supported_range(&self) -> Option<(GregorianDate, Option<GregorianDate>)> {
        Some((self.first()?.start, self.last()?.end))
    }

    /// Resolves a full name, abbreviation, or Latin code to its record.
    ///
    /// # Errors
    /// Returns `WarekiError::UnknownEra` if no record matches.
    pub fn lookup_by_name(&self, token: &str) -> Result<&'a EraRecord, WarekiError> {
        let record = self
            .records
            .iter()
            .find(|record| record.matches(token))
            .ok_or_else(|| WarekiError::UnknownEra {
                token: token.to_owned(),
            })?;
        trace!(token, era = %record.era, "resolved era token");
        Ok(record)
    }

    /// Finds the era whose span contains `date`.
    ///
    /// # Errors
    /// Returns `WarekiError::OutOfSupportedRange` if `date` is before the first
    /// era, or after the last era of a closed table.
    pub fn era_containing(&self, date: GregorianDate) -> Result<&'a EraRecord, WarekiError> {
        let idx = self.records.partition_point(|record| record.start <= date);
        idx.checked_sub(1)
            .and_then(|i| self.records.get(i))
            .filter(|record| record.contains(date))
            .ok_or(WarekiError::OutOfSupportedRange { date })
    }
}
