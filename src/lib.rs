//! Conversion between the Gregorian calendar and the Japanese era calendar
//! (和暦, *wareki*).
//!
//! A wareki date is an era name plus a 1-based year within that era, e.g.
//! 令和8年 is 2026. Era-year 1 is the Gregorian year the era began in, and
//! the era-year advances on every January 1 after that.
//!
//! ```
//! use wareki::{Era, YearStyle, from_wareki, to_wareki};
//!
//! let w = to_wareki(2019, 5, 1).unwrap();
//! assert_eq!(w.era(), Era::Reiwa);
//! assert_eq!(w.to_string(), "令和1年");
//! assert_eq!(w.long(YearStyle::Gannen).to_string(), "令和元年5月1日");
//!
//! // Full name, one-character abbreviation and Latin code all resolve.
//! let d = from_wareki("H", 31, 4, 30).unwrap();
//! assert_eq!(d.to_string(), "2019-04-30");
//! ```
//!
//! Supported eras are Meiji (from 1868-01-25) through the current era,
//! Reiwa, which is open-ended. [`EraTable::try_new`] builds a table over a
//! caller-supplied snapshot, for example one that stops at Heisei.
//!
//! # Features
//!
//! - `chrono`: conversions between [`GregorianDate`] and `chrono::NaiveDate`.

mod consts;
mod convert;
mod date;
mod era;
mod error;
mod prelude;
mod types;
mod wareki;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use convert::{from_wareki, to_wareki};
pub use date::GregorianDate;
pub use era::{ERAS, Era, EraRecord, EraTable};
pub use error::{DateError, TableError, WarekiError};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use wareki::{WarekiDate, WarekiDisplay, YearStyle};
