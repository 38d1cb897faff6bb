use crate::GregorianDate;

/// Builds a date that the test knows to be valid.
pub fn date(year: i32, month: u32, day: u32) -> GregorianDate {
    GregorianDate::new(year, month, day)
        .unwrap_or_else(|e| panic!("test date {year}-{month:02}-{day:02} is invalid: {e}"))
}
