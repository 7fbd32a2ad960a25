//! Wall-clock and day-month parsing for schedule records.
//!
//! The schedule feed publishes dates as day-month text with the year omitted
//! (`"24 May"`) and times either as 12-hour wall clock strings (`"10:00 AM"`,
//! dated sessions) or 24-hour `HH:MM` (weekly slots). Every parse failure is
//! a [`MalformedTimeError`] carrying the offending text; callers surface it
//! per record instead of placing an invalid event.

use chrono::{Duration, NaiveDate, NaiveTime};
use thiserror::Error;

/// A date or time field that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedTimeError {
    #[error("unparseable date: {value:?}")]
    Date { value: String },
    #[error("unparseable time: {value:?}")]
    Time { value: String },
    #[error("weekday out of range: {day} (expected 0-6)")]
    Weekday { day: u8 },
}

/// Parses day-month text such as `"24 May"` against an explicit epoch year.
/// Text that already carries a year is rejected.
///
/// The feed omits the year; it is an assumption of the rendering season and
/// is always supplied by the caller rather than buried in a literal.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use sched_core::datetime::parse_day_month;
///
/// let date = parse_day_month("24 May", 2025).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2025, 5, 24).unwrap());
/// ```
pub fn parse_day_month(value: &str, epoch_year: i32) -> Result<NaiveDate, MalformedTimeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MalformedTimeError::Date {
            value: value.to_string(),
        });
    }
    let candidate = format!("{trimmed} {epoch_year}");
    // "%d %B" accepts both full and abbreviated month names when parsing.
    for format in ["%d %B %Y", "%B %d %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(&candidate, format) {
            return Ok(date);
        }
    }
    Err(MalformedTimeError::Date {
        value: value.to_string(),
    })
}

/// Parses a 12-hour wall clock string such as `"10:00 AM"` or `"1:05 pm"`.
pub fn parse_clock_12h(value: &str) -> Result<NaiveTime, MalformedTimeError> {
    let cleaned = value.trim().to_uppercase();
    NaiveTime::parse_from_str(&cleaned, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(&cleaned, "%I:%M:%S %p"))
        .map_err(|_| MalformedTimeError::Time {
            value: value.to_string(),
        })
}

/// Parses a 24-hour `HH:MM` string such as `"17:30"`.
pub fn parse_clock_24h(value: &str) -> Result<NaiveTime, MalformedTimeError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| MalformedTimeError::Time {
            value: value.to_string(),
        })
}

/// Formats a time back to the feed's 12-hour display form (`"1:00 PM"`).
pub fn format_clock_12h(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Derives an end time from a 12-hour start time by adding a fixed three-hour
/// block, wrapping past midnight.
///
/// The minute value is preserved unchanged; the 12-hour display hour and
/// meridiem are re-derived after the shift.
///
/// # Examples
///
/// ```
/// use sched_core::datetime::add_three_hours;
///
/// assert_eq!(add_three_hours("10:00 AM").unwrap(), "1:00 PM");
/// assert_eq!(add_three_hours("11:30 PM").unwrap(), "2:30 AM");
/// ```
pub fn add_three_hours(value: &str) -> Result<String, MalformedTimeError> {
    let start = parse_clock_12h(value)?;
    // NaiveTime arithmetic wraps around midnight.
    Ok(format_clock_12h(start + Duration::hours(3)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_month_first_order_too() {
        assert_eq!(
            parse_day_month("May 24", 2025).unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 24).unwrap()
        );
    }

    #[test]
    fn rejects_nonsense_date() {
        assert!(matches!(
            parse_day_month("Saturday", 2025),
            Err(MalformedTimeError::Date { .. })
        ));
        assert!(matches!(
            parse_day_month("32 May", 2025),
            Err(MalformedTimeError::Date { .. })
        ));
    }

    #[test]
    fn twelve_hour_parsing_is_case_insensitive() {
        assert_eq!(
            parse_clock_12h("2:05 pm").unwrap(),
            NaiveTime::from_hms_opt(14, 5, 0).unwrap()
        );
        assert_eq!(
            parse_clock_12h("12:00 AM").unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn twenty_four_hour_parsing() {
        assert_eq!(
            parse_clock_24h("17:30").unwrap(),
            NaiveTime::from_hms_opt(17, 30, 0).unwrap()
        );
        assert!(parse_clock_24h("25:00").is_err());
    }

    #[test]
    fn noon_formats_without_leading_zero() {
        assert_eq!(
            format_clock_12h(NaiveTime::from_hms_opt(12, 5, 0).unwrap()),
            "12:05 PM"
        );
        assert_eq!(
            format_clock_12h(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            "9:00 AM"
        );
    }
}
