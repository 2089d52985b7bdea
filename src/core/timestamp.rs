//! Timestamp formatting and clocks
//!
//! Every line carries a `MM-DD hh:mm:ss.mmm` timestamp in local time:
//! zero-padded, millisecond precision, no year and no zone indicator.

use chrono::{DateTime, Local, TimeZone};
use std::fmt;

/// strftime pattern for the line header
pub const TIMESTAMP_PATTERN: &str = "%m-%d %H:%M:%S%.3f";

/// Format a datetime as `MM-DD hh:mm:ss.mmm`
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use stderr_logger::core::timestamp::format_timestamp;
///
/// let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
///     + chrono::Duration::milliseconds(6);
/// assert_eq!(format_timestamp(&at), "01-02 03:04:05.006");
/// ```
#[must_use]
pub fn format_timestamp<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    datetime.format(TIMESTAMP_PATTERN).to_string()
}

/// Source of the wall-clock time stamped on each line
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// The real local clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<Local>,
}

impl FixedClock {
    pub fn new(at: DateTime<Local>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.at
    }
}

/// Build a local datetime for tests; ambiguous wall-clock times take the earlier instant
#[cfg(test)]
pub(crate) fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> DateTime<Local> {
    let naive = chrono::NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_milli_opt(h, mi, s, ms))
        .expect("valid datetime");
    Local
        .from_local_datetime(&naive)
        .earliest()
        .expect("representable local time")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_zero_padding() {
        let at = local(2024, 1, 2, 3, 4, 5, 6);
        assert_eq!(format_timestamp(&at), "01-02 03:04:05.006");
    }

    #[test]
    fn test_two_digit_fields() {
        let at = local(2023, 12, 31, 23, 59, 58, 999);
        assert_eq!(format_timestamp(&at), "12-31 23:59:58.999");
    }

    #[test]
    fn test_utc_offset_not_printed() {
        let at = Utc.with_ymd_and_hms(2025, 7, 14, 10, 30, 45).unwrap();
        assert_eq!(format_timestamp(&at), "07-14 10:30:45.000");
    }

    #[test]
    fn test_fixed_clock() {
        let at = local(2024, 6, 1, 12, 0, 0, 250);
        let clock = FixedClock::new(at);
        assert_eq!(clock.now(), at);
        assert_eq!(format_timestamp(&clock.now()), "06-01 12:00:00.250");
    }

    #[test]
    fn test_system_clock_shape() {
        let stamp = format_timestamp(&SystemClock.now());
        assert_eq!(stamp.len(), "MM-DD hh:mm:ss.mmm".len());
        assert_eq!(&stamp[2..3], "-");
        assert_eq!(&stamp[5..6], " ");
        assert_eq!(&stamp[14..15], ".");
    }
}
