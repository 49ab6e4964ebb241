use chrono::{NaiveDate, NaiveTime};

/// Due date as supplied by the caller. The three shapes mirror what the
/// entry points actually produce: a form field already parsed to unix
/// seconds, a javascript-style millisecond timestamp, or a plain calendar
/// date.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DueDate {
    Seconds(i64),
    EpochMillis(i64),
    CalendarDate(NaiveDate),
}

impl DueDate {
    /// Stored representation: unix seconds.
    pub fn as_unix_seconds(&self) -> i64 {
        match *self {
            DueDate::Seconds(seconds) => seconds,
            DueDate::EpochMillis(millis) => millis / 1000,
            DueDate::CalendarDate(date) => date.and_time(NaiveTime::MIN).and_utc().timestamp(),
        }
    }

    /// Millisecond timestamp rebuilt from the stored seconds; sub-second
    /// precision of an `EpochMillis` input is dropped.
    pub fn as_unix_millis(&self) -> i64 {
        self.as_unix_seconds() * 1000
    }
}
