use std::sync::Arc;

use chrono::{LocalResult, TimeZone, Utc};
use derive_more::Deref;

#[derive(Deref, Clone)]
#[deref(forward)]
pub struct DateFormatter(Arc<dyn IDateFormatter>);

impl DateFormatter {
    pub fn new(formatter: impl IDateFormatter + 'static) -> Self {
        Self(Arc::new(formatter))
    }

    pub fn from_arc(formatter: Arc<impl IDateFormatter + 'static>) -> Self {
        Self(formatter)
    }
}

pub trait IDateFormatter: Send + Sync {
    /// Render the human-facing display date for a unix-millisecond
    /// timestamp.
    fn display_date(&self, epoch_ms: i64) -> String;
}

/// Default formatter: `YYYY-MM-DD` in UTC. The display date doubles as a
/// query key, so the format must stay stable between writes and reads.
pub struct IsoDateFormatter;

impl IsoDateFormatter {
    pub fn get() -> DateFormatter {
        DateFormatter::new(IsoDateFormatter)
    }
}

impl IDateFormatter for IsoDateFormatter {
    fn display_date(&self, epoch_ms: i64) -> String {
        match Utc.timestamp_millis_opt(epoch_ms) {
            LocalResult::Single(t) => t.format("%Y-%m-%d").to_string(),
            // out of range, fall back to the raw timestamp
            _ => epoch_ms.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_utc_calendar_dates() {
        let formatter = IsoDateFormatter::get();
        assert_eq!(formatter.display_date(1704067200000), "2024-01-01");
    }
}
