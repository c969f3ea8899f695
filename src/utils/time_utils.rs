use chrono::{DateTime, Duration, FixedOffset, NaiveTime, Utc};
use std::fmt;

/// e.g. "Tuesday, 03 December at 15:00"
pub const SERVICE_TIME_FORMAT: &str = "%A, %d %B at %H:%M";

/// Half-open UTC range `[start, end)` covering one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ReminderWindow {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

impl fmt::Display for ReminderWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

/// The local day after `now`, at the fixed `offset`, as a UTC range.
pub fn tomorrow_window(now: DateTime<Utc>, offset: FixedOffset) -> ReminderWindow {
    let local_today = now.with_timezone(&offset).date_naive();
    let local_midnight = (local_today + Duration::days(1)).and_time(NaiveTime::MIN);
    let start = (local_midnight - Duration::seconds(offset.local_minus_utc().into())).and_utc();

    ReminderWindow {
        start,
        end: start + Duration::days(1),
    }
}

pub fn format_service_time(at: DateTime<Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset)
        .format(SERVICE_TIME_FORMAT)
        .to_string()
}
