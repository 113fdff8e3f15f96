//! Time utilities

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Check if a datetime is in the past
pub fn is_past<Tz: TimeZone>(dt: &DateTime<Tz>) -> bool {
    dt.with_timezone(&Utc) < now_utc()
}

/// Calculate time until a future datetime
pub fn time_until<Tz: TimeZone>(target: &DateTime<Tz>) -> Option<Duration> {
    let target = target.with_timezone(&Utc);
    let now = now_utc();
    if target > now {
        Some(target - now)
    } else {
        None
    }
}
