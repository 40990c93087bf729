//! Day Keys
//!
//! The UTC calendar date is the time-bucket for code derivation and the
//! session token's day claim. It rolls over exactly at 00:00:00 UTC.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};

/// Format an instant as its UTC day key (`YYYY-MM-DD`)
pub fn day_key(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// The next UTC midnight strictly after `now`
pub fn next_utc_midnight(now: DateTime<Utc>) -> DateTime<Utc> {
    // succ_opt is None only at NaiveDate::MAX
    let tomorrow = now.date_naive().succ_opt().unwrap_or(now.date_naive());
    Utc.from_utc_datetime(&tomorrow.and_time(NaiveTime::MIN))
}
