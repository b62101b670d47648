use chrono::{DateTime, Duration, Utc};

/// Question sets stay open for this long after finalization.
const EXPIRY_HOURS: i64 = 48;

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn expiry_from(created_at: DateTime<Utc>) -> DateTime<Utc> {
    created_at + Duration::hours(EXPIRY_HOURS)
}
