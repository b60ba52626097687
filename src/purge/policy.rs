use chrono::{DateTime, Duration, Utc};

/// A resource is expired iff its age strictly exceeds the threshold. A
/// resource exactly at the threshold is not expired. Threshold zero makes
/// anything with positive age expired.
pub fn is_expired(created_at: DateTime<Utc>, threshold: Duration, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(created_at) > threshold
}
