/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a new resource id (UUID v4, hyphenated)
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Pluralize a seat count: `1 seat`, `3 seats`
pub fn seats_phrase(count: i32) -> String {
    if count == 1 {
        format!("{count} seat")
    } else {
        format!("{count} seats")
    }
}
