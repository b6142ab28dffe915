use chrono::{NaiveDateTime, Utc};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Environment variable pinning the commit time, read as UTC
pub const COMMIT_DATE_ENV: &str = "NIB_COMMIT_DATE";

/// Timestamp for a commit being created now
///
/// Honors `NIB_COMMIT_DATE` when it parses with `TIMESTAMP_FORMAT`, and falls
/// back to the current UTC time otherwise.
pub fn load_from_env() -> String {
    std::env::var(COMMIT_DATE_ENV)
        .ok()
        .and_then(|date_str| parse(&date_str))
        .unwrap_or_else(now)
}

pub fn now() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

fn parse(date_str: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(date_str.trim(), TIMESTAMP_FORMAT)
        .ok()
        .map(|date| date.and_utc().format(TIMESTAMP_FORMAT).to_string())
}
