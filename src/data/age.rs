//! Relative-age formatting for alert timestamps.

use chrono::{DateTime, Utc};

/// Format how long ago an instant occurred, relative to `now`.
///
/// Timestamps in the future (clock skew from the feed) render as "now".
pub fn format_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();
    if seconds < 60 {
        "now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{}h ago", seconds / 3600)
    } else {
        format!("{}d ago", seconds / 86400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_under_a_minute_is_now() {
        let now = Utc::now();
        assert_eq!(format_age(now - Duration::seconds(30), now), "now");
    }

    #[test]
    fn test_minutes() {
        let now = Utc::now();
        assert_eq!(format_age(now - Duration::seconds(300), now), "5m ago");
    }

    #[test]
    fn test_hours() {
        let now = Utc::now();
        assert_eq!(format_age(now - Duration::seconds(7200), now), "2h ago");
    }

    #[test]
    fn test_days() {
        let now = Utc::now();
        assert_eq!(format_age(now - Duration::days(3), now), "3d ago");
    }

    #[test]
    fn test_future_timestamp_is_now() {
        let now = Utc::now();
        assert_eq!(format_age(now + Duration::seconds(90), now), "now");
    }
}
