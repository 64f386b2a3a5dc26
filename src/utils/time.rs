/// Time formatting for table rows.

use chrono::{DateTime, Duration, Utc};

/// Format a timestamp relative to now ("just now", "12 minutes ago").
/// Older than a week falls back to the plain date.
pub fn format_relative_time(timestamp: DateTime<Utc>) -> String {
    let elapsed = Utc::now().signed_duration_since(timestamp);

    if elapsed < Duration::zero() {
        return "in the future".to_string();
    }

    if elapsed.num_seconds() < 60 {
        "just now".to_string()
    } else if elapsed.num_minutes() < 60 {
        plural(elapsed.num_minutes(), "minute")
    } else if elapsed.num_hours() < 24 {
        plural(elapsed.num_hours(), "hour")
    } else if elapsed.num_days() < 7 {
        plural(elapsed.num_days(), "day")
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_timestamps_render_as_relative() {
        assert_eq!(format_relative_time(Utc::now()), "just now");
        assert_eq!(
            format_relative_time(Utc::now() - Duration::minutes(5)),
            "5 minutes ago"
        );
        assert_eq!(
            format_relative_time(Utc::now() - Duration::hours(1)),
            "1 hour ago"
        );
    }

    #[test]
    fn old_timestamps_render_as_dates() {
        let old = Utc::now() - Duration::days(30);
        assert_eq!(format_relative_time(old), old.format("%Y-%m-%d").to_string());
    }
}
