//! Formatting utilities for dashboard display

use chrono::{DateTime, Utc};

/// Render a second count as `"<n>s"` under a minute, else `"<m>m <r>s"`
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    if seconds < 60 {
        format!("{}s", seconds)
    } else {
        format!("{}m {}s", seconds / 60, seconds % 60)
    }
}

/// Elapsed-duration string between a start time and now
pub fn elapsed_between(start: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_elapsed((now - start).num_seconds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_elapsed_under_a_minute() {
        assert_eq!(format_elapsed(0), "0s");
        assert_eq!(format_elapsed(7), "7s");
        assert_eq!(format_elapsed(59), "59s");
    }

    #[test]
    fn test_format_elapsed_minutes_and_remainder() {
        assert_eq!(format_elapsed(60), "1m 0s");
        assert_eq!(format_elapsed(61), "1m 1s");
        assert_eq!(format_elapsed(185), "3m 5s");
    }

    #[test]
    fn test_format_elapsed_clamps_negative() {
        assert_eq!(format_elapsed(-12), "0s");
    }

    #[test]
    fn test_elapsed_between() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 1, 30).unwrap();
        assert_eq!(elapsed_between(start, now), "1m 30s");
    }
}
