//! Duration formatting and minute-entry parsing.

use chrono::Duration;

/// Format a duration as `HH:MM:SS`.
///
/// Hours are not wrapped at 24 and may run past two digits. Negative
/// durations render as zero.
#[must_use]
pub fn format_hms(d: Duration) -> String {
    let total_seconds = d.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes().max(0);

    if total_minutes < 1 {
        let seconds = d.num_seconds().max(0);
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}

/// Parse the minutes entry field.
///
/// Returns `None` for anything that is not a positive whole number.
#[must_use]
pub fn parse_minutes(s: &str) -> Option<i64> {
    s.trim().parse::<i64>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(Duration::zero()), "00:00:00");
        assert_eq!(format_hms(Duration::seconds(65)), "00:01:05");
        assert_eq!(format_hms(Duration::seconds(3661)), "01:01:01");
    }

    #[test]
    fn test_format_hms_does_not_wrap_hours() {
        assert_eq!(format_hms(Duration::hours(25)), "25:00:00");
        assert_eq!(format_hms(Duration::hours(123) + Duration::seconds(9)), "123:00:09");
    }

    #[test]
    fn test_format_hms_floors_fractions() {
        assert_eq!(format_hms(Duration::milliseconds(59_999)), "00:00:59");
    }

    #[test]
    fn test_format_hms_negative_is_zero() {
        assert_eq!(format_hms(Duration::seconds(-5)), "00:00:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(1)), "1 second");
        assert_eq!(format_duration(Duration::seconds(42)), "42 seconds");
        assert_eq!(format_duration(Duration::minutes(1)), "1 minute");
        assert_eq!(format_duration(Duration::hours(2)), "2 hours");
        assert_eq!(format_duration(Duration::minutes(90)), "1 hour, 30 minutes");
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("5"), Some(5));
        assert_eq!(parse_minutes(" 15 "), Some(15));
    }

    #[test]
    fn test_parse_minutes_rejects_invalid() {
        assert_eq!(parse_minutes(""), None);
        assert_eq!(parse_minutes("abc"), None);
        assert_eq!(parse_minutes("0"), None);
        assert_eq!(parse_minutes("-3"), None);
        assert_eq!(parse_minutes("1.5"), None);
    }
}
