// Wall-clock time utilities
// HH:MM interval arithmetic and display formatting

use chrono::{DateTime, Local};

use crate::models::deal::TimeRange;

/// Encode an `HH:MM` string as a comparable integer (HH*100 + MM).
///
/// The encoding is monotonic for valid zero-padded 24-hour times, which
/// is all interval checks need. Malformed input decodes to 0; catalog
/// times are authored data, not untrusted input.
pub fn time_to_num(time: &str) -> i32 {
    time.replace(':', "").parse().unwrap_or(0)
}

/// Whether a clock time lies inside a range, inclusive on both ends.
///
/// A range whose end is numerically earlier than its start wraps past
/// midnight: 22:00-02:00 contains 23:30 and 01:00 but not 03:00.
pub fn is_time_in_range(time: &str, range: &TimeRange) -> bool {
    let time_num = time_to_num(time);
    let start_num = time_to_num(&range.start);
    let end_num = time_to_num(&range.end);

    if end_num < start_num {
        return time_num >= start_num || time_num <= end_num;
    }

    time_num >= start_num && time_num <= end_num
}

/// Format an `HH:MM` time for display in 12-hour style.
/// Whole hours drop the minutes: "16:00" becomes "4PM", "18:30" "6:30PM".
pub fn format_time(time: &str) -> String {
    let mut parts = time.splitn(2, ':');
    let hours: u32 = parts.next().and_then(|h| h.parse().ok()).unwrap_or(0);
    let minutes: u32 = parts.next().and_then(|m| m.parse().ok()).unwrap_or(0);

    let period = if hours >= 12 { "PM" } else { "AM" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };

    if minutes > 0 {
        format!("{}:{:02}{}", display_hours, minutes, period)
    } else {
        format!("{}{}", display_hours, period)
    }
}

/// Format a time range for display ("4PM - 7PM")
pub fn format_time_range(range: &TimeRange) -> String {
    format!("{} - {}", format_time(&range.start), format_time(&range.end))
}

/// Coarse freshness label for a catalog timestamp.
///
/// `now` is passed explicitly so every label in one render pass is
/// computed against the same instant.
pub fn relative_time(last_updated: DateTime<Local>, now: DateTime<Local>) -> String {
    let diff_hours = now.signed_duration_since(last_updated).num_hours();
    let diff_days = diff_hours / 24;

    if diff_hours < 1 {
        return "Just updated".to_string();
    }
    if diff_hours < 24 {
        return format!("Updated {}h ago", diff_hours);
    }
    if diff_days == 1 {
        return "Updated yesterday".to_string();
    }
    format!("Updated {}d ago", diff_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_case::test_case;

    #[test_case("00:00", 0)]
    #[test_case("09:30", 930)]
    #[test_case("16:00", 1600)]
    #[test_case("23:59", 2359)]
    fn test_time_to_num(time: &str, expected: i32) {
        assert_eq!(time_to_num(time), expected);
    }

    #[test]
    fn test_time_to_num_malformed_decodes_to_zero() {
        assert_eq!(time_to_num("noon"), 0);
        assert_eq!(time_to_num(""), 0);
    }

    #[test_case("17:30", true; "inside the range")]
    #[test_case("16:00", true; "inclusive at start")]
    #[test_case("19:00", true; "inclusive at end")]
    #[test_case("20:00", false; "after the range")]
    #[test_case("15:59", false; "before the range")]
    fn test_in_range_happy_hour(time: &str, expected: bool) {
        let range = TimeRange::new("16:00", "19:00");
        assert_eq!(is_time_in_range(time, &range), expected);
    }

    #[test_case("23:30", true; "before midnight")]
    #[test_case("01:00", true; "after midnight")]
    #[test_case("22:00", true; "inclusive at start")]
    #[test_case("02:00", true; "inclusive at end")]
    #[test_case("03:00", false; "past the wrapped end")]
    #[test_case("12:00", false; "midday outside")]
    fn test_in_range_wrapping(time: &str, expected: bool) {
        let range = TimeRange::new("22:00", "02:00");
        assert_eq!(is_time_in_range(time, &range), expected);
    }

    #[test_case("16:00", "4PM")]
    #[test_case("18:30", "6:30PM")]
    #[test_case("12:00", "12PM")]
    #[test_case("00:00", "12AM")]
    #[test_case("00:15", "12:15AM")]
    #[test_case("09:05", "9:05AM")]
    fn test_format_time(time: &str, expected: &str) {
        assert_eq!(format_time(time), expected);
    }

    #[test]
    fn test_format_time_range() {
        let range = TimeRange::new("16:00", "18:30");
        assert_eq!(format_time_range(&range), "4PM - 6:30PM");
    }

    #[test]
    fn test_relative_time_just_updated() {
        let now = Local::now();
        let updated = now - Duration::minutes(30);
        assert_eq!(relative_time(updated, now), "Just updated");
    }

    #[test]
    fn test_relative_time_hours() {
        let now = Local::now();
        let updated = now - Duration::hours(5);
        assert_eq!(relative_time(updated, now), "Updated 5h ago");
    }

    #[test]
    fn test_relative_time_yesterday() {
        let now = Local::now();
        let updated = now - Duration::hours(30);
        assert_eq!(relative_time(updated, now), "Updated yesterday");
    }

    #[test]
    fn test_relative_time_days() {
        let now = Local::now();
        let updated = now - Duration::days(4);
        assert_eq!(relative_time(updated, now), "Updated 4d ago");
    }
}
