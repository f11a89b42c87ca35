/// Convert an hours/minutes pair to total seconds
pub fn to_seconds(hours: u64, minutes: u64) -> u64 {
    hours * 3600 + minutes * 60
}

/// Split seconds into an (hours, minutes) pair for display.
/// Rounds to the nearest whole minute first, so the split is lossy:
/// re-deriving seconds from the result drops sub-minute detail.
pub fn to_hours_minutes(seconds: u64) -> (u64, u64) {
    let minutes = (seconds + 30) / 60;
    (minutes / 60, minutes % 60)
}

/// Format seconds as "Xh Ym" (e.g. "1h 30m", "0h 12m")
pub fn format_hm(seconds: u64) -> String {
    let (hours, minutes) = to_hours_minutes(seconds);
    format!("{}h {}m", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_seconds() {
        assert_eq!(to_seconds(0, 0), 0);
        assert_eq!(to_seconds(1, 30), 5400);
        assert_eq!(to_seconds(2, 15), 8100);
        assert_eq!(to_seconds(0, 59), 3540);
    }

    #[test]
    fn test_to_hours_minutes_exact() {
        assert_eq!(to_hours_minutes(0), (0, 0));
        assert_eq!(to_hours_minutes(5400), (1, 30));
        assert_eq!(to_hours_minutes(3600), (1, 0));
        assert_eq!(to_hours_minutes(720), (0, 12));
    }

    #[test]
    fn test_to_hours_minutes_rounds_half_up() {
        // 29 s rounds down, 30 s rounds up
        assert_eq!(to_hours_minutes(29), (0, 0));
        assert_eq!(to_hours_minutes(30), (0, 1));
        assert_eq!(to_hours_minutes(89), (0, 1));
        assert_eq!(to_hours_minutes(90), (0, 2));
        // 59 m 40 s rounds up into the next hour
        assert_eq!(to_hours_minutes(3580), (1, 0));
    }

    #[test]
    fn test_format_hm() {
        assert_eq!(format_hm(0), "0h 0m");
        assert_eq!(format_hm(5400), "1h 30m");
        assert_eq!(format_hm(720), "0h 12m");
    }
}
