use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

/// Parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Resolve a wall-clock time in `tz`.
///
/// Ambiguous times (clocks turned back) resolve to the earlier instant.
/// Times that fall into a DST gap move forward by one hour, the way a
/// wall clock jumps over the gap.
pub fn localize<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz
            .from_local_datetime(&(*naive + Duration::hours(1)))
            .earliest()
            .unwrap_or_else(|| tz.from_utc_datetime(naive)),
    }
}

/// Get date range for the calendar week (Monday to Sunday) containing `date`
pub fn week_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    // Calculate Monday of the current week
    let monday = date
        .checked_sub_signed(Duration::days(
            date.weekday().num_days_from_monday() as i64,
        ))
        .unwrap_or(date);

    // Calculate Sunday of the current week (Monday + 6 days)
    let sunday = monday
        .checked_add_signed(Duration::days(6))
        .unwrap_or(monday);

    (monday, sunday)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use chrono_tz::Europe::Helsinki;

    #[test]
    fn test_parse_time() {
        // Valid cases
        assert_eq!(parse_time("00:00"), Some((0, 0)));
        assert_eq!(parse_time("12:30"), Some((12, 30)));
        assert_eq!(parse_time("23:59"), Some((23, 59)));
        assert_eq!(parse_time("9:05"), Some((9, 5)));

        // Invalid cases
        assert_eq!(parse_time("24:00"), None); // Hour out of range
        assert_eq!(parse_time("12:60"), None); // Minute out of range
        assert_eq!(parse_time("12:30:45"), None); // Too many parts
        assert_eq!(parse_time("12"), None); // Too few parts
        assert_eq!(parse_time("12:ab"), None); // Invalid minute
        assert_eq!(parse_time("ab:30"), None); // Invalid hour
    }

    #[test]
    fn test_localize_regular_time() {
        let naive = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let dt = localize(&Helsinki, &naive);
        assert_eq!(dt.naive_local(), naive);
        // Helsinki is UTC+3 in summer
        assert_eq!(dt.naive_utc().hour(), 6);
    }

    #[test]
    fn test_localize_dst_gap_moves_forward() {
        // 2024-03-31 03:00 -> 04:00 in Helsinki
        let naive = NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(3, 30, 0)
            .unwrap();
        let dt = localize(&Helsinki, &naive);
        assert_eq!(dt.naive_local().hour(), 4);
        assert_eq!(dt.naive_local().minute(), 30);
    }

    #[test]
    fn test_localize_ambiguous_takes_earliest() {
        // 2024-10-27 04:00 -> 03:00 in Helsinki, 03:30 happens twice
        let naive = NaiveDate::from_ymd_opt(2024, 10, 27)
            .unwrap()
            .and_hms_opt(3, 30, 0)
            .unwrap();
        let dt = localize(&Helsinki, &naive);
        // The first 03:30 is still summer time (UTC+3)
        assert_eq!(dt.naive_utc().hour(), 0);
    }

    #[test]
    fn test_week_range() {
        // Monday, 2023-01-02
        let monday = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let (start, end) = week_range(monday);
        assert_eq!(start.format("%Y-%m-%d").to_string(), "2023-01-02");
        assert_eq!(end.format("%Y-%m-%d").to_string(), "2023-01-08");

        // Wednesday, 2023-01-04
        let wednesday = NaiveDate::from_ymd_opt(2023, 1, 4).unwrap();
        assert_eq!(week_range(wednesday), (monday, end));

        // Sunday, 2023-01-08
        let sunday = NaiveDate::from_ymd_opt(2023, 1, 8).unwrap();
        assert_eq!(week_range(sunday), (monday, sunday));
    }
}
