use crate::utils::time::localize;
use chrono::{DateTime, Duration, NaiveTime, TimeZone};

/// Concrete start/end of an edited shift and the time worked between them
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftRange<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub total_minutes: i64,
    pub time_worked_out: String,
}

/// Format a minute count as zero-padded `HH:MM`
pub fn format_worked_time(total_minutes: i64) -> String {
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Compute a shift's instants from hour/minute fields on the reference's day.
///
/// Only the calendar date of `reference` (in its own zone) is used. When the
/// end clock time is earlier than the start clock time the shift crosses
/// midnight and `end` moves to the next day. Shifts longer than a day are
/// not representable.
///
/// Out-of-range fields are not rejected: they carry over, so `25:00` lands
/// on the following day at `01:00`.
pub fn compute_shift_range<Tz: TimeZone>(
    reference: &DateTime<Tz>,
    hours_start: u32,
    minutes_start: u32,
    hours_end: u32,
    minutes_end: u32,
) -> ShiftRange<Tz> {
    let tz = reference.timezone();
    let midnight = reference.date_naive().and_time(NaiveTime::MIN);

    let wall_start = midnight
        + Duration::hours(i64::from(hours_start))
        + Duration::minutes(i64::from(minutes_start));
    let mut wall_end = midnight
        + Duration::hours(i64::from(hours_end))
        + Duration::minutes(i64::from(minutes_end));

    // Cross-midnight shift
    if wall_end < wall_start {
        wall_end += Duration::days(1);
    }

    let start = localize(&tz, &wall_start);
    let mut end = localize(&tz, &wall_end);

    // A start inside a DST gap moves forward and may pass the end
    if end < start {
        wall_end += Duration::days(1);
        end = localize(&tz, &wall_end);
    }

    let total_minutes = end
        .clone()
        .signed_duration_since(start.clone())
        .num_minutes();

    ShiftRange {
        start,
        end,
        total_minutes,
        time_worked_out: format_worked_time(total_minutes),
    }
}
