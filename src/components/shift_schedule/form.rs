use super::models::{CalendarEvent, Estimation, ShiftUpdatePayload, TypeWorkDay};
use super::time::compute_shift_range;
use chrono::{DateTime, TimeZone, Timelike, Utc};

/// Values of the edit-shift modal
#[derive(Debug, Clone, PartialEq)]
pub struct EditShiftForm {
    pub hours_start: u32,
    pub minutes_start: u32,
    pub hours_end: u32,
    pub minutes_end: u32,
    pub type_work_day: TypeWorkDay,
    pub estimation: Option<Estimation>,
    pub prize: Option<f64>,
    pub fine: Option<f64>,
    pub comment: Option<String>,
}

impl EditShiftForm {
    /// Pre-fill the form from an event, reading clock times in `tz`
    pub fn from_event<Tz: TimeZone>(event: &CalendarEvent, tz: &Tz) -> Self {
        let start = event.start.with_timezone(tz);
        let end = event.end.with_timezone(tz);

        Self {
            hours_start: start.hour(),
            minutes_start: start.minute(),
            hours_end: end.hour(),
            minutes_end: end.minute(),
            type_work_day: event.type_work_day,
            estimation: event.estimation,
            prize: event.prize,
            fine: event.fine,
            comment: event.comment.clone(),
        }
    }

    /// Build the update body, placing the shift on `reference`'s day.
    ///
    /// Non-working days carry no range at all.
    pub fn to_payload<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> ShiftUpdatePayload {
        let (start, end, worked) = if self.type_work_day.has_time_range() {
            let range = compute_shift_range(
                reference,
                self.hours_start,
                self.minutes_start,
                self.hours_end,
                self.minutes_end,
            );
            (
                Some(range.start.with_timezone(&Utc)),
                Some(range.end.with_timezone(&Utc)),
                Some(range.time_worked_out),
            )
        } else {
            (None, None, None)
        };

        ShiftUpdatePayload {
            start_working_time: start,
            end_working_time: end,
            time_worked_out: worked,
            type_work_day: self.type_work_day,
            estimation: self.estimation,
            prize: self.prize,
            fine: self.fine,
            comment: self.comment.clone(),
        }
    }
}
