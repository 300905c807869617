use super::models::{CalendarEvent, ShiftRecord, TypeWorkDay, WorkerInfo, WorkerShifts};

impl ShiftRecord {
    /// Turn this record into a calendar event for `worker`.
    ///
    /// Returns `None` when the record has no scheduled range. Only working
    /// days get the worker's name as title; other day types render as
    /// unlabeled blocks.
    pub fn to_event(&self, worker: &WorkerInfo) -> Option<CalendarEvent> {
        let (start, end) = self.time_range()?;

        let title = if self.type_work_day == TypeWorkDay::Working {
            worker.full_name()
        } else {
            String::new()
        };

        Some(CalendarEvent {
            id: self.work_day_id,
            worker_id: worker.worker_id,
            title,
            start,
            end,
            type_work_day: self.type_work_day,
            time_worked_out: self.time_worked_out.clone(),
            estimation: self.estimation,
            prize: self.prize,
            fine: self.fine,
            comment: self.comment.clone(),
        })
    }
}

/// Flatten worker groups into calendar events, keeping input order
pub fn project_events(workers: &[WorkerShifts]) -> Vec<CalendarEvent> {
    workers
        .iter()
        .flat_map(|group| {
            let worker = WorkerInfo::from(group);
            group
                .work_days
                .iter()
                .filter_map(move |record| record.to_event(&worker))
        })
        .collect()
}

/// Replace the event with `updated.id` in place.
///
/// Unknown ids leave the list untouched; new events are appended by the
/// caller, never here.
pub fn merge_event(events: &[CalendarEvent], updated: &CalendarEvent) -> Vec<CalendarEvent> {
    let mut merged = events.to_vec();
    if let Some(slot) = merged.iter_mut().find(|event| event.id == updated.id) {
        *slot = updated.clone();
    }
    merged
}
