use super::form::EditShiftForm;
use super::models::{CalendarEvent, ShiftRecord, TypeWorkDay, WorkerInfo};
use super::projector::{merge_event, project_events};
use super::source::{ShiftDataSource, ShiftUpdateSink};
use super::time::compute_shift_range;
use crate::config::Config;
use crate::error::{calendar_error, DeskResult};
use crate::utils::time::{localize, week_range};
use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Slot selected on the calendar but not yet stored by the backend
#[derive(Debug, Clone)]
struct PendingSlot {
    worker_id: i64,
    work_date: NaiveDate,
    form: EditShiftForm,
}

/// Calendar state owned by the calling layer.
///
/// Holds the projected events for the loaded window and drives the
/// create/edit round-trips against the shift collaborators.
pub struct ShiftCalendar {
    source: Arc<dyn ShiftDataSource>,
    sink: Arc<dyn ShiftUpdateSink>,
    tz: Tz,
    default_hours: ((u32, u32), (u32, u32)),
    events: Vec<CalendarEvent>,
    workers: HashMap<i64, WorkerInfo>,
    pending: HashMap<i64, PendingSlot>,
    // Day shifts created by the backend whose hours were never stored
    unfilled: HashMap<(i64, NaiveDate), i64>,
    next_provisional_id: i64,
}

impl fmt::Debug for ShiftCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShiftCalendar")
            .field("tz", &self.tz)
            .field("event_count", &self.events.len())
            .field("worker_count", &self.workers.len())
            .field("pending", &self.pending.len())
            .field("unfilled", &self.unfilled.len())
            .finish()
    }
}

impl ShiftCalendar {
    /// Create an empty calendar working in the configured zone
    pub fn new(
        config: &Config,
        source: Arc<dyn ShiftDataSource>,
        sink: Arc<dyn ShiftUpdateSink>,
    ) -> DeskResult<Self> {
        Ok(Self {
            source,
            sink,
            tz: config.tz()?,
            default_hours: config.default_shift_hours()?,
            events: Vec::new(),
            workers: HashMap::new(),
            pending: HashMap::new(),
            unfilled: HashMap::new(),
            next_provisional_id: -1,
        })
    }

    /// Time zone used to read and write clock times
    pub fn tz(&self) -> Tz {
        self.tz
    }

    /// Events in display order
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Look up an event by id
    pub fn event(&self, id: i64) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Whether the event is still waiting for the backend
    pub fn is_pending(&self, id: i64) -> bool {
        self.pending.contains_key(&id)
    }

    /// Look up a worker seen in the last load
    pub fn worker(&self, worker_id: i64) -> Option<&WorkerInfo> {
        self.workers.get(&worker_id)
    }

    /// Fetch shifts for `from..=to` and replace the calendar contents
    pub async fn load(&mut self, from: NaiveDate, to: NaiveDate) -> DeskResult<()> {
        let groups = self.source.fetch_shifts(from, to).await.map_err(|e| {
            error!("Failed to fetch shifts for {} - {}: {}", from, to, e);
            e
        })?;

        self.workers = groups
            .iter()
            .map(|group| (group.worker_id, WorkerInfo::from(group)))
            .collect();
        self.events = project_events(&groups);

        if !self.pending.is_empty() {
            warn!("Dropping {} unconfirmed slots on reload", self.pending.len());
            self.pending.clear();
        }

        info!(
            "Loaded {} shift events for {} workers ({} - {})",
            self.events.len(),
            self.workers.len(),
            from,
            to
        );

        Ok(())
    }

    /// Load the Monday..Sunday week containing `date`
    pub async fn load_week(&mut self, date: NaiveDate) -> DeskResult<()> {
        let (monday, sunday) = week_range(date);
        self.load(monday, sunday).await
    }

    /// Optimistically add a working shift for a selected slot.
    ///
    /// Returns the provisional (negative) id of the new event. A slot that
    /// starts and ends at midnight is an all-day selection and gets the
    /// default shift hours.
    pub fn select_slot(
        &mut self,
        worker_id: i64,
        slot_start: DateTime<Utc>,
        slot_end: DateTime<Utc>,
    ) -> DeskResult<i64> {
        let worker = self
            .workers
            .get(&worker_id)
            .ok_or_else(|| calendar_error(&format!("Unknown worker {}", worker_id)))?;

        let local_start = slot_start.with_timezone(&self.tz);
        let local_end = slot_end.with_timezone(&self.tz);

        let ((hours_start, minutes_start), (hours_end, minutes_end)) =
            if local_start.time() == NaiveTime::MIN && local_end.time() == NaiveTime::MIN {
                self.default_hours
            } else {
                (
                    (local_start.hour(), local_start.minute()),
                    (local_end.hour(), local_end.minute()),
                )
            };

        let form = EditShiftForm {
            hours_start,
            minutes_start,
            hours_end,
            minutes_end,
            type_work_day: TypeWorkDay::Working,
            estimation: None,
            prize: None,
            fine: None,
            comment: None,
        };

        let range = compute_shift_range(
            &local_start,
            hours_start,
            minutes_start,
            hours_end,
            minutes_end,
        );

        let id = self.next_provisional_id;
        self.next_provisional_id -= 1;

        self.events.push(CalendarEvent {
            id,
            worker_id,
            title: worker.full_name(),
            start: range.start.with_timezone(&Utc),
            end: range.end.with_timezone(&Utc),
            type_work_day: TypeWorkDay::Working,
            time_worked_out: Some(range.time_worked_out),
            estimation: None,
            prize: None,
            fine: None,
            comment: None,
        });
        self.pending.insert(
            id,
            PendingSlot {
                worker_id,
                work_date: local_start.date_naive(),
                form,
            },
        );

        info!(
            "Selected slot {} for worker {} on {}",
            id,
            worker_id,
            local_start.date_naive()
        );

        Ok(id)
    }

    /// Store a selected slot and swap in the confirmed event.
    ///
    /// On failure the optimistic event is removed again. A day shift that
    /// was created before a failed update is remembered, and the next
    /// confirmation for the same worker and day only re-sends the update.
    pub async fn confirm_slot(&mut self, provisional_id: i64) -> DeskResult<CalendarEvent> {
        let slot = self
            .pending
            .remove(&provisional_id)
            .ok_or_else(|| calendar_error(&format!("No pending slot {}", provisional_id)))?;

        let record = match self.store_slot(&slot).await {
            Ok(record) => record,
            Err(e) => {
                error!(
                    "Failed to store slot {} for worker {}: {}",
                    provisional_id, slot.worker_id, e
                );
                self.events.retain(|event| event.id != provisional_id);
                return Err(e);
            }
        };

        let position = self
            .events
            .iter()
            .position(|event| event.id == provisional_id)
            .ok_or_else(|| calendar_error(&format!("Slot {} vanished", provisional_id)))?;

        let confirmed = self.event_from_record(&record, &self.events[position])?;
        self.events[position] = confirmed.clone();

        info!(
            "Confirmed slot {} as work day {}",
            provisional_id, confirmed.id
        );

        Ok(confirmed)
    }

    /// Create the day shift unless one is already waiting, then fill in its hours
    async fn store_slot(&mut self, slot: &PendingSlot) -> DeskResult<ShiftRecord> {
        let key = (slot.worker_id, slot.work_date);

        let work_day_id = match self.unfilled.get(&key) {
            Some(work_day_id) => {
                info!(
                    "Reusing day shift {} for worker {} on {}",
                    work_day_id, slot.worker_id, slot.work_date
                );
                *work_day_id
            }
            None => {
                let created = self
                    .sink
                    .create_day_shift(slot.worker_id, slot.work_date)
                    .await?;
                self.unfilled.insert(key, created.work_day_id);
                created.work_day_id
            }
        };

        let reference = localize(&self.tz, &slot.work_date.and_time(NaiveTime::MIN));
        let payload = slot.form.to_payload(&reference);

        let record = self.sink.update_day_shift(work_day_id, &payload).await?;
        self.unfilled.remove(&key);

        Ok(record)
    }

    /// Send an edit for a confirmed event and merge the stored result
    pub async fn edit_shift(
        &mut self,
        event_id: i64,
        form: &EditShiftForm,
    ) -> DeskResult<CalendarEvent> {
        if self.is_pending(event_id) {
            return Err(calendar_error(&format!(
                "Shift {} is not confirmed yet",
                event_id
            )));
        }

        let previous = self
            .event(event_id)
            .cloned()
            .ok_or_else(|| calendar_error(&format!("Unknown shift {}", event_id)))?;

        let reference = previous.start.with_timezone(&self.tz);
        let payload = form.to_payload(&reference);

        let record = self
            .sink
            .update_day_shift(event_id, &payload)
            .await
            .map_err(|e| {
                error!("Failed to update shift {}: {}", event_id, e);
                e
            })?;

        let updated = self.event_from_record(&record, &previous)?;
        self.events = merge_event(&self.events, &updated);

        info!("Updated shift {}", event_id);

        Ok(updated)
    }

    /// Convert a stored record back into an event.
    ///
    /// A record without a range keeps the range `previous` was shown with.
    fn event_from_record(
        &self,
        record: &ShiftRecord,
        previous: &CalendarEvent,
    ) -> DeskResult<CalendarEvent> {
        let worker = self
            .workers
            .get(&previous.worker_id)
            .ok_or_else(|| calendar_error(&format!("Unknown worker {}", previous.worker_id)))?;

        let mut record = record.clone();
        if record.time_range().is_none() {
            record.start_working_time = Some(previous.start);
            record.end_working_time = Some(previous.end);
        }

        record
            .to_event(worker)
            .ok_or_else(|| calendar_error(&format!("Shift {} has no range", record.work_day_id)))
    }
}
