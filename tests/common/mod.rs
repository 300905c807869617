use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use shiftdesk::components::shift_schedule::models::{
    ShiftRecord, ShiftUpdatePayload, TypeWorkDay, WorkerShifts,
};
use shiftdesk::components::shift_schedule::source::filter_window;
use shiftdesk::components::shift_schedule::{ShiftDataSource, ShiftUpdateSink};
use shiftdesk::error::{sink_error, DeskResult};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory stand-in for the shift backend
#[derive(Debug, Clone)]
pub struct MockShiftStore {
    groups: Arc<Mutex<Vec<WorkerShifts>>>,
    updates: Arc<Mutex<Vec<(i64, ShiftUpdatePayload)>>>,
    creates: Arc<AtomicI64>,
    next_id: Arc<AtomicI64>,
    fail_create: Arc<AtomicBool>,
    fail_update: Arc<AtomicBool>,
}

impl MockShiftStore {
    /// Create a store holding `groups`
    pub fn new(groups: Vec<WorkerShifts>) -> Self {
        Self {
            groups: Arc::new(Mutex::new(groups)),
            updates: Arc::new(Mutex::new(Vec::new())),
            creates: Arc::new(AtomicI64::new(0)),
            next_id: Arc::new(AtomicI64::new(1000)),
            fail_create: Arc::new(AtomicBool::new(false)),
            fail_update: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make the next create calls fail
    pub fn fail_creates(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    /// Make the next update calls fail
    pub fn fail_updates(&self, fail: bool) {
        self.fail_update.store(fail, Ordering::SeqCst);
    }

    /// Every update payload received so far
    pub async fn updates(&self) -> Vec<(i64, ShiftUpdatePayload)> {
        self.updates.lock().await.clone()
    }

    /// Number of create calls received so far
    pub fn create_count(&self) -> i64 {
        self.creates.load(Ordering::SeqCst)
    }

    /// Number of stored day shifts for a worker on a date
    pub async fn rows_for(&self, worker_id: i64, work_date: NaiveDate) -> usize {
        self.groups
            .lock()
            .await
            .iter()
            .filter(|group| group.worker_id == worker_id)
            .flat_map(|group| group.work_days.iter())
            .filter(|record| record.work_date == work_date)
            .count()
    }
}

#[async_trait]
impl ShiftDataSource for MockShiftStore {
    async fn fetch_shifts(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DeskResult<Vec<WorkerShifts>> {
        let groups = self.groups.lock().await.clone();
        Ok(filter_window(groups, from, to))
    }
}

#[async_trait]
impl ShiftUpdateSink for MockShiftStore {
    async fn create_day_shift(
        &self,
        worker_id: i64,
        work_date: NaiveDate,
    ) -> DeskResult<ShiftRecord> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(sink_error("create rejected"));
        }

        let mut groups = self.groups.lock().await;
        let group = groups
            .iter_mut()
            .find(|group| group.worker_id == worker_id)
            .ok_or_else(|| sink_error("unknown worker"))?;

        let record = ShiftRecord {
            worker_id,
            work_day_id: self.next_id.fetch_add(1, Ordering::SeqCst),
            work_date,
            type_work_day: TypeWorkDay::Working,
            start_working_time: None,
            end_working_time: None,
            time_worked_out: None,
            estimation: None,
            prize: None,
            fine: None,
            comment: None,
        };
        group.work_days.push(record.clone());

        Ok(record)
    }

    async fn update_day_shift(
        &self,
        work_day_id: i64,
        payload: &ShiftUpdatePayload,
    ) -> DeskResult<ShiftRecord> {
        self.updates
            .lock()
            .await
            .push((work_day_id, payload.clone()));
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(sink_error("update rejected"));
        }

        let mut groups = self.groups.lock().await;
        let record = groups
            .iter_mut()
            .flat_map(|group| group.work_days.iter_mut())
            .find(|record| record.work_day_id == work_day_id)
            .ok_or_else(|| sink_error("unknown work day"))?;

        record.start_working_time = payload.start_working_time;
        record.end_working_time = payload.end_working_time;
        record.time_worked_out = payload.time_worked_out.clone();
        record.type_work_day = payload.type_work_day;
        record.estimation = payload.estimation;
        record.prize = payload.prize;
        record.fine = payload.fine;
        record.comment = payload.comment.clone();

        Ok(record.clone())
    }
}

/// UTC instant shorthand
pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

/// Record shorthand
pub fn record(
    worker_id: i64,
    work_day_id: i64,
    date: (i32, u32, u32),
    kind: TypeWorkDay,
    range: Option<(DateTime<Utc>, DateTime<Utc>)>,
) -> ShiftRecord {
    ShiftRecord {
        worker_id,
        work_day_id,
        work_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        type_work_day: kind,
        start_working_time: range.map(|(start, _)| start),
        end_working_time: range.map(|(_, end)| end),
        time_worked_out: range.map(|_| "08:00".to_string()),
        estimation: None,
        prize: None,
        fine: None,
        comment: None,
    }
}

/// Two workers around the week of 2024-04-29 .. 2024-05-05
pub fn sample_groups() -> Vec<WorkerShifts> {
    vec![
        WorkerShifts {
            worker_id: 1,
            name: "Anna".to_string(),
            surname: "Berg".to_string(),
            work_days: vec![
                record(
                    1,
                    101,
                    (2024, 4, 29),
                    TypeWorkDay::Working,
                    Some((utc(2024, 4, 29, 6, 0), utc(2024, 4, 29, 14, 0))),
                ),
                record(1, 102, (2024, 4, 30), TypeWorkDay::Weekend, None),
                record(
                    1,
                    103,
                    (2024, 5, 7),
                    TypeWorkDay::Working,
                    Some((utc(2024, 5, 7, 6, 0), utc(2024, 5, 7, 14, 0))),
                ),
            ],
        },
        WorkerShifts {
            worker_id: 2,
            name: "Olli".to_string(),
            surname: "Koski".to_string(),
            work_days: vec![
                record(
                    2,
                    201,
                    (2024, 5, 1),
                    TypeWorkDay::Working,
                    Some((utc(2024, 5, 1, 14, 0), utc(2024, 5, 1, 22, 0))),
                ),
                record(
                    2,
                    202,
                    (2024, 5, 2),
                    TypeWorkDay::Medical,
                    Some((utc(2024, 5, 2, 8, 0), utc(2024, 5, 2, 16, 0))),
                ),
            ],
        },
    ]
}
