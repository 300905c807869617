use super::models::{ShiftRecord, ShiftUpdatePayload, WorkerShifts};
use crate::error::{source_error, DeskResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{debug, info};

/// Upstream collaborator that supplies shift data grouped per worker
#[async_trait]
pub trait ShiftDataSource: Send + Sync {
    /// Fetch every worker's records with `work_date` in `from..=to`
    async fn fetch_shifts(&self, from: NaiveDate, to: NaiveDate)
        -> DeskResult<Vec<WorkerShifts>>;
}

/// Downstream collaborator that persists day shifts
#[async_trait]
pub trait ShiftUpdateSink: Send + Sync {
    /// Create an empty day shift and return the stored record
    async fn create_day_shift(&self, worker_id: i64, work_date: NaiveDate)
        -> DeskResult<ShiftRecord>;

    /// Apply `payload` to an existing day shift and return the stored record
    async fn update_day_shift(
        &self,
        work_day_id: i64,
        payload: &ShiftUpdatePayload,
    ) -> DeskResult<ShiftRecord>;
}

/// Shift data source backed by a JSON dump of worker groups
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Keep only the records dated inside `from..=to`
pub fn filter_window(
    groups: Vec<WorkerShifts>,
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<WorkerShifts> {
    groups
        .into_iter()
        .map(|mut group| {
            group
                .work_days
                .retain(|record| record.work_date >= from && record.work_date <= to);
            group
        })
        .collect()
}

#[async_trait]
impl ShiftDataSource for JsonFileSource {
    async fn fetch_shifts(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DeskResult<Vec<WorkerShifts>> {
        info!("Reading shift dump from {}", self.path.display());

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            source_error(&format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let groups: Vec<WorkerShifts> = serde_json::from_str(&content).map_err(|e| {
            source_error(&format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        let groups = filter_window(groups, from, to);
        debug!(
            "Loaded {} worker groups for {} - {}",
            groups.len(),
            from,
            to
        );

        Ok(groups)
    }
}
