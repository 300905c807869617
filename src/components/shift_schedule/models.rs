use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Kind of day a shift record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeWorkDay {
    Working,
    Weekend,
    Medical,
    Vacation,
    Timeoff,
    Truancy,
}

impl TypeWorkDay {
    /// Only working days carry a meaningful time range
    pub fn has_time_range(self) -> bool {
        matches!(self, TypeWorkDay::Working)
    }
}

/// Quality flag set by a manager on a worked day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Estimation {
    NoViolation,
    GrossViolation,
    MinorViolation,
    OneRemark,
}

/// One worker's day as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    pub worker_id: i64,
    pub work_day_id: i64,
    pub work_date: NaiveDate,
    pub type_work_day: TypeWorkDay,
    #[serde(default)]
    pub start_working_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_working_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_worked_out: Option<String>,
    #[serde(default)]
    pub estimation: Option<Estimation>,
    #[serde(default)]
    pub prize: Option<f64>,
    #[serde(default)]
    pub fine: Option<f64>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl ShiftRecord {
    /// Both ends of the shift, if scheduled
    pub fn time_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.start_working_time, self.end_working_time) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// Worker group as delivered by the shift data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerShifts {
    pub worker_id: i64,
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub work_days: Vec<ShiftRecord>,
}

/// Worker identity kept by the calendar for titling events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerInfo {
    pub worker_id: i64,
    pub name: String,
    pub surname: String,
}

impl WorkerInfo {
    /// Display name used as the event title
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

impl From<&WorkerShifts> for WorkerInfo {
    fn from(group: &WorkerShifts) -> Self {
        Self {
            worker_id: group.worker_id,
            name: group.name.clone(),
            surname: group.surname.clone(),
        }
    }
}

/// Flat, displayable calendar entry derived from a shift record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Same as the record's `work_day_id`; negative while provisional
    pub id: i64,
    pub worker_id: i64,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub type_work_day: TypeWorkDay,
    pub time_worked_out: Option<String>,
    pub estimation: Option<Estimation>,
    pub prize: Option<f64>,
    pub fine: Option<f64>,
    pub comment: Option<String>,
}

/// Body sent to the shift update sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_working_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_working_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_worked_out: Option<String>,
    pub type_work_day: TypeWorkDay,
    pub estimation: Option<Estimation>,
    pub prize: Option<f64>,
    pub fine: Option<f64>,
    pub comment: Option<String>,
}
