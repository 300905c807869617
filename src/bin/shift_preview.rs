use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use shiftdesk::components::shift_schedule::models::{ShiftRecord, ShiftUpdatePayload};
use shiftdesk::components::shift_schedule::{JsonFileSource, ShiftCalendar, ShiftUpdateSink};
use shiftdesk::error::{other_error, sink_error, DeskResult};
use shiftdesk::startup;
use std::sync::Arc;
use tracing::info;

/// Sink that refuses writes, the preview only reads the dump
struct ReadOnlySink;

#[async_trait]
impl ShiftUpdateSink for ReadOnlySink {
    async fn create_day_shift(
        &self,
        _worker_id: i64,
        _work_date: NaiveDate,
    ) -> DeskResult<ShiftRecord> {
        Err(sink_error("Preview is read-only"))
    }

    async fn update_day_shift(
        &self,
        _work_day_id: i64,
        _payload: &ShiftUpdatePayload,
    ) -> DeskResult<ShiftRecord> {
        Err(sink_error("Preview is read-only"))
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    startup::init_logging()?;

    let mut args = std::env::args().skip(1);
    let dump = args
        .next()
        .ok_or_else(|| other_error("Usage: shift_preview <dump.json> [YYYY-MM-DD]"))?;
    let date = match args.next() {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|e| other_error(&format!("Invalid date {}: {}", raw, e)))?,
        None => Local::now().date_naive(),
    };

    let config = startup::load_config()?;

    let mut calendar = ShiftCalendar::new(
        &config,
        Arc::new(JsonFileSource::new(&dump)),
        Arc::new(ReadOnlySink),
    )?;
    calendar.load_week(date).await?;

    info!("Previewing week of {} from {}", date, dump);

    let tz = calendar.tz();
    for event in calendar.events() {
        let start = event.start.with_timezone(&tz);
        let end = event.end.with_timezone(&tz);
        let title = if event.title.is_empty() {
            format!("({:?})", event.type_work_day)
        } else {
            event.title.clone()
        };

        println!(
            "[{}] {} {} - {} {}",
            event.id,
            title,
            start.format("%a %Y-%m-%d %H:%M"),
            end.format("%H:%M"),
            event.time_worked_out.as_deref().unwrap_or("--:--"),
        );
    }

    Ok(())
}
