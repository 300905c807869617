//! Shift time-range engine behind the shift calendar.
//!
//! [`time`] turns edited clock fields into concrete instants, [`projector`]
//! flattens backend records into calendar events and merges edits back, and
//! [`ShiftCalendar`] owns the event list between backend round-trips.

mod calendar;
pub mod form;
pub mod models;
pub mod projector;
pub mod source;
pub mod time;

pub use calendar::ShiftCalendar;
pub use form::EditShiftForm;
pub use projector::{merge_event, project_events};
pub use source::{JsonFileSource, ShiftDataSource, ShiftUpdateSink};
pub use time::{compute_shift_range, ShiftRange};
