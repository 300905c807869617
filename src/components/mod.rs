// Export components
pub mod shift_schedule;

// Re-export the calendar session
pub use shift_schedule::ShiftCalendar;
