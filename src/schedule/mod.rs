//! Weekly scheduling of training routines.
//!
//! Turns a training plan and a weekly frequency into a weekday assignment,
//! and projects that assignment onto calendar dates.

pub mod assignment;
pub mod calendar;
pub mod distributor;
pub mod weekday;

pub use assignment::{DayAssignment, WeeklyAssignment, WeeklySchedule, REST_SENTINEL};
pub use calendar::{CalendarEntry, WorkoutCalendar};
pub use distributor::{distribute, Candidate, DayRule};
pub use weekday::TrainingDay;
