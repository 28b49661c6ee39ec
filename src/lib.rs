//! Treino - Weekly Training Planner
//!
//! Core of a personal fitness tracker: questionnaire-driven plan generation,
//! plan validation, distribution of routines over the week, a calendar view
//! of the resulting schedule, and a workout execution mode with rest timers.

pub mod plans;
pub mod schedule;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use plans::types::TrainingPlan;
pub use plans::validation::{is_plan_valid, is_table_valid};
pub use schedule::distributor::distribute;
pub use schedule::{WeeklyAssignment, WorkoutCalendar};
pub use storage::config::AppConfig;
pub use workouts::engine::SessionEngine;
