//! Training plans: routines, validation and questionnaire-based generation.

pub mod generator;
pub mod library;
pub mod types;
pub mod validation;

pub use generator::{generate_plan, ExperienceLevel, FitnessGoal, Questionnaire};
pub use library::{LibraryExercise, MuscleGroup};
pub use types::{ExerciseEntry, ExerciseTable, PlanError, Routine, RoutineBody, TrainingPlan};
pub use validation::{is_plan_valid, is_plan_value_valid, is_routine_valid, is_table_valid};
