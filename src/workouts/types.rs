//! Workout session types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::plans::types::ExerciseEntry;

/// Current status of a workout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Session not started
    #[default]
    NotStarted,
    /// Performing a set
    InProgress,
    /// Rest timer running between sets
    Resting,
    /// Session paused
    Paused,
    /// Every set completed
    Completed,
    /// Session stopped early
    Stopped,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::NotStarted => write!(f, "Not Started"),
            SessionStatus::InProgress => write!(f, "In Progress"),
            SessionStatus::Resting => write!(f, "Resting"),
            SessionStatus::Paused => write!(f, "Paused"),
            SessionStatus::Completed => write!(f, "Completed"),
            SessionStatus::Stopped => write!(f, "Stopped"),
        }
    }
}

/// A routine being performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Unique identifier
    pub id: Uuid,
    /// Routine name from the plan
    pub routine_name: String,
    /// Exercises in execution order
    pub exercises: Vec<ExerciseEntry>,
    /// When the session was started
    pub started_at: Option<DateTime<Utc>>,
    /// When the session completed or was stopped
    pub finished_at: Option<DateTime<Utc>>,
}

impl WorkoutSession {
    /// Create a session for a routine.
    pub fn new(routine_name: String, exercises: Vec<ExerciseEntry>) -> Self {
        Self {
            id: Uuid::new_v4(),
            routine_name,
            exercises,
            started_at: None,
            finished_at: None,
        }
    }

    /// Total number of sets across all exercises.
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|e| u32::from(e.sets)).sum()
    }
}

/// Snapshot of where the session is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    /// Index of the current exercise
    pub exercise_index: usize,
    /// Current set of the current exercise (1-based)
    pub set_number: u8,
    /// Sets completed so far
    pub completed_sets: u32,
    /// Sets in the whole session
    pub total_sets: u32,
    /// Seconds left on the rest timer, when resting
    pub rest_remaining_seconds: Option<u32>,
}

/// Mutable execution state.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// The session being executed
    pub session: WorkoutSession,
    /// Current execution status
    pub status: SessionStatus,
    /// Status to return to on resume
    pub paused_from: Option<SessionStatus>,
    /// Index of the current exercise
    pub exercise_index: usize,
    /// Current set (1-based)
    pub set_number: u8,
    /// Sets completed so far
    pub completed_sets: u32,
    /// Seconds left on the rest timer
    pub rest_remaining_seconds: u32,
    /// Active time in seconds (excludes pauses)
    pub total_elapsed_seconds: u32,
}

/// Errors related to workout sessions.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Routine not present in the plan
    #[error("Routine not found: {0}")]
    RoutineNotFound(String),

    /// Routine has nothing to perform
    #[error("Routine has no sets: {0}")]
    EmptyRoutine(String),

    /// Operation not allowed in the current status
    #[error("Cannot {action} while {status}")]
    InvalidState {
        action: &'static str,
        status: SessionStatus,
    },

    /// No session loaded
    #[error("No session loaded")]
    NoSessionLoaded,
}
