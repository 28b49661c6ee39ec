//! Workout execution mode: performing a routine set by set with rest timers.

pub mod engine;
pub mod types;

pub use engine::SessionEngine;
pub use types::{SessionError, SessionProgress, SessionState, SessionStatus, WorkoutSession};
