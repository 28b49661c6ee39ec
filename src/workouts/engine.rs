//! Workout execution engine.
//!
//! Drives one routine set by set. Completing a set starts the rest timer;
//! `tick()` counts it down once per second. When the timer runs out the
//! engine either moves on to the next set by itself or waits for
//! `finish_rest()`, depending on the auto-advance setting.

use chrono::Utc;

use crate::plans::types::{ExerciseEntry, TrainingPlan};
use crate::storage::config::SessionSettings;
use crate::workouts::types::{
    SessionError, SessionProgress, SessionState, SessionStatus, WorkoutSession,
};

/// Workout execution engine.
pub struct SessionEngine {
    /// Current session state
    state: Option<SessionState>,
    /// Rest used when an exercise does not prescribe one
    default_rest_seconds: u32,
    /// Start the next set automatically when rest runs out
    auto_advance: bool,
    /// Step added by `extend_rest_step()`
    rest_extension_seconds: u32,
}

impl SessionEngine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self::with_settings(&SessionSettings::default())
    }

    /// Create an engine from session settings.
    pub fn with_settings(settings: &SessionSettings) -> Self {
        Self {
            state: None,
            default_rest_seconds: settings.default_rest_seconds,
            auto_advance: settings.auto_advance,
            rest_extension_seconds: settings.rest_extension_seconds,
        }
    }

    /// Load a routine for execution. Exercises without sets are dropped.
    pub fn load(
        &mut self,
        routine_name: impl Into<String>,
        exercises: Vec<ExerciseEntry>,
    ) -> Result<(), SessionError> {
        let routine_name = routine_name.into();
        let exercises: Vec<ExerciseEntry> = exercises.into_iter().filter(|e| e.sets > 0).collect();

        if exercises.is_empty() {
            return Err(SessionError::EmptyRoutine(routine_name));
        }

        tracing::info!(
            "Session loaded: {} ({} exercises)",
            routine_name,
            exercises.len()
        );

        self.state = Some(SessionState {
            session: WorkoutSession::new(routine_name, exercises),
            status: SessionStatus::NotStarted,
            paused_from: None,
            exercise_index: 0,
            set_number: 1,
            completed_sets: 0,
            rest_remaining_seconds: 0,
            total_elapsed_seconds: 0,
        });
        Ok(())
    }

    /// Load a routine from a plan by name.
    pub fn load_from_plan(&mut self, plan: &TrainingPlan, name: &str) -> Result<(), SessionError> {
        let body = plan
            .get(name)
            .ok_or_else(|| SessionError::RoutineNotFound(name.to_string()))?;
        self.load(name, body.entries())
    }

    fn state_in(
        &mut self,
        action: &'static str,
        allowed: &[SessionStatus],
    ) -> Result<&mut SessionState, SessionError> {
        let state = self.state.as_mut().ok_or(SessionError::NoSessionLoaded)?;
        if !allowed.contains(&state.status) {
            return Err(SessionError::InvalidState {
                action,
                status: state.status,
            });
        }
        Ok(state)
    }

    /// Start the loaded session.
    pub fn start(&mut self) -> Result<(), SessionError> {
        let state = self.state_in("start", &[SessionStatus::NotStarted])?;

        state.status = SessionStatus::InProgress;
        state.session.started_at = Some(Utc::now());
        tracing::info!("Session started");
        Ok(())
    }

    /// Mark the current set as done and start resting.
    pub fn complete_set(&mut self) -> Result<(), SessionError> {
        let default_rest = self.default_rest_seconds;
        let state = self.state_in("complete a set", &[SessionStatus::InProgress])?;

        state.completed_sets += 1;
        if state.completed_sets >= state.session.total_sets() {
            state.status = SessionStatus::Completed;
            state.session.finished_at = Some(Utc::now());
            tracing::info!("Session completed: {} sets", state.completed_sets);
            return Ok(());
        }

        let rest = state.session.exercises[state.exercise_index]
            .rest_seconds
            .unwrap_or(default_rest);
        if rest == 0 {
            advance(state);
        } else {
            state.status = SessionStatus::Resting;
            state.rest_remaining_seconds = rest;
            tracing::debug!("Resting {} seconds", rest);
        }
        Ok(())
    }

    /// Advance the session by one second.
    ///
    /// Time does not advance when paused, stopped, completed or not started.
    pub fn tick(&mut self) {
        let auto_advance = self.auto_advance;
        let state = match self.state.as_mut() {
            Some(s) if matches!(s.status, SessionStatus::InProgress | SessionStatus::Resting) => s,
            _ => return,
        };

        state.total_elapsed_seconds += 1;

        if state.status == SessionStatus::Resting && state.rest_remaining_seconds > 0 {
            state.rest_remaining_seconds -= 1;
            if state.rest_remaining_seconds == 0 {
                tracing::debug!("Rest finished");
                if auto_advance {
                    advance(state);
                }
            }
        }
    }

    /// End rest and start the next set.
    pub fn finish_rest(&mut self) -> Result<(), SessionError> {
        let state = self.state_in("finish rest", &[SessionStatus::Resting])?;
        advance(state);
        Ok(())
    }

    /// Skip the remaining rest (alias for finish_rest).
    pub fn skip_rest(&mut self) -> Result<(), SessionError> {
        self.finish_rest()
    }

    /// Add seconds to the running rest timer.
    pub fn extend_rest(&mut self, seconds: u32) -> Result<(), SessionError> {
        let state = self.state_in("extend rest", &[SessionStatus::Resting])?;
        state.rest_remaining_seconds = state.rest_remaining_seconds.saturating_add(seconds);
        tracing::debug!("Rest extended by {} seconds", seconds);
        Ok(())
    }

    /// Extend the running rest timer by the configured step.
    pub fn extend_rest_step(&mut self) -> Result<(), SessionError> {
        self.extend_rest(self.rest_extension_seconds)
    }

    /// Pause the session.
    pub fn pause(&mut self) -> Result<(), SessionError> {
        let state = self.state_in("pause", &[SessionStatus::InProgress, SessionStatus::Resting])?;
        state.paused_from = Some(state.status);
        state.status = SessionStatus::Paused;
        tracing::info!("Session paused");
        Ok(())
    }

    /// Resume the paused session where it left off.
    pub fn resume(&mut self) -> Result<(), SessionError> {
        let state = self.state_in("resume", &[SessionStatus::Paused])?;
        state.status = state.paused_from.take().unwrap_or(SessionStatus::InProgress);
        tracing::info!("Session resumed");
        Ok(())
    }

    /// Stop the session early. A completed or stopped session stays as it is.
    pub fn stop(&mut self) -> Result<(), SessionError> {
        let state = self.state_in(
            "stop",
            &[
                SessionStatus::NotStarted,
                SessionStatus::InProgress,
                SessionStatus::Resting,
                SessionStatus::Paused,
            ],
        )?;
        state.paused_from = None;
        state.status = SessionStatus::Stopped;
        state.session.finished_at = Some(Utc::now());
        tracing::info!("Session stopped");
        Ok(())
    }

    /// Get the current session state.
    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    /// Current status, if a session is loaded.
    pub fn status(&self) -> Option<SessionStatus> {
        self.state.as_ref().map(|s| s.status)
    }

    /// Exercise currently being performed.
    pub fn current_exercise(&self) -> Option<&ExerciseEntry> {
        let state = self.state.as_ref()?;
        if state.status == SessionStatus::Completed {
            return None;
        }
        state.session.exercises.get(state.exercise_index)
    }

    /// Where the session is.
    pub fn progress(&self) -> Option<SessionProgress> {
        let state = self.state.as_ref()?;
        let resting = state.status == SessionStatus::Resting
            || state.paused_from == Some(SessionStatus::Resting);
        Some(SessionProgress {
            exercise_index: state.exercise_index,
            set_number: state.set_number,
            completed_sets: state.completed_sets,
            total_sets: state.session.total_sets(),
            rest_remaining_seconds: resting.then_some(state.rest_remaining_seconds),
        })
    }

    /// Check if the session is complete.
    pub fn is_complete(&self) -> bool {
        self.status() == Some(SessionStatus::Completed)
    }

    /// Check if the session is active (in progress, resting, or paused).
    pub fn is_active(&self) -> bool {
        matches!(
            self.status(),
            Some(SessionStatus::InProgress | SessionStatus::Resting | SessionStatus::Paused)
        )
    }

    /// Reset the engine, clearing the loaded session.
    pub fn reset(&mut self) {
        self.state = None;
    }
}

impl Default for SessionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Move to the next set, or the first set of the next exercise.
fn advance(state: &mut SessionState) {
    let sets = state.session.exercises[state.exercise_index].sets;
    if state.set_number < sets {
        state.set_number += 1;
    } else if state.exercise_index + 1 < state.session.exercises.len() {
        state.exercise_index += 1;
        state.set_number = 1;
        tracing::debug!("Moved to exercise {}", state.exercise_index);
    }
    state.rest_remaining_seconds = 0;
    state.status = SessionStatus::InProgress;
}
