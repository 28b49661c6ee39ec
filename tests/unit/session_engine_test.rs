//! Unit tests for the workout session engine.

use treino::plans::generator::{generate_plan, Questionnaire};
use treino::plans::types::{ExerciseEntry, TrainingPlan};
use treino::storage::config::SessionSettings;
use treino::workouts::engine::SessionEngine;
use treino::workouts::types::{SessionError, SessionStatus};

fn create_test_routine() -> Vec<ExerciseEntry> {
    vec![
        ExerciseEntry::new("Agachamento Livre", 3, "6-10").with_rest(120),
        ExerciseEntry::new("Cadeira Extensora", 2, "12").with_rest(60),
        ExerciseEntry::new("Panturrilha em Pé", 2, "15").with_rest(0),
    ]
}

fn engine() -> SessionEngine {
    SessionEngine::with_settings(&SessionSettings::default())
}

#[test]
fn test_session_engine_load() {
    let mut engine = engine();
    engine
        .load("Treino Inferior", create_test_routine())
        .expect("Should load routine");

    let state = engine.state().unwrap();
    assert_eq!(state.status, SessionStatus::NotStarted);
    assert_eq!(state.session.total_sets(), 7);
    assert_eq!(state.session.routine_name, "Treino Inferior");
}

#[test]
fn test_full_session_walkthrough() {
    let mut engine = engine();
    engine.load("Treino Inferior", create_test_routine()).unwrap();
    engine.start().unwrap();

    // Three sets of squats with two rests of 120s between them.
    for set in 1..=3u8 {
        assert_eq!(engine.current_exercise().unwrap().name, "Agachamento Livre");
        assert_eq!(engine.progress().unwrap().set_number, set);
        engine.complete_set().unwrap();
        assert_eq!(engine.status(), Some(SessionStatus::Resting));
        for _ in 0..120 {
            engine.tick();
        }
    }

    assert_eq!(engine.current_exercise().unwrap().name, "Cadeira Extensora");
    engine.complete_set().unwrap();
    engine.skip_rest().unwrap();
    engine.complete_set().unwrap();
    for _ in 0..60 {
        engine.tick();
    }

    // No rest prescribed for calves: the next set starts immediately.
    assert_eq!(engine.current_exercise().unwrap().name, "Panturrilha em Pé");
    engine.complete_set().unwrap();
    assert_eq!(engine.status(), Some(SessionStatus::InProgress));
    assert_eq!(engine.progress().unwrap().set_number, 2);

    engine.complete_set().unwrap();
    assert!(engine.is_complete());
    assert_eq!(engine.progress().unwrap().completed_sets, 7);
}

#[test]
fn test_elapsed_time_excludes_pause() {
    let mut engine = engine();
    engine.load("Treino", create_test_routine()).unwrap();
    engine.start().unwrap();

    for _ in 0..10 {
        engine.tick();
    }
    engine.pause().unwrap();
    for _ in 0..10 {
        engine.tick();
    }
    engine.resume().unwrap();
    engine.tick();

    assert_eq!(engine.state().unwrap().total_elapsed_seconds, 11);
}

#[test]
fn test_stop_ends_session() {
    let mut engine = engine();
    engine.load("Treino", create_test_routine()).unwrap();
    engine.start().unwrap();
    engine.stop().unwrap();

    assert_eq!(engine.status(), Some(SessionStatus::Stopped));
    assert!(!engine.is_active());
    assert!(engine.complete_set().is_err());
}

#[test]
fn test_load_from_generated_plan() {
    let plan = generate_plan(&Questionnaire::default());
    let name = plan.name_at(0).unwrap().to_string();

    let mut engine = engine();
    engine.load_from_plan(&plan, &name).expect("Should load routine");
    assert!(engine.state().unwrap().session.total_sets() > 0);

    let err = engine.load_from_plan(&TrainingPlan::new(), "Treino X").unwrap_err();
    assert!(matches!(err, SessionError::RoutineNotFound(_)));
}

#[test]
fn test_reset_clears_session() {
    let mut engine = engine();
    engine.load("Treino", create_test_routine()).unwrap();
    engine.reset();
    assert!(engine.state().is_none());
    assert!(matches!(engine.pause(), Err(SessionError::NoSessionLoaded)));
}
