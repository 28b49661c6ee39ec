//! Unit tests for plan decoding, validation and generation.

use serde_json::json;
use treino::plans::generator::{generate_plan, ExperienceLevel, FitnessGoal, Questionnaire};
use treino::plans::types::{ExerciseTable, PlanError, RoutineBody, TrainingPlan};
use treino::plans::validation::{is_plan_valid, is_plan_value_valid, is_table_valid};
use treino::schedule::WeeklySchedule;

/// Plan as exported by the questionnaire flow: routine name to records.
const SAMPLE_PLAN: &str = r#"{
    "Treino Superior": [
        {"Exercício": "Supino Reto", "Séries": 4, "Repetições": "8-12", "Descanso": "90s"},
        {"Exercício": "Remada Curvada", "Séries": 4, "Repetições": "8-12", "Descanso": "90s"}
    ],
    "Treino Inferior": [
        {"Exercício": "Agachamento Livre", "Séries": 4, "Repetições": "6-10", "Descanso": "120s"}
    ]
}"#;

#[test]
fn test_empty_plan_invalid() {
    assert!(!is_plan_valid(Some(&TrainingPlan::new())));
    assert!(!is_plan_value_valid(&json!({})));
}

#[test]
fn test_sample_plan_valid() {
    let plan = TrainingPlan::from_json(SAMPLE_PLAN).expect("Should parse plan");

    assert!(is_plan_valid(Some(&plan)));
    assert_eq!(
        plan.names().collect::<Vec<_>>(),
        vec!["Treino Superior", "Treino Inferior"]
    );

    let lower = plan.get("Treino Inferior").unwrap().entries();
    assert_eq!(lower[0].name, "Agachamento Livre");
    assert_eq!(lower[0].rest_seconds, Some(120));
}

#[test]
fn test_table_without_exercise_column_invalid() {
    let plan = TrainingPlan::from_value(&json!({
        "A": [{"Exercise": "Bench Press", "Sets": 4}]
    }))
    .unwrap();

    let Some(RoutineBody::Table(table)) = plan.get("A") else {
        panic!("expected a table body");
    };
    assert!(!is_table_valid(Some(table)));
    assert!(!is_plan_valid(Some(&plan)));
}

#[test]
fn test_single_valid_table_makes_plan_valid() {
    let mut table = ExerciseTable::with_columns(["Exercício"]);
    table.push_row(["Prancha"]);
    let plan = TrainingPlan::new()
        .with_routine("Vazio", RoutineBody::Table(ExerciseTable::with_columns(["Exercício"])))
        .with_routine("A", RoutineBody::Table(table));

    assert!(is_plan_valid(Some(&plan)));
}

#[test]
fn test_non_mapping_rejected() {
    assert!(!is_plan_value_valid(&json!(null)));
    assert!(!is_plan_value_valid(&json!(["Treino A"])));
    assert!(matches!(
        TrainingPlan::from_json("[1, 2]"),
        Err(PlanError::NotAMapping)
    ));
    assert!(matches!(
        TrainingPlan::from_json("{not json"),
        Err(PlanError::InvalidJson(_))
    ));
}

#[test]
fn test_generated_schedule_end_to_end() {
    let questionnaire = Questionnaire {
        goal: FitnessGoal::Hypertrophy,
        experience: ExperienceLevel::Intermediate,
        days_per_week: 4,
        session_minutes: 45,
    };
    let plan = generate_plan(&questionnaire);
    assert!(is_plan_valid(Some(&plan)));

    let schedule = WeeklySchedule::from_questionnaire(&questionnaire);
    let labels: Vec<&str> = schedule
        .assignment
        .iter()
        .map(|(_, a)| a.label())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Treino Superior A",
            "Treino Inferior A",
            "Descanso",
            "Treino Superior B",
            "Treino Inferior B",
            "Descanso",
            "Descanso",
        ]
    );
}

#[test]
fn test_three_day_generated_split() {
    let schedule = WeeklySchedule::from_questionnaire(&Questionnaire {
        days_per_week: 3,
        ..Default::default()
    });
    let training: Vec<&str> = schedule
        .assignment
        .iter()
        .filter_map(|(_, a)| a.routine())
        .collect();

    assert_eq!(training.len(), 3);
    assert!(training[2].contains("Pernas"));
}
