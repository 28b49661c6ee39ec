//! Unit tests for weekly plan distribution.

use treino::plans::types::{ExerciseEntry, ExerciseTable, RoutineBody, TrainingPlan};
use treino::schedule::distributor::distribute;
use treino::schedule::{TrainingDay, WeeklyAssignment, REST_SENTINEL};

fn body() -> RoutineBody {
    let mut table = ExerciseTable::with_columns(["Exercício", "Séries", "Repetições"]);
    table.push_row(["Supino Reto", "4", "8-12"]);
    RoutineBody::Table(table)
}

fn plan(names: &[&str]) -> TrainingPlan {
    let mut plan = TrainingPlan::new();
    for name in names {
        plan.insert(*name, body());
    }
    plan
}

fn labels(week: &WeeklyAssignment) -> Vec<&str> {
    week.iter().map(|(_, a)| a.label()).collect()
}

const R: &str = REST_SENTINEL;

#[test]
fn test_always_seven_canonical_days() {
    let plans = [
        plan(&[]),
        plan(&["A"]),
        plan(&["Treino Superior", "Treino Inferior"]),
        plan(&["A", "B", "C", "D", "E", "F", "G", "H"]),
    ];
    let expected = [
        "Segunda-feira",
        "Terça-feira",
        "Quarta-feira",
        "Quinta-feira",
        "Sexta-feira",
        "Sábado",
        "Domingo",
    ];

    for p in &plans {
        for frequency in 0..=10 {
            let week = distribute(frequency, p);
            let days: Vec<&str> = week.to_labels().into_iter().map(|(d, _)| d).collect();
            assert_eq!(days, expected);
            for (_, assignment) in week.iter() {
                if let Some(name) = assignment.routine() {
                    assert!(p.contains(name), "{name} is not in the plan");
                }
            }
        }
    }
}

#[test]
fn test_empty_plan_is_all_rest() {
    for frequency in 0..=9 {
        assert_eq!(distribute(frequency, &TrainingPlan::new()), WeeklyAssignment::all_rest());
    }
}

#[test]
fn test_zero_frequency_is_all_rest() {
    let week = distribute(0, &plan(&["A", "B", "C"]));
    assert_eq!(labels(&week), vec![R; 7]);
}

#[test]
fn test_one_day() {
    let week = distribute(1, &plan(&["A"]));
    assert_eq!(labels(&week), vec!["A", R, R, R, R, R, R]);
}

#[test]
fn test_two_days_upper_lower() {
    let week = distribute(2, &plan(&["Treino Superior", "Treino Inferior"]));
    assert_eq!(
        labels(&week),
        vec!["Treino Superior", R, R, "Treino Inferior", R, R, R]
    );
}

#[test]
fn test_two_days_keyword_beats_position() {
    let week = distribute(2, &plan(&["Lower Body", "Full", "Upper Body"]));
    assert_eq!(week.get(TrainingDay::Monday).label(), "Upper Body");
    assert_eq!(week.get(TrainingDay::Thursday).label(), "Lower Body");
}

#[test]
fn test_two_days_positional_fallback() {
    let week = distribute(2, &plan(&["A", "B"]));
    assert_eq!(labels(&week), vec!["A", R, R, "B", R, R, R]);

    let single = distribute(2, &plan(&["A"]));
    assert_eq!(labels(&single), vec!["A", R, R, "A", R, R, R]);
}

#[test]
fn test_keyword_matching_is_case_sensitive() {
    let week = distribute(2, &plan(&["inferior", "superior"]));
    // No keyword matches, so positions decide.
    assert_eq!(week.get(TrainingDay::Monday).label(), "inferior");
    assert_eq!(week.get(TrainingDay::Thursday).label(), "superior");
}

#[test]
fn test_three_days_repeat_last() {
    let week = distribute(3, &plan(&["A", "B"]));
    assert_eq!(labels(&week), vec!["A", R, "B", R, "B", R, R]);

    let full = distribute(3, &plan(&["A", "B", "C", "D"]));
    assert_eq!(labels(&full), vec!["A", R, "B", R, "C", R, R]);
}

#[test]
fn test_four_days_broad_keywords() {
    let week = distribute(
        4,
        &plan(&["Push Peito", "Pernas A", "Costas Pull", "Legs B"]),
    );
    assert_eq!(
        labels(&week),
        vec!["Push Peito", "Pernas A", R, "Costas Pull", "Legs B", R, R]
    );
}

#[test]
fn test_four_days_single_match_repeats() {
    let week = distribute(4, &plan(&["Upper", "Lower"]));
    assert_eq!(labels(&week), vec!["Upper", "Lower", R, "Upper", "Lower", R, R]);
}

#[test]
fn test_four_days_unclassified_positions() {
    let week = distribute(4, &plan(&["A", "B", "C", "D"]));
    assert_eq!(labels(&week), vec!["A", "B", R, "C", "D", R, R]);

    let short = distribute(4, &plan(&["A", "B"]));
    assert_eq!(labels(&short), vec!["A", "B", R, "A", "B", R, R]);
}

#[test]
fn test_five_days_round_robin() {
    let week = distribute(5, &plan(&["A", "B"]));
    assert_eq!(labels(&week), vec!["A", "B", R, "A", "B", "A", R]);
}

#[test]
fn test_six_and_seven_days() {
    let six = distribute(6, &plan(&["A", "B", "C"]));
    assert_eq!(labels(&six), vec!["A", "B", R, "C", "A", "B", "C"]);

    let seven = distribute(7, &plan(&["A", "B", "C"]));
    assert_eq!(labels(&seven), vec!["A", "B", "C", "A", "B", "C", "A"]);
}

#[test]
fn test_frequency_above_seven_is_capped() {
    let p = plan(&["A", "B", "C"]);
    assert_eq!(distribute(12, &p), distribute(7, &p));
}

#[test]
fn test_distribution_is_idempotent() {
    let p = plan(&["Upper A", "Lower A", "Upper B", "Lower B", "Full"]);
    for frequency in 0..=8 {
        assert_eq!(distribute(frequency, &p), distribute(frequency, &p));
    }
}

#[test]
fn test_list_bodies_distribute_like_tables() {
    let p = TrainingPlan::new()
        .with_routine("A", RoutineBody::List(vec![ExerciseEntry::named("Remada")]))
        .with_routine("B", RoutineBody::List(vec![ExerciseEntry::named("Agachamento")]));
    let week = distribute(3, &p);
    assert_eq!(labels(&week), vec!["A", R, "B", R, "B", R, R]);
}
