//! Questionnaire-driven plan generation.
//!
//! The split is picked from the weekly day count, exercises are drawn from
//! the built-in library and prescribed according to the goal and experience.

use serde::{Deserialize, Serialize};

use super::library::{exercises_for, MuscleGroup};
use super::types::{ExerciseEntry, ExerciseTable, RoutineBody, TrainingPlan};

/// Rough time one exercise takes, sets and rest included.
const MINUTES_PER_EXERCISE: u16 = 8;
/// Bounds on exercises per routine.
const MIN_EXERCISES: usize = 3;
const MAX_EXERCISES: usize = 8;

/// What the user wants out of training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Muscle gain
    #[default]
    Hypertrophy,
    /// Maximal strength
    Strength,
    /// Fat loss
    WeightLoss,
    /// Muscular endurance
    Endurance,
}

impl FitnessGoal {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            FitnessGoal::Hypertrophy => "Hipertrofia",
            FitnessGoal::Strength => "Força",
            FitnessGoal::WeightLoss => "Emagrecimento",
            FitnessGoal::Endurance => "Resistência",
        }
    }

    /// Base prescription for this goal.
    pub fn prescription(&self) -> Prescription {
        match self {
            FitnessGoal::Hypertrophy => Prescription::new(3, "8-12", 60),
            FitnessGoal::Strength => Prescription::new(4, "4-6", 150),
            FitnessGoal::WeightLoss => Prescription::new(3, "12-15", 45),
            FitnessGoal::Endurance => Prescription::new(2, "15-20", 30),
        }
    }
}

impl std::fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Training experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Iniciante",
            ExperienceLevel::Intermediate => "Intermediário",
            ExperienceLevel::Advanced => "Avançado",
        }
    }

    /// Adjust a base set count for this level.
    pub fn adjust_sets(&self, sets: u8) -> u8 {
        match self {
            ExperienceLevel::Beginner => sets.saturating_sub(1).max(2),
            ExperienceLevel::Intermediate => sets,
            ExperienceLevel::Advanced => sets.saturating_add(1),
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Sets, reps and rest for one exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prescription {
    pub sets: u8,
    pub reps: &'static str,
    pub rest_seconds: u32,
}

impl Prescription {
    const fn new(sets: u8, reps: &'static str, rest_seconds: u32) -> Self {
        Self {
            sets,
            reps,
            rest_seconds,
        }
    }
}

/// Answers to the onboarding questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Questionnaire {
    /// Training goal
    pub goal: FitnessGoal,
    /// Experience level
    pub experience: ExperienceLevel,
    /// Desired training days per week
    pub days_per_week: u32,
    /// Available time per session in minutes
    pub session_minutes: u16,
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self {
            goal: FitnessGoal::Hypertrophy,
            experience: ExperienceLevel::Beginner,
            days_per_week: 3,
            session_minutes: 60,
        }
    }
}

impl Questionnaire {
    /// Number of exercises that fit in one session.
    pub fn exercises_per_routine(&self) -> usize {
        usize::from(self.session_minutes / MINUTES_PER_EXERCISE).clamp(MIN_EXERCISES, MAX_EXERCISES)
    }
}

/// Routine names and the muscle groups each one trains.
fn split_for(days_per_week: u32) -> Vec<(&'static str, Vec<MuscleGroup>)> {
    use MuscleGroup::*;

    match days_per_week {
        0 | 1 => vec![(
            "Treino Full Body",
            vec![Quadriceps, Chest, Back, Shoulders, Hamstrings, Core],
        )],
        2 => vec![
            ("Treino Superior", vec![Chest, Back, Shoulders, Biceps, Triceps]),
            ("Treino Inferior", vec![Quadriceps, Hamstrings, Glutes, Calves, Core]),
        ],
        3 => vec![
            ("Treino A - Push (Peito/Ombro/Tríceps)", vec![Chest, Shoulders, Triceps]),
            ("Treino B - Pull (Costas/Bíceps)", vec![Back, Biceps, Core]),
            ("Treino C - Pernas", vec![Quadriceps, Hamstrings, Glutes, Calves]),
        ],
        4 => vec![
            ("Treino Superior A", vec![Chest, Back, Shoulders, Triceps]),
            ("Treino Inferior A", vec![Quadriceps, Hamstrings, Calves]),
            ("Treino Superior B", vec![Back, Chest, Shoulders, Biceps]),
            ("Treino Inferior B", vec![Glutes, Hamstrings, Quadriceps, Core]),
        ],
        _ => vec![
            ("Treino A - Peito", vec![Chest, Triceps]),
            ("Treino B - Costas", vec![Back, Biceps]),
            ("Treino C - Pernas", vec![Quadriceps, Hamstrings, Glutes, Calves]),
            ("Treino D - Ombros", vec![Shoulders, Core]),
            ("Treino E - Braços", vec![Biceps, Triceps]),
        ],
    }
}

/// Pick up to `budget` exercises, taking one from each group in turn.
fn select_exercises(groups: &[MuscleGroup], budget: usize) -> Vec<&'static str> {
    let pools: Vec<_> = groups.iter().map(|g| exercises_for(*g)).collect();
    let deepest = pools.iter().map(Vec::len).max().unwrap_or(0);

    let mut selected: Vec<&'static str> = Vec::with_capacity(budget);
    for depth in 0..deepest {
        for pool in &pools {
            if selected.len() == budget {
                return selected;
            }
            if let Some(exercise) = pool.get(depth) {
                if !selected.contains(&exercise.name) {
                    selected.push(exercise.name);
                }
            }
        }
    }
    selected
}

/// Build a training plan from questionnaire answers.
pub fn generate_plan(questionnaire: &Questionnaire) -> TrainingPlan {
    let base = questionnaire.goal.prescription();
    let sets = questionnaire.experience.adjust_sets(base.sets);
    let budget = questionnaire.exercises_per_routine();

    let mut plan = TrainingPlan::new();
    for (name, groups) in split_for(questionnaire.days_per_week) {
        let entries: Vec<ExerciseEntry> = select_exercises(&groups, budget)
            .into_iter()
            .map(|exercise| ExerciseEntry::new(exercise, sets, base.reps).with_rest(base.rest_seconds))
            .collect();
        plan.insert(name, RoutineBody::Table(ExerciseTable::from_entries(&entries)));
    }

    tracing::info!(
        "Generated {} routine(s) for {} day(s)/week ({}, {})",
        plan.len(),
        questionnaire.days_per_week,
        questionnaire.goal,
        questionnaire.experience
    );
    plan
}
