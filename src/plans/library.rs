//! Built-in exercise library.
//!
//! Curated exercises grouped by muscle group, compound movements first so
//! that shorter sessions keep the big lifts.

use serde::{Deserialize, Serialize};

/// Muscle group an exercise primarily trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Quadriceps,
    Hamstrings,
    Glutes,
    Calves,
    Core,
}

impl MuscleGroup {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Peito",
            MuscleGroup::Back => "Costas",
            MuscleGroup::Shoulders => "Ombros",
            MuscleGroup::Biceps => "Bíceps",
            MuscleGroup::Triceps => "Tríceps",
            MuscleGroup::Quadriceps => "Quadríceps",
            MuscleGroup::Hamstrings => "Posteriores",
            MuscleGroup::Glutes => "Glúteos",
            MuscleGroup::Calves => "Panturrilhas",
            MuscleGroup::Core => "Abdômen",
        }
    }

    /// Whether the group belongs to the lower body.
    pub fn is_lower_body(&self) -> bool {
        matches!(
            self,
            MuscleGroup::Quadriceps
                | MuscleGroup::Hamstrings
                | MuscleGroup::Glutes
                | MuscleGroup::Calves
        )
    }

    /// Get all groups.
    pub fn all() -> Vec<MuscleGroup> {
        vec![
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Quadriceps,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
            MuscleGroup::Core,
        ]
    }
}

impl std::fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A library exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryExercise {
    /// Display name
    pub name: &'static str,
    /// Primary muscle group
    pub muscle_group: MuscleGroup,
    /// Multi-joint movement
    pub compound: bool,
}

const fn compound(name: &'static str, muscle_group: MuscleGroup) -> LibraryExercise {
    LibraryExercise {
        name,
        muscle_group,
        compound: true,
    }
}

const fn isolation(name: &'static str, muscle_group: MuscleGroup) -> LibraryExercise {
    LibraryExercise {
        name,
        muscle_group,
        compound: false,
    }
}

static EXERCISES: &[LibraryExercise] = &[
    // Chest
    compound("Supino Reto com Barra", MuscleGroup::Chest),
    compound("Supino Inclinado com Halteres", MuscleGroup::Chest),
    isolation("Crucifixo com Halteres", MuscleGroup::Chest),
    isolation("Crossover na Polia", MuscleGroup::Chest),
    // Back
    compound("Puxada Frontal", MuscleGroup::Back),
    compound("Remada Curvada com Barra", MuscleGroup::Back),
    compound("Remada Baixa Sentada", MuscleGroup::Back),
    isolation("Pulldown com Corda", MuscleGroup::Back),
    // Shoulders
    compound("Desenvolvimento com Halteres", MuscleGroup::Shoulders),
    isolation("Elevação Lateral", MuscleGroup::Shoulders),
    isolation("Crucifixo Invertido", MuscleGroup::Shoulders),
    // Biceps
    isolation("Rosca Direta com Barra", MuscleGroup::Biceps),
    isolation("Rosca Martelo", MuscleGroup::Biceps),
    // Triceps
    compound("Mergulho nas Paralelas", MuscleGroup::Triceps),
    isolation("Tríceps na Polia", MuscleGroup::Triceps),
    isolation("Tríceps Francês", MuscleGroup::Triceps),
    // Quadriceps
    compound("Agachamento Livre", MuscleGroup::Quadriceps),
    compound("Leg Press 45°", MuscleGroup::Quadriceps),
    isolation("Cadeira Extensora", MuscleGroup::Quadriceps),
    // Hamstrings
    compound("Levantamento Terra Romeno", MuscleGroup::Hamstrings),
    isolation("Mesa Flexora", MuscleGroup::Hamstrings),
    // Glutes
    compound("Elevação Pélvica", MuscleGroup::Glutes),
    compound("Afundo com Halteres", MuscleGroup::Glutes),
    // Calves
    isolation("Panturrilha em Pé", MuscleGroup::Calves),
    isolation("Panturrilha Sentado", MuscleGroup::Calves),
    // Core
    isolation("Prancha", MuscleGroup::Core),
    isolation("Abdominal Infra", MuscleGroup::Core),
];

/// All library exercises.
pub fn all_exercises() -> &'static [LibraryExercise] {
    EXERCISES
}

/// Exercises for one muscle group, compound movements first.
pub fn exercises_for(group: MuscleGroup) -> Vec<&'static LibraryExercise> {
    let mut found: Vec<_> = EXERCISES
        .iter()
        .filter(|e| e.muscle_group == group)
        .collect();
    // Stable sort keeps curated order within each kind.
    found.sort_by_key(|e| !e.compound);
    found
}

/// Find an exercise by exact name.
pub fn find(name: &str) -> Option<&'static LibraryExercise> {
    EXERCISES.iter().find(|e| e.name == name)
}
