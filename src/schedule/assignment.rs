//! Weekly assignment of routines to weekdays.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::distributor::distribute;
use super::weekday::TrainingDay;
use crate::plans::generator::{generate_plan, Questionnaire};
use crate::plans::types::TrainingPlan;

/// Label used for days without training.
pub const REST_SENTINEL: &str = "Descanso";

/// What happens on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DayAssignment {
    /// Train the named routine
    Routine(String),
    /// Rest day
    #[default]
    Rest,
}

impl DayAssignment {
    /// Routine name, or [`REST_SENTINEL`].
    pub fn label(&self) -> &str {
        match self {
            DayAssignment::Routine(name) => name,
            DayAssignment::Rest => REST_SENTINEL,
        }
    }

    /// Routine name, if this is a training day.
    pub fn routine(&self) -> Option<&str> {
        match self {
            DayAssignment::Routine(name) => Some(name),
            DayAssignment::Rest => None,
        }
    }

    /// Whether this is a rest day.
    pub fn is_rest(&self) -> bool {
        matches!(self, DayAssignment::Rest)
    }

    /// Parse a display label; [`REST_SENTINEL`] is a rest day.
    pub fn from_label(label: &str) -> Self {
        if label == REST_SENTINEL {
            DayAssignment::Rest
        } else {
            DayAssignment::Routine(label.to_string())
        }
    }
}

impl std::fmt::Display for DayAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One assignment per weekday, Monday through Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeeklyAssignment {
    days: [DayAssignment; 7],
}

impl WeeklyAssignment {
    /// A week of rest.
    pub fn all_rest() -> Self {
        Self::default()
    }

    /// Assign a routine to a day.
    pub fn set(&mut self, day: TrainingDay, routine: impl Into<String>) {
        self.days[day.index()] = DayAssignment::Routine(routine.into());
    }

    /// Mark a day as rest.
    pub fn set_rest(&mut self, day: TrainingDay) {
        self.days[day.index()] = DayAssignment::Rest;
    }

    /// Assignment for a day.
    pub fn get(&self, day: TrainingDay) -> &DayAssignment {
        &self.days[day.index()]
    }

    /// All days in weekday order.
    pub fn iter(&self) -> impl Iterator<Item = (TrainingDay, &DayAssignment)> {
        TrainingDay::ALL.into_iter().zip(self.days.iter())
    }

    /// Days with a routine, in weekday order.
    pub fn training_days(&self) -> Vec<TrainingDay> {
        self.iter()
            .filter(|(_, a)| !a.is_rest())
            .map(|(day, _)| day)
            .collect()
    }

    /// Days without a routine, in weekday order.
    pub fn rest_days(&self) -> Vec<TrainingDay> {
        self.iter()
            .filter(|(_, a)| a.is_rest())
            .map(|(day, _)| day)
            .collect()
    }

    /// Number of training days.
    pub fn training_day_count(&self) -> usize {
        self.days.iter().filter(|a| !a.is_rest()).count()
    }

    /// (canonical weekday name, label) pairs in weekday order.
    pub fn to_labels(&self) -> Vec<(&'static str, &str)> {
        self.iter().map(|(day, a)| (day.name(), a.label())).collect()
    }
}

impl Serialize for WeeklyAssignment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(7))?;
        for (day, assignment) in self.iter() {
            map.serialize_entry(day.name(), assignment.label())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeeklyAssignment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let labels = HashMap::<String, String>::deserialize(deserializer)?;
        let mut assignment = WeeklyAssignment::all_rest();
        for day in TrainingDay::ALL {
            let label = labels
                .get(day.name())
                .ok_or_else(|| D::Error::missing_field(day.name()))?;
            assignment.days[day.index()] = DayAssignment::from_label(label);
        }
        if let Some(unknown) = labels.keys().find(|k| TrainingDay::from_name(k).is_none()) {
            return Err(D::Error::custom(format!("unknown weekday '{}'", unknown)));
        }
        Ok(assignment)
    }
}

/// A generated plan together with its weekly distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// Routines available to the user
    pub plan: TrainingPlan,
    /// Weekday distribution of those routines
    pub assignment: WeeklyAssignment,
}

impl WeeklySchedule {
    /// Distribute an existing plan.
    pub fn new(plan: TrainingPlan, frequency: u32) -> Self {
        let assignment = distribute(frequency, &plan);
        Self { plan, assignment }
    }

    /// Generate a plan from questionnaire answers and distribute it.
    pub fn from_questionnaire(questionnaire: &Questionnaire) -> Self {
        Self::new(generate_plan(questionnaire), questionnaire.days_per_week)
    }
}
