//! Training weekdays, Monday-first.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Day of the training week. Index 0 is Monday, 6 is Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl TrainingDay {
    /// All days, Monday first.
    pub const ALL: [TrainingDay; 7] = [
        TrainingDay::Monday,
        TrainingDay::Tuesday,
        TrainingDay::Wednesday,
        TrainingDay::Thursday,
        TrainingDay::Friday,
        TrainingDay::Saturday,
        TrainingDay::Sunday,
    ];

    /// Weekday index, Monday = 0.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Day for an index in 0..7.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            TrainingDay::Monday => "Segunda-feira",
            TrainingDay::Tuesday => "Terça-feira",
            TrainingDay::Wednesday => "Quarta-feira",
            TrainingDay::Thursday => "Quinta-feira",
            TrainingDay::Friday => "Sexta-feira",
            TrainingDay::Saturday => "Sábado",
            TrainingDay::Sunday => "Domingo",
        }
    }

    /// Day with the given canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl std::fmt::Display for TrainingDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl From<Weekday> for TrainingDay {
    fn from(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl From<TrainingDay> for Weekday {
    fn from(day: TrainingDay) -> Self {
        match day {
            TrainingDay::Monday => Weekday::Mon,
            TrainingDay::Tuesday => Weekday::Tue,
            TrainingDay::Wednesday => Weekday::Wed,
            TrainingDay::Thursday => Weekday::Thu,
            TrainingDay::Friday => Weekday::Fri,
            TrainingDay::Saturday => Weekday::Sat,
            TrainingDay::Sunday => Weekday::Sun,
        }
    }
}
