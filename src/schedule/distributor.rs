//! Weekly plan distribution.
//!
//! Assigns the routines of a [`TrainingPlan`] to weekdays for a target
//! training frequency. Low frequencies (1-4) use fixed weekdays, each with an
//! ordered list of [`Candidate`] strategies; the first strategy that yields a
//! routine wins and a day with no match stays a rest day. Frequencies of five
//! and above pick weekdays by priority and cycle through the plan in order.
//!
//! Distribution never fails: an empty plan or a zero frequency produces a
//! week of rest, and frequencies above seven are capped at seven.

use super::assignment::WeeklyAssignment;
use super::weekday::TrainingDay;
use crate::plans::types::TrainingPlan;

/// Upper-body keywords used when pairing two routines.
pub const UPPER_BODY_KEYWORDS: &[&str] = &["Superior", "Upper"];
/// Lower-body keywords used when pairing two routines.
pub const LOWER_BODY_KEYWORDS: &[&str] = &["Inferior", "Lower"];
/// Upper-body keywords used for four-day splits.
pub const UPPER_BODY_SPLIT_KEYWORDS: &[&str] = &["Superior", "Upper", "Push", "Peito", "Costas"];
/// Lower-body keywords used for four-day splits.
pub const LOWER_BODY_SPLIT_KEYWORDS: &[&str] = &["Inferior", "Lower", "Pernas", "Legs"];

/// Weekday priority for five or more training days. Spreads sessions so that
/// three consecutive training days only happen when unavoidable.
const HIGH_FREQUENCY_PRIORITY: [TrainingDay; 6] = [
    TrainingDay::Monday,
    TrainingDay::Tuesday,
    TrainingDay::Thursday,
    TrainingDay::Friday,
    TrainingDay::Saturday,
    TrainingDay::Sunday,
];

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| name.contains(k))
}

/// One way of picking a routine for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// The `nth` routine (0-based, plan order) whose name contains any keyword
    Matching {
        keywords: &'static [&'static str],
        nth: usize,
    },
    /// The routine at this position
    Position(usize),
    /// The routine at this position, or the last routine if the plan is shorter
    PositionOrLast(usize),
}

impl Candidate {
    /// Routine this strategy picks from `plan`, if any.
    pub fn select<'p>(&self, plan: &'p TrainingPlan) -> Option<&'p str> {
        match *self {
            Candidate::Matching { keywords, nth } => plan
                .names()
                .filter(|name| contains_any(name, keywords))
                .nth(nth),
            Candidate::Position(index) => plan.name_at(index),
            Candidate::PositionOrLast(index) => plan
                .name_at(index)
                .or_else(|| plan.len().checked_sub(1).and_then(|last| plan.name_at(last))),
        }
    }
}

/// Weekday and its candidate strategies in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRule {
    pub day: TrainingDay,
    pub candidates: Vec<Candidate>,
}

impl DayRule {
    fn new(day: TrainingDay, candidates: Vec<Candidate>) -> Self {
        Self { day, candidates }
    }

    /// First routine any candidate yields.
    pub fn resolve<'p>(&self, plan: &'p TrainingPlan) -> Option<&'p str> {
        self.candidates.iter().find_map(|c| c.select(plan))
    }
}

/// Fixed-day rules for frequencies one to four. Empty otherwise.
pub fn rules_for(frequency: u32) -> Vec<DayRule> {
    use Candidate::{Matching, Position, PositionOrLast};
    use TrainingDay::*;

    let upper = |nth| Matching {
        keywords: UPPER_BODY_KEYWORDS,
        nth,
    };
    let lower = |nth| Matching {
        keywords: LOWER_BODY_KEYWORDS,
        nth,
    };
    let split_upper = |nth| Matching {
        keywords: UPPER_BODY_SPLIT_KEYWORDS,
        nth,
    };
    let split_lower = |nth| Matching {
        keywords: LOWER_BODY_SPLIT_KEYWORDS,
        nth,
    };

    match frequency {
        1 => vec![DayRule::new(Monday, vec![Position(0)])],
        2 => vec![
            DayRule::new(Monday, vec![upper(0), Position(0)]),
            DayRule::new(Thursday, vec![lower(0), Position(1), Position(0)]),
        ],
        3 => vec![
            DayRule::new(Monday, vec![PositionOrLast(0)]),
            DayRule::new(Wednesday, vec![PositionOrLast(1)]),
            DayRule::new(Friday, vec![PositionOrLast(2)]),
        ],
        4 => vec![
            DayRule::new(Monday, vec![split_upper(0), Position(0)]),
            DayRule::new(Tuesday, vec![split_lower(0), Position(1), Position(0)]),
            DayRule::new(
                Thursday,
                vec![split_upper(1), split_upper(0), Position(2), Position(0)],
            ),
            DayRule::new(
                Friday,
                vec![
                    split_lower(1),
                    split_lower(0),
                    Position(3),
                    Position(1),
                    Position(0),
                ],
            ),
        ],
        _ => Vec::new(),
    }
}

/// Training weekdays for five or more sessions, ascending.
///
/// Exactly `min(frequency, 7)` days: the priority list first, then the
/// remaining weekdays in ascending order once more than six are requested.
pub fn high_frequency_days(frequency: u32) -> Vec<TrainingDay> {
    let wanted = frequency.min(7) as usize;

    let mut days: Vec<TrainingDay> = HIGH_FREQUENCY_PRIORITY.to_vec();
    if frequency > 6 {
        days.extend(
            TrainingDay::ALL
                .into_iter()
                .filter(|d| !HIGH_FREQUENCY_PRIORITY.contains(d)),
        );
    }
    days.truncate(wanted);
    days.sort();
    days
}

/// Distribute the routines of `plan` over the week.
pub fn distribute(frequency: u32, plan: &TrainingPlan) -> WeeklyAssignment {
    let mut week = WeeklyAssignment::all_rest();

    if frequency == 0 || plan.is_empty() {
        if plan.is_empty() && frequency > 0 {
            tracing::warn!("Empty plan for {} training day(s), scheduling rest", frequency);
        }
        return week;
    }
    if frequency > 7 {
        tracing::warn!("Frequency {} exceeds seven days, capping at seven", frequency);
    }

    if frequency <= 4 {
        for rule in rules_for(frequency) {
            match rule.resolve(plan) {
                Some(name) => week.set(rule.day, name),
                None => week.set_rest(rule.day),
            }
        }
    } else {
        for (i, day) in high_frequency_days(frequency).into_iter().enumerate() {
            if let Some(name) = plan.name_at(i % plan.len()) {
                week.set(day, name);
            }
        }
    }

    tracing::debug!(
        "Distributed {} routine(s) over {} training day(s)",
        plan.len(),
        week.training_day_count()
    );
    week
}
