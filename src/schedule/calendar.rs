//! Calendar view of a weekly assignment.
//!
//! Weeks start on Monday; the same weekly pattern repeats every week.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use super::assignment::{DayAssignment, WeeklyAssignment};
use super::weekday::TrainingDay;

/// One dated calendar cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub day: TrainingDay,
    /// Routine name or the rest label
    pub label: String,
    pub is_rest: bool,
}

/// Repeating weekly calendar.
#[derive(Debug, Clone)]
pub struct WorkoutCalendar {
    assignment: WeeklyAssignment,
}

impl WorkoutCalendar {
    pub fn new(assignment: WeeklyAssignment) -> Self {
        Self { assignment }
    }

    /// The underlying weekly pattern.
    pub fn assignment(&self) -> &WeeklyAssignment {
        &self.assignment
    }

    /// What is scheduled on `date`.
    pub fn assignment_on(&self, date: NaiveDate) -> &DayAssignment {
        self.assignment.get(TrainingDay::from(date.weekday()))
    }

    fn entry(&self, date: NaiveDate) -> CalendarEntry {
        let assignment = self.assignment_on(date);
        CalendarEntry {
            date,
            day: TrainingDay::from(date.weekday()),
            label: assignment.label().to_string(),
            is_rest: assignment.is_rest(),
        }
    }

    /// Monday of the week containing `date`.
    pub fn week_start(date: NaiveDate) -> NaiveDate {
        date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
    }

    /// The seven entries of the week containing `date`, Monday first.
    pub fn week_of(&self, date: NaiveDate) -> Vec<CalendarEntry> {
        self.upcoming(Self::week_start(date), 7)
    }

    /// `days` consecutive entries starting at `start`.
    pub fn upcoming(&self, start: NaiveDate, days: u32) -> Vec<CalendarEntry> {
        start
            .iter_days()
            .take(days as usize)
            .map(|date| self.entry(date))
            .collect()
    }

    /// First training date on or after `from`. `None` for an all-rest week.
    pub fn next_training_day(&self, from: NaiveDate) -> Option<CalendarEntry> {
        self.upcoming(from, 7).into_iter().find(|e| !e.is_rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar() -> WorkoutCalendar {
        let mut week = WeeklyAssignment::all_rest();
        week.set(TrainingDay::Monday, "Treino Superior");
        week.set(TrainingDay::Thursday, "Treino Inferior");
        WorkoutCalendar::new(week)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2024-05-15 is a Wednesday.
        assert_eq!(WorkoutCalendar::week_start(date(2024, 5, 15)), date(2024, 5, 13));
        assert_eq!(WorkoutCalendar::week_start(date(2024, 5, 13)), date(2024, 5, 13));
        assert_eq!(WorkoutCalendar::week_start(date(2024, 5, 19)), date(2024, 5, 13));
    }

    #[test]
    fn test_week_of_crosses_month() {
        // 2024-05-31 is a Friday; its week ends on 2024-06-02.
        let week = calendar().week_of(date(2024, 5, 31));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, date(2024, 5, 27));
        assert_eq!(week[0].label, "Treino Superior");
        assert_eq!(week[3].label, "Treino Inferior");
        assert_eq!(week[6].date, date(2024, 6, 2));
        assert!(week[6].is_rest);
    }

    #[test]
    fn test_next_training_day() {
        let cal = calendar();
        // Friday 2024-05-17 -> Monday 2024-05-20
        let next = cal.next_training_day(date(2024, 5, 17)).unwrap();
        assert_eq!(next.date, date(2024, 5, 20));
        assert_eq!(next.day, TrainingDay::Monday);

        let idle = WorkoutCalendar::new(WeeklyAssignment::all_rest());
        assert!(idle.next_training_day(date(2024, 5, 17)).is_none());
    }
}
