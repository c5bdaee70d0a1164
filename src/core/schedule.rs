use std::collections::BTreeMap;

use chrono::{
    Datelike,
    Local,
};
use serde::{
    Deserialize,
    Serialize,
};

use super::models::WorkoutId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn today() -> Self {
        match Local::now().weekday() {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// Day-of-week assignments. Values are workout identifiers, not list
/// positions, so entries survive reordering and removal of unrelated
/// workouts. Resolution against the actual workout list happens in
/// `Plan::scheduled_workout`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    assignments: BTreeMap<Weekday, WorkoutId>,
}

impl Schedule {
    pub fn workout_for_day(&self, day: Weekday) -> Option<WorkoutId> {
        self.assignments.get(&day).copied()
    }

    pub fn assign(&mut self, day: Weekday, workout: Option<WorkoutId>) {
        match workout {
            Some(id) => {
                self.assignments.insert(day, id);
            }
            None => {
                self.assignments.remove(&day);
            }
        }
    }
}
