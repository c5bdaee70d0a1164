use std::sync::OnceLock;

use regex::Regex;
use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

use super::schedule::{
    Schedule,
    Weekday,
};

/// Stable identity of a workout, assigned at creation. The schedule
/// stores these instead of list positions, so removing a workout never
/// shifts what the other days point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(Uuid);

impl WorkoutId {
    pub fn new() -> Self {
        WorkoutId(Uuid::new_v4())
    }
}

impl Default for WorkoutId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(default)]
    pub duration: String, // free text; a leading digit run means seconds
}

impl Exercise {
    pub fn new() -> Self {
        Exercise { name: String::new(), sets: 3, reps: 10, duration: String::new() }
    }

    /// Seconds parsed from the leading digit run of the duration text.
    /// "30s", "45 sec" parse; "", "abc" and "0" mean no timer.
    pub fn duration_seconds(&self) -> Option<u32> {
        static LEADING_DIGITS: OnceLock<Regex> = OnceLock::new();
        let re = LEADING_DIGITS.get_or_init(|| Regex::new(r"^(\d+)").unwrap());

        re.captures(self.duration.trim())
            .and_then(|captures| captures.get(1))
            .and_then(|digits| digits.as_str().parse::<u32>().ok())
            .filter(|&seconds| seconds > 0)
    }
}

impl Default for Exercise {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: WorkoutId,
    pub name: String,
    pub exercises: Vec<Exercise>,
}

impl Workout {
    pub fn new() -> Self {
        Workout { id: WorkoutId::new(), name: String::new(), exercises: Vec::new() }
    }

    /// Name shown in lists and buttons; unnamed workouts fall back to
    /// their 1-based position.
    pub fn display_name(&self, position: usize) -> String {
        if self.name.trim().is_empty() {
            format!("Workout {}", position + 1)
        } else {
            self.name.clone()
        }
    }

    pub fn add_exercise(&mut self) {
        self.exercises.push(Exercise::new());
    }

    pub fn remove_exercise(&mut self, index: usize) {
        if index < self.exercises.len() {
            self.exercises.remove(index);
        }
    }
}

impl Default for Workout {
    fn default() -> Self {
        Self::new()
    }
}

/// The whole persisted state: every workout plus the weekly schedule.
/// This is the unit the share token encodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub workouts: Vec<Workout>,
    #[serde(default)]
    pub schedule: Schedule,
}

impl Plan {
    pub fn add_workout(&mut self) -> WorkoutId {
        let workout = Workout::new();
        let id = workout.id;
        self.workouts.push(workout);
        id
    }

    /// Schedule entries pointing at the removed workout are left in
    /// place; they resolve to "unassigned" on read.
    pub fn remove_workout(&mut self, id: WorkoutId) {
        self.workouts.retain(|workout| workout.id != id);
    }

    pub fn workout(&self, id: WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id == id)
    }

    pub fn workout_mut(&mut self, id: WorkoutId) -> Option<&mut Workout> {
        self.workouts.iter_mut().find(|workout| workout.id == id)
    }

    pub fn position(&self, id: WorkoutId) -> Option<usize> {
        self.workouts.iter().position(|workout| workout.id == id)
    }

    /// Defensive schedule read: an assignment whose workout no longer
    /// exists reads as unassigned.
    pub fn scheduled_workout(&self, day: Weekday) -> Option<&Workout> {
        self.schedule.workout_for_day(day).and_then(|id| self.workout(id))
    }
}
