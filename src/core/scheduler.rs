use super::models::Workout;

/// Position of the stepper inside a workout: which exercise, and which
/// round of sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub exercise: usize,
    pub set: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    At(Cursor),
    Complete,
}

/// Number of rounds the stepper walks: the largest set count over all
/// exercises, 0 for an empty workout.
pub fn max_sets(workout: &Workout) -> u32 {
    workout.exercises.iter().map(|exercise| exercise.sets).max().unwrap_or(0)
}

/// First valid position at or after `cursor`, in round-robin order:
/// round N visits, in list order, every exercise with more than N sets.
/// Exercises with fewer sets are skipped, and the scan wraps to the
/// next round at the end of the list. Bounded by the exercise count
/// times the round count, so an all-zero workout resolves to Complete
/// without looping.
pub fn find_next(workout: &Workout, cursor: Cursor) -> Step {
    let rounds = max_sets(workout);
    let count = workout.exercises.len();

    let mut exercise = cursor.exercise;
    let mut set = cursor.set;

    while set < rounds {
        if exercise >= count {
            exercise = 0;
            set += 1;
            continue;
        }
        if workout.exercises[exercise].sets > set {
            return Step::At(Cursor { exercise, set });
        }
        exercise += 1;
    }

    Step::Complete
}

/// Position strictly after `cursor`: the transition taken when the
/// current exercise is finished, manually or by timer expiry.
pub fn advance(workout: &Workout, cursor: Cursor) -> Step {
    find_next(workout, Cursor { exercise: cursor.exercise + 1, set: cursor.set })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{
        Exercise,
        Workout,
    };

    fn workout_with_sets(sets: &[u32]) -> Workout {
        let mut workout = Workout::new();
        for &count in sets {
            workout.exercises.push(Exercise {
                name: format!("ex{}", workout.exercises.len()),
                sets: count,
                reps: 10,
                duration: String::new(),
            });
        }
        workout
    }

    #[test]
    fn test_empty_workout_is_complete() {
        let workout = workout_with_sets(&[]);
        assert_eq!(find_next(&workout, Cursor::default()), Step::Complete);
    }

    #[test]
    fn test_all_zero_sets_is_complete() {
        let workout = workout_with_sets(&[0, 0, 0]);
        assert_eq!(find_next(&workout, Cursor::default()), Step::Complete);
    }

    #[test]
    fn test_find_next_skips_zero_set_head() {
        let workout = workout_with_sets(&[0, 2]);
        assert_eq!(find_next(&workout, Cursor::default()), Step::At(Cursor { exercise: 1, set: 0 }));
    }

    #[test]
    fn test_round_robin_visitation_order() {
        // Sets [2, 1, 3]: exercise 1 drops out after round 0, exercise 0
        // after round 1.
        let workout = workout_with_sets(&[2, 1, 3]);
        let expected = [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (2, 2)];

        let mut cursor = match find_next(&workout, Cursor::default()) {
            Step::At(cursor) => cursor,
            Step::Complete => panic!("workout should not start complete"),
        };

        let mut visited = vec![(cursor.exercise, cursor.set)];
        loop {
            match advance(&workout, cursor) {
                Step::At(next) => {
                    visited.push((next.exercise, next.set));
                    cursor = next;
                }
                Step::Complete => break,
            }
        }

        assert_eq!(visited, expected);
    }

    #[test]
    fn test_scan_is_bounded() {
        // A scan over any cursor, even far past the end, terminates and
        // returns a valid position or Complete.
        let workout = workout_with_sets(&[3, 0, 1]);
        let rounds = max_sets(&workout);

        for exercise in 0..workout.exercises.len() + 2 {
            for set in 0..rounds + 2 {
                match find_next(&workout, Cursor { exercise, set }) {
                    Step::At(found) => {
                        assert!(workout.exercises[found.exercise].sets > found.set);
                    }
                    Step::Complete => {}
                }
            }
        }
    }
}
