use std::time::Instant;

use super::{
    models::{
        Plan,
        WorkoutId,
    },
    notify::Notify,
    scheduler::{
        self,
        Cursor,
        Step,
    },
    timer::{
        CountdownTimer,
        TimerHandle,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Active { workout: WorkoutId, cursor: Cursor },
    Complete { workout: WorkoutId },
}

/// Snapshot of the running session, sufficient for a panel to draw one
/// frame without reaching into the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionView {
    Active(ActiveView),
    Complete { workout_name: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveView {
    pub workout_name: String,
    pub exercise_name: String,
    pub set_number: u32, // 1-based, for display
    pub sets: u32,
    pub reps: u32,
    pub duration: String,
    pub duration_seconds: Option<u32>,
    pub timer_running: bool,
    pub remaining: u64,
}

/// The active workout run: cursor plus countdown, driven entirely by
/// the mutation entry points below. Progress is not persisted; quitting
/// discards it.
pub struct WorkoutSession {
    phase: SessionPhase,
    timer: CountdownTimer,
    armed: Option<TimerHandle>,
}

impl WorkoutSession {
    pub fn new() -> Self {
        WorkoutSession { phase: SessionPhase::Idle, timer: CountdownTimer::new(), armed: None }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == SessionPhase::Idle
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Begin a run of `workout` from the first valid position. Any
    /// previous run, including its timer, is discarded. A workout with
    /// nothing to visit completes immediately.
    pub fn start(&mut self, plan: &Plan, workout: WorkoutId) {
        self.timer.cancel();
        self.armed = None;

        let Some(target) = plan.workout(workout) else {
            self.phase = SessionPhase::Idle;
            return;
        };

        self.phase = match scheduler::find_next(target, Cursor::default()) {
            Step::At(cursor) => SessionPhase::Active { workout, cursor },
            Step::Complete => SessionPhase::Complete { workout },
        };
    }

    /// User-driven advance, for exercises without a countdown. Refused
    /// while a timer runs; expiry owns the transition then.
    pub fn next_manual(&mut self, plan: &Plan) {
        if self.timer.is_running() {
            return;
        }
        self.advance_cursor(plan);
    }

    /// Arm the countdown for the current exercise, if it has a parsed
    /// duration and no timer is already running.
    pub fn start_timer(&mut self, plan: &Plan, now: Instant) {
        if self.timer.is_running() {
            return;
        }
        let Some(seconds) = self.current_duration(plan) else {
            return;
        };
        self.armed = Some(self.timer.start_at(seconds, now));
    }

    /// Stop the countdown without advancing.
    pub fn cancel_timer(&mut self) {
        self.timer.cancel();
        self.armed = None;
    }

    /// Drive the countdown. On the expiry edge this notifies once and
    /// advances exactly as a manual next would. A tick whose handle was
    /// invalidated by cancel/quit/restart does nothing.
    pub fn tick(&mut self, plan: &Plan, now: Instant, notifier: &mut dyn Notify) {
        let Some(handle) = self.armed else {
            return;
        };
        if !self.timer.is_current(handle) {
            self.armed = None;
            return;
        }
        if self.timer.poll_at(now) {
            self.armed = None;
            notifier.notify();
            self.advance_cursor(plan);
        }
    }

    /// Abandon the run: timer and cursor discarded, back to idle.
    pub fn quit(&mut self) {
        self.timer.cancel();
        self.armed = None;
        self.phase = SessionPhase::Idle;
    }

    pub fn snapshot(&self, plan: &Plan, now: Instant) -> Option<SessionView> {
        match self.phase {
            SessionPhase::Idle => None,
            SessionPhase::Complete { workout } => Some(SessionView::Complete {
                workout_name: self.workout_name(plan, workout),
            }),
            SessionPhase::Active { workout, cursor } => {
                let exercise = plan.workout(workout)?.exercises.get(cursor.exercise)?;
                Some(SessionView::Active(ActiveView {
                    workout_name: self.workout_name(plan, workout),
                    exercise_name: exercise.name.clone(),
                    set_number: cursor.set + 1,
                    sets: exercise.sets,
                    reps: exercise.reps,
                    duration: exercise.duration.clone(),
                    duration_seconds: exercise.duration_seconds(),
                    timer_running: self.timer.is_running(),
                    remaining: self.timer.remaining_at(now),
                }))
            }
        }
    }

    fn workout_name(&self, plan: &Plan, workout: WorkoutId) -> String {
        match (plan.workout(workout), plan.position(workout)) {
            (Some(found), Some(position)) => found.display_name(position),
            _ => String::new(),
        }
    }

    fn current_duration(&self, plan: &Plan) -> Option<u32> {
        let SessionPhase::Active { workout, cursor } = self.phase else {
            return None;
        };
        plan.workout(workout)?.exercises.get(cursor.exercise)?.duration_seconds()
    }

    fn advance_cursor(&mut self, plan: &Plan) {
        let SessionPhase::Active { workout, cursor } = self.phase else {
            return;
        };
        let Some(target) = plan.workout(workout) else {
            // The workout was removed mid-run; nothing left to step.
            self.quit();
            return;
        };
        self.phase = match scheduler::advance(target, cursor) {
            Step::At(next) => SessionPhase::Active { workout, cursor: next },
            Step::Complete => SessionPhase::Complete { workout },
        };
    }
}

impl Default for WorkoutSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::models::Exercise;

    struct CountingNotify {
        count: u32,
    }

    impl Notify for CountingNotify {
        fn notify(&mut self) {
            self.count += 1;
        }
    }

    fn plan_with_sets(sets: &[u32]) -> (Plan, WorkoutId) {
        let mut plan = Plan::default();
        let id = plan.add_workout();
        let workout = plan.workout_mut(id).unwrap();
        for &count in sets {
            workout.exercises.push(Exercise {
                name: format!("ex{}", workout.exercises.len()),
                sets: count,
                reps: 10,
                duration: String::new(),
            });
        }
        (plan, id)
    }

    fn cursor_of(session: &WorkoutSession) -> Cursor {
        match session.phase() {
            SessionPhase::Active { cursor, .. } => cursor,
            other => panic!("expected active session, got {:?}", other),
        }
    }

    #[test]
    fn test_start_resolves_first_valid_position() {
        // Exercise 0 has no sets, so the session opens on exercise 1.
        let (plan, id) = plan_with_sets(&[0, 2]);
        let mut session = WorkoutSession::new();

        session.start(&plan, id);
        assert_eq!(cursor_of(&session), Cursor { exercise: 1, set: 0 });
    }

    #[test]
    fn test_empty_workout_completes_on_start() {
        let (plan, id) = plan_with_sets(&[]);
        let mut session = WorkoutSession::new();

        session.start(&plan, id);
        assert_eq!(session.phase(), SessionPhase::Complete { workout: id });
    }

    #[test]
    fn test_manual_walk_to_completion() {
        let (plan, id) = plan_with_sets(&[2, 1]);
        let mut session = WorkoutSession::new();
        session.start(&plan, id);

        session.next_manual(&plan);
        assert_eq!(cursor_of(&session), Cursor { exercise: 1, set: 0 });
        session.next_manual(&plan);
        assert_eq!(cursor_of(&session), Cursor { exercise: 0, set: 1 });
        session.next_manual(&plan);
        assert_eq!(session.phase(), SessionPhase::Complete { workout: id });
    }

    #[test]
    fn test_quit_discards_progress() {
        let (plan, id) = plan_with_sets(&[3, 3]);
        let mut session = WorkoutSession::new();

        session.start(&plan, id);
        session.next_manual(&plan);
        session.next_manual(&plan);
        session.quit();
        assert!(session.is_idle());

        session.start(&plan, id);
        assert_eq!(cursor_of(&session), Cursor { exercise: 0, set: 0 });
    }

    #[test]
    fn test_expiry_notifies_once_and_advances() {
        let (mut plan, id) = plan_with_sets(&[1, 1]);
        plan.workout_mut(id).unwrap().exercises[0].duration = "2".to_string();

        let start = Instant::now();
        let mut session = WorkoutSession::new();
        let mut notifier = CountingNotify { count: 0 };

        session.start(&plan, id);
        session.start_timer(&plan, start);
        assert!(session.timer_running());

        // Before the deadline nothing moves.
        session.tick(&plan, start + Duration::from_secs(1), &mut notifier);
        assert_eq!(notifier.count, 0);
        assert_eq!(cursor_of(&session), Cursor { exercise: 0, set: 0 });

        // Past the deadline: one notification, one advance, even when
        // ticks keep arriving.
        let after = start + Duration::from_secs(3);
        session.tick(&plan, after, &mut notifier);
        session.tick(&plan, after, &mut notifier);
        session.tick(&plan, after + Duration::from_secs(2), &mut notifier);

        assert_eq!(notifier.count, 1);
        assert_eq!(cursor_of(&session), Cursor { exercise: 1, set: 0 });
    }

    #[test]
    fn test_manual_advance_refused_while_timer_runs() {
        let (mut plan, id) = plan_with_sets(&[1, 1]);
        plan.workout_mut(id).unwrap().exercises[0].duration = "30".to_string();

        let start = Instant::now();
        let mut session = WorkoutSession::new();

        session.start(&plan, id);
        session.start_timer(&plan, start);
        session.next_manual(&plan);
        assert_eq!(cursor_of(&session), Cursor { exercise: 0, set: 0 });
    }

    #[test]
    fn test_cancel_timer_keeps_position() {
        let (mut plan, id) = plan_with_sets(&[1, 1]);
        plan.workout_mut(id).unwrap().exercises[0].duration = "30".to_string();

        let start = Instant::now();
        let mut session = WorkoutSession::new();
        let mut notifier = CountingNotify { count: 0 };

        session.start(&plan, id);
        session.start_timer(&plan, start);
        session.cancel_timer();

        session.tick(&plan, start + Duration::from_secs(60), &mut notifier);
        assert_eq!(notifier.count, 0);
        assert_eq!(cursor_of(&session), Cursor { exercise: 0, set: 0 });
    }

    #[test]
    fn test_timer_not_armed_without_duration() {
        let (plan, id) = plan_with_sets(&[1]);
        let mut session = WorkoutSession::new();

        session.start(&plan, id);
        session.start_timer(&plan, Instant::now());
        assert!(!session.timer_running());
    }

    #[test]
    fn test_restart_after_quit_invalidates_pending_tick() {
        let (mut plan, id) = plan_with_sets(&[1, 1]);
        plan.workout_mut(id).unwrap().exercises[0].duration = "2".to_string();

        let start = Instant::now();
        let mut session = WorkoutSession::new();
        let mut notifier = CountingNotify { count: 0 };

        session.start(&plan, id);
        session.start_timer(&plan, start);
        session.quit();

        // The tick that was queued under the old run arrives late.
        session.tick(&plan, start + Duration::from_secs(10), &mut notifier);
        assert_eq!(notifier.count, 0);
        assert!(session.is_idle());
    }

    #[test]
    fn test_snapshot_reflects_timer() {
        let (mut plan, id) = plan_with_sets(&[1]);
        {
            let workout = plan.workout_mut(id).unwrap();
            workout.name = "Core".to_string();
            workout.exercises[0].name = "Plank".to_string();
            workout.exercises[0].duration = "45s hold".to_string();
        }

        let start = Instant::now();
        let mut session = WorkoutSession::new();
        session.start(&plan, id);

        let view = session.snapshot(&plan, start);
        let Some(SessionView::Active(view)) = view else {
            panic!("expected active view");
        };
        assert_eq!(view.workout_name, "Core");
        assert_eq!(view.exercise_name, "Plank");
        assert_eq!(view.set_number, 1);
        assert_eq!(view.duration_seconds, Some(45));
        assert!(!view.timer_running);

        session.start_timer(&plan, start);
        let view = session.snapshot(&plan, start + Duration::from_secs(5));
        let Some(SessionView::Active(view)) = view else {
            panic!("expected active view");
        };
        assert!(view.timer_running);
        assert_eq!(view.remaining, 40);
    }
}
