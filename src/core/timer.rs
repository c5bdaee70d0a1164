use std::time::{
    Duration,
    Instant,
};

/// Identifies one arming of the countdown. A handle from a cancelled or
/// restarted run no longer matches the timer, which is what keeps a
/// tick queued under the old run from acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
enum TimerState {
    Idle,
    Running { ends_at: Instant },
}

/// One-shot countdown over an absolute deadline. Remaining time is
/// recomputed from the deadline on every read, never accumulated from
/// ticks, so a stalled or backgrounded UI stays in sync with the clock.
///
/// All time-dependent methods take `now` so tests can drive the clock.
#[derive(Debug)]
pub struct CountdownTimer {
    state: TimerState,
    generation: u64,
}

impl CountdownTimer {
    pub fn new() -> Self {
        CountdownTimer { state: TimerState::Idle, generation: 0 }
    }

    /// Arm the countdown for `seconds` from `now`. Any handle issued
    /// before this call goes stale.
    pub fn start_at(&mut self, seconds: u32, now: Instant) -> TimerHandle {
        self.generation += 1;
        self.state = TimerState::Running { ends_at: now + Duration::from_secs(u64::from(seconds)) };
        TimerHandle(self.generation)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    pub fn is_current(&self, handle: TimerHandle) -> bool {
        self.is_running() && handle.0 == self.generation
    }

    /// Whole seconds left, rounded up so the display never reads 0
    /// while time remains. 0 when idle or past the deadline.
    pub fn remaining_at(&self, now: Instant) -> u64 {
        match self.state {
            TimerState::Idle => 0,
            TimerState::Running { ends_at } => {
                let left = ends_at.saturating_duration_since(now);
                if left.subsec_nanos() > 0 {
                    left.as_secs() + 1
                } else {
                    left.as_secs()
                }
            }
        }
    }

    /// Consume the expiry edge. Returns true exactly once per run, on
    /// the first poll at or past the deadline; the timer is idle
    /// afterwards, so repeated polls in the expired condition stay
    /// false.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.state {
            TimerState::Running { ends_at } if now >= ends_at => {
                self.state = TimerState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Stop without firing. No expiry is signalled for this run.
    pub fn cancel(&mut self) {
        self.state = TimerState::Idle;
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}
