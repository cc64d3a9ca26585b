use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerAction {
    /// Drop the widget's active styling.
    HideActive,
    /// Restore every piece of session state to the idle baseline.
    Reset,
}

#[derive(Clone, Copy, Debug)]
struct Timer {
    due: Duration,
    seq: u64,
    action: TimerAction,
}

/// One-shot timeouts measured against the widget's own clock.
///
/// Timers only fire from [`advance`](TimerQueue::advance), so a timer
/// scheduled with zero delay while a tick is running fires on the next tick.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    seq: u64,
    timers: Vec<Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, action: TimerAction) {
        self.timers.push(Timer {
            due: self.now + delay,
            seq: self.seq,
            action,
        });
        self.seq += 1;
    }

    /// Moves the clock forward and appends due actions in due order.
    pub fn advance(&mut self, dt: Duration, out: &mut Vec<TimerAction>) {
        self.now += dt;
        let now = self.now;
        let mut due: Vec<Timer> = Vec::new();
        self.timers.retain(|t| {
            if t.due <= now {
                due.push(*t);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|t| (t.due, t.seq));
        out.extend(due.into_iter().map(|t| t.action));
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }
}
