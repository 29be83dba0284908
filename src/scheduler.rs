//! Cancellable delayed tasks.
//!
//! The controller names each task with a [`TimerToken`] and asks a
//! [`Scheduler`] to hand the token back after a delay. Whoever owns the
//! controller routes due tokens into `SidebarController::on_timer`.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

/// Identifies one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

pub trait Scheduler {
    /// Deliver `token` back to the controller after `delay_ms`.
    fn schedule(&mut self, token: TimerToken, delay_ms: u32);

    /// Drop a pending task. Unknown or already-fired tokens are ignored.
    fn cancel(&mut self, token: TimerToken);
}

/// Scheduler driven by an explicit clock.
///
/// Nothing fires on its own; [`ManualScheduler::advance`] moves time forward
/// and returns the tokens that came due, in due order.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    pending: Vec<(u64, TimerToken)>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.pending.iter().any(|(_, t)| *t == token)
    }

    /// Advance the clock by `ms` and drain every task now due.
    pub fn advance(&mut self, ms: u64) -> Vec<TimerToken> {
        self.now_ms = self.now_ms.saturating_add(ms);
        let now = self.now_ms;
        let mut due: Vec<(u64, TimerToken)> = Vec::new();
        self.pending.retain(|&(at, token)| {
            if at <= now {
                due.push((at, token));
                false
            } else {
                true
            }
        });
        // Stable sort keeps schedule order among tasks due at the same instant.
        due.sort_by_key(|&(at, _)| at);
        due.into_iter().map(|(_, token)| token).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, token: TimerToken, delay_ms: u32) {
        let at = self.now_ms.saturating_add(u64::from(delay_ms));
        self.pending.push((at, token));
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|(_, t)| *t != token);
    }
}
