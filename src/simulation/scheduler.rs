//! Cancellable one-shot step scheduling
//!
//! Scenario scripts arm delayed steps here instead of holding their own
//! timers. Everything is keyed by absolute simulation time and fired by the
//! world's tick, so cancelling a scenario is a single `clear()` — there is
//! no way for a stale timer to outlive a reset. Invariant: at most one
//! scenario's steps are armed at any time.

use super::scenario::StepAction;

#[derive(Debug, Clone)]
struct PendingStep {
    fire_at: f32,
    actions: Vec<StepAction>,
}

/// Pending scripted steps for the live scenario
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Vec<PendingStep>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a step to fire at the given absolute simulation time
    pub fn schedule(&mut self, fire_at: f32, actions: Vec<StepAction>) {
        self.pending.push(PendingStep { fire_at, actions });
    }

    /// Drain every step due at or before `now`, in firing order
    pub fn take_due(&mut self, now: f32) -> Vec<Vec<StepAction>> {
        let (mut due, rest): (Vec<PendingStep>, Vec<PendingStep>) = self
            .pending
            .drain(..)
            .partition(|step| step.fire_at <= now);
        self.pending = rest;

        due.sort_by(|a, b| a.fire_at.total_cmp(&b.fire_at));
        due.into_iter().map(|step| step.actions).collect()
    }

    /// Cancel every pending step
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Whether any step is still armed
    pub fn is_armed(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
