//! Deferred one-shot tasks on the frame clock.
//!
//! The game never sleeps. "Show the feedback, then close the panel two
//! seconds later" becomes a task scheduled on a [`Scheduler`], which the
//! orchestrator drains at the start of every tick.
//!
//! Two ways to stop a task from running:
//! - [`Scheduler::cancel`] drops one task by its [`TimerHandle`]
//! - [`Scheduler::invalidate`] bumps the generation, so every task scheduled
//!   before the bump is discarded when it comes due
use std::time::Duration;

/// Handle to a scheduled task, used for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending<T> {
    id: u64,
    due: Duration,
    generation: u64,
    task: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    generation: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            generation: 0,
            pending: Vec::new(),
        }
    }

    /// Time elapsed on the frame clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Tasks still waiting, including stale ones not yet discarded.
    #[cfg(test)]
    fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Runs `task` once `delay` has elapsed, unless cancelled or invalidated.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: self.now + delay,
            generation: self.generation,
            task,
        });
        TimerHandle(id)
    }

    /// Drops the task behind `handle`. Returns false if it already ran or was
    /// dropped.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|pending| pending.id != handle.0);
        self.pending.len() != before
    }

    #[cfg(test)]
    fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.pending
            .iter()
            .any(|pending| pending.id == handle.0 && pending.generation == self.generation)
    }

    /// Orphans every task scheduled so far.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        tracing::trace!(generation = self.generation, "scheduler invalidated");
    }

    /// Moves the clock forward.
    pub fn advance(&mut self, dt: Duration) {
        self.now += dt;
    }

    /// Removes and returns the earliest due task of the current generation.
    ///
    /// Call in a loop: a task that invalidates the scheduler while running
    /// keeps the remaining due tasks of its generation from firing. Ties on
    /// the due time run in scheduling order.
    pub fn pop_due(&mut self) -> Option<T> {
        let generation = self.generation;
        let now = self.now;

        let stale = self.pending.len();
        self.pending
            .retain(|pending| pending.generation == generation || pending.due > now);
        if self.pending.len() != stale {
            tracing::trace!(dropped = stale - self.pending.len(), "discarded stale tasks");
        }

        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.generation == generation && pending.due <= now)
            .min_by_key(|(_, pending)| (pending.due, pending.id))
            .map(|(position, _)| position)?;

        Some(self.pending.remove(position).task)
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
