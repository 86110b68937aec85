//! Frame-driven deferred tasks.
//!
//! Wheels have no timer thread. A task is scheduled against the frame clock
//! and fires from the first frame whose timestamp reaches its due time.

use std::time::Duration;

/// A single cancellable deferred task.
///
/// Holds at most one due time. Scheduling again replaces the pending task,
/// and a cancelled task never fires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeferredSlot {
    due_nanos: Option<u64>,
}

impl DeferredSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the task to fire `delay` after `now_nanos`.
    pub fn schedule(&mut self, now_nanos: u64, delay: Duration) {
        let delay_nanos = u64::try_from(delay.as_nanos()).unwrap_or(u64::MAX);
        self.due_nanos = Some(now_nanos.saturating_add(delay_nanos));
    }

    /// Drops the pending task, if any.
    pub fn cancel(&mut self) {
        self.due_nanos = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due_nanos.is_some()
    }

    /// Takes the pending task if it is due at `now_nanos`.
    ///
    /// Returns `true` exactly once per scheduling.
    pub fn poll(&mut self, now_nanos: u64) -> bool {
        match self.due_nanos {
            Some(due) if now_nanos >= due => {
                self.due_nanos = None;
                true
            }
            _ => false,
        }
    }
}
