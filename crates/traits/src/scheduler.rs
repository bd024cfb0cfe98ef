//! TaskScheduler trait for one-shot delayed tasks.
//!
//! The browser provides `setTimeout`/`clearTimeout`; native hosts and tests use
//! [`ManualScheduler`], whose clock only moves when told to.

use crate::element::HostError;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// A deferred unit of work. Tasks run on the thread that scheduled them.
pub type Task = Box<dyn FnOnce()>;

/// Handle for a scheduled task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub i32);

/// Schedules tasks to run once after a delay.
pub trait TaskScheduler {
    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Task) -> Result<TimerId, HostError>;

    /// Cancel a pending task. Cancelling a task that already ran is a no-op.
    fn cancel(&self, id: TimerId);
}

struct PendingTask {
    id: TimerId,
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: i32,
    pending: Vec<PendingTask>,
    executed: usize,
}

/// A scheduler driven by a virtual clock.
///
/// Tasks run only from [`ManualScheduler::advance`], in due-time order (ties in
/// scheduling order). Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &clock.now)
            .field("pending", &clock.pending.len())
            .field("executed", &clock.executed)
            .finish()
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn pending_count(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Total number of tasks that have run.
    pub fn executed_count(&self) -> usize {
        self.clock.borrow().executed
    }

    /// Move the clock forward, running every task that falls due on the way.
    ///
    /// Tasks may schedule further tasks; those run too if they fall due before the
    /// end of the advance.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now + by;
        while let Some(next) = self.take_next_due(target) {
            (next.task)();
        }
        self.clock.borrow_mut().now = target;
    }

    fn take_next_due(&self, target: Duration) -> Option<PendingTask> {
        let mut clock = self.clock.borrow_mut();
        let index = clock
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.id.0))
            .map(|(i, _)| i)?;
        let next = clock.pending.remove(index);
        clock.now = next.due;
        clock.executed += 1;
        Some(next)
    }
}

impl TaskScheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Result<TimerId, HostError> {
        let mut clock = self.clock.borrow_mut();
        let id = TimerId(clock.next_id);
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.pending.push(PendingTask { id, due, task });
        Ok(id)
    }

    fn cancel(&self, id: TimerId) {
        self.clock.borrow_mut().pending.retain(|p| p.id != id);
    }
}
