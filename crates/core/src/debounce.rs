//! Single-slot deferred task scheduling.

use log::{trace, warn};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wayfinder_traits::{HostError, TaskScheduler, TimerId};

/// Coalesces bursts of calls into one deferred task.
///
/// Each [`Debouncer::call`] replaces whatever task is still pending, so only the most
/// recently scheduled task ever runs, `delay` after its own call.
#[derive(Debug)]
pub struct Debouncer<S: TaskScheduler> {
    scheduler: S,
    delay: Duration,
    pending: Rc<Cell<Option<TimerId>>>,
}

impl<S: TaskScheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `task`, superseding any pending one.
    pub fn call(&self, task: impl FnOnce() + 'static) -> Result<(), HostError> {
        if let Some(previous) = self.pending.take() {
            trace!("Superseding pending task {:?}", previous);
            self.scheduler.cancel(previous);
        }
        let slot = Rc::clone(&self.pending);
        let id = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                slot.set(None);
                task();
            }),
        )?;
        self.pending.set(Some(id));
        Ok(())
    }

    /// Like [`Debouncer::call`], but a scheduling failure is logged instead of returned.
    pub fn call_or_log(&self, task: impl FnOnce() + 'static) {
        if let Err(e) = self.call(task) {
            warn!("Dropping debounced task: {}", e);
        }
    }

    /// Drop the pending task, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}
