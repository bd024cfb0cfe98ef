//! `setTimeout`-backed task scheduling.

use crate::error::describe;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wayfinder_core::traits::Task;
use wayfinder_core::{HostError, TaskScheduler, TimerId};
use web_sys::Window;

/// Schedules tasks on the browser's event loop.
///
/// Each timer's callback is owned here until it is cancelled or has fired, so
/// superseded debounce timers do not leak their closures.
#[derive(Debug, Clone)]
pub struct WindowScheduler {
    window: Window,
    callbacks: Rc<RefCell<HashMap<i32, Closure<dyn FnMut()>>>>,
    // Handles whose callback has run. A callback cannot drop itself while running,
    // so these are released on the next schedule or cancel.
    fired: Rc<RefCell<Vec<i32>>>,
}

impl WindowScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callbacks: Rc::new(RefCell::new(HashMap::new())),
            fired: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Number of timer callbacks still held, after releasing those that fired.
    pub fn live_callbacks(&self) -> usize {
        self.sweep();
        self.callbacks.borrow().len()
    }

    fn sweep(&self) {
        let fired: Vec<i32> = self.fired.borrow_mut().drain(..).collect();
        if fired.is_empty() {
            return;
        }
        let mut callbacks = self.callbacks.borrow_mut();
        for handle in fired {
            callbacks.remove(&handle);
        }
    }
}

impl TaskScheduler for WindowScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Result<TimerId, HostError> {
        self.sweep();

        let handle_cell = Rc::new(Cell::new(0));
        let own_handle = Rc::clone(&handle_cell);
        let fired = Rc::clone(&self.fired);
        let mut task = Some(task);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(task) = task.take() {
                task();
            }
            fired.borrow_mut().push(own_handle.get());
        });

        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(|e| HostError::Scheduling(describe(&e)))?;
        handle_cell.set(handle);
        self.callbacks.borrow_mut().insert(handle, callback);
        Ok(TimerId(handle))
    }

    fn cancel(&self, id: TimerId) {
        self.window.clear_timeout_with_handle(id.0);
        self.callbacks.borrow_mut().remove(&id.0);
        self.sweep();
    }
}
