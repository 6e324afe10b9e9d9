//! Timers and animation frames.
//!
//! Every deferred callback goes through [`Scheduler`] and comes back as a
//! [`TaskHandle`]. Components that must never run two copies of the same
//! deferred work keep the handle in a [`TaskSlot`].

use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(pub u64);

pub trait Scheduler {
    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;
    fn set_interval(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle;
    /// Run `task` before the next repaint. The argument is the frame timestamp in ms.
    fn request_frame(&self, task: Box<dyn FnOnce(f64)>) -> TaskHandle;
    /// Cancelling a finished or unknown handle is a no-op.
    fn cancel(&self, handle: TaskHandle);
    fn is_pending(&self, handle: TaskHandle) -> bool;
}

/// Holds at most one outstanding task. Installing a new one cancels the old.
#[derive(Debug, Default)]
pub struct TaskSlot {
    current: Cell<Option<TaskHandle>>,
}

impl TaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, scheduler: &dyn Scheduler, handle: TaskHandle) {
        if let Some(previous) = self.current.replace(Some(handle)) {
            if previous != handle {
                scheduler.cancel(previous);
            }
        }
    }

    pub fn cancel(&self, scheduler: &dyn Scheduler) {
        if let Some(handle) = self.current.take() {
            scheduler.cancel(handle);
        }
    }

    pub fn is_active(&self, scheduler: &dyn Scheduler) -> bool {
        self.current.get().is_some_and(|h| scheduler.is_pending(h))
    }

    pub fn handle(&self) -> Option<TaskHandle> {
        self.current.get()
    }
}
