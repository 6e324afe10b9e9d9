//! Browser timers and animation frames behind the core `Scheduler` trait.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use tracing::warn;
use vt_core::{Scheduler, TaskHandle};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

enum Task {
    Timeout { _timer: Timeout },
    Interval { _timer: Interval },
    Frame {
        id: i32,
        _callback: Closure<dyn FnMut(f64)>,
    },
}

/// Owns every live timer. Dropping a `Timeout` or `Interval` clears it, so
/// cancellation is removal from the table.
#[derive(Default)]
pub struct BrowserScheduler {
    next_id: Cell<u64>,
    tasks: Rc<RefCell<HashMap<u64, Task>>>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_handle(&self) -> TaskHandle {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        TaskHandle(id)
    }
}

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let handle = self.next_handle();
        let tasks = self.tasks.clone();
        let timeout = Timeout::new(delay_ms, move || {
            let finished = tasks.borrow_mut().remove(&handle.0);
            task();
            drop(finished);
        });
        self.tasks.borrow_mut().insert(handle.0, Task::Timeout { _timer: timeout });
        handle
    }

    fn set_interval(&self, period_ms: u32, mut task: Box<dyn FnMut()>) -> TaskHandle {
        let handle = self.next_handle();
        let interval = Interval::new(period_ms, move || task());
        self.tasks
            .borrow_mut()
            .insert(handle.0, Task::Interval { _timer: interval });
        handle
    }

    fn request_frame(&self, task: Box<dyn FnOnce(f64)>) -> TaskHandle {
        let handle = self.next_handle();
        let tasks = self.tasks.clone();
        let callback: Closure<dyn FnMut(f64)> = Closure::once(move |timestamp: f64| {
            let finished = tasks.borrow_mut().remove(&handle.0);
            task(timestamp);
            drop(finished);
        });
        match gloo_utils::window().request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => {
                self.tasks.borrow_mut().insert(
                    handle.0,
                    Task::Frame {
                        id,
                        _callback: callback,
                    },
                );
            }
            Err(err) => warn!(?err, "requestAnimationFrame failed"),
        }
        handle
    }

    fn cancel(&self, handle: TaskHandle) {
        let removed = self.tasks.borrow_mut().remove(&handle.0);
        if let Some(Task::Frame { id, .. }) = removed {
            let _ = gloo_utils::window().cancel_animation_frame(id);
        }
    }

    fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.borrow().contains_key(&handle.0)
    }
}
