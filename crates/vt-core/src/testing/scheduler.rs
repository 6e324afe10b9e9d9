use std::cell::{Cell, RefCell};

use crate::scheduler::{Scheduler, TaskHandle};

enum Job {
    Once(Box<dyn FnOnce()>),
    Every(u32, Box<dyn FnMut()>),
    Frame(Box<dyn FnOnce(f64)>),
}

struct Entry {
    id: u64,
    due: f64,
    job: Job,
}

/// Scheduler driven by an explicit clock.
///
/// Nothing runs until [`ManualScheduler::advance`] moves time forward; tasks
/// then fire in due-time order (ties in scheduling order) and may schedule
/// more work that fires within the same advance.
pub struct ManualScheduler {
    now: Cell<f64>,
    next_id: Cell<u64>,
    frame_ms: f64,
    queue: RefCell<Vec<Entry>>,
    running_interval: Cell<Option<u64>>,
    running_cancelled: Cell<bool>,
    frames_refused: Cell<bool>,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            now: Cell::new(0.0),
            next_id: Cell::new(1),
            frame_ms: 16.0,
            queue: RefCell::new(Vec::new()),
            running_interval: Cell::new(None),
            running_cancelled: Cell::new(false),
            frames_refused: Cell::new(false),
        }
    }

    pub fn now(&self) -> f64 {
        self.now.get()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Number of live repeating timers.
    pub fn interval_count(&self) -> usize {
        self.queue
            .borrow()
            .iter()
            .filter(|e| matches!(e.job, Job::Every(..)))
            .count()
    }

    /// Make `request_frame` hand out handles whose callbacks never run, as a
    /// browser does when `requestAnimationFrame` throws.
    pub fn refuse_frames(&self, refuse: bool) {
        self.frames_refused.set(refuse);
    }

    /// Run everything due within the next `ms` milliseconds.
    pub fn advance(&self, ms: u32) {
        let target = self.now.get() + f64::from(ms);
        while let Some(entry) = self.pop_due(target) {
            self.now.set(entry.due);
            match entry.job {
                Job::Once(task) => task(),
                Job::Frame(task) => task(entry.due),
                Job::Every(period, mut task) => {
                    self.running_interval.set(Some(entry.id));
                    self.running_cancelled.set(false);
                    task();
                    self.running_interval.set(None);
                    if !self.running_cancelled.get() {
                        self.queue.borrow_mut().push(Entry {
                            id: entry.id,
                            due: entry.due + f64::from(period.max(1)),
                            job: Job::Every(period, task),
                        });
                    }
                }
            }
        }
        self.now.set(target);
    }

    /// Advance until no frame callbacks remain, up to `max_frames` frames.
    pub fn run_frames(&self, max_frames: u32) {
        for _ in 0..max_frames {
            let has_frames = self
                .queue
                .borrow()
                .iter()
                .any(|e| matches!(e.job, Job::Frame(_)));
            if !has_frames {
                return;
            }
            self.advance(self.frame_ms as u32);
        }
    }

    fn pop_due(&self, target: f64) -> Option<Entry> {
        let mut queue = self.queue.borrow_mut();
        let idx = queue
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= target)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.id.cmp(&b.id)))
            .map(|(i, _)| i)?;
        Some(queue.remove(idx))
    }

    fn next_handle(&self) -> TaskHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        TaskHandle(id)
    }

    fn push(&self, due: f64, job: Job) -> TaskHandle {
        let handle = self.next_handle();
        self.queue.borrow_mut().push(Entry {
            id: handle.0,
            due,
            job,
        });
        handle
    }
}

impl Scheduler for ManualScheduler {
    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        self.push(self.now.get() + f64::from(delay_ms), Job::Once(task))
    }

    fn set_interval(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle {
        self.push(
            self.now.get() + f64::from(period_ms.max(1)),
            Job::Every(period_ms, task),
        )
    }

    fn request_frame(&self, task: Box<dyn FnOnce(f64)>) -> TaskHandle {
        if self.frames_refused.get() {
            return self.next_handle();
        }
        self.push(self.now.get() + self.frame_ms, Job::Frame(task))
    }

    fn cancel(&self, handle: TaskHandle) {
        if self.running_interval.get() == Some(handle.0) {
            self.running_cancelled.set(true);
        }
        self.queue.borrow_mut().retain(|e| e.id != handle.0);
    }

    fn is_pending(&self, handle: TaskHandle) -> bool {
        if self.running_interval.get() == Some(handle.0) && !self.running_cancelled.get() {
            return true;
        }
        self.queue.borrow().iter().any(|e| e.id == handle.0)
    }
}
