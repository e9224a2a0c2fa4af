//! Cancellable recurring tasks
//!
//! Wraps `gloo_timers::callback::Interval` so every periodic UI effect
//! (reveal, clock, processing animation) hands back a `TaskHandle` its
//! owner cancels on teardown.

use gloo_timers::callback::{Interval, Timeout};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// What a step wants next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

struct Slot {
    interval: RefCell<Option<Interval>>,
    stopped: Cell<bool>,
}

impl Slot {
    fn stop(&self) {
        self.stopped.set(true);
        self.interval.borrow_mut().take();
    }
}

/// Disposal handle of a running `Ticker`. Dropping it cancels the task.
pub struct TaskHandle {
    slot: Rc<Slot>,
}

impl TaskHandle {
    /// Stop the task; no further step runs. Idempotent.
    pub fn cancel(&self) {
        self.slot.stop();
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.slot.stop();
    }
}

pub struct Ticker;

impl Ticker {
    /// Run `step` every `period_ms` until it returns `Tick::Stop` or the
    /// handle is cancelled/dropped. The first step runs after one period.
    pub fn start<F>(period_ms: u32, mut step: F) -> TaskHandle
    where
        F: FnMut() -> Tick + 'static,
    {
        let slot = Rc::new(Slot {
            interval: RefCell::new(None),
            stopped: Cell::new(false),
        });
        let weak = Rc::downgrade(&slot);

        let interval = Interval::new(period_ms, move || {
            let Some(slot) = weak.upgrade() else { return };
            if slot.stopped.get() {
                return;
            }
            if step() == Tick::Stop {
                slot.stopped.set(true);
                // Clearing the interval from inside its own callback would drop
                // the running closure, so defer it to the next turn.
                Timeout::new(0, move || slot.stop()).forget();
            }
        });
        *slot.interval.borrow_mut() = Some(interval);

        TaskHandle { slot }
    }

    /// Like `start`, but runs the first step immediately
    pub fn start_now<F>(period_ms: u32, mut step: F) -> TaskHandle
    where
        F: FnMut() -> Tick + 'static,
    {
        if step() == Tick::Stop {
            return TaskHandle {
                slot: Rc::new(Slot {
                    interval: RefCell::new(None),
                    stopped: Cell::new(true),
                }),
            };
        }
        Self::start(period_ms, step)
    }
}
