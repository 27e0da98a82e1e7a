use crate::frame_clock::{FrameClock, IntervalRegistration};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type FrameCallbackId = u64;
pub type TimerId = u64;

type FrameCallback = Box<dyn FnOnce(u64)>;
type TimerCallback = Rc<RefCell<dyn FnMut()>>;

struct IntervalEntry {
    period_millis: u64,
    next_due_millis: u64,
    callback: TimerCallback,
}

#[derive(Default)]
struct RuntimeState {
    next_id: u64,
    frame_callbacks: Vec<(FrameCallbackId, FrameCallback)>,
    intervals: FxHashMap<TimerId, IntervalEntry>,
    now_millis: u64,
}

impl RuntimeState {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Owner of all frame callbacks and interval timers.
///
/// Dropping the runtime drops every pending callback with it; handles that
/// outlive it turn into no-ops.
pub struct Runtime {
    state: Rc<RefCell<RuntimeState>>,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(RuntimeState::default())),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            state: Rc::downgrade(&self.state),
        }
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.handle())
    }

    /// Milliseconds of runtime time observed so far.
    pub fn now_millis(&self) -> u64 {
        self.state.borrow().now_millis
    }

    pub fn has_frame_callbacks(&self) -> bool {
        !self.state.borrow().frame_callbacks.is_empty()
    }

    pub fn active_timer_count(&self) -> usize {
        self.state.borrow().intervals.len()
    }

    /// Runs every frame callback registered before this call. Callbacks
    /// registered while draining wait for the next frame.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let ids: SmallVec<[FrameCallbackId; 16]> = self
            .state
            .borrow()
            .frame_callbacks
            .iter()
            .map(|(id, _)| *id)
            .collect();
        for id in ids {
            let callback = {
                let mut state = self.state.borrow_mut();
                let index = state
                    .frame_callbacks
                    .iter()
                    .position(|(entry, _)| *entry == id);
                index.map(|index| state.frame_callbacks.remove(index).1)
            };
            if let Some(callback) = callback {
                callback(frame_time_nanos);
            }
        }
    }

    /// Moves runtime time forward to `now_millis`, firing every interval that
    /// falls due on the way in chronological order. An interval fires at most
    /// once per step: periods missed during a long gap are dropped and the
    /// next tick lands on the first period boundary after `now_millis`.
    pub fn advance_timers_to(&self, now_millis: u64) {
        loop {
            let due = self.next_due_interval(now_millis);
            let Some((id, due_at, callback)) = due else {
                break;
            };
            {
                let mut state = self.state.borrow_mut();
                state.now_millis = state.now_millis.max(due_at);
                if let Some(entry) = state.intervals.get_mut(&id) {
                    entry.next_due_millis = next_boundary(due_at, entry.period_millis, now_millis);
                }
            }
            log::trace!("interval {id} fired at {due_at}ms");
            (&mut *callback.borrow_mut())();
        }
        let mut state = self.state.borrow_mut();
        state.now_millis = state.now_millis.max(now_millis);
    }
}

impl Runtime {
    fn next_due_interval(&self, now_millis: u64) -> Option<(TimerId, u64, TimerCallback)> {
        let state = self.state.borrow();
        let next = state
            .intervals
            .iter()
            .filter(|(_, entry)| entry.next_due_millis <= now_millis)
            .min_by_key(|(id, entry)| (entry.next_due_millis, **id))
            .map(|(id, entry)| (*id, entry.next_due_millis, Rc::clone(&entry.callback)));
        next
    }
}

fn next_boundary(due_at: u64, period_millis: u64, now_millis: u64) -> u64 {
    let missed = now_millis.saturating_sub(due_at) / period_millis;
    due_at + period_millis * (missed + 1)
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

/// Weak handle to a [`Runtime`], cheap to clone into callbacks.
#[derive(Clone)]
pub struct RuntimeHandle {
    state: Weak<RefCell<RuntimeState>>,
}

impl RuntimeHandle {
    pub fn is_alive(&self) -> bool {
        self.state.strong_count() > 0
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }

    pub fn now_millis(&self) -> u64 {
        self.state.upgrade().map_or(0, |state| {
            let state = state.borrow();
            state.now_millis
        })
    }

    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        let state = self.state.upgrade()?;
        let mut state = state.borrow_mut();
        let id = state.allocate_id();
        state.frame_callbacks.push((id, Box::new(callback)));
        Some(id)
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(state) = self.state.upgrade() {
            state
                .borrow_mut()
                .frame_callbacks
                .retain(|(entry, _)| *entry != id);
        }
    }

    /// Registers a recurring timer. The first tick is due one full period
    /// after the current runtime time.
    pub fn register_interval(
        &self,
        period_millis: u64,
        callback: impl FnMut() + 'static,
    ) -> Option<TimerId> {
        let state = self.state.upgrade()?;
        let mut state = state.borrow_mut();
        let id = state.allocate_id();
        let period_millis = period_millis.max(1);
        let next_due_millis = state.now_millis + period_millis;
        state.intervals.insert(
            id,
            IntervalEntry {
                period_millis,
                next_due_millis,
                callback: Rc::new(RefCell::new(callback)),
            },
        );
        log::trace!("interval {id} registered every {period_millis}ms");
        Some(id)
    }

    pub fn cancel_timer(&self, id: TimerId) {
        if let Some(state) = self.state.upgrade() {
            if state.borrow_mut().intervals.remove(&id).is_some() {
                log::trace!("interval {id} cancelled");
            }
        }
    }

    /// Recurring timer owned by the returned registration.
    pub fn interval(
        &self,
        period_millis: u64,
        callback: impl FnMut() + 'static,
    ) -> IntervalRegistration {
        match self.register_interval(period_millis, callback) {
            Some(id) => IntervalRegistration::new(self.clone(), id),
            None => IntervalRegistration::inactive(self.clone()),
        }
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
