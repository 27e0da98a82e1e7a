//! Bounded index that cycles on a timer or on demand.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use zenai_core::{ActiveFlag, MountScope};

/// Direction of the last index change, for the slide transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Backward,
    #[default]
    None,
    Forward,
}

impl Direction {
    pub fn from_delta(delta: i64) -> Self {
        match delta.signum() {
            1 => Direction::Forward,
            -1 => Direction::Backward,
            _ => Direction::None,
        }
    }

    pub fn signum(self) -> i32 {
        match self {
            Direction::Backward => -1,
            Direction::None => 0,
            Direction::Forward => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel needs at least one item.
    Empty,
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::Empty => write!(f, "carousel has no items"),
        }
    }
}

impl std::error::Error for CarouselError {}

/// `{current_index, direction}` with `current_index < len` at all times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
    direction: Direction,
}

impl CarouselState {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            len,
            current: 0,
            direction: Direction::None,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.len;
        self.direction = Direction::Forward;
    }

    pub fn prev(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
        self.direction = Direction::Backward;
    }

    /// Jumps to `index`, clamped to the last item. The direction is the
    /// plain sign of the jump, without taking the shorter way around.
    pub fn go_to(&mut self, index: usize) {
        let index = index.min(self.len - 1);
        self.direction = Direction::from_delta(index as i64 - self.current as i64);
        self.current = index;
    }
}

/// A [`CarouselState`] mounted in a scope.
///
/// While the scope is active an interval calls `next()` every period. Manual
/// `next`/`prev`/`go_to` calls do not reset or pause that interval. Once the
/// scope is disposed the timer is gone and every method is a no-op.
#[derive(Clone)]
pub struct Carousel {
    state: Rc<RefCell<CarouselState>>,
    mounted: ActiveFlag,
}

impl Carousel {
    pub fn mount(
        len: usize,
        scope: &MountScope,
        interval_millis: u64,
    ) -> Result<Self, CarouselError> {
        let state = Rc::new(RefCell::new(CarouselState::new(len)?));
        let ticking = Rc::downgrade(&state);
        scope.interval(interval_millis, move || {
            if let Some(state) = ticking.upgrade() {
                let mut state = state.borrow_mut();
                state.next();
                log::debug!("carousel auto-advanced to {}", state.current_index());
            }
        });
        Ok(Self {
            state,
            mounted: scope.active_flag(),
        })
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_active()
    }

    pub fn snapshot(&self) -> CarouselState {
        *self.state.borrow()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    pub fn current_index(&self) -> usize {
        self.state.borrow().current_index()
    }

    pub fn direction(&self) -> Direction {
        self.state.borrow().direction()
    }

    pub fn next(&self) {
        self.update(CarouselState::next);
    }

    pub fn prev(&self) {
        self.update(CarouselState::prev);
    }

    pub fn go_to(&self, index: usize) {
        self.update(|state| state.go_to(index));
    }

    fn update(&self, change: impl FnOnce(&mut CarouselState)) {
        if !self.is_mounted() {
            log::trace!("ignoring carousel input after teardown");
            return;
        }
        change(&mut self.state.borrow_mut());
    }
}

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod tests;
