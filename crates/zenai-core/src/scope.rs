use crate::frame_clock::IntervalRegistration;
use crate::runtime::RuntimeHandle;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Disposer = Box<dyn FnOnce()>;

/// Shared "still mounted" flag handed to callbacks that may outlive a scope.
#[derive(Clone)]
pub struct ActiveFlag(Arc<AtomicBool>);

impl ActiveFlag {
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Acquire-on-mount, release-on-unmount bookkeeping for one component.
///
/// Everything registered through the scope is released when [`dispose`] runs
/// or the scope is dropped, whichever comes first, in reverse registration
/// order. Callbacks created through the scope check its [`ActiveFlag`] and
/// become inert once it is cleared.
///
/// [`dispose`]: MountScope::dispose
pub struct MountScope {
    runtime: RuntimeHandle,
    active: Arc<AtomicBool>,
    disposers: RefCell<SmallVec<[Disposer; 4]>>,
}

impl MountScope {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self {
            runtime,
            active: Arc::new(AtomicBool::new(true)),
            disposers: RefCell::new(SmallVec::new()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn active_flag(&self) -> ActiveFlag {
        ActiveFlag(Arc::clone(&self.active))
    }

    pub fn runtime(&self) -> RuntimeHandle {
        self.runtime.clone()
    }

    /// Registers cleanup work. On an already disposed scope it runs at once.
    pub fn on_dispose(&self, disposer: impl FnOnce() + 'static) {
        if !self.is_active() {
            disposer();
            return;
        }
        self.disposers.borrow_mut().push(Box::new(disposer));
    }

    /// Keeps an RAII guard (listener, registration) alive until disposal.
    pub fn hold<T: 'static>(&self, resource: T) {
        self.on_dispose(move || drop(resource));
    }

    /// Recurring timer that stops with the scope.
    pub fn interval(&self, period_millis: u64, mut tick: impl FnMut() + 'static) {
        let active = self.active_flag();
        let registration: IntervalRegistration =
            self.runtime.interval(period_millis, move || {
                if active.is_active() {
                    tick();
                }
            });
        self.hold(registration);
    }

    pub fn dispose(&self) {
        if !self.active.swap(false, Ordering::SeqCst) {
            return;
        }
        let disposers = std::mem::take(&mut *self.disposers.borrow_mut());
        log::debug!("disposing mount scope ({} resources)", disposers.len());
        for disposer in disposers.into_iter().rev() {
            disposer();
        }
    }
}

impl Drop for MountScope {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "tests/scope_tests.rs"]
mod tests;
