use crate::easing::Easing;
use crate::interpolate::Lerp;
use crate::spring::{SpringSpec, SpringState};
use std::cell::RefCell;
use std::rc::Rc;
use zenai_core::{FrameCallbackRegistration, RuntimeHandle, NANOS_PER_MILLI};

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::Ease)
    }
}

/// Animation type specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    /// Time-based tween animation.
    Tween(AnimationSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// Scalar animated by the runtime's frame clock.
///
/// The value schedules one frame callback at a time while it is moving and
/// none once it reaches its target. Dropping every clone cancels the pending
/// frame.
pub struct Animatable {
    inner: Rc<RefCell<AnimatableInner>>,
}

struct AnimatableInner {
    runtime: RuntimeHandle,
    current: f32,
    velocity: f32,
    start: f32,
    target: f32,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
}

impl Animatable {
    pub fn new(initial: f32, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            runtime,
            current: initial,
            velocity: 0.0,
            start: initial,
            target: initial,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate to the target value. A spring keeps its current velocity so a
    /// retarget mid-flight stays smooth; a tween restarts from the current
    /// value.
    pub fn animate_to(&self, target: f32, animation: AnimationType) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            log::trace!("animating {} -> {target} with {animation:?}", inner.current);
            inner.start = inner.current;
            inner.target = target;
            inner.animation_type = animation;
            inner.start_time_nanos = None;
            inner.last_frame_nanos = None;
            if matches!(animation, AnimationType::Tween(_)) {
                inner.velocity = 0.0;
            }
        }
        Self::schedule_frame(&self.inner);
    }

    /// Snap immediately to the target value without animating.
    pub fn snap_to(&self, target: f32) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.current = target;
        inner.start = target;
        inner.target = target;
        inner.velocity = 0.0;
        inner.start_time_nanos = None;
        inner.last_frame_nanos = None;
    }

    pub fn value(&self) -> f32 {
        self.inner.borrow().current
    }

    pub fn target(&self) -> f32 {
        self.inner.borrow().target
    }

    pub fn animation_type(&self) -> AnimationType {
        self.inner.borrow().animation_type
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        let mut inner = this.borrow_mut();
        if registration.is_active() {
            inner.registration = Some(registration);
        } else {
            log::trace!("no frame clock to animate on, jumping to {}", inner.target);
            inner.current = inner.target;
            inner.start = inner.target;
            inner.velocity = 0.0;
        }
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner>>, frame_time_nanos: u64) {
        let schedule_next = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            match inner.animation_type {
                AnimationType::Tween(spec) => {
                    Self::tween_frame(&mut inner, spec, frame_time_nanos)
                }
                AnimationType::Spring(spec) => {
                    Self::spring_frame(&mut inner, spec, frame_time_nanos)
                }
            }
        };

        if schedule_next {
            Self::schedule_frame(this);
        }
    }

    fn tween_frame(inner: &mut AnimatableInner, spec: AnimationSpec, now: u64) -> bool {
        let start_time = *inner.start_time_nanos.get_or_insert(now);
        let elapsed_nanos = now.saturating_sub(start_time);
        let delay_nanos = spec.delay_millis * NANOS_PER_MILLI;
        if elapsed_nanos < delay_nanos {
            return true;
        }

        let duration_nanos = (spec.duration_millis * NANOS_PER_MILLI).max(1);
        let linear_progress =
            ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0);
        let progress = spec.easing.transform(linear_progress);
        inner.current = inner.start.lerp(&inner.target, progress);

        if linear_progress >= 1.0 {
            inner.current = inner.target;
            inner.start = inner.target;
            inner.start_time_nanos = None;
            false
        } else {
            true
        }
    }

    fn spring_frame(inner: &mut AnimatableInner, spec: SpringSpec, now: u64) -> bool {
        let Some(last) = inner.last_frame_nanos.replace(now) else {
            // First frame only anchors the time base.
            return true;
        };
        let dt = now.saturating_sub(last) as f32 / 1_000_000_000.0;
        let mut state = SpringState {
            position: inner.current,
            velocity: inner.velocity,
        };
        let settled = state.advance(inner.target, &spec, dt);
        inner.current = state.position;
        inner.velocity = state.velocity;
        if settled {
            inner.start = inner.target;
            inner.last_frame_nanos = None;
        }
        !settled
    }
}

impl Clone for Animatable {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animatable_tests.rs"]
mod tests;
