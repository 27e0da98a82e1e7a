//! Animation system for the ZenAI site.
//!
//! Provides time-based tweens with easing curves, closed-form spring physics
//! and piecewise-linear range mapping for scroll-linked values.

mod animatable;
mod easing;
mod interpolate;
mod spring;

pub use animatable::{Animatable, AnimationSpec, AnimationType};
pub use easing::Easing;
pub use interpolate::{Interpolation, InterpolationError, Lerp};
pub use spring::{Spring, SpringSpec, SpringState};
