//! Magnetic pull for buttons: the element drifts a fraction of the way
//! toward the pointer and springs back when the pointer leaves.

use crate::input::PointerSample;
use crate::motion_constants::{MAGNETIC_STRENGTH, OFFSET_EPSILON};
use zenai_animation::{Spring, SpringSpec};
use zenai_ui_graphics::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct MagneticOffset {
    pub dx: f32,
    pub dy: f32,
}

impl MagneticOffset {
    pub const ZERO: MagneticOffset = MagneticOffset { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub fn magnitude(&self) -> f32 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    pub fn is_near_zero(&self, epsilon: f32) -> bool {
        self.dx.abs() <= epsilon && self.dy.abs() <= epsilon
    }

    pub fn as_point(&self) -> Point {
        Point::new(self.dx, self.dy)
    }
}

/// Spring-smoothed displacement of one magnetic element.
///
/// `pointer_move` sets the target to `(pointer - center) * strength` while
/// the pointer is inside the element's bounds; a sample outside the bounds
/// or `pointer_leave` retargets to zero. Position and velocity are never
/// reset, so the release is as smooth as the pull.
#[derive(Clone, Debug)]
pub struct MagneticController {
    strength: f32,
    x: Spring,
    y: Spring,
    engaged: bool,
}

impl MagneticController {
    pub fn new(strength: f32, spring: SpringSpec) -> Self {
        Self {
            strength,
            x: Spring::new(spring, 0.0),
            y: Spring::new(spring, 0.0),
            engaged: false,
        }
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn pointer_move(&mut self, sample: PointerSample, bounds: Rect) {
        if !bounds.contains(sample.x, sample.y) {
            self.pointer_leave();
            return;
        }
        let pull = (sample.position() - bounds.center()) * self.strength;
        self.x.set_target(pull.x);
        self.y.set_target(pull.y);
        self.engaged = true;
    }

    pub fn pointer_leave(&mut self) {
        if self.engaged {
            log::trace!("magnetic release from {:?}", self.offset());
        }
        self.x.set_target(0.0);
        self.y.set_target(0.0);
        self.engaged = false;
    }

    /// Advances both springs and returns the new offset.
    pub fn tick(&mut self, dt_secs: f32) -> MagneticOffset {
        self.x.step(dt_secs);
        self.y.step(dt_secs);
        self.offset()
    }

    pub fn offset(&self) -> MagneticOffset {
        MagneticOffset::new(self.x.value(), self.y.value())
    }

    pub fn target_offset(&self) -> MagneticOffset {
        MagneticOffset::new(self.x.target(), self.y.target())
    }

    /// True once the offset has come to rest on its target.
    pub fn is_settled(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    /// True when released and back at the origin.
    pub fn is_idle(&self) -> bool {
        !self.engaged && self.is_settled() && self.offset().is_near_zero(OFFSET_EPSILON)
    }
}

impl Default for MagneticController {
    fn default() -> Self {
        Self::new(MAGNETIC_STRENGTH, SpringSpec::magnetic())
    }
}

#[cfg(test)]
#[path = "tests/magnetic_tests.rs"]
mod tests;
