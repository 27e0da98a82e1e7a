//! Two-layer custom cursor that chases the pointer on springs.

use zenai_animation::{Spring, SpringSpec};
use zenai_foundation::PointerSample;
use zenai_ui_graphics::{GraphicsLayer, Point};

/// Half the outer glow's size; keeps it centered on the pointer.
pub const CURSOR_OUTER_OFFSET: f32 = 16.0;
pub const CURSOR_INNER_OFFSET: f32 = 4.0;
/// Inner dot scale while an interactive target is hovered.
pub const CURSOR_HOVER_SCALE: f32 = 1.5;

#[derive(Clone, Debug)]
struct FollowLayer {
    offset: f32,
    x: Spring,
    y: Spring,
}

impl FollowLayer {
    fn new(spec: SpringSpec, offset: f32) -> Self {
        Self {
            offset,
            x: Spring::new(spec, -offset),
            y: Spring::new(spec, -offset),
        }
    }

    fn follow(&mut self, sample: PointerSample) {
        self.x.set_target(sample.x - self.offset);
        self.y.set_target(sample.y - self.offset);
    }

    fn tick(&mut self, dt_secs: f32) {
        self.x.step(dt_secs);
        self.y.step(dt_secs);
    }

    fn position(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }
}

/// The outer glow and inner dot both spring toward the pointer; both start
/// from the viewport origin. Without a fine pointer the cursor is hidden
/// and stops following.
#[derive(Clone, Debug)]
pub struct CustomCursor {
    outer: FollowLayer,
    inner: FollowLayer,
    visible: bool,
    hovering: bool,
}

impl CustomCursor {
    pub fn new(spec: SpringSpec) -> Self {
        Self {
            outer: FollowLayer::new(spec, CURSOR_OUTER_OFFSET),
            inner: FollowLayer::new(spec, CURSOR_INNER_OFFSET),
            visible: false,
            hovering: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.hovering = false;
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering && self.visible;
    }

    pub fn pointer_moved(&mut self, sample: PointerSample) {
        if !self.visible {
            return;
        }
        self.outer.follow(sample);
        self.inner.follow(sample);
    }

    pub fn tick(&mut self, dt_secs: f32) {
        self.outer.tick(dt_secs);
        self.inner.tick(dt_secs);
    }

    pub fn is_settled(&self) -> bool {
        self.outer.is_at_rest() && self.inner.is_at_rest()
    }

    pub fn outer_layer(&self) -> GraphicsLayer {
        GraphicsLayer::IDENTITY
            .translated(self.outer.position())
            .with_alpha(self.alpha())
    }

    pub fn inner_layer(&self) -> GraphicsLayer {
        let scale = if self.hovering {
            CURSOR_HOVER_SCALE
        } else {
            1.0
        };
        GraphicsLayer::IDENTITY
            .translated(self.inner.position())
            .with_scale(scale)
            .with_alpha(self.alpha())
    }

    fn alpha(&self) -> f32 {
        if self.visible {
            1.0
        } else {
            0.0
        }
    }
}

impl Default for CustomCursor {
    fn default() -> Self {
        Self::new(SpringSpec::cursor())
    }
}

#[cfg(test)]
#[path = "tests/cursor_tests.rs"]
mod tests;
