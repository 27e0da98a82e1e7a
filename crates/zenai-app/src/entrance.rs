use zenai_animation::{Animatable, AnimationSpec, AnimationType, Easing};
use zenai_core::RuntimeHandle;
use zenai_ui_graphics::{GraphicsLayer, Point};

/// A play-once entrance: the element starts displaced and transparent and
/// tweens to its resting place at full opacity.
///
/// Clones share the same progress, so a visibility callback can hold one
/// clone and start it while the shell reads another.
#[derive(Clone)]
pub struct Entrance {
    progress: Animatable,
    from: Point,
    spec: AnimationSpec,
}

impl Entrance {
    pub fn new(runtime: RuntimeHandle, from: Point, spec: AnimationSpec) -> Self {
        Self {
            progress: Animatable::new(0.0, runtime),
            from,
            spec,
        }
    }

    /// Rises `distance` pixels (negative drops in from above).
    pub fn rise(runtime: RuntimeHandle, distance: f32, spec: AnimationSpec) -> Self {
        Self::new(runtime, Point::new(0.0, distance), spec)
    }

    pub fn slide(runtime: RuntimeHandle, distance: f32, spec: AnimationSpec) -> Self {
        Self::new(runtime, Point::new(distance, 0.0), spec)
    }

    /// Opacity only.
    pub fn fade(runtime: RuntimeHandle, spec: AnimationSpec) -> Self {
        Self::new(runtime, Point::ZERO, spec)
    }

    /// Starts the tween. Later calls do nothing.
    pub fn play(&self) {
        if self.has_started() {
            return;
        }
        self.progress.animate_to(1.0, AnimationType::Tween(self.spec));
    }

    pub fn has_started(&self) -> bool {
        self.progress.target() >= 1.0
    }

    pub fn is_finished(&self) -> bool {
        self.has_started() && !self.progress.is_running()
    }

    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    pub fn layer(&self) -> GraphicsLayer {
        let progress = self.progress();
        GraphicsLayer::IDENTITY
            .translated(self.from * (1.0 - progress))
            .with_alpha(progress.clamp(0.0, 1.0))
    }
}

/// `duration` ms with CSS `ease`, after `delay` ms.
pub(crate) fn eased(duration_millis: u64, delay_millis: u64) -> AnimationSpec {
    AnimationSpec::tween(duration_millis, Easing::Ease).with_delay(delay_millis)
}
