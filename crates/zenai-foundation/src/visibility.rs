use crate::motion_constants::VISIBILITY_MARGIN;
use zenai_ui_graphics::{EdgeInsets, Rect, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Unseen,
    /// Terminal.
    Seen,
}

/// One-shot "has entered the viewport" gate for play-once entrances.
///
/// The viewport is grown by `margin` on every side (negative shrinks it)
/// before the intersection test. The first intersecting observation flips
/// the state to [`Visibility::Seen`], fires the enter callback, and stops
/// observing; later observations, including leaving and re-entering, change
/// nothing.
pub struct VisibilityDetector {
    margin: f32,
    state: Visibility,
    on_enter: Option<Box<dyn FnOnce()>>,
}

impl VisibilityDetector {
    pub fn new(margin: f32) -> Self {
        Self {
            margin,
            state: Visibility::Unseen,
            on_enter: None,
        }
    }

    pub fn with_on_enter(mut self, on_enter: impl FnOnce() + 'static) -> Self {
        self.on_enter = Some(Box::new(on_enter));
        self
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_seen(&self) -> bool {
        self.state == Visibility::Seen
    }

    pub fn is_observing(&self) -> bool {
        self.state == Visibility::Unseen
    }

    /// Returns true on the observation that flips the state.
    pub fn observe(&mut self, bounds: Rect, viewport: Size) -> bool {
        if self.is_seen() {
            return false;
        }
        let root = Rect::from_size(viewport).outset(EdgeInsets::uniform(self.margin));
        if !bounds.intersects(&root) {
            return false;
        }
        self.state = Visibility::Seen;
        log::debug!("element at {:?} entered the viewport", bounds);
        if let Some(on_enter) = self.on_enter.take() {
            on_enter();
        }
        true
    }
}

impl Default for VisibilityDetector {
    fn default() -> Self {
        Self::new(VISIBILITY_MARGIN)
    }
}

impl std::fmt::Debug for VisibilityDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibilityDetector")
            .field("margin", &self.margin)
            .field("state", &self.state)
            .field("has_on_enter", &self.on_enter.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/visibility_tests.rs"]
mod tests;
