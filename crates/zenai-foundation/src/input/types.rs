use zenai_ui_graphics::Point;

/// Identifier the target registry hands out for an interactive element.
pub type TargetId = u64;

/// Last known pointer coordinates, in viewport space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for PointerSample {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

/// What the primary pointing device can do, as reported by the
/// `(pointer: fine)` / `(pointer: coarse)` media queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerCapability {
    /// Mouse, trackpad or stylus.
    Fine,
    /// Touch screens.
    Coarse,
    #[default]
    None,
}

impl PointerCapability {
    pub fn from_media_queries(fine: bool, coarse: bool) -> Self {
        if fine {
            PointerCapability::Fine
        } else if coarse {
            PointerCapability::Coarse
        } else {
            PointerCapability::None
        }
    }

    pub fn is_fine(self) -> bool {
        self == PointerCapability::Fine
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Move,
    /// Pointer entered an interactive target.
    Enter(TargetId),
    /// Pointer left an interactive target.
    Leave(TargetId),
    /// Pointer left the document.
    Exit,
}

/// Pointer event in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self { kind, position }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn enter(target: TargetId, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Enter(target), Point::new(x, y))
    }

    pub fn leave(target: TargetId, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Leave(target), Point::new(x, y))
    }

    pub fn exit() -> Self {
        Self::new(PointerEventKind::Exit, Point::ZERO)
    }

    pub fn sample(&self) -> PointerSample {
        PointerSample::from(self.position)
    }

    /// Target the event refers to, for enter and leave events.
    pub fn target(&self) -> Option<TargetId> {
        match self.kind {
            PointerEventKind::Enter(target) | PointerEventKind::Leave(target) => Some(target),
            PointerEventKind::Move | PointerEventKind::Exit => None,
        }
    }
}
