//! Scroll-linked progress.
//!
//! A [`ScrollRange`] is defined by two anchors, each pairing an edge of the
//! tracked element with an edge of the viewport. Progress is 0 when the start
//! anchor's edges meet and 1 when the end anchor's edges meet, linear in the
//! scroll offset in between and unclamped outside it.

use smallvec::SmallVec;
use zenai_animation::Interpolation;
use zenai_ui_graphics::{Rect, Size};

/// A position along an axis of the element or of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
    /// Fraction of the extent, `0.0` being the start.
    Fraction(f32),
}

impl Edge {
    pub fn fraction(self) -> f32 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
            Edge::Fraction(fraction) => fraction,
        }
    }
}

/// "`element` edge meets `viewport` edge", e.g. `start start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnchor {
    pub element: Edge,
    pub viewport: Edge,
}

impl ScrollAnchor {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    /// Signed distance still to scroll before the two edges meet.
    fn remaining(&self, element: Rect, viewport: Size) -> f32 {
        element.y + self.element.fraction() * element.height
            - self.viewport.fraction() * viewport.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: ScrollAnchor,
    pub end: ScrollAnchor,
}

impl ScrollRange {
    pub const fn new(start: ScrollAnchor, end: ScrollAnchor) -> Self {
        Self { start, end }
    }

    /// `start start` to `end start`: from the element's top reaching the
    /// viewport top until its bottom does.
    pub const fn hero() -> Self {
        Self::new(
            ScrollAnchor::new(Edge::Start, Edge::Start),
            ScrollAnchor::new(Edge::End, Edge::Start),
        )
    }

    /// Progress for an element whose bounds are given relative to the
    /// viewport's top-left corner.
    pub fn progress(&self, element: Rect, viewport: Size) -> f32 {
        let start = self.start.remaining(element, viewport);
        let end = self.end.remaining(element, viewport);
        let span = start - end;
        if span.abs() < f32::EPSILON {
            // Degenerate range: a step at the shared anchor.
            return if start <= 0.0 { 1.0 } else { 0.0 };
        }
        start / span
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScrollOutputId(usize);

/// Scroll progress plus the values derived from it.
///
/// Recomputed from scratch on every [`update`](ScrollProgressMapper::update),
/// so it does not matter how many scroll or resize events were skipped.
#[derive(Clone, Debug)]
pub struct ScrollProgressMapper {
    range: ScrollRange,
    outputs: SmallVec<[Interpolation; 2]>,
    values: SmallVec<[f32; 2]>,
    progress: f32,
}

impl ScrollProgressMapper {
    pub fn new(range: ScrollRange) -> Self {
        Self {
            range,
            outputs: SmallVec::new(),
            values: SmallVec::new(),
            progress: 0.0,
        }
    }

    pub fn range(&self) -> ScrollRange {
        self.range
    }

    pub fn add_output(&mut self, interpolation: Interpolation) -> ScrollOutputId {
        let value = interpolation.map(self.progress);
        self.outputs.push(interpolation);
        self.values.push(value);
        ScrollOutputId(self.outputs.len() - 1)
    }

    pub fn update(&mut self, element: Rect, viewport: Size) -> f32 {
        self.progress = self.range.progress(element, viewport);
        for (value, output) in self.values.iter_mut().zip(self.outputs.iter()) {
            *value = output.map(self.progress);
        }
        self.progress
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn value(&self, id: ScrollOutputId) -> f32 {
        self.values.get(id.0).copied().unwrap_or_default()
    }
}

/// The hero's parallax: translate-y `0 -> -200` over the whole range and
/// opacity `1 -> 0` over its first half.
#[derive(Clone, Debug)]
pub struct HeroScroll {
    mapper: ScrollProgressMapper,
    translate_y: ScrollOutputId,
    opacity: ScrollOutputId,
}

impl HeroScroll {
    pub fn new() -> Self {
        let mut mapper = ScrollProgressMapper::new(ScrollRange::hero());
        let translate_y = mapper.add_output(Interpolation::linear([0.0, 1.0], [0.0, -200.0]));
        let opacity = mapper.add_output(Interpolation::linear([0.0, 0.5], [1.0, 0.0]));
        Self {
            mapper,
            translate_y,
            opacity,
        }
    }

    pub fn update(&mut self, element: Rect, viewport: Size) -> f32 {
        self.mapper.update(element, viewport)
    }

    pub fn progress(&self) -> f32 {
        self.mapper.progress()
    }

    pub fn translate_y(&self) -> f32 {
        self.mapper.value(self.translate_y)
    }

    pub fn opacity(&self) -> f32 {
        self.mapper.value(self.opacity)
    }
}

impl Default for HeroScroll {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/scroll_tests.rs"]
mod tests;
