//! Queue between the host's event listeners and the per-frame update.
//!
//! Listeners fire in arbitrary order between frames; the shell drains the
//! queue once per frame so every controller sees events in arrival order.

use super::types::PointerEvent;

#[derive(Default)]
pub struct PointerDispatcher {
    queue: Vec<PointerEvent>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerEvent),
    {
        for event in self.queue.drain(..) {
            handler(event);
        }
    }
}
