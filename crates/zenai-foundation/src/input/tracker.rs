use super::types::{PointerCapability, PointerEvent, PointerEventKind, PointerSample, TargetId};
use smallvec::SmallVec;

pub type SubscriptionId = u64;

type SampleListener = Box<dyn FnMut(PointerSample)>;

/// Latest pointer position and hovered target.
///
/// The tracker only works while the device reports a fine pointer. Switching
/// to a coarse pointer (or none) drops the sample and the hover state, and
/// every event is ignored until a fine pointer is reported again.
///
/// Hover follows "last enter wins": entering a target makes it the hovered
/// one, and leaving a target only clears hover if that target is still the
/// hovered one.
pub struct PointerTracker {
    capability: PointerCapability,
    sample: Option<PointerSample>,
    hovered: Option<TargetId>,
    listeners: SmallVec<[(SubscriptionId, SampleListener); 2]>,
    next_subscription: SubscriptionId,
}

impl PointerTracker {
    pub fn new(capability: PointerCapability) -> Self {
        Self {
            capability,
            sample: None,
            hovered: None,
            listeners: SmallVec::new(),
            next_subscription: 0,
        }
    }

    pub fn capability(&self) -> PointerCapability {
        self.capability
    }

    pub fn is_enabled(&self) -> bool {
        self.capability.is_fine()
    }

    /// Re-evaluates the pointer capability, as done on mount and on every
    /// viewport resize. Returns true if the capability changed.
    pub fn set_capability(&mut self, capability: PointerCapability) -> bool {
        if capability == self.capability {
            return false;
        }
        log::debug!(
            "pointer capability changed: {:?} -> {:?}",
            self.capability,
            capability
        );
        self.capability = capability;
        if !capability.is_fine() {
            self.sample = None;
            self.hovered = None;
        }
        true
    }

    pub fn subscribe(&mut self, listener: impl FnMut(PointerSample) + 'static) -> SubscriptionId {
        self.next_subscription += 1;
        let id = self.next_subscription;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(entry, _)| *entry != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn sample(&self) -> Option<PointerSample> {
        self.sample
    }

    pub fn hovered(&self) -> Option<TargetId> {
        self.hovered
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn handle(&mut self, event: &PointerEvent) {
        if !self.is_enabled() {
            return;
        }
        match event.kind {
            PointerEventKind::Move => {
                let sample = event.sample();
                self.sample = Some(sample);
                for (_, listener) in self.listeners.iter_mut() {
                    listener(sample);
                }
            }
            PointerEventKind::Enter(target) => {
                self.hovered = Some(target);
            }
            PointerEventKind::Leave(target) => {
                if self.hovered == Some(target) {
                    self.hovered = None;
                }
            }
            PointerEventKind::Exit => {
                self.hovered = None;
            }
        }
    }

    /// Clears hover for a target whose listeners were released.
    pub fn forget_target(&mut self, target: TargetId) {
        if self.hovered == Some(target) {
            self.hovered = None;
        }
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(PointerCapability::default())
    }
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
