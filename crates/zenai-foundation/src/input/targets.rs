use super::types::TargetId;
use rustc_hash::{FxHashMap, FxHashSet};

/// An element found while scanning the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetDescriptor {
    /// Stable identity the host can find the element by again.
    pub key: String,
    pub tag: String,
    pub role: Option<String>,
}

impl TargetDescriptor {
    pub fn new(key: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            tag: tag.into(),
            role: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// `a, button, [role="button"]`
pub fn is_interactive(tag: &str, role: Option<&str>) -> bool {
    tag.eq_ignore_ascii_case("a")
        || tag.eq_ignore_ascii_case("button")
        || role.is_some_and(|role| role == "button")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetBinding {
    pub id: TargetId,
    pub key: String,
}

/// Result of one synchronization pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetSync {
    /// New targets that need hover listeners bound, in document order.
    pub added: Vec<TargetBinding>,
    /// Targets that disappeared; their listeners must be released.
    pub removed: Vec<TargetBinding>,
}

impl TargetSync {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// The set of interactive elements currently carrying hover listeners.
///
/// The host rescans the document after every mutation (or on a polling
/// interval) and passes the scan to [`sync`](InteractiveTargets::sync), which
/// reports only the difference. Elements keep their id for as long as they
/// stay in the document.
#[derive(Default)]
pub struct InteractiveTargets {
    ids: FxHashMap<String, TargetId>,
    next_id: TargetId,
}

impl InteractiveTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn id_for(&self, key: &str) -> Option<TargetId> {
        self.ids.get(key).copied()
    }

    pub fn sync<I>(&mut self, scan: I) -> TargetSync
    where
        I: IntoIterator<Item = TargetDescriptor>,
    {
        let mut sync = TargetSync::default();
        let mut seen = FxHashSet::default();

        for descriptor in scan {
            if !is_interactive(&descriptor.tag, descriptor.role.as_deref()) {
                continue;
            }
            if !seen.insert(descriptor.key.clone()) {
                continue;
            }
            if !self.ids.contains_key(&descriptor.key) {
                self.next_id += 1;
                self.ids.insert(descriptor.key.clone(), self.next_id);
                sync.added.push(TargetBinding {
                    id: self.next_id,
                    key: descriptor.key,
                });
            }
        }

        let gone: Vec<String> = self
            .ids
            .keys()
            .filter(|key| !seen.contains(*key))
            .cloned()
            .collect();
        for key in gone {
            if let Some(id) = self.ids.remove(&key) {
                sync.removed.push(TargetBinding { id, key });
            }
        }
        sync.removed.sort_by_key(|binding| binding.id);

        if !sync.is_empty() {
            log::debug!(
                "interactive targets: +{} -{} ({} bound)",
                sync.added.len(),
                sync.removed.len(),
                self.ids.len()
            );
        }
        sync
    }

    /// Releases every target, e.g. on teardown.
    pub fn clear(&mut self) -> Vec<TargetBinding> {
        let mut removed: Vec<TargetBinding> = self
            .ids
            .drain()
            .map(|(key, id)| TargetBinding { id, key })
            .collect();
        removed.sort_by_key(|binding| binding.id);
        removed
    }
}

#[cfg(test)]
#[path = "tests/targets_tests.rs"]
mod tests;
