//! Shared access to a collection being edited while others evaluate it.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::collection::RuleSetCollection;

/// A collection behind a lock, handed out to evaluators as snapshots.
///
/// Editors take the write lock through [`edit`](Self::edit); evaluators
/// take an immutable [`snapshot`](Self::snapshot) and never block edits
/// for longer than the copy.
///
/// # Example
///
/// ```
/// use landmark_core::MeasurementName;
/// use landmark_rules::{presets, SharedRuleSetCollection};
///
/// let shared = SharedRuleSetCollection::new(presets::round());
/// let before = shared.snapshot();
///
/// shared.edit(|c| c.add_measurement(MeasurementName::new("Custom").unwrap()));
///
/// assert_ne!(*before, *shared.snapshot());
/// ```
#[derive(Debug, Clone)]
pub struct SharedRuleSetCollection {
    inner: Arc<RwLock<Arc<RuleSetCollection>>>,
}

impl SharedRuleSetCollection {
    pub fn new(collection: RuleSetCollection) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(collection))),
        }
    }

    /// Current state; later edits do not affect it.
    pub fn snapshot(&self) -> Arc<RuleSetCollection> {
        Arc::clone(&self.inner.read())
    }

    /// Applies `f` under the write lock.
    ///
    /// Outstanding snapshots keep the previous state; the collection is
    /// copied only when one exists.
    pub fn edit<R>(&self, f: impl FnOnce(&mut RuleSetCollection) -> R) -> R {
        let mut guard = self.inner.write();
        f(Arc::make_mut(&mut guard))
    }
}

impl From<RuleSetCollection> for SharedRuleSetCollection {
    fn from(collection: RuleSetCollection) -> Self {
        Self::new(collection)
    }
}

#[cfg(test)]
mod tests {
    use landmark_core::{OrientationMark, ProfileKind};

    use super::*;
    use crate::builder::RuleSetBuilder;
    use crate::presets;

    #[test]
    fn test_snapshots_survive_edits() {
        let shared = SharedRuleSetCollection::new(presets::pig_sperm());
        let before = shared.snapshot();

        shared
            .edit(|c| {
                c.add_rule_set(
                    OrientationMark::Reference,
                    RuleSetBuilder::new(ProfileKind::Radius).is_maximum().build(),
                )
            })
            .unwrap();

        let after = shared.snapshot();
        assert_eq!(before.rule_sets_for_mark(OrientationMark::Reference).len(), 1);
        assert_eq!(after.rule_sets_for_mark(OrientationMark::Reference).len(), 2);
    }

    #[test]
    fn test_concurrent_readers() {
        let shared = SharedRuleSetCollection::new(presets::mouse_sperm());

        rayon::scope(|s| {
            for _ in 0..4 {
                s.spawn(|_| {
                    for _ in 0..100 {
                        assert!(shared.snapshot().is_asymmetric());
                    }
                });
            }
            s.spawn(|_| {
                for _ in 0..10 {
                    shared.edit(|c| c.set_priority_axis(None));
                }
            });
        });

        assert_eq!(shared.snapshot().priority_axis(), None);
    }
}
