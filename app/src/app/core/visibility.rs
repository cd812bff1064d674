//! Viewport-intersection tracking of the active section.
//!
//! Regions are registered with [`VisibilityTracker::observe`], which hands
//! back an [`Observation`] guard; the registration lives exactly as long as
//! the guard. Evaluating a viewport yields a batch of [`IntersectionEntry`]
//! notifications for regions whose visible fraction crossed the threshold,
//! and applying a batch moves the active section (last writer wins).

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::app::types::{Extent, SectionId};

/// One notification: `target`'s visible fraction crossed the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: SectionId,
    pub ratio: f32,
    pub is_intersecting: bool,
}

#[derive(Debug)]
struct Target {
    key: u64,
    id: SectionId,
    region: Extent,
    /// Intersecting state at the previous evaluation; `None` until the
    /// first evaluation after registration.
    last: Option<bool>,
}

#[derive(Debug, Default)]
struct Registry {
    targets: Vec<Target>,
    next_key: u64,
}

/// Registration handle returned by [`VisibilityTracker::observe`].
///
/// Dropping it stops observation of the region.
#[derive(Debug)]
pub struct Observation {
    registry: Weak<RefCell<Registry>>,
    key: u64,
}

impl Drop for Observation {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().targets.retain(|t| t.key != self.key);
        }
    }
}

#[derive(Debug)]
pub struct VisibilityTracker {
    threshold: f32,
    registry: Rc<RefCell<Registry>>,
    active: Option<SectionId>,
}

impl VisibilityTracker {
    /// `threshold` is the fraction of a region that must be visible for it
    /// to count as intersecting; it is clamped to `[0, 1]`.
    pub fn new(threshold: f32) -> Self {
        VisibilityTracker {
            threshold: if threshold.is_nan() { 0.0 } else { threshold.clamp(0.0, 1.0) },
            registry: Rc::new(RefCell::new(Registry::default())),
            active: None,
        }
    }

    /// Currently active section, if any region ever crossed the threshold.
    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    /// Number of live registrations.
    pub fn observed_count(&self) -> usize {
        self.registry.borrow().targets.len()
    }

    /// Start observing `region` on behalf of section `id`.
    #[must_use = "dropping the observation immediately stops observing the region"]
    pub fn observe(&self, id: SectionId, region: Extent) -> Observation {
        let mut registry = self.registry.borrow_mut();
        let key = registry.next_key;
        registry.next_key += 1;
        registry.targets.push(Target {
            key,
            id,
            region,
            last: None,
        });
        trace!(section = %id, start = region.start, len = region.len, "observing region");
        Observation {
            registry: Rc::downgrade(&self.registry),
            key,
        }
    }

    fn visible_ratio(region: &Extent, viewport: &Extent) -> f32 {
        if region.len <= 0 {
            return 0.0;
        }
        region.overlap(viewport) as f32 / region.len as f32
    }

    fn is_intersecting(&self, ratio: f32) -> bool {
        if self.threshold == 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        }
    }

    /// Evaluate all registered regions against `viewport` and return the
    /// notifications due, in registration order.
    ///
    /// A region is reported when its intersecting state differs from the
    /// previous evaluation, or unconditionally on its first evaluation.
    pub fn take_records(&self, viewport: Extent) -> Vec<IntersectionEntry> {
        let mut registry = self.registry.borrow_mut();
        let mut batch = Vec::new();
        for target in registry.targets.iter_mut() {
            let ratio = Self::visible_ratio(&target.region, &viewport);
            let intersecting = self.is_intersecting(ratio);
            if target.last != Some(intersecting) {
                target.last = Some(intersecting);
                batch.push(IntersectionEntry {
                    target: target.id,
                    ratio,
                    is_intersecting: intersecting,
                });
            }
        }
        batch
    }

    /// Process a notification batch in delivered order. Each intersecting
    /// entry overwrites the active section; non-intersecting entries leave
    /// it alone. Returns the new active section when its value changed.
    pub fn apply(&mut self, batch: &[IntersectionEntry]) -> Option<SectionId> {
        let before = self.active;
        for entry in batch.iter().filter(|e| e.is_intersecting) {
            trace!(section = %entry.target, ratio = entry.ratio, "section crossed threshold");
            self.active = Some(entry.target);
        }
        if self.active != before {
            debug!(active = ?self.active.map(|s| s.as_str()), "active section changed");
            self.active
        } else {
            None
        }
    }

    /// `take_records` followed by `apply`.
    pub fn update(&mut self, viewport: Extent) -> Option<SectionId> {
        let batch = self.take_records(viewport);
        self.apply(&batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &'static str) -> SectionId {
        SectionId::new(s)
    }

    #[test]
    fn first_evaluation_reports_every_region() {
        let tracker = VisibilityTracker::new(0.6);
        let _a = tracker.observe(id("a"), Extent::new(0, 10));
        let _b = tracker.observe(id("b"), Extent::new(10, 10));
        let batch = tracker.take_records(Extent::new(0, 10));
        assert_eq!(batch.len(), 2);
        assert!(batch[0].is_intersecting);
        assert!(!batch[1].is_intersecting);
        // Nothing crossed since.
        assert!(tracker.take_records(Extent::new(1, 10)).is_empty());
    }

    #[test]
    fn dropping_observation_unregisters() {
        let tracker = VisibilityTracker::new(0.6);
        let obs = tracker.observe(id("a"), Extent::new(0, 10));
        assert_eq!(tracker.observed_count(), 1);
        drop(obs);
        assert_eq!(tracker.observed_count(), 0);
    }

    #[test]
    fn observation_outliving_tracker_is_harmless() {
        let obs = {
            let tracker = VisibilityTracker::new(0.6);
            tracker.observe(id("a"), Extent::new(0, 10))
        };
        drop(obs);
    }

    #[test]
    fn zero_threshold_needs_some_overlap() {
        let mut tracker = VisibilityTracker::new(0.0);
        let _a = tracker.observe(id("a"), Extent::new(0, 10));
        assert_eq!(tracker.update(Extent::new(10, 10)), None);
        assert_eq!(tracker.update(Extent::new(9, 10)), Some(id("a")));
    }
}
