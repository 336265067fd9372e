//! Scroll-driven section reveal.
//!
//! Each page section is observed until the first time enough of it is inside
//! the viewport. At that point it is marked revealed, observation is dropped
//! for good, and, when it carries a group of items, a [`StaggerPlan`] is
//! handed back for the host to play.
//!
//! ## Geometry
//!
//! ```text
//!   0 ┌──────────────┐  viewport top
//!     │              │
//!     │   ┌──────┐   │  section.top
//!     │   │//////│   │  visible part
//!  vh-m ─ ─ ─ ─ ─ ─ ─   inset viewport bottom (bottom_margin = m)
//!     │   │      │   │
//!  vh └───┼──────┼───┘
//!         └──────┘      section.top + section.height
//! ```
//!
//! The visible ratio is the visible part over the section height. A section
//! reveals once the ratio reaches the configured threshold.

use std::collections::HashMap;
use std::fmt;

use crate::config::RevealConfig;
use crate::stagger::{GroupKind, StaggerPlan};

/// Identifier of a page section (its element id).
#[derive(Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A section as the page declares it.
#[derive(Clone, PartialEq, Debug)]
pub struct Section {
    pub id: SectionId,
    /// Grouped children and how many there are
    pub group: Option<(GroupKind, usize)>,
}

impl Section {
    pub fn plain(id: impl Into<String>) -> Self {
        Self {
            id: SectionId::new(id),
            group: None,
        }
    }

    pub fn grouped(id: impl Into<String>, kind: GroupKind, items: usize) -> Self {
        Self {
            id: SectionId::new(id),
            group: Some((kind, items)),
        }
    }
}

/// Position of a section relative to the viewport top, in CSS pixels.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionGeometry {
    pub top: f64,
    pub height: f64,
}

impl SectionGeometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Fraction of the section inside `[0, viewport_height - bottom_margin]`.
    pub fn visible_ratio(&self, viewport_height: f64, bottom_margin: f64) -> f64 {
        let root_bottom = viewport_height - bottom_margin;
        if root_bottom <= 0.0 {
            return 0.0;
        }

        if self.height <= 0.0 {
            return if (0.0..=root_bottom).contains(&self.top) { 1.0 } else { 0.0 };
        }

        let visible = (self.top + self.height).min(root_bottom) - self.top.max(0.0);
        (visible.max(0.0) / self.height).min(1.0)
    }
}

/// What happened when a section revealed.
#[derive(Clone, PartialEq, Debug)]
pub struct RevealOutcome {
    pub id: SectionId,
    /// Staggered entrance for the section's items, if it has any
    pub stagger: Option<StaggerPlan>,
}

#[derive(Debug)]
struct Tracked {
    group: Option<(GroupKind, usize)>,
    observing: bool,
    revealed: bool,
}

/// One-shot reveal tracker for a fixed set of sections.
#[derive(Debug)]
pub struct RevealController {
    config: RevealConfig,
    sections: HashMap<SectionId, Tracked>,
    order: Vec<SectionId>,
}

impl RevealController {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            sections: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Start observing sections. Sections seen before are left alone.
    ///
    /// Returns how many sections were newly attached.
    pub fn attach(&mut self, sections: impl IntoIterator<Item = Section>) -> usize {
        let mut attached = 0;
        for section in sections {
            if self.sections.contains_key(&section.id) {
                continue;
            }
            self.order.push(section.id.clone());
            self.sections.insert(
                section.id,
                Tracked {
                    group: section.group,
                    observing: true,
                    revealed: false,
                },
            );
            attached += 1;
        }
        if attached > 0 {
            tracing::debug!(attached, total = self.order.len(), "Observing sections");
        }
        attached
    }

    /// Sections still waiting to reveal, in page order.
    pub fn observed(&self) -> impl Iterator<Item = &SectionId> {
        self.order
            .iter()
            .filter(|id| self.sections.get(*id).is_some_and(|s| s.observing))
    }

    pub fn is_observing(&self, id: &SectionId) -> bool {
        self.sections.get(id).is_some_and(|s| s.observing)
    }

    pub fn is_revealed(&self, id: &SectionId) -> bool {
        self.sections.get(id).is_some_and(|s| s.revealed)
    }

    pub fn revealed_count(&self) -> usize {
        self.sections.values().filter(|s| s.revealed).count()
    }

    /// Whether `geometry` counts as intersecting under the configured
    /// threshold and margin.
    pub fn is_intersecting(&self, geometry: SectionGeometry, viewport_height: f64) -> bool {
        let ratio = geometry.visible_ratio(viewport_height, self.config.bottom_margin);
        ratio > 0.0 && ratio >= self.config.threshold
    }

    /// Feed one intersection signal.
    ///
    /// Returns an outcome the first time the section crosses the threshold.
    /// Unknown sections and sections no longer observed yield `None`.
    pub fn observe(
        &mut self,
        id: &SectionId,
        geometry: SectionGeometry,
        viewport_height: f64,
    ) -> Option<RevealOutcome> {
        let intersecting = self.is_intersecting(geometry, viewport_height);
        let section = self.sections.get_mut(id)?;
        if !section.observing || !intersecting {
            return None;
        }

        section.revealed = true;
        section.observing = false;

        let stagger = section
            .group
            .map(|(kind, len)| StaggerPlan::new(kind, len, &self.config));

        tracing::debug!(section = %id, staggered = stagger.is_some(), "Section revealed");

        Some(RevealOutcome {
            id: id.clone(),
            stagger,
        })
    }

    /// Feed a batch of signals, e.g. one per observed section after a scroll.
    pub fn observe_all<I>(&mut self, signals: I, viewport_height: f64) -> Vec<RevealOutcome>
    where
        I: IntoIterator<Item = (SectionId, SectionGeometry)>,
    {
        signals
            .into_iter()
            .filter_map(|(id, geometry)| self.observe(&id, geometry, viewport_height))
            .collect()
    }

    /// Stop observing everything (page teardown).
    pub fn detach_all(&mut self) {
        for section in self.sections.values_mut() {
            section.observing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    fn controller() -> RevealController {
        let mut reveal = RevealController::new(RevealConfig::default());
        reveal.attach([
            Section::plain("hero"),
            Section::grouped("stats", GroupKind::StatBoxes, 4),
            Section::grouped("features", GroupKind::FeatureCards, 6),
        ]);
        reveal
    }

    #[test]
    fn test_visible_ratio() {
        // Fully inside the inset viewport (0..700)
        assert_eq!(SectionGeometry::new(100.0, 400.0).visible_ratio(VIEWPORT, 100.0), 1.0);
        // Below the inset bottom edge
        assert_eq!(SectionGeometry::new(750.0, 400.0).visible_ratio(VIEWPORT, 100.0), 0.0);
        // Half above the top
        assert_eq!(SectionGeometry::new(-200.0, 400.0).visible_ratio(VIEWPORT, 100.0), 0.5);
        // 100 of 400 px visible
        assert_eq!(SectionGeometry::new(600.0, 400.0).visible_ratio(VIEWPORT, 100.0), 0.25);
    }

    #[test]
    fn test_zero_height_section() {
        assert_eq!(SectionGeometry::new(10.0, 0.0).visible_ratio(VIEWPORT, 100.0), 1.0);
        assert_eq!(SectionGeometry::new(750.0, 0.0).visible_ratio(VIEWPORT, 100.0), 0.0);
    }

    #[test]
    fn test_margin_swallows_viewport() {
        assert_eq!(SectionGeometry::new(0.0, 50.0).visible_ratio(80.0, 100.0), 0.0);
    }

    #[test]
    fn test_reveal_below_threshold() {
        let mut reveal = controller();
        let id = SectionId::from("hero");
        // 40 of 400 px = 10%
        assert!(reveal.observe(&id, SectionGeometry::new(660.0, 400.0), VIEWPORT).is_none());
        assert!(!reveal.is_revealed(&id));
        assert!(reveal.is_observing(&id));
    }

    #[test]
    fn test_reveal_once() {
        let mut reveal = controller();
        let id = SectionId::from("hero");
        let geometry = SectionGeometry::new(100.0, 300.0);

        let outcome = reveal.observe(&id, geometry, VIEWPORT).unwrap();
        assert_eq!(outcome.id, id);
        assert!(outcome.stagger.is_none());
        assert!(reveal.is_revealed(&id));
        assert!(!reveal.is_observing(&id));

        assert!(reveal.observe(&id, geometry, VIEWPORT).is_none());
        assert_eq!(reveal.revealed_count(), 1);
    }

    #[test]
    fn test_grouped_section_gets_plan() {
        let mut reveal = controller();
        let outcome = reveal
            .observe(&"stats".into(), SectionGeometry::new(0.0, 200.0), VIEWPORT)
            .unwrap();
        let plan = outcome.stagger.unwrap();
        assert_eq!(plan.kind, GroupKind::StatBoxes);
        assert_eq!(plan.len, 4);
    }

    #[test]
    fn test_attach_is_idempotent() {
        let mut reveal = controller();
        reveal.observe(&"hero".into(), SectionGeometry::new(0.0, 100.0), VIEWPORT);

        assert_eq!(reveal.attach([Section::plain("hero"), Section::plain("footer")]), 1);
        assert!(!reveal.is_observing(&"hero".into()));
        assert!(reveal.is_revealed(&"hero".into()));

        let observed: Vec<_> = reveal.observed().map(|id| id.as_str().to_string()).collect();
        assert_eq!(observed, vec!["stats", "features", "footer"]);
    }

    #[test]
    fn test_unknown_section() {
        let mut reveal = controller();
        assert!(reveal
            .observe(&"nope".into(), SectionGeometry::new(0.0, 100.0), VIEWPORT)
            .is_none());
    }

    #[test]
    fn test_observe_all_and_detach() {
        let mut reveal = controller();
        let outcomes = reveal.observe_all(
            [
                ("hero".into(), SectionGeometry::new(0.0, 500.0)),
                ("stats".into(), SectionGeometry::new(900.0, 300.0)),
            ],
            VIEWPORT,
        );
        assert_eq!(outcomes.len(), 1);

        reveal.detach_all();
        assert_eq!(reveal.observed().count(), 0);
        assert!(reveal
            .observe(&"stats".into(), SectionGeometry::new(0.0, 300.0), VIEWPORT)
            .is_none());
    }
}
