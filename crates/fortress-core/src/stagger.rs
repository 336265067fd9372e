//! Staggered entrance animation for grouped items.
//!
//! When a section with a group reveals, item `i` of the group starts its
//! entrance at `i × delay`. Each entrance is two-phase: the item snaps to a
//! pre state (transparent, pushed down) and, after a short pause, flips to
//! its revealed state. The pause lets the engine see two distinct styles so
//! the CSS transition actually runs.
//!
//! ```text
//! t=0     item0 Pre
//! t=50    item0 Revealed
//! t=100   item1 Pre
//! t=150   item1 Revealed
//! ...
//! ```

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::config::RevealConfig;

const ITEM_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Kind of grouped children a section can carry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GroupKind {
    /// Compact stat boxes in the stats section
    StatBoxes,
    /// Feature cards
    FeatureCards,
    /// Architecture cards
    ArchitectureCards,
    /// Challenge entries
    Challenges,
}

impl GroupKind {
    /// Per-item start delay for this kind of group.
    pub fn delay(&self, config: &RevealConfig) -> Duration {
        match self {
            GroupKind::StatBoxes => Duration::from_millis(config.stat_box_delay_ms),
            _ => Duration::from_millis(config.card_delay_ms),
        }
    }

    /// Vertical offset (px) items start from.
    pub fn rise_px(&self) -> u32 {
        match self {
            GroupKind::StatBoxes => 20,
            _ => 30,
        }
    }

    /// CSS class carried by every item in the group.
    pub fn item_class(&self) -> &'static str {
        match self {
            GroupKind::StatBoxes => "stat-box",
            GroupKind::FeatureCards => "feature-card",
            GroupKind::ArchitectureCards => "arch-card-modern",
            GroupKind::Challenges => "challenge-item",
        }
    }
}

/// Where one item is in its entrance.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ItemPhase {
    /// Untouched; inherits whatever the section shows
    #[default]
    Hidden,
    /// Snapped to the start of the transition
    Pre,
    /// Transitioning to (or at) its final position
    Revealed,
}

impl ItemPhase {
    /// Inline style for an item of `kind` in this phase.
    pub fn inline_style(&self, kind: GroupKind) -> String {
        match self {
            ItemPhase::Hidden => String::new(),
            ItemPhase::Pre => format!(
                "opacity: 0; transform: translateY({}px); transition: {ITEM_TRANSITION};",
                kind.rise_px()
            ),
            ItemPhase::Revealed => {
                format!("opacity: 1; transform: translateY(0); transition: {ITEM_TRANSITION};")
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, ItemPhase::Revealed)
    }
}

/// One phase change at an offset from the group reveal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StaggerEvent {
    pub at: Duration,
    pub index: usize,
    pub phase: ItemPhase,
}

/// Timeline for one group of `len` items.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StaggerPlan {
    pub kind: GroupKind,
    pub len: usize,
    pub delay: Duration,
    pub pause: Duration,
}

impl StaggerPlan {
    pub fn new(kind: GroupKind, len: usize, config: &RevealConfig) -> Self {
        Self {
            kind,
            len,
            delay: kind.delay(config),
            pause: Duration::from_millis(config.commit_pause_ms),
        }
    }

    /// When item `index` enters its pre state.
    pub fn item_start(&self, index: usize) -> Duration {
        self.delay * index as u32
    }

    /// When item `index` flips to revealed.
    pub fn item_commit(&self, index: usize) -> Duration {
        self.item_start(index) + self.pause
    }

    /// Every phase change, in time order.
    ///
    /// Ties keep index order, and an item's pre state always precedes its
    /// own commit even with a zero pause.
    pub fn events(&self) -> Vec<StaggerEvent> {
        let mut events: Vec<StaggerEvent> = (0..self.len)
            .flat_map(|index| {
                [
                    StaggerEvent {
                        at: self.item_start(index),
                        index,
                        phase: ItemPhase::Pre,
                    },
                    StaggerEvent {
                        at: self.item_commit(index),
                        index,
                        phase: ItemPhase::Revealed,
                    },
                ]
            })
            .collect();
        events.sort_by_key(|event| event.at);
        events
    }

    /// Time from reveal until the last item commits.
    pub fn total(&self) -> Duration {
        match self.len {
            0 => Duration::ZERO,
            n => self.item_commit(n - 1),
        }
    }

    /// Play the plan in real (tokio) time, reporting each phase change.
    ///
    /// Stops early if `token` is cancelled. Returns the number of events
    /// delivered.
    pub async fn play<F>(&self, token: &CancellationToken, mut apply: F) -> usize
    where
        F: FnMut(usize, ItemPhase),
    {
        let origin = Instant::now();
        let mut delivered = 0;

        for event in self.events() {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!(kind = ?self.kind, delivered, "Stagger cancelled");
                    return delivered;
                }
                _ = tokio::time::sleep_until(origin + event.at) => {
                    apply(event.index, event.phase);
                    delivered += 1;
                }
            }
        }

        delivered
    }
}
