//! Property-based tests for the page state machines
//!
//! Uses proptest to verify the invariants the dashboard relies on: gauge
//! bounds, one-shot reveals, stagger ordering and menu transitions.

use proptest::prelude::*;

use fortress_core::config::{MenuConfig, MetricsConfig, RevealConfig};
use fortress_core::menu::MenuState;
use fortress_core::metrics::{Gauge, JitterSource, MetricsSimulator, RandomJitter};
use fortress_core::{GroupKind, MobileMenu, RevealController, Section, SectionGeometry, StaggerPlan};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Jitter that replays a scripted list, including values far outside the
/// usual window, to prove clamping rather than the RNG keeps gauges in range.
struct ScriptedJitter {
    values: Vec<f64>,
    next: usize,
}

impl JitterSource for ScriptedJitter {
    fn jitter(&mut self, _amplitude: f64) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

fn geometry_strategy() -> impl Strategy<Value = SectionGeometry> {
    (-2000.0..3000.0f64, 0.0..1500.0f64).prop_map(|(top, height)| SectionGeometry::new(top, height))
}

/// Inputs the mobile menu reacts to
#[derive(Debug, Clone)]
enum MenuInput {
    Toggle,
    NavLink,
    Key(&'static str),
    Resize(f64),
}

fn menu_input_strategy() -> impl Strategy<Value = MenuInput> {
    prop_oneof![
        3 => Just(MenuInput::Toggle),
        1 => Just(MenuInput::NavLink),
        1 => prop_oneof![Just("Escape"), Just("Enter"), Just("a")].prop_map(MenuInput::Key),
        1 => (320.0..1920.0f64).prop_map(MenuInput::Resize),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every gauge stays inside [20, 95] for any baseline and any jitter
    #[test]
    fn gauges_stay_in_bounds(
        baselines in prop::collection::vec(0.0..120.0f64, 1..6),
        jitters in prop::collection::vec(-50.0..50.0f64, 1..32),
        ticks in 1usize..40,
    ) {
        let gauges = baselines.iter().enumerate()
            .map(|(i, b)| Gauge::new(format!("g{i}"), *b))
            .collect();
        let mut sim = MetricsSimulator::new(
            gauges,
            ScriptedJitter { values: jitters, next: 0 },
            MetricsConfig::default(),
        );

        for _ in 0..ticks {
            for reading in sim.tick() {
                prop_assert!((20.0..=95.0).contains(&reading.value), "value {}", reading.value);
            }
        }
    }

    /// Random jitter stays within ±5 of the baseline before clamping
    #[test]
    fn random_jitter_is_bounded(seed in any::<u64>(), baseline in 25.0..90.0f64) {
        let mut sim = MetricsSimulator::new(
            vec![Gauge::new("cpu", baseline)],
            RandomJitter::seeded(seed),
            MetricsConfig::default(),
        );
        for _ in 0..20 {
            let value = sim.tick()[0].value;
            prop_assert!((value - baseline).abs() <= 5.0);
        }
    }

    /// A section reveals at most once, whatever signals follow
    #[test]
    fn reveal_is_one_shot(
        signals in prop::collection::vec(geometry_strategy(), 1..50),
        viewport in 200.0..1400.0f64,
    ) {
        let mut reveal = RevealController::new(RevealConfig::default());
        reveal.attach([Section::grouped("stats", GroupKind::StatBoxes, 4)]);
        let id = "stats".into();

        let mut outcomes = 0;
        let mut was_revealed = false;
        for geometry in signals {
            if reveal.observe(&id, geometry, viewport).is_some() {
                outcomes += 1;
            }
            let revealed = reveal.is_revealed(&id);
            prop_assert!(!was_revealed || revealed, "revealed flag was cleared");
            was_revealed = revealed;
        }
        prop_assert!(outcomes <= 1);
        prop_assert_eq!(outcomes == 1, was_revealed);
    }

    /// Item i starts in [i*d, (i+1)*d) and order is preserved
    #[test]
    fn stagger_preserves_order(len in 0usize..40, stat_boxes in any::<bool>()) {
        let kind = if stat_boxes { GroupKind::StatBoxes } else { GroupKind::FeatureCards };
        let plan = StaggerPlan::new(kind, len, &RevealConfig::default());

        for i in 0..len {
            let start = plan.item_start(i);
            prop_assert!(start >= plan.delay * i as u32);
            prop_assert!(start < plan.delay * (i as u32 + 1));
            prop_assert!(plan.item_commit(i) > start);
        }

        let events = plan.events();
        prop_assert_eq!(events.len(), len * 2);
        prop_assert!(events.windows(2).all(|w| w[0].at <= w[1].at));
    }

    /// The menu always matches a simple reference model
    #[test]
    fn menu_matches_model(inputs in prop::collection::vec(menu_input_strategy(), 0..60)) {
        let mut menu = MobileMenu::new(MenuConfig::default());
        let mut open = false;

        for input in inputs {
            match input {
                MenuInput::Toggle => {
                    menu.toggle();
                    open = !open;
                }
                MenuInput::NavLink => {
                    menu.on_nav_link();
                    open = false;
                }
                MenuInput::Key(key) => {
                    menu.on_key(key);
                    if key == "Escape" {
                        open = false;
                    }
                }
                MenuInput::Resize(width) => {
                    menu.on_resize(width);
                    if width > 768.0 {
                        open = false;
                    }
                }
            }
            let expected = if open { MenuState::Open } else { MenuState::Closed };
            prop_assert_eq!(menu.state(), expected);
        }
    }
}
