//! Page-wide state, owned in one place.
//!
//! The host builds one [`AppState`] at startup, hands it to its components
//! and calls [`AppState::teardown`] when the page goes away. Timers register
//! through [`AppState::subscribe`] so teardown can cancel all of them.

use tokio_util::sync::CancellationToken;

use crate::config::FortressConfig;
use crate::easter_egg::{EasterEgg, KonamiTracker};
use crate::header::HeaderTracker;
use crate::menu::MobileMenu;
use crate::metrics::{default_gauges, MetricsSimulator, RandomJitter};
use crate::reveal::{RevealController, Section};
use crate::schedule::Subscription;
use crate::scroll::Location;
use crate::server_status::{ServerStatusSimulator, ServerUnit};

/// What a key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    pub menu_closed: bool,
    pub easter_egg: bool,
}

pub struct AppState {
    pub config: FortressConfig,
    pub header: HeaderTracker,
    pub menu: MobileMenu,
    pub reveal: RevealController,
    pub metrics: MetricsSimulator,
    pub servers: ServerStatusSimulator,
    pub konami: KonamiTracker,
    pub easter_egg: EasterEgg,
    pub location: Location,
    subscriptions: Vec<Subscription>,
}

impl AppState {
    /// Build the state. A `seed` makes every random sequence reproducible.
    pub fn new(config: FortressConfig, units: Vec<ServerUnit>, seed: Option<u64>) -> Self {
        let jitter = match seed {
            Some(seed) => RandomJitter::seeded(seed),
            None => RandomJitter::from_os_rng(),
        };
        let servers = match seed {
            Some(seed) => {
                ServerStatusSimulator::seeded(units, config.server_status.clone(), seed ^ 0x5eed)
            }
            None => ServerStatusSimulator::new(units, config.server_status.clone()),
        };

        Self {
            header: HeaderTracker::new(config.header.clone()),
            menu: MobileMenu::new(config.menu.clone()),
            reveal: RevealController::new(config.reveal.clone()),
            metrics: MetricsSimulator::new(default_gauges(), jitter, config.metrics.clone()),
            servers,
            konami: KonamiTracker::new(),
            easter_egg: EasterEgg::new(),
            location: Location::new(),
            subscriptions: Vec::new(),
            config,
        }
    }

    /// Start observing the page sections.
    pub fn attach_sections(&mut self, sections: impl IntoIterator<Item = Section>) -> usize {
        self.reveal.attach(sections)
    }

    /// Register a named timer and get the token its loop should watch.
    ///
    /// One-shot timers cancel their own token when done; those are dropped
    /// here so the registry only holds live timers.
    pub fn subscribe(&mut self, name: &'static str) -> CancellationToken {
        self.subscriptions.retain(|s| !s.is_cancelled());
        let subscription = Subscription::new(name);
        let token = subscription.token();
        self.subscriptions.push(subscription);
        token
    }

    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.iter().filter(|s| !s.is_cancelled()).count()
    }

    /// Route a key press to the menu and the konami tracker.
    pub fn on_key(&mut self, key: &str) -> KeyOutcome {
        let menu_closed = self.menu.on_key(key);
        let easter_egg = self.konami.feed(key) && self.easter_egg.activate();
        KeyOutcome {
            menu_closed,
            easter_egg,
        }
    }

    /// Cancel every timer and stop observing. Safe to call more than once.
    pub fn teardown(&mut self) {
        let count = self.subscriptions.len();
        for subscription in self.subscriptions.drain(..) {
            subscription.cancel();
        }
        self.metrics.stop();
        self.reveal.detach_all();
        tracing::debug!(timers = count, "Page state torn down");
    }
}
