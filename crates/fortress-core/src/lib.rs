//! HP Fortress Core Library
//!
//! Interaction logic behind the HP Fortress dashboard page.
//!
//! ## Overview
//!
//! The dashboard is a showcase page for a home server. Everything that makes
//! it feel alive lives here, independent of the rendering host:
//!
//! - **Reveal**: sections fade in the first time they scroll into view, and
//!   grouped children (stat boxes, cards) enter with a staggered wave
//! - **Metrics**: synthetic CPU/RAM/Storage gauges jitter around baselines
//! - **Chrome**: header scroll state, mobile menu, smooth anchor scrolling
//! - **Extras**: server LED flicker, wall clock, clipboard feedback, konami code
//! - **Page**: delayed transitions (resize settling, fortress mode expiry,
//!   service restarts) driven through a [`PageHandle`]
//!
//! The host (the `fortress` desktop app) owns the window and the markup; it
//! feeds geometry, key presses and clicks into these types and renders what
//! they return.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fortress_core::{FortressConfig, MetricsSimulator};
//!
//! let config = FortressConfig::default();
//! let mut metrics = MetricsSimulator::with_default_gauges(&config.metrics);
//!
//! for reading in metrics.tick() {
//!     println!("{}: {}", reading.name, reading.label);
//! }
//! ```

pub mod clock;
pub mod config;
pub mod copy;
pub mod easter_egg;
pub mod error;
pub mod header;
pub mod links;
pub mod logging;
pub mod menu;
pub mod metrics;
pub mod page;
pub mod reveal;
pub mod schedule;
pub mod scroll;
pub mod server_status;
pub mod stagger;
pub mod state;

// Re-exports
pub use clock::format_clock;
pub use config::FortressConfig;
pub use copy::{ClipboardSink, CopyFeedback};
pub use easter_egg::{EasterEgg, KonamiTracker};
pub use error::{FortressError, FortressResult};
pub use header::HeaderTracker;
pub use menu::{MenuState, MobileMenu};
pub use metrics::{FixedJitter, Gauge, GaugeReading, JitterSource, MetricsSimulator, RandomJitter};
pub use page::{InputGates, PageHandle};
pub use reveal::{RevealController, RevealOutcome, Section, SectionGeometry, SectionId};
pub use schedule::{Debouncer, FrameCoalescer, Subscription};
pub use scroll::Location;
pub use server_status::{ServerStatusSimulator, ServerUnit};
pub use stagger::{GroupKind, ItemPhase, StaggerPlan};
pub use state::{AppState, KeyOutcome};
