//! Synthetic dashboard gauges.
//!
//! There is no real backend behind the CPU/RAM/Storage bars. Every tick each
//! gauge is recomputed from its fixed baseline plus an independent uniform
//! jitter, then clamped into the display range:
//!
//! ```text
//! next = clamp(baseline + U[-5, 5), 20, 95)
//! ```
//!
//! There is no memory between ticks, so the bars twitch rather than drift.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio_util::sync::CancellationToken;

use crate::config::MetricsConfig;
use crate::schedule::Subscription;

/// Baselines shown on the hero dashboard.
pub const DEFAULT_GAUGES: [(&str, f64); 3] = [("CPU", 42.0), ("RAM", 68.0), ("Storage", 55.0)];

/// Source of per-tick perturbation.
pub trait JitterSource {
    /// A value in `[-amplitude, amplitude)`.
    fn jitter(&mut self, amplitude: f64) -> f64;
}

/// Uniform jitter from a seedable RNG.
#[derive(Debug, Clone)]
pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence, handy for demos and screenshots.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl JitterSource for RandomJitter {
    fn jitter(&mut self, amplitude: f64) -> f64 {
        if amplitude <= 0.0 {
            return 0.0;
        }
        self.rng.random_range(-amplitude..amplitude)
    }
}

/// Always returns the same offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn jitter(&mut self, _amplitude: f64) -> f64 {
        self.0
    }
}

/// One synthetic indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    pub name: String,
    pub baseline: f64,
    pub current: f64,
}

impl Gauge {
    pub fn new(name: impl Into<String>, baseline: f64) -> Self {
        Self {
            name: name.into(),
            baseline,
            current: baseline,
        }
    }

    pub fn reading(&self) -> GaugeReading {
        GaugeReading::new(&self.name, self.current)
    }
}

/// What the display shows for a gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeReading {
    pub name: String,
    pub value: f64,
    /// Bar fill width, e.g. `"44.72%"`
    pub width: String,
    /// Rounded label, e.g. `"45%"`
    pub label: String,
}

impl GaugeReading {
    fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
            width: format!("{value:.2}%"),
            label: format!("{}%", value.round() as i64),
        }
    }
}

/// Periodic recomputation of a set of gauges.
pub struct MetricsSimulator<J = RandomJitter> {
    gauges: Vec<Gauge>,
    jitter: J,
    config: MetricsConfig,
    ticks: u64,
    subscription: Option<Subscription>,
}

impl MetricsSimulator<RandomJitter> {
    /// CPU/RAM/Storage at their usual baselines.
    pub fn with_default_gauges(config: &MetricsConfig) -> Self {
        Self::new(default_gauges(), RandomJitter::default(), config.clone())
    }
}

impl<J: JitterSource> MetricsSimulator<J> {
    pub fn new(gauges: Vec<Gauge>, jitter: J, config: MetricsConfig) -> Self {
        Self {
            gauges,
            jitter,
            config,
            ticks: 0,
            subscription: None,
        }
    }

    pub fn gauges(&self) -> &[Gauge] {
        &self.gauges
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current values without advancing.
    pub fn readings(&self) -> Vec<GaugeReading> {
        self.gauges.iter().map(Gauge::reading).collect()
    }

    /// Recompute every gauge once.
    pub fn tick(&mut self) -> Vec<GaugeReading> {
        let MetricsConfig {
            jitter,
            floor,
            ceiling,
            ..
        } = self.config;

        for gauge in &mut self.gauges {
            let offset = self.jitter.jitter(jitter);
            gauge.current = (gauge.baseline + offset).clamp(floor, ceiling);
        }
        self.ticks += 1;

        tracing::trace!(tick = self.ticks, "Metrics tick");
        self.readings()
    }

    /// Begin ticking.
    ///
    /// Returns the token the host's timer loop should watch, or `None` when
    /// already running.
    pub fn start(&mut self) -> Option<CancellationToken> {
        if self.is_running() {
            return None;
        }
        let subscription = Subscription::new("metrics");
        let token = subscription.token();
        self.subscription = Some(subscription);
        tracing::debug!(period_ms = self.config.period_ms, "Metrics simulator started");
        Some(token)
    }

    /// Stop ticking. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
            tracing::debug!(ticks = self.ticks, "Metrics simulator stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(|subscription| !subscription.is_cancelled())
    }
}

/// Fresh CPU/RAM/Storage gauges.
pub fn default_gauges() -> Vec<Gauge> {
    DEFAULT_GAUGES
        .iter()
        .map(|(name, baseline)| Gauge::new(*name, *baseline))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(offset: f64) -> MetricsSimulator<FixedJitter> {
        MetricsSimulator::new(default_gauges(), FixedJitter(offset), MetricsConfig::default())
    }

    #[test]
    fn test_fixed_jitter_label() {
        let mut sim = fixed(3.0);
        let readings = sim.tick();
        assert_eq!(readings[0].name, "CPU");
        assert_eq!(readings[0].label, "45%");
        assert_eq!(readings[0].width, "45.00%");
        assert_eq!(readings[1].label, "71%");
        assert_eq!(readings[2].label, "58%");
    }

    #[test]
    fn test_clamped_to_bounds() {
        let mut low = MetricsSimulator::new(
            vec![Gauge::new("cold", 21.0)],
            FixedJitter(-5.0),
            MetricsConfig::default(),
        );
        assert_eq!(low.tick()[0].value, 20.0);

        let mut high = MetricsSimulator::new(
            vec![Gauge::new("hot", 93.0)],
            FixedJitter(4.9),
            MetricsConfig::default(),
        );
        assert_eq!(high.tick()[0].value, 95.0);
    }

    #[test]
    fn test_no_memory_between_ticks() {
        let mut sim = fixed(3.0);
        sim.tick();
        sim.tick();
        assert_eq!(sim.gauges()[0].current, 45.0);
        assert_eq!(sim.ticks(), 2);
    }

    #[test]
    fn test_random_jitter_range() {
        let mut jitter = RandomJitter::seeded(7);
        for _ in 0..1000 {
            let value = jitter.jitter(5.0);
            assert!((-5.0..5.0).contains(&value));
        }
        assert_eq!(jitter.jitter(0.0), 0.0);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomJitter::seeded(42);
        let mut b = RandomJitter::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.jitter(5.0), b.jitter(5.0));
        }
    }

    #[test]
    fn test_start_stop() {
        let mut sim = fixed(0.0);
        assert!(!sim.is_running());

        let token = sim.start().unwrap();
        assert!(sim.is_running());
        assert!(sim.start().is_none());

        sim.stop();
        assert!(token.is_cancelled());
        assert!(!sim.is_running());
        sim.stop();

        assert!(sim.start().is_some());
    }

    #[test]
    fn test_initial_readings_are_baselines() {
        let sim = MetricsSimulator::with_default_gauges(&MetricsConfig::default());
        let labels: Vec<_> = sim.readings().into_iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["42%", "68%", "55%"]);
    }
}
