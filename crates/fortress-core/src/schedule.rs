//! Timer primitives shared by every periodic behavior on the page.
//!
//! - [`Subscription`]: owns the cancellation of one repeating timer
//! - [`every`] / [`after`]: the async loops the host spawns
//! - [`Debouncer`]: last-event-wins gate for bursty input (resize)
//! - [`FrameCoalescer`]: at most one handler run per frame (scroll)
//!
//! All of it runs on the host's single UI thread; nothing here needs `Send`.

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Handle to a running timer.
///
/// Dropping the subscription cancels the timer, so teardown of whatever owns
/// it is deterministic.
#[derive(Debug)]
pub struct Subscription {
    name: &'static str,
    token: CancellationToken,
}

impl Subscription {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            token: CancellationToken::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Token to hand to the spawned loop.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Stop the timer. Safe to call any number of times.
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!(timer = self.name, "Cancelling timer");
            self.token.cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Run `f` every `period` until `token` is cancelled.
///
/// The first call happens one full period after start, like a browser
/// interval. Late ticks are delayed rather than bunched up.
pub async fn every<F>(period: Duration, token: CancellationToken, mut f: F)
where
    F: FnMut(),
{
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = interval.tick() => f(),
        }
    }
}

/// Sleep for `delay`; returns `false` if cancelled first.
pub async fn after(delay: Duration, token: &CancellationToken) -> bool {
    tokio::select! {
        biased;
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(delay) => true,
    }
}

/// Last-event-wins gate.
///
/// Every trigger supersedes the ones before it. The host sleeps for the quiet
/// period and only acts if its ticket is still current.
#[derive(Debug, Default, Clone)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new event, invalidating any pending one.
    pub fn trigger(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

/// Coalesces bursts of values so a handler runs at most once per frame.
///
/// [`push`](Self::push) tells the caller whether a frame needs scheduling;
/// [`take`](Self::take) hands the frame the most recent value.
#[derive(Debug, Clone)]
pub struct FrameCoalescer<T> {
    latest: Option<T>,
    frame_pending: bool,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self {
            latest: None,
            frame_pending: false,
        }
    }
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value. Returns `true` when no frame is pending yet.
    pub fn push(&mut self, value: T) -> bool {
        self.latest = Some(value);
        if self.frame_pending {
            false
        } else {
            self.frame_pending = true;
            true
        }
    }

    /// Consume the latest value at frame time.
    pub fn take(&mut self) -> Option<T> {
        self.frame_pending = false;
        self.latest.take()
    }

    pub fn is_pending(&self) -> bool {
        self.frame_pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_cancel_is_idempotent() {
        let sub = Subscription::new("clock");
        let token = sub.token();
        sub.cancel();
        sub.cancel();
        assert!(sub.is_cancelled());
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_subscription_drop_cancels() {
        let token = {
            let sub = Subscription::new("metrics");
            sub.token()
        };
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_debouncer_last_wins() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.trigger();
        let second = debouncer.trigger();
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }

    #[test]
    fn test_frame_coalescer() {
        let mut frames = FrameCoalescer::new();
        assert!(frames.push(10.0));
        assert!(!frames.push(20.0));
        assert!(!frames.push(30.0));
        assert!(frames.is_pending());

        assert_eq!(frames.take(), Some(30.0));
        assert!(!frames.is_pending());
        assert_eq!(frames.take(), None);

        assert!(frames.push(40.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_after_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        assert!(!after(Duration::from_secs(5), &token).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_after_elapses() {
        let token = CancellationToken::new();
        let start = Instant::now();
        assert!(after(Duration::from_millis(250), &token).await);
        assert_eq!(start.elapsed(), Duration::from_millis(250));
    }
}
