//! Delayed page transitions.
//!
//! Resize settling, fortress mode expiry and service restarts all follow the
//! same shape: record something now, wait on the tokio clock, then apply a
//! change to [`AppState`] if nothing superseded it. The host reaches its
//! state through a [`PageHandle`], so these run unchanged in the desktop app
//! and on a paused test clock.
//!
//! [`InputGates`] is kept apart from [`AppState`] on purpose: it changes on
//! every raw scroll and resize event, and the host stores it somewhere that
//! does not trigger a re-render.

use tokio_util::sync::CancellationToken;

use crate::schedule::{self, Debouncer, FrameCoalescer};
use crate::state::AppState;

/// Per-event bookkeeping that never affects what is rendered.
#[derive(Debug, Default)]
pub struct InputGates {
    pub scroll_frames: FrameCoalescer<()>,
    pub resize: Debouncer,
}

impl InputGates {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Access to the page state and input gates from spawned tasks.
///
/// Implementations must not hold a borrow across an `.await`; every method
/// runs its closure to completion.
pub trait PageHandle {
    /// Read the state without marking anything for re-render.
    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;

    fn update_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R;

    fn with_gates<R>(&self, f: impl FnOnce(&mut InputGates) -> R) -> R;
}

/// Handle one resize event.
///
/// Waits out the quiet period and applies `width` to the menu only if no
/// newer resize arrived meanwhile. Returns whether the menu was reset.
pub async fn settle_resize<P: PageHandle>(page: &P, width: f64) -> bool {
    let ticket = page.with_gates(|gates| gates.resize.trigger());
    let quiet = page.with_state(|state| state.config.timing.resize_debounce());

    tokio::time::sleep(quiet).await;

    if !page.with_gates(|gates| gates.resize.is_current(ticket)) {
        return false;
    }
    if !page.with_state(|state| state.menu.is_open()) {
        return false;
    }
    let reset = page.update_state(|state| state.menu.on_resize(width));
    if reset {
        tracing::debug!(width, "Mobile menu reset for desktop");
    }
    reset
}

/// Route a key press; when it completes the konami code, run fortress mode
/// until it expires.
///
/// Returns whether fortress mode ran to completion.
pub async fn press_key<P: PageHandle>(page: &P, key: &str) -> bool {
    let outcome = page.update_state(|state| state.on_key(key));
    if !outcome.easter_egg {
        return false;
    }
    run_fortress_mode(page).await
}

/// Keep fortress mode on for its configured duration, then turn it off.
///
/// Teardown cancels the wait and leaves the state alone.
pub async fn run_fortress_mode<P: PageHandle>(page: &P) -> bool {
    let (duration, token) = page.update_state(|state| {
        (
            state.config.timing.easter_egg(),
            state.subscribe("easter-egg"),
        )
    });

    if !schedule::after(duration, &token).await {
        return false;
    }
    page.update_state(|state| state.easter_egg.deactivate());
    token.cancel();
    true
}

/// Run one server-status check. Returns the unit taken offline, if any.
pub fn check_servers<P: PageHandle>(page: &P) -> Option<usize> {
    if page.with_state(|state| state.servers.units().is_empty()) {
        return None;
    }
    page.update_state(|state| state.servers.check())
}

/// Bring unit `index` back after the configured offline time.
///
/// Returns `false` if `token` was cancelled first.
pub async fn restore_unit<P: PageHandle>(
    page: &P,
    index: usize,
    token: &CancellationToken,
) -> bool {
    let offline = page.with_state(|state| state.config.server_status.offline_for());
    if !schedule::after(offline, token).await {
        return false;
    }
    page.update_state(|state| state.servers.restore(index));
    true
}
