use dioxus::prelude::*;
use fortress_core::page::{check_servers, restore_unit};
use fortress_core::schedule;
use fortress_core::AppState;

use crate::content;
use crate::context::PageContext;
use crate::launch_options;
use crate::pages::Landing;
use crate::theme::{GLOBAL_STYLES, INJECTED_STYLES};

/// Root application component.
///
/// Owns the page state, starts every timer once and tears them all down when
/// the page goes away.
#[component]
pub fn App() -> Element {
    let page = use_context_provider(|| {
        let options = launch_options();
        let mut state = AppState::new(options.config, content::server_units(), options.seed);
        state.attach_sections(content::sections());
        PageContext::new(state)
    });

    // Start timers on mount. Reads use peek so the effect never re-runs.
    use_effect(move || {
        let PageContext {
            mut state,
            mut clock,
            ..
        } = page;

        let options = launch_options();
        tracing::info!(
            "Page load performance: first render after {}ms",
            options.started.elapsed().as_millis()
        );

        let metrics_token = state.write().metrics.start();
        if let Some(token) = metrics_token {
            let period = state.peek().config.metrics.period();
            spawn(schedule::every(period, token, move || {
                state.write().metrics.tick();
            }));
        }

        let token = state.write().subscribe("clock");
        let period = state.peek().config.timing.clock_period();
        spawn(schedule::every(period, token, move || {
            clock.set(fortress_core::clock::now_label());
        }));

        let token = state.write().subscribe("server-status");
        let period = state.peek().config.server_status.check_period();
        spawn(schedule::every(period, token.clone(), move || {
            let Some(index) = check_servers(&page) else {
                return;
            };
            let token = token.clone();
            spawn(async move {
                restore_unit(&page, index, &token).await;
            });
        }));

        tracing::info!("🏰 HP Fortress dashboard initialized");
    });

    use_drop(move || {
        let mut state = page.state;
        if let Ok(mut state) = state.try_write() {
            state.teardown();
        };
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {INJECTED_STYLES} }
        Landing {}
    }
}
