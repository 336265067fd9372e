//! Server Dashboard Component
//!
//! The hero illustration: a rack of service units with status LEDs, three
//! live gauges and a clock. All values are simulated.

use dioxus::prelude::*;
use fortress_core::header::parallax_transform;
use fortress_core::GaugeReading;

use crate::context::use_page;

/// Hero rack with gauges and clock
#[component]
pub fn ServerDashboard() -> Element {
    let page = use_page();

    let (units, readings) = {
        let state = page.state.read();
        (state.servers.units().to_vec(), state.metrics.readings())
    };
    let clock = page.clock.read().clone();
    let transform = parallax_transform(*page.parallax.read());

    rsx! {
        div { class: "server-dashboard", style: "{transform}",
            div { class: "dashboard-header",
                span { class: "dashboard-title", "fortress.local" }
                span { id: "current-time", class: "dashboard-clock", "{clock}" }
            }

            div { class: "server-rack",
                for unit in units {
                    div { key: "{unit.name}", class: "server-unit",
                        span { class: unit.led_class() }
                        span { class: "unit-name", "{unit.name}" }
                        span { class: "unit-state",
                            if unit.led_active { "running" } else { "restarting" }
                        }
                    }
                }
            }

            div { class: "metrics",
                for reading in readings {
                    Metric { reading }
                }
            }
        }
    }
}

/// One gauge bar with its label
#[component]
fn Metric(reading: GaugeReading) -> Element {
    rsx! {
        div { class: "metric",
            div { class: "metric-head",
                span { class: "metric-name", "{reading.name}" }
                span { class: "metric-value", "{reading.label}" }
            }
            div { class: "metric-bar",
                div { class: "metric-fill", style: "width: {reading.width};" }
            }
        }
    }
}
