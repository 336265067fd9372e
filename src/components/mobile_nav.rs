//! Mobile Menu Toggle
//!
//! Hamburger button for narrow screens (< 768px). Turns into an X while
//! the menu is open.

use dioxus::prelude::*;
use fortress_core::MenuState;

use crate::context::use_page;

/// Hamburger toggle for the nav links
#[component]
pub fn MenuToggle() -> Element {
    let page = use_page();

    let (open, bars) = {
        let state = page.state.read();
        (state.menu.is_open(), state.menu.icon_bars())
    };

    rsx! {
        button {
            r#type: "button",
            class: "mobile-menu-toggle",
            "aria-label": if open { "Close menu" } else { "Open menu" },
            "aria-expanded": "{open}",
            onclick: move |_| {
                let mut state = page.state;
                let next = state.write().menu.toggle();
                tracing::debug!(open = next == MenuState::Open, "Menu toggled");
            },

            for bar in bars {
                span { style: "{bar}" }
            }
        }
    }
}
