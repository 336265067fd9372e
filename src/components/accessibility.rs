//! Skip link and external link affordances.

use dioxus::prelude::*;
use fortress_core::links::{decorate, skip_link_style, EXTERNAL_INDICATOR, MAIN_ID, SKIP_LINK_TEXT};

/// "Skip to main content", first focusable element on the page.
///
/// Sits off-screen until it receives keyboard focus.
#[component]
pub fn SkipLink() -> Element {
    let mut focused = use_signal(|| false);
    let style = skip_link_style(focused());

    rsx! {
        a {
            class: "skip-link",
            href: "#{MAIN_ID}",
            style: "{style}",
            onfocus: move |_| focused.set(true),
            onblur: move |_| focused.set(false),
            "{SKIP_LINK_TEXT}"
        }
    }
}

/// Link that may leave the page; decorated with ↗ and a safe `rel`.
#[component]
pub fn ExternalLink(href: &'static str, label: &'static str, new_tab: bool) -> Element {
    let target = new_tab.then_some("_blank");
    let decoration = decorate(href, target, false);

    rsx! {
        a {
            href: "{href}",
            target: target,
            rel: decoration.rel,
            "{label}"
            if decoration.indicator {
                span { class: "external-icon", style: "font-size: 0.875em;", "{EXTERNAL_INDICATOR}" }
            }
        }
    }
}
