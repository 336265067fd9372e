//! Site Header Component
//!
//! Fixed header with logo, section links and the mobile menu toggle.
//! Picks up the `scrolled` presentation once the page scrolls past the
//! header threshold.

use dioxus::prelude::*;

use crate::components::mobile_nav::MenuToggle;
use crate::content::NAV_ITEMS;
use crate::context::use_page;
use crate::viewport::scroll_to_anchor;

/// Site header
///
/// - Left: "HP Fortress" logo (links back to the hero)
/// - Center: section links (a dropdown column on narrow screens)
/// - Right: hamburger toggle, hidden on desktop via CSS
#[component]
pub fn SiteHeader() -> Element {
    let page = use_page();

    let (class, nav_style) = {
        let state = page.state.read();
        (state.header.class(), state.menu.layout().inline_style())
    };

    rsx! {
        header {
            class: "{class}",
            onmounted: move |e: MountedEvent| {
                let mut refs = page.refs;
                refs.write().header = Some(e.data());
            },

            div { class: "header-inner",
                AnchorLink { class: "logo", href: "#hero",
                    span { class: "logo-icon", "🏰" }
                    span { class: "logo-text", "HP Fortress" }
                }

                nav { class: "nav-links", style: "{nav_style}",
                    for item in NAV_ITEMS.iter() {
                        AnchorLink { class: "nav-link", href: item.href, "{item.label}" }
                    }
                }

                MenuToggle {}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct AnchorLinkProps {
    /// Same-page target, e.g. `#features`
    pub href: &'static str,
    #[props(default = "")]
    pub class: &'static str,
    pub children: Element,
}

/// Same-page link with smooth scrolling.
///
/// Activating it also closes the mobile menu if it is open.
#[component]
pub fn AnchorLink(props: AnchorLinkProps) -> Element {
    let page = use_page();
    let href = props.href;

    rsx! {
        a {
            class: "{props.class}",
            href: "{href}",
            onclick: move |e: MouseEvent| {
                if scroll_to_anchor(page, href) {
                    e.prevent_default();
                }
                let mut state = page.state;
                state.write().menu.on_nav_link();
            },
            {props.children}
        }
    }
}
