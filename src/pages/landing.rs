//! Landing page - the HP Fortress showcase.
//!
//! One long scrolling page. The page container owns the scroll, resize and
//! keyboard listeners; everything below it just renders state.

use dioxus::prelude::*;
use fortress_core::links::MAIN_ID;
use fortress_core::page::{press_key, settle_resize};
use fortress_core::GroupKind;

use crate::components::{
    AnchorLink, CodeBlock, ExternalLink, FortressModeToast, RevealSection, ServerDashboard,
    SiteHeader, SkipLink, StaggerItem,
};
use crate::content::{ARCHITECTURE, CHALLENGES, FEATURES, FOOTER_LINKS, SNIPPETS, STATS};
use crate::context::use_page;
use crate::viewport::{request_frame, run_frame, ROOT_ID};

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let page = use_page();

    let (egg_active, page_style) = {
        let state = page.state.read();
        (state.easter_egg.is_active(), state.easter_egg.page_style())
    };

    rsx! {
        div {
            id: ROOT_ID,
            class: "page-root",
            tabindex: "0",
            style: "{page_style}",

            onmounted: move |e: MountedEvent| {
                let element = e.data();
                let mut refs = page.refs;
                refs.write().root = Some(element.clone());
                spawn(async move {
                    let _ = element.set_focus(true).await;
                    // Sections already on screen reveal without waiting for a scroll
                    run_frame(page).await;
                });
            },
            onscroll: move |_| request_frame(page),
            onresize: move |e: Event<ResizeData>| {
                if let Ok(size) = e.get_border_box_size() {
                    spawn(async move {
                        settle_resize(&page, size.width).await;
                    });
                }
            },
            // Escape closes the menu; the konami code starts fortress mode
            onkeydown: move |e: KeyboardEvent| {
                let key = e.key().to_string();
                spawn(async move {
                    press_key(&page, &key).await;
                });
            },

            SkipLink {}
            SiteHeader {}

            main { id: MAIN_ID,
                Hero {}
                Features {}
                Architecture {}
                Stats {}
                Challenges {}
                Setup {}
            }

            Footer {}

            if egg_active {
                FortressModeToast {}
            }
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        RevealSection { id: "hero", class: "hero",
            div { class: "hero-copy",
                span { class: "eyebrow", "Self-hosted since day one" }
                h1 { class: "hero-title",
                    "Your data. "
                    span { class: "accent", "Your fortress." }
                }
                p { class: "hero-text",
                    "A refurbished HP desktop turned into a quiet, always-on home server: "
                    "cloud storage, media, DNS filtering and home automation under one roof."
                }
                div { class: "hero-actions",
                    AnchorLink { class: "btn btn-primary", href: "#setup", "Build your own" }
                    AnchorLink { class: "btn btn-ghost", href: "#architecture", "See the stack" }
                }
            }
            ServerDashboard {}
        }
    }
}

#[component]
fn Features() -> Element {
    rsx! {
        RevealSection { id: "features",
            h2 { class: "section-title", "What it runs" }
            div { class: "feature-grid",
                for (index, card) in FEATURES.iter().enumerate() {
                    StaggerItem { key: "{index}", section: "features", kind: GroupKind::FeatureCards, index,
                        div { class: "card-icon", "{card.icon}" }
                        h3 { "{card.title}" }
                        p { "{card.body}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Architecture() -> Element {
    rsx! {
        RevealSection { id: "architecture",
            h2 { class: "section-title", "Architecture" }
            div { class: "arch-grid",
                for (index, card) in ARCHITECTURE.iter().enumerate() {
                    StaggerItem { key: "{index}", section: "architecture", kind: GroupKind::ArchitectureCards, index,
                        div { class: "card-icon", "{card.icon}" }
                        h3 { "{card.title}" }
                        p { "{card.body}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Stats() -> Element {
    rsx! {
        RevealSection { id: "stats", class: "stats-section",
            h2 { class: "section-title", "By the numbers" }
            div { class: "stats-grid",
                for (index, stat) in STATS.iter().enumerate() {
                    StaggerItem { key: "{index}", section: "stats", kind: GroupKind::StatBoxes, index,
                        div { class: "stat-value", "{stat.value}" }
                        div { class: "stat-label", "{stat.label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Challenges() -> Element {
    rsx! {
        RevealSection { id: "challenges",
            h2 { class: "section-title", "Challenges solved" }
            div { class: "challenge-list",
                for (index, challenge) in CHALLENGES.iter().enumerate() {
                    StaggerItem { key: "{index}", section: "challenges", kind: GroupKind::Challenges, index,
                        h3 { "{challenge.problem}" }
                        p { "{challenge.solution}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Setup() -> Element {
    rsx! {
        RevealSection { id: "setup",
            h2 { class: "section-title", "Setup" }
            for snippet in SNIPPETS.iter() {
                CodeBlock { key: "{snippet.title}", title: snippet.title, code: snippet.code }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            p { "HP Fortress · built on recycled hardware" }
            nav { class: "footer-links",
                for link in FOOTER_LINKS.iter() {
                    if link.href.starts_with('#') {
                        AnchorLink { href: link.href, "{link.label}" }
                    } else {
                        ExternalLink { href: link.href, label: link.label, new_tab: link.new_tab }
                    }
                }
            }
        }
    }
}
