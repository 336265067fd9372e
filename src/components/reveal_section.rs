//! Scroll-revealed sections and their staggered items.

use dioxus::prelude::*;
use fortress_core::{GroupKind, SectionId};

use crate::context::use_page;

#[derive(Props, Clone, PartialEq)]
pub struct RevealSectionProps {
    /// Element id; also the anchor target
    pub id: &'static str,
    /// Extra classes besides `section`
    #[props(default = "")]
    pub class: &'static str,
    pub children: Element,
}

/// Page section that fades in the first time it scrolls into view.
///
/// Registers its element on mount so scroll frames can measure it.
#[component]
pub fn RevealSection(props: RevealSectionProps) -> Element {
    let page = use_page();
    let id = props.id;

    let revealed = page.state.read().reveal.is_revealed(&SectionId::new(id));
    let class = section_class(props.class, revealed);

    rsx! {
        section {
            id: "{id}",
            class: "{class}",
            onmounted: move |e: MountedEvent| {
                let mut refs = page.refs;
                refs.write().sections.insert(SectionId::new(id), e.data());
            },
            {props.children}
        }
    }
}

fn section_class(extra: &str, revealed: bool) -> String {
    let mut class = String::from("section");
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    if revealed {
        class.push_str(" fade-in");
    }
    class
}

#[derive(Props, Clone, PartialEq)]
pub struct StaggerItemProps {
    /// Section the item's group belongs to
    pub section: &'static str,
    pub kind: GroupKind,
    pub index: usize,
    pub children: Element,
}

/// One item of a staggered group (stat box, card, challenge).
#[component]
pub fn StaggerItem(props: StaggerItemProps) -> Element {
    let page = use_page();
    let phase = page.item_phase(&SectionId::new(props.section), props.index);
    let style = phase.inline_style(props.kind);

    rsx! {
        div { class: props.kind.item_class(), style: "{style}",
            {props.children}
        }
    }
}
