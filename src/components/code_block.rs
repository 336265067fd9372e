//! Code Block Component
//!
//! Preformatted snippet with a hover "Copy" button.

use dioxus::prelude::*;
use fortress_core::copy::{copy_text, show_feedback};
use fortress_core::links::aria_label;
use fortress_core::CopyFeedback;

use crate::clipboard::SystemClipboard;
use crate::context::use_page;

/// Snippet with copy-to-clipboard
///
/// The button shows "✓ Copied!" for a couple of seconds after a successful
/// copy. Failures are logged and the label stays as it was.
#[component]
pub fn CodeBlock(title: &'static str, code: &'static str) -> Element {
    let page = use_page();
    let mut hovered = use_signal(|| false);
    let mut feedback = use_signal(CopyFeedback::default);

    let copy = move |_| {
        let confirm = page.state.peek().config.timing.copy_confirm();
        spawn(async move {
            let result = match SystemClipboard::open() {
                Ok(mut clipboard) => copy_text(&mut clipboard, code),
                Err(e) => {
                    tracing::warn!("Failed to copy: {}", e);
                    CopyFeedback::Idle
                }
            };
            show_feedback(result, confirm, |shown| feedback.set(shown)).await;
        });
    };

    let label = feedback().label();
    let opacity = if hovered() { 1 } else { 0 };

    rsx! {
        div { class: "code-block",
            div { class: "code-title", "{title}" }
            pre {
                onmouseenter: move |_| hovered.set(true),
                onmouseleave: move |_| hovered.set(false),

                code { "{code}" }
                button {
                    r#type: "button",
                    class: "copy-button",
                    style: "opacity: {opacity};",
                    "aria-label": aria_label(None, label),
                    onclick: copy,
                    "{label}"
                }
            }
        }
    }
}
