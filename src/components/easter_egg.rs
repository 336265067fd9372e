//! Fortress mode overlay.

use dioxus::prelude::*;
use fortress_core::easter_egg::{RAINBOW_KEYFRAMES, TOAST_MESSAGE};

const TOAST_STYLE: &str = "position: fixed; top: 50%; left: 50%; \
    transform: translate(-50%, -50%); background: var(--accent-gradient); color: white; \
    padding: 2rem 3rem; border-radius: 20px; font-size: 2rem; font-weight: 900; \
    z-index: 10000; box-shadow: 0 20px 60px rgba(0, 0, 0, 0.5); \
    animation: pulse 0.5s ease infinite;";

/// Centered toast plus the keyframes that drive the color cycle
#[component]
pub fn FortressModeToast() -> Element {
    rsx! {
        style { {RAINBOW_KEYFRAMES} }
        div { class: "fortress-toast", role: "status", style: TOAST_STYLE, "{TOAST_MESSAGE}" }
    }
}
