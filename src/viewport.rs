//! Bridges live element geometry into the core state machines.
//!
//! Scroll events only mark a frame as pending; the frame itself measures the
//! page once, updates the header, and feeds every still-observed section to
//! the reveal controller.

use std::rc::Rc;

use dioxus::prelude::*;
use fortress_core::scroll::{anchor_target, target_offset};
use fortress_core::{ItemPhase, PageHandle, SectionGeometry, SectionId};

use crate::context::PageContext;

/// Id of the scrolling page container.
pub const ROOT_ID: &str = "page-root";

/// Current scroll offset and viewport height of the page container.
async fn measure_root(root: &Rc<MountedData>) -> Option<(f64, f64, f64)> {
    let offset = root.get_scroll_offset().await.ok()?;
    let rect = root.get_client_rect().await.ok()?;
    Some((offset.y, rect.origin.y, rect.size.height))
}

/// Called from scroll events. Schedules at most one frame at a time.
///
/// Raw events only touch the input gates, so a burst of them renders nothing.
pub fn request_frame(page: PageContext) {
    if !page.with_gates(|gates| gates.scroll_frames.push(())) {
        return;
    }

    let frame = page.with_state(|state| state.config.timing.frame());
    spawn(async move {
        tokio::time::sleep(frame).await;
        if page.with_gates(|gates| gates.scroll_frames.take()).is_some() {
            run_frame(page).await;
        }
    });
}

/// Measure once and apply everything that depends on scroll position.
///
/// The page state is only written when the header crosses its threshold or a
/// section reveals.
pub async fn run_frame(page: PageContext) {
    let PageContext {
        refs,
        mut phases,
        mut parallax,
        ..
    } = page;

    let Some(root) = refs.peek().root.clone() else {
        return;
    };
    let Some((scroll_y, root_top, viewport_height)) = measure_root(&root).await else {
        return;
    };

    if page.with_state(|state| state.header.crosses(scroll_y)) {
        page.update_state(|state| state.header.on_scroll(scroll_y));
    }
    let offset = page.with_state(|state| state.header.parallax_offset(scroll_y, viewport_height));
    if let Some(offset) = offset.filter(|offset| *parallax.peek() != *offset) {
        parallax.set(offset);
    }

    let observed: Vec<SectionId> =
        page.with_state(|state| state.reveal.observed().cloned().collect());
    let mut signals = Vec::new();
    for id in observed {
        let element = refs.peek().sections.get(&id).cloned();
        let Some(element) = element else {
            continue;
        };
        if let Ok(rect) = element.get_client_rect().await {
            let geometry = SectionGeometry::new(rect.origin.y - root_top, rect.size.height);
            if page.with_state(|state| state.reveal.is_intersecting(geometry, viewport_height)) {
                signals.push((id, geometry));
            }
        }
    }
    if signals.is_empty() {
        return;
    }

    let outcomes = page.update_state(|state| state.reveal.observe_all(signals, viewport_height));
    for outcome in outcomes {
        let Some(plan) = outcome.stagger else {
            continue;
        };
        let section = outcome.id;
        phases.write().insert(section.clone(), vec![ItemPhase::Hidden; plan.len]);

        let token = page.update_state(|state| state.subscribe("stagger"));
        spawn(async move {
            plan.play(&token, |index, phase| {
                if let Some(items) = phases.write().get_mut(&section) {
                    items[index] = phase;
                }
            })
            .await;
            token.cancel();
        });
    }
}

/// Smooth-scroll to the section an anchor points at.
///
/// Returns `false` when the href is not a same-page anchor or the target is
/// unknown, so the caller can let the click through.
pub fn scroll_to_anchor(page: PageContext, href: &str) -> bool {
    let Some(target) = anchor_target(href) else {
        return false;
    };
    let id = SectionId::new(target);
    let (Some(root), Some(element)) = (
        page.refs.read().root.clone(),
        page.refs.read().sections.get(&id).cloned(),
    ) else {
        return false;
    };
    let header = page.refs.read().header.clone();

    page.update_state(|state| state.location.push(href));

    spawn(async move {
        let Some((scroll_y, root_top, _)) = measure_root(&root).await else {
            return;
        };
        let Ok(rect) = element.get_client_rect().await else {
            return;
        };
        let header_height = match header {
            Some(header) => header.get_client_rect().await.ok().map(|r| r.size.height),
            None => None,
        };
        let header_height = page.with_state(|state| state.header.offset_height(header_height));

        let top = target_offset(rect.origin.y - root_top, scroll_y, header_height);
        tracing::debug!(section = %id, top, "Smooth scroll");

        let script = format!(
            "document.getElementById('{ROOT_ID}')?.scrollTo({{ top: {top}, behavior: 'smooth' }});"
        );
        let _ = document::eval(&script);
    });
    true
}
